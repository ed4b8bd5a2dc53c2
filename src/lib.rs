//! # epc-qr
//!
//! Builds the EPC (European Payments Council) plain-text payload used in
//! SEPA credit-transfer QR codes, validates the payment fields against the
//! EPC field rules, and renders the payload as a QR code image.
//!
//! ## Features
//!
//! - **Payload building**: fluent [`EpcBuilder`] with the EPC defaults
//!   (version 002, UTF-8, EUR), per-field validation at set time and
//!   cross-field validation at [`EpcBuilder::build`] time
//! - **Byte-exact serialization**: the 12-line, newline-terminated EPC
//!   record expected by banking apps
//! - **QR rendering**: in-memory ([`Base64ImageGenerator`]) or to a file
//!   ([`ImageFileGenerator`]), both backed by a pluggable
//!   [`QrImageRenderer`]
//!
//! ## Quick Start
//!
//! ### Building a payload
//!
//! ```rust
//! use epc_qr::EpcBuilder;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let text = EpcBuilder::new()
//!     .with_recipient("Max Mustermann")?
//!     .with_iban("GB33 BUKB 2020 1555 555555")
//!     .with_payment_amount(48.81)
//!     .with_purpose_text("Test")?
//!     .build()?;
//!
//! assert_eq!(
//!     text,
//!     "BCD\n002\n1\nSCT\n\nMax Mustermann\nGB33BUKB20201555555555\nEUR48.81\n\n\nTest\n\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering a QR code
//!
//! ```rust,no_run
//! use epc_qr::{Base64ImageGenerator, EpcBuilder, ImageFileGenerator};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let builder = EpcBuilder::new()
//!     .with_recipient("Max Mustermann")?
//!     .with_iban("GB33BUKB20201555555555")
//!     .with_payment_amount(48.81)
//!     .with_purpose_text("Test")?;
//!
//! // Base64-encoded PNG, 300x300 unless configured otherwise
//! let base64 = Base64ImageGenerator::new().generate(&builder)?;
//!
//! // Or written to a file
//! let path = ImageFileGenerator::new()
//!     .with_width(400)
//!     .with_height(400)
//!     .with_output_file("payment.png")
//!     .generate(&builder)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Payload layout
//!
//! Twelve lines in fixed order: `BCD`, version label, encoding code, `SCT`,
//! BIC (empty unless set, mandatory for version 001), recipient, IBAN,
//! currency label plus amount (`EUR48.81`), purpose code (unsupported,
//! always empty), structured reference (unsupported, always empty), purpose
//! text, note. Amounts are formatted with at most two fractional digits and
//! no trailing zeros, so `48.80` serializes as `48.8` and `48.00` as `48`.
//!
//! ## Errors
//!
//! Every failure is an [`EpcError`]: invalid or unknown field values at set
//! time, missing fields at build time, and rendering failures wrapping the
//! underlying cause.

pub mod builder;
pub mod error;
pub mod render;
pub mod types;

pub use builder::EpcBuilder;
pub use error::{EpcError, EpcResult};
pub use render::{
    Base64ImageGenerator, ImageFileGenerator, QrCodeRenderer, QrImageRenderer, RenderOptions,
};
pub use types::{Currency, Encoding, ImageFormat, Version};
