use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EpcError {
    // Builder
    #[error("{0} must be set")]
    MissingField(&'static str),

    #[error("BIC must be set when using Version 001")]
    BicRequired,

    #[error("value={value} for {field} does not match length 1-{max}")]
    InvalidLength { field: &'static str, value: String, max: usize },

    #[error("{0} not yet supported")]
    Unsupported(&'static str),

    // Lookup
    #[error("Version {0} not found")]
    VersionNotFound(String),

    #[error("Encoding {0} not found")]
    EncodingNotFound(u8),

    #[error("Currency {0} not found")]
    CurrencyNotFound(String),

    // Rendering
    #[error("Failed to generate QR code. Reason: {0}")]
    Render(String),
}

impl EpcError {
    // Wraps an adapter failure, surfacing the innermost cause in the chain.
    pub(crate) fn render_failure(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut root = err;
        while let Some(source) = root.source() {
            root = source;
        }
        Self::Render(root.to_string())
    }
}

pub type EpcResult<T> = Result<T, EpcError>;
