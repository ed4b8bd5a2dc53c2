use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use test_case::test_case;

use epc_qr::{
    Base64ImageGenerator, Encoding, EpcBuilder, EpcError, EpcResult, ImageFileGenerator,
    ImageFormat, QrImageRenderer, RenderOptions, Version,
};

fn mustermann() -> EpcBuilder {
    EpcBuilder::new()
        .with_recipient("Max Mustermann")
        .unwrap()
        .with_iban("GB33BUKB20201555555555")
        .with_payment_amount(48.81)
        .with_purpose_text("Test")
        .unwrap()
}

#[test]
fn incomplete_setup_fails() {
    let err = EpcBuilder::new().build().unwrap_err();
    assert_eq!(err, EpcError::MissingField("recipient"));
}

#[test]
fn complete_setup_serializes_byte_exact() {
    let expected = "BCD\n\
                    002\n\
                    1\n\
                    SCT\n\
                    \n\
                    Max Mustermann\n\
                    GB33BUKB20201555555555\n\
                    EUR48.81\n\
                    \n\
                    \n\
                    Test\n\
                    \n";

    assert_eq!(mustermann().build().unwrap(), expected);
}

#[test]
fn build_twice_yields_identical_output() {
    let builder = mustermann();
    assert_eq!(builder.build().unwrap(), builder.build().unwrap());
}

#[test]
fn iban_with_spaces_normalized_in_output() {
    let text = mustermann().with_iban("  GB33 BUKB 2020 1555 555555  ").build().unwrap();
    assert_eq!(text.lines().nth(6), Some("GB33BUKB20201555555555"));
}

#[test_case(48.81, "EUR48.81")]
#[test_case(48.80, "EUR48.8")]
#[test_case(48.00, "EUR48")]
#[test_case(0.1, "EUR0.1")]
fn amount_line_formatting(amount: f64, expected: &str) {
    let text = mustermann().with_payment_amount(amount).build().unwrap();
    assert_eq!(text.lines().nth(7), Some(expected));
}

#[test]
fn v001_requires_bic() {
    let err = mustermann().with_version(Version::V001).build().unwrap_err();
    assert!(err.to_string().contains("BIC"));

    let text = mustermann()
        .with_version(Version::V001)
        .with_bic("BUKBGB22")
        .build()
        .unwrap();
    assert_eq!(text.lines().nth(1), Some("001"));
    assert_eq!(text.lines().nth(4), Some("BUKBGB22"));
}

#[test]
fn base64_generation_produces_decodable_png() {
    let encoded = Base64ImageGenerator::new().generate(&mustermann()).unwrap();
    assert!(!encoded.is_empty());
    assert!(!encoded.contains('\n'));

    let bytes = STANDARD.decode(&encoded).unwrap();
    let img = image::load_from_memory(&bytes).unwrap();
    assert!(img.width() >= 300);
    assert!(img.height() >= 300);
}

#[test]
fn file_generation_writes_regular_file() {
    let output = std::env::temp_dir().join("epc_qr_file_generation_test.png");
    let path = ImageFileGenerator::new()
        .with_output_file(&output)
        .generate(&mustermann())
        .unwrap();

    assert_eq!(path, output);
    assert!(path.is_file());
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn file_generation_respects_format() {
    let output = std::env::temp_dir().join("epc_qr_file_generation_test.bmp");
    let path = ImageFileGenerator::new()
        .with_format(ImageFormat::Bmp)
        .with_output_file(&output)
        .generate(&mustermann())
        .unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    std::fs::remove_file(&path).unwrap();
}

#[test]
fn file_generation_to_unwritable_path_reports_render_failure() {
    let output = Path::new("/nonexistent-epc-qr-dir/out.png");
    let err = ImageFileGenerator::new()
        .with_output_file(output)
        .generate(&mustermann())
        .unwrap_err();
    assert!(err.to_string().starts_with("Failed to generate QR code. Reason:"));
}

struct FakeRenderer;

impl QrImageRenderer for FakeRenderer {
    fn render_to_bytes(&self, text: &str, options: &RenderOptions) -> EpcResult<Vec<u8>> {
        assert_eq!(options.charset, Encoding::Iso8859_15);
        Ok(text.as_bytes().to_vec())
    }
}

#[test]
fn injected_renderer_receives_payload_and_builder_charset() {
    let builder = mustermann().with_encoding(Encoding::Iso8859_15);
    let encoded = Base64ImageGenerator::with_renderer(FakeRenderer)
        .generate(&builder)
        .unwrap();

    let payload = STANDARD.decode(&encoded).unwrap();
    let text = String::from_utf8(payload).unwrap();
    assert_eq!(text.lines().nth(2), Some("8"));
    assert_eq!(text.lines().nth(5), Some("Max Mustermann"));
}

struct EchoRenderer;

impl QrImageRenderer for EchoRenderer {
    fn render_to_bytes(&self, _: &str, _: &RenderOptions) -> EpcResult<Vec<u8>> {
        Ok(vec![42])
    }

    fn render_to_file(
        &self,
        _: &str,
        _: &RenderOptions,
        path: &Path,
    ) -> EpcResult<PathBuf> {
        Ok(path.to_path_buf())
    }
}

#[test]
fn default_output_file_lives_in_temp_dir() {
    let path = ImageFileGenerator::with_renderer(EchoRenderer)
        .generate(&mustermann())
        .unwrap();
    assert_eq!(path, std::env::temp_dir().join("epc.png"));
}
