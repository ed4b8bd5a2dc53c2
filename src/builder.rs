use crate::{
    error::{EpcError, EpcResult},
    types::{Currency, Encoding, Version},
};

// EpcBuilder
//------------------------------------------------------------------------------

#[derive(Debug, Default, Clone, PartialEq)]
pub struct EpcBuilder {
    version: Version,
    encoding: Encoding,
    currency: Currency,
    bic: Option<String>,
    recipient: Option<String>,
    iban: Option<String>,
    payment_amount: Option<f64>,
    purpose_code: Option<String>,
    structured_reference: Option<String>,
    purpose_text: Option<String>,
    note: Option<String>,
}

impl EpcBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn with_version_label(self, label: &str) -> EpcResult<Self> {
        Ok(self.with_version(Version::from_label(label)?))
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_encoding_code(self, code: u8) -> EpcResult<Self> {
        Ok(self.with_encoding(Encoding::from_code(code)?))
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn with_currency_label(self, label: &str) -> EpcResult<Self> {
        Ok(self.with_currency(Currency::from_label(label)?))
    }

    // Stored verbatim, no format check.
    pub fn with_bic(mut self, bic: &str) -> Self {
        self.bic = Some(bic.to_string());
        self
    }

    pub fn with_recipient(mut self, recipient: &str) -> EpcResult<Self> {
        assert_length("recipient", recipient, 70)?;
        self.recipient = Some(recipient.to_string());
        Ok(self)
    }

    // Surrounding whitespace and embedded spaces are stripped; no checksum
    // or country-format validation beyond that.
    pub fn with_iban(mut self, iban: &str) -> Self {
        self.iban = Some(iban.trim().replace(' ', ""));
        self
    }

    pub fn with_payment_amount(mut self, payment_amount: f64) -> Self {
        self.payment_amount = Some(payment_amount);
        self
    }

    pub fn with_purpose_code(self, _purpose_code: &str) -> EpcResult<Self> {
        Err(EpcError::Unsupported("purposeCode"))
    }

    pub fn with_reference(self, _reference: &str) -> EpcResult<Self> {
        Err(EpcError::Unsupported("structured reference"))
    }

    pub fn with_purpose_text(mut self, purpose_text: &str) -> EpcResult<Self> {
        assert_length("purposeText", purpose_text, 140)?;
        self.purpose_text = Some(purpose_text.to_string());
        Ok(self)
    }

    // Reuses the recipient length rule, so an empty note is rejected rather
    // than clearing the field.
    pub fn with_note(mut self, note: &str) -> EpcResult<Self> {
        assert_length("note", note, 70)?;
        self.note = Some(note.to_string());
        Ok(self)
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn build(&self) -> EpcResult<String> {
        // Version 001 requires the BIC; everything else is checked in a
        // fixed order so the first missing field is the one reported.
        if self.version == Version::V001 && self.bic.is_none() {
            return Err(EpcError::BicRequired);
        }
        let recipient = required("recipient", &self.recipient)?;
        let iban = required("iban", &self.iban)?;
        let payment_amount = *required("paymentAmount", &self.payment_amount)?;
        let purpose_text = required("purposeText", &self.purpose_text)?;

        let amount_line =
            format!("{}{}", self.currency.label(), format_amount(payment_amount));

        let mut out = String::new();
        let mut push_line = |value: &str| {
            out.push_str(value);
            out.push('\n');
        };
        // 1 - service tag
        push_line("BCD");
        // 2 - version
        push_line(self.version.label());
        // 3 - encoding
        push_line(&self.encoding.code().to_string());
        // 4 - identification
        push_line("SCT");
        // 5 - BIC
        push_line(self.bic.as_deref().map_or("", str::trim));
        // 6 - recipient
        push_line(recipient.trim());
        // 7 - IBAN
        push_line(iban.trim());
        // 8 - currency + amount
        push_line(&amount_line);
        // 9 - purpose code
        push_line(self.purpose_code.as_deref().map_or("", str::trim));
        // 10 - structured reference
        push_line(self.structured_reference.as_deref().map_or("", str::trim));
        // 11 - purpose text
        push_line(purpose_text.trim());
        // 12 - note
        push_line(self.note.as_deref().map_or("", str::trim));

        Ok(out)
    }
}

fn assert_length(field: &'static str, value: &str, max: usize) -> EpcResult<()> {
    let len = value.chars().count();
    if len == 0 || len > max {
        return Err(EpcError::InvalidLength { field, value: value.to_string(), max });
    }
    Ok(())
}

fn required<'a, T>(field: &'static str, value: &'a Option<T>) -> EpcResult<&'a T> {
    value.as_ref().ok_or(EpcError::MissingField(field))
}

// Reproduces "#.##" formatting on a double: round to two fractional digits,
// then strip trailing zeros and a bare decimal point.
fn format_amount(amount: f64) -> String {
    let rounded = format!("{amount:.2}");
    rounded.trim_end_matches('0').trim_end_matches('.').to_string()
}
