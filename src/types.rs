use crate::error::{EpcError, EpcResult};

// Version
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Version {
    V001,
    #[default]
    V002,
}

impl Version {
    pub const fn label(self) -> &'static str {
        match self {
            Self::V001 => "001",
            Self::V002 => "002",
        }
    }

    pub fn from_label(label: &str) -> EpcResult<Self> {
        match label {
            "001" => Ok(Self::V001),
            "002" => Ok(Self::V002),
            _ => Err(EpcError::VersionNotFound(label.to_string())),
        }
    }
}

// Encoding
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Encoding {
    #[default]
    Utf8 = 1,
    Iso8859_1 = 2,
    Iso8859_2 = 3,
    Iso8859_4 = 4,
    Iso8859_5 = 5,
    Iso8859_7 = 6,
    Iso8859_15 = 8,
}

impl Encoding {
    // Wire value written into line 3 of the payload.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn charset_name(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Iso8859_1 => "ISO-8859-1",
            Self::Iso8859_2 => "ISO-8859-2",
            Self::Iso8859_4 => "ISO-8859-4",
            Self::Iso8859_5 => "ISO-8859-5",
            Self::Iso8859_7 => "ISO-8859-7",
            Self::Iso8859_15 => "ISO-8859-15",
        }
    }

    pub fn charset(self) -> &'static encoding_rs::Encoding {
        match self {
            Self::Utf8 => encoding_rs::UTF_8,
            // encoding_rs follows WHATWG, which maps the ISO-8859-1 label to
            // the byte-compatible windows-1252 encoder.
            Self::Iso8859_1 => encoding_rs::WINDOWS_1252,
            Self::Iso8859_2 => encoding_rs::ISO_8859_2,
            Self::Iso8859_4 => encoding_rs::ISO_8859_4,
            Self::Iso8859_5 => encoding_rs::ISO_8859_5,
            Self::Iso8859_7 => encoding_rs::ISO_8859_7,
            Self::Iso8859_15 => encoding_rs::ISO_8859_15,
        }
    }

    pub fn from_code(code: u8) -> EpcResult<Self> {
        match code {
            1 => Ok(Self::Utf8),
            2 => Ok(Self::Iso8859_1),
            3 => Ok(Self::Iso8859_2),
            4 => Ok(Self::Iso8859_4),
            5 => Ok(Self::Iso8859_5),
            6 => Ok(Self::Iso8859_7),
            8 => Ok(Self::Iso8859_15),
            // 7 (ISO-8859-10) is reserved and unsupported
            _ => Err(EpcError::EncodingNotFound(code)),
        }
    }
}

// Currency
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum Currency {
    #[default]
    Eur,
}

impl Currency {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Eur => "EUR",
        }
    }

    pub fn from_label(label: &str) -> EpcResult<Self> {
        match label {
            "EUR" => Ok(Self::Eur),
            _ => Err(EpcError::CurrencyNotFound(label.to_string())),
        }
    }
}

// Image format
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum ImageFormat {
    Bmp,
    Tif,
    Pnm,
    Pcx,
    #[default]
    Png,
    Gif,
    Jpg,
}

impl ImageFormat {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Tif => "tif",
            Self::Pnm => "pnm",
            Self::Pcx => "pcx",
            Self::Png => "png",
            Self::Gif => "gif",
            Self::Jpg => "jpg",
        }
    }
}
