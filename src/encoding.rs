use crate::Error;
use base64::Engine;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The character/byte encodings payloads can be expressed in, on both the cleartext and
/// the ciphertext sides.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Encoding {
    /// UTF-8 text
    #[default]
    Utf8,
    /// 7-bit ASCII text
    Ascii,
    /// Lowercase hexadecimal
    Hex,
    /// Standard base64 with padding
    Base64,
}

impl Encoding {
    /// Interprets a payload string as raw bytes.
    pub fn decode(&self, payload: &str) -> Result<Vec<u8>, Error> {
        match self {
            Encoding::Utf8 => Ok(payload.as_bytes().to_vec()),
            Encoding::Ascii => {
                if !payload.is_ascii() {
                    return Err(Error::Decode(*self));
                }
                Ok(payload.as_bytes().to_vec())
            }
            Encoding::Hex => hex::decode(payload).map_err(|_| Error::Decode(*self)),
            Encoding::Base64 => base64::engine::general_purpose::STANDARD
                .decode(payload)
                .map_err(|_| Error::Decode(*self)),
        }
    }

    /// Renders raw bytes as a payload string.
    ///
    /// `Utf8` and `Ascii` are strict: bytes that are not valid text in the encoding are an
    /// [`Error::Encode`] rather than being silently replaced.
    pub fn encode(&self, bytes: &[u8]) -> Result<String, Error> {
        match self {
            Encoding::Utf8 => {
                String::from_utf8(bytes.to_vec()).map_err(|_| Error::Encode(*self))
            }
            Encoding::Ascii => {
                if !bytes.is_ascii() {
                    return Err(Error::Encode(*self));
                }
                String::from_utf8(bytes.to_vec()).map_err(|_| Error::Encode(*self))
            }
            Encoding::Hex => Ok(hex::encode(bytes)),
            Encoding::Base64 => Ok(base64::engine::general_purpose::STANDARD.encode(bytes)),
        }
    }
}

impl FromStr for Encoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "ascii" => Ok(Encoding::Ascii),
            "hex" => Ok(Encoding::Hex),
            "base64" => Ok(Encoding::Base64),
            _ => Err(Error::UnsupportedEncoding(s.to_string())),
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Encoding::Utf8 => write!(f, "utf8"),
            Encoding::Ascii => write!(f, "ascii"),
            Encoding::Hex => write!(f, "hex"),
            Encoding::Base64 => write!(f, "base64"),
        }
    }
}
