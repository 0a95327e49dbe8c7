use crate::cipher::aes::AesCbc;
use crate::cipher::EncDec;
use crate::values::secret::CipherSecret;
use crate::{Error, IV_LEN};
use aes::{Aes128, Aes192, Aes256};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The list of cipher algorithms available to encrypt the payload.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub enum Algorithm {
    /// AES-CBC with a 128-bits key
    Aes128Cbc,
    /// AES-CBC with a 192-bits key
    Aes192Cbc,
    /// AES-CBC with a 256-bits key
    #[default]
    Aes256Cbc,
}

impl Algorithm {
    /// The secret length required by the algorithm, in bytes.
    pub fn key_len(&self) -> usize {
        match self {
            Algorithm::Aes128Cbc => 16,
            Algorithm::Aes192Cbc => 24,
            Algorithm::Aes256Cbc => 32,
        }
    }

    pub(crate) fn cipher<'sec>(
        &self,
        secret: &'sec CipherSecret,
        iv: &str,
    ) -> Result<Box<dyn EncDec + 'sec>, Error> {
        let iv = parse_iv(iv)?;

        match self {
            Algorithm::Aes128Cbc => Ok(Box::new(AesCbc::<Aes128>::new(secret, iv)?)),
            Algorithm::Aes192Cbc => Ok(Box::new(AesCbc::<Aes192>::new(secret, iv)?)),
            Algorithm::Aes256Cbc => Ok(Box::new(AesCbc::<Aes256>::new(secret, iv)?)),
        }
    }
}

/// Validates the canonical IV representation and returns the bytes fed to the cipher: the
/// ASCII bytes of the hex string itself, not its decoded value.
fn parse_iv(iv: &str) -> Result<[u8; IV_LEN], Error> {
    let bytes = iv.as_bytes();

    if bytes.len() != IV_LEN || !bytes.iter().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidIv);
    }

    let mut out = [0u8; IV_LEN];
    out.copy_from_slice(bytes);
    Ok(out)
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aes-128-cbc" => Ok(Algorithm::Aes128Cbc),
            "aes-192-cbc" => Ok(Algorithm::Aes192Cbc),
            "aes-256-cbc" => Ok(Algorithm::Aes256Cbc),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Algorithm::Aes128Cbc => write!(f, "aes-128-cbc"),
            Algorithm::Aes192Cbc => write!(f, "aes-192-cbc"),
            Algorithm::Aes256Cbc => write!(f, "aes-256-cbc"),
        }
    }
}
