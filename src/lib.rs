use crate::encoding::Encoding;

pub mod algorithm;
pub mod cipher;
pub mod crypt;
pub mod encoding;
pub mod values;

pub use crate::crypt::{decrypt, encrypt};
pub use crate::crypt::{CryptOptions, DecryptOptions, DecryptResult, EncryptResult};

/// Length of the canonical IV string, in hexadecimal characters. The cipher receives the
/// string's ASCII bytes, so this is also the IV length in bytes.
pub const IV_LEN: usize = 16;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Algorithm `{0}` is not supported")]
    UnsupportedAlgorithm(String),

    #[error("Encoding `{0}` is not supported")]
    UnsupportedEncoding(String),

    #[error("The secret must be {0} bytes long, got {1}")]
    InvalidKeyLength(usize, usize),

    #[error("The IV must be {IV_LEN} hexadecimal characters")]
    InvalidIv,

    #[error("The payload is not valid {0}")]
    Decode(Encoding),

    #[error("The payload cannot be encoded as {0}")]
    Encode(Encoding),

    #[error("Could not decrypt the payload")]
    Decrypt,

    #[error("The decrypted payload is not valid JSON")]
    JsonParse(#[source] serde_json::Error),
}
