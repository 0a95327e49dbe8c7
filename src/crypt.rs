use crate::algorithm::Algorithm;
use crate::encoding::Encoding;
use crate::values::secret::CipherSecret;
use crate::{Error, IV_LEN};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Options accepted by [`encrypt`].
#[derive(Debug, Clone)]
pub struct CryptOptions {
    /// Cipher used to encrypt the payload
    pub algorithm: Algorithm,
    /// The cleartext payload, usually a stringified JSON object
    pub envs: String,
    /// Encoding used to interpret `envs` as bytes
    pub encoding: Encoding,
    /// Encoding of the produced ciphertext string
    pub input: Encoding,
    /// The symmetric key; its length must match the algorithm's key size
    pub secret: CipherSecret,
}

/// Options accepted by [`decrypt`]: same fields as [`CryptOptions`] except `envs` holds
/// the ciphertext (encoded per `input`) and the IV returned by [`encrypt`] is required.
#[derive(Debug, Clone)]
pub struct DecryptOptions {
    pub algorithm: Algorithm,
    /// The ciphertext, encoded per `input`
    pub envs: String,
    /// Encoding of the decrypted cleartext string
    pub encoding: Encoding,
    /// Encoding used to interpret `envs` as bytes
    pub input: Encoding,
    /// The 16-hex-character IV produced by [`encrypt`], used verbatim
    pub iv: String,
    pub secret: CipherSecret,
}

/// The encrypted payload and the IV it was encrypted with. Serializes with the wire field
/// names used by stored blobs (`encryptedEvs`, `iv`).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EncryptResult {
    #[serde(rename = "encryptedEvs")]
    pub encrypted_envs: String,
    pub iv: String,
}

/// The decrypted payload, both as a string and parsed as JSON. The parsed value is opaque
/// to the library; its shape is owned by the consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecryptResult {
    #[serde(rename = "decryptedEnvs")]
    pub decrypted_envs: String,
    #[serde(rename = "decryptedResult")]
    pub decrypted_result: serde_json::Value,
}

/// Converts a stringified JSON object into a single encrypted string.
///
/// A fresh IV is drawn from the OS CSPRNG on every call: 16 random bytes, rendered as
/// lowercase hex and truncated to the first [`IV_LEN`] characters. That truncated string
/// is the canonical IV representation: it is returned as-is and its ASCII bytes are what
/// the cipher consumes.
///
/// ```
/// use envcipher::algorithm::Algorithm;
/// use envcipher::encoding::Encoding;
/// use envcipher::{encrypt, CryptOptions};
///
/// let result = encrypt(&CryptOptions {
///     algorithm: Algorithm::Aes256Cbc,
///     envs: r#"{"KEY":"VALUE"}"#.to_string(),
///     encoding: Encoding::Utf8,
///     input: Encoding::Hex,
///     secret: "abcdefghijklmnopqrstuv1234567890".into(),
/// })
/// .unwrap();
///
/// assert_eq!(result.iv.len(), 16);
/// ```
pub fn encrypt(options: &CryptOptions) -> Result<EncryptResult, Error> {
    let iv = generate_iv();

    let cipher = options.algorithm.cipher(&options.secret, &iv)?;

    let cleartext = options.encoding.decode(&options.envs)?;
    let ciphertext = cipher.encrypt(&cleartext)?;

    Ok(EncryptResult {
        encrypted_envs: options.input.encode(&ciphertext)?,
        iv,
    })
}

/// Converts an encrypted string back into the cleartext payload and parses it as JSON.
///
/// Decrypted payloads are always JSON-serialized environment maps; a cleartext that does
/// not parse is a hard [`Error::JsonParse`], not a fallback.
///
/// ```
/// use envcipher::algorithm::Algorithm;
/// use envcipher::encoding::Encoding;
/// use envcipher::{decrypt, encrypt, CryptOptions, DecryptOptions};
///
/// let encrypted = encrypt(&CryptOptions {
///     algorithm: Algorithm::Aes256Cbc,
///     envs: r#"{"KEY":"VALUE"}"#.to_string(),
///     encoding: Encoding::Utf8,
///     input: Encoding::Hex,
///     secret: "abcdefghijklmnopqrstuv1234567890".into(),
/// })
/// .unwrap();
///
/// let decrypted = decrypt(&DecryptOptions {
///     algorithm: Algorithm::Aes256Cbc,
///     envs: encrypted.encrypted_envs,
///     encoding: Encoding::Utf8,
///     input: Encoding::Hex,
///     iv: encrypted.iv,
///     secret: "abcdefghijklmnopqrstuv1234567890".into(),
/// })
/// .unwrap();
///
/// assert_eq!(decrypted.decrypted_envs, r#"{"KEY":"VALUE"}"#);
/// assert_eq!(decrypted.decrypted_result["KEY"], "VALUE");
/// ```
pub fn decrypt(options: &DecryptOptions) -> Result<DecryptResult, Error> {
    let cipher = options.algorithm.cipher(&options.secret, &options.iv)?;

    let ciphertext = options.input.decode(&options.envs)?;
    let cleartext = cipher.decrypt(&ciphertext)?;

    let decrypted_envs = options.encoding.encode(&cleartext)?;
    let decrypted_result = serde_json::from_str(&decrypted_envs).map_err(Error::JsonParse)?;

    Ok(DecryptResult {
        decrypted_envs,
        decrypted_result,
    })
}

fn generate_iv() -> String {
    let mut bytes = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut bytes);

    let mut iv = hex::encode(bytes);
    iv.truncate(IV_LEN);
    iv
}
