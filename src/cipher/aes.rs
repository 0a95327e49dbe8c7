use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{
    BlockCipher, BlockDecryptMut, BlockEncryptMut, KeyInit, KeyIvInit, KeySizeUser,
};
use std::marker::PhantomData;

use crate::cipher::EncDec;
use crate::values::secret::CipherSecret;
use crate::{Error, IV_LEN};

/// AES in CBC mode with PKCS#7 padding, generic over the key size.
///
/// The IV is the ASCII bytes of the canonical 16-hex-character IV string. That is exactly
/// one AES block, so the underlying cipher accepts it as-is.
pub struct AesCbc<'sec, C> {
    secret: &'sec CipherSecret,
    iv: [u8; IV_LEN],
    cipher: PhantomData<C>,
}

impl<'sec, C> AesCbc<'sec, C>
where
    C: KeySizeUser,
{
    /// Fails with [`Error::InvalidKeyLength`] when the secret does not match the key size
    /// of `C`, before any cipher computation takes place.
    pub fn new(secret: &'sec CipherSecret, iv: [u8; IV_LEN]) -> Result<Self, Error> {
        let key_len = secret.expose_secret_as_bytes().len();
        if key_len != C::key_size() {
            return Err(Error::InvalidKeyLength(C::key_size(), key_len));
        }

        Ok(Self {
            secret,
            iv,
            cipher: PhantomData,
        })
    }
}

impl<C> EncDec for AesCbc<'_, C>
where
    C: BlockCipher + BlockEncryptMut + BlockDecryptMut + KeyInit,
{
    fn encrypt(&self, cleartext: &[u8]) -> Result<Vec<u8>, Error> {
        let key = self.secret.expose_secret_as_bytes();

        let encryptor = cbc::Encryptor::<C>::new_from_slices(key, &self.iv)
            .map_err(|_| Error::InvalidKeyLength(C::key_size(), key.len()))?;

        Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(cleartext))
    }

    fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        let key = self.secret.expose_secret_as_bytes();

        let decryptor = cbc::Decryptor::<C>::new_from_slices(key, &self.iv)
            .map_err(|_| Error::InvalidKeyLength(C::key_size(), key.len()))?;

        decryptor
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Decrypt)
    }
}
