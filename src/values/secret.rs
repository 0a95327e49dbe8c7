use secrecy::{CloneableSecret, DebugSecret, ExposeSecret, Secret, Zeroize};

/// A wrapper around [`secrecy::Secret`] to represent the symmetric key. The key is zeroized
/// on drop and never shows up in debug output.
///
/// ```
/// # use envcipher::values::secret::CipherSecret;
/// let secret = CipherSecret::from("abcdefghijklmnopqrstuv1234567890");
/// let debug_str = format!("{:?}", secret);
/// assert!(!debug_str.contains("abcdefghijklmnop"));
/// ```
#[derive(Debug, Clone)]
pub struct CipherSecret(Secret<Inner>);

impl CipherSecret {
    /// Exposes the key material.
    pub fn expose_secret_as_bytes(&self) -> &[u8] {
        self.0.expose_secret().0.as_bytes()
    }
}

impl<S> From<S> for CipherSecret
where
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Self(Secret::new(Inner(value.into())))
    }
}

#[derive(Clone)]
struct Inner(String);

impl DebugSecret for Inner {}

impl CloneableSecret for Inner {}

impl Zeroize for Inner {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}
