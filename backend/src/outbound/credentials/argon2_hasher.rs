//! Argon2id implementation of [`CredentialHasher`].

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use zeroize::Zeroizing;

use crate::domain::PasswordHash;
use crate::domain::ports::{CredentialHasher, CredentialHasherError};

/// Hashes passwords into PHC strings with the default Argon2id parameters.
#[derive(Clone, Default)]
pub struct Argon2CredentialHasher {
    argon2: Argon2<'static>,
}

impl Argon2CredentialHasher {
    /// Hasher with the library default parameters.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialHasher for Argon2CredentialHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError> {
        let plaintext = Zeroizing::new(password.as_bytes().to_vec());
        let salt = SaltString::generate(&mut OsRng);
        let encoded = self
            .argon2
            .hash_password(&plaintext, &salt)
            .map_err(|err| CredentialHasherError::hash(err.to_string()))?;
        Ok(PasswordHash::new(encoded.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, CredentialHasherError> {
        let parsed = password_hash::PasswordHash::new(hash.as_str())
            .map_err(|err| CredentialHasherError::malformed_hash(err.to_string()))?;
        let plaintext = Zeroizing::new(password.as_bytes().to_vec());
        match self.argon2.verify_password(&plaintext, &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(err) => Err(CredentialHasherError::hash(err.to_string())),
        }
    }
}
