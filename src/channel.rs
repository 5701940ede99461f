use crate::error::Error;
use crate::settings::ChatCryptoSettings;
use key_derivation::derive_cipher_key;
use log::debug;
use num_bigint::BigUint;
use symmetric_cipher::{CipherContext, CipherJob, ProgressCallback};

/// Message encryption for one chat, keyed from the agreed secret.
#[derive(Clone)]
pub struct SecureChannel {
    settings: ChatCryptoSettings,
    context: CipherContext,
}

impl SecureChannel {
    /// Derives the 16-byte cipher key from a Diffie-Hellman shared secret.
    ///
    /// Every message gets a fresh random IV, carried in front of its
    /// ciphertext.
    pub fn from_shared_secret(
        settings: ChatCryptoSettings,
        secret: &BigUint,
    ) -> Result<Self, Error> {
        let key = derive_cipher_key(secret);
        Self::from_key(settings, &key, None)
    }

    /// Builds a channel from raw key bytes and an optional fixed IV.
    pub fn from_key(
        settings: ChatCryptoSettings,
        key: &[u8],
        iv: Option<Vec<u8>>,
    ) -> Result<Self, Error> {
        let cipher = settings.algorithm.create_cipher(key)?;
        let context = CipherContext::new(cipher, settings.mode, settings.padding, iv)?;
        debug!(
            "secure channel ready: {} / {} / {}",
            settings.algorithm, settings.mode, settings.padding
        );
        Ok(Self { settings, context })
    }

    pub fn settings(&self) -> ChatCryptoSettings {
        self.settings
    }

    pub fn context(&self) -> &CipherContext {
        &self.context
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>, Error> {
        Ok(self.context.encrypt(plaintext)?)
    }

    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>, Error> {
        Ok(self.context.decrypt(ciphertext)?)
    }

    pub fn encrypt_with_progress(
        &self,
        plaintext: &[u8],
        progress: ProgressCallback<'_>,
    ) -> Result<Vec<u8>, Error> {
        Ok(self.context.encrypt_with_progress(plaintext, Some(progress))?)
    }

    pub fn decrypt_with_progress(
        &self,
        ciphertext: &[u8],
        progress: ProgressCallback<'_>,
    ) -> Result<Vec<u8>, Error> {
        Ok(self.context.decrypt_with_progress(ciphertext, Some(progress))?)
    }

    /// Encrypts on tokio's blocking pool. Must be called inside a runtime.
    pub fn spawn_encrypt(&self, plaintext: Vec<u8>) -> CipherJob {
        CipherJob::spawn_encrypt(self.context.clone(), plaintext)
    }

    /// Decrypts on tokio's blocking pool. Must be called inside a runtime.
    pub fn spawn_decrypt(&self, ciphertext: Vec<u8>) -> CipherJob {
        CipherJob::spawn_decrypt(self.context.clone(), ciphertext)
    }
}
