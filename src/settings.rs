use crate::algorithm::EncryptionAlgorithm;
use crate::error::Error;
use symmetric_cipher::{CipherMode, PaddingMode};

/// Cipher choice a chat is created with; both members use the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChatCryptoSettings {
    pub algorithm: EncryptionAlgorithm,
    pub mode: CipherMode,
    pub padding: PaddingMode,
}

impl Default for ChatCryptoSettings {
    fn default() -> Self {
        Self {
            algorithm: EncryptionAlgorithm::Serpent,
            mode: CipherMode::CBC,
            padding: PaddingMode::PKCS7,
        }
    }
}

impl ChatCryptoSettings {
    pub fn new(algorithm: EncryptionAlgorithm, mode: CipherMode, padding: PaddingMode) -> Self {
        Self {
            algorithm,
            mode,
            padding,
        }
    }

    /// Parses the names chat records store, e.g. `("SERPENT", "CBC", "PKCS7")`.
    pub fn from_wire(algorithm: &str, mode: &str, padding: &str) -> Result<Self, Error> {
        Ok(Self {
            algorithm: algorithm.parse()?,
            mode: mode.parse()?,
            padding: padding.parse()?,
        })
    }
}
