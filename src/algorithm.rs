use crate::error::Error;
use macguffin::MacGuffin;
use serpent::Serpent;
use std::fmt;
use std::str::FromStr;
use symmetric_cipher::{CipherError, KeyedCipher, SymmetricCipher};

/// Block ciphers a chat can be created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncryptionAlgorithm {
    MacGuffin,
    Serpent,
}

impl EncryptionAlgorithm {
    pub const ALL: [EncryptionAlgorithm; 2] =
        [EncryptionAlgorithm::MacGuffin, EncryptionAlgorithm::Serpent];

    pub fn name(self) -> &'static str {
        match self {
            EncryptionAlgorithm::MacGuffin => "MACGUFFIN",
            EncryptionAlgorithm::Serpent => "SERPENT",
        }
    }

    pub fn block_size(self) -> usize {
        match self {
            EncryptionAlgorithm::MacGuffin => macguffin::crypto::macguffin::BLOCK_SIZE,
            EncryptionAlgorithm::Serpent => serpent::crypto::serpent::BLOCK_SIZE,
        }
    }

    pub fn allowed_key_sizes(self) -> &'static [usize] {
        match self {
            EncryptionAlgorithm::MacGuffin => MacGuffin::ALLOWED_KEY_SIZES,
            EncryptionAlgorithm::Serpent => Serpent::ALLOWED_KEY_SIZES,
        }
    }

    pub fn create_cipher(
        self,
        key: &[u8],
    ) -> Result<Box<dyn SymmetricCipher + Send + Sync>, CipherError> {
        Ok(match self {
            EncryptionAlgorithm::MacGuffin => Box::new(MacGuffin::new(key)?),
            EncryptionAlgorithm::Serpent => Box::new(Serpent::new(key)?),
        })
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_string()))
    }
}
