use crate::crypto::error::CipherError;

/// Single-block transformation contract every primitive implements.
///
/// The mode driver in [`crate::crypto::cipher_context`] only ever talks to
/// ciphers through this trait, so it stays object safe.
pub trait SymmetricCipher {
    fn block_size(&self) -> usize;
    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// A primitive that can be built from raw key bytes.
pub trait KeyedCipher: SymmetricCipher + Sized {
    const ALLOWED_KEY_SIZES: &'static [usize];

    /// Validates the key and derives the round key schedule.
    fn new(key: &[u8]) -> Result<Self, CipherError>;
}
