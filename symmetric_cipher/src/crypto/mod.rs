pub mod cipher_context;
pub mod cipher_job;
pub mod cipher_traits;
pub mod cipher_types;
pub mod error;
pub mod utils;

use crate::crypto::cipher_traits::SymmetricCipher;
use crate::crypto::error::CipherError;
use std::sync::Arc;

impl<C: SymmetricCipher + ?Sized> SymmetricCipher for Arc<C> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).decrypt_block(block)
    }
}

impl<C: SymmetricCipher + ?Sized> SymmetricCipher for Box<C> {
    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        (**self).decrypt_block(block)
    }
}
