#![allow(dead_code)]

use std::thread;
use std::time::Duration;
use symmetric_cipher::{CipherError, SymmetricCipher};

/// Invertible keyed byte shuffle; good enough to tell chaining modes apart.
pub struct ToyCipher {
    key: Vec<u8>,
}

impl ToyCipher {
    pub fn new(block_size: usize) -> Self {
        Self {
            key: (0..block_size).map(|i| (i as u8).wrapping_mul(37).wrapping_add(11)).collect(),
        }
    }

    fn check(&self, block: &[u8]) -> Result<(), CipherError> {
        if block.len() != self.key.len() {
            return Err(CipherError::InvalidBlockSize {
                expected: self.key.len(),
                actual: block.len(),
            });
        }
        Ok(())
    }
}

impl SymmetricCipher for ToyCipher {
    fn block_size(&self) -> usize {
        self.key.len()
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check(block)?;
        let n = block.len();
        Ok((0..n)
            .map(|i| (block[(i + 1) % n] ^ self.key[i]).wrapping_add(i as u8))
            .collect())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        self.check(block)?;
        let n = block.len();
        let mut out = vec![0u8; n];
        for i in 0..n {
            out[(i + 1) % n] = block[i].wrapping_sub(i as u8) ^ self.key[i];
        }
        Ok(out)
    }
}

/// Toy cipher that sleeps on every block so a background job stays busy.
pub struct SlowCipher {
    inner: ToyCipher,
    delay: Duration,
}

impl SlowCipher {
    pub fn new(block_size: usize, delay: Duration) -> Self {
        Self {
            inner: ToyCipher::new(block_size),
            delay,
        }
    }
}

impl SymmetricCipher for SlowCipher {
    fn block_size(&self) -> usize {
        self.inner.block_size()
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        thread::sleep(self.delay);
        self.inner.encrypt_block(block)
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        thread::sleep(self.delay);
        self.inner.decrypt_block(block)
    }
}

/// Plaintext without zero bytes, so ZEROS padding round-trips exactly.
pub fn sample_plaintext(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 250) as u8 + 1).collect()
}
