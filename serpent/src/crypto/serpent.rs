use crate::crypto::key_schedule::{expand_key, Subkeys, ROUNDS};
use crate::crypto::linear_transform::{inverse_linear_transform, linear_transform};
use crate::crypto::sboxes::{apply_bitslice, INV_SBOXES, SBOXES};
use log::trace;
use symmetric_cipher::crypto::utils::validate_key;
use symmetric_cipher::{CipherError, KeyedCipher, SymmetricCipher};

pub const BLOCK_SIZE: usize = 16;

#[inline]
fn xor_words(left: [u32; 4], right: &[u32; 4]) -> [u32; 4] {
    [
        left[0] ^ right[0],
        left[1] ^ right[1],
        left[2] ^ right[2],
        left[3] ^ right[3],
    ]
}

/// 128-bit substitution-permutation cipher, 32 rounds, 128/192/256-bit keys.
#[derive(Clone)]
pub struct Serpent {
    subkeys: Subkeys,
}

impl Serpent {
    pub fn subkeys(&self) -> &Subkeys {
        &self.subkeys
    }

    fn read_block(block: &[u8]) -> Result<[u32; 4], CipherError> {
        if block.len() != BLOCK_SIZE {
            return Err(CipherError::InvalidBlockSize {
                expected: BLOCK_SIZE,
                actual: block.len(),
            });
        }
        let mut words = [0u32; 4];
        for (word, chunk) in words.iter_mut().zip(block.chunks_exact(4)) {
            *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }
        Ok(words)
    }

    fn write_block(words: [u32; 4]) -> Vec<u8> {
        words.iter().flat_map(|word| word.to_le_bytes()).collect()
    }

    fn encrypt_words(&self, words: [u32; 4]) -> [u32; 4] {
        let mut state = xor_words(words, &self.subkeys[0]);
        for round in 0..ROUNDS - 1 {
            state = apply_bitslice(&SBOXES[round % 8], state);
            state = linear_transform(state);
            state = xor_words(state, &self.subkeys[round + 1]);
        }
        // the last round swaps the mixing layer for the final key addition
        state = apply_bitslice(&SBOXES[(ROUNDS - 1) % 8], state);
        xor_words(state, &self.subkeys[ROUNDS])
    }

    fn decrypt_words(&self, words: [u32; 4]) -> [u32; 4] {
        let mut state = xor_words(words, &self.subkeys[ROUNDS]);
        state = apply_bitslice(&INV_SBOXES[(ROUNDS - 1) % 8], state);
        for round in (0..ROUNDS - 1).rev() {
            state = xor_words(state, &self.subkeys[round + 1]);
            state = inverse_linear_transform(state);
            state = apply_bitslice(&INV_SBOXES[round % 8], state);
        }
        xor_words(state, &self.subkeys[0])
    }
}

impl KeyedCipher for Serpent {
    const ALLOWED_KEY_SIZES: &'static [usize] = &[16, 24, 32];

    fn new(key: &[u8]) -> Result<Self, CipherError> {
        validate_key(key, Self::ALLOWED_KEY_SIZES)?;
        trace!("expanding Serpent key schedule for a {}-bit key", key.len() * 8);
        Ok(Self {
            subkeys: expand_key(key),
        })
    }
}

impl SymmetricCipher for Serpent {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let words = Self::read_block(block)?;
        Ok(Self::write_block(self.encrypt_words(words)))
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let words = Self::read_block(block)?;
        Ok(Self::write_block(self.decrypt_words(words)))
    }
}
