use crate::crypto::f_function::round_function;
use crate::crypto::key_schedule::{expand_key, RoundKeys};
use log::trace;
use symmetric_cipher::crypto::utils::validate_key;
use symmetric_cipher::{CipherError, KeyedCipher, SymmetricCipher};

pub const BLOCK_SIZE: usize = 8;

/// Splits a 64-bit state into four 16-bit words, most significant first.
#[inline]
pub fn split_words(state: u64) -> [u16; 4] {
    [
        (state >> 48) as u16,
        (state >> 32) as u16,
        (state >> 16) as u16,
        state as u16,
    ]
}

#[inline]
fn join_words(words: [u16; 4]) -> u64 {
    words
        .iter()
        .fold(0u64, |state, &word| (state << 16) | word as u64)
}

/// One round: the first word absorbs the round function of the other three,
/// then the words rotate left by one position.
#[inline]
fn lap(state: u64, key: &[u16; 3]) -> u64 {
    let [w0, w1, w2, w3] = split_words(state);
    let w0 = w0 ^ round_function(w1 ^ key[0], w2 ^ key[1], w3 ^ key[2]);
    join_words([w1, w2, w3, w0])
}

/// Undoes one round on a state that has been rotated right by one word.
/// The result comes out rotated the same way.
#[inline]
fn back_lap(state: u64, key: &[u16; 3]) -> u64 {
    let [w0, w1, w2, w3] = split_words(state);
    let w0 = w0 ^ round_function(w1 ^ key[0], w2 ^ key[1], w3 ^ key[2]);
    join_words([w3, w0, w1, w2])
}

// (w0, w1, w2, w3) -> (w3, w0, w1, w2); four applications are the identity
#[inline]
fn recombine(state: u64) -> u64 {
    let [w0, w1, w2, w3] = split_words(state);
    join_words([w3, w0, w1, w2])
}

pub(crate) fn encrypt_state(state: u64, schedule: &RoundKeys) -> u64 {
    schedule.iter().fold(state, lap)
}

pub(crate) fn decrypt_state(state: u64, schedule: &RoundKeys) -> u64 {
    let rotated = schedule.iter().rev().fold(recombine(state), back_lap);
    recombine(recombine(recombine(rotated)))
}

/// 64-bit unbalanced Feistel cipher with a 128-bit key and 32 rounds.
#[derive(Clone)]
pub struct MacGuffin {
    round_keys: RoundKeys,
}

impl MacGuffin {
    pub fn round_keys(&self) -> &RoundKeys {
        &self.round_keys
    }

    fn read_block(block: &[u8]) -> Result<u64, CipherError> {
        let bytes: [u8; BLOCK_SIZE] = block
            .try_into()
            .map_err(|_| CipherError::InvalidBlockSize {
                expected: BLOCK_SIZE,
                actual: block.len(),
            })?;
        Ok(u64::from_be_bytes(bytes))
    }
}

impl KeyedCipher for MacGuffin {
    const ALLOWED_KEY_SIZES: &'static [usize] = &[16];

    fn new(key: &[u8]) -> Result<Self, CipherError> {
        validate_key(key, Self::ALLOWED_KEY_SIZES)?;
        let key: &[u8; 16] = key.try_into().map_err(|_| CipherError::InvalidKeySize {
            actual: key.len(),
            allowed: Self::ALLOWED_KEY_SIZES,
        })?;

        trace!("expanding MacGuffin key schedule");
        Ok(Self {
            round_keys: expand_key(key),
        })
    }
}

impl SymmetricCipher for MacGuffin {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let state = Self::read_block(block)?;
        Ok(encrypt_state(state, &self.round_keys).to_be_bytes().to_vec())
    }

    fn decrypt_block(&self, block: &[u8]) -> Result<Vec<u8>, CipherError> {
        let state = Self::read_block(block)?;
        Ok(decrypt_state(state, &self.round_keys).to_be_bytes().to_vec())
    }
}
