use crate::crypto::error::KdfError;
use crate::crypto::sha256::{sha256, DIGEST_LEN};
use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;

/// Key length used for chat ciphers.
pub const CIPHER_KEY_LEN: usize = 16;

/// Minimal big-endian encoding: no leading zero bytes, and zero is empty.
pub fn secret_to_bytes(secret: &BigUint) -> Vec<u8> {
    if secret.is_zero() {
        return Vec::new();
    }
    secret.to_bytes_be()
}

/// First `len` bytes of SHA-256 over the encoded secret.
pub fn derive_key(secret: &BigUint, len: usize) -> Result<Vec<u8>, KdfError> {
    if len == 0 || len > DIGEST_LEN {
        return Err(KdfError::InvalidKeyLength {
            requested: len,
            max: DIGEST_LEN,
        });
    }

    debug!("deriving a {len}-byte key from a {}-bit secret", secret.bits());
    let digest = sha256(&secret_to_bytes(secret));
    Ok(digest[..len].to_vec())
}

pub fn derive_cipher_key(secret: &BigUint) -> [u8; CIPHER_KEY_LEN] {
    let digest = sha256(&secret_to_bytes(secret));
    let mut key = [0u8; CIPHER_KEY_LEN];
    key.copy_from_slice(&digest[..CIPHER_KEY_LEN]);
    key
}
