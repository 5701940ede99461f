use crate::crypto::cipher_types::PaddingMode;
use crate::crypto::error::CipherError;
use log::warn;
use rand::rngs::OsRng;
use rand::RngCore;

/// Appends between 1 and `block_size` bytes so the result is block aligned.
///
/// A block-aligned input (including the empty one) always receives a whole
/// extra block of padding.
pub fn apply_padding(mut data: Vec<u8>, block_size: usize, padding: PaddingMode) -> Vec<u8> {
    let padding_length = block_size - (data.len() % block_size);

    match padding {
        PaddingMode::Zeros => data.resize(data.len() + padding_length, 0),
        PaddingMode::ANSI_X923 => {
            data.resize(data.len() + padding_length - 1, 0);
            data.push(padding_length as u8);
        }
        PaddingMode::PKCS7 => {
            data.resize(data.len() + padding_length, padding_length as u8);
        }
        PaddingMode::ISO10126 => {
            let mut filler = vec![0u8; padding_length - 1];
            OsRng.fill_bytes(&mut filler);
            data.extend_from_slice(&filler);
            data.push(padding_length as u8);
        }
    }
    data
}

/// Strips padding from block-aligned data.
///
/// Only PKCS7 is strict. Zeros, ANSI X9.23 and ISO 10126 hand back the
/// buffer untouched when the trailer does not look like their padding, and
/// PKCS7 does the same when none of the bytes before the last one carry the
/// pad length.
pub fn remove_padding(
    mut data: Vec<u8>,
    block_size: usize,
    padding: PaddingMode,
) -> Result<Vec<u8>, CipherError> {
    if data.is_empty() {
        return Ok(data);
    }
    if data.len() % block_size != 0 {
        return Err(CipherError::DataLength {
            length: data.len(),
            block_size,
        });
    }

    if padding == PaddingMode::Zeros {
        while data.last() == Some(&0u8) {
            data.pop();
        }
        return Ok(data);
    }

    let last_byte = data[data.len() - 1];
    let pad_len = last_byte as usize;
    if pad_len == 0 {
        warn!("{padding} trailer is zero, returning data unpadded");
        return Ok(data);
    }
    if pad_len > block_size {
        return Err(CipherError::Padding(format!(
            "invalid padding value {pad_len} for block size {block_size}"
        )));
    }

    let pad_start = data.len() - pad_len;
    match padding {
        PaddingMode::PKCS7 => {
            if data[pad_start..].iter().any(|&b| b != last_byte) {
                if data[pad_start..data.len() - 1].iter().all(|&b| b != last_byte) {
                    warn!("PKCS7 trailer does not match, returning data unpadded");
                    return Ok(data);
                }
                return Err(CipherError::Padding("invalid PKCS7 padding".to_string()));
            }
        }
        PaddingMode::ANSI_X923 => {
            if data[pad_start..data.len() - 1].iter().any(|&b| b != 0) {
                warn!("ANSI X9.23 filler is not zero, returning data unpadded");
                return Ok(data);
            }
        }
        // only the length byte is meaningful
        PaddingMode::ISO10126 | PaddingMode::Zeros => {}
    }

    data.truncate(pad_start);
    Ok(data)
}

pub fn xor_blocks(left: &[u8], right: &[u8]) -> Vec<u8> {
    left.iter().zip(right.iter()).map(|(a, b)| a ^ b).collect()
}

/// Adds `value` to a big-endian counter block, wrapping at its width.
#[inline]
pub fn increment_block(block: &mut [u8], value: usize) {
    let mut carry = value as u128;
    for byte in block.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = *byte as u128 + (carry & 0xFF);
        *byte = sum as u8;
        carry = (carry >> 8) + (sum >> 8);
    }
}

/// Shared key check run once by every cipher constructor.
pub fn validate_key(key: &[u8], allowed: &'static [usize]) -> Result<(), CipherError> {
    if !allowed.contains(&key.len()) {
        return Err(CipherError::InvalidKeySize {
            actual: key.len(),
            allowed,
        });
    }
    if key.iter().all(|&b| b == 0) {
        return Err(CipherError::WeakKey);
    }
    Ok(())
}

pub fn generate_iv(block_size: usize) -> Vec<u8> {
    let mut iv = vec![0u8; block_size];
    OsRng.fill_bytes(&mut iv);
    iv
}
