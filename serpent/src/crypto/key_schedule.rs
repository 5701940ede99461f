use crate::crypto::sboxes::{apply_bitslice, SBOXES};

pub const ROUNDS: usize = 32;
pub const SUBKEYS: usize = ROUNDS + 1;

const PHI: u32 = 0x9E37_79B9;

pub type Subkeys = [[u32; 4]; SUBKEYS];

/// Derives the 33 128-bit subkeys from a 16, 24 or 32 byte key.
///
/// Shorter keys are extended with a single one bit followed by zeros.
/// Callers validate the key length.
pub fn expand_key(key: &[u8]) -> Subkeys {
    let mut prekey = [0u32; 8 + 4 * SUBKEYS];
    for (word, chunk) in prekey.iter_mut().zip(key.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    if key.len() < 32 {
        prekey[key.len() / 4] = 1;
    }

    for i in 8..prekey.len() {
        let mixed = prekey[i - 8] ^ prekey[i - 5] ^ prekey[i - 3] ^ prekey[i - 1];
        prekey[i] = (mixed ^ PHI ^ (i - 8) as u32).rotate_left(11);
    }

    let mut subkeys = [[0u32; 4]; SUBKEYS];
    for (group, subkey) in subkeys.iter_mut().enumerate() {
        let start = 8 + 4 * group;
        let words = [
            prekey[start],
            prekey[start + 1],
            prekey[start + 2],
            prekey[start + 3],
        ];
        *subkey = apply_bitslice(&SBOXES[(35 - group) % 8], words);
    }
    subkeys
}
