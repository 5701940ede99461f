use crate::crypto::sboxes::{substitute, TAPS};
use bitvec::prelude::*;

/// Gathers the 6-bit S-box index for every group from the three inputs.
pub fn tap_groups(a: u16, b: u16, c: u16) -> [u8; 8] {
    let words = [a, b, c];
    let mut groups = [0u8; 8];

    for (group, taps) in groups.iter_mut().zip(TAPS.iter()) {
        *group = taps.iter().fold(0u8, |acc, &(word, bit)| {
            (acc << 1) | u8::from(words[word].view_bits::<Lsb0>()[bit])
        });
    }
    groups
}

/// Round function: three 16-bit words in, one 16-bit word out.
///
/// S-box `i` fills output bits `15 - 2i` (its low bit) and `14 - 2i`
/// (its high bit).
pub fn round_function(a: u16, b: u16, c: u16) -> u16 {
    tap_groups(a, b, c)
        .iter()
        .enumerate()
        .fold(0u16, |out, (i, &group)| {
            let s = substitute(i, group) as u16;
            out | ((s & 1) << (15 - 2 * i)) | (((s >> 1) & 1) << (14 - 2 * i))
        })
}
