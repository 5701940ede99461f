/// The eight 4-bit S-boxes; round `r` uses `SBOXES[r % 8]`.
pub const SBOXES: [[u8; 16]; 8] = [
    [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12],
    [15, 12, 2, 7, 9, 0, 5, 10, 1, 11, 14, 8, 6, 13, 3, 4],
    [8, 6, 7, 9, 3, 12, 10, 15, 13, 1, 14, 4, 0, 11, 5, 2],
    [0, 15, 11, 8, 12, 9, 6, 3, 13, 1, 2, 4, 10, 7, 5, 14],
    [1, 15, 8, 3, 12, 0, 11, 6, 2, 5, 4, 10, 9, 14, 7, 13],
    [15, 5, 2, 11, 4, 10, 9, 12, 0, 3, 14, 8, 13, 6, 7, 1],
    [7, 2, 12, 5, 8, 4, 6, 11, 14, 9, 1, 15, 13, 3, 10, 0],
    [1, 13, 15, 0, 14, 8, 2, 11, 7, 4, 12, 10, 9, 3, 5, 6],
];

const fn invert(sbox: &[u8; 16]) -> [u8; 16] {
    let mut inverse = [0u8; 16];
    let mut i = 0;
    while i < 16 {
        inverse[sbox[i] as usize] = i as u8;
        i += 1;
    }
    inverse
}

pub const INV_SBOXES: [[u8; 16]; 8] = [
    invert(&SBOXES[0]),
    invert(&SBOXES[1]),
    invert(&SBOXES[2]),
    invert(&SBOXES[3]),
    invert(&SBOXES[4]),
    invert(&SBOXES[5]),
    invert(&SBOXES[6]),
    invert(&SBOXES[7]),
];

/// Applies a 4-bit table to 32 nibbles in bitsliced form.
///
/// Nibble `j` is made of bit `j` of each word, word 0 giving the least
/// significant bit.
pub fn apply_bitslice(table: &[u8; 16], words: [u32; 4]) -> [u32; 4] {
    let mut out = [0u32; 4];
    for bit in 0..32 {
        let nibble = words
            .iter()
            .enumerate()
            .fold(0usize, |acc, (k, w)| acc | (((w >> bit) & 1) as usize) << k);
        let value = table[nibble] as u32;
        for (k, word) in out.iter_mut().enumerate() {
            *word |= ((value >> k) & 1) << bit;
        }
    }
    out
}
