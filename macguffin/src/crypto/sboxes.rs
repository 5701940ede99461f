/// Eight 6-bit to 2-bit substitution tables, indexed by the tap group value.
pub const SBOXES: [[u8; 64]; 8] = [
    [
        2, 0, 0, 3, 3, 1, 1, 0, 0, 2, 3, 0, 3, 3, 2, 1, 1, 2, 2, 0, 0, 2, 2, 3, 1, 3, 3, 1, 0, 1,
        1, 2, 0, 3, 1, 2, 2, 2, 2, 0, 3, 0, 0, 3, 0, 1, 3, 1, 3, 1, 2, 3, 3, 1, 1, 2, 1, 2, 2, 0,
        1, 0, 0, 3,
    ],
    [
        3, 1, 1, 3, 2, 0, 2, 1, 0, 3, 3, 0, 1, 2, 0, 2, 3, 2, 1, 0, 0, 1, 3, 2, 2, 0, 0, 3, 1, 3,
        2, 1, 0, 3, 2, 2, 1, 2, 3, 1, 2, 1, 0, 3, 3, 0, 1, 0, 1, 3, 2, 0, 2, 1, 0, 2, 3, 0, 1, 1,
        0, 2, 3, 3,
    ],
    [
        2, 3, 1, 0, 2, 3, 0, 1, 3, 0, 1, 3, 2, 1, 0, 3, 1, 0, 0, 1, 2, 0, 1, 2, 3, 1, 2, 2, 0, 2,
        3, 3, 2, 1, 3, 1, 0, 3, 3, 0, 2, 0, 3, 3, 1, 2, 0, 1, 3, 0, 1, 3, 0, 2, 2, 1, 1, 3, 2, 1,
        2, 0, 1, 2,
    ],
    [
        1, 3, 3, 2, 2, 3, 1, 1, 0, 0, 0, 3, 3, 0, 2, 1, 1, 0, 0, 1, 2, 0, 1, 2, 3, 1, 2, 2, 0, 2,
        3, 3, 2, 1, 0, 3, 3, 0, 0, 0, 2, 2, 3, 1, 1, 3, 3, 2, 3, 3, 1, 0, 1, 1, 2, 3, 1, 2, 0, 1,
        2, 0, 0, 2,
    ],
    [
        0, 2, 3, 2, 2, 1, 0, 2, 3, 1, 1, 0, 3, 3, 2, 3, 0, 3, 0, 2, 1, 2, 3, 1, 2, 1, 3, 2, 1, 0,
        2, 1, 3, 1, 0, 3, 3, 3, 3, 2, 2, 1, 1, 0, 1, 2, 2, 1, 2, 3, 3, 1, 0, 0, 2, 3, 0, 2, 1, 0,
        3, 1, 0, 2,
    ],
    [
        2, 2, 1, 3, 2, 0, 3, 0, 3, 1, 0, 2, 0, 3, 2, 1, 0, 0, 3, 1, 1, 3, 0, 2, 2, 0, 1, 3, 1, 1,
        3, 2, 3, 0, 2, 1, 3, 0, 1, 2, 0, 3, 2, 1, 2, 3, 1, 2, 1, 3, 0, 2, 0, 1, 2, 1, 1, 0, 3, 0,
        3, 2, 0, 3,
    ],
    [
        0, 3, 3, 0, 0, 3, 2, 1, 3, 0, 0, 3, 2, 1, 3, 2, 1, 2, 2, 1, 3, 1, 1, 2, 1, 0, 2, 3, 0, 2,
        1, 0, 1, 0, 0, 3, 3, 3, 3, 2, 2, 1, 1, 0, 1, 2, 2, 1, 2, 3, 3, 1, 0, 0, 2, 3, 0, 2, 1, 0,
        3, 1, 0, 2,
    ],
    [
        3, 1, 0, 3, 2, 1, 1, 0, 0, 1, 2, 0, 3, 2, 1, 3, 1, 0, 0, 1, 3, 2, 2, 3, 0, 1, 2, 3, 3, 0,
        2, 1, 0, 3, 1, 0, 1, 0, 3, 2, 1, 3, 0, 2, 0, 1, 2, 3, 3, 1, 0, 2, 2, 0, 3, 1, 0, 2, 2, 3,
        1, 0, 3, 2,
    ],
];

/// Input taps for each S-box, most significant index bit first.
///
/// Each entry is `(word, bit)`: word 0 is the first round input, 1 the
/// second, 2 the third; `bit` counts from the least significant end.
pub const TAPS: [[(usize, usize); 6]; 8] = [
    [(2, 13), (2, 11), (1, 9), (1, 6), (0, 5), (0, 2)],
    [(2, 14), (2, 8), (1, 10), (1, 7), (0, 4), (0, 1)],
    [(2, 15), (2, 0), (1, 13), (1, 8), (0, 6), (0, 3)],
    [(2, 10), (2, 4), (1, 2), (1, 1), (0, 14), (0, 12)],
    [(2, 12), (2, 6), (1, 14), (1, 3), (0, 10), (0, 0)],
    [(2, 5), (2, 1), (1, 15), (1, 12), (0, 8), (0, 7)],
    [(2, 7), (2, 2), (1, 11), (1, 5), (0, 15), (0, 9)],
    [(2, 9), (2, 3), (1, 4), (1, 0), (0, 13), (0, 11)],
];

#[inline]
pub fn substitute(sbox: usize, index: u8) -> u8 {
    SBOXES[sbox][(index & 0x3F) as usize]
}
