use crate::crypto::macguffin::{encrypt_state, split_words};

pub const ROUNDS: usize = 32;

/// Three 16-bit words per round, XORed into the round function inputs.
pub type RoundKeys = [[u16; 3]; ROUNDS];

fn round_words(state: u64) -> [u16; 3] {
    let [w0, w1, w2, _] = split_words(state);
    [w0, w1, w2]
}

/// Expands a 128-bit key by running the cipher over each key half with the
/// schedule built so far.
///
/// The high half fills the table, then the low half is folded in with XOR.
/// Both passes update the table in place, so later rounds of each pass
/// already see the entries written before them.
pub fn expand_key(key: &[u8; 16]) -> RoundKeys {
    let mut schedule: RoundKeys = [[0u16; 3]; ROUNDS];

    let mut upper = u64::from_be_bytes([
        key[0], key[1], key[2], key[3], key[4], key[5], key[6], key[7],
    ]);
    let mut lower = u64::from_be_bytes([
        key[8], key[9], key[10], key[11], key[12], key[13], key[14], key[15],
    ]);

    for round in 0..ROUNDS {
        upper = encrypt_state(upper, &schedule);
        schedule[round] = round_words(upper);
    }

    for round in 0..ROUNDS {
        lower = encrypt_state(lower, &schedule);
        let words = round_words(lower);
        for (entry, word) in schedule[round].iter_mut().zip(words) {
            *entry ^= word;
        }
    }

    schedule
}
