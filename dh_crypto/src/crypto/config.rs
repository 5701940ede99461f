/// Tunables for parameter generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhConfig {
    /// Bit length of the generated prime modulus.
    pub prime_bits: u64,
    /// Miller-Rabin witnesses tried per candidate.
    pub miller_rabin_rounds: usize,
}

impl Default for DhConfig {
    fn default() -> Self {
        Self {
            prime_bits: 64,
            miller_rabin_rounds: 128,
        }
    }
}
