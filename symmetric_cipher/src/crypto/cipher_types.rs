use crate::crypto::error::CipherError;
use std::fmt;
use std::str::FromStr;

/// Chaining mode applied on top of a block primitive.
///
/// Discriminants match the numeric codes used by chat clients.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CipherMode {
    ECB = 0,
    CBC = 1,
    PCBC = 2,
    CFB = 3,
    OFB = 4,
    CTR = 5,
    RandomDelta = 6,
}

impl CipherMode {
    pub const ALL: [CipherMode; 7] = [
        CipherMode::ECB,
        CipherMode::CBC,
        CipherMode::PCBC,
        CipherMode::CFB,
        CipherMode::OFB,
        CipherMode::CTR,
        CipherMode::RandomDelta,
    ];

    /// Every mode except ECB carries chaining state seeded from an IV.
    pub fn requires_iv(self) -> bool {
        !matches!(self, CipherMode::ECB)
    }

    pub fn name(self) -> &'static str {
        match self {
            CipherMode::ECB => "ECB",
            CipherMode::CBC => "CBC",
            CipherMode::PCBC => "PCBC",
            CipherMode::CFB => "CFB",
            CipherMode::OFB => "OFB",
            CipherMode::CTR => "CTR",
            CipherMode::RandomDelta => "RANDOM_DELTA",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for CipherMode {
    type Error = CipherError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CipherMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CipherError::UnsupportedMode(value.to_string()))
    }
}

impl FromStr for CipherMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        CipherMode::ALL
            .into_iter()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| CipherError::UnsupportedMode(s.to_string()))
    }
}

/// Padding scheme applied before chaining.
#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingMode {
    Zeros = 0,
    ANSI_X923 = 1,
    PKCS7 = 2,
    ISO10126 = 3,
}

impl PaddingMode {
    pub const ALL: [PaddingMode; 4] = [
        PaddingMode::Zeros,
        PaddingMode::ANSI_X923,
        PaddingMode::PKCS7,
        PaddingMode::ISO10126,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PaddingMode::Zeros => "ZEROS",
            PaddingMode::ANSI_X923 => "ANSI_X923",
            PaddingMode::PKCS7 => "PKCS7",
            PaddingMode::ISO10126 => "ISO_10126",
        }
    }
}

impl fmt::Display for PaddingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PaddingMode {
    type Error = CipherError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PaddingMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| CipherError::Padding(format!("unknown padding mode: {value}")))
    }
}

impl FromStr for PaddingMode {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_uppercase();
        PaddingMode::ALL
            .into_iter()
            .find(|padding| padding.name() == wanted)
            .ok_or_else(|| CipherError::Padding(format!("unknown padding mode: {s}")))
    }
}
