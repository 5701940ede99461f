use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("invalid key size: {actual} bytes, allowed sizes are {allowed:?}")]
    InvalidKeySize {
        actual: usize,
        allowed: &'static [usize],
    },

    #[error("weak key detected: all-zero keys are not allowed")]
    WeakKey,

    #[error("IV must be {expected} bytes long, got {actual}")]
    InvalidIvLength { expected: usize, actual: usize },

    #[error("block must be {expected} bytes long, got {actual}")]
    InvalidBlockSize { expected: usize, actual: usize },

    #[error("unsupported cipher mode: {0}")]
    UnsupportedMode(String),

    #[error("padding error: {0}")]
    Padding(String),

    #[error("data length {length} is not a multiple of the block size {block_size}")]
    DataLength { length: usize, block_size: usize },

    #[error("operation cancelled")]
    Cancelled,

    #[error("background cipher job failed: {0}")]
    Job(String),
}

impl CipherError {
    /// True when the operation stopped because the progress callback asked it to.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CipherError::Cancelled)
    }
}
