use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KdfError {
    #[error("cannot derive {requested} key bytes, supported range is 1..={max}")]
    InvalidKeyLength { requested: usize, max: usize },
}
