use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyExchangeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid Diffie-Hellman parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("invalid key: {0}")]
    InvalidKey(&'static str),
}
