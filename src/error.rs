use dh_crypto::KeyExchangeError;
use key_derivation::KdfError;
use symmetric_cipher::CipherError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    KeyExchange(#[from] KeyExchangeError),

    #[error(transparent)]
    KeyDerivation(#[from] KdfError),

    #[error("unknown encryption algorithm: {0}")]
    UnknownAlgorithm(String),
}

impl Error {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cipher(err) if err.is_cancelled())
    }
}
