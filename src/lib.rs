//! Cryptographic core of an end-to-end encrypted chat.
//!
//! Two parties agree on a secret with [`dh_crypto`], turn it into a cipher key
//! with [`key_derivation`] and exchange messages through a [`SecureChannel`]
//! running one of the block ciphers under the mode and padding the chat was
//! created with.

pub mod algorithm;
pub mod channel;
pub mod error;
pub mod settings;

pub use algorithm::EncryptionAlgorithm;
pub use channel::SecureChannel;
pub use error::Error;
pub use settings::ChatCryptoSettings;

pub use dh_crypto;
pub use key_derivation;
pub use symmetric_cipher::{CipherError, CipherJob, CipherMode, PaddingMode, ProgressCallback};
