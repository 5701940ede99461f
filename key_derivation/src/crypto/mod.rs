pub mod error;
pub mod kdf;
pub mod sha256;
