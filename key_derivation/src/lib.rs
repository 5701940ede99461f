pub mod crypto;

pub use crypto::error::KdfError;
pub use crypto::kdf::{derive_cipher_key, derive_key, secret_to_bytes, CIPHER_KEY_LEN};
pub use crypto::sha256::{sha256, Sha256, DIGEST_LEN};
