//! Key exchange building blocks.

pub mod config;
pub mod diffie_hellman_algorithm;
pub mod engine;
pub mod error;
pub mod key_exchange_traits;
pub mod primality;
