pub mod crypto;

pub use crypto::config::DhConfig;
pub use crypto::diffie_hellman_algorithm::{DhParameters, DiffieHellman};
pub use crypto::engine::{
    generate_dh_parameters, generate_private_key, DhEngine, DhEvent, ReportingEngine, SilentEngine,
};
pub use crypto::error::KeyExchangeError;
pub use crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
pub use crypto::primality::{
    find_primitive_root, generate_large_prime, is_probably_prime, prime_factors, MillerRabin,
};
