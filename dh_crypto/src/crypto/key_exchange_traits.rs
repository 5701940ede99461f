use crate::crypto::error::KeyExchangeError;
use num_bigint::BigUint;
use rand::RngCore;
use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct KeyPair {
    pub private_key: BigUint,
    pub public_key: BigUint,
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("private_key", &"<redacted>")
            .field("public_key", &self.public_key)
            .finish()
    }
}

/// One party's view of a key agreement over fixed, validated parameters.
pub trait KeyExchangeAlgorithm: Sized {
    type Parameters;
    type SharedSecret;

    fn new(params: Self::Parameters) -> Result<Self, KeyExchangeError>;
    fn generate_keypair(&self, rng: &mut impl RngCore) -> KeyPair;
    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, KeyExchangeError>;
}
