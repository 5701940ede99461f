use crate::crypto::error::KeyExchangeError;
use crate::crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
use log::debug;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::RngCore;

/// Group parameters shared by both sides of a chat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

pub struct DiffieHellman {
    params: DhParameters,
}

impl DiffieHellman {
    pub fn params(&self) -> &DhParameters {
        &self.params
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type Parameters = DhParameters;
    type SharedSecret = BigUint;

    fn new(params: Self::Parameters) -> Result<Self, KeyExchangeError> {
        if params.p <= BigUint::from(3u32) {
            return Err(KeyExchangeError::InvalidParameters(
                "modulus p must be a prime greater than 3",
            ));
        }
        if !params.p.bit(0) {
            return Err(KeyExchangeError::InvalidParameters("modulus p must be odd"));
        }
        if params.g <= BigUint::one() || params.g >= &params.p - BigUint::one() {
            return Err(KeyExchangeError::InvalidParameters(
                "generator g must lie in (1, p-1)",
            ));
        }
        debug!("Diffie-Hellman context over a {}-bit modulus", params.p.bits());
        Ok(Self { params })
    }

    fn generate_keypair(&self, rng: &mut impl RngCore) -> KeyPair {
        let two = BigUint::from(2u32);
        let p_minus_1 = &self.params.p - BigUint::one();

        // p > 3 and odd, so [2, p-2] is never empty
        let private_key = rng.gen_biguint_range(&two, &p_minus_1);
        let public_key = self.params.g.modpow(&private_key, &self.params.p);

        KeyPair {
            private_key,
            public_key,
        }
    }

    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> Result<Self::SharedSecret, KeyExchangeError> {
        let two = BigUint::from(2u32);
        let p_minus_1 = &self.params.p - BigUint::one();

        if !(*own_private_key >= two && *own_private_key < p_minus_1) {
            return Err(KeyExchangeError::InvalidKey(
                "own private key is outside [2, p-2]",
            ));
        }

        if *other_public_key < two || *other_public_key >= self.params.p {
            return Err(KeyExchangeError::InvalidKey(
                "peer public key is outside [2, p-1]",
            ));
        }

        Ok(other_public_key.modpow(own_private_key, &self.params.p))
    }
}
