use crate::crypto::config::DhConfig;
use crate::crypto::diffie_hellman_algorithm::DhParameters;
use crate::crypto::error::KeyExchangeError;
use crate::crypto::primality;
use log::info;
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::rngs::OsRng;
use rand::Rng;

/// Milestones of a key agreement. Only public sizes are carried, never key
/// material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DhEvent {
    PrimeGenerated { bits: u64 },
    PrimitiveRootFound,
    ParametersReady { bits: u64 },
    PrivateKeyGenerated { bits: u64 },
    PublicKeyGenerated { bits: u64 },
    SharedSecretComputed { bits: u64 },
}

fn ensure_modulus(p: &BigUint) -> Result<(), KeyExchangeError> {
    if *p < BigUint::from(2u32) {
        return Err(KeyExchangeError::InvalidArgument(format!(
            "modulus must be at least 2, got {p}"
        )));
    }
    Ok(())
}

/// Diffie-Hellman operations as template methods.
///
/// Implementors pick the configuration and decide what to do with each
/// [`DhEvent`]; the arithmetic is shared, so two engines fed the same
/// random stream produce the same values.
pub trait DhEngine {
    fn config(&self) -> &DhConfig;

    fn report(&self, event: DhEvent);

    fn is_probably_prime<R: Rng + ?Sized>(&self, n: &BigUint, rng: &mut R) -> bool {
        primality::is_probably_prime(n, self.config().miller_rabin_rounds, rng)
    }

    fn generate_large_prime<R: Rng + ?Sized>(
        &self,
        bits: u64,
        rng: &mut R,
    ) -> Result<BigUint, KeyExchangeError> {
        let prime = primality::generate_large_prime(bits, self.config().miller_rabin_rounds, rng)?;
        self.report(DhEvent::PrimeGenerated { bits });
        Ok(prime)
    }

    fn find_primitive_root<R: Rng + ?Sized>(
        &self,
        p: &BigUint,
        rng: &mut R,
    ) -> Result<BigUint, KeyExchangeError> {
        let root = primality::find_primitive_root(p, self.config().miller_rabin_rounds, rng)?;
        self.report(DhEvent::PrimitiveRootFound);
        Ok(root)
    }

    /// Fresh `(p, g)` with `p` of `bits` bits.
    fn generate_dh_parameters_with_bits<R: Rng + ?Sized>(
        &self,
        bits: u64,
        rng: &mut R,
    ) -> Result<DhParameters, KeyExchangeError> {
        let p = self.generate_large_prime(bits, rng)?;
        let g = self.find_primitive_root(&p, rng)?;
        self.report(DhEvent::ParametersReady { bits });
        Ok(DhParameters { p, g })
    }

    /// Fresh `(p, g)` sized by [`DhConfig::prime_bits`].
    fn generate_dh_parameters<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<DhParameters, KeyExchangeError> {
        self.generate_dh_parameters_with_bits(self.config().prime_bits, rng)
    }

    /// Uniform private scalar in `[2, p-2]`.
    fn generate_private_key<R: Rng + ?Sized>(
        &self,
        p: &BigUint,
        rng: &mut R,
    ) -> Result<BigUint, KeyExchangeError> {
        if *p <= BigUint::from(4u32) {
            return Err(KeyExchangeError::InvalidArgument(format!(
                "modulus {p} leaves no room for a private key"
            )));
        }
        let private_key = rng.gen_biguint_range(&BigUint::from(2u32), &(p - BigUint::one()));
        self.report(DhEvent::PrivateKeyGenerated { bits: p.bits() });
        Ok(private_key)
    }

    fn generate_public_key(
        &self,
        p: &BigUint,
        g: &BigUint,
        private_key: &BigUint,
    ) -> Result<BigUint, KeyExchangeError> {
        ensure_modulus(p)?;
        let public_key = g.modpow(private_key, p);
        self.report(DhEvent::PublicKeyGenerated { bits: p.bits() });
        Ok(public_key)
    }

    fn generate_shared_secret(
        &self,
        p: &BigUint,
        peer_public_key: &BigUint,
        private_key: &BigUint,
    ) -> Result<BigUint, KeyExchangeError> {
        ensure_modulus(p)?;
        let secret = peer_public_key.modpow(private_key, p);
        self.report(DhEvent::SharedSecretComputed { bits: p.bits() });
        Ok(secret)
    }
}

/// Engine without any output.
#[derive(Debug, Clone, Default)]
pub struct SilentEngine {
    config: DhConfig,
}

impl SilentEngine {
    pub fn new(config: DhConfig) -> Self {
        Self { config }
    }
}

impl DhEngine for SilentEngine {
    fn config(&self) -> &DhConfig {
        &self.config
    }

    fn report(&self, _event: DhEvent) {}
}

/// Engine that narrates every step through `log::info!`.
#[derive(Debug, Clone, Default)]
pub struct ReportingEngine {
    config: DhConfig,
}

impl ReportingEngine {
    pub fn new(config: DhConfig) -> Self {
        Self { config }
    }
}

impl DhEngine for ReportingEngine {
    fn config(&self) -> &DhConfig {
        &self.config
    }

    fn report(&self, event: DhEvent) {
        match event {
            DhEvent::PrimeGenerated { bits } => info!("generated a {bits}-bit prime modulus"),
            DhEvent::PrimitiveRootFound => info!("found a primitive root"),
            DhEvent::ParametersReady { bits } => {
                info!("{bits}-bit Diffie-Hellman parameters ready")
            }
            DhEvent::PrivateKeyGenerated { bits } => {
                info!("private key generated for a {bits}-bit group")
            }
            DhEvent::PublicKeyGenerated { bits } => info!("public key computed ({bits}-bit group)"),
            DhEvent::SharedSecretComputed { bits } => {
                info!("shared secret computed ({bits}-bit group)")
            }
        }
    }
}

/// `(p, g)` of `bits` bits drawn from the operating system RNG.
pub fn generate_dh_parameters(bits: u64) -> Result<DhParameters, KeyExchangeError> {
    SilentEngine::default().generate_dh_parameters_with_bits(bits, &mut OsRng)
}

/// Private scalar for `p` drawn from the operating system RNG.
pub fn generate_private_key(p: &BigUint) -> Result<BigUint, KeyExchangeError> {
    SilentEngine::default().generate_private_key(p, &mut OsRng)
}
