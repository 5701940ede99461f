use crate::crypto::error::KeyExchangeError;
use log::trace;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;
use std::collections::BTreeSet;

const SMALL_PRIMES: [u32; 10] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31];

/// Miller-Rabin with a fixed number of random witnesses.
///
/// The answer is probabilistic: a composite survives each round with
/// probability at most 1/4, and inputs crafted against the witness
/// distribution are not considered.
#[derive(Debug, Clone, Copy)]
pub struct MillerRabin {
    pub rounds: usize,
}

impl MillerRabin {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    pub fn is_probably_prime<R: Rng + ?Sized>(&self, n: &BigUint, rng: &mut R) -> bool {
        let two = BigUint::from(2u32);
        if *n <= BigUint::one() {
            return false;
        }
        if *n <= BigUint::from(3u32) {
            return true;
        }
        if n.is_even() {
            return false;
        }
        for p in SMALL_PRIMES {
            if (n % p).is_zero() {
                return *n == BigUint::from(p);
            }
        }

        let n_minus_one = n - BigUint::one();
        let mut d = n_minus_one.clone();
        let mut s = 0u32;
        while d.is_even() {
            d >>= 1;
            s += 1;
        }

        (0..self.rounds).all(|_| {
            let a = rng.gen_biguint_range(&two, &n_minus_one);
            Self::passes_round(n, &n_minus_one, &a, &d, s)
        })
    }

    // true when `a` is not a witness to the compositeness of `n`
    fn passes_round(n: &BigUint, n_minus_one: &BigUint, a: &BigUint, d: &BigUint, s: u32) -> bool {
        let mut x = a.modpow(d, n);
        if x.is_one() || x == *n_minus_one {
            return true;
        }
        for _ in 1..s {
            x = &x * &x % n;
            if x == *n_minus_one {
                return true;
            }
            if x.is_one() {
                return false;
            }
        }
        false
    }
}

pub fn is_probably_prime<R: Rng + ?Sized>(n: &BigUint, rounds: usize, rng: &mut R) -> bool {
    MillerRabin::new(rounds).is_probably_prime(n, rng)
}

/// Samples odd `bits`-bit integers with the top bit set until one passes.
pub fn generate_large_prime<R: Rng + ?Sized>(
    bits: u64,
    rounds: usize,
    rng: &mut R,
) -> Result<BigUint, KeyExchangeError> {
    if bits < 8 {
        return Err(KeyExchangeError::InvalidArgument(format!(
            "prime must be at least 8 bits, got {bits}"
        )));
    }

    let test = MillerRabin::new(rounds);
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let mut candidate = rng.gen_biguint(bits);
        candidate.set_bit(bits - 1, true);
        candidate.set_bit(0, true);
        if test.is_probably_prime(&candidate, rng) {
            trace!("found a {bits}-bit prime after {attempts} candidates");
            return Ok(candidate);
        }
    }
}

/// Distinct prime factors of `n` by trial division.
///
/// Division stops as soon as the remaining cofactor tests prime, so a
/// large prime factor is never reached by trial division.
pub fn prime_factors<R: Rng + ?Sized>(
    n: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> BTreeSet<BigUint> {
    let test = MillerRabin::new(rounds);
    let mut factors = BTreeSet::new();
    let mut remaining = n.clone();

    if remaining.is_zero() {
        return factors;
    }

    let two = BigUint::from(2u32);
    let mut divisor = two.clone();
    while remaining > BigUint::one() {
        if test.is_probably_prime(&remaining, rng) {
            factors.insert(remaining);
            break;
        }
        while !(&remaining % &divisor).is_zero() {
            divisor += if divisor == two { 1u32 } else { 2u32 };
            if &divisor * &divisor > remaining {
                factors.insert(remaining);
                return factors;
            }
        }
        while (&remaining % &divisor).is_zero() {
            remaining /= &divisor;
        }
        factors.insert(divisor.clone());
    }
    factors
}

/// Smallest generator of the multiplicative group modulo the prime `p`.
pub fn find_primitive_root<R: Rng + ?Sized>(
    p: &BigUint,
    rounds: usize,
    rng: &mut R,
) -> Result<BigUint, KeyExchangeError> {
    if !is_probably_prime(p, rounds, rng) {
        return Err(KeyExchangeError::InvalidArgument(
            "primitive roots are only searched modulo a prime".to_string(),
        ));
    }
    if *p == BigUint::from(2u32) {
        return Ok(BigUint::one());
    }

    let order = p - BigUint::one();
    let exponents: Vec<BigUint> = prime_factors(&order, rounds, rng)
        .iter()
        .map(|factor| &order / factor)
        .collect();

    let mut candidate = BigUint::from(2u32);
    while candidate < *p {
        if exponents
            .iter()
            .all(|exponent| !candidate.modpow(exponent, p).is_one())
        {
            return Ok(candidate);
        }
        trace!("{candidate} is not a generator");
        candidate += 1u32;
    }

    Err(KeyExchangeError::NotFound(format!(
        "no primitive root modulo {p}"
    )))
}
