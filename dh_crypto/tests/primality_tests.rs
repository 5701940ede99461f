use dh_crypto::{
    find_primitive_root, generate_large_prime, is_probably_prime, prime_factors, KeyExchangeError,
};
use num_bigint::BigUint;
use num_traits::One;
use quickcheck::quickcheck;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

const ROUNDS: usize = 32;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0x5EED)
}

fn big(n: u64) -> BigUint {
    BigUint::from(n)
}

#[test]
fn test_known_primes() {
    let mut rng = rng();
    let curve25519_p = (BigUint::one() << 255u32) - big(19);
    let mersenne_61 = (BigUint::one() << 61u32) - BigUint::one();

    for _ in 0..5 {
        for p in [big(2), big(3), big(5), big(31), big(37), big(97), big(7919)] {
            assert!(is_probably_prime(&p, ROUNDS, &mut rng), "{p}");
        }
        assert!(is_probably_prime(&curve25519_p, ROUNDS, &mut rng));
        assert!(is_probably_prime(&mersenne_61, ROUNDS, &mut rng));
    }
}

#[test]
fn test_known_composites() {
    let mut rng = rng();
    let semiprime = ((BigUint::one() << 61u32) - BigUint::one()) * big((1 << 31) - 1);

    for _ in 0..5 {
        // 561 and 1105 are Carmichael numbers
        for n in [0, 1, 4, 9, 91, 561, 1105, 7917] {
            assert!(!is_probably_prime(&big(n), ROUNDS, &mut rng), "{n}");
        }
        assert!(!is_probably_prime(&semiprime, ROUNDS, &mut rng));
    }
}

#[test]
fn test_generate_large_prime() {
    let mut rng = rng();
    for bits in [8u64, 16, 32, 64, 128] {
        let p = generate_large_prime(bits, ROUNDS, &mut rng).unwrap();
        assert_eq!(p.bits(), bits);
        assert!(p.bit(0));
        assert!(is_probably_prime(&p, ROUNDS, &mut rng));
    }
}

#[test]
fn test_generate_large_prime_rejects_tiny_sizes() {
    let mut rng = rng();
    for bits in [0u64, 1, 7] {
        assert!(matches!(
            generate_large_prime(bits, ROUNDS, &mut rng),
            Err(KeyExchangeError::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_prime_factors() {
    let mut rng = rng();
    let set = |values: &[u64]| values.iter().copied().map(big).collect::<BTreeSet<_>>();

    assert_eq!(prime_factors(&big(360), ROUNDS, &mut rng), set(&[2, 3, 5]));
    assert_eq!(prime_factors(&big(97), ROUNDS, &mut rng), set(&[97]));
    assert_eq!(prime_factors(&big(1), ROUNDS, &mut rng), set(&[]));
    assert_eq!(prime_factors(&big(1024), ROUNDS, &mut rng), set(&[2]));
    assert_eq!(prime_factors(&big(91 * 91 * 17), ROUNDS, &mut rng), set(&[7, 13, 17]));

    // the large cofactor is recognised without dividing up to it
    let mersenne_61 = (1u64 << 61) - 1;
    assert_eq!(
        prime_factors(&big(6 * mersenne_61), ROUNDS, &mut rng),
        set(&[2, 3, mersenne_61])
    );
}

#[test]
fn test_primitive_root_of_seven_generates_the_group() {
    let mut rng = rng();
    let seven = big(7);
    let g = find_primitive_root(&seven, ROUNDS, &mut rng).unwrap();
    assert_eq!(g, big(3));

    let powers: BTreeSet<BigUint> = (1u32..=6)
        .map(|e| g.modpow(&BigUint::from(e), &seven))
        .collect();
    assert_eq!(powers, (1..=6).map(big).collect::<BTreeSet<_>>());
}

#[test]
fn test_primitive_roots_of_small_primes() {
    let mut rng = rng();
    for (p, g) in [(2, 1), (3, 2), (5, 2), (11, 2), (13, 2), (23, 5), (41, 6), (71, 7)] {
        assert_eq!(find_primitive_root(&big(p), ROUNDS, &mut rng).unwrap(), big(g), "p = {p}");
    }
}

#[test]
fn test_primitive_root_requires_prime() {
    let mut rng = rng();
    for n in [0, 1, 8, 561] {
        assert!(matches!(
            find_primitive_root(&big(n), ROUNDS, &mut rng),
            Err(KeyExchangeError::InvalidArgument(_))
        ));
    }
}

#[test]
fn test_primitive_root_of_generated_prime() {
    let mut rng = rng();
    let p = generate_large_prime(32, ROUNDS, &mut rng).unwrap();
    let g = find_primitive_root(&p, ROUNDS, &mut rng).unwrap();
    let order = &p - BigUint::one();

    for factor in prime_factors(&order, ROUNDS, &mut rng) {
        assert!(!g.modpow(&(&order / &factor), &p).is_one());
    }
    assert!(g.modpow(&order, &p).is_one());
}

quickcheck! {
    fn prop_products_are_composite(a: u16, b: u16) -> bool {
        let (a, b) = (a.max(2) as u64, b.max(2) as u64);
        !is_probably_prime(&big(a * b), ROUNDS, &mut rng())
    }
}
