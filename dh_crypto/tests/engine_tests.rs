use dh_crypto::{
    DhConfig, DhEngine, DhEvent, DhParameters, DiffieHellman, KeyExchangeAlgorithm,
    KeyExchangeError, ReportingEngine, SilentEngine,
};
use num_bigint::BigUint;
use num_traits::One;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;

fn test_config() -> DhConfig {
    DhConfig {
        prime_bits: 32,
        miller_rabin_rounds: 32,
    }
}

/// Records events so tests can check the order of the state machine.
struct RecordingEngine {
    config: DhConfig,
    events: RefCell<Vec<DhEvent>>,
}

impl DhEngine for RecordingEngine {
    fn config(&self) -> &DhConfig {
        &self.config
    }

    fn report(&self, event: DhEvent) {
        self.events.borrow_mut().push(event);
    }
}

#[test]
fn test_default_config() {
    let config = DhConfig::default();
    assert_eq!(config.prime_bits, 64);
    assert_eq!(config.miller_rabin_rounds, 128);
}

#[test]
fn test_full_exchange() {
    let engine = SilentEngine::new(test_config());
    let mut rng = StdRng::seed_from_u64(2024);

    let DhParameters { p, g } = engine.generate_dh_parameters(&mut rng).unwrap();
    assert_eq!(p.bits(), 32);
    assert!(engine.is_probably_prime(&p, &mut rng));

    let alice_private = engine.generate_private_key(&p, &mut rng).unwrap();
    let bob_private = engine.generate_private_key(&p, &mut rng).unwrap();
    for private in [&alice_private, &bob_private] {
        assert!(*private >= BigUint::from(2u32) && *private <= &p - BigUint::from(2u32));
    }

    let alice_public = engine.generate_public_key(&p, &g, &alice_private).unwrap();
    let bob_public = engine.generate_public_key(&p, &g, &bob_private).unwrap();

    let alice_secret = engine
        .generate_shared_secret(&p, &bob_public, &alice_private)
        .unwrap();
    let bob_secret = engine
        .generate_shared_secret(&p, &alice_public, &bob_private)
        .unwrap();
    assert_eq!(alice_secret, bob_secret);
}

#[test]
fn test_silent_and_reporting_engines_agree() {
    let silent = SilentEngine::new(test_config());
    let reporting = ReportingEngine::new(test_config());
    let mut rng_a = StdRng::seed_from_u64(99);
    let mut rng_b = StdRng::seed_from_u64(99);

    let params_a = silent.generate_dh_parameters(&mut rng_a).unwrap();
    let params_b = reporting.generate_dh_parameters(&mut rng_b).unwrap();
    assert_eq!(params_a, params_b);

    let private_a = silent.generate_private_key(&params_a.p, &mut rng_a).unwrap();
    let private_b = reporting.generate_private_key(&params_b.p, &mut rng_b).unwrap();
    assert_eq!(private_a, private_b);
    assert_eq!(
        silent.generate_public_key(&params_a.p, &params_a.g, &private_a),
        reporting.generate_public_key(&params_b.p, &params_b.g, &private_b)
    );
}

#[test]
fn test_events_follow_the_state_machine() {
    let engine = RecordingEngine {
        config: test_config(),
        events: RefCell::new(Vec::new()),
    };
    let mut rng = StdRng::seed_from_u64(5);

    let params = engine.generate_dh_parameters(&mut rng).unwrap();
    let private = engine.generate_private_key(&params.p, &mut rng).unwrap();
    let public = engine.generate_public_key(&params.p, &params.g, &private).unwrap();
    engine.generate_shared_secret(&params.p, &public, &private).unwrap();

    assert_eq!(
        engine.events.into_inner(),
        vec![
            DhEvent::PrimeGenerated { bits: 32 },
            DhEvent::PrimitiveRootFound,
            DhEvent::ParametersReady { bits: 32 },
            DhEvent::PrivateKeyGenerated { bits: 32 },
            DhEvent::PublicKeyGenerated { bits: 32 },
            DhEvent::SharedSecretComputed { bits: 32 },
        ]
    );
}

#[test]
fn test_engine_matches_party_context() {
    let engine = SilentEngine::new(test_config());
    let mut rng = StdRng::seed_from_u64(11);
    let params = engine.generate_dh_parameters(&mut rng).unwrap();
    let context = DiffieHellman::new(params.clone()).unwrap();
    assert_eq!(context.params(), &params);
    assert_eq!(context.params().p.bits(), test_config().prime_bits);

    let alice = context.generate_keypair(&mut rng);
    let bob_private = engine.generate_private_key(&params.p, &mut rng).unwrap();
    let bob_public = engine.generate_public_key(&params.p, &params.g, &bob_private).unwrap();

    assert_eq!(
        engine.generate_public_key(&params.p, &params.g, &alice.private_key).unwrap(),
        alice.public_key
    );
    assert_eq!(
        context.compute_shared_secret(&alice.private_key, &bob_public).unwrap(),
        engine
            .generate_shared_secret(&params.p, &alice.public_key, &bob_private)
            .unwrap()
    );
}

#[test]
fn test_invalid_arguments() {
    let engine = SilentEngine::default();
    let mut rng = StdRng::seed_from_u64(3);

    assert!(matches!(
        engine.generate_dh_parameters_with_bits(4, &mut rng),
        Err(KeyExchangeError::InvalidArgument(_))
    ));
    assert!(matches!(
        engine.generate_private_key(&BigUint::from(4u32), &mut rng),
        Err(KeyExchangeError::InvalidArgument(_))
    ));
    assert!(matches!(
        engine.generate_public_key(&BigUint::one(), &BigUint::from(2u32), &BigUint::from(3u32)),
        Err(KeyExchangeError::InvalidArgument(_))
    ));
    assert!(engine
        .generate_shared_secret(&BigUint::from(0u32), &BigUint::from(2u32), &BigUint::from(3u32))
        .is_err());
}

#[test]
fn test_private_key_for_smallest_modulus() {
    let engine = SilentEngine::default();
    let mut rng = StdRng::seed_from_u64(8);
    for _ in 0..50 {
        let private = engine.generate_private_key(&BigUint::from(5u32), &mut rng).unwrap();
        assert!(private == BigUint::from(2u32) || private == BigUint::from(3u32));
    }
}

#[test]
fn test_os_rng_helpers() {
    let params = dh_crypto::generate_dh_parameters(24).unwrap();
    assert_eq!(params.p.bits(), 24);
    let private = dh_crypto::generate_private_key(&params.p).unwrap();
    assert!(private < params.p);
}
