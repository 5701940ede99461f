use dh_crypto::{DhConfig, DhEngine, SilentEngine};
use hex_literal::hex;
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use secure_chat_core::{
    ChatCryptoSettings, CipherError, CipherMode, EncryptionAlgorithm, Error, PaddingMode,
    SecureChannel,
};
use std::ops::ControlFlow;

/// Runs a full key agreement and returns the secret as seen by each side.
fn agree_on_secret(seed: u64) -> (BigUint, BigUint) {
    let engine = SilentEngine::new(DhConfig {
        prime_bits: 32,
        miller_rabin_rounds: 32,
    });
    let mut rng = StdRng::seed_from_u64(seed);

    let params = engine.generate_dh_parameters(&mut rng).unwrap();
    let alice_private = engine.generate_private_key(&params.p, &mut rng).unwrap();
    let bob_private = engine.generate_private_key(&params.p, &mut rng).unwrap();
    let alice_public = engine
        .generate_public_key(&params.p, &params.g, &alice_private)
        .unwrap();
    let bob_public = engine
        .generate_public_key(&params.p, &params.g, &bob_private)
        .unwrap();

    (
        engine
            .generate_shared_secret(&params.p, &bob_public, &alice_private)
            .unwrap(),
        engine
            .generate_shared_secret(&params.p, &alice_public, &bob_private)
            .unwrap(),
    )
}

#[test]
fn test_default_settings() {
    let settings = ChatCryptoSettings::default();
    assert_eq!(settings.algorithm, EncryptionAlgorithm::Serpent);
    assert_eq!(settings.mode, CipherMode::CBC);
    assert_eq!(settings.padding, PaddingMode::PKCS7);
}

#[test]
fn test_settings_from_wire_names() {
    let settings =
        ChatCryptoSettings::from_wire("MACGUFFIN", "RANDOM_DELTA", "ISO_10126").unwrap();
    assert_eq!(
        settings,
        ChatCryptoSettings::new(
            EncryptionAlgorithm::MacGuffin,
            CipherMode::RandomDelta,
            PaddingMode::ISO10126
        )
    );

    assert_eq!(
        ChatCryptoSettings::from_wire("RC6", "CBC", "PKCS7"),
        Err(Error::UnknownAlgorithm("RC6".to_string()))
    );
    assert!(matches!(
        ChatCryptoSettings::from_wire("SERPENT", "GCM", "PKCS7"),
        Err(Error::Cipher(CipherError::UnsupportedMode(_)))
    ));
    assert!(matches!(
        ChatCryptoSettings::from_wire("SERPENT", "CBC", "ISO7816"),
        Err(Error::Cipher(CipherError::Padding(_)))
    ));
}

#[test]
fn test_algorithm_properties() {
    assert_eq!(EncryptionAlgorithm::MacGuffin.block_size(), 8);
    assert_eq!(EncryptionAlgorithm::Serpent.block_size(), 16);
    assert_eq!(EncryptionAlgorithm::MacGuffin.allowed_key_sizes(), &[16]);
    assert_eq!(EncryptionAlgorithm::Serpent.allowed_key_sizes(), &[16, 24, 32]);
    assert_eq!(
        "serpent".parse::<EncryptionAlgorithm>().unwrap(),
        EncryptionAlgorithm::Serpent
    );
    assert_eq!(EncryptionAlgorithm::MacGuffin.to_string(), "MACGUFFIN");

    let cipher = EncryptionAlgorithm::Serpent.create_cipher(&[9u8; 32]).unwrap();
    assert_eq!(cipher.block_size(), 16);
    assert!(matches!(
        EncryptionAlgorithm::MacGuffin.create_cipher(&[9u8; 32]),
        Err(CipherError::InvalidKeySize { actual: 32, .. })
    ));
}

#[test]
fn test_hello_world_scenario() {
    let settings = ChatCryptoSettings::default();
    let key = hex!("000102030405060708090a0b0c0d0e0f");
    let channel = SecureChannel::from_key(settings, &key, Some(vec![0u8; 16])).unwrap();

    let ciphertext = channel.encrypt(b"Hello, World!").unwrap();
    assert_eq!(ciphertext, hex!("756db67f40551327114b539ab04caa2a"));
    assert_eq!(channel.decrypt(&ciphertext).unwrap(), b"Hello, World!");
}

#[test]
fn test_both_parties_talk_over_every_configuration() {
    let (alice_secret, bob_secret) = agree_on_secret(42);
    assert_eq!(alice_secret, bob_secret);

    let message = "Привет! A message long enough to span several cipher blocks.".as_bytes();
    for algorithm in EncryptionAlgorithm::ALL {
        for mode in CipherMode::ALL {
            for padding in PaddingMode::ALL {
                let settings = ChatCryptoSettings::new(algorithm, mode, padding);
                let alice = SecureChannel::from_shared_secret(settings, &alice_secret).unwrap();
                let bob = SecureChannel::from_shared_secret(settings, &bob_secret).unwrap();

                let ciphertext = alice.encrypt(message).unwrap();
                assert_eq!(
                    bob.decrypt(&ciphertext).unwrap(),
                    message,
                    "{algorithm} {mode} {padding}"
                );
            }
        }
    }
}

#[test]
fn test_different_secrets_do_not_interoperate() {
    let settings = ChatCryptoSettings::default();
    let alice =
        SecureChannel::from_shared_secret(settings, &BigUint::from(1_000_003u32)).unwrap();
    let eve =
        SecureChannel::from_shared_secret(settings, &BigUint::from(1_000_033u32)).unwrap();

    let ciphertext = alice.encrypt(b"for Bob only").unwrap();
    assert_ne!(eve.decrypt(&ciphertext).ok(), Some(b"for Bob only".to_vec()));
}

#[test]
fn test_progress_and_cancellation_through_channel() {
    let settings = ChatCryptoSettings::default();
    let channel = SecureChannel::from_shared_secret(settings, &BigUint::from(77u32)).unwrap();
    let message = vec![0x42u8; 16 * 64];

    let mut last = 0;
    let mut track = |percent: u8| {
        last = percent;
        ControlFlow::Continue(())
    };
    let ciphertext = channel.encrypt_with_progress(&message, &mut track).unwrap();
    assert_eq!(last, 100);

    let mut stop = |_: u8| ControlFlow::Break(());
    let err = channel.decrypt_with_progress(&ciphertext, &mut stop).unwrap_err();
    assert!(err.is_cancelled());
}

#[tokio::test]
async fn test_background_jobs() {
    let settings = ChatCryptoSettings::new(
        EncryptionAlgorithm::MacGuffin,
        CipherMode::OFB,
        PaddingMode::ANSI_X923,
    );
    let channel = SecureChannel::from_shared_secret(settings, &BigUint::from(123_456u32)).unwrap();
    let message = vec![7u8; 10_000];

    let ciphertext = channel.spawn_encrypt(message.clone()).join().await.unwrap();
    let plaintext = channel.spawn_decrypt(ciphertext).join().await.unwrap();
    assert_eq!(plaintext, message);
}
