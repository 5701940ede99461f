use dh_crypto::{DhConfig, DhEngine, ReportingEngine};
use rand::rngs::OsRng;
use secure_chat_core::{
    ChatCryptoSettings, CipherMode, EncryptionAlgorithm, Error, PaddingMode, SecureChannel,
};

// RUST_LOG=debug cargo run --example secure_chat
fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let engine = ReportingEngine::new(DhConfig::default());
    let params = engine.generate_dh_parameters(&mut OsRng)?;

    let alice_private = engine.generate_private_key(&params.p, &mut OsRng)?;
    let bob_private = engine.generate_private_key(&params.p, &mut OsRng)?;
    let alice_public = engine.generate_public_key(&params.p, &params.g, &alice_private)?;
    let bob_public = engine.generate_public_key(&params.p, &params.g, &bob_private)?;

    let alice_secret = engine.generate_shared_secret(&params.p, &bob_public, &alice_private)?;
    let bob_secret = engine.generate_shared_secret(&params.p, &alice_public, &bob_private)?;

    for algorithm in EncryptionAlgorithm::ALL {
        let settings = ChatCryptoSettings::new(algorithm, CipherMode::CBC, PaddingMode::PKCS7);
        let alice = SecureChannel::from_shared_secret(settings, &alice_secret)?;
        let bob = SecureChannel::from_shared_secret(settings, &bob_secret)?;

        let ciphertext = alice.encrypt("Hello, Bob!".as_bytes())?;
        let plaintext = bob.decrypt(&ciphertext)?;
        println!(
            "{algorithm}: {} -> {:?}",
            hex::encode(&ciphertext),
            String::from_utf8_lossy(&plaintext)
        );
    }
    Ok(())
}
