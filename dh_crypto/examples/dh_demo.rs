use dh_crypto::{
    DhConfig, DhEngine, DiffieHellman, KeyExchangeAlgorithm, KeyExchangeError, ReportingEngine,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

// RUST_LOG=info cargo run -p dh_crypto --example dh_demo
fn main() -> Result<(), KeyExchangeError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // seeded so the printed values are reproducible; real callers use OsRng
    let mut rng = StdRng::seed_from_u64(0xAF1CE5EED);
    let engine = ReportingEngine::new(DhConfig::default());

    let params = engine.generate_dh_parameters(&mut rng)?;
    println!("p = {}", params.p);
    println!("g = {}", params.g);

    let context = DiffieHellman::new(params.clone())?;
    let alice = context.generate_keypair(&mut rng);
    let bob = context.generate_keypair(&mut rng);
    println!("Alice public = {}", alice.public_key);
    println!("Bob public   = {}", bob.public_key);

    let alice_secret = context.compute_shared_secret(&alice.private_key, &bob.public_key)?;
    let bob_secret = engine.generate_shared_secret(&params.p, &alice.public_key, &bob.private_key)?;

    if alice_secret == bob_secret {
        println!("shared secrets match ({} bits)", alice_secret.bits());
        Ok(())
    } else {
        Err(KeyExchangeError::InvalidKey("shared secret mismatch"))
    }
}
