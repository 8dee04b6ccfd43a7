//! Encrypts a message the way an iOS app using
//! `SecKeyCreateEncryptedData(.eciesEncryptionCofactorVariableIVX963SHA384AESGCM)`
//! would, then decrypts it with the recipient's SEC1 private key.
//!
//! Run with `RUST_LOG=trace` to watch the engine move through its stages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::rngs::OsRng;
use tracing_subscriber::EnvFilter;
use xecies_api::Pke;
use xecies_pke::{AppleAlgorithm, EciesP256};

// SEC1 DER of the recipient key, e.g. from `openssl ec -outform DER | base64`
const RECIPIENT_DER: &str = "MHcCAQEEIApYOHG0phwakap6PdLA/0/70UtcEIQKyObwvcXm7dEvoAoGCCqGSM49AwEH\
                             oUQDQgAEl04Vp1A1pDMXt86RT+6LHJ98TVfqsawC4saolZybb9XLaaEUelgdBxp2+DT+\
                             +8EVwqqkof1fSV432BLISpJgZw==";

const ALGORITHM: &str = "eciesEncryptionCofactorVariableIVX963SHA384AESGCM";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let der = STANDARD.decode(RECIPIENT_DER)?;
    let recipient = p256::SecretKey::from_sec1_der(&der)
        .map_err(|e| format!("invalid SEC1 private key: {e}"))?;

    let algorithm: AppleAlgorithm = ALGORITHM.parse()?;
    let ecies = EciesP256::new(algorithm.config_for::<p256::NistP256>());
    println!("algorithm: {}", algorithm);
    println!("engine:    {}", ecies.name());

    let envelope = ecies.encrypt(&recipient.public_key(), b"Hello!", None, &mut OsRng)?;
    println!("envelope ({} bytes): {}", envelope.len(), STANDARD.encode(&envelope));

    let plaintext = ecies.decrypt(&recipient, &envelope, None)?;
    println!("decrypted: {}", String::from_utf8_lossy(&plaintext));

    Ok(())
}
