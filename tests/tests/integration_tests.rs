//! End-to-end behavior across curves, threads and configuration formats

use rand::rngs::OsRng;
use std::thread;
use xecies_api::{Error, Pke, Result as ApiResult};
use xecies_common::ct_eq;
use xecies_pke::{
    AeadAlgorithm, AppleAlgorithm, EciesConfig, EciesP256, EciesP384, EciesP521, KdfHash,
};
use xecies_tests::rng::FailingRng;

fn roundtrip<P: Pke>(scheme: &P, plaintext: &[u8], aad: Option<&[u8]>) -> ApiResult<Vec<u8>> {
    let (pk, sk) = scheme.keypair(&mut OsRng)?;
    let envelope = scheme.encrypt(&pk, plaintext, aad, &mut OsRng)?;
    scheme.decrypt(&sk, &envelope, aad)
}

#[test]
fn test_all_curves_through_pke_trait() -> ApiResult<()> {
    let config = EciesConfig::default().with_hash(KdfHash::Sha384);
    let message = b"one engine, three curves";
    let aad: Option<&[u8]> = Some(b"integration".as_slice());

    assert_eq!(roundtrip(&EciesP256::new(config), message, aad)?, message);
    assert_eq!(roundtrip(&EciesP384::new(config), message, aad)?, message);
    assert_eq!(roundtrip(&EciesP521::new(config), message, aad)?, message);
    Ok(())
}

#[test]
fn test_every_apple_algorithm_roundtrips() -> ApiResult<()> {
    for hash in ["SHA224", "SHA256", "SHA384", "SHA512"] {
        for mode in ["Standard", "Cofactor", "StandardVariableIV", "CofactorVariableIV"] {
            let name = format!("kSecKeyAlgorithmECIESEncryption{}X963{}AESGCM", mode, hash);
            let alg: AppleAlgorithm = name.parse()?;
            assert_eq!(alg.to_string(), name);

            let p256 = EciesP256::new(alg.config_for::<p256::NistP256>());
            assert_eq!(p256.config().aead, AeadAlgorithm::Aes128Gcm16);
            assert_eq!(roundtrip(&p256, b"apple", None)?, b"apple");

            let p384 = EciesP384::new(alg.config_for::<p384::NistP384>());
            assert_eq!(p384.config().aead, AeadAlgorithm::Aes256Gcm16);
            assert_eq!(roundtrip(&p384, b"apple", None)?, b"apple");
        }
    }
    Ok(())
}

#[test]
fn test_cross_curve_envelope_is_rejected() -> ApiResult<()> {
    let p256 = EciesP256::default();
    let p384 = EciesP384::default();
    let (pk256, _) = p256.keypair(&mut OsRng)?;
    let (_, sk384) = p384.keypair(&mut OsRng)?;

    // 65-byte point plus 16-byte tag is shorter than a P-384 point
    let envelope = p256.encrypt(&pk256, b"", None, &mut OsRng)?;
    assert_eq!(
        p384.decrypt(&sk384, &envelope, None),
        Err(Error::MalformedInput {
            expected: 97,
            actual: 81
        })
    );

    let envelope = p256.encrypt(&pk256, &[0u8; 64], None, &mut OsRng)?;
    assert_eq!(p384.decrypt(&sk384, &envelope, None), Err(Error::AuthenticationFailed));
    Ok(())
}

#[test]
fn test_shared_instance_across_threads() -> ApiResult<()> {
    let ecies = EciesP256::new(EciesConfig::default().with_hash(KdfHash::Sha512));
    let (pk, sk) = ecies.keypair(&mut OsRng)?;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8u8)
            .map(|worker| {
                let (ecies, pk, sk) = (&ecies, &pk, &sk);
                scope.spawn(move || {
                    for round in 0..16u8 {
                        let message = [worker, round, 0xEC];
                        let envelope = ecies.encrypt(pk, &message, None, &mut OsRng).unwrap();
                        assert_eq!(ecies.decrypt(sk, &envelope, None).unwrap(), message);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("worker panicked");
        }
    });
    Ok(())
}

#[test]
fn test_entropy_failure_is_reported() -> ApiResult<()> {
    let ecies = EciesP384::default();
    let (pk, _) = ecies.keypair(&mut OsRng)?;

    match ecies.encrypt(&pk, b"no entropy", None, &mut FailingRng) {
        Err(Error::KeyGenFailed { .. }) => Ok(()),
        other => panic!("Expected KeyGenFailed, got {:?}", other),
    }
}

#[test]
fn test_shared_public_key_bytes_compare_in_constant_time() -> ApiResult<()> {
    let ecies = EciesP256::default();
    let (pk, sk) = ecies.keypair(&mut OsRng)?;

    let exported = ecies.public_key_to_bytes(&pk);
    let reimported = ecies.public_key_from_bytes(&exported)?;
    let derived = ecies.public_key_to_bytes(&ecies.public_key(&sk));

    assert!(ct_eq(&exported, &derived));
    assert!(ct_eq(&exported, &ecies.public_key_to_bytes(&reimported)));
    assert!(!ct_eq(&exported, &exported[..64]));
    Ok(())
}

#[test]
fn test_config_serde_roundtrip() {
    let config = EciesConfig::new(KdfHash::Sha384, false, true, AeadAlgorithm::Aes128Gcm16);
    let json = serde_json::to_string(&config).unwrap();
    let parsed: EciesConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, config);

    let apple = AppleAlgorithm::new(KdfHash::Sha256, true, false);
    let parsed: AppleAlgorithm =
        serde_json::from_str(&serde_json::to_string(&apple).unwrap()).unwrap();
    assert_eq!(parsed, apple);
}

#[test]
fn test_scheme_names() {
    assert_eq!(
        EciesP521::new(EciesConfig::default()).name(),
        "ECIES-Cofactor-VariableIV-X963-SHA256-AES256GCM-P-521"
    );
    assert_eq!(
        EciesP384::new(EciesConfig::default().with_cofactor(false).with_variable_iv(false)).name(),
        "ECIES-Standard-X963-SHA256-AES256GCM-P-384"
    );
}
