//! Known-answer vectors
//!
//! Generated with the Python `cryptography` package (`X963KDF`, `ECDH`,
//! `AESGCM`) from the listed scalars, so they check this crate against an
//! independent implementation rather than against itself.

use xecies_pke::{AeadAlgorithm, EciesConfig, KdfHash};

/// Curve a vector is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    P256,
    P384,
}

/// One full ECIES encryption.
#[derive(Debug, Clone, Copy)]
pub struct EciesVector {
    pub name: &'static str,
    pub curve: Curve,
    pub config: EciesConfig,
    pub recipient_secret: &'static str,
    pub recipient_public: &'static str,
    /// Big-endian ephemeral scalar drawn by the sender.
    pub ephemeral_scalar: &'static str,
    pub plaintext: &'static [u8],
    pub aad: Option<&'static [u8]>,
    pub envelope: &'static str,
}

/// One X9.63 KDF evaluation.
#[derive(Debug, Clone, Copy)]
pub struct KdfVector {
    pub hash: KdfHash,
    pub z: &'static str,
    pub shared_info: &'static str,
    pub output: &'static str,
}

const DEMO_RECIPIENT_SECRET: &str =
    "0a583871b4a61c1a91aa7a3dd2c0ff4ffbd14b5c10840ac8e6f0bdc5e6edd12f";
const DEMO_RECIPIENT_PUBLIC: &str = concat!(
    "04974e15a75035a43317b7ce914fee8b1c9f7c4d57eab1ac02e2c6a8959c9b6fd5",
    "cb69a1147a581d071a76f834fefbc115c2aaa4a1fd5f495e37d812c84a926067",
);

/// SEC1 DER encoding of the P-256 demo recipient key, base64.
pub const DEMO_RECIPIENT_DER_B64: &str = concat!(
    "MHcCAQEEIApYOHG0phwakap6PdLA/0/70UtcEIQKyObwvcXm7dEvoAoGCCqGSM49AwEHoUQDQgAE",
    "l04Vp1A1pDMXt86RT+6LHJ98TVfqsawC4saolZybb9XLaaEUelgdBxp2+DT++8EVwqqkof1fSV43",
    "2BLISpJgZw==",
);

/// P-256, cofactor, variable IV, SHA-384, AES-256-GCM with a 12-byte nonce.
pub const P256_SHA384_AES256GCM: EciesVector = EciesVector {
    name: "P-256 X963-SHA384 AES256GCM",
    curve: Curve::P256,
    config: EciesConfig::new(KdfHash::Sha384, true, true, AeadAlgorithm::Aes256Gcm),
    recipient_secret: DEMO_RECIPIENT_SECRET,
    recipient_public: DEMO_RECIPIENT_PUBLIC,
    ephemeral_scalar: "03c5e8a1f0b2d4c6e8f9a1b2c3d4e5f60718293a4b5c6d7e8f90112233445566",
    plaintext: b"Hello!",
    aad: None,
    envelope: concat!(
        "0427b50653d235931ca25b300fcc13a48ff83e32aa66344016d219e0114b9a04",
        "75a35a94c0ed07edf8ee3defac2c73c3350b928b13f68e4544dff217b13942c3",
        "213eed0820452cdf46862b41c16ff0cc9c5b5ff23531c9",
    ),
};

/// Apple `eciesEncryptionCofactorVariableIVX963SHA256AESGCM` on P-256:
/// AES-128-GCM with a 16-byte nonce.
pub const P256_APPLE_SHA256: EciesVector = EciesVector {
    name: "P-256 Apple X963-SHA256 AES128GCM16",
    curve: Curve::P256,
    config: EciesConfig::new(KdfHash::Sha256, true, true, AeadAlgorithm::Aes128Gcm16),
    recipient_secret: DEMO_RECIPIENT_SECRET,
    recipient_public: DEMO_RECIPIENT_PUBLIC,
    ephemeral_scalar: "7a1d2c3b4a59687766554433221100ffeeddccbbaa99887766554433221100aa",
    plaintext: b"Hello!",
    aad: None,
    envelope: concat!(
        "0438eabd680d00a42726f0c43d039e3918044f090b0865303fdee20b78fa8244",
        "6dd53fd0afe1e57c0fe973d505e8a4b0b3a19a08c6ec9303f22d651a300914da",
        "f66452e008c5372537ed4848f591d0e4562b4a1bed7c5c",
    ),
};

/// P-384, fixed (all-zero) IV, SHA-512, AES-256-GCM, with associated data.
pub const P384_FIXED_IV_SHA512: EciesVector = EciesVector {
    name: "P-384 fixed IV X963-SHA512 AES256GCM",
    curve: Curve::P384,
    config: EciesConfig::new(KdfHash::Sha512, false, true, AeadAlgorithm::Aes256Gcm),
    recipient_secret: concat!(
        "5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f",
        "5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f5f",
    ),
    recipient_public: concat!(
        "048a0cb9e68d2b0be062a764b5652a2ccef37b453a3dd51088485694e596555b",
        "45a8cf10fd548099e925e114fdd0ded58ab86c7b7d187fc8634e64f5c2b906e6",
        "6d65564bbcb09544c28820ac06eb9f56e0a6c0f5de5140b657a617c28646149e06",
    ),
    ephemeral_scalar: concat!(
        "2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b",
        "2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b2b",
    ),
    plaintext: b"fixed iv compatibility mode",
    aad: Some(b"header-v1"),
    envelope: concat!(
        "04df7068fd8079d46d56c62ae25f5eb63493dac20e7294b5760645b44c393cc9",
        "379f71d89b035a48429f4d50bd66fc29758587fd804163b65bd409ed628cbfed",
        "e7ea4d84ec2f6708c731255f6f904db7b1f1ec21a4c183de7e6cc33b5c481067",
        "c63642194821b8db1b1e4607b39420bc2be901b88f0cc07ce35abb91398eec28",
        "cc3c0363d82b750b3988a4e8",
    ),
};

pub const ECIES_VECTORS: [EciesVector; 3] =
    [P256_SHA384_AES256GCM, P256_APPLE_SHA256, P384_FIXED_IV_SHA512];

/// Shared secret and key material behind [`P256_SHA384_AES256GCM`].
pub const P256_SHA384_SHARED_SECRET: &str =
    "f23810f3e0ea749373871747f536d143eb4e444c0c9ea9feed01bfb45aa57d5c";
pub const P256_SHA384_KEY_MATERIAL: &str = concat!(
    "5dfcad4ea4e05cdb48c598edc30bd739a929f165f1eebd8e82c046617994b899",
    "2b0411dec6b8db56ea3f5e42",
);

const KDF_Z: &str = "22518b10e70f2a3f243810ae3254139efbee04aa57c7af7d";
const KDF_INFO: &str = "75eef81aa3041e33b80971203d2c0c52";

pub const KDF_VECTORS: [KdfVector; 5] = [
    // NIST CAVS X9.63 SHA-256 sample
    KdfVector {
        hash: KdfHash::Sha256,
        z: "96c05619d56c328ab95fe84b18264b08725b85e33fd34f08",
        shared_info: "",
        output: "443024c3dae66b95e6f5670601558f71",
    },
    KdfVector {
        hash: KdfHash::Sha256,
        z: KDF_Z,
        shared_info: KDF_INFO,
        output: concat!(
            "c498af77161cc59f2962b9a713e2b215152d139766ce34a776df11866a69bf2e",
            "52a13d9c7c6fc878c50c5ea0bc7b00e0da2447cfd874f6cf92f30d0097111485",
            "500c90c3af8b487872d04685d14c8d1dc8d7fa08beb0ce0ababc11f0bd496269",
            "142d43525a78e5bc79a17f59676a5706dc54d54d4d1f0bd7e386128ec26afc21",
        ),
    },
    KdfVector {
        hash: KdfHash::Sha224,
        z: KDF_Z,
        shared_info: KDF_INFO,
        output: "aca3810d153faf",
    },
    KdfVector {
        hash: KdfHash::Sha384,
        z: KDF_Z,
        shared_info: KDF_INFO,
        output: concat!(
            "5aaf37fafffe1857a9e90d62e11a71d6d12e2ab1eac864d14f8c9af4259bb679",
            "6bb847a78cf8d9696e3243a5e6e98133f68a825055d254939b04f994790d26ff",
            "db098b6323f95968dc29289c9f5f91c34f691bef098e12414fa5f4279e07c020",
            "aa7d2679",
        ),
    },
    KdfVector {
        hash: KdfHash::Sha512,
        z: KDF_Z,
        shared_info: KDF_INFO,
        output: concat!(
            "72ca20c0d208d9aa6c76758d9ac54808481067a8f8c770e8443579b442db98d8",
            "be3b2019739d1645072ce247d9360a4364f3a6f384f226e5c833dcb65e32e32d",
            "64",
        ),
    },
];

/// Decodes a hex constant from this module.
///
/// # Panics
///
/// If `value` is not valid hex, which would be a typo in a vector.
pub fn bytes(value: &str) -> Vec<u8> {
    match hex::decode(value) {
        Ok(bytes) => bytes,
        Err(e) => panic!("malformed hex in test vector: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_lengths() {
        for v in ECIES_VECTORS {
            let point_len = match v.curve {
                Curve::P256 => 65,
                Curve::P384 => 97,
            };
            assert_eq!(
                bytes(v.envelope).len(),
                point_len + v.plaintext.len() + 16,
                "{}",
                v.name
            );
            assert_eq!(bytes(v.recipient_public).len(), point_len, "{}", v.name);
        }
        for v in KDF_VECTORS {
            assert!(!bytes(v.output).is_empty());
        }
    }
}
