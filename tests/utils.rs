#![allow(dead_code)]

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use private_key_jwt::crypt::{rsawrapper, AsymmetricKeyPair};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use serde_json::Value;
use std::sync::OnceLock;

/// One 2048 bit key shared by every test in a binary; generation is slow.
pub fn shared_private_key() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| {
        rsawrapper::generate_private_key(2048).expect("key generation should succeed")
    })
}

pub fn load_test_key_pair(kid: &str) -> AsymmetricKeyPair {
    AsymmetricKeyPair::from_private_key(shared_private_key(), kid)
        .expect("generated keys carry private material")
}

pub fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("document should be valid JSON")
}

pub fn jwk_uint(jwk: &Value, field: &str) -> BigUint {
    let encoded = jwk[field]
        .as_str()
        .unwrap_or_else(|| panic!("field {} should be a string", field));
    let bytes = URL_SAFE_NO_PAD
        .decode(encoded)
        .unwrap_or_else(|e| panic!("field {} is not base64url: {}", field, e));
    BigUint::from_bytes_be(&bytes)
}

pub fn public_key_from_jwk(jwk: &Value) -> RsaPublicKey {
    RsaPublicKey::new(jwk_uint(jwk, "n"), jwk_uint(jwk, "e")).expect("valid public key")
}

pub fn private_key_from_jwk(jwk: &Value) -> RsaPrivateKey {
    RsaPrivateKey::from_components(
        jwk_uint(jwk, "n"),
        jwk_uint(jwk, "e"),
        jwk_uint(jwk, "d"),
        vec![jwk_uint(jwk, "p"), jwk_uint(jwk, "q")],
    )
    .expect("valid private key")
}
