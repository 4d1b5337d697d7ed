use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use log::{debug, trace};
use rsa::rand_core::OsRng;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use rsa::{BigUint, RsaPrivateKey};

use crate::error::JwkToolError;

/// RSA key components, each base64url encoded (big-endian, no padding).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaComponents {
    pub n: String,
    pub e: String,
    pub d: String,
    pub p: String,
    pub q: String,
    pub dp: String,
    pub dq: String,
    pub qi: String,
}

pub fn generate_private_key(bits: usize) -> Result<RsaPrivateKey, JwkToolError> {
    let mut rng = OsRng;
    debug!("generating {} bit RSA key", bits);
    RsaPrivateKey::new(&mut rng, bits).map_err(|e| JwkToolError::KeyGenerationFailed {
        bits,
        reason: e.to_string(),
    })
}

/// Pulls the public and private components out of a key.
///
/// A key without precomputed CRT values, or with fewer than two primes, is
/// rejected: such a key cannot produce a complete private JWK.
pub fn extract_components(key: &RsaPrivateKey) -> Result<RsaComponents, JwkToolError> {
    let bits = key.size() * 8;
    let missing = |what: &str| JwkToolError::KeyGenerationFailed {
        bits,
        reason: format!("generated key has no {}", what),
    };

    let primes = key.primes();
    if primes.len() < 2 {
        return Err(missing("prime factors"));
    }
    let dp = key.dp().ok_or_else(|| missing("dp value"))?;
    let dq = key.dq().ok_or_else(|| missing("dq value"))?;
    let qi = key.crt_coefficient().ok_or_else(|| missing("CRT coefficient"))?;

    trace!("extracted RSA components for {} bit key", bits);

    Ok(RsaComponents {
        n: encode_uint(key.n()),
        e: encode_uint(key.e()),
        d: encode_uint(key.d()),
        p: encode_uint(&primes[0]),
        q: encode_uint(&primes[1]),
        dp: encode_uint(dp),
        dq: encode_uint(dq),
        qi: encode_uint(&qi),
    })
}

/// base64url of the minimal big-endian byte representation.
pub fn encode_uint(value: &BigUint) -> String {
    URL_SAFE_NO_PAD.encode(value.to_bytes_be())
}
