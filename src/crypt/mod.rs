pub mod rsawrapper;

use log::debug;
use rand::Rng;
use rsa::RsaPrivateKey;

use crate::error::JwkToolError;
use rsawrapper::RsaComponents;

/// Key size used by the tool. Not exposed on the command line.
pub const DEFAULT_KEY_SIZE: usize = 2048;

/// Usage hint written to `use` for every generated key.
pub const SIGNATURE_KEY_USE: &str = "sig";

const KEY_ID_BYTES: usize = 16;

/// One RSA key pair with its identifier, components already JWK encoded.
///
/// The value is read-only once built; `without_key_use` hands back a new
/// value instead of changing this one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsymmetricKeyPair {
    key_id: String,
    key_use: Option<String>,
    components: RsaComponents,
}

impl AsymmetricKeyPair {
    /// Wraps an existing private key. Fails when the key lacks any of the
    /// private components a JWK needs.
    pub fn from_private_key(key: &RsaPrivateKey, key_id: &str) -> Result<Self, JwkToolError> {
        Ok(AsymmetricKeyPair {
            key_id: key_id.to_string(),
            key_use: Some(SIGNATURE_KEY_USE.to_string()),
            components: rsawrapper::extract_components(key)?,
        })
    }

    /// Same key with no usage hint.
    pub fn without_key_use(&self) -> Self {
        AsymmetricKeyPair {
            key_use: None,
            ..self.clone()
        }
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    pub fn key_use(&self) -> Option<&str> {
        self.key_use.as_deref()
    }

    pub fn modulus(&self) -> &str {
        &self.components.n
    }

    pub fn public_exponent(&self) -> &str {
        &self.components.e
    }

    pub fn private_exponent(&self) -> &str {
        &self.components.d
    }

    pub fn prime_p(&self) -> &str {
        &self.components.p
    }

    pub fn prime_q(&self) -> &str {
        &self.components.q
    }

    pub fn prime_exponent_p(&self) -> &str {
        &self.components.dp
    }

    pub fn prime_exponent_q(&self) -> &str {
        &self.components.dq
    }

    pub fn crt_coefficient(&self) -> &str {
        &self.components.qi
    }
}

/// 16 random bytes, lowercase hex.
pub fn generate_key_id() -> String {
    let mut bytes = [0u8; KEY_ID_BYTES];
    rand::rng().fill(&mut bytes);
    hex::encode(bytes)
}

/// Generates a fresh RSA key pair and assigns it a new key id.
pub fn generate_key_pair(bits: usize) -> Result<AsymmetricKeyPair, JwkToolError> {
    let private_key = rsawrapper::generate_private_key(bits)?;
    let key_id = generate_key_id();
    let pair = AsymmetricKeyPair::from_private_key(&private_key, &key_id)?;
    debug!("generated {} bit RSA key pair kid={}", bits, pair.key_id());
    Ok(pair)
}
