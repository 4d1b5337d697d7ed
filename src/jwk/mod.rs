//! JSON Web Key documents for one RSA key pair.
//!
//! A key pair is split into two documents:
//!
//! - the **public** document (`kty`, `use`, `kid`, `e`, `n`), safe to register
//!   with a token service client store;
//! - the **private** document, which adds `d`, `dp`, `dq`, `p`, `q`, `qi` and
//!   must only ever be handed to the OAuth client.
//!
//! Fields without a value are left out of the JSON entirely. Several JWK
//! consumers reject `"use": null` or `"use": ""`, so neither is ever written.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::crypt::AsymmetricKeyPair;
use crate::error::JwkToolError;

/// `kty` for every document this crate produces.
pub const RSA_KEY_TYPE: &str = "RSA";

/// Public half of a JWK. The certificate and elliptic-curve members are kept
/// for completeness of the format; RSA keys never fill them.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicJwkDocument {
    #[serde(default, skip_serializing_if = "is_absent")]
    pub kty: Option<String>,
    #[serde(rename = "use", default, skip_serializing_if = "is_absent")]
    pub key_use: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub kid: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub x5t: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub e: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub n: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent_list")]
    pub x5c: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub alg: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub y: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub crv: Option<String>,
}

/// Private JWK: every public member followed by the private components.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PrivateJwkDocument {
    #[serde(flatten)]
    pub public: PublicJwkDocument,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub d: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub dp: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub dq: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub p: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub q: Option<String>,
    #[serde(default, skip_serializing_if = "is_absent")]
    pub qi: Option<String>,
}

fn is_absent(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn is_absent_list(value: &Option<Vec<String>>) -> bool {
    value.as_ref().is_none_or(Vec::is_empty)
}

fn present(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn public_document(key_pair: &AsymmetricKeyPair) -> PublicJwkDocument {
    PublicJwkDocument {
        kty: Some(RSA_KEY_TYPE.to_string()),
        key_use: key_pair.key_use().and_then(present),
        kid: present(key_pair.key_id()),
        e: present(key_pair.public_exponent()),
        n: present(key_pair.modulus()),
        ..Default::default()
    }
}

pub fn private_document(key_pair: &AsymmetricKeyPair) -> PrivateJwkDocument {
    PrivateJwkDocument {
        public: public_document(key_pair),
        d: present(key_pair.private_exponent()),
        dp: present(key_pair.prime_exponent_p()),
        dq: present(key_pair.prime_exponent_q()),
        p: present(key_pair.prime_p()),
        q: present(key_pair.prime_q()),
        qi: present(key_pair.crt_coefficient()),
    }
}

/// Compact JSON of the public JWK.
pub fn to_public_document(key_pair: &AsymmetricKeyPair) -> Result<String, JwkToolError> {
    let json = serde_json::to_string(&public_document(key_pair))?;
    trace!("public jwk for kid={} is {} bytes", key_pair.key_id(), json.len());
    Ok(json)
}

/// Compact JSON of the private JWK.
pub fn to_private_document(key_pair: &AsymmetricKeyPair) -> Result<String, JwkToolError> {
    let json = serde_json::to_string(&private_document(key_pair))?;
    trace!("private jwk for kid={} is {} bytes", key_pair.key_id(), json.len());
    Ok(json)
}

/// The document with every `"` swapped for `'`, for config formats (such as
/// .NET appSettings) where embedded double quotes are awkward.
pub fn app_settings_variant(json: &str) -> String {
    json.replace('"', "'")
}
