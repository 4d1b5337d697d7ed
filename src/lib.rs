//! Generates an RSA key pair and renders it as a private and a public JSON
//! Web Key, for `private_key_jwt` client authentication (RFC 7523).
//!
//! ```rust,ignore
//! use private_key_jwt::{crypt, jwk};
//!
//! let pair = crypt::generate_key_pair(crypt::DEFAULT_KEY_SIZE)?;
//! let for_client = jwk::to_private_document(&pair)?;
//! let for_token_service = jwk::to_public_document(&pair)?;
//! ```

use log::info;
use std::io::Write;

pub mod cli_utils;
pub mod config;
pub mod crypt;
pub mod error;
pub mod jwk;
pub mod observability;
pub mod terminal;

use cli_utils::SaveOutcome;
use config::ToolConfig;
use error::JwkToolError;
use terminal::{Console, KeyReader};

/// Generates a key with the configured size and runs the full workflow.
/// Generation failures return before anything is printed.
pub fn generate_and_run<W: Write, R: KeyReader>(
    config: &ToolConfig,
    console: &mut Console<W>,
    input: &mut R,
) -> Result<SaveOutcome, JwkToolError> {
    let key_pair = crypt::generate_key_pair(config.key_size)?;
    info!("generated key pair kid={}", key_pair.key_id());
    cli_utils::run(&key_pair, config, console, input)
}
