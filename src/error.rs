//! Error types for the private-key-jwt crate.
//!
//! Every failure the tool can hit is fatal for the current run: there is no
//! retry path. The variants exist so the binary can print a message that
//! tells the operator what went wrong and what to check.
//!
//! # Example
//!
//! ```rust,ignore
//! use private_key_jwt::error::JwkToolError;
//!
//! fn write(path: &str, json: &str) -> Result<(), JwkToolError> {
//!     std::fs::write(path, json).map_err(|e| JwkToolError::FileWriteFailed {
//!         path: path.to_string(),
//!         reason: e.to_string(),
//!     })
//! }
//! ```

use std::error::Error;
use std::fmt;

/// Unified error type for key generation, serialization and persistence.
#[derive(Debug)]
pub enum JwkToolError {
    /// The RSA primitive failed, or produced a key without usable private
    /// material. Nothing is displayed or saved after this.
    KeyGenerationFailed { bits: usize, reason: String },

    /// An output file could not be written (permissions, disk full).
    FileWriteFailed { path: String, reason: String },

    /// A JWK document could not be turned into JSON.
    SerializationFailed(String),

    /// Reading a keypress or a line from the terminal failed.
    TerminalError(String),

    /// Configuration taken from the environment is invalid.
    ConfigError(String),

    /// IO error wrapper.
    IoError(std::io::Error),
}

impl fmt::Display for JwkToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JwkToolError::KeyGenerationFailed { bits, reason } => {
                write!(f, "Failed to generate {}-bit RSA keypair: {}", bits, reason)
            }
            JwkToolError::FileWriteFailed { path, reason } => {
                write!(
                    f,
                    "Failed to write file '{}': {}. Check that the directory exists and has write permissions.",
                    path, reason
                )
            }
            JwkToolError::SerializationFailed(msg) => {
                write!(f, "Failed to serialize JSON web key: {}", msg)
            }
            JwkToolError::TerminalError(msg) => write!(f, "Terminal error: {}", msg),
            JwkToolError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            JwkToolError::IoError(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl Error for JwkToolError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JwkToolError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for JwkToolError {
    fn from(err: std::io::Error) -> Self {
        JwkToolError::IoError(err)
    }
}

impl From<serde_json::Error> for JwkToolError {
    fn from(err: serde_json::Error) -> Self {
        JwkToolError::SerializationFailed(err.to_string())
    }
}
