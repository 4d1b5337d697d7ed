//! The interactive run: show both documents, then decide whether to save.
//!
//! Decision table for saving (`-f` = `auto_save`, `-o` = `auto_overwrite`):
//!
//! | `-f` | files exist | `-o` | prompts                  |
//! |------|-------------|------|--------------------------|
//! | no   | -           | -    | save? (`s` saves)        |
//! | any  | yes         | no   | overwrite? (`y` confirms)|
//! | any  | yes         | yes  | none                     |
//!
//! The overwrite prompt still shows with `-f` alone when a target exists, so
//! a fully unattended run that may collide needs `-f -o`.

use log::{debug, info, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{ToolConfig, AUTO_OVERWRITE_FLAG, AUTO_SAVE_FLAG};
use crate::crypt::AsymmetricKeyPair;
use crate::error::JwkToolError;
use crate::jwk::{app_settings_variant, to_private_document, to_public_document};
use crate::terminal::{Console, KeyReader, Style};

pub const SAVE_KEY: char = 's';
pub const OVERWRITE_KEY: char = 'y';

/// What happened to the key files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Written {
        private_path: PathBuf,
        public_path: PathBuf,
    },
    NotWritten,
}

/// Both serialized documents for one key pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyDocuments {
    pub private_json: String,
    pub public_json: String,
}

impl KeyDocuments {
    pub fn from_key_pair(key_pair: &AsymmetricKeyPair) -> Result<Self, JwkToolError> {
        Ok(KeyDocuments {
            private_json: to_private_document(key_pair)?,
            public_json: to_public_document(key_pair)?,
        })
    }
}

fn read_decision<R: KeyReader>(input: &mut R, accept: char) -> Result<bool, JwkToolError> {
    let key = input
        .read_key()
        .map_err(|e| JwkToolError::TerminalError(e.to_string()))?;
    debug!("operator pressed {:?}", key);
    Ok(key == Some(accept))
}

fn write_file(path: &Path, contents: &str) -> Result<(), JwkToolError> {
    fs::write(path, contents).map_err(|e| JwkToolError::FileWriteFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// Writes both documents as-is. The files are independent; if the second
/// write fails the first one stays on disk.
pub fn save_key_files(
    documents: &KeyDocuments,
    private_path: &Path,
    public_path: &Path,
) -> Result<(), JwkToolError> {
    write_file(private_path, &documents.private_json)?;
    write_file(public_path, &documents.public_json)?;
    info!(
        "wrote {} and {}",
        private_path.display(),
        public_path.display()
    );
    Ok(())
}

/// Prints the intro and both documents in raw and appSettings form.
pub fn print_documents<W: Write>(
    console: &mut Console<W>,
    documents: &KeyDocuments,
) -> Result<(), JwkToolError> {
    console.line(
        "Generating a private and public jwt information set for client authentication",
    )?;

    console.line("\n----- PRIVATE KEY SECTION -----")?;
    console.line(
        "The following represents the private key - to be used AT THE OAUTH CLIENT SIDE (e.g. OIDC RP)",
    )?;
    console.line("Json (as it can be stored in e.g. Azure Key Vault):")?;
    console.styled_line(&documents.private_json, Style::Cyan)?;
    console.line("appSettings compatible:")?;
    console.styled_line(&app_settings_variant(&documents.private_json), Style::DarkCyan)?;

    console.line("\n----- PUBLIC KEY SECTION -----")?;
    console.line(
        "The following represents the public key - to be used AT THE TOKEN SERVICE (CLIENT STORE)",
    )?;
    console.line("Json (as it can be stored in e.g. sql db):")?;
    console.styled_line(&documents.public_json, Style::Green)?;
    console.line("appSettings compatible:")?;
    console.styled_line(&app_settings_variant(&documents.public_json), Style::DarkGreen)?;
    console.line("-----")?;
    Ok(())
}

/// Runs the save prompt, the overwrite check and the write.
pub fn save_workflow<W: Write, R: KeyReader>(
    key_pair: &AsymmetricKeyPair,
    documents: &KeyDocuments,
    config: &ToolConfig,
    console: &mut Console<W>,
    input: &mut R,
) -> Result<SaveOutcome, JwkToolError> {
    let (private_path, public_path) = config.key_file_paths(key_pair.key_id());

    let mut save = config.auto_save;
    if !save {
        console.line(&format!(
            "Press '{}' to save the files as json (or any other key to skip)",
            SAVE_KEY
        ))?;
        save = read_decision(input, SAVE_KEY)?;
        console.styled_line(
            &format!(
                "For next time, you can pass {} as command argument, to write the json to files: {} and {} (prefix changes)",
                AUTO_SAVE_FLAG,
                private_path.display(),
                public_path.display()
            ),
            Style::DarkYellow,
        )?;
    }

    if save && !config.auto_overwrite && (private_path.exists() || public_path.exists()) {
        warn!("key files for kid={} already exist", key_pair.key_id());
        console.styled_line(
            &format!(
                "Files already exist - press '{}' to override (or any other key to abort)",
                OVERWRITE_KEY
            ),
            Style::Yellow,
        )?;
        save = read_decision(input, OVERWRITE_KEY)?;
        console.styled_line(
            &format!(
                "For next time, you can pass {} as command argument, to overwrite existing files.",
                AUTO_OVERWRITE_FLAG
            ),
            Style::DarkYellow,
        )?;
    }

    if !save {
        console.styled_line(
            "Files NOT written to disk as save option was not found or manually skipped",
            Style::Yellow,
        )?;
        return Ok(SaveOutcome::NotWritten);
    }

    save_key_files(documents, &private_path, &public_path)?;
    console.styled_line(
        &format!(
            "Files written to {} and {}",
            private_path.display(),
            public_path.display()
        ),
        Style::Yellow,
    )?;
    Ok(SaveOutcome::Written {
        private_path,
        public_path,
    })
}

/// The whole run after key generation: transcript, save decision, closing
/// lines and (unless `-f`) the exit pause.
pub fn run<W: Write, R: KeyReader>(
    key_pair: &AsymmetricKeyPair,
    config: &ToolConfig,
    console: &mut Console<W>,
    input: &mut R,
) -> Result<SaveOutcome, JwkToolError> {
    let documents = KeyDocuments::from_key_pair(key_pair)?;
    print_documents(console, &documents)?;

    let outcome = save_workflow(key_pair, &documents, config, console, input)?;

    console.line("")?;
    console.line("All done - Live long and prosper")?;

    if !config.auto_save {
        console.line("Press enter to exit")?;
        input
            .read_line()
            .map_err(|e| JwkToolError::TerminalError(e.to_string()))?;
    }
    Ok(outcome)
}
