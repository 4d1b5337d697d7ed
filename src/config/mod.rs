use log::debug;
use std::env;
use std::path::PathBuf;

use crate::crypt::DEFAULT_KEY_SIZE;

/*
Configuration comes from two places, later ones win:

1. Command line flags. Only two exist and they are matched by exact string
   equality, order independent:
     -f   save without asking (and skip the final "press enter" pause)
     -o   overwrite existing files without asking
2. Environment variables:
     PRIVATE_KEY_JWT_OUTPUT_DIR   where the two json files go (default: cwd)
     PRIVATE_KEY_JWT_LOG          env_logger filter, e.g. "debug" (default: warn);
                                  "off" installs no logger at all
     PRIVATE_KEY_JWT_NO_COLOR     any non-empty value turns colors off
     NO_COLOR                     same, the cross-tool convention

The key size is fixed at 2048 bits and is not configurable.
*/

pub const AUTO_SAVE_FLAG: &str = "-f";
pub const AUTO_OVERWRITE_FLAG: &str = "-o";

pub const OUTPUT_DIR_ENV: &str = "PRIVATE_KEY_JWT_OUTPUT_DIR";
pub const LOG_ENV: &str = "PRIVATE_KEY_JWT_LOG";
pub const NO_COLOR_ENV: &str = "PRIVATE_KEY_JWT_NO_COLOR";
pub const STANDARD_NO_COLOR_ENV: &str = "NO_COLOR";

pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const LOG_OFF: &str = "off";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub enabled: bool,
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub auto_save: bool,
    pub auto_overwrite: bool,
    pub output_dir: PathBuf,
    pub key_size: usize,
    pub colors: bool,
    pub log: LogConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            auto_save: false,
            auto_overwrite: false,
            output_dir: PathBuf::new(),
            key_size: DEFAULT_KEY_SIZE,
            colors: true,
            log: LogConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Builds the configuration from process arguments. Anything that is not
    /// exactly `-f` or `-o` is ignored.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = ToolConfig::default();
        for arg in args {
            match arg.as_ref() {
                AUTO_SAVE_FLAG => config.auto_save = true,
                AUTO_OVERWRITE_FLAG => config.auto_overwrite = true,
                _ => {}
            }
        }
        config
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| env::var(key).ok());
    }

    /// Applies overrides from any key/value source. Empty values count as
    /// unset.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_opt = |key: &str| lookup(key).filter(|val| !val.is_empty());

        if let Some(val) = env_opt(OUTPUT_DIR_ENV) {
            self.output_dir = PathBuf::from(val);
        }
        if let Some(val) = env_opt(LOG_ENV) {
            self.log.enabled = !val.trim().eq_ignore_ascii_case(LOG_OFF);
            self.log.level = val;
        }
        if env_opt(NO_COLOR_ENV).is_some() || env_opt(STANDARD_NO_COLOR_ENV).is_some() {
            self.colors = false;
        }
        debug!(
            "config: auto_save={} auto_overwrite={} output_dir={}",
            self.auto_save,
            self.auto_overwrite,
            self.output_dir.display()
        );
    }

    /// `{kid}_private.json` and `{kid}_public.json` under the output
    /// directory.
    pub fn key_file_paths(&self, key_id: &str) -> (PathBuf, PathBuf) {
        (
            self.output_dir.join(private_key_filename(key_id)),
            self.output_dir.join(public_key_filename(key_id)),
        )
    }
}

pub fn private_key_filename(key_id: &str) -> String {
    format!("{}_private.json", key_id)
}

pub fn public_key_filename(key_id: &str) -> String {
    format!("{}_public.json", key_id)
}
