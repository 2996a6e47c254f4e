//! Settings file parsing and validation

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "structgen.toml";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// structgen.toml structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Log filter used when `RUST_LOG` is unset and no verbosity flag is given
    pub log_level: String,

    /// JSON file recording custom plugins; a leading `~/` means the home directory
    pub plugins_file: PathBuf,

    /// Directory scanned for official script plugins
    pub official_plugins_dir: PathBuf,

    /// Interpreter pinned for every script plugin
    pub interpreter: Option<String>,

    pub server: ServerSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            plugins_file: PathBuf::from("~/.structgen/plugins.json"),
            official_plugins_dir: PathBuf::from("plugins/official"),
            interpreter: None,
            server: ServerSection::default(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Settings {
    /// Load settings from `explicit` if given, else `./structgen.toml` when
    /// present, else defaults. The result is validated.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let settings = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => {
                Self::from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };

        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read settings: {:?}", path.as_ref()))?;

        Self::from_str(&content)
            .with_context(|| format!("Invalid settings file: {:?}", path.as_ref()))
    }

    /// Parse settings from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse settings")
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log_level '{}' (expected one of: {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            );
        }

        if self.server.host.trim().is_empty() {
            anyhow::bail!("server.host cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("server.port must be non-zero");
        }

        if let Some(interpreter) = &self.interpreter
            && interpreter.trim().is_empty()
        {
            anyhow::bail!("interpreter cannot be empty when set");
        }

        Ok(())
    }

    /// Plugins file with `~/` expanded
    pub fn plugins_path(&self) -> PathBuf {
        expand_home(&self.plugins_file, BaseDirs::new().as_ref().map(|d| d.home_dir()))
    }
}

/// Replace a leading `~` component with `home`. Paths are left alone when
/// no home directory is known.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
