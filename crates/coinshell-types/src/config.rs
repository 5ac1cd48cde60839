//! Shell configuration loaded from `coinshell.toml`.

use std::path::Path;

use serde::Deserialize;

use crate::error::{CoinshellError, Result};

/// Widest accepted `name_padding`.
pub const MAX_NAME_PADDING: usize = 80;

/// Runtime configuration for the wallet shell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Currency ticker substituted into command descriptions.
    pub ticker: String,
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Paint console output with ANSI colours.
    pub color: bool,
    /// Column width of the command name in listings.
    pub name_padding: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            ticker: "TRTL".to_string(),
            prompt: "> ".to_string(),
            color: true,
            name_padding: 25,
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| CoinshellError::Config(format!("coinshell.toml: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.name_padding > MAX_NAME_PADDING {
            return Err(CoinshellError::Config(format!(
                "coinshell.toml: name_padding {} exceeds {MAX_NAME_PADDING}",
                self.name_padding
            )));
        }
        Ok(())
    }

    /// Load a configuration file.
    ///
    /// A missing file is not an error: the defaults are returned instead.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }
}
