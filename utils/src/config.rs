//! Registry parameter loading from TOML.

use emblem_types::RegistryParams;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load registry parameters from a TOML file.
///
/// Missing keys fall back to the Emblem defaults, so a config file only
/// needs to name the limits it overrides.
pub fn load_params(path: &Path) -> Result<RegistryParams, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}
