use crate::conf::error::ConfigError;
use crate::conf::types::PixgateConfig;
use crate::conf::validate::validate;
use std::fs;
use std::path::Path;

/// Load and validate a Pixgate config file.
///
/// A config that loads is a config the server can boot with; every policy
/// invariant is checked here so nothing fails lazily at request time.
pub fn load_config(path: &Path) -> Result<PixgateConfig, ConfigError> {
    let contents =
        fs::read_to_string(path).map_err(|source| ConfigError::read_file(path, source))?;

    let config: PixgateConfig =
        toml::from_str(&contents).map_err(|source| ConfigError::parse(path, source))?;

    validate(&config)?;

    Ok(config)
}
