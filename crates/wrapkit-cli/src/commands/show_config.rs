// Rust guideline compliant 2026-10-16

//! Prints the effective configuration.

use anyhow::Result;
use wrapkit_core::Config;

/// Prints `config` as TOML.
///
/// # Errors
///
/// Returns an error if the configuration cannot be serialized.
pub fn execute(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
