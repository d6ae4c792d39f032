//! CLI command implementations.

pub mod check;
pub mod convert;
pub mod init;

pub use check::check_slugs;
pub use convert::{convert_texts, ConvertOptions};
pub use init::init_config;

use anyhow::{Context, Result};
use slugify_core::Config;
use std::path::Path;

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "slugify.yml";

/// Load the converter configuration.
///
/// An explicit path must exist. Without one, `slugify.yml` in the current
/// directory is used when present and the defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration from {:?}", path)),
        None => {
            let default = Path::new(DEFAULT_CONFIG_FILE);
            if default.exists() {
                Config::from_file(default).context("Failed to load configuration")
            } else {
                tracing::debug!("No {} found, using default options", DEFAULT_CONFIG_FILE);
                Ok(Config::default())
            }
        }
    }
}
