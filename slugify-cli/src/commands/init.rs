//! Init command implementation.

use super::DEFAULT_CONFIG_FILE;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("../../../slugify.yml.example");

/// Write a starter slugify.yml into `path` (defaults to the current directory)
pub fn init_config(path: Option<&Path>) -> Result<()> {
    let root = path.unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(root).with_context(|| format!("Failed to create {:?}", root))?;

    let config_path = root.join(DEFAULT_CONFIG_FILE);
    if config_path.exists() {
        println!("{} already exists at {:?}", DEFAULT_CONFIG_FILE, config_path);
        return Ok(());
    }

    fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    println!("✓ Created {:?}", config_path);
    Ok(())
}
