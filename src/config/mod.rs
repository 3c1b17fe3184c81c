mod schema;

pub mod init;

pub use schema::{ColorMode, Config, OutputConfig, OutputFormat};

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Get the config directory path (~/.config/vibecheck/)
pub fn get_config_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Could not determine home directory");
    home.join(".config").join("vibecheck")
}

/// Get the default config file path (~/.config/vibecheck/config.yaml)
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.yaml")
}

/// Load configuration from a YAML file.
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path
///   (~/.config/vibecheck/config.yaml)
///
/// # Errors
///
/// Returns an error if an explicitly given config file does not exist, if
/// the file cannot be read, or if the YAML cannot be parsed. An absent file
/// at the *default* path is not an error: every setting has a usable
/// default, so built-in defaults apply.
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let (config_path, explicit) = match path {
        Some(p) => (p, true),
        None => (get_config_path(), false),
    };

    if !config_path.exists() {
        if explicit {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    Ok(config)
}
