use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::config::{get_config_path, Config, OutputConfig, OutputFormat};
use crate::sentiment::{validate_thresholds, ThresholdConfig};

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout().flush().context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

fn prompt_cutoff(message: &str, default: &str) -> Result<f64> {
    loop {
        let input = prompt_with_default(message, default)?;
        match input.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("  Invalid: must be a number. Try again."),
        }
    }
}

/// Run the interactive init wizard to create a config file.
///
/// If `default_path` is Some, uses that as the config file path.
/// Otherwise, prompts the user with the default config path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    println!("vibecheck configuration");
    println!("=======================");
    println!();

    println!("Classification cutoffs decide how a compound score turns into a label:");
    println!("at or above the positive cutoff reads as positive, at or below the");
    println!("negative cutoff as negative, and anything between as neutral.");
    println!();

    let thresholds = loop {
        let positive = prompt_cutoff("Positive cutoff", "0.05")?;
        let negative = prompt_cutoff("Negative cutoff", "-0.05")?;

        let candidate = ThresholdConfig {
            positive: Some(positive),
            negative: Some(negative),
        };
        match validate_thresholds(&candidate) {
            Ok(()) => break candidate,
            Err(errors) => {
                for error in errors {
                    println!("  Invalid: {}. Try again.", error);
                }
            }
        }
    };

    println!();
    let format = loop {
        let input = prompt_with_default("Default output format (detail/compact/json)", "detail")?;
        match input.as_str() {
            "detail" => break OutputFormat::Detail,
            "compact" => break OutputFormat::Compact,
            "json" => break OutputFormat::Json,
            _ => println!("  Invalid: choose detail, compact, or json."),
        }
    };

    // Config path
    let default_config_path = default_path.unwrap_or_else(get_config_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the config be saved?",
        &default_config_path.display().to_string(),
    )?;
    let config_path = PathBuf::from(&path_str);

    // Check if file already exists
    if config_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Config already exists at {}. Overwrite?",
                config_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let config = Config {
        thresholds: Some(thresholds),
        output: Some(OutputConfig {
            format: Some(format),
            color: None,
        }),
    };

    let yaml = serde_saphyr::to_string(&config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    // Create parent directories
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(&config_path, &yaml)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!();
    println!("Config written to {}", config_path.display());
    println!("Run `vibecheck \"some text\"` to get started.");

    Ok(())
}
