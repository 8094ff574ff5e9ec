//! Config command - manage configuration.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;
use tracing::debug;

use cardex_core::CardexConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Initialize a new configuration file
    Init(InitArgs),

    /// Get a specific configuration value
    Get {
        /// Configuration key (e.g., "ocr.language")
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// New value
        value: String,
    },

    /// Show configuration file path
    Path,
}

#[derive(Args)]
struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Get { key } => get_config(&key),
        ConfigCommand::Set { key, value } => set_config(&key, &value),
        ConfigCommand::Path => show_path(),
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cardex")
        .join("config.json")
}

/// Resolve the effective configuration: explicit `--config`, then the user
/// config file if present, then defaults; environment overrides last.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<CardexConfig> {
    let config = match config_path {
        Some(path) => CardexConfig::from_file(Path::new(path))?,
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                debug!("Loading config from {}", default_path.display());
                CardexConfig::from_file(&default_path)?
            } else {
                CardexConfig::default()
            }
        }
    };

    Ok(config.with_env_overrides())
}

fn load_or_default(path: &Path) -> anyhow::Result<CardexConfig> {
    if path.exists() {
        Ok(CardexConfig::from_file(path)?)
    } else {
        Ok(CardexConfig::default())
    }
}

fn show_config() -> anyhow::Result<()> {
    let config_path = default_config_path();

    if !config_path.exists() {
        println!(
            "{} No config file found, showing defaults.",
            style("ℹ").blue()
        );
    }
    let config = load_or_default(&config_path)?;

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    let output_path = args.output.unwrap_or_else(default_config_path);

    if output_path.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            output_path.display()
        );
    }

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }

    CardexConfig::default().save(&output_path)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        output_path.display()
    );

    Ok(())
}

fn get_config(key: &str) -> anyhow::Result<()> {
    let config = load_or_default(&default_config_path())?;
    let json = serde_json::to_value(&config)?;

    let value = lookup(&json, key)
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    println!("{}", serde_json::to_string_pretty(value)?);

    Ok(())
}

fn set_config(key: &str, value: &str) -> anyhow::Result<()> {
    let config_path = default_config_path();
    let config = load_or_default(&config_path)?;

    // Accept JSON literals; anything else is taken as a string
    let parsed_value: Value =
        serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));

    let updated = set_key(&config, key, parsed_value.clone())?;

    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)?;
    }
    updated.save(&config_path)?;

    println!(
        "{} Set {} = {}",
        style("✓").green(),
        key,
        serde_json::to_string(&parsed_value)?
    );

    Ok(())
}

fn show_path() -> anyhow::Result<()> {
    let config_path = default_config_path();

    println!("Configuration file: {}", config_path.display());

    if config_path.exists() {
        println!("Status: {}", style("exists").green());
    } else {
        println!("Status: {}", style("not created").yellow());
        println!();
        println!("Run 'cardex config init' to create a configuration file.");
    }

    Ok(())
}

/// Walk a dotted key through a JSON tree.
fn lookup<'a>(json: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(json, |current, part| current.get(part))
}

/// Replace an existing dotted key and re-validate the result as a config.
fn set_key(config: &CardexConfig, key: &str, value: Value) -> anyhow::Result<CardexConfig> {
    let mut json = serde_json::to_value(config)?;

    let (parent_key, leaf) = match key.rsplit_once('.') {
        Some((parent, leaf)) => (Some(parent), leaf),
        None => (None, key),
    };

    let mut parent = &mut json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    let obj = parent
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("Cannot set value at non-object path"))?;
    if !obj.contains_key(leaf) {
        anyhow::bail!("Configuration key not found: {}", key);
    }
    obj.insert(leaf.to_string(), value);

    serde_json::from_value(json)
        .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardex_core::ExtractorVariant;
    use serde_json::json;

    #[test]
    fn test_lookup_dotted_key() {
        let json = serde_json::to_value(CardexConfig::default()).unwrap();
        assert_eq!(lookup(&json, "ocr.language"), Some(&json!("eng")));
        assert_eq!(lookup(&json, "server.bind_addr"), Some(&json!("0.0.0.0:8000")));
        assert_eq!(lookup(&json, "ocr.missing"), None);
    }

    #[test]
    fn test_set_variant() {
        let updated = set_key(
            &CardexConfig::default(),
            "extraction.variant",
            json!("compact"),
        )
        .unwrap();
        assert_eq!(updated.extraction.variant, ExtractorVariant::Compact);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_value() {
        let config = CardexConfig::default();
        assert!(set_key(&config, "ocr.nope", json!(1)).is_err());
        assert!(set_key(&config, "server.max_upload_bytes", json!("lots")).is_err());
        assert!(set_key(&config, "extraction.variant", json!("tiny")).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardex.json");
        std::fs::write(&path, r#"{"extraction": {"variant": "compact"}}"#).unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.extraction.variant, ExtractorVariant::Compact);
        assert_eq!(config.ocr.language, "eng");
    }
}
