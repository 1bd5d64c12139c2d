use crate::config::{self, Config};
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Print the effective config, noting when only defaults are in play.
pub fn list(config: &Config, path: &Path) -> Result<()> {
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not found, using defaults)", path.display());
    }
    println!("{}", toml_str);
    Ok(())
}

fn leaf_keys(value: &Value, prefix: &str, out: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{}.{}", prefix, name)
                };
                leaf_keys(child, &key, out);
            }
        }
        _ => out.push(prefix.to_string()),
    }
}

/// Every dotted key `get` accepts, e.g. `vehicles.b` or `animation.max_ms`.
pub fn valid_keys(config: &Config) -> Result<Vec<String>> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;
    let mut keys = Vec::new();
    leaf_keys(&value, "", &mut keys);
    Ok(keys)
}

/// Look up a dotted key. Keys are matched case-insensitively, so the
/// `vehicles.B` spelling used on the command line also works.
pub fn lookup(key: &str, config: &Config) -> Result<Value> {
    let value = serde_json::to_value(config).context("Failed to serialize config")?;
    let normalized = key.to_ascii_lowercase();

    let found = normalized
        .split('.')
        .try_fold(&value, |current, part| current.get(part));

    match found {
        Some(Value::Object(_)) | None => anyhow::bail!(
            "Unknown config key '{}'. Valid keys: {}",
            key,
            valid_keys(config)?.join(", ")
        ),
        Some(leaf) => Ok(leaf.clone()),
    }
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    match lookup(key, config)? {
        Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }
    Ok(())
}

/// Write the default config to `path` unless a file is already there.
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!("Config already exists at {}", path.display());
    }
    config::save_to_path(&Config::default(), path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
