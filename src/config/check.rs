//! `config --check`: report keys missing from the YAML file.

use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys a complete configuration file carries.
pub const KNOWN_KEYS: &[&str] = &[
    "database",
    "search_result_limit",
    "default_view",
    "confirm_deletes",
];

/// Known keys absent from the file at `path`.
/// A missing file reports every key.
pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(KNOWN_KEYS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    let Some(map) = yaml.as_mapping() else {
        return Ok(KNOWN_KEYS.to_vec());
    };

    Ok(KNOWN_KEYS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Keys in the file this version does not know about.
pub fn unknown_keys(path: &Path) -> AppResult<Vec<String>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;
    let Some(map) = yaml.as_mapping() else {
        return Ok(Vec::new());
    };

    Ok(map
        .keys()
        .filter_map(|k| k.as_str())
        .filter(|k| !KNOWN_KEYS.contains(k))
        .map(str::to_string)
        .collect())
}
