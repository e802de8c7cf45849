//! Merge semantics: reconcile a freshly computed catalog with an existing
//! destination file without discarding user-supplied values.
//!
//! The merged result is the union of existing keys (values preserved
//! verbatim, original order first) and newly discovered keys (appended in
//! catalog order). Re-running with no source changes reproduces the file
//! byte for byte.

use anyhow::{Context, Result, bail};
use indexmap::IndexMap;

use crate::catalog::EnvCatalog;
use crate::output::Format;

/// Parse an existing destination file into an ordered key→value map using
/// the same per-format extraction the renderer targets.
pub fn parse_existing(content: &str, format: Format) -> Result<IndexMap<String, String>> {
    match format {
        Format::Env => Ok(parse_env(content)),
        Format::Json => parse_json(content),
        Format::Yml => parse_yml(content),
    }
}

/// Union an existing map with the fresh catalog: existing keys first in
/// their original order, new keys appended in catalog order.
pub fn merge_with_existing(
    existing: IndexMap<String, String>,
    catalog: &EnvCatalog,
) -> IndexMap<String, String> {
    let mut merged = existing;
    for (key, entry) in catalog.variables() {
        if !merged.contains_key(key) {
            merged.insert(
                key.to_string(),
                entry.default_value.clone().unwrap_or_default(),
            );
        }
    }
    merged
}

fn parse_env(content: &str) -> IndexMap<String, String> {
    let mut vars = IndexMap::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        // Values are kept verbatim, quotes included, so rewriting the file
        // never reformats what the user wrote.
        vars.insert(key.to_string(), value.trim().to_string());
    }
    vars
}

fn parse_json(content: &str) -> Result<IndexMap<String, String>> {
    let value: serde_json::Value =
        serde_json::from_str(content).context("Failed to parse existing JSON output file")?;
    let serde_json::Value::Object(map) = value else {
        bail!("Existing JSON output file is not an object");
    };
    Ok(map
        .into_iter()
        .map(|(key, value)| (key, json_value_to_string(value)))
        .collect())
}

fn json_value_to_string(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn parse_yml(content: &str) -> Result<IndexMap<String, String>> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).context("Failed to parse existing YAML output file")?;
    let mapping = match value {
        serde_yaml::Value::Null => return Ok(IndexMap::new()),
        serde_yaml::Value::Mapping(mapping) => mapping,
        _ => bail!("Existing YAML output file is not a mapping"),
    };
    let mut vars = IndexMap::new();
    for (key, value) in mapping {
        let Some(key) = key.as_str() else {
            continue;
        };
        vars.insert(key.to_string(), yaml_value_to_string(value));
    }
    Ok(vars)
}

fn yaml_value_to_string(value: serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => String::new(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
