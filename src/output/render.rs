//! Catalog rendering: serialize an ordered key→value map to one of the
//! three output formats.
//!
//! Both the fresh path and the merge path render through the same map type
//! so the output is deterministic either way. The dynamic bucket never
//! reaches a renderer.

use anyhow::{Context, Result};
use indexmap::IndexMap;

use crate::catalog::EnvCatalog;
use crate::output::Format;

/// Project the catalog's non-dynamic variables into an ordered map of
/// key → default-or-empty.
pub fn catalog_to_map(catalog: &EnvCatalog) -> IndexMap<String, String> {
    catalog
        .variables()
        .map(|(key, entry)| {
            (
                key.to_string(),
                entry.default_value.clone().unwrap_or_default(),
            )
        })
        .collect()
}

/// Render an ordered variable map as text in the given format.
pub fn render(vars: &IndexMap<String, String>, format: Format) -> Result<String> {
    match format {
        Format::Env => Ok(render_env(vars)),
        Format::Json => {
            let mut text = serde_json::to_string_pretty(vars)
                .context("Failed to serialize variables as JSON")?;
            text.push('\n');
            Ok(text)
        }
        Format::Yml => {
            serde_yaml::to_string(vars).context("Failed to serialize variables as YAML")
        }
    }
}

fn render_env(vars: &IndexMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in vars {
        out.push_str(key);
        out.push('=');
        out.push_str(&format_env_value(value));
        out.push('\n');
    }
    out
}

/// Values pass through unquoted unless they require it. Values that arrive
/// already quoted (the merge path hands back verbatim text from an existing
/// file) are emitted as-is, which keeps env merges byte-stable.
fn format_env_value(value: &str) -> String {
    if value.is_empty() || is_quoted(value) {
        return value.to_string();
    }
    if needs_quotes(value) {
        return quote(value);
    }
    value.to_string()
}

fn is_quoted(value: &str) -> bool {
    value.len() >= 2
        && ((value.starts_with('"') && value.ends_with('"'))
            || (value.starts_with('\'') && value.ends_with('\'')))
}

fn needs_quotes(value: &str) -> bool {
    value
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '#' | '"' | '\'' | '$' | '`' | '\\' | '='))
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}
