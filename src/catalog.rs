//! Catalog data model: occurrences folded into an ordered, deduplicated map.

use indexmap::IndexMap;

/// Reserved catalog entry collecting accesses whose key is not statically known.
pub const DYNAMIC_KEY: &str = "<DYNAMIC_KEY>";

/// One syntactic sighting of an environment-variable access inside a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvOccurrence {
    /// Literal variable name, or [`DYNAMIC_KEY`] for computed subscripts.
    pub key: String,
    /// Literal fallback extracted from `|| lit`, `?? lit` or `cond ? _ : lit`.
    pub default_value: Option<String>,
    /// Key text matches the secret/token/key/password pattern.
    pub looks_sensitive: bool,
    /// Path of the file the access was found in. Diagnostics only.
    pub source_file: String,
}

/// Aggregated record for one variable across all of its occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub default_value: Option<String>,
    pub looks_sensitive: bool,
}

/// Project-wide result of a scan.
///
/// Key order is insertion order of first encounter, and because files are
/// analyzed in lexicographic path order the catalog order is reproducible
/// across runs.
#[derive(Debug, Default)]
pub struct EnvCatalog {
    entries: IndexMap<String, CatalogEntry>,
}

impl EnvCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one occurrence into the catalog.
    ///
    /// The first non-empty default wins; later differing defaults for the
    /// same key are ignored. Sensitivity is OR-accumulated. The dynamic
    /// bucket never carries a default or a sensitivity bit.
    pub fn record(&mut self, occurrence: EnvOccurrence) {
        let entry = self.entries.entry(occurrence.key.clone()).or_default();

        if occurrence.key == DYNAMIC_KEY {
            return;
        }

        if entry.default_value.is_none()
            && let Some(default) = occurrence.default_value
            && !default.is_empty()
        {
            entry.default_value = Some(default);
        }
        entry.looks_sensitive |= occurrence.looks_sensitive;
    }

    /// Non-dynamic variables in catalog order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.as_str() != DYNAMIC_KEY)
            .map(|(key, entry)| (key.as_str(), entry))
    }

    /// Number of distinct non-dynamic keys.
    pub fn variable_count(&self) -> usize {
        self.variables().count()
    }

    /// True if at least one access used a key that could not be resolved.
    pub fn has_dynamic_keys(&self) -> bool {
        self.entries.contains_key(DYNAMIC_KEY)
    }

    /// Non-dynamic keys whose text looks sensitive, in catalog order.
    pub fn sensitive_keys(&self) -> impl Iterator<Item = &str> {
        self.variables()
            .filter(|(_, entry)| entry.looks_sensitive)
            .map(|(key, _)| key)
    }

    pub fn get(&self, key: &str) -> Option<&CatalogEntry> {
        self.entries.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
