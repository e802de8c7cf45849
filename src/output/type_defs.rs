//! Type-definition emission: a static TypeScript declaration of every
//! discovered non-dynamic key, for editor autocompletion. A pure projection
//! of the catalog; no merge semantics.

use std::sync::LazyLock;

use regex::Regex;

use crate::catalog::EnvCatalog;

pub const TYPE_DEFS_FILENAME: &str = "env.d.ts";

static IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap());

pub fn render_type_definitions(catalog: &EnvCatalog) -> String {
    let mut out = String::new();
    out.push_str("// Generated by spotenv. Discovered environment variables.\n");
    out.push_str("declare global {\n");
    out.push_str("  namespace NodeJS {\n");
    out.push_str("    interface ProcessEnv {\n");
    for (key, _) in catalog.variables() {
        if IDENTIFIER_REGEX.is_match(key) {
            out.push_str(&format!("      {}?: string;\n", key));
        } else {
            out.push_str(&format!(
                "      \"{}\"?: string;\n",
                key.replace('"', "\\\"")
            ));
        }
    }
    out.push_str("    }\n");
    out.push_str("  }\n");
    out.push_str("}\n");
    out.push('\n');
    out.push_str("export {};\n");
    out
}
