//! Output target resolution: map a user-supplied path and format hint to a
//! concrete destination decision.
//!
//! Users may pass a bare directory, a bare filename, or an extensionless
//! ambiguous string, and the tool must behave predictably without requiring
//! the path to exist yet. Ambiguity is resolved by policy (extensionless
//! non-existent paths default to directory semantics), never by failing.

use std::fmt;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output file format for the generated declaration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Env,
    Json,
    Yml,
}

impl Format {
    /// Extension used when swapping a file target's extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Env => "env",
            Format::Json => "json",
            Format::Yml => "yml",
        }
    }

    /// Filename used when the target is a directory.
    pub fn canonical_filename(self) -> &'static str {
        match self {
            Format::Env => ".env.example",
            Format::Json => "env.json",
            Format::Yml => "env.yaml",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Stdout,
    File,
    Directory,
}

/// Result of target resolution. Immutable once computed; drives both the
/// renderer format and the merge behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    pub kind: TargetKind,
    pub format: Option<Format>,
    pub final_path: Option<PathBuf>,
    /// Whether the computed final path already exists on disk, so merge
    /// logic knows whether there is anything to read.
    pub exists: bool,
}

/// Resolve a raw output path plus an optional requested format.
///
/// An empty path resolves to the stdout target with no format; rejecting
/// that is the CLI surface's call, not the resolver's.
pub fn resolve_output_target(raw: &str, requested: Option<Format>) -> OutputTarget {
    let raw = raw.trim();
    if raw.is_empty() {
        return OutputTarget {
            kind: TargetKind::Stdout,
            format: None,
            final_path: None,
            exists: false,
        };
    }

    let path = Path::new(raw);
    if path.is_dir() {
        return directory_target(path, requested.unwrap_or(Format::Env));
    }
    if path.is_file() {
        let format = requested
            .or_else(|| infer_format_from_basename(basename(path)))
            .unwrap_or(Format::Env);
        return file_target(path, format);
    }

    // The path does not exist yet. A trailing separator declares an
    // intended directory.
    if raw.ends_with('/') || raw.ends_with(MAIN_SEPARATOR) {
        return directory_target(path, requested.unwrap_or(Format::Env));
    }

    if basename_looks_like_file(basename(path)) {
        let format = requested
            .or_else(|| infer_format_from_basename(basename(path)))
            .unwrap_or(Format::Env);
        return file_target(path, format);
    }

    directory_target(path, requested.unwrap_or(Format::Env))
}

fn basename(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

fn directory_target(dir: &Path, format: Format) -> OutputTarget {
    let final_path = dir.join(format.canonical_filename());
    let exists = final_path.is_file();
    OutputTarget {
        kind: TargetKind::Directory,
        format: Some(format),
        final_path: Some(final_path),
        exists,
    }
}

fn file_target(path: &Path, format: Format) -> OutputTarget {
    let final_path = swap_to_format(path, format);
    let exists = final_path.is_file();
    OutputTarget {
        kind: TargetKind::File,
        format: Some(format),
        final_path: Some(final_path),
        exists,
    }
}

/// A basename names a file (rather than an intended directory) when it is a
/// `.env`-style dotfile or carries any extension.
fn basename_looks_like_file(name: &str) -> bool {
    name.starts_with(".env") || Path::new(name).extension().is_some()
}

fn infer_format_from_basename(name: &str) -> Option<Format> {
    if name.ends_with(".json") {
        Some(Format::Json)
    } else if name.ends_with(".yml") || name.ends_with(".yaml") {
        Some(Format::Yml)
    } else if name.starts_with(".env") || name.ends_with(".env") || name.starts_with('.') {
        Some(Format::Env)
    } else {
        None
    }
}

/// Final path for a file target.
///
/// The env format keeps the basename the user gave. For json/yml a
/// `.env`-prefixed basename is a first-class case that maps to the
/// canonical filename in the same directory; any other basename swaps its
/// extension.
fn swap_to_format(path: &Path, format: Format) -> PathBuf {
    if matches!(format, Format::Env) {
        return path.to_path_buf();
    }

    let name = basename(path);
    let new_name = if name.starts_with(".env") {
        format.canonical_filename().to_string()
    } else {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(name);
        format!("{}.{}", stem, format.extension())
    };

    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(new_name),
        _ => PathBuf::from(new_name),
    }
}
