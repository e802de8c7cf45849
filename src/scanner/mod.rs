//! Project aggregation: enumerate source files, analyze each, fold the
//! results into one catalog.

use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;

use crate::catalog::{EnvCatalog, EnvOccurrence};
use crate::extract::extract_occurrences;
use crate::parsers::parse_source;

/// A file that could not be read or parsed. Recovered, skipped, reported.
#[derive(Debug, Clone)]
pub struct ParseFailure {
    pub file_path: String,
    pub error: String,
}

/// Result of one project scan.
pub struct ScanOutcome {
    pub catalog: EnvCatalog,
    pub files_scanned: usize,
    pub parse_failures: Vec<ParseFailure>,
}

/// Scan a project directory for environment-variable usage.
///
/// File reads and parsing run in parallel, but occurrences are folded into
/// the catalog in lexicographic path order so the catalog is reproducible
/// across runs. Individual unreadable or unparsable files contribute zero
/// occurrences and never fail the scan.
pub fn scan_project(
    root: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<ScanOutcome> {
    let files = enumerate_files(root, ignore_patterns, verbose)?;

    let per_file: Vec<Result<Vec<EnvOccurrence>, ParseFailure>> = files
        .par_iter()
        .map(|path| analyze_file(path))
        .collect();

    let mut catalog = EnvCatalog::new();
    let mut parse_failures = Vec::new();
    for result in per_file {
        match result {
            Ok(occurrences) => {
                for occurrence in occurrences {
                    catalog.record(occurrence);
                }
            }
            Err(failure) => parse_failures.push(failure),
        }
    }

    Ok(ScanOutcome {
        catalog,
        files_scanned: files.len(),
        parse_failures,
    })
}

fn analyze_file(path: &Path) -> Result<Vec<EnvOccurrence>, ParseFailure> {
    let file_path = path.to_string_lossy().to_string();
    let code = std::fs::read_to_string(path).map_err(|e| ParseFailure {
        file_path: file_path.clone(),
        error: format!("Failed to read file: {}", e),
    })?;
    let program = parse_source(code, &file_path).map_err(|e| ParseFailure {
        file_path: file_path.clone(),
        error: e.to_string(),
    })?;
    Ok(extract_occurrences(&program, &file_path))
}

/// Candidate source files under `root`, in lexicographic path order.
pub fn enumerate_files(
    root: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<Vec<PathBuf>> {
    let mut patterns: Vec<Pattern> = Vec::new();
    for raw in ignore_patterns {
        match Pattern::new(raw) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        raw,
                        e
                    );
                }
            }
        }
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && is_scannable_file(path) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    files.dedup();

    // WalkDir errors on a missing root are absorbed above; surface that case
    // explicitly so the caller gets a real error instead of an empty scan.
    if !root.exists() {
        anyhow::bail!("Scan directory '{}' does not exist", root.display());
    }

    Ok(files)
}

/// Source files with JS/TS-family extensions. Generated declaration files
/// are always excluded.
pub fn is_scannable_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if name.ends_with(".d.ts") || name.ends_with(".d.mts") {
        return false;
    }
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("js" | "jsx" | "ts" | "tsx" | "mjs" | "mts")
    )
}
