//! Terminal output helpers.
//!
//! Kept separate from the scan logic so the library surface has no printing
//! side effects.

use std::path::Path;

use colored::Colorize;

use crate::scanner::ScanOutcome;

/// Success mark for consistent output formatting
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print_destination(path: &Path, exists: bool, merge: bool) {
    if merge {
        println!(
            "{}",
            format!("requested to merge with existing {} file...", path.display())
                .yellow()
        );
    }
    if exists {
        println!("{}", format!("{} file detected!", path.display()).dimmed());
    } else {
        println!("{}", format!("{} file not found!", path.display()).dimmed());
    }
}

pub fn print_scan_summary(outcome: &ScanOutcome, verbose: bool) {
    let count = outcome.catalog.variable_count();
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} env {} across {} {}",
            count,
            if count == 1 { "key" } else { "keys" },
            outcome.files_scanned,
            if outcome.files_scanned == 1 {
                "file"
            } else {
                "files"
            }
        )
        .green()
    );

    if outcome.catalog.has_dynamic_keys() {
        eprintln!(
            "{} some env accesses use computed keys and were not cataloged",
            "warning:".bold().yellow()
        );
    }

    let sensitive: Vec<&str> = outcome.catalog.sensitive_keys().collect();
    if !sensitive.is_empty() {
        eprintln!(
            "{} {} {} sensitive; leave real values out of committed files",
            "warning:".bold().yellow(),
            sensitive.len(),
            if sensitive.len() == 1 {
                "key looks"
            } else {
                "keys look"
            }
        );
        if verbose {
            for key in sensitive {
                eprintln!("  {}", key.dimmed());
            }
        }
    }

    if !outcome.parse_failures.is_empty() {
        if verbose {
            for failure in &outcome.parse_failures {
                eprintln!(
                    "{} {}: {}",
                    "warning:".bold().yellow(),
                    failure.file_path,
                    failure.error
                );
            }
        } else {
            eprintln!(
                "{} {} file(s) could not be parsed (use {} for details)",
                "warning:".bold().yellow(),
                outcome.parse_failures.len(),
                "-v".cyan()
            );
        }
    }
}

pub fn print_nothing_to_write() {
    println!("{}", "No env keys found; nothing to write".dimmed());
}

pub fn print_types_written(path: &Path) {
    println!(
        "{}",
        format!("Type definitions written to {}", path.display()).green()
    );
}

pub fn print_written(path: &Path, updated: bool) {
    if updated {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        println!("{}", format!("{} updated", name).green());
    } else {
        println!("{}", format!("written to {}", path.display()).green());
    }
}
