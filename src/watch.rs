//! Watch mode: re-trigger a scan when source files change.
//!
//! File-system events feed a channel consumed by a single loop: the first
//! relevant event starts a quiet window, further events extend the burst,
//! and one rescan runs once the channel stays quiet. At most one scan is in
//! flight at any time by construction; the scan itself holds no
//! cross-invocation state.

use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::cli::run::{Destination, ScanSettings, scan_and_write};
use crate::scanner::is_scannable_file;

const QUIET_WINDOW: Duration = Duration::from_millis(400);

pub fn watch_and_rescan(settings: &ScanSettings, destination: &Destination) -> Result<()> {
    report_scan_error(scan_and_write(settings, destination));

    let (tx, rx) = mpsc::channel();
    let mut watcher = RecommendedWatcher::new(
        move |event: notify::Result<Event>| {
            let _ = tx.send(event);
        },
        notify::Config::default(),
    )
    .context("Failed to initialize file watcher")?;
    watcher
        .watch(&settings.root, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", settings.root.display()))?;

    let ignore: Vec<Pattern> = settings
        .ignore
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();

    println!("\n{}", "Watching for file changes...".blue());

    loop {
        let Ok(first) = rx.recv() else {
            return Ok(());
        };
        let mut relevant = is_relevant(&first, &ignore);

        // Coalesce the burst: drain events until the channel stays quiet.
        loop {
            match rx.recv_timeout(QUIET_WINDOW) {
                Ok(event) => relevant |= is_relevant(&event, &ignore),
                Err(RecvTimeoutError::Timeout) => break,
                Err(RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }

        if relevant {
            report_scan_error(scan_and_write(settings, destination));
        }
    }
}

fn report_scan_error(result: Result<()>) {
    if let Err(e) = result {
        eprintln!("{} scan failed: {:#}", "warning:".bold().yellow(), e);
    }
}

fn is_relevant(event: &notify::Result<Event>, ignore: &[Pattern]) -> bool {
    let Ok(event) = event else {
        return false;
    };
    event.paths.iter().any(|path| is_watched_path(path, ignore))
}

/// Only changes to scannable source files trigger a rescan; ignored paths
/// and the tool's own output files never do.
fn is_watched_path(path: &Path, ignore: &[Pattern]) -> bool {
    if !is_scannable_file(path) {
        return false;
    }
    let path_str = path.to_string_lossy();
    !ignore.iter().any(|pattern| pattern.matches(&path_str))
}
