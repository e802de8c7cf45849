//! Destination writes are all-or-nothing: the rendered text is fully
//! buffered, written to a temporary file in the destination directory, then
//! renamed over the target, so a crash mid-write never leaves a partially
//! written file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&parent)
        .with_context(|| format!("Failed to create output directory {}", parent.display()))?;

    let mut tmp = NamedTempFile::new_in(&parent)
        .with_context(|| format!("Failed to create temporary file in {}", parent.display()))?;
    tmp.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write output for {}", path.display()))?;
    tmp.persist(path)
        .with_context(|| format!("Failed to write output file {}", path.display()))?;
    Ok(())
}
