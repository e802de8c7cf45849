//! CLI argument definitions using clap.
//!
//! spotenv is a single-command tool: every invocation is a scan, shaped by
//! flags. CLI flags override `.spotenvrc.json` values, which override the
//! built-in defaults.

use std::path::PathBuf;

use clap::Parser;

use crate::output::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project directory to scan
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Path for the output file (file, directory, or a path to create)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Output format for the generated file
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Merge with an existing output file (keep existing keys and values)
    #[arg(short, long)]
    pub merge: bool,

    /// Watch source files and regenerate on change
    #[arg(short, long)]
    pub watch: bool,

    /// Also generate an env.d.ts type definition for discovered keys
    #[arg(long)]
    pub types: bool,

    /// Glob ignore patterns (replaces the default ignore set)
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
