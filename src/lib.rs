//! Spotenv - environment variable usage scanner
//!
//! Spotenv scans a JS/TS source tree for `process.env` accesses and
//! generates a reconciled declaration file (dotenv, JSON, or YAML)
//! describing every discovered variable.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, reporting, orchestration)
//! - `config`: Configuration file loading and parsing
//! - `parsers`: swc-based syntax analysis of one file
//! - `extract`: Per-file occurrence extraction from a syntax tree
//! - `scanner`: Project-wide file enumeration and aggregation
//! - `catalog`: Occurrence and catalog data model
//! - `output`: Target resolution, rendering, merging, and atomic writes
//! - `watch`: File-watch loop that re-triggers scans

pub mod catalog;
pub mod cli;
pub mod config;
pub mod extract;
pub mod output;
pub mod parsers;
pub mod scanner;
pub mod watch;
