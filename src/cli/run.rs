//! Invocation orchestration: resolve effective settings, resolve the output
//! target, run the scan, and write the result (once, or repeatedly in watch
//! mode).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use super::args::Arguments;
use super::exit_status::ExitStatus;
use super::report;
use crate::config::{self, Config};
use crate::output::merge::{merge_with_existing, parse_existing};
use crate::output::render::{catalog_to_map, render};
use crate::output::type_defs::{TYPE_DEFS_FILENAME, render_type_definitions};
use crate::output::write::write_atomic;
use crate::output::{Format, resolve_output_target};
use crate::scanner::scan_project;
use crate::watch;

/// Effective settings for one invocation, built once: CLI flags layered
/// over `.spotenvrc.json` over built-in defaults.
pub struct ScanSettings {
    pub root: PathBuf,
    pub ignore: Vec<String>,
    pub merge: bool,
    pub types: bool,
    pub verbose: bool,
}

/// The concrete destination a scan writes to.
pub struct Destination {
    pub format: Format,
    pub path: PathBuf,
}

pub fn run(args: Arguments) -> Result<ExitStatus> {
    let start_dir = args.dir.clone().unwrap_or_else(|| PathBuf::from("."));
    let loaded = config::load_config(&start_dir);

    let (settings, out, format, watch_mode) = resolve_settings(args, loaded.config);

    let target = resolve_output_target(&out, format);
    let (Some(format), Some(path)) = (target.format, target.final_path.clone()) else {
        bail!("invalid target path to generate output file");
    };
    let destination = Destination { format, path };

    report::print_destination(&destination.path, target.exists, settings.merge);

    if watch_mode {
        watch::watch_and_rescan(&settings, &destination)?;
    } else {
        scan_and_write(&settings, &destination)?;
    }

    Ok(ExitStatus::Success)
}

fn resolve_settings(
    args: Arguments,
    config: Config,
) -> (ScanSettings, String, Option<Format>, bool) {
    let settings = ScanSettings {
        root: args
            .dir
            .unwrap_or_else(|| PathBuf::from(&config.dir)),
        ignore: if args.ignore.is_empty() {
            config.ignore
        } else {
            args.ignore
        },
        merge: args.merge || config.merge,
        types: args.types || config.types,
        verbose: args.verbose,
    };
    let out = args.out.unwrap_or(config.out);
    let format = args.format.or(config.format);
    let watch_mode = args.watch || config.watch;
    (settings, out, format, watch_mode)
}

/// Run one scan and write the result.
///
/// Zero discovered keys with no pre-existing destination writes nothing and
/// is not an error. Whether the destination exists is re-checked here, not
/// taken from startup resolution, so watch-mode rescans merge with their
/// own previous output.
pub fn scan_and_write(settings: &ScanSettings, destination: &Destination) -> Result<()> {
    let outcome = scan_project(&settings.root, &settings.ignore, settings.verbose)?;
    report::print_scan_summary(&outcome, settings.verbose);

    let destination_exists = destination.path.is_file();
    if outcome.catalog.variable_count() == 0 && !destination_exists {
        report::print_nothing_to_write();
        return Ok(());
    }

    if settings.types {
        let type_defs_path = settings.root.join(TYPE_DEFS_FILENAME);
        write_atomic(&type_defs_path, &render_type_definitions(&outcome.catalog))?;
        report::print_types_written(&type_defs_path);
    }

    let vars = if settings.merge && destination_exists {
        let content = fs::read_to_string(&destination.path).with_context(|| {
            format!(
                "Failed to read existing output file {}",
                destination.path.display()
            )
        })?;
        merge_with_existing(parse_existing(&content, destination.format)?, &outcome.catalog)
    } else {
        catalog_to_map(&outcome.catalog)
    };

    let text = render(&vars, destination.format)?;
    write_atomic(&destination.path, &text)?;
    report::print_written(&destination.path, settings.merge && destination_exists);

    Ok(())
}
