//! Check command implementation.
//!
//! Parses every discovered document and reports which ones fail.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths, project_table, MANIFEST_FILENAME};
use crate::error::{FmxError, Result};
use crate::output::{display_path, plural, Printer};

/// Parse every document under the given paths and report failures
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: fmx.yaml sources or current directory)
    pub paths: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let discovery = if args.paths.is_empty() {
        discover(".")?
    } else {
        discover_paths(&args.paths, project_table(Path::new("."))?)?
    };

    if discovery.has_manifest {
        printer.info("Using", &display_path(&discovery.root.join(MANIFEST_FILENAME)));
    }

    let report = discovery.load();

    for (path, parsed) in &report.parsed {
        if parsed.has_front_matter() {
            let keys = plural(parsed.front_matter.len(), "key", "keys");
            let note = printer.dim(&format!("({})", keys));
            printer.status("Parsed", &format!("{} {}", display_path(path), note));
        } else {
            let note = printer.dim("(no front matter)");
            printer.warning("Plain", &format!("{} {}", display_path(path), note));
        }
    }

    for (path, error) in &report.errors {
        printer.error("Failed", &format!("{}: {}", display_path(path), error));
    }

    let total = report.parsed.len() + report.errors.len();
    printer.status("Checked", &plural(total, "file", "files"));

    if report.errors.is_empty() {
        Ok(())
    } else {
        Err(FmxError::Check {
            failed: report.errors.len(),
        })
    }
}
