//! File discovery and loading for fmx projects.
//!
//! Finds documents whose extension maps onto a known syntax, either from
//! explicit paths or from the sources listed in an `fmx.yaml` manifest.
//!
//! # Example
//!
//! ```ignore
//! use fmx::discovery::discover;
//!
//! let result = discover("./site")?;
//! let report = result.load();
//! println!("{} parsed, {} failed", report.parsed.len(), report.errors.len());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::{FmxError, Result};
use crate::syntax::SyntaxTable;

pub use loader::{load_all, parse_file, LoadOptions, LoadReport};
pub use manifest::Manifest;
pub use scanner::{detect_syntax, scan_directory, scan_sources, ScanResult, ScannedFile};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "fmx.yaml";

/// Result of discovering documents in a project.
#[derive(Debug)]
pub struct DiscoveryResult {
    /// The project root directory.
    pub root: PathBuf,

    /// The loaded manifest (default if no fmx.yaml was found).
    pub manifest: Manifest,

    /// Whether an fmx.yaml manifest was found.
    pub has_manifest: bool,

    /// Syntax table including the manifest's extensions.
    pub table: SyntaxTable,

    /// Discovered files.
    pub scan: ScanResult,
}

impl DiscoveryResult {
    /// Parse every discovered file.
    pub fn load(&self) -> LoadReport {
        load_all(&self.scan, &self.table)
    }
}

/// Discover documents in a project directory.
///
/// Uses the sources of `fmx.yaml` in `root` when present, otherwise
/// scans the whole directory.
pub fn discover(root: impl AsRef<Path>) -> Result<DiscoveryResult> {
    let root = root.as_ref().to_path_buf();

    let (manifest, has_manifest) = match find_manifest(&root)? {
        Some(manifest) => (manifest, true),
        None => (Manifest::default(), false),
    };

    let table = manifest.syntax_table()?;
    let scan = scan_sources(&manifest.effective_sources(), &root, &manifest, &table);

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest,
        table,
        scan,
    })
}

/// Load `fmx.yaml` from `root`, if there is one.
pub fn find_manifest(root: &Path) -> Result<Option<Manifest>> {
    let manifest_path = root.join(MANIFEST_FILENAME);
    if manifest_path.exists() {
        Manifest::load(&manifest_path).map(Some)
    } else {
        Ok(None)
    }
}

/// Syntax table for a project: builtin plus the extensions of the
/// `fmx.yaml` in `root`, if any.
pub fn project_table(root: &Path) -> Result<SyntaxTable> {
    match find_manifest(root)? {
        Some(manifest) => manifest.syntax_table(),
        None => Ok(SyntaxTable::builtin()),
    }
}

/// Discover documents from specific paths using the given table.
///
/// Sources and excludes of a manifest do not apply. An explicit file
/// whose extension maps to no syntax in `table` is an error.
pub fn discover_paths(paths: &[PathBuf], table: SyntaxTable) -> Result<DiscoveryResult> {
    let manifest = Manifest::default();
    let mut scan = ScanResult::new();

    for path in paths {
        if path.is_dir() {
            scan.merge(scan_directory(path, &manifest, &table));
            continue;
        }

        let syntax = detect_syntax(path, &table).ok_or_else(|| FmxError::UnknownConvention {
            name: path.display().to_string(),
        })?;
        scan.files.push(ScannedFile {
            path: path.clone(),
            syntax,
        });
    }

    let root = paths
        .first()
        .and_then(|p| p.parent())
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(DiscoveryResult {
        root,
        manifest,
        has_manifest: false,
        table,
        scan,
    })
}
