//! Reads documents from disk and parses their front matter.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FmxError, Result};
use crate::parser::{parse, ParseResult};
use crate::syntax::{SyntaxTable, WrapperConfig};

use super::scanner::ScanResult;

/// Options for loading a document from a file.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Pick the wrapper from the file extension.
    pub autodetect: bool,
    /// Wrapper used when `autodetect` is off.
    pub wrapper: WrapperConfig,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::autodetect()
    }
}

impl LoadOptions {
    /// Detect the wrapper from the file extension.
    pub fn autodetect() -> Self {
        Self {
            autodetect: true,
            wrapper: WrapperConfig::bare(),
        }
    }

    /// Use the given wrapper regardless of extension.
    pub fn with_wrapper(wrapper: WrapperConfig) -> Self {
        Self {
            autodetect: false,
            wrapper,
        }
    }

    /// Wrapper to use for `path`.
    pub fn wrapper_for<'a>(&'a self, path: &Path, table: &'a SyntaxTable) -> Result<&'a WrapperConfig> {
        if !self.autodetect {
            return Ok(&self.wrapper);
        }

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| FmxError::UnknownConvention {
                name: path.display().to_string(),
            })?;

        table.resolve(table.resolve_by_extension(extension)?)
    }
}

/// Read a file and parse its front matter.
pub fn parse_file(path: &Path, options: &LoadOptions, table: &SyntaxTable) -> Result<ParseResult> {
    let wrapper = options.wrapper_for(path, table)?;

    parse(&read_source(path)?, wrapper)
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| FmxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read file: {}", e),
    })
}

/// Outcome of loading every file in a scan.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub parsed: Vec<(PathBuf, ParseResult)>,
    pub errors: Vec<(PathBuf, FmxError)>,
}

/// Parse every scanned file with its detected syntax, collecting failures
/// instead of stopping at the first one.
pub fn load_all(scan: &ScanResult, table: &SyntaxTable) -> LoadReport {
    let mut report = LoadReport::default();

    for file in &scan.files {
        let result = table
            .resolve(file.syntax)
            .and_then(|wrapper| parse(&read_source(&file.path)?, wrapper));

        match result {
            Ok(parsed) => report.parsed.push((file.path.clone(), parsed)),
            Err(e) => report.errors.push((file.path.clone(), e)),
        }
    }

    report
}
