//! File system scanner for documents with a known syntax.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::syntax::{Syntax, SyntaxTable};

use super::manifest::Manifest;

/// A discovered document and the syntax its extension maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedFile {
    pub path: PathBuf,
    pub syntax: Syntax,
}

/// Result of scanning for documents.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Discovered files, in walk order.
    pub files: Vec<ScannedFile>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Merge another scan result into this one.
    pub fn merge(&mut self, other: ScanResult) {
        self.files.extend(other.files);
    }
}

/// Recursively scan a directory, keeping files whose extension the
/// table knows.
pub fn scan_directory(root: &Path, manifest: &Manifest, table: &SyntaxTable) -> ScanResult {
    let mut result = ScanResult::new();

    if !root.exists() {
        return result;
    }

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || manifest.is_excluded(path) {
            continue;
        }

        if let Some(syntax) = detect_syntax(path, table) {
            result.files.push(ScannedFile {
                path: path.to_path_buf(),
                syntax,
            });
        }
    }

    result
}

/// Scan multiple source paths relative to `base_path`.
pub fn scan_sources(
    sources: &[String],
    base_path: &Path,
    manifest: &Manifest,
    table: &SyntaxTable,
) -> ScanResult {
    let mut result = ScanResult::new();

    for source in sources {
        let source_path = if Path::new(source).is_absolute() {
            PathBuf::from(source)
        } else {
            base_path.join(source)
        };

        result.merge(scan_directory(&source_path, manifest, table));
    }

    result
}

/// Detect the syntax of a file from its extension.
pub fn detect_syntax(path: &Path, table: &SyntaxTable) -> Option<Syntax> {
    let extension = path.extension()?.to_str()?;
    table.resolve_by_extension(extension).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_detect_syntax() {
        let table = SyntaxTable::builtin();

        assert_eq!(detect_syntax(Path::new("index.html"), &table), Some(Syntax::Html));
        assert_eq!(detect_syntax(Path::new("views/page.SLIM"), &table), Some(Syntax::Slim));
        assert_eq!(detect_syntax(Path::new("post.md"), &table), Some(Syntax::Md));
        assert_eq!(detect_syntax(Path::new("notes.txt"), &table), None);
        assert_eq!(detect_syntax(Path::new("Makefile"), &table), None);
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempdir().unwrap();

        let result = scan_directory(dir.path(), &Manifest::default(), &SyntaxTable::builtin());

        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_recursive() {
        let dir = tempdir().unwrap();

        fs::create_dir_all(dir.path().join("styles/base")).unwrap();
        fs::write(dir.path().join("index.html"), "<p>hi</p>").unwrap();
        fs::write(dir.path().join("styles/base/site.scss"), "// ---\n// a: 1\n// ---\n").unwrap();
        fs::write(dir.path().join("readme.txt"), "text").unwrap();

        let result = scan_directory(dir.path(), &Manifest::default(), &SyntaxTable::builtin());

        assert_eq!(result.total(), 2);
        assert_eq!(result.files[1].syntax, Syntax::Scss);
    }

    #[test]
    fn test_scan_with_excludes_and_aliases() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join("post.markdown"), "---\na: 1\n---\n").unwrap();
        fs::create_dir_all(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("vendor/lib.coffee"), "x = 1").unwrap();

        let manifest = Manifest {
            excludes: vec!["**/vendor/*".to_string()],
            ..Default::default()
        };
        let table = SyntaxTable::builtin().with_extension("markdown", Syntax::Md);

        let result = scan_directory(dir.path(), &manifest, &table);

        assert_eq!(result.total(), 1);
        assert_eq!(result.files[0].syntax, Syntax::Md);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let result = scan_directory(
            Path::new("/nonexistent/path"),
            &Manifest::default(),
            &SyntaxTable::builtin(),
        );

        assert!(result.is_empty());
    }
}
