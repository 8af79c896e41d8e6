//! Project manifest (fmx.yaml) parsing.
//!
//! The manifest lists where to look for documents, what to skip, and
//! extra file extensions to map onto known syntaxes.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FmxError, Result};
use crate::syntax::{Syntax, SyntaxTable};

/// Project manifest loaded from fmx.yaml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Source directories to scan for documents.
    /// Defaults to current directory if empty.
    pub sources: Vec<String>,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,

    /// Extra extensions mapped to a syntax name (e.g. `markdown: md`).
    pub extensions: BTreeMap<String, String>,
}

impl Manifest {
    /// Load manifest from a fmx.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FmxError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| FmxError::Manifest {
            message: e.to_string(),
        })
    }

    /// Builtin syntax table extended with this manifest's extensions.
    ///
    /// Fails on an extension mapped to an unknown syntax.
    pub fn syntax_table(&self) -> Result<SyntaxTable> {
        let mut table = SyntaxTable::builtin();
        for (extension, name) in &self.extensions {
            let syntax: Syntax = name.parse()?;
            table = table.with_extension(extension, syntax);
        }
        Ok(table)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        self.excludes
            .iter()
            .any(|pattern| Self::matches_pattern(&path_str, pattern))
    }

    /// Simple glob pattern matching.
    fn matches_pattern(path: &str, pattern: &str) -> bool {
        if let Some(suffix) = pattern.strip_prefix("**/") {
            // **/dir/* matches anything inside dir anywhere in the path
            if let Some(dir) = suffix.strip_suffix("/*") {
                return path.starts_with(&format!("{}/", dir))
                    || path.contains(&format!("/{}/", dir));
            }
            return path.ends_with(suffix) || path.contains(&format!("/{}", suffix));
        }

        if let Some(suffix) = pattern.strip_prefix('*') {
            if !pattern.contains('/') {
                return path.ends_with(suffix);
            }
        }

        if let Some(prefix) = pattern.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", prefix))
                || path.contains(&format!("/{}/", prefix));
        }

        path.contains(pattern)
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
sources:
  - content/
  - templates/
excludes:
  - "*.bak"
  - "**/vendor/*"
extensions:
  markdown: md
  htm: html
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.sources, vec!["content/", "templates/"]);
        assert_eq!(manifest.excludes, vec!["*.bak", "**/vendor/*"]);
        assert_eq!(manifest.extensions.get("htm").map(String::as_str), Some("html"));
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();

        assert!(manifest.sources.is_empty());
        assert!(manifest.extensions.is_empty());
    }

    #[test]
    fn test_parse_invalid_manifest() {
        let result = Manifest::parse("sources: [");
        assert!(matches!(result, Err(FmxError::Manifest { .. })));
    }

    #[test]
    fn test_syntax_table_with_extensions() {
        let manifest = Manifest::parse("extensions:\n  markdown: md").unwrap();
        let table = manifest.syntax_table().unwrap();

        assert_eq!(table.resolve_by_extension("markdown").unwrap(), Syntax::Md);
    }

    #[test]
    fn test_syntax_table_unknown_syntax() {
        let manifest = Manifest::parse("extensions:\n  php: php").unwrap();

        assert!(matches!(
            manifest.syntax_table(),
            Err(FmxError::UnknownConvention { .. })
        ));
    }

    #[test]
    fn test_effective_sources() {
        let mut manifest = Manifest::default();
        assert_eq!(manifest.effective_sources(), vec!["."]);

        manifest.sources = vec!["src/".to_string()];
        assert_eq!(manifest.effective_sources(), vec!["src/"]);
    }

    #[test]
    fn test_is_excluded_extension() {
        let manifest = Manifest {
            excludes: vec!["*.bak".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("file.bak")));
        assert!(manifest.is_excluded(Path::new("path/to/file.bak")));
        assert!(!manifest.is_excluded(Path::new("file.md")));
    }

    #[test]
    fn test_is_excluded_directory() {
        let manifest = Manifest {
            excludes: vec!["**/node_modules/*".to_string()],
            ..Default::default()
        };

        assert!(manifest.is_excluded(Path::new("node_modules/foo")));
        assert!(manifest.is_excluded(Path::new("path/node_modules/bar")));
        assert!(!manifest.is_excluded(Path::new("src/file.md")));
    }
}
