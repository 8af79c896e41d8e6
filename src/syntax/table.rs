//! Syntax → wrapper lookup tables.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{FmxError, Result};

use super::config::WrapperConfig;

/// Host document syntaxes with a known front matter wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Syntax {
    Slim,
    Coffee,
    Html,
    Haml,
    Liquid,
    Sass,
    Scss,
    Md,
}

impl Syntax {
    /// All known syntaxes, in table order.
    pub const ALL: [Syntax; 8] = [
        Syntax::Slim,
        Syntax::Coffee,
        Syntax::Html,
        Syntax::Haml,
        Syntax::Liquid,
        Syntax::Sass,
        Syntax::Scss,
        Syntax::Md,
    ];

    /// Lowercase name, also the file extension the syntax is detected from.
    pub fn name(self) -> &'static str {
        match self {
            Syntax::Slim => "slim",
            Syntax::Coffee => "coffee",
            Syntax::Html => "html",
            Syntax::Haml => "haml",
            Syntax::Liquid => "liquid",
            Syntax::Sass => "sass",
            Syntax::Scss => "scss",
            Syntax::Md => "md",
        }
    }

    /// (comment, start_comment, end_comment) for this syntax.
    ///
    /// Automatic detection depends on these values staying stable.
    fn delimiters(self) -> (Option<&'static str>, Option<&'static str>, Option<&'static str>) {
        match self {
            Syntax::Slim => (None, Some("/"), None),
            Syntax::Coffee => (Some("#"), None, None),
            Syntax::Html => (None, Some("<!--"), Some("-->")),
            Syntax::Haml => (None, Some("-#"), None),
            Syntax::Liquid => (None, Some("<% comment %>"), Some("<% endcomment %>")),
            Syntax::Sass => (Some("//"), None, None),
            Syntax::Scss => (Some("//"), None, None),
            Syntax::Md => (None, None, None),
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Syntax {
    type Err = FmxError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Syntax::ALL
            .into_iter()
            .find(|syntax| syntax.name() == lower)
            .ok_or_else(|| FmxError::UnknownConvention {
                name: s.to_string(),
            })
    }
}

/// Immutable syntax configuration: wrappers per syntax plus the
/// extension lookup used for automatic detection.
#[derive(Debug, Clone)]
pub struct SyntaxTable {
    wrappers: HashMap<Syntax, WrapperConfig>,
    extensions: HashMap<String, Syntax>,
}

impl SyntaxTable {
    /// Build the stable table of known syntaxes, each detected from the
    /// extension of the same name.
    pub fn builtin() -> Self {
        let mut wrappers = HashMap::new();
        let mut extensions = HashMap::new();

        for syntax in Syntax::ALL {
            let (comment, start, end) = syntax.delimiters();
            wrappers.insert(syntax, WrapperConfig::from_static(comment, start, end));
            extensions.insert(syntax.name().to_string(), syntax);
        }

        Self {
            wrappers,
            extensions,
        }
    }

    /// Process-wide builtin table, built on first use.
    pub fn global() -> &'static SyntaxTable {
        static TABLE: OnceLock<SyntaxTable> = OnceLock::new();
        TABLE.get_or_init(SyntaxTable::builtin)
    }

    /// Map an extra extension onto a syntax (e.g. `markdown` → `md`).
    pub fn with_extension(mut self, extension: &str, syntax: Syntax) -> Self {
        self.extensions
            .insert(normalize_extension(extension), syntax);
        self
    }

    /// Wrapper configuration for a syntax.
    pub fn resolve(&self, syntax: Syntax) -> Result<&WrapperConfig> {
        self.wrappers
            .get(&syntax)
            .ok_or_else(|| FmxError::UnknownConvention {
                name: syntax.name().to_string(),
            })
    }

    /// Wrapper configuration for a syntax given by name.
    pub fn resolve_name(&self, name: &str) -> Result<&WrapperConfig> {
        self.resolve(name.parse()?)
    }

    /// Syntax for a file extension (case-insensitive, leading dot allowed).
    pub fn resolve_by_extension(&self, extension: &str) -> Result<Syntax> {
        self.extensions
            .get(&normalize_extension(extension))
            .copied()
            .ok_or_else(|| FmxError::UnknownConvention {
                name: extension.to_string(),
            })
    }

    /// Extension → syntax pairs, sorted by extension.
    pub fn extensions(&self) -> Vec<(&str, Syntax)> {
        let mut pairs: Vec<(&str, Syntax)> = self
            .extensions
            .iter()
            .map(|(ext, syntax)| (ext.as_str(), *syntax))
            .collect();
        pairs.sort();
        pairs
    }
}

impl Default for SyntaxTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_extension(extension: &str) -> String {
    extension.trim().trim_start_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_wrappers() {
        let table = SyntaxTable::builtin();

        assert_eq!(table.resolve(Syntax::Slim).unwrap(), &WrapperConfig::indented("/"));
        assert_eq!(table.resolve(Syntax::Coffee).unwrap(), &WrapperConfig::line("#"));
        assert_eq!(
            table.resolve(Syntax::Html).unwrap(),
            &WrapperConfig::block("<!--", "-->")
        );
        assert_eq!(table.resolve(Syntax::Haml).unwrap(), &WrapperConfig::indented("-#"));
        assert_eq!(
            table.resolve(Syntax::Liquid).unwrap(),
            &WrapperConfig::block("<% comment %>", "<% endcomment %>")
        );
        assert_eq!(table.resolve(Syntax::Sass).unwrap(), &WrapperConfig::line("//"));
        assert_eq!(table.resolve(Syntax::Scss).unwrap(), &WrapperConfig::line("//"));
        assert_eq!(table.resolve(Syntax::Md).unwrap(), &WrapperConfig::bare());
    }

    #[test]
    fn test_every_builtin_wrapper_is_valid() {
        let table = SyntaxTable::builtin();

        for syntax in Syntax::ALL {
            assert!(table.resolve(syntax).unwrap().wrapper().is_ok(), "{}", syntax);
        }
    }

    #[test]
    fn test_resolve_name() {
        let table = SyntaxTable::global();

        assert_eq!(table.resolve_name("HTML").unwrap(), &WrapperConfig::block("<!--", "-->"));
        assert!(matches!(
            table.resolve_name("php"),
            Err(FmxError::UnknownConvention { name }) if name == "php"
        ));
    }

    #[test]
    fn test_resolve_by_extension() {
        let table = SyntaxTable::builtin();

        assert_eq!(table.resolve_by_extension("slim").unwrap(), Syntax::Slim);
        assert_eq!(table.resolve_by_extension(".SCSS").unwrap(), Syntax::Scss);
        assert!(matches!(
            table.resolve_by_extension("foo"),
            Err(FmxError::UnknownConvention { .. })
        ));
    }

    #[test]
    fn test_with_extension_alias() {
        let table = SyntaxTable::builtin().with_extension("Markdown", Syntax::Md);

        assert_eq!(table.resolve_by_extension("markdown").unwrap(), Syntax::Md);
        assert_eq!(table.resolve_by_extension(".MD").unwrap(), Syntax::Md);
        assert!(SyntaxTable::builtin().resolve_by_extension("markdown").is_err());
    }

    #[test]
    fn test_extensions_sorted() {
        let table = SyntaxTable::builtin();
        let names: Vec<&str> = table.extensions().into_iter().map(|(ext, _)| ext).collect();

        assert_eq!(
            names,
            vec!["coffee", "haml", "html", "liquid", "md", "sass", "scss", "slim"]
        );
    }
}
