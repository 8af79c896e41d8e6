//! Front matter extraction.
//!
//! A document may start with a YAML block between two `---` marker lines,
//! optionally hidden inside a comment of the host format:
//!
//! - no wrapper: the markers sit directly in the document
//! - line comments: every front matter line carries the comment prefix
//! - multiline comments: the block sits inside a comment closed either by
//!   an explicit end mark or by returning to the comment's indentation
//!
//! # Usage
//!
//! ```ignore
//! use fmx::parser::parse;
//! use fmx::syntax::WrapperConfig;
//!
//! let parsed = parse("#---\n#title: hello\n#---\nContent", &WrapperConfig::line("#"))?;
//! assert_eq!(parsed.content, "Content");
//! ```

mod frontmatter;
mod lines;
mod scanner;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Result;
use crate::syntax::{Syntax, SyntaxTable, WrapperConfig};

pub use frontmatter::{decode, FrontMatter};
pub use lines::MARKER;
pub use scanner::{scan, Extraction};

/// Front matter and remaining content of a document.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseResult {
    /// Decoded front matter (empty when the document has none)
    pub front_matter: FrontMatter,
    /// Everything after the front matter and its wrapper
    pub content: String,
}

impl ParseResult {
    /// A document without front matter.
    fn absent(source: &str) -> Self {
        Self {
            front_matter: FrontMatter::new(),
            content: source.to_string(),
        }
    }

    /// Whether any front matter keys were found.
    pub fn has_front_matter(&self) -> bool {
        !self.front_matter.is_empty()
    }

    /// Front matter with keys in sorted order, for stable output.
    pub fn sorted(&self) -> SortedParseResult<'_> {
        SortedParseResult {
            front_matter: self.front_matter.iter().map(|(k, v)| (k.as_str(), v)).collect(),
            content: &self.content,
        }
    }
}

/// Borrowed, key-sorted view of a [`ParseResult`].
#[derive(Debug, Serialize)]
pub struct SortedParseResult<'a> {
    pub front_matter: BTreeMap<&'a str, &'a serde_yaml::Value>,
    pub content: &'a str,
}

/// Split `source` into front matter and content.
///
/// The wrapper configuration is validated before anything is scanned.
/// A document without an opening marker is returned whole as content.
pub fn parse(source: &str, config: &WrapperConfig) -> Result<ParseResult> {
    let wrapper = config.wrapper()?;

    match scan(source, wrapper)? {
        Some(found) => Ok(ParseResult {
            front_matter: decode(&found.region)?,
            content: found.content.to_string(),
        }),
        None => Ok(ParseResult::absent(source)),
    }
}

/// Parse using the wrapper the builtin table assigns to `syntax`.
pub fn parse_syntax(source: &str, syntax: Syntax) -> Result<ParseResult> {
    parse(source, SyntaxTable::global().resolve(syntax)?)
}
