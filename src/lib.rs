//! fmx - Front matter extractor
//!
//! A library for splitting documents into YAML front matter and content,
//! where the front matter may be hidden inside a comment of the host
//! format (HTML, Slim, Haml, Liquid, CoffeeScript, Sass/SCSS, Markdown).

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod parser;
pub mod syntax;

pub use discovery::{
    discover, discover_paths, parse_file, project_table, DiscoveryResult, LoadOptions, Manifest,
};
pub use error::{FmxError, Result};
pub use parser::{parse, parse_syntax, FrontMatter, ParseResult};
pub use syntax::{Syntax, SyntaxTable, Wrapper, WrapperConfig};
