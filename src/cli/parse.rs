//! Parse command implementation.
//!
//! Extracts one file's front matter and prints it with the remaining
//! content to stdout.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::discovery::{parse_file, project_table, LoadOptions};
use crate::error::{FmxError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::ParseResult;
use crate::syntax::{SyntaxTable, WrapperConfig};

/// Extract front matter and content from a file
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// File to parse
    #[arg(required = true)]
    pub file: PathBuf,

    /// Syntax whose comment wrapper to use (default: detect from extension)
    #[arg(long, conflicts_with_all = ["comment", "start_comment", "end_comment", "no_detect"])]
    pub syntax: Option<String>,

    /// Single-line comment prefix wrapping the front matter
    #[arg(long)]
    pub comment: Option<String>,

    /// Opening mark of a multiline comment wrapping the front matter
    #[arg(long)]
    pub start_comment: Option<String>,

    /// Closing mark of the multiline comment
    #[arg(long)]
    pub end_comment: Option<String>,

    /// Treat the file as unwrapped instead of detecting its syntax
    #[arg(long)]
    pub no_detect: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl ParseArgs {
    /// Options implied by the wrapper flags.
    pub fn load_options(&self, table: &SyntaxTable) -> Result<LoadOptions> {
        if let Some(name) = &self.syntax {
            return Ok(LoadOptions::with_wrapper(table.resolve_name(name)?.clone()));
        }

        let wrapper = WrapperConfig {
            comment: self.comment.clone(),
            start_comment: self.start_comment.clone(),
            end_comment: self.end_comment.clone(),
        };

        if self.no_detect || wrapper != WrapperConfig::bare() {
            Ok(LoadOptions::with_wrapper(wrapper))
        } else {
            Ok(LoadOptions::autodetect())
        }
    }
}

pub fn run(args: ParseArgs, printer: &Printer) -> Result<()> {
    let table = project_table(Path::new("."))?;
    let options = args.load_options(&table)?;
    let parsed = parse_file(&args.file, &options, &table)?;

    let summary = if parsed.has_front_matter() {
        plural(parsed.front_matter.len(), "key", "keys")
    } else {
        "no front matter".to_string()
    };
    printer.status(
        "Parsed",
        &format!("{} {}", display_path(&args.file), printer.dim(&format!("({})", summary))),
    );

    println!("{}", render(&parsed, args.format)?);

    Ok(())
}

/// Serialize a parse result with keys in sorted order.
pub fn render(parsed: &ParseResult, format: Format) -> Result<String> {
    let sorted = parsed.sorted();
    match format {
        Format::Json => serde_json::to_string_pretty(&sorted).map_err(|e| FmxError::Output {
            message: e.to_string(),
        }),
        Format::Yaml => serde_yaml::to_string(&sorted).map_err(|e| FmxError::Output {
            message: e.to_string(),
        }),
    }
}
