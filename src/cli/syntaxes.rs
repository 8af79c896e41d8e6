//! Syntaxes command implementation.
//!
//! Prints the extension → syntax → wrapper table, including extensions
//! added by an fmx.yaml manifest in the current directory.

use std::path::Path;

use clap::Args;

use crate::discovery::project_table;
use crate::error::Result;
use crate::syntax::{SyntaxTable, WrapperConfig};

/// List known syntaxes and their comment wrappers
#[derive(Args, Debug)]
pub struct SyntaxesArgs {
    /// Ignore fmx.yaml and show only the builtin table
    #[arg(long)]
    pub builtin: bool,
}

pub fn run(args: SyntaxesArgs) -> Result<()> {
    let table = if args.builtin {
        SyntaxTable::builtin()
    } else {
        project_table(Path::new("."))?
    };

    for line in table_lines(&table)? {
        println!("{}", line);
    }

    Ok(())
}

/// One line per known extension: `ext syntax wrapper`.
pub fn table_lines(table: &SyntaxTable) -> Result<Vec<String>> {
    table
        .extensions()
        .into_iter()
        .map(|(ext, syntax)| {
            let wrapper = table.resolve(syntax)?;
            Ok(format!("{:<8} {:<8} {}", ext, syntax, describe(wrapper)))
        })
        .collect()
}

fn describe(wrapper: &WrapperConfig) -> String {
    match (
        wrapper.comment.as_deref(),
        wrapper.start_comment.as_deref(),
        wrapper.end_comment.as_deref(),
    ) {
        (Some(comment), _, _) => format!("line comment `{}`", comment),
        (None, Some(start), Some(end)) => format!("block comment `{}` ... `{}`", start, end),
        (None, Some(start), None) => format!("indented comment `{}`", start),
        (None, None, _) => "none".to_string(),
    }
}
