pub mod check;
pub mod completions;
pub mod parse;
pub mod syntaxes;

use clap::{Parser, Subcommand};

/// fmx - Front matter extractor
#[derive(Parser, Debug)]
#[command(name = "fmx")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract front matter and content from a file
    Parse(parse::ParseArgs),

    /// Parse every document under the given paths and report failures
    Check(check::CheckArgs),

    /// List known syntaxes and their comment wrappers
    Syntaxes(syntaxes::SyntaxesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
