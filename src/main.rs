use clap::Parser;
use fmx::cli::{Cli, Commands};
use fmx::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new(cli.quiet);

    match cli.command {
        Commands::Parse(args) => fmx::cli::parse::run(args, &printer)?,
        Commands::Check(args) => fmx::cli::check::run(args, &printer)?,
        Commands::Syntaxes(args) => fmx::cli::syntaxes::run(args)?,
        Commands::Completions(args) => fmx::cli::completions::run(args)?,
    }

    Ok(())
}
