use clap::Parser;
use miette::Result;
use starforge::cli::{Cli, Commands};
use starforge::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Render(args) => starforge::cli::render::run(args, &printer)?,
        Commands::Build(args) => starforge::cli::build::run(args, &printer)?,
        Commands::Init(args) => starforge::cli::init::run(args, &printer)?,
        Commands::Types(args) => starforge::cli::types::run(args)?,
        Commands::Completions(args) => starforge::cli::completions::run(args)?,
    }

    Ok(())
}
