pub mod build;
pub mod completions;
pub mod init;
pub mod render;
pub mod types;

use clap::{Parser, Subcommand};

/// starforge - Procedural star image renderer
#[derive(Parser, Debug)]
#[command(name = "starforge")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a single star to PNG
    Render(render::RenderArgs),

    /// Render every star listed in a manifest
    Build(build::BuildArgs),

    /// Initialize a starforge project (generates starforge.yaml)
    Init(init::InitArgs),

    /// List registered star types and their palettes
    Types(types::TypesArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
