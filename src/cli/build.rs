//! Build command implementation.
//!
//! Renders every body listed in a manifest.

use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::Result;
use crate::manifest::{Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::render::render_star;

use super::render::{describe, write_star, OutputOptions};

/// Render every star in a manifest
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Manifest file
    #[arg(default_value = MANIFEST_FILENAME)]
    pub manifest: PathBuf,

    /// Output directory (overrides the manifest)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    let manifest = Manifest::load(&args.manifest)?;

    // Relative output paths resolve against the manifest's directory
    let root = args.manifest.parent().unwrap_or(Path::new(""));
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| root.join(&manifest.output));

    let count = build(&manifest, &output, printer)?;

    printer.success(
        "Finished",
        &format!(
            "{} to {}",
            plural(count, "star", "stars"),
            display_path(&output)
        ),
    );

    Ok(())
}

/// Render and write every body. Stops at the first failure.
pub fn build(manifest: &Manifest, output: &Path, printer: &Printer) -> Result<usize> {
    if manifest.bodies.is_empty() {
        printer.warning("Skipping", "manifest lists no bodies");
        return Ok(0);
    }

    let options = OutputOptions {
        dir: output,
        crop: manifest.crop,
        scale: manifest.effective_scale(),
        metadata: manifest.metadata,
    };

    for body in &manifest.bodies {
        let request = manifest.request_for(body);
        printer.status("Rendering", &describe(&request));

        let star = render_star(&request)?;
        let path = write_star(&star, &manifest.file_stem(body), &options)?;
        printer.info("Wrote", &printer.cyan(&display_path(&path)));
    }

    Ok(manifest.bodies.len())
}
