//! Init command implementation.
//!
//! Generates a starter `starforge.yaml` with one body per star type.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{Result, StarError};
use crate::manifest::{BodySpec, Manifest, MANIFEST_FILENAME};
use crate::output::{display_path, plural, Printer};
use crate::surface::StarType;

/// Diameter given to every starter body.
const STARTER_DIAMETER: i64 = 300;

/// Initialize a starforge project (generates starforge.yaml)
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite existing starforge.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let manifest_path = args.path.join(MANIFEST_FILENAME);

    // Check for existing manifest
    if manifest_path.exists() && !args.force {
        return Err(StarError::Build {
            message: format!("{} already exists", MANIFEST_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let manifest = starter_manifest();
    let yaml = manifest.to_yaml()?;

    if !args.path.exists() {
        fs::create_dir_all(&args.path).map_err(|e| StarError::Io {
            path: args.path.clone(),
            message: format!("Failed to create project directory: {}", e),
        })?;
    }

    fs::write(&manifest_path, &yaml).map_err(|e| StarError::Io {
        path: manifest_path.clone(),
        message: format!("Failed to write manifest: {}", e),
    })?;

    printer.success(
        "Created",
        &format!(
            "{} ({})",
            display_path(&manifest_path),
            plural(manifest.bodies.len(), "star", "stars")
        ),
    );

    Ok(())
}

/// Default manifest listing each registered type once.
pub fn starter_manifest() -> Manifest {
    let bodies = StarType::ALL
        .iter()
        .map(|t| BodySpec {
            star_type: t.name().to_string(),
            diameter: STARTER_DIAMETER,
            name: Some(t.name().to_lowercase()),
            seed: None,
        })
        .collect();

    Manifest {
        bodies,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_manifest() {
        let dir = tempdir().unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        run(args, &Printer::plain()).unwrap();

        let manifest = Manifest::load(&dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert_eq!(manifest, starter_manifest());
        assert_eq!(manifest.bodies.len(), StarType::ALL.len());
    }

    #[test]
    fn test_init_errors_if_manifest_exists() {
        let dir = tempdir().unwrap();

        // Create existing manifest
        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: false,
        };

        let result = run(args, &Printer::plain());
        assert!(matches!(result, Err(StarError::Build { .. })));
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = tempdir().unwrap();

        fs::write(dir.path().join(MANIFEST_FILENAME), "output: build").unwrap();

        let args = InitArgs {
            path: dir.path().to_path_buf(),
            force: true,
        };

        run(args, &Printer::plain()).unwrap();

        let content = fs::read_to_string(dir.path().join(MANIFEST_FILENAME)).unwrap();
        assert!(content.contains("output: rendered"));
        assert!(content.contains("type: RedGiant"));
    }

    #[test]
    fn test_starter_names() {
        let names: Vec<_> = starter_manifest()
            .bodies
            .into_iter()
            .filter_map(|b| b.name)
            .collect();
        assert_eq!(names, vec!["regular", "redgiant", "whitedwarf"]);
    }
}
