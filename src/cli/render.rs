//! Render command implementation.
//!
//! Renders one star and writes it as PNG, with an optional JSON sidecar.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::error::{Result, StarError};
use crate::manifest::default_stem;
use crate::output::{display_path, Printer};
use crate::render::{
    crop_to_body, render_star, scaled_size, write_metadata, write_png, RenderRequest,
    RenderedStar, StarMeta,
};
use crate::star::DEFAULT_SEED;
use crate::surface::StarType;

/// Render a single star
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Star type (Regular, RedGiant, WhiteDwarf)
    #[arg(long = "type", short = 't')]
    pub star_type: StarType,

    /// Body diameter in pixels (odd values round up)
    #[arg(long, short)]
    pub diameter: i64,

    /// Random seed
    #[arg(long, short, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output directory
    #[arg(long, short, default_value = "rendered")]
    pub output: PathBuf,

    /// Output file stem (default: <type>-<diameter>-<seed>)
    #[arg(long)]
    pub name: Option<String>,

    /// Crop the image to the body, dropping glow and label
    #[arg(long)]
    pub crop: bool,

    /// Scale factor for output (integer upscaling)
    #[arg(long, default_value = "1")]
    pub scale: u32,

    /// Skip the JSON metadata sidecar
    #[arg(long)]
    pub no_metadata: bool,
}

/// Where and how a finished star is written.
#[derive(Debug, Clone)]
pub struct OutputOptions<'a> {
    pub dir: &'a Path,
    pub crop: bool,
    pub scale: u32,
    pub metadata: bool,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    let request = RenderRequest::new(args.star_type.name(), args.diameter, args.seed);
    printer.status("Rendering", &describe(&request));

    let star = render_star(&request)?;

    let stem = args
        .name
        .clone()
        .unwrap_or_else(|| default_stem(star.star_type.name(), star.diameter as i64, star.seed));
    let options = OutputOptions {
        dir: &args.output,
        crop: args.crop,
        scale: args.scale,
        metadata: !args.no_metadata,
    };

    let path = write_star(&star, &stem, &options)?;
    printer.success("Finished", &printer.cyan(&display_path(&path)));

    Ok(())
}

/// Short description for status lines, e.g. "RedGiant (300px, seed 7)".
pub fn describe(request: &RenderRequest) -> String {
    format!(
        "{} ({}px, seed {})",
        request.star_type.as_deref().unwrap_or("?"),
        request.diameter.unwrap_or_default(),
        request.seed
    )
}

/// Write `<stem>.png` (and `<stem>.json`) into the output directory.
/// Returns the PNG path.
pub fn write_star(star: &RenderedStar, stem: &str, options: &OutputOptions) -> Result<PathBuf> {
    if !options.dir.exists() {
        fs::create_dir_all(options.dir).map_err(|e| StarError::Io {
            path: options.dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    let cropped;
    let canvas = if options.crop {
        cropped = crop_to_body(&star.canvas, star.diameter)?;
        &cropped
    } else {
        &star.canvas
    };

    let (width, height) = scaled_size(canvas, options.scale)?;
    let png_path = options.dir.join(format!("{}.png", stem));
    write_png(canvas, &png_path, options.scale)?;

    if options.metadata {
        let meta = StarMeta::from_star(star, width, height);
        write_metadata(&meta, &options.dir.join(format!("{}.json", stem)))?;
    }

    Ok(png_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(output: PathBuf) -> RenderArgs {
        RenderArgs {
            star_type: StarType::RedGiant,
            diameter: 41,
            seed: 7,
            output,
            name: None,
            crop: false,
            scale: 1,
            no_metadata: false,
        }
    }

    #[test]
    fn test_render_writes_png_and_metadata() {
        let dir = tempdir().unwrap();
        run(args(dir.path().to_path_buf()), &Printer::plain()).unwrap();

        let png = dir.path().join("redgiant-42-7.png");
        let json = dir.path().join("redgiant-42-7.json");
        assert!(png.exists());
        assert!(json.exists());

        let img = image::open(&png).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (84, 84));
    }

    #[test]
    fn test_render_crop_and_scale() {
        let dir = tempdir().unwrap();
        let mut args = args(dir.path().join("nested"));
        args.name = Some("betelgeuse".to_string());
        args.crop = true;
        args.scale = 2;
        args.no_metadata = true;
        run(args, &Printer::plain()).unwrap();

        let png = dir.path().join("nested").join("betelgeuse.png");
        let img = image::open(&png).unwrap().to_rgba8();
        assert_eq!((img.width(), img.height()), (84, 84));
        assert!(!dir.path().join("nested").join("betelgeuse.json").exists());
    }

    #[test]
    fn test_metadata_reports_written_size() {
        let dir = tempdir().unwrap();
        let star = render_star(&RenderRequest::new("Regular", 20, 1)).unwrap();
        let options = OutputOptions {
            dir: dir.path(),
            crop: true,
            scale: 3,
            metadata: true,
        };
        write_star(&star, "sol", &options).unwrap();

        let json = fs::read_to_string(dir.path().join("sol.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["width"], 60);
        assert_eq!(parsed["height"], 60);
    }

    #[test]
    fn test_oversized_scale_writes_nothing() {
        let dir = tempdir().unwrap();
        let star = render_star(&RenderRequest::new("Regular", 20, 1)).unwrap();
        let options = OutputOptions {
            dir: dir.path(),
            crop: false,
            scale: u32::MAX,
            metadata: true,
        };

        let err = write_star(&star, "sol", &options).unwrap_err();
        assert!(matches!(err, StarError::InvalidDimension { .. }));
        assert!(!dir.path().join("sol.png").exists());
        assert!(!dir.path().join("sol.json").exists());
    }

    #[test]
    fn test_describe() {
        let request = RenderRequest::new("WhiteDwarf", 150, 3);
        assert_eq!(describe(&request), "WhiteDwarf (150px, seed 3)");
    }
}
