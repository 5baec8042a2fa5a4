//! PNG output for rendered stars.
//!
//! Encodes canvases to PNG files with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::canvas::PixelCanvas;
use crate::error::{Result, StarError};

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &PixelCanvas, path: &Path, scale: u32) -> Result<()> {
    let img = to_image(canvas, scale)?;

    img.save(path).map_err(|e| StarError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Output size of a canvas upscaled by `scale` (0 is treated as 1).
///
/// Fails when the scaled image would not fit in memory.
pub fn scaled_size(canvas: &PixelCanvas, scale: u32) -> Result<(u32, u32)> {
    let scale = scale.max(1);
    let too_large = || StarError::InvalidDimension {
        message: format!(
            "{}x{} scaled by {} is too large to encode",
            canvas.width(),
            canvas.height(),
            scale
        ),
        help: Some("Use a smaller scale factor".to_string()),
    };

    let width = canvas.width().checked_mul(scale).ok_or_else(too_large)?;
    let height = canvas.height().checked_mul(scale).ok_or_else(too_large)?;
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(too_large)?;
    Ok((width, height))
}

/// Convert a canvas to an RGBA image, upscaled nearest-neighbour.
pub fn to_image(canvas: &PixelCanvas, scale: u32) -> Result<RgbaImage> {
    let (width, height) = scaled_size(canvas, scale)?;
    let scale = scale.max(1);

    if scale == 1 {
        return RgbaImage::from_raw(width, height, canvas.to_rgba_buffer()).ok_or_else(|| {
            StarError::Build {
                message: "pixel buffer does not match canvas size".to_string(),
                help: None,
            }
        });
    }

    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for (x, y, colour) in canvas.iter_pixels() {
        let rgba = Rgba(colour.to_rgba());

        // Fill scaled pixels
        for sy in 0..scale {
            for sx in 0..scale {
                img.put_pixel(x * scale + sx, y * scale + sy, rgba);
            }
        }
    }

    Ok(img)
}

/// Cut the body out of a full render: a `diameter` square centred on the
/// canvas.
pub fn crop_to_body(canvas: &PixelCanvas, diameter: i32) -> Result<PixelCanvas> {
    let x = canvas.width() as i32 / 2 - diameter / 2;
    let y = canvas.height() as i32 / 2 - diameter / 2;
    canvas.crop(x, y, diameter as i64, diameter as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    fn checker() -> PixelCanvas {
        let mut canvas = PixelCanvas::new(2, 2).unwrap();
        canvas.put_pixel(0, 0, Colour::BLACK);
        canvas.put_pixel(1, 0, Colour::WHITE);
        canvas.put_pixel(0, 1, Colour::WHITE);
        canvas.put_pixel(1, 1, Colour::BLACK);
        canvas
    }

    #[test]
    fn test_write_png_simple() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&checker(), &path, 1).unwrap();

        assert!(path.exists());

        // Read back and verify
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]); // Black
        assert_eq!(img.get_pixel(1, 0).0, [255, 255, 255, 255]); // White
    }

    #[test]
    fn test_write_png_scaled() {
        let mut canvas = PixelCanvas::new(2, 1).unwrap();
        canvas.put_pixel(0, 0, Colour::rgb(255, 0, 0));
        canvas.put_pixel(1, 0, Colour::rgb(0, 255, 0));

        let dir = tempdir().unwrap();
        let path = dir.path().join("scaled.png");

        write_png(&canvas, &path, 2).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 4);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(2, 0).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(3, 1).0, [0, 255, 0, 255]);
    }

    #[test]
    fn test_write_png_keeps_alpha() {
        let mut canvas = PixelCanvas::new(2, 1).unwrap();
        canvas.put_pixel(1, 0, Colour::new(255, 0, 0, 128));

        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        write_png(&canvas, &path, 1).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(1, 0).0, [255, 0, 0, 128]);
    }

    #[test]
    fn test_write_png_scale_zero_treated_as_one() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("zero.png");

        write_png(&checker(), &path, 0).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
    }

    #[test]
    fn test_write_png_bad_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("star.png");

        let err = write_png(&checker(), &path, 1).unwrap_err();
        assert!(matches!(err, StarError::Io { .. }));
    }

    #[test]
    fn test_huge_scale_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("huge.png");

        let err = write_png(&checker(), &path, u32::MAX).unwrap_err();
        assert!(matches!(err, StarError::InvalidDimension { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_scaled_size() {
        assert_eq!(scaled_size(&checker(), 0).unwrap(), (2, 2));
        assert_eq!(scaled_size(&checker(), 3).unwrap(), (6, 6));
        assert!(scaled_size(&checker(), u32::MAX / 2 + 1).is_err());
    }

    #[test]
    fn test_crop_to_body_is_centred() {
        let mut canvas = PixelCanvas::new(8, 8).unwrap();
        canvas.filled_rect(2, 2, 5, 5, Colour::WHITE);

        let body = crop_to_body(&canvas, 4).unwrap();
        assert_eq!(body.size(), (4, 4));
        assert!(body.pixels().iter().all(|c| *c == Colour::WHITE));
    }
}
