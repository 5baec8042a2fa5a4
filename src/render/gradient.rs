//! Radial alpha gradients used for glow halos.

use crate::canvas::PixelCanvas;
use crate::error::Result;
use crate::types::Colour;

/// Bounding shape of a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientShape {
    /// Ellipse inscribed in the canvas.
    Ellipse,
}

/// Build a `size x size` gradient of `colour` whose alpha runs from
/// `alpha_from` at the centre to `alpha_to` at the rim.
///
/// The normalised distance from the centre is raised to `falloff` before
/// interpolating (1.0 is linear). Pixels outside the shape stay transparent.
pub fn radial_alpha_gradient(
    size: i64,
    shape: GradientShape,
    colour: Colour,
    alpha_from: u8,
    alpha_to: u8,
    falloff: f64,
) -> Result<PixelCanvas> {
    let mut canvas = PixelCanvas::new(size, size)?;

    let centre = size as f64 / 2.0;
    let radius = size as f64 / 2.0;
    let from = alpha_from as f64;
    let to = alpha_to as f64;

    for y in 0..size as i32 {
        for x in 0..size as i32 {
            // Sample at the pixel centre
            let dx = x as f64 + 0.5 - centre;
            let dy = y as f64 + 0.5 - centre;

            let distance = match shape {
                GradientShape::Ellipse => (dx * dx + dy * dy).sqrt() / radius,
            };
            if distance > 1.0 {
                continue;
            }

            let t = distance.powf(falloff);
            let alpha = (from + (to - from) * t).round().clamp(0.0, 255.0) as u8;
            canvas.put_pixel(x, y, colour.with_alpha(alpha));
        }
    }

    Ok(canvas)
}
