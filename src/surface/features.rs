//! Reusable feature passes shared by the surface generators.
//!
//! Each generator composes these explicitly from its `generate` function,
//! passing its own colour ranges. Every helper draws from the caller's
//! [`StarRng`] in a fixed order.

use std::f64::consts::PI;

use crate::canvas::PixelCanvas;
use crate::error::Result;
use crate::rng::StarRng;
use crate::types::{Colour, ColourPalette};

/// Centre and radius of a body painted on a `size x size` canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Disc {
    pub size: i32,
    pub centre: f64,
    pub radius: f64,
}

impl Disc {
    pub fn new(size: i32) -> Self {
        Self {
            size,
            centre: size as f64 / 2.0,
            radius: size as f64 / 2.0,
        }
    }

    /// Distance of (x, y) from the centre.
    pub fn distance(&self, x: f64, y: f64) -> f64 {
        let dx = x - self.centre;
        let dy = y - self.centre;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether (x, y) lies within `fraction` of the radius.
    pub fn contains_within(&self, x: f64, y: f64, fraction: f64) -> bool {
        self.distance(x, y) <= self.radius * fraction
    }

    /// Whether (x, y) lies on the disc.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.contains_within(x, y, 1.0)
    }

    /// Point at `distance` from the centre along `angle`, or `None` when it
    /// falls outside the disc.
    pub fn polar(&self, distance: f64, angle: f64) -> Option<(f64, f64)> {
        let x = self.centre + distance * angle.cos();
        let y = self.centre + distance * angle.sin();
        self.contains(x, y).then_some((x, y))
    }

    /// Radius scaled by `fraction`, truncated to whole pixels.
    pub fn fraction(&self, fraction: f64) -> i32 {
        (self.radius * fraction) as i32
    }

    /// Random point at a whole-pixel distance in `lo..=hi` (fractions of the
    /// radius) and a whole-degree angle. Draws angle first, then distance.
    pub fn scatter(&self, rng: &mut StarRng, lo: f64, hi: f64) -> Option<(f64, f64)> {
        let angle = rng.angle();
        let distance = rng.int(self.fraction(lo), self.fraction(hi));
        self.polar(distance as f64, angle)
    }
}

/// Transparent canvas with a filled circle of diameter `size` in the
/// palette's core colour.
pub fn draw_base_circle(size: i32, palette: &ColourPalette) -> Result<PixelCanvas> {
    let mut canvas = PixelCanvas::new(size as i64, size as i64)?;
    canvas.filled_ellipse(size / 2, size / 2, size, size, palette.core());
    Ok(canvas)
}

/// Per-pixel pass over the disc.
///
/// For every pixel on the disc, `shade` receives the normalised distance
/// from the centre (0 at the centre, 1 at the rim) and a noise sample in
/// `-noise..=noise`, and returns the colour to blend. Columns are walked
/// left to right, rows top to bottom within each column.
pub fn radial_gradient_pass<F>(
    canvas: &mut PixelCanvas,
    disc: &Disc,
    rng: &mut StarRng,
    noise: i32,
    shade: F,
) where
    F: Fn(f64, i32) -> Colour,
{
    for x in 0..disc.size {
        for y in 0..disc.size {
            let distance = disc.distance(x as f64, y as f64);
            if distance <= disc.radius {
                let sample = rng.noise(noise);
                canvas.blend_pixel(x, y, shade(distance / disc.radius, sample));
            }
        }
    }
}

/// Three translucent halos around a spot at (x, y), each `step` pixels
/// wider than the last. `ring` picks the colour for halo `j` (1..=3).
pub fn glow_rings<F>(
    canvas: &mut PixelCanvas,
    x: i32,
    y: i32,
    spot_size: i32,
    step: i32,
    rng: &mut StarRng,
    ring: F,
) where
    F: Fn(&mut StarRng, i32) -> Colour,
{
    for j in 1..=3 {
        let glow_size = spot_size + j * step;
        let colour = ring(rng, j);
        canvas.filled_ellipse(x, y, glow_size, glow_size, colour);
    }
}

/// Ring outline plus evenly spaced jittered dots along it.
#[derive(Debug, Clone, Copy)]
pub struct RingTexture {
    /// Range for the number of dots.
    pub points: (i32, i32),
    /// Range for the dot diameter.
    pub point_size: (i32, i32),
}

/// Draw a ring of `ring_radius` around the disc centre, then texture it.
pub fn textured_ring(
    canvas: &mut PixelCanvas,
    disc: &Disc,
    ring_radius: f64,
    colour: Colour,
    texture: RingTexture,
    rng: &mut StarRng,
) {
    let centre = disc.centre as i32;
    let diameter = (ring_radius * 2.0) as i32;
    canvas.ellipse_outline(centre, centre, diameter, diameter, colour);

    let count = rng.int(texture.points.0, texture.points.1);
    for i in 0..count {
        let angle = (i as f64 * 360.0 / count as f64) * PI / 180.0;
        let adjusted = ring_radius * (0.95 + rng.int(0, 10) as f64 / 100.0);

        let x = disc.centre + adjusted * angle.cos();
        let y = disc.centre + adjusted * angle.sin();

        let point = rng.int(texture.point_size.0, texture.point_size.1);
        canvas.filled_ellipse(x as i32, y as i32, point, point, colour);
    }
}

/// Slightly irregular ellipse: `size` wide, 80–120% of that tall.
pub fn irregular_cell(
    canvas: &mut PixelCanvas,
    x: f64,
    y: f64,
    size: i32,
    colour: Colour,
    rng: &mut StarRng,
) {
    let height = size * rng.int(80, 120) / 100;
    canvas.filled_ellipse(x as i32, y as i32, size, height, colour);
}
