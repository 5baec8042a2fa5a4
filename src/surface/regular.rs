//! Regular (main-sequence, yellow) stars.
//!
//! Bright yellow-white gradient, fine granulation, a few flares near the
//! limb and faint concentric bands.

use crate::canvas::PixelCanvas;
use crate::error::Result;
use crate::rng::StarRng;
use crate::types::Colour;

use super::features::{
    draw_base_circle, glow_rings, irregular_cell, radial_gradient_pass, textured_ring, Disc,
    RingTexture,
};
use super::SurfaceGenerator;

const GRANULATION_CELLS: i32 = 150;

/// Generator for `Regular` stars.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegularStar;

impl SurfaceGenerator for RegularStar {
    fn name(&self) -> &'static str {
        "Regular"
    }

    fn colours(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("core", "#ffff66"),
            ("surface", "#ffffcc"),
            ("corona", "#ffffdd"),
        ]
    }

    fn generate(&self, size: i32, rng: &mut StarRng) -> Result<PixelCanvas> {
        let mut canvas = draw_base_circle(size, &self.palette()?)?;
        let disc = Disc::new(size);

        base_gradient(&mut canvas, &disc, rng);
        granulation(&mut canvas, &disc, rng);
        solar_flares(&mut canvas, &disc, rng);
        decorative_bands(&mut canvas, &disc, rng);

        Ok(canvas)
    }
}

/// Bright centre fading toward the limb, with ±15 noise on every channel.
fn base_gradient(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    radial_gradient_pass(canvas, disc, rng, 15, |g, noise| {
        let r = 255 - (50.0 * g) as i32;
        let gr = 240 - (70.0 * g) as i32;
        let b = (102.0 + 153.0 * (1.0 - g)) as i32;
        Colour::translucent(r + noise, gr + noise, b + noise, (40.0 * g) as i32)
    });
}

/// Small cell-like blobs over most of the disc.
fn granulation(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    for _ in 0..GRANULATION_CELLS {
        let Some((x, y)) = disc.scatter(rng, 0.0, 0.9) else {
            continue;
        };

        let cell_size = rng.int(3, 8);
        let colour = Colour::translucent(
            rng.int(220, 255),
            rng.int(180, 220),
            rng.int(100, 150),
            rng.int(30, 60),
        );

        irregular_cell(canvas, x, y, cell_size, colour, rng);
    }
}

/// A handful of bright spots near the limb, each wrapped in three halos.
fn solar_flares(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(3, 6);
    for _ in 0..count {
        let Some((x, y)) = disc.scatter(rng, 0.7, 0.95) else {
            continue;
        };

        let flare_size = rng.int(10, 20);
        let colour = Colour::translucent(255, rng.int(200, 255), rng.int(100, 150), 0);
        canvas.filled_ellipse(x as i32, y as i32, flare_size, flare_size, colour);

        glow_rings(canvas, x as i32, y as i32, flare_size, 4, rng, |rng, j| {
            Colour::translucent(255, rng.int(180, 220), rng.int(80, 120), 20 + j * 20)
        });
    }
}

/// Two or three faint rings at 30%, 55% and 80% of the radius.
fn decorative_bands(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let texture = RingTexture {
        points: (20, 30),
        point_size: (2, 4),
    };

    let count = rng.int(2, 3);
    for i in 0..count {
        let band_radius = disc.radius * (0.3 + i as f64 * 0.25);
        let colour = Colour::translucent(
            rng.int(220, 255),
            rng.int(200, 240),
            rng.int(120, 180),
            rng.int(50, 70),
        );
        textured_ring(canvas, disc, band_radius, colour, texture, rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        let palette = RegularStar.palette().unwrap();
        assert_eq!(palette.core(), Colour::rgb(255, 255, 0x66));
        assert_eq!(palette.get("corona"), Some(Colour::rgb(255, 255, 0xdd)));
    }

    #[test]
    fn test_centre_is_warm_white() {
        let canvas = RegularStar.generate(200, &mut StarRng::seeded(12345)).unwrap();
        let c = canvas.get(100, 100).unwrap();
        assert!(c.is_opaque());
        assert!(c.r >= 200, "{c}");
        assert!(c.g >= 150, "{c}");
    }

    #[test]
    fn test_seed_changes_features() {
        let a = RegularStar.generate(120, &mut StarRng::seeded(12345)).unwrap();
        let b = RegularStar.generate(120, &mut StarRng::seeded(54321)).unwrap();
        assert_ne!(a, b);
        assert_eq!(a.size(), b.size());
    }

    #[test]
    fn test_base_gradient_dims_toward_limb() {
        // Without noise the formula gives a strictly dimmer red channel at the rim
        let disc = Disc::new(100);
        let mut canvas = PixelCanvas::filled(100, 100, Colour::BLACK).unwrap();
        let mut rng = StarRng::seeded(1);
        base_gradient(&mut canvas, &disc, &mut rng);

        let centre = canvas.get(50, 50).unwrap();
        let rim = canvas.get(50, 2).unwrap();
        assert!(centre.r > rim.r);
        assert!(centre.b > rim.b);
    }
}
