//! Red giant stars.
//!
//! Dim orange-red gradient crossed by wavy horizontal bands, with large
//! convection cells, dark sunspots and prominences that sometimes flare
//! outward past the limb.

use std::f64::consts::PI;

use crate::canvas::PixelCanvas;
use crate::error::Result;
use crate::rng::StarRng;
use crate::types::{channel, Colour};

use super::features::{
    draw_base_circle, glow_rings, irregular_cell, radial_gradient_pass, Disc,
};
use super::SurfaceGenerator;

/// Generator for `RedGiant` stars.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedGiantStar;

impl SurfaceGenerator for RedGiantStar {
    fn name(&self) -> &'static str {
        "RedGiant"
    }

    fn colours(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("core", "#ff2200"),
            ("surface", "#ff5500"),
            ("corona", "#ff8844"),
        ]
    }

    fn generate(&self, size: i32, rng: &mut StarRng) -> Result<PixelCanvas> {
        let mut canvas = draw_base_circle(size, &self.palette()?)?;
        let disc = Disc::new(size);

        base_gradient(&mut canvas, &disc, rng);
        horizontal_bands(&mut canvas, &disc, rng);
        convection_cells(&mut canvas, &disc, rng);
        sunspots(&mut canvas, &disc, rng);
        prominences(&mut canvas, &disc, rng);

        Ok(canvas)
    }
}

fn base_gradient(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    radial_gradient_pass(canvas, disc, rng, 20, |g, noise| {
        let r = (220 - (70.0 * g) as i32 + noise).clamp(150, 220);
        let gr = (140 - (120.0 * g) as i32 + noise).clamp(20, 140);
        Colour::translucent(r, gr, 20, (40.0 * g) as i32)
    });
}

/// One horizontal band across the disc.
#[derive(Debug, Clone, Copy)]
struct Band {
    top: i32,
    height: i32,
    colour: Colour,
    dark: bool,
}

fn horizontal_bands(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(16, 24);
    let height = disc.size / count;

    for i in 0..count {
        let top = i * height + rng.int(-2, 2);
        let dark = i % 2 == 0;

        let colour = if dark {
            Colour::translucent(
                rng.int(170, 200),
                rng.int(60, 90),
                rng.int(0, 20),
                rng.int(50, 70),
            )
        } else {
            Colour::translucent(
                rng.int(200, 230),
                rng.int(90, 130),
                rng.int(10, 30),
                rng.int(40, 60),
            )
        };

        let band = Band {
            top,
            height,
            colour,
            dark,
        };

        wavy_band(canvas, disc, &band, rng);

        // Three bands in four get texture
        if rng.int(0, 3) > 0 {
            band_texture(canvas, disc, &band, rng);
        }
    }
}

/// Paint a band whose top and bottom edges follow a sine wave.
///
/// Each pixel takes the band colour at an opacity five transparency steps
/// stronger than the pixel it covers.
fn wavy_band(canvas: &mut PixelCanvas, disc: &Disc, band: &Band, rng: &mut StarRng) {
    let amplitude = rng.int(2, 5) as f64;
    let frequency = rng.int(3, 5) as f64;

    for x in 0..disc.size {
        let dx = x as f64 - disc.centre;
        if dx.abs() >= disc.radius {
            continue;
        }

        let offset = amplitude * (frequency * dx * PI / disc.radius).sin();
        let top = (band.top as f64 + offset) as i32;
        let bottom = ((band.top + band.height) as f64 + offset) as i32;

        for y in top.max(0)..bottom.min(disc.size) {
            if !disc.contains(x as f64, y as f64) {
                continue;
            }
            let Some(under) = canvas.get(x, y) else {
                continue;
            };
            let transparency = (under.transparency() - 5).max(0);
            let colour = Colour::translucent(
                band.colour.r as i32,
                band.colour.g as i32,
                band.colour.b as i32,
                transparency,
            );
            canvas.blend_pixel(x, y, colour);
        }
    }
}

/// Horizontally stretched blobs and short streaks inside a band.
fn band_texture(canvas: &mut PixelCanvas, disc: &Disc, band: &Band, rng: &mut StarRng) {
    let features = rng.int(10, 20);
    for _ in 0..features {
        let x = rng.int(0, disc.size);
        let y = rng.int(band.top, band.top + band.height);

        if !disc.contains(x as f64, y as f64) {
            continue;
        }

        let feature_size = rng.int(3, 8);

        // Contrast with the band tone
        let colour = if band.dark {
            Colour::translucent(
                rng.int(190, 220),
                rng.int(80, 120),
                rng.int(10, 30),
                rng.int(40, 60),
            )
        } else {
            Colour::translucent(
                rng.int(160, 190),
                rng.int(50, 90),
                rng.int(0, 20),
                rng.int(50, 70),
            )
        };

        canvas.filled_ellipse(x, y, feature_size * 2, feature_size, colour);
    }

    let streaks = rng.int(5, 10);
    for _ in 0..streaks {
        let start_x = rng.int(0, disc.size);
        let start_y = rng.int(
            band.top + 1,
            (disc.size - 1).min(band.top + band.height - 1),
        );

        if !disc.contains_within(start_x as f64, start_y as f64, 0.9) {
            continue;
        }

        let length = rng.int(5, 15);
        let end_x = (disc.size - 1).min(start_x + length);

        let base = band.colour;
        let r = channel(base.r as i32 + rng.int(-20, 20));
        let g = channel(base.g as i32 + rng.int(-20, 20));
        let b = channel(base.b as i32 + rng.int(-10, 10));
        let colour = Colour::translucent(r as i32, g as i32, b as i32, rng.int(30, 50));

        canvas.line(start_x, start_y, end_x, start_y, colour);
    }
}

fn convection_cells(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(15, 25);
    for _ in 0..count {
        let Some((x, y)) = disc.scatter(rng, 0.0, 0.9) else {
            continue;
        };

        let cell_size = rng.int(10, 25);
        let colour = Colour::translucent(
            rng.int(180, 220),
            rng.int(60, 120),
            rng.int(0, 20),
            rng.int(30, 60),
        );

        irregular_cell(canvas, x, y, cell_size, colour, rng);
    }
}

fn sunspots(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(5, 10);
    for _ in 0..count {
        let Some((x, y)) = disc.scatter(rng, 0.0, 0.8) else {
            continue;
        };

        let spot_size = rng.int(5, 15);
        let colour = Colour::translucent(rng.int(80, 120), rng.int(20, 60), 0, rng.int(0, 20));
        canvas.filled_ellipse(x as i32, y as i32, spot_size, spot_size, colour);

        // Umbra on one spot in three
        if rng.one_in(3) {
            let umbra = Colour::translucent(rng.int(60, 100), rng.int(0, 20), 0, rng.int(20, 40));
            canvas.filled_ellipse(x as i32, y as i32, spot_size / 2, spot_size / 2, umbra);
        }
    }
}

fn prominences(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(3, 6);
    for _ in 0..count {
        let angle = rng.angle();
        let distance = rng.int(disc.fraction(0.8), disc.fraction(0.95));
        let Some((x, y)) = disc.polar(distance as f64, angle) else {
            continue;
        };

        let flare_size = rng.int(10, 20);
        let colour = Colour::translucent(
            rng.int(220, 255),
            rng.int(100, 180),
            rng.int(0, 50),
            rng.int(0, 20),
        );
        canvas.filled_ellipse(x as i32, y as i32, flare_size, flare_size, colour);

        glow_rings(canvas, x as i32, y as i32, flare_size, 3, rng, |rng, j| {
            Colour::translucent(255, rng.int(100, 180), rng.int(30, 80), 30 + j * 15)
        });

        // One in three grows an extension, roughly radial
        if rng.one_in(3) {
            let ext_angle = angle + rng.int(-30, 30) as f64 * PI / 180.0;
            let ext_length = rng.int(flare_size, flare_size * 2) as f64;

            let end_x = x + ext_angle.cos() * ext_length;
            let end_y = y + ext_angle.sin() * ext_length;
            let thickness = rng.int(3, 6);

            canvas.thick_line(
                x as i32,
                y as i32,
                end_x as i32,
                end_y as i32,
                colour,
                thickness,
            );
        }
    }
}
