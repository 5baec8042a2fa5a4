//! White dwarf stars.
//!
//! A small, blue-white body: an even gradient, a dense bright centre,
//! blue-tinted patches, faint crystalline line clusters and thin rings.

use crate::canvas::PixelCanvas;
use crate::error::Result;
use crate::rng::StarRng;
use crate::types::Colour;

use super::features::{draw_base_circle, radial_gradient_pass, textured_ring, Disc, RingTexture};
use super::SurfaceGenerator;

const CENTRE_LAYERS: i32 = 3;
const HEAT_SPOTS: i32 = 10;

/// Generator for `WhiteDwarf` stars.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhiteDwarfStar;

impl SurfaceGenerator for WhiteDwarfStar {
    fn name(&self) -> &'static str {
        "WhiteDwarf"
    }

    fn colours(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("core", "#ffffff"),
            ("surface", "#ccffff"),
            ("corona", "#eeffff"),
        ]
    }

    fn generate(&self, size: i32, rng: &mut StarRng) -> Result<PixelCanvas> {
        let mut canvas = draw_base_circle(size, &self.palette()?)?;
        let disc = Disc::new(size);

        base_gradient(&mut canvas, &disc, rng);
        bright_centre(&mut canvas, &disc);
        blue_regions(&mut canvas, &disc, rng);
        crystalline_patterns(&mut canvas, &disc, rng);
        heat_spots(&mut canvas, &disc, rng);
        decorative_rings(&mut canvas, &disc, rng);

        Ok(canvas)
    }
}

/// Flattened gradient: `(d/r)^0.8` keeps most of the disc near the centre
/// tone.
fn base_gradient(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    radial_gradient_pass(canvas, disc, rng, 15, |d, noise| {
        let g = d.powf(0.8);
        let r = (200 - (40.0 * g) as i32 + noise).clamp(160, 220);
        let gr = (210 - (30.0 * g) as i32 + noise).clamp(180, 230);
        let b = (255 - (10.0 * g) as i32 + noise).clamp(220, 255);
        Colour::translucent(r, gr, b, (30.0 * g) as i32)
    });
}

fn bright_centre(canvas: &mut PixelCanvas, disc: &Disc) {
    let centre = disc.centre as i32;
    let third = disc.size as f64 / 3.0;

    for i in 0..CENTRE_LAYERS {
        let layer = (third * (CENTRE_LAYERS - i) as f64 / CENTRE_LAYERS as f64) as i32;
        let colour = Colour::translucent(210, 220, 250, 40 + i * 10);
        canvas.filled_ellipse(centre, centre, layer, layer, colour);
    }

    let core = disc.size / 12;
    canvas.filled_ellipse(centre, centre, core, core, Colour::translucent(220, 230, 255, 30));
}

fn blue_regions(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(25, 35);
    for _ in 0..count {
        let Some((x, y)) = disc.scatter(rng, 0.2, 0.95) else {
            continue;
        };

        let region_size = rng.int(3, 8);
        let blue = rng.int(200, 255);
        let colour = Colour::translucent(rng.int(160, 200), rng.int(180, 220), blue, rng.int(30, 60));
        canvas.filled_ellipse(x as i32, y as i32, region_size, region_size, colour);
    }
}

/// Clusters of short radiating lines, some tipped with a dot.
fn crystalline_patterns(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let count = rng.int(4, 8);
    for _ in 0..count {
        let Some((cx, cy)) = disc.scatter(rng, 0.5, 0.9) else {
            continue;
        };

        let lines = rng.int(3, 6);
        for _ in 0..lines {
            let angle = rng.angle();
            let length = rng.int(5, 15) as f64;
            let end_x = cx + length * angle.cos();
            let end_y = cy + length * angle.sin();

            let colour = Colour::translucent(
                rng.int(200, 240),
                rng.int(200, 240),
                rng.int(220, 255),
                rng.int(30, 60),
            );
            canvas.line(cx as i32, cy as i32, end_x as i32, end_y as i32, colour);

            if rng.one_in(3) {
                let dot = Colour::translucent(
                    rng.int(200, 240),
                    rng.int(200, 240),
                    rng.int(220, 255),
                    rng.int(20, 40),
                );
                canvas.filled_ellipse(end_x as i32, end_y as i32, 2, 2, dot);
            }
        }
    }
}

fn heat_spots(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let colour = Colour::translucent(240, 240, 255, 20);
    for _ in 0..HEAT_SPOTS {
        let Some((x, y)) = disc.scatter(rng, 0.0, 0.8) else {
            continue;
        };
        let spot = rng.int(1, 3);
        canvas.filled_ellipse(x as i32, y as i32, spot, spot, colour);
    }
}

fn decorative_rings(canvas: &mut PixelCanvas, disc: &Disc, rng: &mut StarRng) {
    let texture = RingTexture {
        points: (15, 25),
        point_size: (1, 3),
    };

    let count = rng.int(2, 3);
    for i in 0..count {
        let ring_radius = disc.radius * (0.4 + i as f64 * 0.2);
        let colour = Colour::translucent(
            rng.int(200, 230),
            rng.int(200, 230),
            rng.int(230, 255),
            rng.int(50, 70),
        );
        textured_ring(canvas, disc, ring_radius, colour, texture, rng);
    }
}
