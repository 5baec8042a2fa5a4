//! Star render pipeline.
//!
//! Turns a [`RenderRequest`] into a finished [`RenderedStar`]: three glow
//! halos, the generated surface, a lens flare and the name label, all on a
//! transparent canvas twice the body's diameter.

use std::f64::consts::PI;

use crate::canvas::PixelCanvas;
use crate::error::{Result, StarError};
use crate::rng::StarRng;
use crate::surface::StarType;
use crate::types::{Colour, ColourPalette};

use super::gradient::{radial_alpha_gradient, GradientShape};
use super::label::{draw_label, label_position, LabelStyle};
use super::layers::LayerOrchestrator;

/// Glow halos as (diameter multiplier, centre alpha), outermost first.
const GLOWS: [(f64, u8); 3] = [(2.0, 0x22), (1.6, 0x44), (1.3, 0x88)];

const FLARE_STEPS: i32 = 20;
const GLINTS: i32 = 5;

/// Pipeline stages, in the order they complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStage {
    Sized,
    GlowsBuilt,
    SurfaceGenerated,
    Composited,
    FlareAdded,
    Labeled,
    Done,
}

/// What to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderRequest {
    /// Registered star type name.
    pub star_type: Option<String>,
    /// Body diameter in pixels; odd values round up to even.
    pub diameter: Option<i64>,
    pub seed: u64,
}

impl RenderRequest {
    pub fn new(star_type: impl Into<String>, diameter: i64, seed: u64) -> Self {
        Self {
            star_type: Some(star_type.into()),
            diameter: Some(diameter),
            seed,
        }
    }
}

/// A finished render.
#[derive(Debug, Clone)]
pub struct RenderedStar {
    /// Label drawn above the body.
    pub name: String,
    pub star_type: StarType,
    /// Normalised (even) body diameter.
    pub diameter: i32,
    pub seed: u64,
    /// Palette of the star's type.
    pub palette: ColourPalette,
    /// `2 * diameter` square canvas.
    pub canvas: PixelCanvas,
}

/// Largest accepted diameter; the outer glow and canvas are twice this.
pub const MAX_DIAMETER: i64 = (i32::MAX / 4) as i64;

/// Round odd values up to the next even number, saturating at `i64::MAX`.
pub fn make_even(n: i64) -> i64 {
    if n % 2 == 0 {
        n
    } else {
        n.saturating_add(1)
    }
}

/// Glow halo diameters for a body, outermost first.
pub fn glow_sizes(diameter: i32) -> [i64; 3] {
    GLOWS.map(|(scale, _)| make_even((diameter as f64 * scale).round() as i64))
}

/// Render a star.
pub fn render_star(request: &RenderRequest) -> Result<RenderedStar> {
    render_star_observed(request, |_| {})
}

/// Render a star, reporting each completed stage to `observer`.
pub fn render_star_observed<F>(request: &RenderRequest, mut observer: F) -> Result<RenderedStar>
where
    F: FnMut(RenderStage),
{
    let type_name = request.star_type.as_deref().ok_or_else(|| {
        StarError::MissingRequiredParameter {
            message: "no star type given".to_string(),
            help: Some(format!("Known types: {}", StarType::names().join(", "))),
        }
    })?;
    let diameter = request
        .diameter
        .ok_or_else(|| StarError::MissingRequiredParameter {
            message: "no diameter given".to_string(),
            help: Some("Pass the body diameter in pixels".to_string()),
        })?;

    let star_type = StarType::from_name(type_name)?;
    let generator = star_type.generator();

    // Range check first: the canvas is twice the diameter on each side
    if diameter <= 0 || diameter > MAX_DIAMETER {
        return Err(StarError::invalid_dimension(diameter, diameter));
    }
    let diameter = make_even(diameter);
    let size = diameter * 2;
    let diameter = diameter as i32;
    observer(RenderStage::Sized);

    let palette = generator.palette()?;
    let mut layers = LayerOrchestrator::transparent(size, size)?;
    let glow_colour = palette.get_or_core("corona");
    for (glow_size, (_, alpha)) in glow_sizes(diameter).into_iter().zip(GLOWS) {
        let glow = radial_alpha_gradient(
            glow_size,
            GradientShape::Ellipse,
            glow_colour,
            alpha,
            0,
            1.0,
        )?;
        layers.add_centred(glow)?;
    }
    observer(RenderStage::GlowsBuilt);

    let mut rng = StarRng::seeded(request.seed);
    let surface = generator.generate(diameter, &mut rng)?;
    layers.add_centred(surface)?;
    observer(RenderStage::SurfaceGenerated);

    let mut canvas = layers.render()?;
    observer(RenderStage::Composited);

    let radius = diameter as f64 / 2.0;
    streaks(&mut canvas, radius, palette.core(), &mut rng);
    glints(&mut canvas, diameter / 2, palette.core(), &mut rng);
    observer(RenderStage::FlareAdded);

    let name = generator.name();
    let (x, y) = label_position(size as i32, size as i32, diameter, name);
    draw_label(&mut canvas, name, x, y, &LabelStyle::default());
    observer(RenderStage::Labeled);

    observer(RenderStage::Done);

    Ok(RenderedStar {
        name: name.to_string(),
        star_type,
        diameter,
        seed: request.seed,
        palette,
        canvas,
    })
}

fn centre(canvas: &PixelCanvas) -> (f64, f64) {
    (canvas.width() as f64 / 2.0, canvas.height() as f64 / 2.0)
}

/// Lens flare: 4 to 8 evenly spaced streaks from the centre, each up to
/// `0.7 * radius` long, fading to nothing at the tip.
fn streaks(canvas: &mut PixelCanvas, radius: f64, colour: Colour, rng: &mut StarRng) {
    let (centre_x, centre_y) = centre(canvas);
    let max_length = radius * 0.7;
    let (r, g, b) = (colour.r as i32, colour.g as i32, colour.b as i32);

    let streaks = rng.int(4, 8);
    for i in 0..streaks {
        let angle = 2.0 * PI / streaks as f64 * i as f64;
        let length = max_length * (0.7 + rng.int(0, 30) as f64 / 100.0);

        let end_x = centre_x + angle.cos() * length;
        let end_y = centre_y + angle.sin() * length;

        for step in 0..FLARE_STEPS {
            let t = step as f64 / FLARE_STEPS as f64;
            let x = centre_x + (end_x - centre_x) * t;
            let y = centre_y + (end_y - centre_y) * t;

            let opacity = 1.0 - t;
            let transparency = (127.0 - opacity * 127.0) as i32;
            let point = (2.0 * opacity) as i32;

            let dot = Colour::translucent(r, g, b, transparency);
            canvas.filled_ellipse(x as i32, y as i32, point, point, dot);
        }
    }
}

/// Small faint glints on the body, between half the radius and the rim.
fn glints(canvas: &mut PixelCanvas, radius: i32, colour: Colour, rng: &mut StarRng) {
    let (centre_x, centre_y) = centre(canvas);
    let (r, g, b) = (colour.r as i32, colour.g as i32, colour.b as i32);

    for _ in 0..GLINTS {
        let distance = rng.int(radius / 2, radius) as f64;
        let angle = rng.angle();

        let x = centre_x + angle.cos() * distance;
        let y = centre_y + angle.sin() * distance;

        let glint = rng.int(2, 5);
        let colour = Colour::translucent(r, g, b, rng.int(70, 100));
        canvas.filled_ellipse(x as i32, y as i32, glint, glint, colour);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(star_type: &str, diameter: i64, seed: u64) -> RenderedStar {
        render_star(&RenderRequest::new(star_type, diameter, seed)).unwrap()
    }

    #[test]
    fn test_make_even() {
        assert_eq!(make_even(150), 150);
        assert_eq!(make_even(151), 152);
        assert_eq!(make_even(0), 0);
    }

    #[test]
    fn test_same_request_same_pixels() {
        let a = render("Regular", 300, 12345);
        let b = render("Regular", 300, 12345);
        assert_eq!(a.canvas, b.canvas);
        assert_eq!(a.canvas.size(), (600, 600));
    }

    #[test]
    fn test_different_seed_different_pixels() {
        let a = render("Regular", 300, 12345);
        let b = render("Regular", 300, 54321);
        assert_eq!(a.canvas.size(), b.canvas.size());
        assert_ne!(a.canvas, b.canvas);
    }

    #[test]
    fn test_make_even_saturates() {
        assert_eq!(make_even(i64::MAX), i64::MAX);
        assert_eq!(make_even(-3), -2);
    }

    #[test]
    fn test_odd_diameter_is_normalised() {
        let star = render("WhiteDwarf", 151, 1);
        assert_eq!(star.diameter, 152);
        assert_eq!(star.canvas.size(), (304, 304));
        assert_eq!(glow_sizes(star.diameter), [304, 244, 198]);
    }

    #[test]
    fn test_outer_glow_reaches_canvas_edge() {
        let star = render("Regular", 151, 1);
        // The 304px outer halo fills the canvas; row 20 lies outside the middle one
        let edge = star.canvas.get(152, 20).unwrap();
        assert!(edge.a > 0 && edge.a < 0x22, "{edge}");
    }

    #[test]
    fn test_huge_diameters_are_rejected() {
        for diameter in [i64::MAX, i64::MAX - 1, MAX_DIAMETER + 1, i64::MIN] {
            let err = render_star(&RenderRequest::new("Regular", diameter, 1)).unwrap_err();
            assert!(matches!(err, StarError::InvalidDimension { .. }), "{diameter}");
        }
    }

    fn covered_distances(canvas: &PixelCanvas) -> Vec<f64> {
        let (cx, cy) = centre(canvas);
        canvas
            .iter_pixels()
            .filter(|(_, _, c)| !c.is_transparent())
            .map(|(x, y, _)| ((x as f64 - cx).powi(2) + (y as f64 - cy).powi(2)).sqrt())
            .collect()
    }

    #[test]
    fn test_streaks_stay_within_flare_length() {
        for seed in 0..20 {
            let mut canvas = PixelCanvas::new(200, 200).unwrap();
            streaks(&mut canvas, 50.0, Colour::WHITE, &mut StarRng::seeded(seed));

            let distances = covered_distances(&canvas);
            assert!(!distances.is_empty());
            // 0.7r plus the 2px dot at the base
            assert!(distances.iter().all(|&d| d <= 50.0 * 0.7 + 2.0), "seed {seed}");
        }
    }

    #[test]
    fn test_glints_land_on_the_body() {
        for seed in 0..20 {
            let mut canvas = PixelCanvas::new(200, 200).unwrap();
            glints(&mut canvas, 50, Colour::WHITE, &mut StarRng::seeded(seed));

            let distances = covered_distances(&canvas);
            assert!(!distances.is_empty());
            // Centres lie in 25..=50; a glint is at most 5px across
            for d in distances {
                assert!((21.0..=54.0).contains(&d), "seed {seed}: {d}");
            }
        }
    }

    #[test]
    fn test_corners_stay_transparent() {
        for star_type in StarType::names() {
            let star = render(star_type, 120, 3);
            assert_eq!(star.canvas.get(0, 0), Some(Colour::TRANSPARENT), "{star_type}");
            assert_eq!(star.canvas.get(239, 239), Some(Colour::TRANSPARENT), "{star_type}");
        }
    }

    #[test]
    fn test_outer_glow_uses_corona() {
        let star = render("Regular", 300, 12345);
        // Below the body, inside only the outer halo
        let glow = star.canvas.get(300, 570).unwrap();
        assert_eq!((glow.r, glow.g, glow.b), (255, 255, 0xdd));
        assert!(glow.a > 0 && glow.a < 0x22, "{glow}");
    }

    #[test]
    fn test_label_is_drawn_above_body() {
        let star = render("Regular", 300, 12345);
        let (x, y) = label_position(600, 600, 300, "Regular");
        let white = (x..x + 7 * 6)
            .flat_map(|px| (y..y + 7).map(move |py| (px, py)))
            .filter(|&(px, py)| star.canvas.get(px, py) == Some(Colour::WHITE))
            .count();
        assert!(white > 10);
        assert_eq!(star.name, "Regular");
    }

    #[test]
    fn test_stages_are_reported_in_order() {
        let mut stages = Vec::new();
        render_star_observed(&RenderRequest::new("RedGiant", 80, 9), |s| stages.push(s)).unwrap();
        assert_eq!(
            stages,
            vec![
                RenderStage::Sized,
                RenderStage::GlowsBuilt,
                RenderStage::SurfaceGenerated,
                RenderStage::Composited,
                RenderStage::FlareAdded,
                RenderStage::Labeled,
                RenderStage::Done,
            ]
        );
    }

    #[test]
    fn test_missing_parameters() {
        let no_type = RenderRequest {
            diameter: Some(100),
            ..Default::default()
        };
        assert!(matches!(
            render_star(&no_type),
            Err(StarError::MissingRequiredParameter { .. })
        ));

        let no_diameter = RenderRequest {
            star_type: Some("Regular".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            render_star(&no_diameter),
            Err(StarError::MissingRequiredParameter { .. })
        ));
    }

    #[test]
    fn test_missing_parameter_stops_before_sizing() {
        let mut stages = Vec::new();
        let result = render_star_observed(&RenderRequest::default(), |s| stages.push(s));
        assert!(result.is_err());
        assert!(stages.is_empty());
    }

    #[test]
    fn test_unknown_type_and_bad_diameter() {
        let err = render_star(&RenderRequest::new("Pulsar", 100, 1)).unwrap_err();
        assert!(matches!(err, StarError::UnknownSurfaceType { .. }));

        let err = render_star(&RenderRequest::new("Regular", 0, 1)).unwrap_err();
        assert!(matches!(err, StarError::InvalidDimension { .. }));

        let err = render_star(&RenderRequest::new("Regular", -3, 1)).unwrap_err();
        assert!(matches!(err, StarError::InvalidDimension { .. }));
    }
}
