//! Fluent entry point for rendering a single star.
//!
//! ```
//! use starforge::Star;
//!
//! let star = Star::new().diameter(64).red_giant().seed(9).render().unwrap();
//! assert_eq!(star.canvas.size(), (128, 128));
//! ```

use crate::error::Result;
use crate::render::{render_star, RenderRequest, RenderedStar};
use crate::surface::StarType;

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 12345;

/// Builder for a star render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Star {
    star_type: Option<StarType>,
    diameter: Option<i64>,
    seed: u64,
}

impl Default for Star {
    fn default() -> Self {
        Self {
            star_type: None,
            diameter: None,
            seed: DEFAULT_SEED,
        }
    }
}

impl Star {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body diameter in pixels.
    pub fn diameter(mut self, pixels: i64) -> Self {
        self.diameter = Some(pixels);
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn of_type(mut self, star_type: StarType) -> Self {
        self.star_type = Some(star_type);
        self
    }

    pub fn regular(self) -> Self {
        self.of_type(StarType::Regular)
    }

    pub fn red_giant(self) -> Self {
        self.of_type(StarType::RedGiant)
    }

    pub fn white_dwarf(self) -> Self {
        self.of_type(StarType::WhiteDwarf)
    }

    /// The request this builder describes.
    pub fn request(&self) -> RenderRequest {
        RenderRequest {
            star_type: self.star_type.map(|t| t.name().to_string()),
            diameter: self.diameter,
            seed: self.seed,
        }
    }

    /// Render the star. Fails if the diameter or type was never set.
    pub fn render(&self) -> Result<RenderedStar> {
        render_star(&self.request())
    }
}
