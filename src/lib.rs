//! starforge - Procedural star image renderer
//!
//! Renders raster images of stars from a type name, a pixel diameter and a
//! seed. Each star type paints its own textured surface; the render
//! pipeline wraps it in glow halos, a lens flare and a name label.
//!
//! ```
//! use starforge::{render_star, RenderRequest};
//!
//! let star = render_star(&RenderRequest::new("WhiteDwarf", 40, 7)).unwrap();
//! assert_eq!(star.canvas.size(), (80, 80));
//! ```

pub mod canvas;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod output;
pub mod render;
pub mod rng;
pub mod star;
pub mod surface;
pub mod types;

pub use canvas::PixelCanvas;
pub use error::{Result, StarError};
pub use manifest::{BodySpec, Manifest};
pub use render::{
    crop_to_body, render_star, render_star_observed, write_metadata, write_png,
    LayerOrchestrator, RenderRequest, RenderStage, RenderedStar, StarMeta,
};
pub use rng::StarRng;
pub use star::Star;
pub use surface::{generator_for_type, StarType, SurfaceGenerator};
pub use types::{Colour, ColourPalette};
