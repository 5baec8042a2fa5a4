//! Rendering module for starforge.
//!
//! This module composites glows, generated surfaces, flares and labels into
//! finished star images, and writes them out as PNG plus JSON metadata.

mod font;
pub mod gradient;
pub mod label;
pub mod layers;
mod meta;
mod png;
mod star;

pub use gradient::{radial_alpha_gradient, GradientShape};
pub use label::{draw_label, label_position, LabelStyle};
pub use layers::{composite, LayerOrchestrator};
pub use meta::{write_metadata, PaletteEntry, StarMeta};
pub use png::{crop_to_body, scaled_size, to_image, write_png};
pub use star::{
    glow_sizes, make_even, render_star, render_star_observed, RenderRequest, RenderStage,
    RenderedStar, MAX_DIAMETER,
};
