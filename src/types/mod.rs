//! Core domain types for starforge.
//!
//! - `Colour` - RGBA colour values with source-over blending
//! - `ColourPalette` - Named colours for a star type, always with `core`

mod colour;
mod palette;

pub use colour::{channel, Colour, MAX_TRANSPARENCY};
pub use palette::{ColourPalette, CORE};
