//! Body name labels with a drop shadow.

use crate::canvas::PixelCanvas;
use crate::types::Colour;

use super::font::draw_text;

/// Approximate half-width of one label character, used for centring.
pub const HALF_CHAR_WIDTH: i32 = 3;

/// Gap between the top of the body and the label.
pub const LABEL_GAP: i32 = 15;

/// Label colours and shadow offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub colour: Colour,
    pub shadow: Colour,
    pub shadow_offset: i32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            colour: Colour::WHITE,
            // 80% opaque black
            shadow: Colour::BLACK.with_alpha(204),
            shadow_offset: 1,
        }
    }
}

/// Top-left position of a label centred above a body.
///
/// The body of diameter `diameter` sits centred on a `width x height` canvas.
pub fn label_position(width: i32, height: i32, diameter: i32, name: &str) -> (i32, i32) {
    let chars = name.chars().count() as i32;
    let x = width / 2 - chars * HALF_CHAR_WIDTH;
    let y = (height / 2 - diameter / 2) - LABEL_GAP;
    (x, y)
}

/// Draw `name` at (x, y): shadow first, then the name on top.
pub fn draw_label(canvas: &mut PixelCanvas, name: &str, x: i32, y: i32, style: &LabelStyle) {
    let offset = style.shadow_offset;
    draw_text(
        canvas,
        name,
        x.saturating_add(offset),
        y.saturating_add(offset),
        style.shadow,
    );
    draw_text(canvas, name, x, y, style.colour);
}
