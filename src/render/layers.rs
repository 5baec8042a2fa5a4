//! Layer orchestrator - stacks canvases and composites them in order.
//!
//! Layers are painted onto a base canvas in the order they were added,
//! later layers on top, using source-over blending.

use crate::canvas::PixelCanvas;
use crate::error::{Result, StarError};
use crate::types::Colour;

/// A canvas placed at an offset on the base.
#[derive(Debug, Clone)]
struct Layer {
    canvas: PixelCanvas,
    offset_x: i32,
    offset_y: i32,
}

/// Stacks layers on a base canvas and composites them.
#[derive(Debug, Default)]
pub struct LayerOrchestrator {
    base: Option<PixelCanvas>,
    layers: Vec<Layer>,
}

impl LayerOrchestrator {
    /// Create an orchestrator with no base layer yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an orchestrator over a fully transparent base.
    pub fn transparent(width: i64, height: i64) -> Result<Self> {
        let mut orchestrator = Self::new();
        orchestrator.init_base_layer(width, height, Colour::BLACK, 0)?;
        Ok(orchestrator)
    }

    /// Set up the base canvas, filled with `background` at `base_alpha`.
    ///
    /// Replaces any previous base; already stacked layers are kept.
    pub fn init_base_layer(
        &mut self,
        width: i64,
        height: i64,
        background: Colour,
        base_alpha: u8,
    ) -> Result<()> {
        self.base = Some(PixelCanvas::filled(
            width,
            height,
            background.with_alpha(base_alpha),
        )?);
        Ok(())
    }

    /// Stack a canvas with its top-left corner at (offset_x, offset_y).
    pub fn add_layer(&mut self, canvas: PixelCanvas, offset_x: i32, offset_y: i32) {
        self.layers.push(Layer {
            canvas,
            offset_x,
            offset_y,
        });
    }

    /// Stack a canvas centred on the base.
    pub fn add_centred(&mut self, canvas: PixelCanvas) -> Result<()> {
        let (base_w, base_h) = self.base_size()?;
        let offset_x = (base_w as i32 - canvas.width() as i32) / 2;
        let offset_y = (base_h as i32 - canvas.height() as i32) / 2;
        self.add_layer(canvas, offset_x, offset_y);
        Ok(())
    }

    fn base_size(&self) -> Result<(u32, u32)> {
        self.base
            .as_ref()
            .map(PixelCanvas::size)
            .ok_or_else(missing_base)
    }

    /// Composite every layer onto a copy of the base, in stacking order.
    pub fn render(&self) -> Result<PixelCanvas> {
        let mut output = self.base.clone().ok_or_else(missing_base)?;
        for layer in &self.layers {
            composite(&mut output, &layer.canvas, layer.offset_x, layer.offset_y);
        }
        Ok(output)
    }
}

fn missing_base() -> StarError {
    StarError::MissingRequiredParameter {
        message: "no base layer to composite onto".to_string(),
        help: Some("Call init_base_layer before render".to_string()),
    }
}

/// Blend `source` onto `dest` at an offset, clipping anything off the edge.
pub fn composite(dest: &mut PixelCanvas, source: &PixelCanvas, offset_x: i32, offset_y: i32) {
    let (offset_x, offset_y) = (offset_x as i64, offset_y as i64);
    let x_start = (-offset_x).max(0);
    let y_start = (-offset_y).max(0);
    let x_end = (dest.width() as i64 - offset_x).min(source.width() as i64);
    let y_end = (dest.height() as i64 - offset_y).min(source.height() as i64);

    // Every (sx, sy) in range maps onto both canvases
    for sy in y_start..y_end {
        for sx in x_start..x_end {
            if let Some(pixel) = source.get(sx as i32, sy as i32) {
                if !pixel.is_transparent() {
                    dest.blend_pixel((offset_x + sx) as i32, (offset_y + sy) as i32, pixel);
                }
            }
        }
    }
}
