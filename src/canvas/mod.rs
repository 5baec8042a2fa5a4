//! Pixel canvas - an owned RGBA raster with clipped drawing primitives.
//!
//! Every write is clipped to the canvas: coordinates outside
//! `[0, width) x [0, height)` are silently ignored, never an error.

mod draw;

use crate::error::{Result, StarError};
use crate::types::Colour;

/// A row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    /// Pixels, `pixels[y * width + x]`.
    pixels: Vec<Colour>,
}

impl PixelCanvas {
    /// Create a fully transparent canvas.
    pub fn new(width: i64, height: i64) -> Result<Self> {
        Self::filled(width, height, Colour::TRANSPARENT)
    }

    /// Create a canvas filled with a background colour.
    pub fn filled(width: i64, height: i64, background: Colour) -> Result<Self> {
        if width <= 0 || height <= 0 || width > u32::MAX as i64 || height > u32::MAX as i64 {
            return Err(StarError::invalid_dimension(width, height));
        }

        let (width, height) = (width as u32, height as u32);
        let too_large = || StarError::InvalidDimension {
            message: format!("{}x{} canvas does not fit in memory", width, height),
            help: Some("Use a smaller diameter or scale".to_string()),
        };

        let count = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(too_large)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(count).map_err(|_| too_large())?;
        pixels.resize(count, background);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.index_wide(x as i64, y as i64)
    }

    /// Index for coordinates that may lie far outside the `i32` range.
    fn index_wide(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// [`blend_pixel`](Self::blend_pixel) on wide coordinates.
    fn blend_wide(&mut self, x: i64, y: i64, colour: Colour) {
        if let Some(i) = self.index_wide(x, y) {
            self.pixels[i] = colour.over(self.pixels[i]);
        }
    }

    /// Get a pixel. Returns None if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite a pixel, ignoring blending.
    pub fn put_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = colour;
        }
    }

    /// Composite a colour onto a pixel (source-over).
    pub fn blend_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        self.blend_wide(x as i64, y as i64, colour);
    }

    /// Get the flat pixel buffer (row-major).
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Iterate pixels with their positions.
    pub fn iter_pixels(&self) -> impl Iterator<Item = (u32, u32, Colour)> + '_ {
        let width = self.width;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &c)| (i as u32 % width, i as u32 / width, c))
    }

    /// Convert to a flat RGBA byte buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }

    /// Copy a `width x height` window starting at (x, y).
    ///
    /// Parts of the window outside this canvas come back transparent.
    pub fn crop(&self, x: i32, y: i32, width: i64, height: i64) -> Result<PixelCanvas> {
        let mut out = PixelCanvas::new(width, height)?;
        for oy in 0..out.height as i64 {
            for ox in 0..out.width as i64 {
                if let Some(i) = self.index_wide(x as i64 + ox, y as i64 + oy) {
                    out.put_pixel(ox as i32, oy as i32, self.pixels[i]);
                }
            }
        }
        Ok(out)
    }
}
