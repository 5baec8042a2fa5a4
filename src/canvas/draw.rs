//! Shape primitives on [`PixelCanvas`].
//!
//! All primitives blend source-over and touch each covered pixel exactly
//! once, so a translucent shape never darkens its own overlaps. Geometry is
//! worked in `i64` and clipped to the canvas before any loop runs, so
//! coordinates anywhere in the `i32` range are safe.

use crate::types::Colour;

use super::PixelCanvas;

impl PixelCanvas {
    /// Fill a horizontal run `x1..=x2` on row `y`.
    fn span(&mut self, x1: i64, x2: i64, y: i64, colour: Colour) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let lo = x1.max(0);
        let hi = x2.min(self.width() as i64 - 1);
        for x in lo..=hi {
            self.blend_wide(x, y, colour);
        }
    }

    /// Rows of `top..=bottom` that fall on the canvas.
    fn visible_rows(&self, top: i64, bottom: i64) -> std::ops::RangeInclusive<i64> {
        top.max(0)..=bottom.min(self.height() as i64 - 1)
    }

    /// Fill the axis-aligned rectangle spanning both corners (inclusive).
    pub fn filled_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) {
        self.filled_rect_wide(x1 as i64, y1 as i64, x2 as i64, y2 as i64, colour);
    }

    fn filled_rect_wide(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, colour: Colour) {
        let (left, right) = (x1.min(x2), x1.max(x2));
        for y in self.visible_rows(y1.min(y2), y1.max(y2)) {
            self.span(left, right, y, colour);
        }
    }

    /// Fill an ellipse of `w x h` pixels centred on (cx, cy).
    ///
    /// A diameter of zero or less draws nothing; a 1x1 ellipse is one pixel.
    pub fn filled_ellipse(&mut self, cx: i32, cy: i32, w: i32, h: i32, colour: Colour) {
        if w <= 0 || h <= 0 {
            return;
        }

        let (cx, cy) = (cx as i64, cy as i64);
        let a = w as i64 / 2;
        let b = h as i64 / 2;

        for y in self.visible_rows(cy - b, cy + b) {
            let dy = y - cy;
            let half = if b == 0 {
                a
            } else {
                let ratio = (dy * dy) as f64 / (b * b) as f64;
                (a as f64 * (1.0 - ratio).max(0.0).sqrt()).round() as i64
            };
            self.span(cx - half, cx + half, y, colour);
        }
    }

    /// Draw a one-pixel ellipse outline of `w x h` centred on (cx, cy).
    pub fn ellipse_outline(&mut self, cx: i32, cy: i32, w: i32, h: i32, colour: Colour) {
        if w <= 0 || h <= 0 {
            return;
        }

        let (cx, cy) = (cx as i64, cy as i64);
        let a = w as i64 / 2;
        let b = h as i64 / 2;
        if a == 0 || b == 0 {
            self.line_wide(cx - a, cy - b, cx + a, cy + b, colour);
            return;
        }

        // Only sample offsets whose column or row can land on the canvas.
        let columns = (-a).max(-cx)..=a.min(self.width() as i64 - 1 - cx);
        let rows = (-b).max(-cy)..=b.min(self.height() as i64 - 1 - cy);
        let mut points = Vec::new();

        // Sample along both axes so steep and shallow arcs stay connected.
        for dx in columns {
            let ratio = (dx * dx) as f64 / (a * a) as f64;
            let dy = (b as f64 * (1.0 - ratio).max(0.0).sqrt()).round() as i64;
            points.push((dx, dy));
            points.push((dx, -dy));
        }
        for dy in rows {
            let ratio = (dy * dy) as f64 / (b * b) as f64;
            let dx = (a as f64 * (1.0 - ratio).max(0.0).sqrt()).round() as i64;
            points.push((dx, dy));
            points.push((-dx, dy));
        }

        points.sort_unstable();
        points.dedup();

        for (dx, dy) in points {
            self.blend_wide(cx + dx, cy + dy, colour);
        }
    }

    /// Draw a one-pixel line, endpoints inclusive (Bresenham).
    ///
    /// The line is clipped to the canvas first (Cohen-Sutherland).
    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, colour: Colour) {
        self.line_wide(x1 as i64, y1 as i64, x2 as i64, y2 as i64, colour);
    }

    fn line_wide(&mut self, x1: i64, y1: i64, x2: i64, y2: i64, colour: Colour) {
        let Some((x1, y1, x2, y2)) = self.clip_line(x1, y1, x2, y2) else {
            return;
        };

        let dx = (x2 - x1).abs();
        let dy = -(y2 - y1).abs();
        let sx = if x1 < x2 { 1 } else { -1 };
        let sy = if y1 < y2 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x1, y1);

        loop {
            self.blend_wide(x, y, colour);
            if x == x2 && y == y2 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Clip a segment to the canvas. `None` when nothing of it is visible.
    fn clip_line(
        &self,
        mut x0: i64,
        mut y0: i64,
        mut x1: i64,
        mut y1: i64,
    ) -> Option<(i64, i64, i64, i64)> {
        const LEFT: u8 = 1;
        const RIGHT: u8 = 2;
        const BOTTOM: u8 = 4;
        const TOP: u8 = 8;

        let w = self.width() as i64;
        let h = self.height() as i64;

        let outcode = |x: i64, y: i64| -> u8 {
            let mut code = 0;
            if x < 0 {
                code |= LEFT;
            } else if x >= w {
                code |= RIGHT;
            }
            if y < 0 {
                code |= TOP;
            } else if y >= h {
                code |= BOTTOM;
            }
            code
        };
        // Products of two coordinate spans can exceed i64
        let along = |from: i64, span: i64, part: i64, whole: i64| -> i64 {
            from + (span as i128 * part as i128 / whole as i128) as i64
        };

        let mut code0 = outcode(x0, y0);
        let mut code1 = outcode(x1, y1);

        // Each pass moves one endpoint onto a canvas edge; four suffice.
        for _ in 0..8 {
            if code0 | code1 == 0 {
                return Some((x0, y0, x1, y1));
            }
            if code0 & code1 != 0 {
                return None;
            }

            let code_out = if code0 != 0 { code0 } else { code1 };
            let dx = x1 - x0;
            let dy = y1 - y0;

            let (x, y) = if code_out & BOTTOM != 0 {
                (along(x0, dx, h - 1 - y0, dy), h - 1)
            } else if code_out & TOP != 0 {
                (along(x0, dx, -y0, dy), 0)
            } else if code_out & RIGHT != 0 {
                (w - 1, along(y0, dy, w - 1 - x0, dx))
            } else {
                (0, along(y0, dy, -x0, dx))
            };

            if code_out == code0 {
                (x0, y0) = (x, y);
                code0 = outcode(x0, y0);
            } else {
                (x1, y1) = (x, y);
                code1 = outcode(x1, y1);
            }
        }

        None
    }

    /// Draw a line `thickness` pixels wide.
    ///
    /// Axis-aligned lines become a rectangle centred on the line; any other
    /// slope is filled as the quadrilateral offset perpendicular to it.
    pub fn thick_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        colour: Colour,
        thickness: i32,
    ) {
        if thickness <= 1 {
            self.line(x1, y1, x2, y2, colour);
            return;
        }

        if x1 == x2 || y1 == y2 {
            let (x1, y1, x2, y2) = (x1 as i64, y1 as i64, x2 as i64, y2 as i64);
            let before = thickness as i64 / 2;
            let after = thickness as i64 - before - 1;
            if y1 == y2 {
                self.filled_rect_wide(x1, y1 - before, x2, y1 + after, colour);
            } else {
                self.filled_rect_wide(x1 - before, y1, x1 + after, y2, colour);
            }
            return;
        }

        let (fx1, fy1, fx2, fy2) = (x1 as f64, y1 as f64, x2 as f64, y2 as f64);
        let t = thickness as f64 / 2.0 - 0.5;
        let k = (fy2 - fy1) / (fx2 - fx1);
        let a = t / (1.0 + k * k).sqrt();

        let corner = |x: f64, y: f64| (x.round() as i64, y.round() as i64);
        let points = [
            corner(fx1 - (1.0 + k) * a, fy1 + (1.0 - k) * a),
            corner(fx1 - (1.0 - k) * a, fy1 - (1.0 + k) * a),
            corner(fx2 + (1.0 + k) * a, fy2 - (1.0 - k) * a),
            corner(fx2 + (1.0 - k) * a, fy2 + (1.0 + k) * a),
        ];

        self.polygon_wide(&points, colour);
    }

    /// Fill a polygon given its vertices in order (scanline, even-odd).
    pub fn filled_polygon(&mut self, points: &[(i32, i32)], colour: Colour) {
        let points: Vec<(i64, i64)> = points.iter().map(|&(x, y)| (x as i64, y as i64)).collect();
        self.polygon_wide(&points, colour);
    }

    fn polygon_wide(&mut self, points: &[(i64, i64)], colour: Colour) {
        match points {
            [] => return,
            [(x, y)] => {
                self.blend_wide(*x, *y, colour);
                return;
            }
            [(x1, y1), (x2, y2)] => {
                self.line_wide(*x1, *y1, *x2, *y2, colour);
                return;
            }
            _ => {}
        }

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

        if min_y == max_y {
            let min_x = points.iter().map(|p| p.0).min().unwrap_or(0);
            let max_x = points.iter().map(|p| p.0).max().unwrap_or(0);
            self.span(min_x, max_x, min_y, colour);
            return;
        }

        let mut crossings: Vec<i64> = Vec::with_capacity(points.len());

        for y in self.visible_rows(min_y, max_y) {
            crossings.clear();

            for i in 0..points.len() {
                let (mut xa, mut ya) = points[i];
                let (mut xb, mut yb) = points[(i + 1) % points.len()];
                if ya == yb {
                    continue;
                }
                if ya > yb {
                    std::mem::swap(&mut xa, &mut xb);
                    std::mem::swap(&mut ya, &mut yb);
                }
                let inside = (y >= ya && y < yb) || (y == max_y && y == yb);
                if inside {
                    let x = (y - ya) as f64 * (xb - xa) as f64 / (yb - ya) as f64 + xa as f64;
                    crossings.push(x.round() as i64);
                }
            }

            crossings.sort_unstable();

            let mut last_filled = i64::MIN;
            for pair in crossings.chunks_exact(2) {
                let start = pair[0].max(last_filled.saturating_add(1));
                if start <= pair[1] {
                    self.span(start, pair[1], y, colour);
                    last_filled = pair[1];
                }
            }
        }
    }
}
