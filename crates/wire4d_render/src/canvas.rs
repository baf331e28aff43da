//! CPU pixel surface
//!
//! A [`Canvas`] is a plain RGBA8 buffer. Line segments are clipped to the
//! surface with Liang-Barsky before rasterization, so callers may hand in
//! arbitrary (even far off-screen) endpoints; only the visible span is
//! walked by Bresenham.

use wire4d_core::Color;

/// An RGBA8 drawing surface.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// A canvas cleared to opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        };
        canvas.clear(Color::BLACK);
        canvas
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Fill the whole surface with one color.
    pub fn clear(&mut self, color: Color) {
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, color.a]);
        }
    }

    /// Write one pixel; coordinates outside the surface are ignored.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let at = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        self.pixels[at..at + 4].copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }

    /// Read one pixel; `None` outside the surface.
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        let at = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let p = &self.pixels[at..at + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Blend `color` onto one pixel with the given coverage (0 = keep
    /// destination, 255 = replace). Used by glyph rasterization.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if coverage == 0 {
            return;
        }
        if coverage == 255 {
            self.set_pixel(x, y, color);
            return;
        }
        let Some(dst) = self.get_pixel(x, y) else {
            return;
        };
        let mix = |a: u8, b: u8| -> u8 {
            let cov = coverage as u32;
            (((a as u32) * (255 - cov) + (b as u32) * cov) / 255) as u8
        };
        self.set_pixel(
            x,
            y,
            Color::rgba(
                mix(dst.r, color.r),
                mix(dst.g, color.g),
                mix(dst.b, color.b),
                mix(dst.a, color.a),
            ),
        );
    }

    /// Draw a line segment between two (possibly off-surface) points.
    ///
    /// Non-finite endpoints are dropped.
    pub fn line(&mut self, from: [f32; 2], to: [f32; 2], color: Color) {
        if !from.iter().chain(&to).all(|v| v.is_finite()) {
            return;
        }
        let Some(((x0, y0), (x1, y1))) = self.clip_segment(from, to) else {
            return;
        };
        self.bresenham(x0, y0, x1, y1, color);
    }

    /// Liang-Barsky clip of a segment against the surface rectangle.
    ///
    /// Returns rounded integer endpoints of the visible span.
    fn clip_segment(&self, from: [f32; 2], to: [f32; 2]) -> Option<((i32, i32), (i32, i32))> {
        let (x0, y0) = (from[0], from[1]);
        let dx = to[0] - x0;
        let dy = to[1] - y0;

        let mut t0 = 0.0f32;
        let mut t1 = 1.0f32;
        let max_x = self.width as f32 - 1.0;
        let max_y = self.height as f32 - 1.0;

        // (p, q) per boundary: t is inside while p*t <= q.
        let checks = [
            (-dx, x0),         // left: x >= 0
            (dx, max_x - x0),  // right: x <= max_x
            (-dy, y0),         // top: y >= 0
            (dy, max_y - y0),  // bottom: y <= max_y
        ];
        for (p, q) in checks {
            if p == 0.0 {
                if q < 0.0 {
                    return None; // parallel and fully outside
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t0 = t0.max(t);
            } else {
                t1 = t1.min(t);
            }
            if t0 > t1 {
                return None;
            }
        }

        let at = |t: f32| {
            (
                (x0 + t * dx).round() as i32,
                (y0 + t * dy).round() as i32,
            )
        };
        Some((at(t0), at(t1)))
    }

    fn bresenham(&mut self, mut x0: i32, mut y0: i32, x1: i32, y1: i32, color: Color) {
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.set_pixel(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Outline a rectangle, `thickness` pixels thick, drawn inward from the
    /// given outer bounds.
    pub fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, thickness: u32, color: Color) {
        let w = width as i32;
        let h = height as i32;
        for t in 0..thickness.min(width.div_ceil(2)).min(height.div_ceil(2)) as i32 {
            let (left, top) = (x + t, y + t);
            let (right, bottom) = (x + w - 1 - t, y + h - 1 - t);
            for px in left..=right {
                self.set_pixel(px, top, color);
                self.set_pixel(px, bottom, color);
            }
            for py in top..=bottom {
                self.set_pixel(left, py, color);
                self.set_pixel(right, py, color);
            }
        }
    }

    /// Copy `src` onto this canvas with its top-left corner at `(x, y)`,
    /// clipped to the destination bounds.
    pub fn blit(&mut self, src: &Canvas, x: i32, y: i32) {
        for row in 0..src.height as i32 {
            let dst_y = y + row;
            if dst_y < 0 || dst_y >= self.height as i32 {
                continue;
            }
            // Visible horizontal span of this row.
            let start = (-x).clamp(0, src.width as i32);
            let end = (self.width as i32 - x).clamp(0, src.width as i32);
            if start >= end {
                continue;
            }
            let src_at = ((row as usize) * (src.width as usize) + start as usize) * 4;
            let dst_at = ((dst_y as usize) * (self.width as usize) + (x + start) as usize) * 4;
            let len = ((end - start) as usize) * 4;
            self.pixels[dst_at..dst_at + len]
                .copy_from_slice(&src.pixels[src_at..src_at + len]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_opaque_black() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.as_bytes().len(), 4 * 3 * 4);
        assert_eq!(canvas.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(canvas.get_pixel(3, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_line_endpoints_and_interior() {
        let mut canvas = Canvas::new(16, 16);
        canvas.line([2.0, 2.0], [10.0, 2.0], Color::WHITE);
        assert_eq!(canvas.get_pixel(2, 2), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(6, 2), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(10, 2), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(11, 2), Some(Color::BLACK));
    }

    #[test]
    fn test_diagonal_line_hits_both_endpoints() {
        let mut canvas = Canvas::new(16, 16);
        canvas.line([1.0, 3.0], [9.0, 11.0], Color::RED);
        assert_eq!(canvas.get_pixel(1, 3), Some(Color::RED));
        assert_eq!(canvas.get_pixel(9, 11), Some(Color::RED));
    }

    #[test]
    fn test_offscreen_line_is_safe_and_clipped() {
        let mut canvas = Canvas::new(8, 8);
        // Entirely outside: nothing drawn.
        canvas.line([-100.0, -50.0], [-1.0, -2.0], Color::WHITE);
        assert!(canvas.as_bytes().chunks_exact(4).all(|p| p[0] == 0));

        // Crossing the surface: the visible span is drawn.
        canvas.line([-10.0, 4.0], [20.0, 4.0], Color::WHITE);
        assert_eq!(canvas.get_pixel(0, 4), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(7, 4), Some(Color::WHITE));
    }

    #[test]
    fn test_non_finite_endpoints_dropped() {
        let mut canvas = Canvas::new(8, 8);
        canvas.line([f32::NAN, 0.0], [4.0, 4.0], Color::WHITE);
        canvas.line([0.0, 0.0], [f32::INFINITY, 4.0], Color::WHITE);
        assert!(canvas.as_bytes().chunks_exact(4).all(|p| p[0] == 0));
    }

    #[test]
    fn test_stroke_rect_outline() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rect(1, 1, 8, 8, 1, Color::WHITE);
        assert_eq!(canvas.get_pixel(1, 1), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(8, 8), Some(Color::WHITE));
        assert_eq!(canvas.get_pixel(4, 1), Some(Color::WHITE));
        // Interior untouched.
        assert_eq!(canvas.get_pixel(4, 4), Some(Color::BLACK));
    }

    #[test]
    fn test_blit_offset_and_clip() {
        let mut target = Canvas::new(8, 8);
        let mut src = Canvas::new(4, 4);
        src.clear(Color::RED);

        target.blit(&src, 2, 3);
        assert_eq!(target.get_pixel(2, 3), Some(Color::RED));
        assert_eq!(target.get_pixel(5, 6), Some(Color::RED));
        assert_eq!(target.get_pixel(1, 3), Some(Color::BLACK));
        assert_eq!(target.get_pixel(6, 6), Some(Color::BLACK));

        // Partially off the right edge: no panic, visible part copied.
        target.blit(&src, 6, 0);
        assert_eq!(target.get_pixel(7, 0), Some(Color::RED));
    }

    #[test]
    fn test_blend_pixel_mixes() {
        let mut canvas = Canvas::new(2, 2);
        canvas.blend_pixel(0, 0, Color::WHITE, 128);
        let mixed = canvas.get_pixel(0, 0).unwrap();
        assert!(mixed.r > 100 && mixed.r < 155, "got {}", mixed.r);
        canvas.blend_pixel(1, 1, Color::WHITE, 255);
        assert_eq!(canvas.get_pixel(1, 1), Some(Color::WHITE));
    }
}
