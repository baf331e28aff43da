//! Bordered viewport panels
//!
//! A [`Viewport`] decouples shape drawing from absolute screen coordinates:
//! it owns an inner canvas sized `outer − 2×border` per dimension, and
//! shape code draws in viewport-local coordinates (origin conventionally at
//! [`Viewport::center`]). Compositing blits the inner surface at
//! `(x + border, y + border)`, renders the optional centered label near the
//! top, then strokes the border rectangle on top.
//!
//! Several viewports composed side by side show simultaneous projections of
//! the same shape along different axis pairs.

use crate::{Canvas, TextPainter};
use wire4d_core::Color;

/// Vertical gap between the border and a panel label, in pixels.
const LABEL_MARGIN: i32 = 4;

/// A bordered sub-region of the screen with its own drawing surface.
pub struct Viewport {
    inner: Canvas,
    outer_width: u32,
    outer_height: u32,
    x: i32,
    y: i32,
    border: u32,
    label: Option<String>,
}

impl Viewport {
    pub fn new(
        outer_width: u32,
        outer_height: u32,
        x: i32,
        y: i32,
        border: u32,
        label: Option<String>,
    ) -> Self {
        let inner_width = outer_width.saturating_sub(border * 2);
        let inner_height = outer_height.saturating_sub(border * 2);
        Self {
            inner: Canvas::new(inner_width, inner_height),
            outer_width,
            outer_height,
            x,
            y,
            border,
            label,
        }
    }

    /// The inner drawing surface.
    #[inline]
    pub fn canvas(&mut self) -> &mut Canvas {
        &mut self.inner
    }

    #[inline]
    pub fn inner_width(&self) -> u32 {
        self.inner.width()
    }

    #[inline]
    pub fn inner_height(&self) -> u32 {
        self.inner.height()
    }

    /// Midpoint of the inner surface, the conventional projection origin.
    pub fn center(&self) -> [f32; 2] {
        [
            self.inner.width() as f32 / 2.0,
            self.inner.height() as f32 / 2.0,
        ]
    }

    /// Composite this viewport onto `target`: inner surface, label, border.
    pub fn composite(&self, target: &mut Canvas, text: Option<(&TextPainter, f32)>) {
        target.blit(&self.inner, self.x + self.border as i32, self.y + self.border as i32);

        if let (Some(label), Some((painter, px))) = (&self.label, text) {
            let width = painter.measure(label, px);
            let label_x = self.x + ((self.outer_width as f32 - width) / 2.0) as i32;
            let label_y = self.y + self.border as i32 + LABEL_MARGIN;
            painter.draw(target, label_x, label_y, px, Color::WHITE, label);
        }

        target.stroke_rect(
            self.x,
            self.y,
            self.outer_width,
            self.outer_height,
            self.border,
            Color::WHITE,
        );
    }
}
