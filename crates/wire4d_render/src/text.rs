//! Status-bar and label text
//!
//! Single-line text rasterized with `fontdue` straight onto a [`Canvas`].
//! The visualizer draws two strings a frame at most, so glyphs are
//! rasterized on the fly; no atlas or cache.

use std::fmt;
use std::path::PathBuf;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::Canvas;
use wire4d_core::Color;

/// Error returned by [`TextPainter::load_first`].
#[derive(Debug, Clone)]
pub struct FontError(pub String);

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font error: {}", self.0)
    }
}

impl std::error::Error for FontError {}

/// Rasterizes single-line text with one loaded font.
#[derive(Debug)]
pub struct TextPainter {
    font: fontdue::Font,
}

impl TextPainter {
    /// Parse a TrueType/OpenType font from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontError(e.to_string()))?;
        Ok(Self { font })
    }

    /// Load the first font in `candidates` that exists and parses.
    ///
    /// The candidate list comes from configuration; which system font is
    /// present varies by platform, so every failure is remembered and
    /// reported together when nothing loads.
    pub fn load_first(candidates: &[PathBuf]) -> Result<Self, FontError> {
        let mut failures = Vec::new();
        for path in candidates {
            match std::fs::read(path) {
                Ok(bytes) => match Self::from_bytes(&bytes) {
                    Ok(painter) => {
                        log::info!("loaded font {}", path.display());
                        return Ok(painter);
                    }
                    Err(e) => failures.push(format!("{}: {e}", path.display())),
                },
                Err(e) => failures.push(format!("{}: {e}", path.display())),
            }
        }
        Err(FontError(format!(
            "no usable font among {} candidates: [{}]",
            candidates.len(),
            failures.join("; ")
        )))
    }

    /// Width in pixels of `text` laid out at `px` size.
    pub fn measure(&self, text: &str, px: f32) -> f32 {
        let layout = self.layout(text, px);
        layout
            .glyphs()
            .iter()
            .map(|g| g.x + g.width as f32)
            .fold(0.0, f32::max)
    }

    /// Draw `text` with its top-left corner at `(x, y)`.
    pub fn draw(&self, canvas: &mut Canvas, x: i32, y: i32, px: f32, color: Color, text: &str) {
        let layout = self.layout(text, px);
        for glyph in layout.glyphs() {
            if !glyph.char_data.rasterize() || glyph.width == 0 || glyph.height == 0 {
                continue;
            }
            let (_, coverage) = self.font.rasterize_config(glyph.key);
            for row in 0..glyph.height {
                for col in 0..glyph.width {
                    canvas.blend_pixel(
                        x + glyph.x as i32 + col as i32,
                        y + glyph.y as i32 + row as i32,
                        color,
                        coverage[row * glyph.width + col],
                    );
                }
            }
        }
    }

    fn layout(&self, text: &str, px: f32) -> Layout {
        let mut layout = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings {
            x: 0.0,
            y: 0.0,
            ..LayoutSettings::default()
        });
        layout.append(&[&self.font], &TextStyle::new(text, px, 0));
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_first_with_no_candidates_fails() {
        let err = TextPainter::load_first(&[]).unwrap_err();
        assert!(err.to_string().contains("0 candidates"));
    }

    #[test]
    fn test_load_first_reports_missing_paths() {
        let missing = PathBuf::from("/definitely/not/a/font.ttf");
        let err = TextPainter::load_first(&[missing]).unwrap_err();
        assert!(err.to_string().contains("not/a/font.ttf"));
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(TextPainter::from_bytes(&[0u8; 64]).is_err());
    }
}
