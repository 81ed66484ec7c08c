//! Text measurement and centering

use crate::fonts::LoadedFont;
use image::{Rgb, RgbImage};

/// Ways to measure text, tried in `MEASUREMENT_ORDER`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    /// Tight box around the glyph pixels
    GlyphBounds,
    /// Advance width and tallest glyph; no ink offset information
    AdvanceSize,
}

pub const MEASUREMENT_ORDER: [Measurement; 2] =
    [Measurement::GlyphBounds, Measurement::AdvanceSize];

/// Measured size of a string plus where its ink starts relative to the draw origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlock {
    pub width: f32,
    pub height: f32,
    pub min_x: f32,
    pub min_y: f32,
    pub method: Measurement,
}

impl Measurement {
    fn measure(self, font: &LoadedFont, text: &str) -> Option<TextBlock> {
        match self {
            Measurement::GlyphBounds => font.ink_bounds(text).map(|b| TextBlock {
                width: b.max_x - b.min_x,
                height: b.max_y - b.min_y,
                min_x: b.min_x,
                min_y: b.min_y,
                method: self,
            }),
            Measurement::AdvanceSize => {
                let (width, height) = font.advance_size(text);
                Some(TextBlock {
                    width: width as f32,
                    height: height as f32,
                    min_x: 0.0,
                    min_y: 0.0,
                    method: self,
                })
            }
        }
    }
}

/// First measurement that produces a result
pub fn measure_text(font: &LoadedFont, text: &str) -> TextBlock {
    MEASUREMENT_ORDER
        .iter()
        .find_map(|m| m.measure(font, text))
        .unwrap_or(TextBlock {
            width: 0.0,
            height: 0.0,
            min_x: 0.0,
            min_y: 0.0,
            method: Measurement::AdvanceSize,
        })
}

/// Top-left of a centered block: (canvas - text) / 2 on each axis, unclamped
pub fn centered_origin(canvas_width: u32, canvas_height: u32, block: &TextBlock) -> (f32, f32) {
    (
        (canvas_width as f32 - block.width) / 2.0,
        (canvas_height as f32 - block.height) / 2.0,
    )
}

/// Measure, center and draw `text`. Returns the measurement used.
pub fn draw_centered(
    canvas: &mut RgbImage,
    font: &LoadedFont,
    color: Rgb<u8>,
    text: &str,
) -> TextBlock {
    let block = measure_text(font, text);
    let (x, y) = centered_origin(canvas.width(), canvas.height(), &block);
    // Shift so the ink box, not the layout origin, lands on (x, y)
    let draw_x = (x - block.min_x).round() as i32;
    let draw_y = (y - block.min_y).round() as i32;
    font.draw(canvas, color, draw_x, draw_y, text);
    block
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{BitmapFont, fixture_font, resolve_font};

    const BG: Rgb<u8> = Rgb([0x6B, 0x46, 0xC1]);
    const FG: Rgb<u8> = Rgb([0xFF, 0xFF, 0xFF]);

    fn ink_box(canvas: &RgbImage) -> Option<(u32, u32, u32, u32)> {
        let mut found: Option<(u32, u32, u32, u32)> = None;
        for (x, y, p) in canvas.enumerate_pixels() {
            if *p != BG {
                found = Some(match found {
                    None => (x, y, x + 1, y + 1),
                    Some((x0, y0, x1, y1)) => {
                        (x0.min(x), y0.min(y), x1.max(x + 1), y1.max(y + 1))
                    }
                });
            }
        }
        found
    }

    #[test]
    fn test_glyph_bounds_preferred() {
        let font = LoadedFont::Bitmap(BitmapFont);
        let block = measure_text(&font, "LoanSnap");
        assert_eq!(block.method, Measurement::GlyphBounds);
        assert_eq!(block.width, 47.0);
        assert_eq!(block.height, 7.0);
    }

    #[test]
    fn test_blank_text_falls_back_to_advance_size() {
        let font = LoadedFont::Bitmap(BitmapFont);
        let block = measure_text(&font, "  ");
        assert_eq!(block.method, Measurement::AdvanceSize);
        assert_eq!(block.width, 11.0);
        assert_eq!(block.height, 7.0);
    }

    #[test]
    fn test_centered_origin_can_be_negative_and_fractional() {
        let block = TextBlock {
            width: 101.0,
            height: 30.0,
            min_x: 0.0,
            min_y: 0.0,
            method: Measurement::AdvanceSize,
        };
        assert_eq!(centered_origin(50, 50, &block), (-25.5, 10.0));
    }

    #[test]
    fn test_text_is_centered() {
        let font = LoadedFont::Bitmap(BitmapFont);
        for (w, h) in [(1024, 1024), (1242, 2436), (101, 37)] {
            let mut canvas = RgbImage::from_pixel(w, h, BG);
            draw_centered(&mut canvas, &font, FG, "LoanSnap");
            let (x0, y0, x1, y1) = ink_box(&canvas).unwrap();
            let mid_x = (x0 + x1) as f32 / 2.0;
            let mid_y = (y0 + y1) as f32 / 2.0;
            assert!((mid_x - w as f32 / 2.0).abs() <= 0.5, "x off center on {w}x{h}");
            assert!((mid_y - h as f32 / 2.0).abs() <= 0.5, "y off center on {w}x{h}");
        }
    }

    #[test]
    fn test_outline_text_is_centered() {
        let path = fixture_font("DejaVuSans.ttf");
        for (w, h, size) in [(1024, 1024, 150.0), (1242, 2436, 180.0)] {
            let font = resolve_font(&[path.clone()], size);
            assert!(!font.is_fallback());

            let mut canvas = RgbImage::from_pixel(w, h, BG);
            let block = draw_centered(&mut canvas, &font, FG, "LoanSnap");
            assert_eq!(block.method, Measurement::GlyphBounds);

            let (x0, y0, x1, y1) = ink_box(&canvas).unwrap();
            let mid_x = (x0 + x1) as f32 / 2.0;
            let mid_y = (y0 + y1) as f32 / 2.0;
            // Edge pixels with near-zero coverage can blend back to the background
            assert!((mid_x - w as f32 / 2.0).abs() <= 1.0, "x {mid_x} on {w}x{h}");
            assert!((mid_y - h as f32 / 2.0).abs() <= 1.0, "y {mid_y} on {w}x{h}");
            // Real glyphs, not the 7px fallback
            assert!(y1 - y0 > 100, "ink height {} on {w}x{h}", y1 - y0);
        }
    }

    #[test]
    fn test_lowercase_only_text_is_centered() {
        // Ink starts two rows below the glyph cell top
        let font = LoadedFont::Bitmap(BitmapFont);
        let mut canvas = RgbImage::from_pixel(64, 64, BG);
        draw_centered(&mut canvas, &font, FG, "ace");
        let (_, y0, _, y1) = ink_box(&canvas).unwrap();
        assert!(((y0 + y1) as f32 / 2.0 - 32.0).abs() <= 0.5);
    }

    #[test]
    fn test_text_wider_than_canvas_is_clipped() {
        let font = LoadedFont::Bitmap(BitmapFont);
        let mut canvas = RgbImage::from_pixel(10, 10, BG);
        draw_centered(&mut canvas, &font, FG, "LoanSnap LoanSnap");
        assert!(ink_box(&canvas).is_some());
    }
}
