//! Font resolution
//!
//! Candidates are tried in order; the first file that exists and parses is
//! used at the requested size. If none do, the built-in bitmap face is used.
//! It is much smaller than the requested size and is not rescaled.

pub mod bitmap;

pub use bitmap::BitmapFont;

use ab_glyph::{Font, FontVec, PxScale, Rect, ScaleFont, point};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Font chosen for one asset
pub enum LoadedFont {
    Outline {
        path: PathBuf,
        font: FontVec,
        scale: PxScale,
    },
    Bitmap(BitmapFont),
}

impl fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedFont::Outline { path, scale, .. } => f
                .debug_struct("Outline")
                .field("path", path)
                .field("scale", &scale.y)
                .finish(),
            LoadedFont::Bitmap(_) => f.write_str("Bitmap"),
        }
    }
}

impl fmt::Display for LoadedFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadedFont::Outline { path, .. } => write!(f, "{}", path.display()),
            LoadedFont::Bitmap(_) => f.write_str("built-in bitmap font"),
        }
    }
}

/// Pick the first usable candidate, else the built-in face
pub fn resolve_font(candidates: &[PathBuf], font_size: f32) -> LoadedFont {
    for path in candidates {
        if !path.exists() {
            continue;
        }
        if let Some((font, scale)) = load_outline(path, font_size) {
            return LoadedFont::Outline {
                path: path.clone(),
                font,
                scale,
            };
        }
    }
    debug!("No font candidate loaded, using built-in bitmap font");
    LoadedFont::Bitmap(BitmapFont)
}

/// Read and parse a font file. `.ttc` collections use their first face.
fn load_outline(path: &Path, font_size: f32) -> Option<(FontVec, PxScale)> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(e) => {
            debug!("Skipping font {}: {}", path.display(), e);
            return None;
        }
    };
    let font = match FontVec::try_from_vec_and_index(data, 0) {
        Ok(font) => font,
        Err(e) => {
            debug!("Skipping font {}: {}", path.display(), e);
            return None;
        }
    };
    let scale = em_size_to_scale(&font, font_size);
    Some((font, scale))
}

/// `font_size` is the em size in pixels; ab_glyph scales by ascent-descent height
fn em_size_to_scale(font: &impl Font, font_size: f32) -> PxScale {
    match font.units_per_em() {
        Some(units_per_em) if units_per_em > 0.0 => {
            PxScale::from(font_size * font.height_unscaled() / units_per_em)
        }
        _ => PxScale::from(font_size),
    }
}

/// Ink extents relative to the draw origin, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InkBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl LoadedFont {
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadedFont::Bitmap(_))
    }

    /// Union of glyph pixel bounds, laid out the way `draw` places them.
    /// `None` when the text has no visible glyphs.
    pub fn ink_bounds(&self, text: &str) -> Option<InkBounds> {
        match self {
            LoadedFont::Outline { font, scale, .. } => outline_ink_bounds(font, *scale, text),
            LoadedFont::Bitmap(bitmap) => bitmap.ink_bounds(text).map(|b| InkBounds {
                min_x: b.min_x as f32,
                min_y: b.min_y as f32,
                max_x: b.max_x as f32,
                max_y: b.max_y as f32,
            }),
        }
    }

    /// Advance width and tallest glyph height
    pub fn advance_size(&self, text: &str) -> (u32, u32) {
        match self {
            LoadedFont::Outline { font, scale, .. } => text_size(*scale, font, text),
            LoadedFont::Bitmap(bitmap) => bitmap.advance_size(text),
        }
    }

    pub fn draw(&self, canvas: &mut RgbImage, color: Rgb<u8>, x: i32, y: i32, text: &str) {
        match self {
            LoadedFont::Outline { font, scale, .. } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text)
            }
            LoadedFont::Bitmap(bitmap) => bitmap.draw(canvas, color, x, y, text),
        }
    }
}

// Mirrors imageproc's glyph layout so the bounds match what draw_text_mut paints
fn outline_ink_bounds(font: &FontVec, scale: PxScale, text: &str) -> Option<InkBounds> {
    let scaled = font.as_scaled(scale);
    let mut caret = 0f32;
    let mut last = None;
    let mut bounds: Option<Rect> = None;

    for c in text.chars() {
        let glyph_id = scaled.glyph_id(c);
        let glyph = glyph_id.with_scale_and_position(scale, point(caret, scaled.ascent()));
        caret += scaled.h_advance(glyph_id);
        if let Some(outlined) = scaled.outline_glyph(glyph) {
            if let Some(last) = last {
                caret += scaled.kern(glyph_id, last);
            }
            last = Some(glyph_id);
            let bb = outlined.px_bounds();
            bounds = Some(match bounds {
                None => bb,
                Some(acc) => Rect {
                    min: point(acc.min.x.min(bb.min.x), acc.min.y.min(bb.min.y)),
                    max: point(acc.max.x.max(bb.max.x), acc.max.y.max(bb.max.y)),
                },
            });
        }
    }

    bounds.map(|b| InkBounds {
        min_x: b.min.x,
        min_y: b.min.y,
        max_x: b.max.x,
        max_y: b.max.y,
    })
}

/// Font files checked into `fixtures/fonts`
#[cfg(test)]
pub(crate) fn fixture_font(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures/fonts")
        .join(name)
}
