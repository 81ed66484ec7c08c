//! Single image generator
//!
//! Solid background, one line of centered text, saved under the output
//! directory in the format implied by the filename extension.

use crate::config::{AssetSpec, RenderStyle};
use crate::error::GenerateError;
use crate::fonts::resolve_font;
use crate::text::{TextBlock, draw_centered};
use image::RgbImage;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What was written for one asset
#[derive(Debug, Clone)]
pub struct GeneratedAsset {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Font path, or the built-in face's name
    pub font: String,
    pub used_fallback_font: bool,
    pub text_block: TextBlock,
}

/// Render `asset` into memory
pub fn render(
    asset: &AssetSpec,
    style: &RenderStyle,
) -> Result<(RgbImage, GeneratedAsset), GenerateError> {
    if asset.width == 0 || asset.height == 0 {
        return Err(GenerateError::InvalidDimensions {
            width: asset.width,
            height: asset.height,
        });
    }

    let mut canvas = RgbImage::from_pixel(asset.width, asset.height, style.background);
    let font = resolve_font(&style.font_candidates, asset.font_size);
    debug!("{}: using {}", asset.filename, font);

    let text_block = draw_centered(&mut canvas, &font, style.text_color, &asset.text);

    let info = GeneratedAsset {
        path: PathBuf::from(&asset.filename),
        width: asset.width,
        height: asset.height,
        font: font.to_string(),
        used_fallback_font: font.is_fallback(),
        text_block,
    };
    Ok((canvas, info))
}

/// Render `asset` and save it to `output_dir/filename`
pub fn create_image(
    output_dir: &Path,
    asset: &AssetSpec,
    style: &RenderStyle,
) -> Result<GeneratedAsset, GenerateError> {
    let (canvas, mut info) = render(asset, style)?;
    let path = output_dir.join(&asset.filename);
    canvas.save(&path)?;
    info.path = path;
    Ok(info)
}
