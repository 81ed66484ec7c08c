//! Generator configuration
//!
//! Plain values passed into the run. `GeneratorConfig::default()` is the fixed
//! LoanSnap run; nothing is read from disk or the environment.

use crate::constants::{
    APP_NAME, ASSETS_DIR, BACKGROUND_COLOR, DEFAULT_ASSETS, FONT_CANDIDATES, TEXT_COLOR,
};
use image::Rgb;
use std::path::PathBuf;

/// One image to produce
#[derive(Debug, Clone, PartialEq)]
pub struct AssetSpec {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub text: String,
    /// Em size in pixels
    pub font_size: f32,
}

impl AssetSpec {
    pub fn new(filename: &str, width: u32, height: u32, text: &str, font_size: f32) -> Self {
        Self {
            filename: filename.to_string(),
            width,
            height,
            text: text.to_string(),
            font_size,
        }
    }
}

/// Colors and fonts shared by every asset in a run
#[derive(Debug, Clone)]
pub struct RenderStyle {
    pub background: Rgb<u8>,
    pub text_color: Rgb<u8>,
    pub font_candidates: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
    pub background: Rgb<u8>,
    pub text_color: Rgb<u8>,
    pub font_candidates: Vec<PathBuf>,
    pub assets: Vec<AssetSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(ASSETS_DIR),
            background: Rgb(BACKGROUND_COLOR),
            text_color: Rgb(TEXT_COLOR),
            font_candidates: FONT_CANDIDATES.iter().map(PathBuf::from).collect(),
            assets: DEFAULT_ASSETS
                .iter()
                .map(|&(name, w, h, size)| AssetSpec::new(name, w, h, APP_NAME, size))
                .collect(),
        }
    }
}

impl GeneratorConfig {
    pub fn style(&self) -> RenderStyle {
        RenderStyle {
            background: self.background,
            text_color: self.text_color,
            font_candidates: self.font_candidates.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_loansnap_run() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("assets"));
        assert_eq!(config.background, Rgb([0x6B, 0x46, 0xC1]));
        assert_eq!(config.text_color, Rgb([0xFF, 0xFF, 0xFF]));
        assert_eq!(
            config.assets,
            vec![
                AssetSpec::new("icon.png", 1024, 1024, "LoanSnap", 150.0),
                AssetSpec::new("splash.png", 1242, 2436, "LoanSnap", 180.0),
                AssetSpec::new("adaptive-icon.png", 1024, 1024, "LoanSnap", 150.0),
            ]
        );
        assert_eq!(
            config.font_candidates[0],
            PathBuf::from("/System/Library/Fonts/Helvetica.ttc")
        );
    }

    #[test]
    fn test_style_carries_colors_and_fonts() {
        let config = GeneratorConfig {
            font_candidates: vec![PathBuf::from("a.ttf"), PathBuf::from("b.ttf")],
            ..GeneratorConfig::default()
        };
        let style = config.style();
        assert_eq!(style.background, config.background);
        assert_eq!(style.text_color, config.text_color);
        assert_eq!(style.font_candidates, config.font_candidates);
    }
}
