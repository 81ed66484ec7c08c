//! LoanSnap placeholder assets
//!
//! Generates the app icon, splash screen and adaptive icon as solid-color PNGs
//! with the app name centered on them.

pub mod config;
pub mod constants;
pub mod error;
pub mod fonts;
pub mod generate;
pub mod logging;
pub mod text;

// Re-export commonly used types for convenience
pub use config::{AssetSpec, GeneratorConfig, RenderStyle};
pub use error::GenerateError;
pub use fonts::{BitmapFont, LoadedFont, resolve_font};
pub use generate::{AssetOutcome, GeneratedAsset, RunReport, create_image, run};
pub use text::{Measurement, TextBlock, measure_text};
