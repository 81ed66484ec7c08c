//! Asset generation
//!
//! - `asset`: one image, solid background with centered text
//! - `driver`: the full run over every configured asset

pub mod asset;
pub mod driver;

pub use asset::{GeneratedAsset, create_image, render};
pub use driver::{AssetOutcome, RunReport, ensure_output_dir, run};
