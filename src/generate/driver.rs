//! Asset run driver
//!
//! Creates the output directory, then generates every configured asset in
//! order. A failing asset is logged and skipped; the run always completes.

use super::asset::{GeneratedAsset, create_image};
use crate::config::GeneratorConfig;
use crate::error::GenerateError;
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// Result of one asset in a run
#[derive(Debug)]
pub struct AssetOutcome {
    pub filename: String,
    pub result: Result<GeneratedAsset, GenerateError>,
}

#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl RunReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// Create `dir` if missing. Returns true if it was created. Existing contents are kept.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, GenerateError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    info!("Created output directory {}", dir.display());
    Ok(true)
}

pub fn run(config: &GeneratorConfig) -> RunReport {
    if let Err(e) = ensure_output_dir(&config.output_dir) {
        error!(
            "Could not create output directory {}: {}",
            config.output_dir.display(),
            e
        );
    }

    let style = config.style();
    let mut report = RunReport::default();

    for asset in &config.assets {
        let result = create_image(&config.output_dir, asset, &style);
        match &result {
            Ok(generated) => {
                if generated.used_fallback_font {
                    warn!(
                        "{}: no font file found, text drawn with {}",
                        asset.filename, generated.font
                    );
                }
                info!("Created {}", asset.filename);
            }
            Err(e) => error!("Error creating {}: {}", asset.filename, e),
        }
        report.outcomes.push(AssetOutcome {
            filename: asset.filename.clone(),
            result,
        });
    }

    info!(
        "Generated {} of {} assets in {}",
        report.succeeded(),
        report.outcomes.len(),
        config.output_dir.display()
    );
    report
}
