//! Placeholder asset generator
//!
//! Writes assets/icon.png, assets/splash.png and assets/adaptive-icon.png.
//!
//! Run with: `cargo run --bin generate_assets`

use loansnap_assets::{GeneratorConfig, generate, logging};

fn main() {
    logging::init();
    generate::run(&GeneratorConfig::default());
}
