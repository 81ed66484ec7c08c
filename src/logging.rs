//! Log output for the generator binary.
//!
//! Diagnostics go to stdout. Level defaults to `info`; override with `RUST_LOG`,
//! e.g. `RUST_LOG=loansnap_assets=debug` to see which font candidates were skipped.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init();
}
