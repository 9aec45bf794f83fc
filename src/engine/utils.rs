use chrono::Local;
use tracing_subscriber::{EnvFilter, fmt};

pub fn init_tracing() {
    // Example: export RUST_LOG="info,pdfix=debug"
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(false) // hide target module path
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// Second-resolution timestamp used in the default report filename.
pub fn timestamp() -> String {
    Local::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}

pub fn default_report_name() -> String {
    format!("FIX_PDF_NAMES_{}.md", timestamp())
}
