//! Pricing Admin - Main Entry Point
//!
//! Desktop console for the pricing catalog.

use pricing_admin::app::application::run_app;
use pricing_admin::logging;
use pricing_admin::utils::config_store;

fn main() -> anyhow::Result<()> {
    let settings = config_store::load_or_default();

    // Held until exit so the file writer flushes
    let _log_guard = logging::init(&settings.config.log)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Pricing Admin...");
    settings.log();

    run_app(settings.config, settings.path);
    Ok(())
}
