//! EasyCore Admin - Main Entry Point
//!
//! Administrative dashboard for the EasyCore dental clinic system

use easycore_admin::app::application::run_app;
use easycore_admin::utils::{config_store, logging};

fn main() {
    let (config, config_path, config_error) = config_store::load_or_default();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = logging::init(&config.log_level);

    if let Some(err) = config_error {
        tracing::error!(error = %err, "Failed to load configuration, using defaults");
    }

    let system_locale = locale_config::Locale::current().to_string();
    let locale = config.resolved_locale(&system_locale);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        locale = locale.code(),
        config = ?config_path,
        "Starting EasyCore Admin..."
    );

    run_app(config, config_path, locale);
}
