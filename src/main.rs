//! Portfolio - Main Entry Point
//!
//! Sets up logging, loads the configuration, and opens the window.

use portfolio::app::application::run_app;
use portfolio::helpers::{get_or_create_data_dir, is_development};
use portfolio::i18n::init_locale;
use portfolio::state::PortfolioConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log to stderr, and to a daily file in the data directory when one is available
fn init_tracing() -> Option<WorkerGuard> {
    let level = if is_development() { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let data_dir = get_or_create_data_dir();
    let (file_layer, guard) = match &data_dir {
        Ok(dir) => {
            let appender = tracing_appender::rolling::daily(dir.join("logs"), "portfolio.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        Err(_) => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    if let Err(e) = data_dir {
        tracing::warn!(error = %e, "No data directory, logging to stderr only");
    }

    guard
}

fn main() {
    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = init_tracing();

    tracing::info!("Starting Portfolio...");

    let config = PortfolioConfig::try_load().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        PortfolioConfig::default().with_system_locale()
    });
    init_locale(config.locale());

    // Run the GPUI application
    run_app(config);
}
