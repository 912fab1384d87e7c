//! Boot: logging init, config load, source and viewer construction.

use std::sync::Arc;
use tracing::{info, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::conf::ViewerConfig;
use crate::parser::ParsingMetrics;
use crate::runtime::cli::Cli;
use crate::source::{HttpSource, LogSource};
use crate::view::LogViewer;

/// Initialise the tracing / logging subsystem. Logs go to stderr so stdout
/// carries only rendered entries.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewer=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Everything a run needs.
pub struct Booted {
    pub config: ViewerConfig,
    pub viewer: LogViewer,
    pub metrics: Arc<ParsingMetrics>,
}

/// Load config, apply command-line overrides, and build the viewer for the
/// selected log.
pub fn boot(cli: &Cli) -> Result<Booted, Box<dyn std::error::Error>> {
    info!("Starting log viewer v{}", env!("CARGO_PKG_VERSION"));

    let mut config = ViewerConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
        config.validate()?;
    }
    if cli.no_color {
        config.color = false;
    }
    info!("Loaded configuration: base_url={}", config.base_url);

    let source = HttpSource::new(&config.base_url, config.request_timeout()).map_err(|e| {
        error!("Failed to build HTTP client: {}", e);
        e
    })?;
    let source: Arc<dyn LogSource> = Arc::new(source);

    let metrics = Arc::new(ParsingMetrics::new());
    let viewer = LogViewer::new(
        cli.command.view(),
        source,
        config.sources.clone(),
        Arc::clone(&metrics),
    );

    Ok(Booted { config, viewer, metrics })
}
