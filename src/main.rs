//! Café Directory Service
//!
//! Serves `GET /cafe?city=<city>[&count=<n>][&search=<text>]` from an
//! in-memory city → café directory.
//!
//! ```text
//!     Client ──▶ request ID ──▶ trace ──▶ timeout ──▶ /cafe handler
//!                                                      │
//!                         validate ◀──────────────────┘
//!                            │
//!                            ▼
//!                  CityDirectory (Arc, read-only)
//!                            │
//!                            ▼
//!               search → truncate → comma-join
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cafe_directory::config::{load_config, validate_config, CafeConfig, ConfigError};
use cafe_directory::lifecycle;
use cafe_directory::observability::logging;

#[derive(Parser)]
#[command(name = "cafe-directory")]
#[command(about = "HTTP service listing cafés by city", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

fn load(cli: &Cli) -> Result<CafeConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CafeConfig::default(),
    };

    if let Some(bind) = &cli.bind {
        config.listener.bind_address = bind.clone();
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("cafe-directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    logging::init_logging(&config.observability);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    match lifecycle::start(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Fatal startup error");
            ExitCode::FAILURE
        }
    }
}
