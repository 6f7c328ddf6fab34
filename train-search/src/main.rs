use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use train_search::api::{ApiError, MockTrainsClient, TrainsApiClient, TrainsBackend};
use train_search::cache::CachedTrainsClient;
use train_search::config::{AppConfig, ConfigError};
use train_search::recent::RecentStore;
use train_search::stations::StationList;
use train_search::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "train_search=info,tower_http=info";

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create trains client: {0}")]
    Api(#[from] ApiError),

    #[error("server error: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "train search stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), StartupError> {
    let config = AppConfig::from_env()?;

    // Canned responses replace the remote API when a mock directory is set
    let backend = match &config.mock_dir {
        Some(dir) => TrainsBackend::Mock(MockTrainsClient::new(dir)?),
        None => TrainsBackend::Live(TrainsApiClient::new(config.api.clone())?),
    };
    info!(
        backend = backend.describe(),
        api = %config.api.base_url,
        "trains backend ready"
    );

    let trains = CachedTrainsClient::new(backend, &config.cache);
    let stations = StationList::load_or_empty(&config.stations_file);
    let recent = RecentStore::open(&config.recent_file);

    let state = AppState::new(trains, stations, recent);
    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Train Search listening on http://{}", config.bind_addr);
    info!("  GET  /                     - Dashboard");
    info!("  GET  /route?from=..&to=..  - Trains between two stations");
    info!("  GET  /api/stations/search  - Station autocomplete");
    info!("  GET  /api/recent           - Recent searches");

    axum::serve(listener, app).await?;
    Ok(())
}
