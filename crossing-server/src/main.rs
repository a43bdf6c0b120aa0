use std::net::SocketAddr;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crossing_server::cache::{CacheConfig, DailyCache};
use crossing_server::closures::ClosureConfig;
use crossing_server::rasp::{RaspClient, RaspConfig};
use crossing_server::web::{AppState, create_router};

/// Directory the front end is served from.
const STATIC_DIR: &str = "public";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Get credentials from environment. An empty key is tolerated at
    // startup; requests then fail with a configuration error.
    let api_key = std::env::var("YANDEX_RASP_API_KEY").unwrap_or_else(|_| {
        warn!("YANDEX_RASP_API_KEY not set. Schedule requests will fail.");
        String::new()
    });

    let port: u16 = env_parsed("PORT", 3000);

    // Create schedule client
    let mut rasp_config = RaspConfig::new(&api_key);
    if let Ok(station) = std::env::var("STATION_CODE") {
        rasp_config = rasp_config.with_station(station);
    }
    let rasp = RaspClient::new(rasp_config).expect("Failed to create schedule client");

    // Closure window offsets, tunable per deployment
    let defaults = ClosureConfig::default();
    let closures = ClosureConfig {
        closed_before_min: env_parsed("CLOSED_BEFORE_MIN", defaults.closed_before_min),
        closed_after_min: env_parsed("CLOSED_AFTER_MIN", defaults.closed_after_min),
    };

    // Create the daily cache
    let cache = DailyCache::new(&CacheConfig::default());

    // Build app state and router
    let state = AppState::new(rasp, cache, closures);
    let app = create_router(state, STATIC_DIR);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Crossing closure server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Read a value from the environment, falling back to a default when
/// the variable is absent or does not parse.
fn env_parsed<T: std::str::FromStr + Copy + std::fmt::Display>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("{name}={raw} is not valid, using {default}");
            default
        }),
        Err(_) => default,
    }
}
