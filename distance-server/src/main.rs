use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use distance_server::stations::StationCatalog;
use distance_server::web::{AppState, create_router};

/// Listen address used when BIND_ADDR is not set.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The dataset path is an explicit startup parameter
    let data_path = std::env::var("STATION_DATA").unwrap_or_else(|_| {
        eprintln!("Error: STATION_DATA not set. Point it at the station dataset file.");
        std::process::exit(1);
    });

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
        .parse()
        .unwrap_or_else(|e| {
            eprintln!("Error: invalid BIND_ADDR: {e}");
            std::process::exit(1);
        });

    // Load the catalog before binding (fail fast on bad data)
    println!("Loading station data from {data_path}...");
    let catalog = StationCatalog::load(&data_path).unwrap_or_else(|e| {
        eprintln!("Error: failed to load station data: {e}");
        std::process::exit(1);
    });
    println!("Loaded {} long-distance stations", catalog.len());

    // Build app state
    let state = AppState::new(catalog);

    // Create router
    let app = create_router(state);

    println!("Station distance server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health                        - Health check");
    println!("  GET /api/v1/distance/{{from}}/{{to}}  - Distance between two stations");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
