use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bikes_server::repo::{DocumentRepository, StationRepository};
use bikes_server::simulator::{Simulator, SimulatorConfig};
use bikes_server::snapshot;
use bikes_server::store::{DocumentStoreClient, DocumentStoreConfig};
use bikes_server::web::{AppState, create_router};

/// Default path of the startup snapshot file.
const DEFAULT_SNAPSHOT_PATH: &str = "data/dublinbike.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the startup snapshot; an unreadable file starts an empty catalog.
    let snapshot_path =
        std::env::var("BIKES_SNAPSHOT").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    let stations = match snapshot::load(&snapshot_path) {
        Ok(stations) => {
            info!(count = stations.len(), path = %snapshot_path, "loaded station snapshot");
            stations
        }
        Err(e) => {
            error!(error = %e, path = %snapshot_path, "failed to load station snapshot, starting empty");
            Vec::new()
        }
    };

    // Pick the backend: a document store when configured, else in-memory.
    let repo = match std::env::var("DOCSTORE_URL") {
        Ok(url) => {
            let api_key = std::env::var("DOCSTORE_API_KEY").unwrap_or_else(|_| {
                eprintln!("Warning: DOCSTORE_API_KEY not set. Store calls may fail.");
                String::new()
            });
            let config = DocumentStoreConfig::new(url, api_key);
            let client =
                DocumentStoreClient::new(config).expect("Failed to create document store client");

            let repo = DocumentRepository::new(client, stations);
            if let Err(e) = repo.seed_if_empty().await {
                warn!(error = %e, "could not seed document store, fallback data remains available");
            }
            StationRepository::Document(repo)
        }
        Err(_) => StationRepository::in_memory(stations),
    };
    let repo = Arc::new(repo);

    // Spawn the availability simulator with a cooperative shutdown handle.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let simulator = Simulator::new(SimulatorConfig::default());
    let simulator_handle = tokio::spawn(simulator.run(repo.clone(), shutdown_rx));

    let state = AppState::new(repo);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Dublin bikes catalog listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET    /health                  - Health check");
    println!("  GET    /api/stations            - List stations (filter/sort/paginate)");
    println!("  GET    /api/stations/summary    - Catalog summary");
    println!("  GET    /api/stations/{{number}}   - Fetch one station");
    println!("  POST   /api/stations            - Create a station");
    println!("  PUT    /api/stations/{{number}}   - Update a station");
    println!("  DELETE /api/stations/{{number}}   - Delete a station");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await
        .unwrap();

    // Stop the simulator after the server drains.
    let _ = shutdown_tx.send(true);
    let _ = simulator_handle.await;
}
