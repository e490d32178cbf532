use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use std::net::SocketAddr;
use std::sync::Arc;
use text_metrics::coordinator::coordinator::ExecutionCoordinator;
use text_metrics::service::corpus::TextGenerator;
use text_metrics::service::handlers::{handle_generate_text, handle_get_data, handle_set_data};
use text_metrics::service::protocol::{ENDPOINT_DATA, ENDPOINT_GENERATE_TEXT};
use text_metrics::store::memory::ResultStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:8080".parse()?;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    tracing::info!("Starting text metrics service");

    // 1. Shared state: one store for the whole process lifetime.
    let store = Arc::new(ResultStore::new());
    let coordinator = Arc::new(ExecutionCoordinator::new(store.clone()));
    let generator = Arc::new(TextGenerator::new());

    // 2. HTTP Router:
    let app = Router::new()
        .route(ENDPOINT_DATA, post(handle_set_data).get(handle_get_data))
        .route(ENDPOINT_GENERATE_TEXT, get(handle_generate_text))
        .layer(Extension(store))
        .layer(Extension(coordinator))
        .layer(Extension(generator));

    // 3. Start HTTP server:
    tracing::info!("HTTP server listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
