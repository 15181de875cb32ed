//! Entry point for the `catalog-gateway` HTTP server.

use std::sync::Arc;

use catalog_gateway::{routes::create_router, state::AppState, store::ProductStore};
use tracing::info;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let addr = std::env::var("CATALOG_LISTEN_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:3000".to_owned());

    // Without a secret every write would be unauthorizable, so refuse to
    // start instead.
    let api_key = match std::env::var("CATALOG_API_KEY") {
        Ok(key) if !key.is_empty() => key,
        _ => {
            tracing::error!("CATALOG_API_KEY must be set to a non-empty secret");
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(ProductStore::seeded(), api_key));
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, "catalog-gateway listening");

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
