//! Local preview server for a built site.

use std::net::SocketAddr;
use std::path::Path;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tracing::info;

use crate::Error;

/// Default preview port.
pub const DEFAULT_PORT: u16 = 8000;

/// Serve `docs_dir` at `/`, plus a `/health` probe.
pub fn create_router(docs_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .fallback_service(ServeDir::new(docs_dir))
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Serve `docs_dir` on localhost until the process is stopped.
pub async fn serve(docs_dir: &Path, port: u16) -> Result<(), Error> {
    let app = create_router(docs_dir);
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(Error::Serve)?;

    info!(%addr, dir = %docs_dir.display(), "Serving site");
    println!("Previewing {} on http://{addr}", docs_dir.display());

    axum::serve(listener, app).await.map_err(Error::Serve)
}
