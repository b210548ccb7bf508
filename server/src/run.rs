use std::{io, net::TcpListener, sync::Arc, time::Duration};

use axum::{Router, routing::get};
use tower_http::timeout::TimeoutLayer;
use tracing::info;

use common::constants::REQUEST_TIMEOUT;

use crate::{handlers, state::AppState};

/// Requests that take longer than `timeout` are answered with
/// `408 Request Timeout`.
pub fn build_router(state: Arc<AppState>, timeout: Duration) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/maze", get(handlers::maze_page))
        .route("/api/maze", get(handlers::maze_json))
        .route("/health", get(handlers::health))
        .layer(TimeoutLayer::new(timeout))
        .with_state(state)
}

pub async fn run_server(listener: TcpListener, state: AppState) -> io::Result<()> {
    let listener = tokio::net::TcpListener::from_std(listener)?;
    let app = build_router(Arc::new(state), REQUEST_TIMEOUT);

    info!(address = %listener.local_addr()?, "serving maze");
    axum::serve(listener, app).await
}
