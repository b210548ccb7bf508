use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    body::{self, Body},
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use common::{constants::REQUEST_TIMEOUT, maze::generate_maze, render::RenderOptions};

use crate::{run::build_router, state::AppState};

/// Router over a startup maze of `size` cells (seed 7), accepting requests up
/// to `max_size`. The state is returned too so tests can compare against it.
pub fn test_router(size: usize, max_size: usize) -> (Router, Arc<AppState>) {
    test_router_with_timeout(size, max_size, REQUEST_TIMEOUT)
}

pub fn test_router_with_timeout(
    size: usize,
    max_size: usize,
    timeout: Duration,
) -> (Router, Arc<AppState>) {
    let maze = generate_maze(size, Some(7)).expect("test maze should generate");
    let state = Arc::new(AppState::from_maze(
        maze,
        max_size,
        RenderOptions::default(),
    ));

    (build_router(state.clone(), timeout), state)
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request should build");

    let response = router
        .oneshot(request)
        .await
        .expect("router should not fail");
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    (status, String::from_utf8_lossy(&bytes).to_string())
}
