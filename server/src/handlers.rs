use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use serde::Deserialize;
use tokio::task;
use tracing::{debug, warn};

use common::{
    maze::{self, Coord, Maze, MazeError},
    render,
};

use crate::state::AppState;

type Rejection = (StatusCode, String);

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MazeQuery {
    pub size: Option<i64>,
    pub seed: Option<u64>,
    pub row: Option<usize>,
    pub col: Option<usize>,
}

pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(state.page.clone())
}

pub async fn health() -> &'static str {
    "ok"
}

pub async fn maze_page(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MazeQuery>,
) -> Result<Html<String>, Rejection> {
    let maze = generate(&state, query).await?;
    Ok(Html(render::html_document(&maze, &state.options)))
}

pub async fn maze_json(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MazeQuery>,
) -> Result<Json<Maze>, Rejection> {
    let maze = generate(&state, query).await?;
    Ok(Json(maze))
}

// Generation is CPU-bound, so it runs off the async workers.
async fn generate(state: &AppState, query: MazeQuery) -> Result<Maze, Rejection> {
    let default_size = state.maze.size();
    let max_size = state.max_size;

    task::spawn_blocking(move || fresh_maze(default_size, max_size, &query))
        .await
        .map_err(|e| {
            warn!(error = %e, "maze generation task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Maze generation failed.".to_string(),
            )
        })?
}

pub fn fresh_maze(
    default_size: usize,
    max_size: usize,
    query: &MazeQuery,
) -> Result<Maze, Rejection> {
    let size = match query.size {
        Some(raw) => maze::dimension(raw).map_err(reject)?,
        None => default_size,
    };

    if size > max_size {
        warn!(size, max_size, "rejected oversized maze request");
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Maze size {} exceeds the maximum of {}.", size, max_size),
        ));
    }

    let result = match (query.row, query.col) {
        (Some(row), Some(col)) => Maze::generate_with_start(size, query.seed, Coord::new(row, col)),
        (None, None) => Maze::generate(size, query.seed),
        _ => {
            warn!(?query, "rejected maze request with half a start cell");
            return Err((
                StatusCode::BAD_REQUEST,
                "Both `row` and `col` are needed to choose a start cell.".to_string(),
            ));
        }
    };

    let maze = result.map_err(reject)?;
    debug!(size, seed = ?maze.seed, start = %maze.start, "generated maze");
    Ok(maze)
}

fn reject(error: MazeError) -> Rejection {
    let status = match error {
        MazeError::InvalidDimension(_) | MazeError::InvalidStart { .. } => StatusCode::BAD_REQUEST,
        MazeError::DisconnectedGraph { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warn!(%error, "rejected maze request");
    (status, error.to_string())
}
