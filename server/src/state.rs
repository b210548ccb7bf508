use std::{error, fmt};

use common::{
    maze::{Maze, MazeError, generate_maze},
    render::{self, RenderOptions},
};

use crate::config::Args;

#[derive(Debug, PartialEq, Eq)]
pub enum StateError {
    Maze(MazeError),
    TooLarge { size: usize, max_size: usize },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::Maze(e) => write!(f, "{}", e),
            StateError::TooLarge { size, max_size } => write!(
                f,
                "Startup size {} exceeds --max-size {}; raise --max-size or lower --size.",
                size, max_size
            ),
        }
    }
}

impl error::Error for StateError {}

impl From<MazeError> for StateError {
    fn from(e: MazeError) -> Self {
        StateError::Maze(e)
    }
}

/// Read-only state shared by every request. The startup maze is rendered
/// once; parameterised routes build their own mazes.
pub struct AppState {
    pub maze: Maze,
    pub page: String,
    pub max_size: usize,
    pub options: RenderOptions,
}

impl AppState {
    /// Generates the startup maze. The startup size also serves as the
    /// default for `/maze`, so it must fit under `max_size`.
    pub fn new(args: &Args) -> Result<Self, StateError> {
        if args.size > args.max_size {
            return Err(StateError::TooLarge {
                size: args.size,
                max_size: args.max_size,
            });
        }

        let maze = generate_maze(args.size, args.seed)?;
        let options = RenderOptions {
            canvas: true,
            edge_list: args.edge_list,
        };

        Ok(Self::from_maze(maze, args.max_size, options))
    }

    pub fn from_maze(maze: Maze, max_size: usize, options: RenderOptions) -> Self {
        let page = render::html_document(&maze, &options);

        Self {
            maze,
            page,
            max_size,
            options,
        }
    }
}
