pub mod constants;
pub mod maze;
pub mod net;
pub mod render;

pub use maze::{Maze, MazeError, generate_maze};
