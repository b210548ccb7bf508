pub mod grid;
pub mod prim;

use std::{error, fmt};

use disjoint::DisjointSet;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

pub use grid::{Connection, Coord, Direction, Edge, EdgeId, Grid, Openings, Vertex};
pub use prim::Prim;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MazeError {
    InvalidDimension(i64),
    InvalidStart { start: Coord, size: usize },
    DisconnectedGraph { reached: usize, total: usize },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidDimension(dimension) if *dimension < 1 => {
                write!(f, "Maze size must be at least 1, got {}.", dimension)
            }
            MazeError::InvalidDimension(dimension) => {
                write!(f, "Maze size {} is too large to allocate.", dimension)
            }
            MazeError::InvalidStart { start, size } => write!(
                f,
                "Start cell ({}) is outside the {}x{} grid.",
                start, size, size
            ),
            MazeError::DisconnectedGraph { reached, total } => write!(
                f,
                "Spanning tree stopped after reaching {} of {} cells: the grid is not connected.",
                reached, total
            ),
        }
    }
}

impl error::Error for MazeError {}

/// Validates a grid size that arrives as a signed number, e.g. from a query
/// string.
pub fn dimension(raw: i64) -> Result<usize, MazeError> {
    usize::try_from(raw)
        .ok()
        .filter(|&n| n > 0)
        .ok_or(MazeError::InvalidDimension(raw))
}

/// Generates a perfect maze on a `dimension`×`dimension` grid. Without a
/// seed, one is drawn at random and recorded in the result.
pub fn generate_maze(dimension: usize, seed: Option<u64>) -> Result<Maze, MazeError> {
    Maze::generate(dimension, seed)
}

// Weights are drawn first, so the grid for a seed does not depend on how the
// start cell is chosen.
fn seeded_grid(dimension: usize, seed: Option<u64>) -> Result<(u64, StdRng, Grid), MazeError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let grid = Grid::new(dimension, &mut rng)?;
    Ok((seed, rng, grid))
}

/// A grown maze. Mazes read back with serde are not validated: `is_perfect`
/// reports false for corrupt ones, and rendering skips cells and corridors
/// that fall outside the grid.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct Maze {
    pub grid: Grid,
    pub order: Vec<Coord>, // Cells in the order they joined the tree, start first.
    pub start: Coord,
    pub seed: Option<u64>,
}

impl Maze {
    pub fn generate(dimension: usize, seed: Option<u64>) -> Result<Self, MazeError> {
        let (seed, mut rng, grid) = seeded_grid(dimension, seed)?;
        let start = Coord::new(
            rng.random_range(0..dimension),
            rng.random_range(0..dimension),
        );

        let mut maze = Self::from_grid(grid, start)?;
        maze.seed = Some(seed);
        Ok(maze)
    }

    pub fn generate_with_start(
        dimension: usize,
        seed: Option<u64>,
        start: Coord,
    ) -> Result<Self, MazeError> {
        let (seed, _, grid) = seeded_grid(dimension, seed)?;

        let mut maze = Self::from_grid(grid, start)?;
        maze.seed = Some(seed);
        Ok(maze)
    }

    /// Grows the spanning tree over a grid built by the caller.
    pub fn from_grid(mut grid: Grid, start: Coord) -> Result<Self, MazeError> {
        let order = grid.prim(start)?;

        Ok(Self {
            grid,
            order,
            start,
            seed: None,
        })
    }

    pub fn size(&self) -> usize {
        self.grid.size()
    }

    pub fn openings(&self, coord: Coord) -> Openings {
        self.grid.openings(coord)
    }

    /// Checks that the included edges form a spanning tree: every cell
    /// visited, `N² - 1` corridors, and no corridor closing a loop.
    pub fn is_perfect(&self) -> bool {
        let cells = self.grid.vertices().len();

        if !self.grid.vertices().iter().all(|vertex| vertex.visited) {
            return false;
        }

        if self.grid.included_edges().count() + 1 != cells {
            return false;
        }

        let mut sets = DisjointSet::with_len(cells);
        for edge in self.grid.included_edges() {
            let [a, b] = edge.ends;
            if !self.grid.contains(a) || !self.grid.contains(b) {
                return false;
            }
            let i = self.grid.index(a);
            let j = self.grid.index(b);
            if i >= cells || j >= cells || sets.root_of(i) == sets.root_of(j) {
                return false;
            }
            sets.join(i, j);
        }

        true
    }

    pub fn log(&self) -> String {
        let width = 2 * self.size() + 1;
        let mut blocks = vec![vec![false; width]; width];

        for vertex in self.grid.vertices() {
            if !self.grid.contains(vertex.coord) {
                continue;
            }
            let Coord { row, col } = vertex.coord;
            blocks[2 * row + 1][2 * col + 1] = true;
        }

        for edge in self.grid.included_edges() {
            let [a, b] = edge.ends;
            if !self.grid.contains(a) || !self.grid.contains(b) {
                continue;
            }
            blocks[a.row + b.row + 1][a.col + b.col + 1] = true;
        }

        blocks
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&open| if open { "  " } else { "██" })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
