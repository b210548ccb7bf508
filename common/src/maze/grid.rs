use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use super::MazeError;
use crate::constants::WEIGHT_RANGE;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Side of a cell that a connection sits on.
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Index into the grid's edge arena.
pub type EdgeId = usize;

/// A physical wall between two adjacent cells. Both cells reference the same
/// edge, so a wall has exactly one weight and can be selected only once.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub label: String,
    pub weight: u32,
    pub included: bool,
    pub ends: [Coord; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub edge: EdgeId,
    pub neighbor: Coord,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub coord: Coord,
    pub visited: bool,
    pub connections: Vec<Connection>,
}

/// Which sides of a cell are open corridors.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Openings {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Openings {
    pub fn is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::Top => self.top,
            Direction::Bottom => self.bottom,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    fn open(&mut self, direction: Direction) {
        match direction {
            Direction::Top => self.top = true,
            Direction::Bottom => self.bottom = true,
            Direction::Left => self.left = true,
            Direction::Right => self.right = true,
        }
    }
}

/// Square lattice of cells stored row-major, with walls kept in a flat arena
/// that cells index into.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Grid {
    /// Builds a `dimension`×`dimension` lattice whose walls get independent
    /// weights drawn from `WEIGHT_RANGE`.
    pub fn new(dimension: usize, rng: &mut impl Rng) -> Result<Self, MazeError> {
        Self::build(dimension, |_, _| Some(rng.random_range(WEIGHT_RANGE)))
    }

    /// Builds a grid, asking `weigh` for the weight of the wall on the bottom
    /// and then the right side of each cell, in row-major order. Returning
    /// `None` leaves that wall out of the graph.
    ///
    /// The order of calls is the order of edge creation, and it fixes the
    /// order of every cell's connections: top, left, bottom, right.
    pub fn build<F>(dimension: usize, mut weigh: F) -> Result<Self, MazeError>
    where
        F: FnMut(Coord, Direction) -> Option<u32>,
    {
        if dimension == 0 {
            return Err(MazeError::InvalidDimension(0));
        }

        let too_large = || MazeError::InvalidDimension(i64::try_from(dimension).unwrap_or(i64::MAX));
        let cells = dimension.checked_mul(dimension).ok_or_else(too_large)?;
        let walls = (cells - dimension).checked_mul(2).ok_or_else(too_large)?;

        let mut vertices = Vec::new();
        vertices.try_reserve_exact(cells).map_err(|_| too_large())?;
        let mut edges = Vec::new();
        edges.try_reserve_exact(walls).map_err(|_| too_large())?;

        for row in 0..dimension {
            for col in 0..dimension {
                vertices.push(Vertex {
                    coord: Coord::new(row, col),
                    visited: false,
                    connections: Vec::with_capacity(4),
                });
            }
        }

        let mut grid = Grid {
            size: dimension,
            vertices,
            edges,
        };

        for row in 0..dimension {
            for col in 0..dimension {
                let owner = Coord::new(row, col);

                if row + 1 < dimension {
                    if let Some(weight) = weigh(owner, Direction::Bottom) {
                        grid.connect(owner, Coord::new(row + 1, col), Direction::Bottom, weight);
                    }
                }

                if col + 1 < dimension {
                    if let Some(weight) = weigh(owner, Direction::Right) {
                        grid.connect(owner, Coord::new(row, col + 1), Direction::Right, weight);
                    }
                }
            }
        }

        Ok(grid)
    }

    fn connect(&mut self, from: Coord, to: Coord, direction: Direction, weight: u32) {
        let edge = self.edges.len();
        self.edges.push(Edge {
            label: format!("{}-{}:{}", from, to, weight),
            weight,
            included: false,
            ends: [from, to],
        });

        let from_index = self.index(from);
        let to_index = self.index(to);
        self.vertices[from_index].connections.push(Connection {
            edge,
            neighbor: to,
            direction,
        });
        self.vertices[to_index].connections.push(Connection {
            edge,
            neighbor: from,
            direction: direction.opposite(),
        });
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    pub(crate) fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }

    pub fn vertex(&self, coord: Coord) -> Option<&Vertex> {
        if self.contains(coord) {
            self.vertices.get(self.index(coord))
        } else {
            None
        }
    }

    pub(crate) fn vertex_mut(&mut self, coord: Coord) -> &mut Vertex {
        let index = self.index(coord);
        &mut self.vertices[index]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> &mut Edge {
        &mut self.edges[id]
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn included_edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(|edge| edge.included)
    }

    pub fn edge_between(&self, a: Coord, b: Coord) -> Option<&Edge> {
        self.vertex(a)?
            .connections
            .iter()
            .find(|connection| connection.neighbor == b)
            .and_then(|connection| self.edge(connection.edge))
    }

    pub fn is_visited(&self, coord: Coord) -> bool {
        self.vertex(coord).is_some_and(|vertex| vertex.visited)
    }

    pub fn openings(&self, coord: Coord) -> Openings {
        let mut openings = Openings::default();

        if let Some(vertex) = self.vertex(coord) {
            for connection in &vertex.connections {
                if self.edge(connection.edge).is_some_and(|edge| edge.included) {
                    openings.open(connection.direction);
                }
            }
        }

        openings
    }
}
