use super::MazeError;
use super::grid::{Coord, EdgeId, Grid};

/// Grows a minimum spanning tree over the grid, starting from `start`, and
/// returns the cells in the order they joined the tree.
///
/// Every iteration rescans the walls of every cell already in the tree, so
/// the cost is O(V·E). That is fine for the grid sizes we serve (up to about
/// 50×50); a heap would be faster but must pick exactly the same edges.
pub trait Prim {
    fn prim(&mut self, start: Coord) -> Result<Vec<Coord>, MazeError>;
}

impl Prim for Grid {
    fn prim(&mut self, start: Coord) -> Result<Vec<Coord>, MazeError> {
        if !self.contains(start) {
            return Err(MazeError::InvalidStart {
                start,
                size: self.size(),
            });
        }

        let total = self.vertices().len();
        let mut tree = Vec::with_capacity(total);
        visit(self, start, &mut tree);

        while tree.len() < total {
            let Some((edge, cell)) = pick_cheapest_frontier_edge(self, &tree) else {
                return Err(MazeError::DisconnectedGraph {
                    reached: tree.len(),
                    total,
                });
            };

            self.edge_mut(edge).included = true;
            visit(self, cell, &mut tree);
        }

        Ok(tree)
    }
}

fn visit(grid: &mut Grid, cell: Coord, tree: &mut Vec<Coord>) {
    grid.vertex_mut(cell).visited = true;
    tree.push(cell);
}

// Ties go to the first edge found: tree cells in the order they joined, then
// each cell's connections in construction order.
fn pick_cheapest_frontier_edge(grid: &Grid, tree: &[Coord]) -> Option<(EdgeId, Coord)> {
    let mut cheapest: Option<(EdgeId, Coord, u32)> = None;

    for &cell in tree {
        let Some(vertex) = grid.vertex(cell) else {
            continue;
        };

        for connection in &vertex.connections {
            // Neighbours outside the arena only appear in hand-edited grids.
            if grid.vertex(connection.neighbor).is_none_or(|neighbor| neighbor.visited) {
                continue;
            }

            let Some(edge) = grid.edge(connection.edge) else {
                continue;
            };

            let is_cheaper = match cheapest {
                None => true,
                Some((_, _, weight)) => edge.weight < weight,
            };

            if is_cheaper {
                cheapest = Some((connection.edge, connection.neighbor, edge.weight));
            }
        }
    }

    cheapest.map(|(edge, cell, _)| (edge, cell))
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::maze::grid::Direction;

    fn pairs(grid: &Grid) -> Vec<[(usize, usize); 2]> {
        grid.included_edges()
            .map(|edge| {
                let [a, b] = edge.ends;
                [(a.row, a.col), (b.row, b.col)]
            })
            .collect()
    }

    #[test]
    fn test_prim_reaches_every_cell() {
        for n in 1..=10 {
            let mut rng = StdRng::seed_from_u64(n as u64 * 31);
            let mut grid = Grid::new(n, &mut rng).unwrap();

            let order = grid.prim(Coord::new(n / 2, n / 2)).unwrap();

            assert_eq!(order.len(), n * n);
            assert_eq!(grid.included_edges().count(), n * n - 1);
            assert!(grid.vertices().iter().all(|v| v.visited));
        }
    }

    #[test]
    fn test_prim_prefers_cheaper_horizontal_corridors() {
        let mut grid = Grid::build(3, |_, direction| match direction {
            Direction::Right => Some(1),
            _ => Some(2),
        })
        .unwrap();

        let order = grid.prim(Coord::new(0, 0)).unwrap();

        let expected_order: Vec<Coord> = (0..3)
            .flat_map(|row| (0..3).map(move |col| Coord::new(row, col)))
            .collect();
        assert_eq!(order, expected_order);

        let mut included = pairs(&grid);
        included.sort();
        assert_eq!(
            included,
            vec![
                [(0, 0), (0, 1)],
                [(0, 0), (1, 0)],
                [(0, 1), (0, 2)],
                [(1, 0), (1, 1)],
                [(1, 0), (2, 0)],
                [(1, 1), (1, 2)],
                [(2, 0), (2, 1)],
                [(2, 1), (2, 2)],
            ]
        );
    }

    #[test]
    fn test_prim_breaks_ties_by_discovery_order() {
        let mut grid = Grid::build(2, |_, _| Some(7)).unwrap();

        let order = grid.prim(Coord::new(0, 0)).unwrap();

        // The start cell's bottom wall is discovered before its right wall.
        assert_eq!(
            order,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
            ]
        );

        let mut included = pairs(&grid);
        included.sort();
        assert_eq!(
            included,
            vec![
                [(0, 0), (0, 1)],
                [(0, 0), (1, 0)],
                [(1, 0), (1, 1)],
            ]
        );
    }

    #[test]
    fn test_prim_scans_the_whole_tree_not_just_the_newest_cell() {
        // Once (1, 0) joins, the cheapest frontier wall still belongs to the
        // start cell, not to the newest one.
        let mut grid = Grid::build(2, |owner, direction| match (owner.row, owner.col, direction) {
            (0, 0, Direction::Bottom) => Some(1),
            (0, 0, Direction::Right) => Some(2),
            (1, 0, Direction::Right) => Some(50),
            (0, 1, Direction::Bottom) => Some(3),
            _ => None,
        })
        .unwrap();

        let order = grid.prim(Coord::new(0, 0)).unwrap();

        assert_eq!(
            order,
            vec![
                Coord::new(0, 0),
                Coord::new(1, 0),
                Coord::new(0, 1),
                Coord::new(1, 1),
            ]
        );
        let expensive = grid
            .edge_between(Coord::new(1, 0), Coord::new(1, 1))
            .unwrap();
        assert!(!expensive.included);
    }

    #[test]
    fn test_prim_rejects_out_of_bounds_start() {
        let mut grid = Grid::build(3, |_, _| Some(1)).unwrap();

        let result = grid.prim(Coord::new(3, 0));

        assert_eq!(
            result,
            Err(MazeError::InvalidStart {
                start: Coord::new(3, 0),
                size: 3
            })
        );
        assert!(grid.vertices().iter().all(|v| !v.visited));
    }

    #[test]
    fn test_prim_reports_disconnected_graph() {
        // Cut both walls around the bottom-right corner.
        let mut grid = Grid::build(3, |owner, direction| {
            let cut = matches!(
                (owner.row, owner.col, direction),
                (1, 2, Direction::Bottom) | (2, 1, Direction::Right)
            );
            (!cut).then_some(4)
        })
        .unwrap();

        let result = grid.prim(Coord::new(0, 0));

        assert_eq!(
            result,
            Err(MazeError::DisconnectedGraph {
                reached: 8,
                total: 9
            })
        );
        assert!(!grid.is_visited(Coord::new(2, 2)));
    }

    #[test]
    fn test_prim_single_cell_needs_no_edges() {
        let mut grid = Grid::build(1, |_, _| Some(1)).unwrap();

        let order = grid.prim(Coord::new(0, 0)).unwrap();

        assert_eq!(order, vec![Coord::new(0, 0)]);
        assert!(grid.edges().is_empty());
        assert!(grid.is_visited(Coord::new(0, 0)));
    }
}
