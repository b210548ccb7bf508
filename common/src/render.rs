//! HTML rendering of a finished maze: a canvas line drawing of the corridors
//! and a table whose cell borders are the walls.

use strum::IntoEnumIterator;

use crate::constants::{CELL_PIXELS, DOT_COLOR, DOT_RADIUS, WALL_PIXELS};
use crate::maze::{Coord, Direction, Maze};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub canvas: bool,
    pub edge_list: bool, // Diagnostic list of every corridor, per cell.
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            canvas: true,
            edge_list: false,
        }
    }
}

const HEAD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset='utf-8'>
    <meta http-equiv='X-UA-Compatible' content='IE=edge'>
    <title>Maze</title>
    <meta name='viewport' content='width=device-width, initial-scale=1'>
    <style>
        table {
            border-collapse: collapse;
            border: 0px solid black;
        }

        table td {
            min-width: 20px;
            height: 20px;
            padding: 0;
        }
    </style>
"#;

pub fn html_document(maze: &Maze, options: &RenderOptions) -> String {
    let mut html = String::from(HEAD);

    if options.canvas {
        html.push_str(&canvas_script(maze));
        html.push_str("</head>\n<body onload=\"draw();\">\n");
        let side = maze.size() * CELL_PIXELS + 2 * DOT_RADIUS;
        html.push_str(&format!(
            "    <canvas id=\"maze-canvas\" width=\"{}\" height=\"{}\"></canvas>\n",
            side, side
        ));
    } else {
        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&table(maze));

    if options.edge_list {
        html.push_str(&edge_list(maze));
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn pixel(coord: Coord) -> (usize, usize) {
    (
        coord.col.saturating_mul(CELL_PIXELS).saturating_add(DOT_RADIUS),
        coord.row.saturating_mul(CELL_PIXELS).saturating_add(DOT_RADIUS),
    )
}

fn canvas_script(maze: &Maze) -> String {
    let mut script = String::from(
        "    <script>
        function draw() {
            var canvas = document.getElementById('maze-canvas');
            if (!canvas.getContext) {
                return;
            }
            var ctx = canvas.getContext('2d');
",
    );

    for vertex in maze.grid.vertices() {
        let (x, y) = pixel(vertex.coord);
        script.push_str(&format!(
            "            ctx.beginPath();
            ctx.arc({}, {}, {}, 0, 2 * Math.PI, true);
            ctx.fillStyle = '{}';
            ctx.fill();
",
            x, y, DOT_RADIUS, DOT_COLOR
        ));
    }

    // Each corridor lives once in the edge arena, so it is stroked once.
    for edge in maze.grid.included_edges() {
        let (x1, y1) = pixel(edge.ends[0]);
        let (x2, y2) = pixel(edge.ends[1]);
        script.push_str(&format!(
            "            ctx.beginPath();
            ctx.moveTo({}, {});
            ctx.lineTo({}, {});
            ctx.stroke();
",
            x1, y1, x2, y2
        ));
    }

    script.push_str("        }\n    </script>\n");
    script
}

fn table(maze: &Maze) -> String {
    let mut html = String::from("    <table style=\"border-collapse: collapse;\">\n");

    for row in 0..maze.size() {
        html.push_str("        <tr>");
        for col in 0..maze.size() {
            let openings = maze.openings(Coord::new(row, col));
            let style = Direction::iter()
                .map(|direction| {
                    let width = if openings.is_open(direction) {
                        0
                    } else {
                        WALL_PIXELS
                    };
                    format!("border-{}: {}px solid black;", direction, width)
                })
                .collect::<Vec<String>>()
                .join(" ");
            html.push_str(&format!("<td style=\"{}\"></td>", style));
        }
        html.push_str("</tr>\n");
    }

    html.push_str("    </table>\n");
    html
}

fn edge_list(maze: &Maze) -> String {
    let mut html = String::new();

    for vertex in maze.grid.vertices() {
        for connection in &vertex.connections {
            let Some(edge) = maze.grid.edge(connection.edge) else {
                continue;
            };
            if edge.included {
                html.push_str(&format!(
                    "    <p>Vertex: {} Direction: {} Edge: {}</p>\n",
                    vertex.coord, connection.direction, edge.label
                ));
            }
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Grid;

    // Right walls are cheaper than bottom walls, so from (0, 0) the tree
    // is: (0,0)-(0,1), (0,0)-(1,0), (1,0)-(1,1).
    fn two_by_two() -> Maze {
        let grid = Grid::build(2, |_, direction| match direction {
            Direction::Right => Some(1),
            _ => Some(2),
        })
        .unwrap();
        Maze::from_grid(grid, Coord::new(0, 0)).unwrap()
    }

    #[test]
    fn test_table_has_one_cell_per_vertex() {
        let maze = generate_for_test(5);
        let html = html_document(&maze, &RenderOptions::default());

        assert_eq!(html.matches("<tr>").count(), 5);
        assert_eq!(html.matches("<td ").count(), 25);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_table_borders_follow_corridors() {
        let html = table(&two_by_two());

        let cells: Vec<&str> = html.split("<td ").skip(1).collect();
        assert_eq!(cells.len(), 4);

        // (0, 0): open right and bottom.
        assert!(cells[0].contains("border-top: 2px"));
        assert!(cells[0].contains("border-bottom: 0px"));
        assert!(cells[0].contains("border-left: 2px"));
        assert!(cells[0].contains("border-right: 0px"));

        // (0, 1): open left only.
        assert!(cells[1].contains("border-left: 0px"));
        assert!(cells[1].contains("border-bottom: 2px"));

        // (1, 1): open left only.
        assert!(cells[3].contains("border-left: 0px"));
        assert!(cells[3].contains("border-top: 2px"));
    }

    #[test]
    fn test_canvas_strokes_each_corridor_once() {
        let maze = generate_for_test(6);
        let html = html_document(&maze, &RenderOptions::default());

        assert_eq!(html.matches("ctx.stroke();").count(), 6 * 6 - 1);
        assert_eq!(html.matches("ctx.arc(").count(), 36);
        assert!(html.contains("<body onload=\"draw();\">"));
        assert!(html.contains("width=\"124\" height=\"124\""));
    }

    #[test]
    fn test_canvas_line_coordinates() {
        let script = canvas_script(&two_by_two());

        assert!(script.contains("ctx.moveTo(2, 2);\n            ctx.lineTo(22, 2);"));
        assert!(script.contains("ctx.moveTo(2, 2);\n            ctx.lineTo(2, 22);"));
        assert!(script.contains("ctx.moveTo(2, 22);\n            ctx.lineTo(22, 22);"));
    }

    #[test]
    fn test_options_toggle_canvas_and_edge_list() {
        let maze = two_by_two();
        let options = RenderOptions {
            canvas: false,
            edge_list: true,
        };

        let html = html_document(&maze, &options);

        assert!(!html.contains("<canvas"));
        assert!(!html.contains("<script>"));
        // Each corridor is listed from both of its cells.
        assert_eq!(html.matches("<p>Vertex:").count(), 6);
        assert!(html.contains("<p>Vertex: 0,0 Direction: right Edge: 0,0-0,1:1</p>"));
        assert!(html.contains("<p>Vertex: 0,1 Direction: left Edge: 0,0-0,1:1</p>"));
    }

    fn generate_for_test(size: usize) -> Maze {
        crate::maze::generate_maze(size, Some(11)).unwrap()
    }
}
