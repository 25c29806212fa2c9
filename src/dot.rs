//! Graphviz export of a solved maze: one node per cell, the solution drawn as a chain of thick
//! forward edges and the maze connectivity as faint undirected edges.
use crate::{ExportError, Grid, Path};
use core::fmt;
use fxhash::FxHashMap;
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use std::fs;

/// Appearance of one exported graph.
#[derive(Clone, Debug)]
pub struct DotStyle {
    pub graph_name: String,
    /// Fill colour of interior path cells.
    pub path_color: String,
    /// Colour of the solution edges.
    pub edge_color: String,
}

impl DotStyle {
    pub fn bfs() -> DotStyle {
        DotStyle {
            graph_name: "bfs_maze_solution".to_owned(),
            path_color: "gold".to_owned(),
            edge_color: "darkgreen".to_owned(),
        }
    }
    pub fn dijkstra() -> DotStyle {
        DotStyle {
            graph_name: "dijkstra_maze_solution".to_owned(),
            path_color: "orange".to_owned(),
            edge_color: "orange".to_owned(),
        }
    }
}

struct DotGraph<'a> {
    grid: &'a Grid,
    path: &'a Path,
    style: &'a DotStyle,
}

fn node_name(p: &Point) -> String {
    format!("node_{}_{}", p.x, p.y)
}

impl fmt::Display for DotGraph<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let on_path: FxHashMap<Point, usize> =
            self.path.iter().enumerate().map(|(i, p)| (*p, i)).collect();
        let last = self.path.len().saturating_sub(1);

        writeln!(f, "digraph {} {{", self.style.graph_name)?;
        writeln!(f, "rankdir = TB;")?;
        writeln!(f, "node [shape = box, style = filled];")?;
        writeln!(f, "graph [nodesep = 0.5, ranksep = 0.5];")?;
        writeln!(f)?;
        for y in 0..self.grid.height() as i32 {
            write!(f, "{{ rank = same; ")?;
            for x in 0..self.grid.width() as i32 {
                let p = Point::new(x, y);
                let color = if !self.grid.is_passage(p) {
                    "black"
                } else {
                    match on_path.get(&p) {
                        Some(0) => "green",
                        Some(&i) if i == last => "red",
                        Some(_) => self.style.path_color.as_str(),
                        None => "white",
                    }
                };
                let font_color = if color == "black" { "white" } else { "black" };
                write!(
                    f,
                    "{} [label=\"({},{})\", fillcolor=\"{}\", fontcolor=\"{}\"]; ",
                    node_name(&p),
                    x,
                    y,
                    color,
                    font_color
                )?;
            }
            writeln!(f, "}}")?;
        }
        writeln!(f)?;

        if !self.path.is_empty() {
            writeln!(
                f,
                "edge [color=\"{}\", penwidth=3.0, dir=\"forward\"];",
                self.style.edge_color
            )?;
            for (a, b) in self.path.iter().tuple_windows() {
                writeln!(f, "{} -> {};", node_name(a), node_name(b))?;
            }
        }

        writeln!(f, "edge [color=\"lightgray\", penwidth=0.5, dir=\"none\"];")?;
        for p in self.grid.passages() {
            for n in [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)] {
                if self.grid.is_passage(n) {
                    writeln!(f, "{} -> {};", node_name(&p), node_name(&n))?;
                }
            }
        }
        write!(f, "}}")
    }
}

/// Renders the grid and path as a Graphviz `digraph`.
pub fn to_dot(grid: &Grid, path: &Path, style: &DotStyle) -> String {
    DotGraph { grid, path, style }.to_string()
}

/// Writes [to_dot] output to `file`.
pub fn write_dot<P: AsRef<std::path::Path>>(
    file: P,
    grid: &Grid,
    path: &Path,
    style: &DotStyle,
) -> Result<(), ExportError> {
    let file = file.as_ref();
    fs::write(file, to_dot(grid, path, style)).map_err(|source| {
        ExportError::OutputUnavailable {
            path: file.to_path_buf(),
            source,
        }
    })?;
    info!("Wrote {} graph to {}", style.graph_name, file.display());
    Ok(())
}
