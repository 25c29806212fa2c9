//! # maze_pathfinding
//!
//! Generates a perfect maze on a rectangular [Grid] with a randomized
//! [depth-first backtracker](https://en.wikipedia.org/wiki/Maze_generation_algorithm#Randomized_depth-first_search)
//! and solves it with
//! [breadth-first search](https://en.wikipedia.org/wiki/Breadth-first_search) and
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
//! Movement is restricted to the 4-neighbourhood. The Dijkstra solver accepts any
//! [EdgeWeight](solver::dijkstra::EdgeWeight); mazes carved here use unit weights.
//!
//! Besides the core, the crate ships the adapters that consume its output: a text
//! [renderer](render), a Graphviz [exporter](dot) and some [analysis] helpers.
pub mod analysis;
pub mod dot;
pub mod error;
pub mod generator;
pub mod grid;
pub mod render;
pub mod solver;

pub use error::{ExportError, MazeError};
pub use generator::MazeGenerator;
pub use grid::{Cell, Grid};
pub use solver::{solve_bfs, solve_dijkstra, GridSolver, Path};

/// Axis deltas in the order up, right, down, left.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

pub const DEFAULT_WIDTH: usize = 51;
pub const DEFAULT_HEIGHT: usize = 51;
