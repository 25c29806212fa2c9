use crate::{Grid, Path};
use core::fmt;
use grid_util::point::Point;
use itertools::Itertools;

/// Summary of a solver result.
#[derive(Clone, Debug, PartialEq)]
pub enum SolutionReport {
    NoSolution,
    Solved {
        /// Cells on the path, endpoints included.
        length: usize,
        steps: usize,
        /// Manhattan distance between the endpoints.
        manhattan: i32,
        /// `manhattan / length`, at most 1 for moves in the 4-neighbourhood.
        efficiency: f64,
    },
}

impl SolutionReport {
    pub fn analyze(path: &Path) -> SolutionReport {
        match (path.start(), path.goal()) {
            (Some(start), Some(goal)) => {
                let manhattan = start.manhattan_distance(&goal);
                SolutionReport::Solved {
                    length: path.len(),
                    steps: path.steps(),
                    manhattan,
                    efficiency: manhattan as f64 / path.len() as f64,
                }
            }
            _ => SolutionReport::NoSolution,
        }
    }
    pub fn is_solved(&self) -> bool {
        matches!(self, SolutionReport::Solved { .. })
    }
}

impl fmt::Display for SolutionReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolutionReport::NoSolution => write!(f, "No solution found!"),
            SolutionReport::Solved {
                length,
                steps,
                manhattan,
                efficiency,
            } => write!(
                f,
                "Path length: {} cells ({} steps); Manhattan distance: {}; efficiency: {:.3}",
                length, steps, manhattan, efficiency
            ),
        }
    }
}

/// Checks that a path only visits passages and that each move goes to a 4-adjacent cell.
pub fn is_walkable(grid: &Grid, path: &Path) -> bool {
    path.iter().all(|p| grid.is_passage(*p))
        && path
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.manhattan_distance(b) == 1)
}

/// Structural properties of the passages in a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MazeStats {
    pub passages: usize,
    /// Number of unordered pairs of 4-adjacent passages.
    pub adjacent_pairs: usize,
    pub components: usize,
}

impl MazeStats {
    pub fn collect(grid: &Grid) -> MazeStats {
        let adjacent_pairs: usize = grid
            .passages()
            .map(|p| {
                [Point::new(p.x + 1, p.y), Point::new(p.x, p.y + 1)]
                    .into_iter()
                    .filter(|n| grid.is_passage(*n))
                    .count()
            })
            .sum();
        let components = grid.passage_components();
        MazeStats {
            passages: grid.passages().count(),
            adjacent_pairs,
            components: grid
                .passages()
                .map(|p| components.find(grid.get_ix_point(&p)))
                .unique()
                .count(),
        }
    }
    /// A perfect maze is a spanning tree: connected and without cycles.
    pub fn is_perfect(&self) -> bool {
        self.components == 1 && self.adjacent_pairs + 1 == self.passages
    }
}
