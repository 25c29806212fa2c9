use crate::{Grid, MazeError};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexMap;
use log::info;
use std::ops::Deref;

pub mod bfs;
pub mod dijkstra;

use bfs::BfsSolver;
use dijkstra::DijkstraSolver;

pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index recorded for the start of a search.
pub(crate) const NO_PARENT: usize = usize::MAX;

/// Follows parent indices from `goal` back to the start and returns the route start first.
pub(crate) fn reverse_path<V, F>(parents: &FxIndexMap<Point, V>, mut parent: F, goal: usize) -> Path
where
    F: FnMut(&V) -> usize,
{
    let mut i = goal;
    let mut path: Vec<Point> = std::iter::from_fn(|| {
        parents.get_index(i).map(|(node, value)| {
            i = parent(value);
            *node
        })
    })
    .collect();
    path.reverse();
    Path(path)
}

/// Ordered sequence of cells from start to goal, both inclusive. An empty [Path] means that no
/// route exists, which is a regular outcome and not an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path(Vec<Point>);

impl Path {
    pub fn empty() -> Path {
        Path(Vec::new())
    }
    pub fn start(&self) -> Option<Point> {
        self.0.first().copied()
    }
    pub fn goal(&self) -> Option<Point> {
        self.0.last().copied()
    }
    /// Number of moves, one less than the number of cells.
    pub fn steps(&self) -> usize {
        self.0.len().saturating_sub(1)
    }
    pub fn as_slice(&self) -> &[Point] {
        &self.0
    }
    pub fn into_inner(self) -> Vec<Point> {
        self.0
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.0
    }
}

impl From<Vec<Point>> for Path {
    fn from(points: Vec<Point>) -> Path {
        Path(points)
    }
}

impl IntoIterator for Path {
    type Item = Point;
    type IntoIter = std::vec::IntoIter<Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A shortest-path search over the passages of a [Grid], moving in the 4-neighbourhood.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Runs the search itself. Expects both points to be in bounds and the visited state to be
    /// clear; [solve](Self::solve) takes care of both.
    fn traverse(&self, grid: &mut Grid, start: Point, goal: Point) -> Path;

    /// Computes a shortest path from start to goal. Fails with [MazeError::OutOfBounds] before
    /// touching the grid if either point lies outside it; an unreachable goal gives an empty
    /// [Path].
    fn solve(&self, grid: &mut Grid, start: Point, goal: Point) -> Result<Path, MazeError> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        grid.reset_visited();
        let path = self.traverse(grid, start, goal);
        if path.is_empty() {
            info!("{}: {} is not reachable from {}", self.name(), goal, start);
        } else {
            info!(
                "{}: found a path of {} steps from {} to {}, {} cells visited",
                self.name(),
                path.steps(),
                start,
                goal,
                grid.visited_count()
            );
        }
        Ok(path)
    }
}

/// Breadth-first search from `(start_x, start_y)` to `(end_x, end_y)`.
pub fn solve_bfs(
    grid: &mut Grid,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
) -> Result<Path, MazeError> {
    BfsSolver.solve(grid, Point::new(start_x, start_y), Point::new(end_x, end_y))
}

/// Dijkstra search with unit edge weights from `(start_x, start_y)` to `(end_x, end_y)`.
pub fn solve_dijkstra(
    grid: &mut Grid,
    start_x: i32,
    start_y: i32,
    end_x: i32,
    end_y: i32,
) -> Result<Path, MazeError> {
    DijkstraSolver::new().solve(grid, Point::new(start_x, start_y), Point::new(end_x, end_y))
}
