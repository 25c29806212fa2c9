use grid_util::point::Point;
use log::debug;
use std::collections::VecDeque;

use crate::solver::{reverse_path, FxIndexMap, GridSolver, Path, NO_PARENT};
use crate::{Grid, DIRECTIONS};

/// Level-order search with a FIFO frontier. Every move costs the same, so the first time the
/// goal is dequeued it has been reached with the fewest possible moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn traverse(&self, grid: &mut Grid, start: Point, goal: Point) -> Path {
        if !grid.is_passage(start) || !grid.is_passage(goal) {
            debug!("BFS: {} or {} is a wall", start, goal);
            return Path::empty();
        }
        let mut parents: FxIndexMap<Point, usize> = FxIndexMap::default();
        parents.insert(start, NO_PARENT);
        let mut frontier = VecDeque::from([(0, start)]);
        // Cells are marked when enqueued so that none enters the frontier twice
        grid.mark_visited(start);
        while let Some((index, node)) = frontier.pop_front() {
            if node == goal {
                return reverse_path(&parents, |&p| p, index);
            }
            for (dx, dy) in DIRECTIONS {
                let successor = Point::new(node.x + dx, node.y + dy);
                if grid.is_passage(successor) && !grid.is_visited(successor) {
                    grid.mark_visited(successor);
                    let (n, _) = parents.insert_full(successor, index);
                    frontier.push_back((n, successor));
                }
            }
        }
        Path::empty()
    }
}
