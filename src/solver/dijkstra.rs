use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use itertools::Itertools;
use log::debug;
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::solver::{reverse_path, FxIndexMap, GridSolver, Path, NO_PARENT};
use crate::{Grid, DIRECTIONS};

/// Cost of moving between two 4-adjacent passages. Weights must be positive for the search to
/// return shortest paths.
pub trait EdgeWeight {
    type Cost: Zero + Ord + Copy + Debug;

    fn weight(&self, from: &Point, to: &Point) -> Self::Cost;
}

/// Every move costs 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnitWeight;

impl EdgeWeight for UnitWeight {
    type Cost = u32;

    fn weight(&self, _: &Point, _: &Point) -> u32 {
        1
    }
}

impl<C, F> EdgeWeight for F
where
    F: Fn(&Point, &Point) -> C,
    C: Zero + Ord + Copy + Debug,
{
    type Cost = C;

    fn weight(&self, from: &Point, to: &Point) -> C {
        self(from, to)
    }
}

/// Sums the edge weights along a path. Empty and single-cell paths cost nothing.
pub fn path_cost<W: EdgeWeight>(path: &Path, weight: &W) -> W::Cost {
    path.iter()
        .tuple_windows()
        .fold(<W::Cost as Zero>::zero(), |acc, (from, to)| acc + weight.weight(from, to))
}

struct SmallestCostHolder<K> {
    cost: K,
    index: usize,
    node: Point,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cost.eq(&other.cost) && self.index == other.index
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest cost, ties go to the earliest discovered
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Dijkstra's algorithm with a binary heap frontier.
///
/// Relaxing an edge pushes a fresh heap entry instead of updating the old one; entries whose
/// cell has already been finalized are skipped when popped.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver<W = UnitWeight> {
    pub weight: W,
}

impl DijkstraSolver {
    pub fn new() -> DijkstraSolver {
        DijkstraSolver { weight: UnitWeight }
    }
}

impl<W: EdgeWeight> DijkstraSolver<W> {
    pub fn with_weight(weight: W) -> DijkstraSolver<W> {
        DijkstraSolver { weight }
    }
}

impl<W: EdgeWeight> GridSolver for DijkstraSolver<W> {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn traverse(&self, grid: &mut Grid, start: Point, goal: Point) -> Path {
        if !grid.is_passage(start) || !grid.is_passage(goal) {
            debug!("Dijkstra: {} or {} is a wall", start, goal);
            return Path::empty();
        }
        let mut to_see = BinaryHeap::new();
        to_see.push(SmallestCostHolder {
            cost: <W::Cost as Zero>::zero(),
            index: 0,
            node: start,
        });
        // Holds the parent index and best known distance; absent cells are at infinity
        let mut parents: FxIndexMap<Point, (usize, W::Cost)> = FxIndexMap::default();
        parents.insert(start, (NO_PARENT, <W::Cost as Zero>::zero()));
        while let Some(SmallestCostHolder { cost, index, node }) = to_see.pop() {
            if grid.is_visited(node) {
                continue;
            }
            grid.mark_visited(node);
            if node == goal {
                debug!("Dijkstra: reached {} at cost {:?}", goal, cost);
                return reverse_path(&parents, |&(p, _)| p, index);
            }
            for (dx, dy) in DIRECTIONS {
                let successor = Point::new(node.x + dx, node.y + dy);
                if !grid.is_passage(successor) || grid.is_visited(successor) {
                    continue;
                }
                let new_cost = cost + self.weight.weight(&node, &successor);
                let n = match parents.entry(successor) {
                    Vacant(e) => {
                        let n = e.index();
                        e.insert((index, new_cost));
                        n
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            e.insert((index, new_cost));
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };
                to_see.push(SmallestCostHolder {
                    cost: new_cost,
                    index: n,
                    node: successor,
                });
            }
        }
        Path::empty()
    }
}
