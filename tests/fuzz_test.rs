/// Fuzzes the solvers by checking on many random grids that a path is found exactly when the goal
/// is on the same connected component as the start, and that both solvers agree with a reference
/// layer-by-layer distance computation.
use grid_util::point::Point;
use maze_pathfinding::analysis::{is_walkable, MazeStats};
use maze_pathfinding::generator::{entrance, exit};
use maze_pathfinding::solver::bfs::BfsSolver;
use maze_pathfinding::solver::dijkstra::{path_cost, DijkstraSolver};
use maze_pathfinding::{Cell, Grid, GridSolver, MazeGenerator};
use rand::prelude::*;
use std::collections::{HashMap, HashSet};

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new(w, h).unwrap();
    for p in grid.points().collect::<Vec<_>>() {
        let cell = if rng.gen_bool(0.4) {
            Cell::Wall
        } else {
            Cell::Passage
        };
        grid.set_cell(p, cell);
    }
    grid
}

fn random_maze(rng: &mut StdRng) -> Grid {
    let w = 2 * rng.gen_range(2..16) + 1;
    let h = 2 * rng.gen_range(2..16) + 1;
    let mut grid = Grid::new(w, h).unwrap();
    MazeGenerator::new().generate(&mut grid, rng).unwrap();
    grid
}

/// Number of moves from start to goal, counted one frontier layer at a time.
fn reference_distance(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
    if !grid.is_passage(start) || !grid.is_passage(goal) {
        return None;
    }
    let mut seen = HashSet::from([start]);
    let mut layer = vec![start];
    let mut depth = 0;
    while !layer.is_empty() {
        if layer.contains(&goal) {
            return Some(depth);
        }
        layer = layer
            .iter()
            .flat_map(|p| grid.passage_neighbours(*p))
            .filter(|n| seen.insert(*n))
            .collect();
        depth += 1;
    }
    None
}

/// Cheapest cost from start to every reachable passage, relaxing all edges until nothing changes.
fn bellman_ford<F: Fn(&Point, &Point) -> u64>(
    grid: &Grid,
    start: Point,
    weight: F,
) -> HashMap<Point, u64> {
    let edges: Vec<(Point, Point)> = grid
        .passages()
        .flat_map(|p| grid.passage_neighbours(p).map(move |n| (p, n)))
        .collect();
    let mut dist = HashMap::from([(start, 0)]);
    let mut changed = true;
    while changed {
        changed = false;
        for (from, to) in &edges {
            let Some(&d) = dist.get(from) else {
                continue;
            };
            let candidate = d + weight(from, to);
            if dist.get(to).map_or(true, |&old| candidate < old) {
                dist.insert(*to, candidate);
                changed = true;
            }
        }
    }
    dist
}

fn visualize_grid(grid: &Grid, start: &Point, end: &Point) {
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if grid.is_passage(p) {
                print!(".");
            } else {
                print!("#");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        grid.set_cell(start, Cell::Passage);
        grid.set_cell(end, Cell::Passage);
        let reachable = grid.reachable(&start, &end);
        let bfs = BfsSolver.solve(&mut grid, start, end).unwrap();
        let dijkstra = DijkstraSolver::new().solve(&mut grid, start, end).unwrap();
        // Show the grid if the solvers disagree with the components
        if bfs.is_empty() == reachable || dijkstra.is_empty() == reachable {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(!bfs.is_empty(), reachable);
        assert_eq!(!dijkstra.is_empty(), reachable);
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let expected = reference_distance(&grid, start, end);
        let bfs = BfsSolver.solve(&mut grid, start, end).unwrap();
        let dijkstra = DijkstraSolver::new().solve(&mut grid, start, end).unwrap();
        match expected {
            Some(distance) => {
                assert_eq!(bfs.steps(), distance);
                assert_eq!(dijkstra.steps(), distance);
                assert!(is_walkable(&grid, &bfs));
                assert!(is_walkable(&grid, &dijkstra));
                assert_eq!((bfs.start(), bfs.goal()), (Some(start), Some(end)));
                assert_eq!((dijkstra.start(), dijkstra.goal()), (Some(start), Some(end)));
            }
            None => {
                assert!(bfs.is_empty());
                assert!(dijkstra.is_empty());
            }
        }
    }
}

#[test]
fn generated_mazes_are_perfect() {
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..200 {
        let grid = random_maze(&mut rng);
        let stats = MazeStats::collect(&grid);
        assert_eq!(stats.components, 1);
        assert_eq!(stats.adjacent_pairs + 1, stats.passages);
        // Every passage is reachable from the start room
        let start = Point::new(1, 1);
        for p in grid.passages() {
            assert!(reference_distance(&grid, start, p).is_some());
        }
    }
}

#[test]
fn solvers_agree_on_generated_mazes() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let mut grid = random_maze(&mut rng);
        let passages: Vec<Point> = grid.passages().collect();
        let mut pairs = vec![(entrance(&grid), exit(&grid))];
        for _ in 0..5 {
            pairs.push((
                *passages.choose(&mut rng).unwrap(),
                *passages.choose(&mut rng).unwrap(),
            ));
        }
        for (start, goal) in pairs {
            let expected = reference_distance(&grid, start, goal).unwrap();
            let bfs = BfsSolver.solve(&mut grid, start, goal).unwrap();
            let dijkstra = DijkstraSolver::new().solve(&mut grid, start, goal).unwrap();
            assert_eq!(bfs.steps(), expected);
            assert_eq!(dijkstra.steps(), expected);
            // A perfect maze has a single simple path between two passages
            assert_eq!(bfs, dijkstra);
        }
    }
}

#[test]
fn fuzz_weighted() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(4);
    for _ in 0..N_GRIDS {
        let mut grid = random_grid(N, N, &mut rng);
        // Entering a cell costs between 1 and 9
        let costs: Vec<u64> = (0..N * N).map(|_| rng.gen_range(1..10)).collect();
        let weight = |_: &Point, to: &Point| costs[to.y as usize * N + to.x as usize];
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let end = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        grid.set_cell(start, Cell::Passage);
        grid.set_cell(end, Cell::Passage);

        let expected = bellman_ford(&grid, start, weight).get(&end).copied();
        let path = DijkstraSolver::with_weight(weight)
            .solve(&mut grid, start, end)
            .unwrap();
        match expected {
            Some(cost) => {
                if path_cost(&path, &weight) != cost {
                    visualize_grid(&grid, &start, &end);
                }
                assert_eq!(path_cost(&path, &weight), cost);
                assert!(is_walkable(&grid, &path));
                assert_eq!((path.start(), path.goal()), (Some(start), Some(end)));
            }
            None => assert!(path.is_empty()),
        }
    }
}
