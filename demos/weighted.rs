use grid_util::point::Point;
use maze_pathfinding::render::render;
use maze_pathfinding::solver::bfs::BfsSolver;
use maze_pathfinding::solver::dijkstra::{path_cost, DijkstraSolver};
use maze_pathfinding::{Grid, GridSolver};

// In this example an open room has a costly band in its middle column:
//  _______
// |   ~   |
// |S  ~  E|
// |   ~   |
// |       |
//  _______
// where ~ costs 10 to enter. BFS walks straight through, Dijkstra goes around.

fn main() {
    let mut grid: Grid = ["       ", "       ", "       ", "       "]
        .join("\n")
        .parse()
        .unwrap();
    let weight = |_: &Point, to: &Point| if to.x == 3 && to.y < 3 { 10u32 } else { 1 };
    let start = Point::new(0, 1);
    let goal = Point::new(6, 1);

    let straight = BfsSolver.solve(&mut grid, start, goal).unwrap();
    println!("BFS, cost {}:", path_cost(&straight, &weight));
    println!("{}", render(&grid, &straight));

    let solver = DijkstraSolver::with_weight(weight);
    let around = solver.solve(&mut grid, start, goal).unwrap();
    println!("Dijkstra, cost {}:", path_cost(&around, &solver.weight));
    println!("{}", render(&grid, &around));
}
