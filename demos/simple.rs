use maze_pathfinding::analysis::SolutionReport;
use maze_pathfinding::render::render;
use maze_pathfinding::{solve_bfs, Grid, MazeGenerator};

// Carves a 21x11 maze with a fixed seed and solves it from the entrance on the left
// edge (S) to the exit on the right edge (E). Walls are drawn as 88, the path as ..
fn main() {
    let mut grid = Grid::new(21, 11).unwrap();
    MazeGenerator::new().generate_seeded(&mut grid, 7).unwrap();
    let path = solve_bfs(&mut grid, 0, 1, 20, 9).unwrap();
    println!("{}", render(&grid, &path));
    println!("{}", SolutionReport::analyze(&path));
    let cells = path.into_inner();
    println!("Path through {} cells:", cells.len());
    for p in cells {
        println!("{:?}", p);
    }
}
