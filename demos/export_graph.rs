use maze_pathfinding::dot::{write_dot, DotStyle};
use maze_pathfinding::generator::{entrance, exit};
use maze_pathfinding::solver::dijkstra::DijkstraSolver;
use maze_pathfinding::{Grid, GridSolver, MazeGenerator};

// Writes the Dijkstra solution of a small maze to maze.gv, render it with
// `dot -Tpng maze.gv -o maze.png`.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let mut grid = Grid::new(11, 11)?;
    MazeGenerator::new().generate_seeded(&mut grid, 2024)?;
    let (start, goal) = (entrance(&grid), exit(&grid));
    let path = DijkstraSolver::new().solve(&mut grid, start, goal)?;
    write_dot("maze.gv", &grid, &path, &DotStyle::dijkstra())?;
    println!("{}", grid);
    Ok(())
}
