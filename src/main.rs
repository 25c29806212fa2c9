use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use maze_pathfinding::analysis::SolutionReport;
use maze_pathfinding::dot::{write_dot, DotStyle};
use maze_pathfinding::generator::{entrance, exit};
use maze_pathfinding::render::render;
use maze_pathfinding::solver::{bfs::BfsSolver, dijkstra::DijkstraSolver};
use maze_pathfinding::{Grid, GridSolver, MazeGenerator, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "maze_pathfinding",
    version,
    about = "Generates a perfect maze and solves it with BFS and Dijkstra"
)]
struct Cli {
    /// Maze width in cells, odd and at least 5
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Maze height in cells, odd and at least 5
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Seed for reproducible mazes. A random maze is carved if omitted.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory receiving bfsGraph.gv and dijkstraGraph.gv
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Skip printing the maze and solutions
    #[arg(long)]
    no_render: bool,

    /// Skip writing the Graphviz files
    #[arg(long)]
    no_export: bool,
}

fn run_solver<S: GridSolver>(
    cli: &Cli,
    solver: &S,
    grid: &mut Grid,
    style: &DotStyle,
    file_name: &str,
) -> Result<()> {
    let (start, goal) = (entrance(grid), exit(grid));
    let before = Instant::now();
    let path = solver
        .solve(grid, start, goal)
        .with_context(|| format!("{} solve", solver.name()))?;
    info!("{} finished in {:.2?}", solver.name(), before.elapsed());

    if !cli.no_render {
        println!("{} solution:", solver.name());
        println!("{}", render(grid, &path));
    }
    println!("{}: {}", solver.name(), SolutionReport::analyze(&path));
    if !cli.no_export {
        write_dot(cli.output_dir.join(file_name), grid, &path, style)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut grid = Grid::new(cli.width, cli.height).context("create grid")?;
    let generator = MazeGenerator::new();
    let before = Instant::now();
    let generated = match cli.seed {
        Some(seed) => generator.generate_seeded(&mut grid, seed),
        None => generator.generate_random(&mut grid),
    };
    generated.context("generate maze")?;
    info!("Generated maze in {:.2?}", before.elapsed());

    if !cli.no_render {
        println!("{}", render(&grid, &Default::default()));
    }
    run_solver(&cli, &BfsSolver, &mut grid, &DotStyle::bfs(), "bfsGraph.gv")?;
    println!("\n{}\n", "=".repeat(50));
    run_solver(
        &cli,
        &DijkstraSolver::new(),
        &mut grid,
        &DotStyle::dijkstra(),
        "dijkstraGraph.gv",
    )?;
    Ok(())
}
