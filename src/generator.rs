use crate::{Cell, Grid, MazeError, DIRECTIONS};
use grid_util::point::Point;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Carves a perfect maze using the randomized depth-first backtracker.
///
/// Rooms sit on odd coordinates; the even coordinates between two rooms are the walls that get
/// opened when the backtracker moves from one room to the next. Every room is visited exactly
/// once, so the passages form a spanning tree over the rooms.
#[derive(Clone, Debug)]
pub struct MazeGenerator {
    /// Room the backtracker starts from. Even coordinates are moved to the previous odd one.
    pub start: Point,
    /// Opens the [entrance] and [exit] cells on the outer wall after carving.
    pub open_boundary: bool,
}

impl Default for MazeGenerator {
    fn default() -> MazeGenerator {
        MazeGenerator {
            start: Point::new(1, 1),
            open_boundary: true,
        }
    }
}

/// Canonical start of a generated maze, on the left edge.
pub fn entrance(_grid: &Grid) -> Point {
    Point::new(0, 1)
}

/// Canonical goal of a generated maze, on the right edge.
pub fn exit(grid: &Grid) -> Point {
    Point::new(grid.width() as i32 - 1, grid.height() as i32 - 2)
}

fn room_coordinate(v: i32) -> i32 {
    let v = v.max(1);
    if v % 2 == 0 {
        v - 1
    } else {
        v
    }
}

impl MazeGenerator {
    pub fn new() -> MazeGenerator {
        MazeGenerator::default()
    }
    pub fn with_start(start: Point) -> MazeGenerator {
        MazeGenerator {
            start,
            ..MazeGenerator::default()
        }
    }

    /// Carves a maze into the grid, discarding whatever passages it held before. Both dimensions
    /// must be odd and at least 5 so that the entrance and exit land next to a room.
    pub fn generate<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Result<(), MazeError> {
        let (width, height) = (grid.width(), grid.height());
        if width < 5 || height < 5 || width % 2 == 0 || height % 2 == 0 {
            return Err(MazeError::UnsupportedMazeDimensions { width, height });
        }
        grid.check_bounds(self.start)?;
        let start = Point::new(room_coordinate(self.start.x), room_coordinate(self.start.y));
        debug!("Carving {}x{} maze from room {}", width, height, start);

        grid.fill(Cell::Wall);
        grid.reset_visited();
        let mut stack = Vec::with_capacity((width / 2) * (height / 2));
        grid.set_cell(start, Cell::Passage);
        stack.push(start);
        let mut rooms = 1;
        while let Some(&current) = stack.last() {
            let mut directions = DIRECTIONS;
            directions.shuffle(rng);
            let next = directions.iter().find_map(|&(dx, dy)| {
                let room = Point::new(current.x + 2 * dx, current.y + 2 * dy);
                (grid.in_bounds(room) && grid.cell(room) == Cell::Wall)
                    .then(|| (Point::new(current.x + dx, current.y + dy), room))
            });
            match next {
                Some((wall, room)) => {
                    grid.set_cell(wall, Cell::Passage);
                    grid.set_cell(room, Cell::Passage);
                    stack.push(room);
                    rooms += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        if self.open_boundary {
            let (entry, goal) = (entrance(grid), exit(grid));
            grid.set_cell(entry, Cell::Passage);
            grid.set_cell(goal, Cell::Passage);
        }
        info!("Carved {} rooms into a {}x{} maze", rooms, width, height);
        Ok(())
    }

    /// [generate](Self::generate) with a [StdRng] seeded from `seed`, for reproducible mazes.
    pub fn generate_seeded(&self, grid: &mut Grid, seed: u64) -> Result<(), MazeError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate(grid, &mut rng)
    }

    /// [generate](Self::generate) with the thread-local generator.
    pub fn generate_random(&self, grid: &mut Grid) -> Result<(), MazeError> {
        self.generate(grid, &mut rand::thread_rng())
    }
}
