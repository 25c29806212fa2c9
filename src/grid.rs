use crate::{MazeError, DIRECTIONS};
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use petgraph::unionfind::UnionFind;
use std::str::FromStr;

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Passage,
}

impl Cell {
    pub fn is_passage(self) -> bool {
        matches!(self, Cell::Passage)
    }
}

/// [Grid] owns the wall/passage matrix of a maze together with a parallel `visited` matrix that
/// serves as scratch space for one traversal at a time. Both are stored row-major.
///
/// Coordinates are [Point]s; every accessor taking one panics when it lies outside the grid, use
/// [in_bounds](Self::in_bounds) or [is_passage](Self::is_passage) to probe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    visited: Vec<bool>,
}

impl Grid {
    /// Creates a grid filled with walls and nothing visited.
    pub fn new(width: usize, height: usize) -> Result<Grid, MazeError> {
        // Every cell must be addressable by a Point
        let max = i32::MAX as usize;
        let size = match width.checked_mul(height) {
            Some(size) if (1..=max).contains(&width) && (1..=max).contains(&height) => size,
            _ => return Err(MazeError::InvalidDimensions { width, height }),
        };
        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Wall; size],
            visited: vec![false; size],
        })
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Pure bounds check.
    pub fn is_valid(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }
    pub fn in_bounds(&self, point: Point) -> bool {
        self.is_valid(point.x, point.y)
    }
    /// Fails with [MazeError::OutOfBounds] if the point lies outside the grid.
    pub fn check_bounds(&self, point: Point) -> Result<(), MazeError> {
        if self.in_bounds(point) {
            Ok(())
        } else {
            Err(MazeError::OutOfBounds { point })
        }
    }
    fn ix(&self, point: Point) -> usize {
        assert!(
            self.in_bounds(point),
            "{} lies outside the {}x{} grid",
            point,
            self.width,
            self.height
        );
        point.y as usize * self.width + point.x as usize
    }
    /// Row-major index of a point, as used by [passage_components](Self::passage_components).
    pub fn get_ix_point(&self, point: &Point) -> usize {
        self.ix(*point)
    }
    pub fn cell(&self, point: Point) -> Cell {
        self.cells[self.ix(point)]
    }
    /// Non-panicking variant of [cell](Self::cell).
    pub fn get(&self, point: Point) -> Option<Cell> {
        self.in_bounds(point).then(|| self.cell(point))
    }
    pub fn set_cell(&mut self, point: Point, cell: Cell) {
        let ix = self.ix(point);
        self.cells[ix] = cell;
    }
    /// Whether a point can be stepped on. Points outside the grid count as walls.
    pub fn is_passage(&self, point: Point) -> bool {
        self.get(point).map_or(false, Cell::is_passage)
    }
    /// Overwrites every cell, leaving the visited state untouched.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn is_visited(&self, point: Point) -> bool {
        self.visited[self.ix(point)]
    }
    pub fn mark_visited(&mut self, point: Point) {
        let ix = self.ix(point);
        self.visited[ix] = true;
    }
    /// Clears the scratch state left behind by a previous traversal.
    pub fn reset_visited(&mut self) {
        self.visited.fill(false);
    }
    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// All points of the grid in row-major order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(0..self.height as i32, 0..self.width as i32).map(|(y, x)| Point::new(x, y))
    }
    /// All passage points in row-major order.
    pub fn passages(&self) -> impl Iterator<Item = Point> + '_ {
        self.points().filter(move |p| self.cell(*p).is_passage())
    }
    /// The 4-neighbourhood of a point restricted to passages, in the order of [DIRECTIONS].
    pub fn passage_neighbours(&self, point: Point) -> impl Iterator<Item = Point> + '_ {
        DIRECTIONS
            .iter()
            .map(move |&(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(move |n| self.is_passage(*n))
    }

    /// Builds a [UnionFind] structure over the cell indices in which 4-adjacent passages share a
    /// component.
    pub fn passage_components(&self) -> UnionFind<usize> {
        let mut components = UnionFind::new(self.width * self.height);
        for point in self.passages() {
            let ix = self.ix(point);
            // Right and down are enough to visit each adjacent pair once
            for n in [Point::new(point.x + 1, point.y), Point::new(point.x, point.y + 1)] {
                if self.is_passage(n) {
                    components.union(ix, self.ix(n));
                }
            }
        }
        components
    }
    /// Checks if two passages are connected. Always false if either is a wall or out of bounds.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.is_passage(*start) || !self.is_passage(*goal) {
            return false;
        }
        self.passage_components()
            .equiv(self.ix(*start), self.ix(*goal))
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parses a layout with one line per row, where `#` is a wall and a space or `.` a passage.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut grid = Grid::new(width, rows.len())
            .map_err(|_| MazeError::InvalidLayout("layout is empty".to_owned()))?;
        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MazeError::InvalidLayout(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }
            for (x, c) in row.chars().enumerate() {
                let cell = match c {
                    '#' => Cell::Wall,
                    ' ' | '.' => Cell::Passage,
                    other => {
                        return Err(MazeError::InvalidLayout(format!(
                            "unexpected character {:?} at ({},{})",
                            other, x, y
                        )))
                    }
                };
                grid.set_cell(Point::new(x as i32, y as i32), cell);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height as i32 {
            let row = (0..self.width as i32)
                .map(|x| match self.cell(Point::new(x, y)) {
                    Cell::Wall => '#',
                    Cell::Passage => ' ',
                })
                .collect::<String>();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
