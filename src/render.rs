use crate::{Cell, Grid, Path};
use grid_util::point::Point;

pub const WALL: &str = "88";
pub const PASSAGE: &str = "  ";
pub const PATH: &str = "..";
pub const START: &str = "S ";
pub const GOAL: &str = "E ";

/// Draws the grid as text, two characters per cell, with the path overlaid.
pub fn render(grid: &Grid, path: &Path) -> String {
    let mut out = String::with_capacity((grid.width() * 2 + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let p = Point::new(x, y);
            let glyph = if path.start() == Some(p) {
                START
            } else if path.goal() == Some(p) {
                GOAL
            } else if path.contains(&p) {
                PATH
            } else {
                match grid.cell(p) {
                    Cell::Wall => WALL,
                    Cell::Passage => PASSAGE,
                }
            };
            out.push_str(glyph);
        }
        out.push('\n');
    }
    out
}
