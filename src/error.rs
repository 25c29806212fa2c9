use grid_util::point::Point;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Contract violations raised by the grid, the generator and the solvers. Each is reported
/// before the offending operation touches the grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid grid dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },
    #[error("coordinate {point} is outside the grid")]
    OutOfBounds { point: Point },
    #[error("cannot carve a maze into a {width}x{height} grid: both dimensions must be odd and at least 5")]
    UnsupportedMazeDimensions { width: usize, height: usize },
    #[error("invalid grid layout: {0}")]
    InvalidLayout(String),
}

/// Failures of the output adapters. The core never produces these.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("cannot write {}: {source}", .path.display())]
    OutputUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
