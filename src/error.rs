use thiserror::Error;

/// Errors surfaced at the boundary of maze generation and the terminal driver.
///
/// An unreachable goal is not an error: path finding reports it as `None`.
#[derive(Debug, Error)]
pub enum MazeError {
    #[error("invalid maze dimensions {width}x{height}: width and height must be integers between 1 and {max}", max = u16::MAX)]
    InvalidDimensions { width: String, height: String },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MazeError>;
