pub mod cell;
mod grid;

pub use cell::Cell;
pub use grid::Grid;

use crate::error::{MazeError, Result};

/// Validated maze dimensions. Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    /// Largest accepted side length.
    pub const MAX: u16 = u16::MAX;

    pub fn new(width: u16, height: u16) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: width.to_string(),
                height: height.to_string(),
            });
        }
        Ok(Dimensions { width, height })
    }

    /// Parses user-supplied width and height.
    /// Anything that is not a positive integer no larger than [`Dimensions::MAX`] is rejected.
    pub fn parse(width: &str, height: &str) -> Result<Self> {
        let invalid = || MazeError::InvalidDimensions {
            width: width.to_string(),
            height: height.to_string(),
        };
        let w = width.trim().parse::<u16>().map_err(|_| invalid())?;
        let h = height.trim().parse::<u16>().map_err(|_| invalid())?;
        Dimensions::new(w, h).map_err(|_| invalid())
    }

    pub(crate) fn from_grid(width: u16, height: u16) -> Self {
        Dimensions { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// The corner opposite the origin, `(width - 1, height - 1)`.
    pub fn far_corner(&self) -> Cell {
        Cell::new(self.width as i32 - 1, self.height as i32 - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            Dimensions::new(0, 5),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert!(Dimensions::new(5, 0).is_err());
        assert!(Dimensions::new(1, 1).is_ok());
    }

    #[test]
    fn test_parse() {
        let dims = Dimensions::parse(" 21", "13 ").unwrap();
        assert_eq!((dims.width(), dims.height()), (21, 13));
        assert_eq!(dims.far_corner(), Cell::new(20, 12));
        assert!(Dimensions::parse("-3", "5").is_err());
        assert!(Dimensions::parse("2.5", "5").is_err());
        assert!(Dimensions::parse("abc", "5").is_err());
        assert!(Dimensions::parse("0", "5").is_err());
        assert!(Dimensions::parse("70000", "5").is_err());
    }
}
