use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    Zero,
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "resolution must be at least one pixel"),
        }
    }
}

impl Error for ResolutionError {}

/// Side length, in pixels, of the square render grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Resolution(u32);

impl Resolution {
    pub const DEFAULT: Self = Self(1024);

    pub fn new(pixels: u32) -> Result<Self, ResolutionError> {
        if pixels == 0 {
            return Err(ResolutionError::Zero);
        }

        Ok(Self(pixels))
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        let side = self.0 as usize;
        side * side
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x < self.0 && point.y < self.0
    }

    /// Row-major position of `point` in a buffer covering this grid.
    #[must_use]
    pub fn index_of(&self, point: Point) -> usize {
        point.y as usize * self.0 as usize + point.x as usize
    }

    /// Inverse of [`Resolution::index_of`].
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        let side = self.0 as usize;

        Point {
            x: (index % side) as u32,
            y: (index / side) as u32,
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_rejects_zero() {
        assert_eq!(Resolution::new(0), Err(ResolutionError::Zero));
    }

    #[test]
    fn test_single_pixel_resolution_is_valid() {
        let resolution = Resolution::new(1).unwrap();

        assert_eq!(resolution.get(), 1);
        assert_eq!(resolution.pixel_count(), 1);
    }

    #[test]
    fn test_pixel_count_is_square() {
        assert_eq!(Resolution::new(1024).unwrap().pixel_count(), 1_048_576);
    }

    #[test]
    fn test_contains_point() {
        let resolution = Resolution::new(4).unwrap();

        assert!(resolution.contains_point(Point { x: 0, y: 0 }));
        assert!(resolution.contains_point(Point { x: 3, y: 3 }));
        assert!(!resolution.contains_point(Point { x: 4, y: 0 }));
        assert!(!resolution.contains_point(Point { x: 0, y: 4 }));
    }

    #[test]
    fn test_index_of_is_row_major() {
        let resolution = Resolution::new(10).unwrap();

        assert_eq!(resolution.index_of(Point { x: 0, y: 0 }), 0);
        assert_eq!(resolution.index_of(Point { x: 9, y: 0 }), 9);
        assert_eq!(resolution.index_of(Point { x: 0, y: 1 }), 10);
        assert_eq!(resolution.index_of(Point { x: 3, y: 7 }), 73);
    }

    #[test]
    fn test_point_at_inverts_index_of() {
        let resolution = Resolution::new(7).unwrap();

        for index in 0..resolution.pixel_count() {
            assert_eq!(resolution.index_of(resolution.point_at(index)), index);
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert_eq!(Resolution::new(Resolution::DEFAULT.get()), Ok(Resolution::DEFAULT));
    }

    #[test]
    fn test_display() {
        assert_eq!(Resolution::new(512).unwrap().to_string(), "512x512");
    }
}
