//! Grid positions, compass directions, and the two distance geometries.
mod metric;

pub use metric::{DistanceMetric, normalized_slope};

use std::fmt;

/// Discrete grid position expressed in tile coordinates.
///
/// `z` is the elevation level; the 2D metrics ignore it and steering
/// preserves it, but it takes part in equality so tiles on different
/// levels never alias.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position shifted by the given planar deltas.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// One of the eight adjacent headings on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CompassDirection {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassDirection {
    pub const ALL: [CompassDirection; 8] = [
        CompassDirection::North,
        CompassDirection::NorthEast,
        CompassDirection::East,
        CompassDirection::SouthEast,
        CompassDirection::South,
        CompassDirection::SouthWest,
        CompassDirection::West,
        CompassDirection::NorthWest,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            CompassDirection::North => (0, 1),
            CompassDirection::NorthEast => (1, 1),
            CompassDirection::East => (1, 0),
            CompassDirection::SouthEast => (1, -1),
            CompassDirection::South => (0, -1),
            CompassDirection::SouthWest => (-1, -1),
            CompassDirection::West => (-1, 0),
            CompassDirection::NorthWest => (-1, 1),
        }
    }

    pub fn is_diagonal(self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_preserves_level() {
        let p = Position::new(3, -2, 1).offset(1, 1);
        assert_eq!(p, Position::new(4, -1, 1));
    }

    #[test]
    fn four_of_eight_headings_are_diagonal() {
        let diagonals = CompassDirection::ALL
            .iter()
            .filter(|d| d.is_diagonal())
            .count();
        assert_eq!(diagonals, 4);
    }
}
