use super::coord::Coord;

/// A generated fixture point: sequential id plus lon/lat coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub id: u64,
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    /// Create a new point
    pub fn new(id: u64, x: Coord, y: Coord) -> Self {
        Self { id, x, y }
    }
}
