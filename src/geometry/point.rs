use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// A single position.
///
/// An empty point carries no coordinate at all; absence is explicit rather
/// than encoded as NaN values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    /// The coordinate, absent for an empty point
    pub coord: Option<Coord>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl Point {
    /// Create a new point.
    pub fn new(coord: Coord, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            coord: Some(coord),
            dimension,
            srid,
        }
    }

    /// Create an empty point.
    pub fn empty(srid: Option<String>) -> Self {
        Self {
            coord: None,
            dimension: Dimension::XY,
            srid,
        }
    }

    /// Whether this point has no coordinate.
    pub fn is_empty(&self) -> bool {
        self.coord.is_none()
    }

    /// The number of coordinates: 0 for an empty point, else 1.
    pub fn coordinate_count(&self) -> usize {
        usize::from(self.coord.is_some())
    }
}
