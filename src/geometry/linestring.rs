use crate::datatypes::Dimension;
use crate::geometry::Coord;

/// An ordered sequence of positions connected by straight segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineString {
    /// The coordinates
    pub coords: Vec<Coord>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl LineString {
    /// Create a new line string.
    pub fn new(coords: Vec<Coord>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            coords,
            dimension,
            srid,
        }
    }

    /// Create an empty line string.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this line string has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The number of coordinates.
    pub fn coordinate_count(&self) -> usize {
        self.coords.len()
    }
}

/// A closed [LineString] used as a polygon boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearRing {
    /// The coordinates
    pub coords: Vec<Coord>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl LinearRing {
    /// Create a new linear ring.
    pub fn new(coords: Vec<Coord>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            coords,
            dimension,
            srid,
        }
    }

    /// Create an empty linear ring.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this ring has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The number of coordinates.
    pub fn coordinate_count(&self) -> usize {
        self.coords.len()
    }
}
