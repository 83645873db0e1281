use crate::datatypes::Dimension;
use crate::geometry::{Coord, Geometry, LineString};

/// An arc interpolated through an ordered sequence of positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularString {
    /// The coordinates
    pub coords: Vec<Coord>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl CircularString {
    /// Create a new circular string.
    pub fn new(coords: Vec<Coord>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            coords,
            dimension,
            srid,
        }
    }

    /// Create an empty circular string.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this circular string has no coordinates.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The number of coordinates.
    pub fn coordinate_count(&self) -> usize {
        self.coords.len()
    }
}

/// An ordered sequence of curves joined end to end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundCurve {
    /// The member curves
    pub curves: Vec<Curve>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl CompoundCurve {
    /// Create a new compound curve.
    pub fn new(curves: Vec<Curve>, dimension: Dimension, srid: Option<String>) -> Self {
        Self {
            curves,
            dimension,
            srid,
        }
    }

    /// Create an empty compound curve.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(Vec::new(), Dimension::XY, srid)
    }

    /// Whether this compound curve has no member curves.
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// The total number of coordinates over all member curves.
    pub fn coordinate_count(&self) -> usize {
        self.curves.iter().map(Curve::coordinate_count).sum()
    }
}

/// The line-like geometry family: straight, circular-arc, or compound.
///
/// A capability grouping over existing variants, not new data. Curves appear
/// as the elements of [CompoundCurve], `MultiCurve`, and `CurvePolygon`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Curve {
    /// A straight-segment curve
    LineString(LineString),
    /// A circular-arc curve
    CircularString(CircularString),
    /// A compound curve
    CompoundCurve(CompoundCurve),
}

impl Curve {
    /// The dimension of the underlying geometry.
    pub fn dimension(&self) -> Dimension {
        match self {
            Curve::LineString(g) => g.dimension,
            Curve::CircularString(g) => g.dimension,
            Curve::CompoundCurve(g) => g.dimension,
        }
    }

    /// The SRID of the underlying geometry.
    pub fn srid(&self) -> Option<&str> {
        match self {
            Curve::LineString(g) => g.srid.as_deref(),
            Curve::CircularString(g) => g.srid.as_deref(),
            Curve::CompoundCurve(g) => g.srid.as_deref(),
        }
    }

    /// Whether the underlying geometry is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Curve::LineString(g) => g.is_empty(),
            Curve::CircularString(g) => g.is_empty(),
            Curve::CompoundCurve(g) => g.is_empty(),
        }
    }

    /// The number of coordinates of the underlying geometry.
    pub fn coordinate_count(&self) -> usize {
        match self {
            Curve::LineString(g) => g.coordinate_count(),
            Curve::CircularString(g) => g.coordinate_count(),
            Curve::CompoundCurve(g) => g.coordinate_count(),
        }
    }
}

impl From<Curve> for Geometry {
    fn from(value: Curve) -> Self {
        match value {
            Curve::LineString(g) => Geometry::LineString(g),
            Curve::CircularString(g) => Geometry::CircularString(g),
            Curve::CompoundCurve(g) => Geometry::CompoundCurve(g),
        }
    }
}
