use crate::datatypes::Dimension;
use crate::geometry::LinearRing;

/// An area bounded by one exterior ring and zero or more interior rings.
///
/// The exterior ring is always materialized; an empty polygon holds an empty
/// exterior ring rather than no ring at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    /// The exterior ring
    pub exterior: LinearRing,
    /// The interior rings
    pub interiors: Vec<LinearRing>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl Polygon {
    /// Create a new polygon.
    pub fn new(
        exterior: LinearRing,
        interiors: Vec<LinearRing>,
        dimension: Dimension,
        srid: Option<String>,
    ) -> Self {
        Self {
            exterior,
            interiors,
            dimension,
            srid,
        }
    }

    /// Create an empty polygon with an empty exterior ring.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(
            LinearRing::empty(srid.clone()),
            Vec::new(),
            Dimension::XY,
            srid,
        )
    }

    /// Whether the exterior ring is empty.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// The number of coordinates over the exterior and interior rings.
    pub fn coordinate_count(&self) -> usize {
        self.exterior.coordinate_count()
            + self
                .interiors
                .iter()
                .map(LinearRing::coordinate_count)
                .sum::<usize>()
    }
}

/// A polygon restricted to a single three-coordinate exterior ring.
///
/// The ring shape is not validated; a triangle is structurally a polygon
/// with its own WKT keyword and WKB type code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Triangle {
    /// The exterior ring
    pub exterior: LinearRing,
    /// The interior rings
    pub interiors: Vec<LinearRing>,
    /// The dimension, fixed at construction
    pub dimension: Dimension,
    /// The optional spatial reference identifier
    pub srid: Option<String>,
}

impl Triangle {
    /// Create a new triangle.
    pub fn new(
        exterior: LinearRing,
        interiors: Vec<LinearRing>,
        dimension: Dimension,
        srid: Option<String>,
    ) -> Self {
        Self {
            exterior,
            interiors,
            dimension,
            srid,
        }
    }

    /// Create an empty triangle with an empty exterior ring.
    pub fn empty(srid: Option<String>) -> Self {
        Self::new(
            LinearRing::empty(srid.clone()),
            Vec::new(),
            Dimension::XY,
            srid,
        )
    }

    /// Whether the exterior ring is empty.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }

    /// The number of coordinates over the exterior and interior rings.
    pub fn coordinate_count(&self) -> usize {
        self.exterior.coordinate_count()
            + self
                .interiors
                .iter()
                .map(LinearRing::coordinate_count)
                .sum::<usize>()
    }
}
