//! Render geometries as canonical WKT text.

use crate::geometry::{Coord, Curve, Geometry, LinearRing, Polygon, Surface, Triangle};

/// Writes a [Geometry] tree to a WKT string.
///
/// The SRID prefix and dimension qualifier are emitted at most once, at the
/// outermost position; any geometry nested inside a collection, curve, or
/// surface is rendered with both suppressed.
#[derive(Debug, Clone, Copy, Default)]
pub struct WktWriter {
    /// Wrap each MultiPoint member in its own paren pair
    multi_point_parens: bool,
}

impl WktWriter {
    /// Create a writer with the default flat MultiPoint rendering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer that wraps each MultiPoint member in its own parens:
    /// `MULTIPOINT ((1.0 2.0), (3.0 4.0))` instead of
    /// `MULTIPOINT (1.0 2.0, 3.0 4.0)`.
    pub fn with_multi_point_parens() -> Self {
        Self {
            multi_point_parens: true,
        }
    }

    /// Write a geometry with the SRID prefix and dimension qualifier.
    pub fn write(&self, geometry: &Geometry) -> String {
        let mut out = String::new();
        self.write_geometry(geometry, true, true, &mut out);
        out
    }

    fn write_geometry(
        &self,
        geometry: &Geometry,
        include_srid: bool,
        include_dimension: bool,
        out: &mut String,
    ) {
        let keyword = match geometry {
            Geometry::Point(_) => "POINT",
            Geometry::LineString(_) => "LINESTRING",
            Geometry::LinearRing(_) => "LINEARRING",
            Geometry::CircularString(_) => "CIRCULARSTRING",
            Geometry::CompoundCurve(_) => "COMPOUNDCURVE",
            Geometry::Polygon(_) => "POLYGON",
            Geometry::CurvePolygon(_) => "CURVEPOLYGON",
            Geometry::Triangle(_) => "TRIANGLE",
            Geometry::PolyhedralSurface(_) => "POLYHEDRALSURFACE",
            Geometry::Tin(_) => "TIN",
            Geometry::MultiPoint(_) => "MULTIPOINT",
            Geometry::MultiLineString(_) => "MULTILINESTRING",
            Geometry::MultiPolygon(_) => "MULTIPOLYGON",
            Geometry::MultiCurve(_) => "MULTICURVE",
            Geometry::MultiSurface(_) => "MULTISURFACE",
            Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
        };

        if include_srid {
            if let Some(srid) = geometry.srid() {
                out.push_str("SRID=");
                out.push_str(srid);
                out.push(';');
            }
        }
        out.push_str(keyword);

        if geometry.is_empty() {
            out.push_str(" EMPTY");
            return;
        }

        if include_dimension {
            let qualifier = geometry.dimension().qualifier();
            if !qualifier.is_empty() {
                out.push(' ');
                out.push_str(qualifier);
            }
        }
        out.push_str(" (");
        self.write_body(geometry, out);
        out.push(')');
    }

    /// The payload between the outermost paren pair.
    fn write_body(&self, geometry: &Geometry, out: &mut String) {
        match geometry {
            Geometry::Point(point) => {
                // Emptiness was checked above, so the coordinate is present.
                if let Some(coord) = &point.coord {
                    write_coord(coord, out);
                }
            }
            Geometry::LineString(g) => write_coords(&g.coords, false, out),
            Geometry::LinearRing(g) => write_coords(&g.coords, false, out),
            Geometry::CircularString(g) => write_coords(&g.coords, false, out),
            Geometry::CompoundCurve(g) => {
                for (i, curve) in g.curves.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_curve(curve, out);
                }
            }
            Geometry::Polygon(g) => write_rings(&g.exterior, &g.interiors, out),
            Geometry::Triangle(g) => write_rings(&g.exterior, &g.interiors, out),
            Geometry::CurvePolygon(g) => {
                self.write_curve(&g.exterior, out);
                for curve in &g.interiors {
                    out.push_str(", ");
                    self.write_curve(curve, out);
                }
            }
            Geometry::PolyhedralSurface(g) => {
                for (i, polygon) in g.polygons.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_polygon_text(polygon, out);
                }
            }
            Geometry::Tin(g) => {
                for (i, triangle) in g.triangles.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_triangle_text(triangle, out);
                }
            }
            Geometry::MultiPoint(g) => {
                let coords: Vec<Coord> = g.points.iter().filter_map(|p| p.coord).collect();
                write_coords(&coords, self.multi_point_parens, out);
            }
            Geometry::MultiLineString(g) => {
                for (i, line) in g.line_strings.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    out.push('(');
                    write_coords(&line.coords, false, out);
                    out.push(')');
                }
            }
            Geometry::MultiPolygon(g) => {
                for (i, polygon) in g.polygons.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    write_polygon_text(polygon, out);
                }
            }
            Geometry::MultiCurve(g) => {
                for (i, curve) in g.curves.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_curve(curve, out);
                }
            }
            Geometry::MultiSurface(g) => {
                for (i, surface) in g.surfaces.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    match surface {
                        Surface::Polygon(polygon) => write_polygon_text(polygon, out),
                        Surface::CurvePolygon(cp) => self.write_geometry(
                            &Geometry::CurvePolygon(cp.clone()),
                            false,
                            false,
                            out,
                        ),
                    }
                }
            }
            Geometry::GeometryCollection(g) => {
                for (i, child) in g.geometries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_geometry(child, false, false, out);
                }
            }
        }
    }

    /// A curve in element position: a line string renders as a bare
    /// coordinate list, the other kinds with their own keyword.
    fn write_curve(&self, curve: &Curve, out: &mut String) {
        match curve {
            Curve::LineString(line) => {
                out.push('(');
                write_coords(&line.coords, false, out);
                out.push(')');
            }
            Curve::CircularString(cs) => {
                self.write_geometry(&Geometry::CircularString(cs.clone()), false, false, out)
            }
            Curve::CompoundCurve(cc) => {
                self.write_geometry(&Geometry::CompoundCurve(cc.clone()), false, false, out)
            }
        }
    }
}

fn write_coord(coord: &Coord, out: &mut String) {
    out.push_str(&coord.to_string());
}

fn write_coords(coords: &[Coord], inner_parens: bool, out: &mut String) {
    for (i, coord) in coords.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if inner_parens {
            out.push('(');
        }
        write_coord(coord, out);
        if inner_parens {
            out.push(')');
        }
    }
}

fn write_rings(exterior: &LinearRing, interiors: &[LinearRing], out: &mut String) {
    out.push('(');
    write_coords(&exterior.coords, false, out);
    out.push(')');
    for ring in interiors {
        out.push_str(", (");
        write_coords(&ring.coords, false, out);
        out.push(')');
    }
}

/// Keyword-less polygon rendering used inside MULTIPOLYGON,
/// POLYHEDRALSURFACE, and MULTISURFACE: `((exterior), (interior), ...)`.
fn write_polygon_text(polygon: &Polygon, out: &mut String) {
    out.push('(');
    write_rings(&polygon.exterior, &polygon.interiors, out);
    out.push(')');
}

fn write_triangle_text(triangle: &Triangle, out: &mut String) {
    out.push('(');
    write_rings(&triangle.exterior, &triangle.interiors, out);
    out.push(')');
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::Dimension;
    use crate::geometry::{
        CircularString, CompoundCurve, CurvePolygon, GeometryCollection, LineString, MultiPoint,
        Point,
    };

    fn xy_point(x: f64, y: f64) -> Point {
        Point::new(Coord::xy(x, y), Dimension::XY, None)
    }

    #[test]
    fn point() {
        let writer = WktWriter::new();
        assert_eq!(writer.write(&xy_point(1.0, 2.0).into()), "POINT (1.0 2.0)");
        assert_eq!(
            writer.write(&Point::new(Coord::xym(1.0, 2.0, 3.0), Dimension::XYM, None).into()),
            "POINT M (1.0 2.0 3.0)"
        );
        assert_eq!(
            writer.write(
                &Point::new(
                    Coord::xyzm(1.0, 2.0, 3.0, 4.0),
                    Dimension::XYZM,
                    Some("4326".to_string())
                )
                .into()
            ),
            "SRID=4326;POINT ZM (1.0 2.0 3.0 4.0)"
        );
    }

    #[test]
    fn empty_forms() {
        let writer = WktWriter::new();
        assert_eq!(writer.write(&Point::empty(None).into()), "POINT EMPTY");
        assert_eq!(writer.write(&Polygon::empty(None).into()), "POLYGON EMPTY");
        assert_eq!(
            writer.write(&MultiPoint::empty(None).into()),
            "MULTIPOINT EMPTY"
        );
        assert_eq!(
            writer.write(&CompoundCurve::empty(None).into()),
            "COMPOUNDCURVE EMPTY"
        );
        // The SRID prefix still applies to an empty geometry.
        assert_eq!(
            writer.write(&Point::empty(Some("4326".to_string())).into()),
            "SRID=4326;POINT EMPTY"
        );
    }

    #[test]
    fn line_string_z() {
        let line = LineString::new(
            vec![
                Coord::xyz(1.0, 1.0, 10.0),
                Coord::xyz(5.0, 5.0, 15.0),
                Coord::xyz(10.0, 10.0, 20.0),
            ],
            Dimension::XYZ,
            None,
        );
        assert_eq!(
            WktWriter::new().write(&line.into()),
            "LINESTRING Z (1.0 1.0 10.0, 5.0 5.0 15.0, 10.0 10.0 20.0)"
        );
    }

    #[test]
    fn polygon_with_hole() {
        let polygon = Polygon::new(
            LinearRing::new(
                vec![
                    Coord::xy(35.0, 10.0),
                    Coord::xy(45.0, 45.0),
                    Coord::xy(15.0, 40.0),
                    Coord::xy(10.0, 20.0),
                    Coord::xy(35.0, 10.0),
                ],
                Dimension::XY,
                None,
            ),
            vec![LinearRing::new(
                vec![
                    Coord::xy(20.0, 30.0),
                    Coord::xy(35.0, 35.0),
                    Coord::xy(30.0, 20.0),
                    Coord::xy(20.0, 30.0),
                ],
                Dimension::XY,
                None,
            )],
            Dimension::XY,
            None,
        );
        assert_eq!(
            WktWriter::new().write(&polygon.into()),
            "POLYGON ((35.0 10.0, 45.0 45.0, 15.0 40.0, 10.0 20.0, 35.0 10.0), \
             (20.0 30.0, 35.0 35.0, 30.0 20.0, 20.0 30.0))"
        );
    }

    #[test]
    fn multi_point_paren_styles() {
        let mp: Geometry = MultiPoint::new(
            vec![xy_point(10.0, 40.0), xy_point(40.0, 30.0)],
            Dimension::XY,
            None,
        )
        .into();
        assert_eq!(
            WktWriter::new().write(&mp),
            "MULTIPOINT (10.0 40.0, 40.0 30.0)"
        );
        assert_eq!(
            WktWriter::with_multi_point_parens().write(&mp),
            "MULTIPOINT ((10.0 40.0), (40.0 30.0))"
        );
    }

    #[test]
    fn compound_curve_elements() {
        let cc = CompoundCurve::new(
            vec![
                Curve::CircularString(CircularString::new(
                    vec![
                        Coord::xy(1.0, 0.0),
                        Coord::xy(0.0, 1.0),
                        Coord::xy(-1.0, 0.0),
                    ],
                    Dimension::XY,
                    None,
                )),
                Curve::LineString(LineString::new(
                    vec![Coord::xy(-1.0, 0.0), Coord::xy(1.0, 0.0)],
                    Dimension::XY,
                    None,
                )),
            ],
            Dimension::XY,
            None,
        );
        assert_eq!(
            WktWriter::new().write(&cc.into()),
            "COMPOUNDCURVE (CIRCULARSTRING (1.0 0.0, 0.0 1.0, -1.0 0.0), (-1.0 0.0, 1.0 0.0))"
        );
    }

    #[test]
    fn nested_suppression() {
        // Children inside a collection never render their own SRID or
        // dimension qualifier.
        let child = Point::new(
            Coord::xyz(1.0, 2.0, 3.0),
            Dimension::XYZ,
            Some("2927".to_string()),
        );
        let collection = GeometryCollection::new(
            vec![child.into()],
            Dimension::XYZ,
            Some("4326".to_string()),
        );
        assert_eq!(
            WktWriter::new().write(&collection.into()),
            "SRID=4326;GEOMETRYCOLLECTION Z (POINT (1.0 2.0 3.0))"
        );
    }

    #[test]
    fn multi_surface() {
        let polygon = Polygon::new(
            LinearRing::new(
                vec![
                    Coord::xy(0.0, 0.0),
                    Coord::xy(4.0, 0.0),
                    Coord::xy(4.0, 4.0),
                    Coord::xy(0.0, 0.0),
                ],
                Dimension::XY,
                None,
            ),
            Vec::new(),
            Dimension::XY,
            None,
        );
        let cp = CurvePolygon::new(
            Curve::CircularString(CircularString::new(
                vec![
                    Coord::xy(1.0, 0.0),
                    Coord::xy(0.0, 1.0),
                    Coord::xy(1.0, 0.0),
                ],
                Dimension::XY,
                None,
            )),
            Vec::new(),
            Dimension::XY,
            None,
        );
        let ms = crate::geometry::MultiSurface::new(
            vec![Surface::Polygon(polygon), Surface::CurvePolygon(cp)],
            Dimension::XY,
            None,
        );
        assert_eq!(
            WktWriter::new().write(&ms.into()),
            "MULTISURFACE (((0.0 0.0, 4.0 0.0, 4.0 4.0, 0.0 0.0)), \
             CURVEPOLYGON (CIRCULARSTRING (1.0 0.0, 0.0 1.0, 1.0 0.0)))"
        );
    }
}
