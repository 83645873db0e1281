//! Parse WKT text into a [Geometry] tree.
//!
//! A hand-written ordered-choice recursive descent parser. Two pieces of
//! state are scoped to one top-level call and threaded through every
//! production: the shared [Dimension], resolved at most once per parse, and
//! the default SRID, inherited by productions without their own `SRID=`
//! prefix.

use crate::datatypes::Dimension;
use crate::error::{GeoWktError, GeoWktResult};
use crate::geometry::{
    CircularString, CompoundCurve, Coord, Curve, CurvePolygon, Geometry, GeometryCollection,
    LineString, LinearRing, MultiCurve, MultiLineString, MultiPoint, MultiPolygon, MultiSurface,
    Point, Polygon, PolyhedralSurface, Surface, Tin, Triangle,
};

/// Parse one WKT geometry.
///
/// The whole input must be a single geometry, modulo surrounding whitespace.
/// Any mismatch fails the entire parse with [GeoWktError::Syntax]; there is
/// no partial result and no recovery.
pub fn parse(input: &str) -> GeoWktResult<Geometry> {
    let mut parser = Parser::new(input);
    parser.skip_ws();
    let geometry = parser.geometry()?;
    parser.skip_ws();
    if !parser.at_end() {
        return Err(parser.syntax_error("trailing input after geometry"));
    }
    Ok(geometry)
}

/// Collections and compound curves recurse through [Parser::geometry] and
/// [Parser::curve_list]; the combined depth is bounded to keep crafted
/// input from exhausting the stack.
const MAX_NESTING_DEPTH: usize = 128;

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    depth: usize,
    /// Resolved by the first dimension token or inferred coordinate axis in
    /// the whole parse, then reused for every later coordinate.
    dimension: Option<Dimension>,
    /// Inherited by productions without an explicit SRID prefix. Only a
    /// GEOMETRYCOLLECTION prefix replaces it.
    default_srid: Option<String>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            depth: 0,
            dimension: None,
            default_srid: None,
        }
    }

    fn enter(&mut self) -> GeoWktResult<()> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.syntax_error("nesting depth limit exceeded"));
        }
        self.depth += 1;
        Ok(())
    }

    // ---- Geometry productions ----

    fn geometry(&mut self) -> GeoWktResult<Geometry> {
        self.enter()?;
        let geometry = self.geometry_inner();
        self.depth -= 1;
        geometry
    }

    /// Ordered choice over the 16 concrete productions; first match wins.
    fn geometry_inner(&mut self) -> GeoWktResult<Geometry> {
        if let Some(srid) = self.try_keyword("POINT") {
            return self.point(srid).map(Geometry::Point);
        }
        if let Some(srid) = self.try_keyword("LINESTRING") {
            return self.line_string(srid).map(Geometry::LineString);
        }
        // A LINEARRING parses to a plain line string, as in the original
        // grammar; the distinct node kind only arises from hand-built trees.
        if let Some(srid) = self.try_keyword("LINEARRING") {
            return self.line_string(srid).map(Geometry::LineString);
        }
        if let Some(srid) = self.try_keyword("POLYGON") {
            return self.polygon(srid).map(Geometry::Polygon);
        }
        if let Some(srid) = self.try_keyword("MULTIPOINT") {
            return self.multi_point(srid).map(Geometry::MultiPoint);
        }
        if let Some(srid) = self.try_keyword("MULTILINESTRING") {
            return self.multi_line_string(srid).map(Geometry::MultiLineString);
        }
        if let Some(srid) = self.try_keyword("MULTIPOLYGON") {
            return self.multi_polygon(srid).map(Geometry::MultiPolygon);
        }
        if let Some(srid) = self.try_keyword("GEOMETRYCOLLECTION") {
            return self
                .geometry_collection(srid)
                .map(Geometry::GeometryCollection);
        }
        if let Some(srid) = self.try_keyword("TRIANGLE") {
            return self.triangle(srid).map(Geometry::Triangle);
        }
        if let Some(srid) = self.try_keyword("CIRCULARSTRING") {
            return self.circular_string(srid).map(Geometry::CircularString);
        }
        if let Some(srid) = self.try_keyword("TIN") {
            return self.tin(srid).map(Geometry::Tin);
        }
        if let Some(srid) = self.try_keyword("COMPOUNDCURVE") {
            return self.compound_curve(srid).map(Geometry::CompoundCurve);
        }
        if let Some(srid) = self.try_keyword("CURVEPOLYGON") {
            return self.curve_polygon(srid).map(Geometry::CurvePolygon);
        }
        if let Some(srid) = self.try_keyword("MULTICURVE") {
            return self.multi_curve(srid).map(Geometry::MultiCurve);
        }
        if let Some(srid) = self.try_keyword("POLYHEDRALSURFACE") {
            return self
                .polyhedral_surface(srid)
                .map(Geometry::PolyhedralSurface);
        }
        if let Some(srid) = self.try_keyword("MULTISURFACE") {
            return self.multi_surface(srid).map(Geometry::MultiSurface);
        }
        Err(self.syntax_error("expected a geometry keyword"))
    }

    fn point(&mut self, srid: Option<String>) -> GeoWktResult<Point> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(Point::empty(srid));
        }
        self.expect("(")?;
        self.skip_ws();
        let coord = self.coordinate()?;
        self.expect(")")?;
        Ok(Point::new(coord, self.resolved_dimension(), srid))
    }

    fn line_string(&mut self, srid: Option<String>) -> GeoWktResult<LineString> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(LineString::empty(srid));
        }
        self.expect("(")?;
        self.skip_ws();
        let coords = self.coordinates()?;
        self.expect(")")?;
        Ok(LineString::new(coords, self.resolved_dimension(), srid))
    }

    fn circular_string(&mut self, srid: Option<String>) -> GeoWktResult<CircularString> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(CircularString::empty(srid));
        }
        self.expect("(")?;
        self.skip_ws();
        let coords = self.coordinates()?;
        self.expect(")")?;
        Ok(CircularString::new(coords, self.resolved_dimension(), srid))
    }

    fn polygon(&mut self, srid: Option<String>) -> GeoWktResult<Polygon> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(Polygon::empty(srid));
        }
        self.expect("(")?;
        let sets = self.coordinate_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let (exterior, interiors) = split_rings(sets, dimension, &srid);
        Ok(Polygon::new(exterior, interiors, dimension, srid))
    }

    fn triangle(&mut self, srid: Option<String>) -> GeoWktResult<Triangle> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(Triangle::empty(srid));
        }
        self.expect("(")?;
        let sets = self.coordinate_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let (exterior, interiors) = split_rings(sets, dimension, &srid);
        Ok(Triangle::new(exterior, interiors, dimension, srid))
    }

    fn multi_point(&mut self, srid: Option<String>) -> GeoWktResult<MultiPoint> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(MultiPoint::empty(srid));
        }
        self.expect("(")?;
        self.skip_ws();
        // Either individually parenthesized coordinates or a flat list.
        let coords = if self.peek() == Some(b'(') {
            self.coordinate_sets()?.into_iter().flatten().collect()
        } else {
            self.coordinates()?
        };
        self.expect(")")?;
        // Each member derives its dimension from its own coordinate, the one
        // exception to shared-dimension reuse. Members carry no SRID.
        let points = coords
            .into_iter()
            .map(|c| Point::new(c, c.dimension(), None))
            .collect();
        Ok(MultiPoint::new(points, self.resolved_dimension(), srid))
    }

    fn multi_line_string(&mut self, srid: Option<String>) -> GeoWktResult<MultiLineString> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(MultiLineString::empty(srid));
        }
        self.expect("(")?;
        let sets = self.coordinate_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let lines = sets
            .into_iter()
            .map(|coords| LineString::new(coords, dimension, srid.clone()))
            .collect();
        Ok(MultiLineString::new(lines, dimension, srid))
    }

    fn multi_polygon(&mut self, srid: Option<String>) -> GeoWktResult<MultiPolygon> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(MultiPolygon::empty(srid));
        }
        self.expect("(")?;
        let sets_sets = self.coordinate_sets_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let polygons = sets_sets
            .into_iter()
            .map(|sets| {
                let (exterior, interiors) = split_rings(sets, dimension, &srid);
                Polygon::new(exterior, interiors, dimension, srid.clone())
            })
            .collect();
        Ok(MultiPolygon::new(polygons, dimension, srid))
    }

    fn polyhedral_surface(&mut self, srid: Option<String>) -> GeoWktResult<PolyhedralSurface> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(PolyhedralSurface::empty(srid));
        }
        self.expect("(")?;
        let sets_sets = self.coordinate_sets_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let polygons = sets_sets
            .into_iter()
            .map(|sets| {
                let (exterior, interiors) = split_rings(sets, dimension, &srid);
                Polygon::new(exterior, interiors, dimension, srid.clone())
            })
            .collect();
        Ok(PolyhedralSurface::new(polygons, dimension, srid))
    }

    fn tin(&mut self, srid: Option<String>) -> GeoWktResult<Tin> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(Tin::empty(srid));
        }
        self.expect("(")?;
        let sets_sets = self.coordinate_sets_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let triangles = sets_sets
            .into_iter()
            .map(|sets| {
                let (exterior, interiors) = split_rings(sets, dimension, &srid);
                Triangle::new(exterior, interiors, dimension, srid.clone())
            })
            .collect();
        Ok(Tin::new(triangles, dimension, srid))
    }

    fn geometry_collection(&mut self, srid: Option<String>) -> GeoWktResult<GeometryCollection> {
        // The only production that mutates the ambient default: an explicit
        // SRID prefix applies to every later geometry in this parse.
        if srid.is_some() {
            self.default_srid = srid.clone();
        }
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(GeometryCollection::empty(srid));
        }
        self.expect("(")?;
        let mut geometries = Vec::new();
        loop {
            self.skip_ws();
            geometries.push(self.geometry()?);
            self.separators();
            if self.peek() == Some(b')') {
                break;
            }
        }
        self.expect(")")?;
        Ok(GeometryCollection::new(
            geometries,
            self.resolved_dimension(),
            srid,
        ))
    }

    fn compound_curve(&mut self, srid: Option<String>) -> GeoWktResult<CompoundCurve> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(CompoundCurve::empty(srid));
        }
        let curves = self.curve_list()?;
        Ok(CompoundCurve::new(curves, self.resolved_dimension(), srid))
    }

    fn multi_curve(&mut self, srid: Option<String>) -> GeoWktResult<MultiCurve> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(MultiCurve::empty(srid));
        }
        let curves = self.curve_list()?;
        Ok(MultiCurve::new(curves, self.resolved_dimension(), srid))
    }

    fn curve_polygon(&mut self, srid: Option<String>) -> GeoWktResult<CurvePolygon> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(CurvePolygon::empty(srid));
        }
        let mut curves = self.curve_list()?.into_iter();
        // The list is never empty here; the first curve is the exterior.
        let exterior = curves
            .next()
            .ok_or_else(|| self.syntax_error("expected an exterior curve"))?;
        Ok(CurvePolygon::new(
            exterior,
            curves.collect(),
            self.resolved_dimension(),
            srid,
        ))
    }

    fn multi_surface(&mut self, srid: Option<String>) -> GeoWktResult<MultiSurface> {
        let srid = srid.or_else(|| self.default_srid.clone());
        if self.empty_or_dimension() {
            return Ok(MultiSurface::empty(srid));
        }
        self.expect("(")?;
        let mut surfaces = Vec::new();
        loop {
            self.skip_ws();
            // Per element: a keyword-less polygon ring-text or a full
            // CURVEPOLYGON production.
            if self.peek() == Some(b'(') {
                surfaces.push(Surface::Polygon(self.polygon_text()?));
            } else if let Some(srid) = self.try_keyword("CURVEPOLYGON") {
                surfaces.push(Surface::CurvePolygon(self.curve_polygon(srid)?));
            } else {
                return Err(self.syntax_error("expected a surface"));
            }
            self.separators();
            if self.peek() == Some(b')') {
                break;
            }
        }
        self.expect(")")?;
        Ok(MultiSurface::new(surfaces, self.resolved_dimension(), srid))
    }

    // ---- Composite payloads ----

    /// `(curve, curve, ...)` where each element is a CIRCULARSTRING, a bare
    /// parenthesized line string, or a nested COMPOUNDCURVE.
    fn curve_list(&mut self) -> GeoWktResult<Vec<Curve>> {
        self.enter()?;
        let curves = self.curve_list_inner();
        self.depth -= 1;
        curves
    }

    fn curve_list_inner(&mut self) -> GeoWktResult<Vec<Curve>> {
        self.expect("(")?;
        let mut curves = Vec::new();
        loop {
            self.skip_ws();
            if let Some(srid) = self.try_keyword("CIRCULARSTRING") {
                curves.push(Curve::CircularString(self.circular_string(srid)?));
            } else if self.peek() == Some(b'(') {
                curves.push(Curve::LineString(self.line_string_coordinates()?));
            } else if let Some(srid) = self.try_keyword("COMPOUNDCURVE") {
                curves.push(Curve::CompoundCurve(self.compound_curve(srid)?));
            } else {
                return Err(self.syntax_error("expected a curve"));
            }
            self.separators();
            if self.peek() == Some(b')') {
                break;
            }
        }
        self.expect(")")?;
        Ok(curves)
    }

    /// A bare `(coords)` line string in curve-element position.
    fn line_string_coordinates(&mut self) -> GeoWktResult<LineString> {
        self.expect("(")?;
        self.skip_ws();
        let coords = self.coordinates()?;
        self.expect(")")?;
        Ok(LineString::new(
            coords,
            self.resolved_dimension(),
            self.default_srid.clone(),
        ))
    }

    /// A keyword-less `((exterior), (interior), ...)` polygon in
    /// surface-element position.
    fn polygon_text(&mut self) -> GeoWktResult<Polygon> {
        self.expect("(")?;
        let sets = self.coordinate_sets()?;
        self.expect(")")?;
        let dimension = self.resolved_dimension();
        let srid = self.default_srid.clone();
        let (exterior, interiors) = split_rings(sets, dimension, &srid);
        Ok(Polygon::new(exterior, interiors, dimension, srid))
    }

    /// `(coords), (coords), ...`
    fn coordinate_sets(&mut self) -> GeoWktResult<Vec<Vec<Coord>>> {
        let mut sets = Vec::new();
        loop {
            self.skip_ws();
            self.expect("(")?;
            self.skip_ws();
            sets.push(self.coordinates()?);
            self.expect(")")?;
            self.separators();
            if self.peek() != Some(b'(') {
                break;
            }
        }
        Ok(sets)
    }

    /// `((coords), ...), ((coords), ...), ...`
    fn coordinate_sets_sets(&mut self) -> GeoWktResult<Vec<Vec<Vec<Coord>>>> {
        let mut sets_sets = Vec::new();
        loop {
            self.skip_ws();
            self.expect("(")?;
            sets_sets.push(self.coordinate_sets()?);
            self.expect(")")?;
            self.separators();
            if self.peek() != Some(b'(') {
                break;
            }
        }
        Ok(sets_sets)
    }

    /// `coord, coord, ...` — the comma is optional, as in the original
    /// grammar, so the list ends at the first token that cannot start a
    /// number.
    fn coordinates(&mut self) -> GeoWktResult<Vec<Coord>> {
        let mut coords = vec![self.coordinate()?];
        loop {
            self.separators();
            if !self.at_number_start() {
                break;
            }
            coords.push(self.coordinate()?);
        }
        Ok(coords)
    }

    /// Two to four whitespace-separated numbers.
    ///
    /// The third number is M when the shared dimension is XYM, otherwise Z,
    /// promoting a still-XY parse to XYZ in place. The fourth is always M,
    /// promoting XYZ to XYZM. Promotion mutates the parse-scoped dimension
    /// and so affects every later coordinate too.
    fn coordinate(&mut self) -> GeoWktResult<Coord> {
        let x = self
            .number()
            .ok_or_else(|| self.syntax_error("expected a number"))?;
        if !self.skip_ws() {
            return Err(self.syntax_error("expected whitespace after x value"));
        }
        let y = self
            .number()
            .ok_or_else(|| self.syntax_error("expected a number"))?;

        let mut z = None;
        let mut m = None;
        if let Some(value) = self.ws_then_number() {
            if self.dimension == Some(Dimension::XYM) {
                m = Some(value);
            } else {
                if self.dimension == Some(Dimension::XY) {
                    self.dimension = Some(Dimension::XYZ);
                }
                z = Some(value);
            }
            if let Some(value) = self.ws_then_number() {
                if self.dimension == Some(Dimension::XYZ) {
                    self.dimension = Some(Dimension::XYZM);
                }
                m = Some(value);
            }
        }
        Ok(Coord { x, y, z, m })
    }

    // ---- Lexical helpers ----

    /// Consume `EMPTY` (returning true) or the optional `ZM`/`Z`/`M`
    /// qualifier. Each qualifier applies only while the shared dimension is
    /// unset but is consumed regardless; afterwards the dimension defaults
    /// to XY if still unset.
    fn empty_or_dimension(&mut self) -> bool {
        self.skip_ws();
        if self.eat("EMPTY") {
            return true;
        }
        if self.eat("ZM") {
            self.set_dimension(Dimension::XYZM);
        } else {
            if self.eat("Z") {
                self.set_dimension(Dimension::XYZ);
            }
            if self.eat("M") {
                self.set_dimension(Dimension::XYM);
            }
        }
        self.set_dimension(Dimension::XY);
        false
    }

    fn set_dimension(&mut self, dimension: Dimension) {
        if self.dimension.is_none() {
            self.dimension = Some(dimension);
        }
    }

    fn resolved_dimension(&self) -> Dimension {
        self.dimension.unwrap_or(Dimension::XY)
    }

    /// Optional `SRID=<digits>;` prefix followed by the given keyword.
    /// Restores the position and returns None when the keyword (or a
    /// malformed prefix) does not match.
    fn try_keyword(&mut self, keyword: &str) -> Option<Option<String>> {
        let save = self.pos;
        let srid = if self.eat("SRID=") {
            let digits = self.digits();
            if digits.is_empty() || !self.eat(";") {
                self.pos = save;
                return None;
            }
            Some(digits)
        } else {
            None
        };
        if self.eat(keyword) {
            Some(srid)
        } else {
            self.pos = save;
            None
        }
    }

    /// The lax element separator: optional whitespace, optional comma,
    /// optional whitespace.
    fn separators(&mut self) {
        self.skip_ws();
        self.eat(",");
        self.skip_ws();
    }

    /// `[+-]? digits+ ('.' digits*)?` — no exponent, no leading dot.
    fn number(&mut self) -> Option<f64> {
        let start = self.pos;
        let mut pos = self.pos;
        if matches!(self.input.get(pos), Some(b'+') | Some(b'-')) {
            pos += 1;
        }
        let digits_start = pos;
        while matches!(self.input.get(pos), Some(b'0'..=b'9')) {
            pos += 1;
        }
        if pos == digits_start {
            return None;
        }
        if self.input.get(pos) == Some(&b'.') {
            pos += 1;
            while matches!(self.input.get(pos), Some(b'0'..=b'9')) {
                pos += 1;
            }
        }
        // The scanned text is a valid float by construction.
        let text = std::str::from_utf8(&self.input[start..pos]).ok()?;
        let value = text.parse().ok()?;
        self.pos = pos;
        Some(value)
    }

    /// An optional number preceded by optional whitespace; restores the
    /// position when no number follows.
    fn ws_then_number(&mut self) -> Option<f64> {
        let save = self.pos;
        self.skip_ws();
        match self.number() {
            Some(value) => Some(value),
            None => {
                self.pos = save;
                None
            }
        }
    }

    fn digits(&mut self) -> String {
        let start = self.pos;
        while matches!(self.input.get(self.pos), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).into_owned()
    }

    fn at_number_start(&self) -> bool {
        matches!(self.peek(), Some(b'0'..=b'9' | b'+' | b'-'))
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Skip ASCII whitespace; returns whether any was consumed.
    fn skip_ws(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn eat(&mut self, literal: &str) -> bool {
        if self.input[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            true
        } else {
            false
        }
    }

    /// Consume the literal after optional whitespace, or fail the parse.
    fn expect(&mut self, literal: &str) -> GeoWktResult<()> {
        self.skip_ws();
        if self.eat(literal) {
            Ok(())
        } else {
            Err(self.syntax_error(&format!("expected `{literal}`")))
        }
    }

    fn syntax_error(&self, message: &str) -> GeoWktError {
        GeoWktError::Syntax(format!("{message} at byte {}", self.pos))
    }
}

/// Split coordinate sets into the exterior ring (first) and interior rings
/// (rest), all tagged with the shared dimension and SRID.
fn split_rings(
    sets: Vec<Vec<Coord>>,
    dimension: Dimension,
    srid: &Option<String>,
) -> (LinearRing, Vec<LinearRing>) {
    let mut sets = sets.into_iter();
    let exterior = match sets.next() {
        Some(coords) => LinearRing::new(coords, dimension, srid.clone()),
        None => LinearRing::empty(srid.clone()),
    };
    let interiors = sets
        .map(|coords| LinearRing::new(coords, dimension, srid.clone()))
        .collect();
    (exterior, interiors)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn point_dimension_inference() {
        let geom = parse("POINT (0 0 5)").unwrap();
        assert_eq!(geom.dimension(), Dimension::XYZ);
        let point = geom.into_point().unwrap();
        assert_eq!(point.coord.unwrap().z, Some(5.0));

        let geom = parse("POINT (0 0 5 4)").unwrap();
        assert_eq!(geom.dimension(), Dimension::XYZM);
        let coord = geom.into_point().unwrap().coord.unwrap();
        assert_eq!(coord.z, Some(5.0));
        assert_eq!(coord.m, Some(4.0));

        let geom = parse("POINT M (1 2 3)").unwrap();
        assert_eq!(geom.dimension(), Dimension::XYM);
        let coord = geom.into_point().unwrap().coord.unwrap();
        assert_eq!(coord.z, None);
        assert_eq!(coord.m, Some(3.0));
    }

    #[test]
    fn first_dimension_token_wins() {
        // The promoted dimension from the first geometry governs the rest of
        // the parse.
        let geom = parse("GEOMETRYCOLLECTION (POINT (0 0 5), POINT M (1 2 3))").unwrap();
        let collection = geom.into_geometry_collection().unwrap();
        assert_eq!(collection.dimension, Dimension::XYZ);
        let second = collection.geometries[1].as_point().unwrap();
        assert_eq!(second.dimension, Dimension::XYZ);
        let coord = second.coord.unwrap();
        assert_eq!(coord.z, Some(3.0));
        assert_eq!(coord.m, None);
    }

    #[test]
    fn empty_forms() {
        for wkt in [
            "POINT EMPTY",
            "LINESTRING EMPTY",
            "POLYGON EMPTY",
            "MULTIPOINT EMPTY",
            "MULTILINESTRING EMPTY",
            "MULTIPOLYGON EMPTY",
            "GEOMETRYCOLLECTION EMPTY",
            "CIRCULARSTRING EMPTY",
            "COMPOUNDCURVE EMPTY",
            "CURVEPOLYGON EMPTY",
            "MULTICURVE EMPTY",
            "MULTISURFACE EMPTY",
            "POLYHEDRALSURFACE EMPTY",
            "TIN EMPTY",
            "TRIANGLE EMPTY",
        ] {
            let geom = parse(wkt).unwrap();
            assert!(geom.is_empty(), "{wkt}");
            assert_eq!(geom.dimension(), Dimension::XY, "{wkt}");
            assert_eq!(geom.srid(), None, "{wkt}");
        }
    }

    #[test]
    fn srid_propagates_to_collection_children() {
        let geom =
            parse("SRID=4326;GEOMETRYCOLLECTION(POINT(4 6),LINESTRING(4 6,7 10))").unwrap();
        assert_eq!(geom.srid(), Some("4326"));
        let collection = geom.into_geometry_collection().unwrap();
        assert_eq!(collection.geometries.len(), 2);
        for child in &collection.geometries {
            assert_eq!(child.srid(), Some("4326"));
        }
    }

    #[test]
    fn srid_prefix_on_leaf() {
        let geom = parse("SRID=2927;POINT (1 2)").unwrap();
        assert_eq!(geom.srid(), Some("2927"));
        // A leaf SRID does not become the ambient default.
        let geom = parse("GEOMETRYCOLLECTION (SRID=2927;POINT (1 2), POINT (3 4))").unwrap();
        let collection = geom.into_geometry_collection().unwrap();
        assert_eq!(collection.geometries[0].srid(), Some("2927"));
        assert_eq!(collection.geometries[1].srid(), None);
    }

    #[test]
    fn linear_ring_parses_as_line_string() {
        let geom = parse("LINEARRING (0 0, 4 0, 4 4, 0 0)").unwrap();
        let line = geom.into_line_string().unwrap();
        assert_eq!(line.coords.len(), 4);
    }

    #[test]
    fn polygon_with_hole() {
        let geom = parse(
            "POLYGON ((35 10, 45 45, 15 40, 10 20, 35 10), (20 30, 35 35, 30 20, 20 30))",
        )
        .unwrap();
        let polygon = geom.into_polygon().unwrap();
        assert_eq!(polygon.exterior.coords.len(), 5);
        assert_eq!(polygon.interiors.len(), 1);
        assert_eq!(polygon.interiors[0].coords.len(), 4);
    }

    #[test]
    fn multi_point_both_forms() {
        for wkt in [
            "MULTIPOINT (10 40, 40 30, 20 20, 30 10)",
            "MULTIPOINT ((10 40), (40 30), (20 20), (30 10))",
        ] {
            let geom = parse(wkt).unwrap();
            let mp = geom.into_multi_point().unwrap();
            assert_eq!(mp.points.len(), 4, "{wkt}");
            assert_eq!(mp.points[0].coord.unwrap(), Coord::xy(10.0, 40.0), "{wkt}");
        }
    }

    #[test]
    fn multi_point_member_dimension_is_per_coordinate() {
        let geom = parse("MULTIPOINT Z (1 2 3, 4 5 6)").unwrap();
        let mp = geom.into_multi_point().unwrap();
        assert_eq!(mp.dimension, Dimension::XYZ);
        for point in &mp.points {
            assert_eq!(point.dimension, Dimension::XYZ);
            assert_eq!(point.srid, None);
        }
    }

    #[test]
    fn compound_curve_elements() {
        let geom = parse("COMPOUNDCURVE (CIRCULARSTRING (1 0, 0 1, -1 0), (-1 0, 1 0))").unwrap();
        let cc = geom.into_compound_curve().unwrap();
        assert_eq!(cc.curves.len(), 2);
        assert!(matches!(cc.curves[0], Curve::CircularString(_)));
        assert!(matches!(cc.curves[1], Curve::LineString(_)));
        assert_eq!(cc.coordinate_count(), 5);
    }

    #[test]
    fn curve_polygon_exterior_and_interiors() {
        let geom = parse(
            "CURVEPOLYGON (CIRCULARSTRING (0 0, 4 0, 4 4, 0 4, 0 0), (1 1, 3 3, 3 1, 1 1))",
        )
        .unwrap();
        let cp = geom.into_curve_polygon().unwrap();
        assert!(matches!(cp.exterior, Curve::CircularString(_)));
        assert_eq!(cp.interiors.len(), 1);
    }

    #[test]
    fn multi_surface_elements() {
        let geom = parse(
            "MULTISURFACE (CURVEPOLYGON (CIRCULARSTRING (0 0, 4 0, 4 4, 0 4, 0 0)), \
             ((10 10, 14 12, 11 10, 10 10), (11 11, 11.5 11, 11 11.5, 11 11)))",
        )
        .unwrap();
        let ms = geom.into_multi_surface().unwrap();
        assert_eq!(ms.surfaces.len(), 2);
        assert!(matches!(ms.surfaces[0], Surface::CurvePolygon(_)));
        assert!(matches!(ms.surfaces[1], Surface::Polygon(_)));
    }

    #[test]
    fn tin_and_polyhedral_surface() {
        let geom = parse(
            "TIN (((0 0 0, 0 0 1, 0 1 0, 0 0 0)), ((0 0 0, 0 1 0, 1 1 0, 0 0 0)))",
        )
        .unwrap();
        let tin = geom.into_tin().unwrap();
        assert_eq!(tin.triangles.len(), 2);
        assert_eq!(tin.dimension, Dimension::XYZ);

        let geom = parse(
            "POLYHEDRALSURFACE Z (((0 0 0, 0 0 1, 0 1 1, 0 1 0, 0 0 0)), \
             ((0 0 0, 0 1 0, 1 1 0, 1 0 0, 0 0 0)))",
        )
        .unwrap();
        let phs = geom.into_polyhedral_surface().unwrap();
        assert_eq!(phs.polygons.len(), 2);
        assert_eq!(phs.coordinate_count(), 10);
    }

    #[test]
    fn syntax_errors() {
        for wkt in [
            "",
            "PINT (1 2)",
            "POINT (1)",
            "POINT (1 2",
            "POINT (a b)",
            "LINESTRING 1 2, 3 4",
            "POINT (1 2) extra",
            "SRID=abc;POINT (1 2)",
        ] {
            assert!(parse(wkt).is_err(), "{wkt:?} should not parse");
        }
    }

    #[test]
    fn nesting_depth_is_bounded() {
        let deep = format!(
            "{}POINT (1 2){}",
            "GEOMETRYCOLLECTION (".repeat(10_000),
            ")".repeat(10_000)
        );
        assert!(parse(&deep).is_err());

        let deep = format!(
            "{}(0 0, 1 1){}",
            "COMPOUNDCURVE (".repeat(10_000),
            ")".repeat(10_000)
        );
        assert!(parse(&deep).is_err());

        // Realistic nesting stays well inside the limit.
        let shallow = format!(
            "{}POINT (1 2){}",
            "GEOMETRYCOLLECTION (".repeat(20),
            ")".repeat(20)
        );
        assert!(parse(&shallow).is_ok());
    }

    #[test]
    fn lax_separators() {
        // The comma between coordinates is optional in the source grammar.
        let geom = parse("LINESTRING (1 2 , 3 4,5 6)").unwrap();
        assert_eq!(geom.coordinate_count(), 3);
    }
}
