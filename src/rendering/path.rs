use crate::core::bounds::Bounds;
use crate::core::constants::{PATH_DIGITS, POINT_RADIUS};
use crate::core::geo::Point;
use crate::data::geojson::GeoJsonGeometry;
use crate::projection::Projection;
use std::fmt::Write;

/// One drawable piece of a projected geometry
#[derive(Debug, Clone, PartialEq)]
pub enum PathPart {
    /// Closed polygon ring, closing point not repeated
    Ring(Vec<Point>),
    Line(Vec<Point>),
    Dot(Point),
}

/// A geometry run through a projection, ready to paint or serialise
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectedPath {
    parts: Vec<PathPart>,
}

impl ProjectedPath {
    pub fn from_geometry(geometry: &GeoJsonGeometry, projection: &Projection) -> Self {
        let mut path = Self::default();
        path.push_geometry(geometry, projection);
        path
    }

    fn push_geometry(&mut self, geometry: &GeoJsonGeometry, projection: &Projection) {
        match geometry {
            GeoJsonGeometry::Point { coordinates } => self.push_dot(*coordinates, projection),
            GeoJsonGeometry::MultiPoint { coordinates } => coordinates
                .iter()
                .for_each(|c| self.push_dot(*c, projection)),
            GeoJsonGeometry::LineString { coordinates } => {
                self.push_line(coordinates, projection)
            }
            GeoJsonGeometry::MultiLineString { coordinates } => coordinates
                .iter()
                .for_each(|line| self.push_line(line, projection)),
            GeoJsonGeometry::Polygon { coordinates } => coordinates
                .iter()
                .for_each(|ring| self.push_ring(ring, projection)),
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .for_each(|ring| self.push_ring(ring, projection)),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .for_each(|g| self.push_geometry(g, projection)),
        }
    }

    fn push_dot(&mut self, position: [f64; 2], projection: &Projection) {
        let point = projection.project_position(position);
        if point.is_finite() {
            self.parts.push(PathPart::Dot(point));
        }
    }

    fn push_line(&mut self, line: &[[f64; 2]], projection: &Projection) {
        let points = project_all(line, projection);
        if points.len() >= 2 {
            self.parts.push(PathPart::Line(points));
        }
    }

    fn push_ring(&mut self, ring: &[[f64; 2]], projection: &Projection) {
        let mut points = project_all(ring, projection);
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if points.len() >= 2 {
            self.parts.push(PathPart::Ring(points));
        }
    }

    pub fn parts(&self) -> &[PathPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn point_count(&self) -> usize {
        self.parts
            .iter()
            .map(|part| match part {
                PathPart::Ring(points) | PathPart::Line(points) => points.len(),
                PathPart::Dot(_) => 1,
            })
            .sum()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        let points: Vec<Point> = self
            .parts
            .iter()
            .flat_map(|part| match part {
                PathPart::Ring(points) | PathPart::Line(points) => points.clone(),
                PathPart::Dot(p) => vec![*p],
            })
            .collect();
        Bounds::from_points(points.iter())
    }

    /// SVG path data, `M x,y L x,y ... Z` per ring
    pub fn to_svg_d(&self) -> String {
        let mut d = String::new();
        for part in &self.parts {
            match part {
                PathPart::Ring(points) => {
                    write_polyline(&mut d, points);
                    d.push('Z');
                }
                PathPart::Line(points) => write_polyline(&mut d, points),
                PathPart::Dot(p) => {
                    let r = format_number(POINT_RADIUS);
                    let dia = format_number(2.0 * POINT_RADIUS);
                    let _ = write!(
                        d,
                        "M{},{}m0,{r}a{r},{r} 0 1,1 0,-{dia}a{r},{r} 0 1,1 0,{dia}z",
                        format_number(p.x),
                        format_number(p.y),
                    );
                }
            }
        }
        d
    }
}

fn project_all(positions: &[[f64; 2]], projection: &Projection) -> Vec<Point> {
    positions
        .iter()
        .map(|p| projection.project_position(*p))
        .filter(Point::is_finite)
        .collect()
}

fn write_polyline(d: &mut String, points: &[Point]) {
    for (i, p) in points.iter().enumerate() {
        d.push(if i == 0 { 'M' } else { 'L' });
        let _ = write!(d, "{},{}", format_number(p.x), format_number(p.y));
    }
}

/// Fixed precision with trailing zeros dropped, and never `-0`
pub fn format_number(value: f64) -> String {
    let text = format!("{:.*}", PATH_DIGITS, value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionKind;

    /// Mercator at unit-ish scale so positions are easy to reason about
    fn plain() -> Projection {
        let mut projection = ProjectionKind::Mercator.build();
        projection.set_scale(180.0 / std::f64::consts::PI);
        projection
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1.0), "1");
        assert_eq!(format_number(1.23456), "1.235");
        assert_eq!(format_number(-0.0001), "0");
        assert_eq!(format_number(-12.5), "-12.5");
        assert_eq!(format_number(300.0), "300");
    }

    #[test]
    fn test_ring_drops_closing_point() {
        let geometry = GeoJsonGeometry::Polygon {
            coordinates: vec![vec![[0.0, 0.0], [10.0, 0.0], [10.0, 0.0], [0.0, 0.0]]],
        };
        let path = ProjectedPath::from_geometry(&geometry, &plain());
        assert_eq!(path.parts().len(), 1);
        assert_eq!(path.point_count(), 3);
        assert_eq!(path.to_svg_d(), "M0,0L10,0L10,0Z");
    }

    #[test]
    fn test_line_and_dot() {
        let geometry = GeoJsonGeometry::GeometryCollection {
            geometries: vec![
                GeoJsonGeometry::LineString {
                    coordinates: vec![[0.0, 0.0], [-20.0, 0.0]],
                },
                GeoJsonGeometry::Point {
                    coordinates: [5.0, 0.0],
                },
            ],
        };
        let path = ProjectedPath::from_geometry(&geometry, &plain());
        assert_eq!(
            path.to_svg_d(),
            "M0,0L-20,0M5,0m0,4.5a4.5,4.5 0 1,1 0,-9a4.5,4.5 0 1,1 0,9z"
        );
        let bounds = path.bounds().unwrap();
        assert_eq!(bounds.min.x, -20.0);
        assert_eq!(bounds.max.x, 5.0);
    }

    #[test]
    fn test_empty_geometry_has_no_parts() {
        let geometry = GeoJsonGeometry::MultiPolygon {
            coordinates: vec![],
        };
        let path = ProjectedPath::from_geometry(&geometry, &plain());
        assert!(path.is_empty());
        assert_eq!(path.to_svg_d(), "");
        assert!(path.bounds().is_none());
    }
}
