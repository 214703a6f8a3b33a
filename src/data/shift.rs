//! Applies a latitude/longitude offset to a shape.
//!
//! Each axis is clamped on its own after the offset is added, longitude to
//! [-180, 180] and latitude to [-90, 90]. Near the clamp edges this flattens
//! the outline; that distortion is part of what the viewer shows.

use crate::core::geo::LatLng;
use crate::core::offset::Offset;
use crate::data::geojson::{GeoJsonGeometry, Shape};

/// Shifts one `[lon, lat]` position
pub fn shift_position(position: [f64; 2], d_lat: f64, d_lon: f64) -> [f64; 2] {
    LatLng::from_position(position)
        .offset_clamped(d_lat, d_lon)
        .to_position()
}

fn shift_line(line: &[[f64; 2]], d_lat: f64, d_lon: f64) -> Vec<[f64; 2]> {
    line.iter()
        .map(|p| shift_position(*p, d_lat, d_lon))
        .collect()
}

fn shift_rings(rings: &[Vec<[f64; 2]>], d_lat: f64, d_lon: f64) -> Vec<Vec<[f64; 2]>> {
    rings
        .iter()
        .map(|ring| shift_line(ring, d_lat, d_lon))
        .collect()
}

impl GeoJsonGeometry {
    /// A new geometry of the same kind with every position shifted
    pub fn shifted(&self, d_lat: f64, d_lon: f64) -> GeoJsonGeometry {
        match self {
            GeoJsonGeometry::Point { coordinates } => GeoJsonGeometry::Point {
                coordinates: shift_position(*coordinates, d_lat, d_lon),
            },
            GeoJsonGeometry::LineString { coordinates } => GeoJsonGeometry::LineString {
                coordinates: shift_line(coordinates, d_lat, d_lon),
            },
            GeoJsonGeometry::MultiPoint { coordinates } => GeoJsonGeometry::MultiPoint {
                coordinates: shift_line(coordinates, d_lat, d_lon),
            },
            GeoJsonGeometry::Polygon { coordinates } => GeoJsonGeometry::Polygon {
                coordinates: shift_rings(coordinates, d_lat, d_lon),
            },
            GeoJsonGeometry::MultiLineString { coordinates } => {
                GeoJsonGeometry::MultiLineString {
                    coordinates: shift_rings(coordinates, d_lat, d_lon),
                }
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => GeoJsonGeometry::MultiPolygon {
                coordinates: coordinates
                    .iter()
                    .map(|polygon| shift_rings(polygon, d_lat, d_lon))
                    .collect(),
            },
            GeoJsonGeometry::GeometryCollection { geometries } => {
                GeoJsonGeometry::GeometryCollection {
                    geometries: geometries
                        .iter()
                        .map(|geometry| geometry.shifted(d_lat, d_lon))
                        .collect(),
                }
            }
        }
    }
}

/// Returns a new shape with freshly built geometry. `properties` and `id` are
/// shared with the input, which is left untouched.
pub fn shift(shape: &Shape, d_lat: f64, d_lon: f64) -> Shape {
    Shape {
        id: shape.id.clone(),
        properties: shape.properties.clone(),
        geometry: shape.geometry.shifted(d_lat, d_lon),
    }
}

/// [`shift`] driven by an [`Offset`]
pub fn shift_by(shape: &Shape, offset: &Offset) -> Shape {
    shift(shape, offset.lat, offset.lon)
}
