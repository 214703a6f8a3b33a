use crate::{MapError, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Feature properties; shared by reference between a shape and its shifted copies
pub type Properties = HashMap<String, Value>;

/// Geometry type tags this crate can draw
pub const GEOMETRY_TYPES: [&str; 7] = [
    "Point",
    "MultiPoint",
    "LineString",
    "MultiLineString",
    "Polygon",
    "MultiPolygon",
    "GeometryCollection",
];

/// GeoJSON geometry; each variant fixes its coordinate nesting depth
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        #[serde(deserialize_with = "positions::point")]
        coordinates: [f64; 2],
    },
    LineString {
        #[serde(deserialize_with = "positions::line")]
        coordinates: Vec<[f64; 2]>,
    },
    Polygon {
        #[serde(deserialize_with = "positions::rings")]
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPoint {
        #[serde(deserialize_with = "positions::line")]
        coordinates: Vec<[f64; 2]>,
    },
    MultiLineString {
        #[serde(deserialize_with = "positions::rings")]
        coordinates: Vec<Vec<[f64; 2]>>,
    },
    MultiPolygon {
        #[serde(deserialize_with = "positions::polygons")]
        coordinates: Vec<Vec<Vec<[f64; 2]>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// Position readers. Altitude and any further members are dropped.
mod positions {
    use super::*;

    struct Position([f64; 2]);

    impl<'de> Deserialize<'de> for Position {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
            let values = Vec::<f64>::deserialize(deserializer)?;
            match values.as_slice() {
                [lon, lat, ..] => Ok(Position([*lon, *lat])),
                _ => Err(de::Error::invalid_length(
                    values.len(),
                    &"a position with at least 2 numbers",
                )),
            }
        }
    }

    fn unwrap_line(line: Vec<Position>) -> Vec<[f64; 2]> {
        line.into_iter().map(|p| p.0).collect()
    }

    fn unwrap_rings(rings: Vec<Vec<Position>>) -> Vec<Vec<[f64; 2]>> {
        rings.into_iter().map(unwrap_line).collect()
    }

    pub(super) fn point<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<[f64; 2], D::Error> {
        Position::deserialize(deserializer).map(|p| p.0)
    }

    pub(super) fn line<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Vec<[f64; 2]>, D::Error> {
        Vec::<Position>::deserialize(deserializer).map(unwrap_line)
    }

    pub(super) fn rings<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Vec<Vec<[f64; 2]>>, D::Error> {
        Vec::<Vec<Position>>::deserialize(deserializer).map(unwrap_rings)
    }

    pub(super) fn polygons<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Vec<Vec<Vec<[f64; 2]>>>, D::Error> {
        Vec::<Vec<Vec<Position>>>::deserialize(deserializer)
            .map(|polygons| polygons.into_iter().map(unwrap_rings).collect())
    }
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<Arc<Properties>>,
}

/// Root GeoJSON object. Of a collection only the first feature is parsed;
/// the others are counted and never looked at.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection {
        first: GeoJsonFeature,
        discarded: usize,
    },
    Geometry(GeoJsonGeometry),
}

/// The one outline the viewer works on: a feature whose geometry is known to exist.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub id: Option<Value>,
    pub properties: Option<Arc<Properties>>,
    pub geometry: GeoJsonGeometry,
}

impl FromStr for GeoJson {
    type Err = MapError;

    /// Parses a GeoJSON document, telling malformed input apart from
    /// geometry types this crate does not support.
    fn from_str(geojson_str: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(geojson_str)
            .map_err(|e| MapError::MalformedGeometry(format!("invalid JSON: {}", e)))?;
        Self::from_value(value)
    }
}

impl GeoJson {
    pub fn from_value(value: Value) -> Result<Self> {
        let tag = type_tag(&value)?.to_string();
        match tag.as_str() {
            "Feature" => Ok(GeoJson::Feature(parse_feature(value)?)),
            "FeatureCollection" => match value.get("features") {
                Some(Value::Array(items)) => {
                    let first = items.first().cloned().ok_or_else(|| {
                        MapError::MalformedGeometry("FeatureCollection has no features".to_string())
                    })?;
                    Ok(GeoJson::FeatureCollection {
                        first: parse_feature(first)?,
                        discarded: items.len() - 1,
                    })
                }
                _ => Err(MapError::MalformedGeometry(
                    "FeatureCollection without a features array".to_string(),
                )),
            },
            _ => Ok(GeoJson::Geometry(parse_geometry(value)?)),
        }
    }

    /// Picks the shape to display. A collection contributes only its first
    /// feature; the rest are dropped with a warning.
    pub fn into_shape(self) -> Result<Shape> {
        match self {
            GeoJson::Feature(feature) => Shape::from_feature(feature),
            GeoJson::FeatureCollection { first, discarded } => {
                if discarded > 0 {
                    log::warn!(
                        "FeatureCollection has {} more features; only the first is shown",
                        discarded
                    );
                }
                Shape::from_feature(first)
            }
            GeoJson::Geometry(geometry) => Ok(Shape {
                id: None,
                properties: None,
                geometry,
            }),
        }
    }
}

fn type_tag(value: &Value) -> Result<&str> {
    match value.get("type") {
        Some(Value::String(tag)) => Ok(tag.as_str()),
        Some(other) => Err(MapError::MalformedGeometry(format!(
            "type must be a string, got {}",
            other
        ))),
        None => Err(MapError::MalformedGeometry(
            "object has no type member".to_string(),
        )),
    }
}

fn parse_feature(value: Value) -> Result<GeoJsonFeature> {
    let tag = type_tag(&value)?;
    if tag != "Feature" {
        return Err(MapError::MalformedGeometry(format!(
            "expected a Feature, got {}",
            tag
        )));
    }

    let geometry = match value.get("geometry") {
        None | Some(Value::Null) => None,
        Some(geometry) => Some(parse_geometry(geometry.clone())?),
    };
    let id = value.get("id").cloned();
    let properties = match value.get("properties") {
        None | Some(Value::Null) => None,
        Some(props) => Some(Arc::new(
            serde_json::from_value::<Properties>(props.clone()).map_err(|e| {
                MapError::MalformedGeometry(format!("properties must be an object: {}", e))
            })?,
        )),
    };

    Ok(GeoJsonFeature {
        id,
        geometry,
        properties,
    })
}

fn parse_geometry(value: Value) -> Result<GeoJsonGeometry> {
    let tag = type_tag(&value)?;
    if !GEOMETRY_TYPES.contains(&tag) {
        return Err(MapError::UnsupportedGeometry(tag.to_string()));
    }
    if tag == "GeometryCollection" {
        // Check members one by one so an unknown member type is reported as such.
        if let Some(Value::Array(members)) = value.get("geometries") {
            for member in members {
                parse_geometry(member.clone())?;
            }
        }
    }
    let tag = tag.to_string();
    serde_json::from_value(value)
        .map_err(|e| MapError::MalformedGeometry(format!("bad {} coordinates: {}", tag, e)))
}

impl Shape {
    pub fn new(geometry: GeoJsonGeometry) -> Self {
        Self {
            id: None,
            properties: None,
            geometry,
        }
    }

    pub fn from_feature(feature: GeoJsonFeature) -> Result<Self> {
        let geometry = feature.geometry.ok_or_else(|| {
            MapError::MalformedGeometry("feature has no geometry".to_string())
        })?;
        Ok(Self {
            id: feature.id,
            properties: feature.properties,
            geometry,
        })
    }

    /// A property value as text, e.g. the country name
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }

    pub fn to_feature(&self) -> GeoJsonFeature {
        GeoJsonFeature {
            id: self.id.clone(),
            geometry: Some(self.geometry.clone()),
            properties: self.properties.clone(),
        }
    }
}

impl FromStr for Shape {
    type Err = MapError;

    fn from_str(geojson_str: &str) -> Result<Self> {
        geojson_str.parse::<GeoJson>()?.into_shape()
    }
}

impl GeoJsonGeometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            GeoJsonGeometry::Point { .. } => "Point",
            GeoJsonGeometry::LineString { .. } => "LineString",
            GeoJsonGeometry::Polygon { .. } => "Polygon",
            GeoJsonGeometry::MultiPoint { .. } => "MultiPoint",
            GeoJsonGeometry::MultiLineString { .. } => "MultiLineString",
            GeoJsonGeometry::MultiPolygon { .. } => "MultiPolygon",
            GeoJsonGeometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Every `[lon, lat]` leaf, holes and collection members included
    pub fn positions(&self) -> Vec<[f64; 2]> {
        let mut out = Vec::new();
        self.collect_positions(&mut out);
        out
    }

    fn collect_positions(&self, out: &mut Vec<[f64; 2]>) {
        match self {
            GeoJsonGeometry::Point { coordinates } => out.push(*coordinates),
            GeoJsonGeometry::LineString { coordinates }
            | GeoJsonGeometry::MultiPoint { coordinates } => out.extend(coordinates),
            GeoJsonGeometry::Polygon { coordinates }
            | GeoJsonGeometry::MultiLineString { coordinates } => {
                coordinates.iter().for_each(|ring| out.extend(ring))
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flatten()
                .for_each(|ring| out.extend(ring)),
            GeoJsonGeometry::GeometryCollection { geometries } => geometries
                .iter()
                .for_each(|geometry| geometry.collect_positions(out)),
        }
    }

    /// Same variant and same nesting lengths at every level
    pub fn same_structure(&self, other: &GeoJsonGeometry) -> bool {
        fn lens<T>(a: &[Vec<T>], b: &[Vec<T>]) -> bool {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.len() == y.len())
        }

        match (self, other) {
            (GeoJsonGeometry::Point { .. }, GeoJsonGeometry::Point { .. }) => true,
            (
                GeoJsonGeometry::LineString { coordinates: a },
                GeoJsonGeometry::LineString { coordinates: b },
            )
            | (
                GeoJsonGeometry::MultiPoint { coordinates: a },
                GeoJsonGeometry::MultiPoint { coordinates: b },
            ) => a.len() == b.len(),
            (
                GeoJsonGeometry::Polygon { coordinates: a },
                GeoJsonGeometry::Polygon { coordinates: b },
            )
            | (
                GeoJsonGeometry::MultiLineString { coordinates: a },
                GeoJsonGeometry::MultiLineString { coordinates: b },
            ) => lens(a, b),
            (
                GeoJsonGeometry::MultiPolygon { coordinates: a },
                GeoJsonGeometry::MultiPolygon { coordinates: b },
            ) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| lens(x, y)),
            (
                GeoJsonGeometry::GeometryCollection { geometries: a },
                GeoJsonGeometry::GeometryCollection { geometries: b },
            ) => a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.same_structure(y)),
            _ => false,
        }
    }
}
