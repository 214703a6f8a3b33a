pub mod geojson;
pub mod shift;
pub mod source;
