//! Engine-wide magic numbers, kept in one place so the demo is easy to retune.

/// Largest offset, in degrees, the drag may request on either axis.
pub const MAX_OFFSET: f64 = 180.0;

/// Drag sensitivity: degrees of offset per pixel of pointer travel.
pub const DRAG_SENSITIVITY: f64 = 0.4;

/// How far (in percent of the container) a label may travel from center at
/// full offset. Kept below 50 so the labels never cover the axis captions.
pub const LABEL_TRAVEL_PERCENT: f64 = 40.0;

/// Where the outline is loaded from unless configured otherwise.
pub const DEFAULT_DATA_SOURCE: &str = "data/brazil-country_limits.geojson";

/// Mercator is undefined at the poles; latitudes are limited to this value.
pub const MERCATOR_MAX_LATITUDE: f64 = 85.0511287798;

/// Scale every projection starts from before fitting (d3's default).
pub const BASE_PROJECTION_SCALE: f64 = 150.0;

/// Radius, in pixels, of the circle drawn for point geometries.
pub const POINT_RADIUS: f64 = 4.5;

/// Decimal digits kept in generated SVG path data.
pub const PATH_DIGITS: usize = 3;

/// Default application window size.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
