use serde::{Deserialize, Serialize};

/// The shared latitude/longitude delta applied to the base shape.
///
/// Both axes are kept within `[-max, max]`; latitude is additionally clamped
/// per point to `[-90, 90]` when the shape is shifted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub lat: f64,
    pub lon: f64,
}

impl Offset {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds an offset with each axis clamped to `[-max_offset, max_offset]`
    pub fn clamped(lat: f64, lon: f64, max_offset: f64) -> Self {
        Self::new(
            clamp_offset(lat, max_offset),
            clamp_offset(lon, max_offset),
        )
    }

    pub fn is_zero(&self) -> bool {
        self.lat == 0.0 && self.lon == 0.0
    }
}

pub fn clamp_offset(value: f64, max_offset: f64) -> f64 {
    value.clamp(-max_offset, max_offset)
}
