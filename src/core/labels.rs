use crate::core::offset::Offset;
use serde::{Deserialize, Serialize};

/// Text and placement of the two offset labels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetLabels {
    pub latitude_text: String,
    pub longitude_text: String,
    /// CSS-style `top` of the latitude label, percent of its container
    pub latitude_top_percent: f64,
    /// CSS-style `left` of the longitude label, percent of its container
    pub longitude_left_percent: f64,
}

impl OffsetLabels {
    /// Labels for `offset`; at full offset a label sits `travel_percent` away
    /// from the middle of its container.
    pub fn from_offset(offset: &Offset, max_offset: f64, travel_percent: f64) -> Self {
        let lat_nudge = offset.lat / max_offset * travel_percent;
        let lon_nudge = offset.lon / max_offset * travel_percent;
        Self {
            latitude_text: format_degrees(offset.lat),
            longitude_text: format_degrees(offset.lon),
            // north is up, so a positive latitude moves the label up
            latitude_top_percent: 50.0 - lat_nudge,
            longitude_left_percent: 50.0 + lon_nudge,
        }
    }

    pub fn latitude_top_css(&self) -> String {
        format!("calc(50% - {}%)", 50.0 - self.latitude_top_percent)
    }

    pub fn longitude_left_css(&self) -> String {
        format!("calc(50% + {}%)", self.longitude_left_percent - 50.0)
    }
}

/// One decimal and a degree sign
pub fn format_degrees(value: f64) -> String {
    format!("{:.1}°", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_is_centred() {
        let labels = OffsetLabels::from_offset(&Offset::default(), 180.0, 40.0);
        assert_eq!(labels.latitude_text, "0.0°");
        assert_eq!(labels.longitude_text, "0.0°");
        assert_eq!(labels.latitude_top_percent, 50.0);
        assert_eq!(labels.longitude_left_percent, 50.0);
    }

    #[test]
    fn test_full_offset_travels_forty_percent() {
        let labels = OffsetLabels::from_offset(&Offset::new(180.0, -180.0), 180.0, 40.0);
        assert_eq!(labels.latitude_text, "180.0°");
        assert_eq!(labels.longitude_text, "-180.0°");
        assert_eq!(labels.latitude_top_percent, 10.0);
        assert_eq!(labels.longitude_left_percent, 10.0);
    }

    #[test]
    fn test_partial_offset() {
        let labels = OffsetLabels::from_offset(&Offset::new(8.0, 45.0), 180.0, 40.0);
        assert_eq!(labels.latitude_text, "8.0°");
        assert_eq!(labels.longitude_text, "45.0°");
        assert_eq!(labels.longitude_left_percent, 60.0);
        assert_eq!(labels.longitude_left_css(), "calc(50% + 10%)");
        assert_eq!(format_degrees(12.345), "12.3°");
    }
}
