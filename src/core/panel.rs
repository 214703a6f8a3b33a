use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Pixel size shared by every view, measured once from the layout container.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl PanelSize {
    /// Never smaller than 1x1, so fitting never divides by zero
    pub fn measure(width: f64, height: f64) -> Self {
        Self {
            width: floor_one(width),
            height: floor_one(height),
        }
    }

    /// Size of one cell when the container is split into a `columns x rows` grid
    pub fn cell_of(container: PanelSize, columns: usize, rows: usize) -> Self {
        Self::measure(
            container.width / columns.max(1) as f64,
            container.height / rows.max(1) as f64,
        )
    }

    pub fn as_point(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[cfg(feature = "egui")]
    pub fn from_rect(rect: egui::Rect) -> Self {
        Self::measure(rect.width() as f64, rect.height() as f64)
    }
}

fn floor_one(value: f64) -> f64 {
    if value.is_nan() {
        1.0
    } else {
        value.max(1.0)
    }
}
