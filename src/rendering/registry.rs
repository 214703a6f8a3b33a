use crate::core::geo::Point;
use crate::core::panel::PanelSize;
use crate::projection::ProjectionKind;
use serde::{Deserialize, Serialize};

/// Where a view puts its projection center, as fractions of its panel
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TranslatePolicy {
    pub fx: f64,
    pub fy: f64,
}

impl TranslatePolicy {
    pub const CENTER: TranslatePolicy = TranslatePolicy { fx: 0.5, fy: 0.5 };

    pub const fn new(fx: f64, fy: f64) -> Self {
        Self { fx, fy }
    }

    pub fn resolve(&self, panel: PanelSize) -> Point {
        Point::new(panel.width * self.fx, panel.height * self.fy)
    }
}

/// Static description of one view
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSpec {
    pub key: &'static str,
    pub title: &'static str,
    pub kind: ProjectionKind,
    /// Multiplies the fitted scale
    pub scale_factor: f64,
    pub translate: TranslatePolicy,
}

/// The four views of the stock viewer
pub const STANDARD_VIEWS: [ViewSpec; 4] = [
    ViewSpec {
        key: "mercator",
        title: "Mercator",
        kind: ProjectionKind::Mercator,
        scale_factor: 1.0,
        translate: TranslatePolicy::CENTER,
    },
    ViewSpec {
        key: "peters",
        title: "Gall-Peters",
        kind: ProjectionKind::CylindricalEqualArea { parallel: 45.0 },
        scale_factor: 1.0,
        translate: TranslatePolicy::CENTER,
    },
    ViewSpec {
        key: "albers",
        title: "Albers",
        // parallels adapted to Brazil
        kind: ProjectionKind::ConicEqualArea {
            parallels: [-5.0, -35.0],
        },
        scale_factor: 1.0,
        translate: TranslatePolicy::new(0.5, 0.1),
    },
    ViewSpec {
        key: "winkel",
        title: "Winkel tripel",
        kind: ProjectionKind::WinkelTripel,
        scale_factor: 1.0,
        translate: TranslatePolicy::CENTER,
    },
];

/// Ordered list of views the session builds
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRegistry {
    views: Vec<ViewSpec>,
}

impl ProjectionRegistry {
    pub fn new(views: Vec<ViewSpec>) -> Self {
        Self { views }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_VIEWS.to_vec())
    }

    pub fn views(&self) -> &[ViewSpec] {
        &self.views
    }

    pub fn get(&self, key: &str) -> Option<&ViewSpec> {
        self.views.iter().find(|spec| spec.key == key)
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}

impl Default for ProjectionRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
