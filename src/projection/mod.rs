//! Map projections.
//!
//! A raw projection maps longitude/latitude in radians onto an unscaled plane
//! with y pointing north. [`Projection`] wraps one with a center, a scale and
//! a translation, producing screen pixels with y pointing down.

pub mod conic;
pub mod cylindrical;
pub mod transform;
pub mod winkel;

use crate::core::geo::{LatLng, Point};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub use conic::ConicEqualArea;
pub use cylindrical::{CylindricalEqualArea, Mercator};
pub use transform::Projection;
pub use winkel::WinkelTripel;

/// Below this, a conic collapses into its cylindrical limit
pub(crate) const EPSILON: f64 = 1e-6;

/// Unscaled forward projection, radians in
pub trait RawProjection: Send + Sync + std::fmt::Debug {
    fn forward(&self, lambda: f64, phi: f64) -> Point;
}

/// Which projection a view uses, with its parameters in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ProjectionKind {
    Mercator,
    CylindricalEqualArea { parallel: f64 },
    ConicEqualArea { parallels: [f64; 2] },
    WinkelTripel,
}

impl ProjectionKind {
    pub fn name(&self) -> &'static str {
        match self {
            ProjectionKind::Mercator => "Mercator",
            ProjectionKind::CylindricalEqualArea { .. } => "Cylindrical equal-area",
            ProjectionKind::ConicEqualArea { .. } => "Albers conic equal-area",
            ProjectionKind::WinkelTripel => "Winkel tripel",
        }
    }

    pub fn raw(&self) -> Arc<dyn RawProjection> {
        match *self {
            ProjectionKind::Mercator => Arc::new(Mercator),
            ProjectionKind::CylindricalEqualArea { parallel } => {
                Arc::new(CylindricalEqualArea::new(parallel.to_radians()))
            }
            ProjectionKind::ConicEqualArea { parallels } => Arc::new(ConicEqualArea::new(
                parallels[0].to_radians(),
                parallels[1].to_radians(),
            )),
            ProjectionKind::WinkelTripel => Arc::new(WinkelTripel),
        }
    }

    /// Geographic point placed at the translation; conics are centered north
    /// of the equator the way d3's `geoConicEqualArea` is.
    pub fn default_center(&self) -> LatLng {
        match self {
            ProjectionKind::ConicEqualArea { .. } => LatLng::new(33.6442, 0.0),
            _ => LatLng::default(),
        }
    }

    pub fn build(&self) -> Projection {
        Projection::new(self.raw()).with_center(self.default_center())
    }
}
