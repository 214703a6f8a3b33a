use super::{CylindricalEqualArea, RawProjection, EPSILON};
use crate::core::geo::Point;

/// Albers conic equal-area with two standard parallels
#[derive(Debug, Clone, Copy)]
pub enum ConicEqualArea {
    Conic { n: f64, c: f64, r0: f64 },
    /// Parallels symmetric about the equator degenerate to a cylinder
    Cylindrical(CylindricalEqualArea),
}

impl ConicEqualArea {
    pub fn new(phi0: f64, phi1: f64) -> Self {
        let sin0 = phi0.sin();
        let n = (sin0 + phi1.sin()) / 2.0;
        if n.abs() < EPSILON {
            return ConicEqualArea::Cylindrical(CylindricalEqualArea::new(phi0));
        }
        let c = 1.0 + sin0 * (2.0 * n - sin0);
        let r0 = c.sqrt() / n;
        ConicEqualArea::Conic { n, c, r0 }
    }
}

impl RawProjection for ConicEqualArea {
    fn forward(&self, lambda: f64, phi: f64) -> Point {
        match *self {
            ConicEqualArea::Conic { n, c, r0 } => {
                let r = (c - 2.0 * n * phi.sin()).max(0.0).sqrt() / n;
                let theta = lambda * n;
                Point::new(r * theta.sin(), r0 - r * theta.cos())
            }
            ConicEqualArea::Cylindrical(cylinder) => cylinder.forward(lambda, phi),
        }
    }
}
