use super::RawProjection;
use crate::core::constants::MERCATOR_MAX_LATITUDE;
use crate::core::geo::Point;
use std::f64::consts::FRAC_PI_4;

/// Spherical Mercator
#[derive(Debug, Clone, Copy, Default)]
pub struct Mercator;

impl RawProjection for Mercator {
    fn forward(&self, lambda: f64, phi: f64) -> Point {
        let limit = MERCATOR_MAX_LATITUDE.to_radians();
        let phi = phi.clamp(-limit, limit);
        Point::new(lambda, (FRAC_PI_4 + phi / 2.0).tan().ln())
    }
}

/// Lambert cylindrical equal-area family; a 45° standard parallel gives Gall-Peters
#[derive(Debug, Clone, Copy)]
pub struct CylindricalEqualArea {
    cos_parallel: f64,
}

impl CylindricalEqualArea {
    pub fn new(parallel: f64) -> Self {
        Self {
            cos_parallel: parallel.cos(),
        }
    }
}

impl RawProjection for CylindricalEqualArea {
    fn forward(&self, lambda: f64, phi: f64) -> Point {
        Point::new(lambda * self.cos_parallel, phi.sin() / self.cos_parallel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mercator_origin_and_symmetry() {
        let m = Mercator;
        let origin = m.forward(0.0, 0.0);
        assert!(origin.x.abs() < 1e-12 && origin.y.abs() < 1e-12);

        let north = m.forward(0.5, 0.6);
        let south = m.forward(0.5, -0.6);
        assert!((north.y + south.y).abs() < 1e-12);
        assert!(north.y > 0.6);
    }

    #[test]
    fn test_mercator_poles_stay_finite() {
        let m = Mercator;
        assert!(m.forward(0.0, 90f64.to_radians()).is_finite());
        assert!(m.forward(0.0, -90f64.to_radians()).is_finite());
    }

    #[test]
    fn test_gall_peters_extent() {
        let p = CylindricalEqualArea::new(45f64.to_radians());
        let pole = p.forward(std::f64::consts::PI, std::f64::consts::FRAC_PI_2);
        let expected_x = std::f64::consts::PI * 45f64.to_radians().cos();
        assert!((pole.x - expected_x).abs() < 1e-12);
        assert!((pole.y - 1.0 / 45f64.to_radians().cos()).abs() < 1e-12);
    }
}
