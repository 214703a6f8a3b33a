use super::RawProjection;
use crate::core::geo::Point;
use std::f64::consts::FRAC_PI_2;

/// Winkel tripel: the mean of Aitoff and equirectangular with standard
/// parallel acos(2/π)
#[derive(Debug, Clone, Copy, Default)]
pub struct WinkelTripel;

fn sinci(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        x / x.sin()
    }
}

fn aitoff(lambda: f64, phi: f64) -> Point {
    let half = lambda / 2.0;
    let cos_phi = phi.cos();
    let alpha = (cos_phi * half.cos()).clamp(-1.0, 1.0).acos();
    let sincia = sinci(alpha);
    Point::new(2.0 * cos_phi * half.sin() * sincia, phi.sin() * sincia)
}

impl RawProjection for WinkelTripel {
    fn forward(&self, lambda: f64, phi: f64) -> Point {
        let a = aitoff(lambda, phi);
        Point::new((a.x + lambda / FRAC_PI_2) / 2.0, (a.y + phi) / 2.0)
    }
}
