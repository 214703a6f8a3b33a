use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Represents a bounding box in screen/pixel coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// Creates new bounds from two points
    pub fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(Point::new(min_x, min_y), Point::new(max_x, max_y))
    }

    /// Smallest bounds holding every finite point, or `None` if there is none
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point>,
    {
        let mut bounds: Option<Bounds> = None;
        for point in points.into_iter().filter(|p| p.is_finite()) {
            match bounds {
                Some(ref mut b) => b.extend(point),
                None => bounds = Some(Bounds::new(*point, *point)),
            }
        }
        bounds
    }

    /// Gets the width of the bounds
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Gets the height of the bounds
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &Point) {
        self.min.x = self.min.x.min(point.x);
        self.min.y = self.min.y.min(point.y);
        self.max.x = self.max.x.max(point.x);
        self.max.y = self.max.y.max(point.y);
    }

    /// Extends the bounds to include another bounds
    pub fn extend_bounds(&mut self, other: &Bounds) {
        self.extend(&other.min);
        self.extend(&other.max);
    }

    /// True when the box has no area to fit into a panel
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_skips_non_finite() {
        let points = [
            Point::new(1.0, 2.0),
            Point::new(f64::NAN, 0.0),
            Point::new(-3.0, 5.0),
        ];
        let bounds = Bounds::from_points(points.iter()).unwrap();
        assert_eq!(bounds, Bounds::from_coords(-3.0, 2.0, 1.0, 5.0));
        assert_eq!(bounds.width(), 4.0);
        assert_eq!(bounds.height(), 3.0);
        assert_eq!(bounds.center(), Point::new(-1.0, 3.5));
    }

    #[test]
    fn test_empty_and_degenerate() {
        assert!(Bounds::from_points([].iter()).is_none());

        let single = Bounds::from_points([Point::new(2.0, 2.0)].iter()).unwrap();
        assert!(single.is_degenerate());

        let mut b = single.clone();
        b.extend_bounds(&Bounds::from_coords(0.0, 0.0, 1.0, 1.0));
        assert!(!b.is_degenerate());
        assert!(b.contains(&Point::new(1.5, 1.5)));
    }
}
