use super::RawProjection;
use crate::core::bounds::Bounds;
use crate::core::constants::BASE_PROJECTION_SCALE;
use crate::core::geo::{LatLng, Point};
use crate::core::panel::PanelSize;
use crate::data::geojson::GeoJsonGeometry;
use std::sync::Arc;

/// A raw projection placed on screen: `center` lands on `translate`, and one
/// raw unit spans `scale` pixels.
#[derive(Debug, Clone)]
pub struct Projection {
    raw: Arc<dyn RawProjection>,
    scale: f64,
    translate: Point,
    center: LatLng,
    center_raw: Point,
}

impl Projection {
    pub fn new(raw: Arc<dyn RawProjection>) -> Self {
        let center = LatLng::default();
        let center_raw = raw.forward(0.0, 0.0);
        Self {
            raw,
            scale: BASE_PROJECTION_SCALE,
            translate: Point::default(),
            center,
            center_raw,
        }
    }

    pub fn with_center(mut self, center: LatLng) -> Self {
        self.center = center;
        self.center_raw = self
            .raw
            .forward(center.lng.to_radians(), center.lat.to_radians());
        self
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f64) -> &mut Self {
        self.scale = scale;
        self
    }

    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn set_translate(&mut self, translate: Point) -> &mut Self {
        self.translate = translate;
        self
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    /// Geographic coordinate to screen pixels (y down)
    pub fn project(&self, coord: &LatLng) -> Point {
        let raw = self
            .raw
            .forward(coord.lng.to_radians(), coord.lat.to_radians());
        Point::new(
            self.translate.x + self.scale * (raw.x - self.center_raw.x),
            self.translate.y - self.scale * (raw.y - self.center_raw.y),
        )
    }

    /// GeoJSON `[lon, lat]` to screen pixels
    pub fn project_position(&self, position: [f64; 2]) -> Point {
        self.project(&LatLng::from_position(position))
    }

    /// Screen-space bounding box of a geometry under the current transform
    pub fn bounds_of(&self, geometry: &GeoJsonGeometry) -> Option<Bounds> {
        let projected: Vec<Point> = geometry
            .positions()
            .into_iter()
            .map(|p| self.project_position(p))
            .collect();
        Bounds::from_points(projected.iter())
    }

    /// Sets scale and translation so the geometry fills `size`, centred.
    ///
    /// Returns false and leaves the projection untouched when the geometry has
    /// no extent to fit (no finite points, or a single point).
    pub fn fit_size(&mut self, size: PanelSize, geometry: &GeoJsonGeometry) -> bool {
        let previous = (self.scale, self.translate);
        self.scale = BASE_PROJECTION_SCALE;
        self.translate = Point::default();

        let bounds = match self.bounds_of(geometry) {
            Some(bounds) if !bounds.is_degenerate() => bounds,
            _ => {
                log::warn!(
                    "cannot fit {} into {}x{}: no extent",
                    geometry.type_name(),
                    size.width,
                    size.height
                );
                (self.scale, self.translate) = previous;
                return false;
            }
        };

        let k = (size.width / bounds.width()).min(size.height / bounds.height());
        self.scale = BASE_PROJECTION_SCALE * k;
        self.translate = Point::new(
            (size.width - k * (bounds.max.x + bounds.min.x)) / 2.0,
            (size.height - k * (bounds.max.y + bounds.min.y)) / 2.0,
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::ProjectionKind;

    fn square() -> GeoJsonGeometry {
        GeoJsonGeometry::Polygon {
            coordinates: vec![vec![
                [-60.0, -20.0],
                [-40.0, -20.0],
                [-40.0, 0.0],
                [-60.0, 0.0],
                [-60.0, -20.0],
            ]],
        }
    }

    #[test]
    fn test_y_axis_points_down() {
        let projection = ProjectionKind::Mercator.build();
        let north = projection.project(&LatLng::new(10.0, 0.0));
        let south = projection.project(&LatLng::new(-10.0, 0.0));
        assert!(north.y < south.y);
    }

    #[test]
    fn test_fit_size_fills_and_centres() {
        let size = PanelSize::measure(600.0, 400.0);
        for kind in [
            ProjectionKind::Mercator,
            ProjectionKind::CylindricalEqualArea { parallel: 45.0 },
            ProjectionKind::ConicEqualArea {
                parallels: [-5.0, -35.0],
            },
            ProjectionKind::WinkelTripel,
        ] {
            let mut projection = kind.build();
            assert!(projection.fit_size(size, &square()));

            let bounds = projection.bounds_of(&square()).unwrap();
            let fills_width = (bounds.width() - 600.0).abs() < 1e-6;
            let fills_height = (bounds.height() - 400.0).abs() < 1e-6;
            assert!(fills_width || fills_height, "{} not fitted", kind.name());
            assert!(bounds.width() <= 600.0 + 1e-6 && bounds.height() <= 400.0 + 1e-6);

            let centre = bounds.center();
            assert!((centre.x - 300.0).abs() < 1e-6);
            assert!((centre.y - 200.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_fit_size_rejects_single_point() {
        let mut projection = ProjectionKind::Mercator.build();
        projection.set_scale(42.0).set_translate(Point::new(1.0, 2.0));
        let point = GeoJsonGeometry::Point {
            coordinates: [-50.0, -10.0],
        };
        assert!(!projection.fit_size(PanelSize::measure(100.0, 100.0), &point));
        assert_eq!(projection.scale(), 42.0);
        assert_eq!(projection.translate(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_center_lands_on_translate() {
        let mut projection = ProjectionKind::ConicEqualArea {
            parallels: [-5.0, -35.0],
        }
        .build();
        projection.set_translate(Point::new(320.0, 24.0));
        let p = projection.project(&projection.center());
        assert!((p.x - 320.0).abs() < 1e-9);
        assert!((p.y - 24.0).abs() < 1e-9);
    }
}
