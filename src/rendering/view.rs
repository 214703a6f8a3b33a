use crate::core::panel::PanelSize;
use crate::data::geojson::Shape;
use crate::projection::Projection;
use crate::rendering::path::ProjectedPath;
use crate::rendering::registry::ViewSpec;
use std::sync::Arc;

/// Receives each freshly shifted shape
pub trait ShapeSubscriber {
    fn on_shape(&mut self, shape: &Arc<Shape>);
}

/// One projection panel: a fixed outline plus a distortion path that follows
/// the shifted shape.
#[derive(Debug, Clone)]
pub struct ViewFrame {
    spec: ViewSpec,
    size: PanelSize,
    projection: Projection,
    base_scale: f64,
    outline: ProjectedPath,
    distortion: ProjectedPath,
    distortion_source: Arc<Shape>,
}

impl ViewFrame {
    /// Fits the unshifted shape once; the projection never changes afterwards.
    pub fn new(spec: ViewSpec, size: PanelSize, shape: &Arc<Shape>) -> Self {
        let mut projection = spec.kind.build();
        projection.fit_size(size, &shape.geometry);
        // Remember the fitted scale so the factor is never applied twice.
        let base_scale = projection.scale();
        projection
            .set_scale(base_scale * spec.scale_factor)
            .set_translate(spec.translate.resolve(size));

        let outline = ProjectedPath::from_geometry(&shape.geometry, &projection);
        let distortion = outline.clone();
        log::debug!(
            "view {} ready: base scale {:.2}, {} outline points",
            spec.key,
            base_scale,
            outline.point_count()
        );

        Self {
            spec,
            size,
            projection,
            base_scale,
            outline,
            distortion,
            distortion_source: Arc::clone(shape),
        }
    }

    /// Rebinds the distortion path to `shape` and regenerates it
    pub fn redraw(&mut self, shape: &Arc<Shape>) {
        self.distortion = ProjectedPath::from_geometry(&shape.geometry, &self.projection);
        self.distortion_source = Arc::clone(shape);
    }

    pub fn spec(&self) -> &ViewSpec {
        &self.spec
    }

    pub fn key(&self) -> &'static str {
        self.spec.key
    }

    pub fn size(&self) -> PanelSize {
        self.size
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn base_scale(&self) -> f64 {
        self.base_scale
    }

    pub fn outline(&self) -> &ProjectedPath {
        &self.outline
    }

    pub fn distortion(&self) -> &ProjectedPath {
        &self.distortion
    }

    /// The shape the distortion path was last drawn from
    pub fn distortion_source(&self) -> &Arc<Shape> {
        &self.distortion_source
    }
}

impl ShapeSubscriber for ViewFrame {
    fn on_shape(&mut self, shape: &Arc<Shape>) {
        self.redraw(shape);
    }
}
