//! The running viewer: one shape, one offset, many views.

use crate::core::config::ViewerConfig;
use crate::core::coordinator::UpdateCoordinator;
use crate::core::labels::OffsetLabels;
use crate::core::offset::Offset;
use crate::core::panel::PanelSize;
use crate::data::geojson::Shape;
use crate::input::drag::DragController;
use crate::input::events::{EventHandled, InputEvent};
use crate::rendering::registry::ProjectionRegistry;
use crate::rendering::view::ViewFrame;
use crate::{MapError, Result};
use std::sync::Arc;

pub struct ProjectionSession {
    panel: PanelSize,
    controller: DragController,
    coordinator: UpdateCoordinator,
    views: Vec<ViewFrame>,
}

impl ProjectionSession {
    /// Builds every registered view from the unshifted shape and draws the
    /// initial zero-offset state.
    pub fn new(
        shape: Shape,
        panel: PanelSize,
        registry: &ProjectionRegistry,
        config: &ViewerConfig,
    ) -> Result<Self> {
        config.validate()?;
        if registry.is_empty() {
            return Err(MapError::Render("no views registered".to_string()));
        }

        let original = Arc::new(shape);
        let views = registry
            .views()
            .iter()
            .map(|spec| ViewFrame::new(*spec, panel, &original))
            .collect();

        let mut session = Self {
            panel,
            controller: DragController::new(config.drag_sensitivity, config.max_offset),
            coordinator: UpdateCoordinator::new(
                original,
                config.max_offset,
                config.label_travel_percent,
            ),
            views,
        };
        session.refresh();
        log::info!(
            "session ready: {} views at {}x{}",
            session.views.len(),
            panel.width,
            panel.height
        );
        Ok(session)
    }

    /// The stock four views with default settings
    pub fn standard(shape: Shape, panel: PanelSize) -> Result<Self> {
        Self::new(
            shape,
            panel,
            &ProjectionRegistry::standard(),
            &ViewerConfig::default(),
        )
    }

    /// Routes an event to the drag controller and, if the offset moved,
    /// redraws every view before returning.
    pub fn handle_input(&mut self, event: &InputEvent) -> EventHandled {
        let handled = self.controller.process_input(event);
        if handled == EventHandled::Handled {
            self.refresh();
        }
        handled
    }

    /// Jumps straight to an offset (clamped)
    pub fn set_offset(&mut self, offset: Offset) {
        if self.controller.set_offset(offset) {
            self.refresh();
        }
    }

    pub fn reset(&mut self) {
        self.handle_input(&InputEvent::Reset);
    }

    fn refresh(&mut self) {
        let offset = self.controller.offset();
        self.coordinator.update(&offset, &mut self.views);
    }

    pub fn offset(&self) -> Offset {
        self.controller.offset()
    }

    pub fn is_dragging(&self) -> bool {
        self.controller.is_dragging()
    }

    pub fn panel(&self) -> PanelSize {
        self.panel
    }

    pub fn views(&self) -> &[ViewFrame] {
        &self.views
    }

    pub fn view(&self, key: &str) -> Option<&ViewFrame> {
        self.views.iter().find(|view| view.key() == key)
    }

    pub fn labels(&self) -> &OffsetLabels {
        self.coordinator.labels()
    }

    pub fn original_shape(&self) -> &Arc<Shape> {
        self.coordinator.original()
    }

    pub fn shifted_shape(&self) -> &Arc<Shape> {
        self.coordinator.current()
    }

    pub fn update_count(&self) -> u64 {
        self.coordinator.update_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::Point;
    use crate::data::geojson::GeoJsonGeometry;

    fn session() -> ProjectionSession {
        let shape = Shape::new(GeoJsonGeometry::Polygon {
            coordinates: vec![vec![
                [-70.0, 4.0],
                [-35.0, -5.0],
                [-53.0, -33.0],
                [-70.0, 4.0],
            ]],
        });
        ProjectionSession::standard(shape, PanelSize::measure(600.0, 400.0)).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.views().len(), 4);
        assert!(session.offset().is_zero());
        assert_eq!(session.update_count(), 1);
        for view in session.views() {
            assert_eq!(view.outline(), view.distortion());
        }
    }

    #[test]
    fn test_drag_updates_all_views_once() {
        let mut session = session();
        session.handle_input(&InputEvent::DragStart {
            position: Point::new(10.0, 100.0),
        });
        assert_eq!(session.update_count(), 1);

        let handled = session.handle_input(&InputEvent::Drag {
            position: Point::new(10.0, 80.0),
        });
        assert_eq!(handled, EventHandled::Handled);
        assert_eq!(session.update_count(), 2);
        assert_eq!(session.labels().latitude_text, "8.0°");

        let shifted = session.shifted_shape();
        for view in session.views() {
            assert!(Arc::ptr_eq(view.distortion_source(), shifted));
            assert_ne!(view.outline(), view.distortion());
        }

        session.handle_input(&InputEvent::DragEnd);
        assert!((session.offset().lat - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_reset_restores_outline() {
        let mut session = session();
        session.set_offset(Offset::new(30.0, 30.0));
        session.reset();
        assert!(session.offset().is_zero());
        for view in session.views() {
            assert_eq!(view.outline(), view.distortion());
        }
    }

    #[test]
    fn test_empty_registry_rejected() {
        let shape = Shape::new(GeoJsonGeometry::Point {
            coordinates: [0.0, 0.0],
        });
        let result = ProjectionSession::new(
            shape,
            PanelSize::measure(10.0, 10.0),
            &ProjectionRegistry::new(Vec::new()),
            &ViewerConfig::default(),
        );
        assert!(matches!(result, Err(MapError::Render(_))));
    }
}
