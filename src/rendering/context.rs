use crate::core::geo::Point;
use crate::core::panel::PanelSize;
use crate::rendering::path::{PathPart, ProjectedPath};
use crate::rendering::view::ViewFrame;
use serde::{Deserialize, Serialize};

/// RGBA, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, 255])
    }
}

#[cfg(feature = "egui")]
impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.0;
        egui::Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    pub round_join: bool,
}

/// Thin grey line for the fixed outline
pub const OUTLINE_STYLE: StrokeStyle = StrokeStyle {
    color: Color::rgb(150, 150, 150),
    width: 1.0,
    round_join: false,
};

/// The distortion path: stroke width 2, round joins
pub const DISTORTION_STYLE: StrokeStyle = StrokeStyle {
    color: Color::rgb(214, 39, 40),
    width: 2.0,
    round_join: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
}

/// Commands that can be issued to the render context
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Path {
        points: Vec<Point>,
        closed: bool,
        style: StrokeStyle,
    },
    Dot {
        center: Point,
        radius: f32,
        style: StrokeStyle,
    },
    Text {
        position: Point,
        text: String,
        size: f32,
        anchor: TextAnchor,
    },
}

/// Backend-neutral drawing queue for one panel. Points are in panel pixels;
/// the painter adds the panel's origin.
pub struct RenderContext {
    pub size: PanelSize,
    pub drawing_queue: Vec<DrawCommand>,
}

impl RenderContext {
    pub fn new(size: PanelSize) -> Self {
        Self {
            size,
            drawing_queue: Vec::new(),
        }
    }

    /// Begin a frame
    pub fn begin_frame(&mut self) {
        self.drawing_queue.clear();
    }

    /// Queue every part of a projected path with one style
    pub fn render_path(&mut self, path: &ProjectedPath, style: &StrokeStyle) {
        for part in path.parts() {
            let command = match part {
                PathPart::Ring(points) => DrawCommand::Path {
                    points: points.clone(),
                    closed: true,
                    style: style.clone(),
                },
                PathPart::Line(points) => DrawCommand::Path {
                    points: points.clone(),
                    closed: false,
                    style: style.clone(),
                },
                PathPart::Dot(center) => DrawCommand::Dot {
                    center: *center,
                    radius: crate::core::constants::POINT_RADIUS as f32,
                    style: style.clone(),
                },
            };
            self.drawing_queue.push(command);
        }
    }

    pub fn render_text(&mut self, position: Point, text: impl Into<String>, size: f32, anchor: TextAnchor) {
        self.drawing_queue.push(DrawCommand::Text {
            position,
            text: text.into(),
            size,
            anchor,
        });
    }

    /// Title, outline below, distortion on top
    pub fn render_view(&mut self, view: &ViewFrame) {
        self.render_text(Point::new(8.0, 8.0), view.spec().title, 14.0, TextAnchor::Start);
        self.render_path(view.outline(), &OUTLINE_STYLE);
        self.render_path(view.distortion(), &DISTORTION_STYLE);
    }

    /// Get the current drawing queue
    pub fn get_drawing_queue(&self) -> &[DrawCommand] {
        &self.drawing_queue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geojson::{GeoJsonGeometry, Shape};
    use crate::rendering::registry::STANDARD_VIEWS;
    use std::sync::Arc;

    #[test]
    fn test_render_view_orders_layers() {
        let shape = Arc::new(Shape::new(GeoJsonGeometry::MultiPolygon {
            coordinates: vec![
                vec![vec![[-70.0, 0.0], [-40.0, 0.0], [-40.0, -30.0], [-70.0, 0.0]]],
                vec![vec![[-30.0, -3.0], [-29.0, -3.0], [-29.0, -4.0], [-30.0, -3.0]]],
            ],
        }));
        let size = PanelSize::measure(300.0, 200.0);
        let view = ViewFrame::new(STANDARD_VIEWS[3], size, &shape);

        let mut ctx = RenderContext::new(size);
        ctx.render_view(&view);
        let queue = ctx.get_drawing_queue();
        assert_eq!(queue.len(), 1 + 2 + 2);
        assert!(matches!(queue[0], DrawCommand::Text { .. }));
        match (&queue[1], &queue[4]) {
            (
                DrawCommand::Path { style: under, closed: true, .. },
                DrawCommand::Path { style: over, .. },
            ) => {
                assert_eq!(under, &OUTLINE_STYLE);
                assert_eq!(over, &DISTORTION_STYLE);
            }
            other => panic!("unexpected queue {:?}", other),
        }

        ctx.begin_frame();
        assert!(ctx.get_drawing_queue().is_empty());
    }

    #[test]
    fn test_dots_for_points() {
        let path = ProjectedPath::from_geometry(
            &GeoJsonGeometry::MultiPoint {
                coordinates: vec![[0.0, 0.0], [1.0, 1.0]],
            },
            &crate::projection::ProjectionKind::Mercator.build(),
        );
        let mut ctx = RenderContext::new(PanelSize::measure(10.0, 10.0));
        ctx.render_path(&path, &DISTORTION_STYLE);
        assert_eq!(ctx.get_drawing_queue().len(), 2);
        assert!(ctx
            .get_drawing_queue()
            .iter()
            .all(|c| matches!(c, DrawCommand::Dot { radius, .. } if *radius == 4.5)));
    }
}
