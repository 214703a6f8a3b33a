use crate::core::{geo::Point, session::ProjectionSession};
use crate::input::events::InputEvent;
use crate::rendering::context::{DrawCommand, RenderContext, StrokeStyle, TextAnchor};
use egui::{Align2, Color32, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2, Widget};

/// The projection views laid out in a grid, with the two offset labels.
///
/// Dragging anywhere on the grid moves the shared offset; double-click resets it.
///
/// ```rust,ignore
/// ui.add(ProjectionGrid::new(&mut session));
/// ```
pub struct ProjectionGrid<'a> {
    session: &'a mut ProjectionSession,
    columns: usize,
    background: Color32,
    label_color: Color32,
}

impl<'a> ProjectionGrid<'a> {
    pub fn new(session: &'a mut ProjectionSession) -> Self {
        Self {
            session,
            columns: 2,
            background: Color32::from_rgb(250, 250, 248),
            label_color: Color32::from_gray(40),
        }
    }

    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = columns.max(1);
        self
    }

    pub fn background(mut self, color: Color32) -> Self {
        self.background = color;
        self
    }

    fn rows(&self) -> usize {
        self.session.views().len().div_ceil(self.columns).max(1)
    }

    /// Whole grid in points
    pub fn desired_size(&self) -> Vec2 {
        let panel = self.session.panel();
        Vec2::new(
            panel.width as f32 * self.columns as f32,
            panel.height as f32 * self.rows() as f32,
        )
    }

    fn handle_pointer(&mut self, response: &Response, origin: Pos2) {
        let local = |pos: Pos2| Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);

        if response.double_clicked() {
            self.session.handle_input(&InputEvent::Reset);
        }
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.handle_input(&InputEvent::DragStart {
                    position: local(pos),
                });
            }
        }
        if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.handle_input(&InputEvent::Drag {
                    position: local(pos),
                });
            }
        }
        if response.drag_released() {
            self.session.handle_input(&InputEvent::DragEnd);
        }
    }

    fn paint(&self, ui: &Ui, rect: Rect) {
        ui.painter().rect_filled(rect, 0.0, self.background);

        for (index, view) in self.session.views().iter().enumerate() {
            let cell = cell_rect(rect, index, self.columns, self.session.panel().as_point());
            let painter = ui.painter_at(cell);
            painter.rect_stroke(cell, 0.0, Stroke::new(1.0, Color32::from_gray(220)));

            let mut ctx = RenderContext::new(view.size());
            ctx.render_view(view);
            for command in ctx.get_drawing_queue() {
                paint_command(&painter, cell.min, command, self.label_color);
            }
        }

        let labels = self.session.labels();
        let font = FontId::proportional(13.0);
        ui.painter().text(
            Pos2::new(
                rect.left() + 4.0,
                rect.top() + rect.height() * (labels.latitude_top_percent as f32 / 100.0),
            ),
            Align2::LEFT_CENTER,
            format!("lat {}", labels.latitude_text),
            font.clone(),
            self.label_color,
        );
        ui.painter().text(
            Pos2::new(
                rect.left() + rect.width() * (labels.longitude_left_percent as f32 / 100.0),
                rect.bottom() - 4.0,
            ),
            Align2::CENTER_BOTTOM,
            format!("lon {}", labels.longitude_text),
            font,
            self.label_color,
        );
    }
}

impl Widget for ProjectionGrid<'_> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let desired_size = self.desired_size();
        let (rect, mut response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        let before = self.session.update_count();
        self.handle_pointer(&response, rect.min);
        if self.session.update_count() != before {
            response.mark_changed();
            ui.ctx().request_repaint();
        }

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect);
        }

        if self.session.is_dragging() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }

        response
    }
}

/// Rect of the `index`-th view, filling rows left to right
pub fn cell_rect(grid: Rect, index: usize, columns: usize, cell: Point) -> Rect {
    let columns = columns.max(1);
    let min = Pos2::new(
        grid.left() + (index % columns) as f32 * cell.x as f32,
        grid.top() + (index / columns) as f32 * cell.y as f32,
    );
    Rect::from_min_size(min, Vec2::new(cell.x as f32, cell.y as f32))
}

/// Panel pixels to screen points
pub fn to_screen(origin: Pos2, point: &Point) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

fn stroke_of(style: &StrokeStyle) -> Stroke {
    Stroke::new(style.width, Color32::from(style.color))
}

fn paint_command(painter: &egui::Painter, origin: Pos2, command: &DrawCommand, text_color: Color32) {
    match command {
        DrawCommand::Path {
            points,
            closed,
            style,
        } => {
            let points: Vec<Pos2> = points.iter().map(|p| to_screen(origin, p)).collect();
            let shape = if *closed {
                egui::Shape::closed_line(points, stroke_of(style))
            } else {
                egui::Shape::line(points, stroke_of(style))
            };
            painter.add(shape);
        }
        DrawCommand::Dot {
            center,
            radius,
            style,
        } => {
            painter.circle_stroke(to_screen(origin, center), *radius, stroke_of(style));
        }
        DrawCommand::Text {
            position,
            text,
            size,
            anchor,
        } => {
            let align = match anchor {
                TextAnchor::Start => Align2::LEFT_TOP,
                TextAnchor::Middle => Align2::CENTER_TOP,
            };
            painter.text(
                to_screen(origin, position),
                align,
                text,
                FontId::proportional(*size),
                text_color,
            );
        }
    }
}

pub trait ProjectionGridExt {
    fn projection_grid(&mut self, session: &mut ProjectionSession) -> Response;
}

impl ProjectionGridExt for Ui {
    fn projection_grid(&mut self, session: &mut ProjectionSession) -> Response {
        self.add(ProjectionGrid::new(session))
    }
}
