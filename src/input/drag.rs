//! Turns pointer drags into the shared offset.
//!
//! Dragging up raises latitude, dragging right raises longitude. Each gesture
//! measures from where it started, so the offset never drifts with event rate.

use crate::core::constants::{DRAG_SENSITIVITY, MAX_OFFSET};
use crate::core::geo::Point;
use crate::core::offset::{clamp_offset, Offset};
use crate::input::events::{EventHandled, InputEvent};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging {
        start_position: Point,
        start_offset: Offset,
    },
}

/// Sole owner of the offset state
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    offset: Offset,
    sensitivity: f64,
    max_offset: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DRAG_SENSITIVITY, MAX_OFFSET)
    }
}

impl DragController {
    pub fn new(sensitivity: f64, max_offset: f64) -> Self {
        Self {
            state: DragState::Idle,
            offset: Offset::default(),
            sensitivity,
            max_offset,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    pub fn begin(&mut self, position: Point) {
        self.state = DragState::Dragging {
            start_position: position,
            start_offset: self.offset,
        };
    }

    /// Returns true if the offset changed
    pub fn move_to(&mut self, position: Point) -> bool {
        let DragState::Dragging {
            start_position,
            start_offset,
        } = self.state
        else {
            return false;
        };

        let delta = position.subtract(&start_position);
        let next = Offset::new(
            clamp_offset(start_offset.lat - delta.y * self.sensitivity, self.max_offset),
            clamp_offset(start_offset.lon + delta.x * self.sensitivity, self.max_offset),
        );
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    /// Ends the gesture; the offset stays where it is
    pub fn end(&mut self) {
        self.state = DragState::Idle;
    }

    /// Sets the offset directly, clamped
    pub fn set_offset(&mut self, offset: Offset) -> bool {
        let next = Offset::clamped(offset.lat, offset.lon, self.max_offset);
        let changed = next != self.offset;
        self.offset = next;
        changed
    }

    pub fn reset(&mut self) -> bool {
        self.state = DragState::Idle;
        self.set_offset(Offset::default())
    }

    /// Feeds one event; `Handled` means the offset changed
    pub fn process_input(&mut self, event: &InputEvent) -> EventHandled {
        let changed = match event {
            InputEvent::DragStart { position } => {
                self.begin(*position);
                false
            }
            InputEvent::Drag { position } => self.move_to(*position),
            InputEvent::DragEnd => {
                self.end();
                false
            }
            InputEvent::Reset => self.reset(),
        };
        if changed {
            EventHandled::Handled
        } else {
            EventHandled::NotHandled
        }
    }
}
