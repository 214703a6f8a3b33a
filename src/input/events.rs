use crate::core::geo::Point;
use serde::{Deserialize, Serialize};

/// Pointer input the viewer reacts to. Positions are in container pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Start of drag operation
    DragStart { position: Point },
    /// Drag in progress; the pointer's current position
    Drag { position: Point },
    /// End of drag operation
    DragEnd,
    /// Return the offset to zero
    Reset,
}

/// Whether an event changed anything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventHandled {
    Handled,
    NotHandled,
}
