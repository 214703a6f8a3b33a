pub mod drag;
pub mod events;

pub use drag::{DragController, DragState};
pub use events::{EventHandled, InputEvent};
