pub mod widget;

pub use widget::{ProjectionGrid, ProjectionGridExt};
