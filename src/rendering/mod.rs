pub mod context;
pub mod path;
pub mod registry;
pub mod svg;
pub mod view;

// Re-export main types
pub use context::{DrawCommand, RenderContext, StrokeStyle};
pub use path::{PathPart, ProjectedPath};
pub use registry::{ProjectionRegistry, TranslatePolicy, ViewSpec, STANDARD_VIEWS};
pub use view::{ShapeSubscriber, ViewFrame};
