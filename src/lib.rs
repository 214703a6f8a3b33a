//! # mapshift
//!
//! One geographic outline drawn under several map projections side by side.
//! Dragging applies a shared latitude/longitude offset to the outline, and
//! every projection redraws from the same shifted shape, making each
//! projection's distortion visible.

pub mod core;
pub mod data;
pub mod input;
pub mod prelude;
pub mod projection;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::ViewerConfig,
    geo::{LatLng, Point},
    offset::Offset,
    panel::PanelSize,
    session::ProjectionSession,
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonGeometry, Shape},
    shift::shift,
    source::{load_shape, DataSource},
};

pub use crate::input::{drag::DragController, events::InputEvent};

pub use crate::projection::{Projection, ProjectionKind};

pub use crate::rendering::{registry::ProjectionRegistry, view::ViewFrame};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not fetch {location}: {reason}")]
    Fetch { location: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed geometry: {0}")]
    MalformedGeometry(String),

    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Error type alias for convenience
pub type Error = MapError;
