//! Prelude module for common mapshift types and traits
//!
//! `use mapshift::prelude::*;` brings in everything needed to load a shape,
//! build a session and feed it input.

pub use crate::core::{
    bounds::Bounds,
    config::ViewerConfig,
    coordinator::UpdateCoordinator,
    geo::{LatLng, Point},
    labels::OffsetLabels,
    offset::Offset,
    panel::PanelSize,
    session::ProjectionSession,
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry, Properties, Shape},
    shift::{shift, shift_by},
    source::{load_shape, DataSource},
};

pub use crate::input::{
    drag::{DragController, DragState},
    events::{EventHandled, InputEvent},
};

pub use crate::projection::{Projection, ProjectionKind, RawProjection};

pub use crate::rendering::{
    context::{DrawCommand, RenderContext},
    path::ProjectedPath,
    registry::{ProjectionRegistry, ViewSpec},
    view::{ShapeSubscriber, ViewFrame},
};

#[cfg(feature = "egui")]
pub use crate::ui::widget::{ProjectionGrid, ProjectionGridExt};

pub use crate::{Error as MapError, Result};

pub use std::sync::Arc;
