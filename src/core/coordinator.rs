use crate::core::labels::OffsetLabels;
use crate::core::offset::Offset;
use crate::data::geojson::Shape;
use crate::data::shift::shift_by;
use crate::rendering::view::ShapeSubscriber;
use std::sync::Arc;

/// Pushes one shifted shape to every subscriber per update
#[derive(Debug, Clone)]
pub struct UpdateCoordinator {
    original: Arc<Shape>,
    current: Arc<Shape>,
    labels: OffsetLabels,
    max_offset: f64,
    label_travel_percent: f64,
    updates: u64,
}

impl UpdateCoordinator {
    pub fn new(original: Arc<Shape>, max_offset: f64, label_travel_percent: f64) -> Self {
        Self {
            current: Arc::clone(&original),
            labels: OffsetLabels::from_offset(&Offset::default(), max_offset, label_travel_percent),
            original,
            max_offset,
            label_travel_percent,
            updates: 0,
        }
    }

    /// Shifts the original shape once and hands that same shape to every
    /// subscriber, then refreshes the labels.
    pub fn update<S>(&mut self, offset: &Offset, subscribers: &mut [S]) -> Arc<Shape>
    where
        S: ShapeSubscriber,
    {
        let shifted = Arc::new(shift_by(&self.original, offset));
        for subscriber in subscribers.iter_mut() {
            subscriber.on_shape(&shifted);
        }
        self.labels = OffsetLabels::from_offset(offset, self.max_offset, self.label_travel_percent);
        self.current = Arc::clone(&shifted);
        self.updates += 1;
        log::debug!(
            "update #{}: lat {:.2} lon {:.2} -> {} views",
            self.updates,
            offset.lat,
            offset.lon,
            subscribers.len()
        );
        shifted
    }

    pub fn original(&self) -> &Arc<Shape> {
        &self.original
    }

    /// The most recently shifted shape
    pub fn current(&self) -> &Arc<Shape> {
        &self.current
    }

    pub fn labels(&self) -> &OffsetLabels {
        &self.labels
    }

    /// How many times the shifter has run
    pub fn update_count(&self) -> u64 {
        self.updates
    }
}
