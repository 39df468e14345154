//! Pointer trail: the swept blade shape used for slicing

use std::collections::VecDeque;

use glam::Vec2;

use crate::consts::TRAIL_CAPACITY;

/// One pointer sample
pub type TrailPoint = Vec2;

/// Bounded pointer history, newest first
#[derive(Debug, Clone)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    capacity: usize,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(TRAIL_CAPACITY)
    }
}

impl TrailBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Prepend the newest sample, evicting the oldest beyond capacity
    pub fn record(&mut self, point: TrailPoint) {
        self.points.push_front(point);
        self.points.truncate(self.capacity);
    }

    /// Newest-first view
    pub fn as_sequence(&self) -> impl ExactSizeIterator<Item = &TrailPoint> + '_ {
        self.points.iter()
    }

    pub fn newest(&self) -> Option<TrailPoint> {
        self.points.front().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Line segments between consecutive samples with a fading alpha,
    /// newest segment most opaque
    pub fn segments(&self) -> Vec<(TrailPoint, TrailPoint, u8)> {
        let len = self.points.len();
        (1..len)
            .map(|i| {
                let alpha = (255.0 * (1.0 - i as f32 / len as f32)) as u8;
                (self.points[i - 1], self.points[i], alpha)
            })
            .collect()
    }
}
