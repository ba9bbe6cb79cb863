//! Bounded pointer-trail history and its hit test.

use super::ball::HitBox;
use super::config::TrailTuning;

/// One recorded pointer sample, device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
}

/// Newest-first history of recent pointer positions, bounded by the tuned
/// capacity; the oldest sample is evicted on overflow.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<TrailPoint>,
    capacity: usize,
}

impl Trail {
    pub fn new(tuning: &TrailTuning) -> Self {
        Self {
            points: Vec::with_capacity(tuning.capacity + 1),
            capacity: tuning.capacity,
        }
    }

    /// Prepend the current pointer position, evicting from the tail.
    pub fn record(&mut self, x: f64, y: f64) {
        self.points.insert(0, TrailPoint { x, y });
        if self.points.len() > self.capacity {
            self.points.pop();
        }
    }

    /// Newest first.
    pub fn points(&self) -> &[TrailPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when any retained sample lies strictly inside the box. Samples on
    /// the boundary do not count; consecutive samples are not interpolated,
    /// so fast pointer motion can pass through a box without registering.
    pub fn hits(&self, hit_box: &HitBox) -> bool {
        self.points.iter().any(|p| {
            p.x > hit_box.left && p.x < hit_box.right && p.y > hit_box.top && p.y < hit_box.bottom
        })
    }
}
