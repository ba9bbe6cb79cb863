//! Tuning parameter structs and the viewport snapshot.
//!
//! Every component takes its knobs as an explicit, validated struct instead
//! of loose fields, so a bad configuration fails at construction rather than
//! surfacing as odd motion mid-game.

use std::fmt;

/// Device-pixel view of the drawable area. `width`/`height` are backing-buffer
/// pixels (CSS pixels times `dpr`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { width, height, dpr }
    }
}

/// Knobs for ball spawning and motion. All lengths are CSS pixels; they are
/// scaled by the viewport's `dpr` at spawn time.
#[derive(Debug, Clone, PartialEq)]
pub struct BallTuning {
    /// Smallest spawn radius
    pub size_min: f64,
    /// Largest spawn radius
    pub size_max: f64,
    /// Per-tick increment applied to the acceleration (device px / tick³)
    pub jerk: f64,
    /// Probability a fresh ball is a bomb, in [0, 1]
    pub bomb_chance: f64,
    /// Vertical speed assigned on catch (negative = upward)
    pub pop_kick: f64,
    /// Radius divisor applied on catch
    pub pop_shrink: f64,
    /// Upper bound of the random activation delay (ms)
    pub ready_delay_max_ms: f64,
}

impl Default for BallTuning {
    fn default() -> Self {
        Self {
            size_min: 35.0,
            size_max: 70.0,
            jerk: 0.01,
            bomb_chance: 0.15,
            pop_kick: -5.0,
            pop_shrink: 10.0,
            ready_delay_max_ms: 2000.0,
        }
    }
}

impl BallTuning {
    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.size_min > 0.0 && self.size_max.is_finite()) || self.size_max < self.size_min {
            return Err(TuningError::SizeRange {
                min: self.size_min,
                max: self.size_max,
            });
        }
        if !(self.jerk > 0.0 && self.jerk.is_finite()) {
            return Err(TuningError::Jerk(self.jerk));
        }
        if !(0.0..=1.0).contains(&self.bomb_chance) {
            return Err(TuningError::BombChance(self.bomb_chance));
        }
        if !(self.pop_shrink >= 1.0 && self.pop_shrink.is_finite()) {
            return Err(TuningError::PopShrink(self.pop_shrink));
        }
        if !(self.ready_delay_max_ms > 0.0 && self.ready_delay_max_ms.is_finite()) {
            return Err(TuningError::ReadyDelay(self.ready_delay_max_ms));
        }
        Ok(())
    }
}

/// Knobs for the pointer trail.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailTuning {
    /// Maximum number of retained pointer samples
    pub capacity: usize,
    /// Stroke width at the newest point (CSS px, dpr-scaled when drawn)
    pub stroke_max: f64,
    /// Stroke width at the oldest point
    pub stroke_min: f64,
}

impl Default for TrailTuning {
    fn default() -> Self {
        Self {
            capacity: 10,
            stroke_max: 15.0,
            stroke_min: 1.0,
        }
    }
}

impl TrailTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.capacity == 0 {
            return Err(TuningError::TrailCapacity);
        }
        if !(self.stroke_min > 0.0 && self.stroke_max.is_finite()) || self.stroke_max < self.stroke_min {
            return Err(TuningError::StrokeRange {
                min: self.stroke_min,
                max: self.stroke_max,
            });
        }
        Ok(())
    }
}

/// A tuning struct failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    SizeRange { min: f64, max: f64 },
    Jerk(f64),
    BombChance(f64),
    PopShrink(f64),
    ReadyDelay(f64),
    TrailCapacity,
    StrokeRange { min: f64, max: f64 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::SizeRange { min, max } => {
                write!(f, "ball size range [{min}, {max}] is not a positive range")
            }
            TuningError::Jerk(v) => write!(f, "jerk {v} must be positive and finite"),
            TuningError::BombChance(v) => write!(f, "bomb chance {v} must lie in [0, 1]"),
            TuningError::PopShrink(v) => write!(f, "pop shrink {v} must be at least 1"),
            TuningError::ReadyDelay(v) => {
                write!(f, "ready delay upper bound {v} ms must be positive and finite")
            }
            TuningError::TrailCapacity => write!(f, "trail capacity must be at least 1"),
            TuningError::StrokeRange { min, max } => {
                write!(f, "trail stroke range [{min}, {max}] is not a positive range")
            }
        }
    }
}

impl std::error::Error for TuningError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert_eq!(BallTuning::default().validate(), Ok(()));
        assert_eq!(TrailTuning::default().validate(), Ok(()));
    }

    #[test]
    fn inverted_size_range_is_rejected() {
        let t = BallTuning {
            size_min: 70.0,
            size_max: 35.0,
            ..BallTuning::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::SizeRange { .. })));
    }

    #[test]
    fn bomb_chance_outside_unit_interval_is_rejected() {
        for chance in [-0.1, 1.1, f64::NAN] {
            let t = BallTuning {
                bomb_chance: chance,
                ..BallTuning::default()
            };
            assert!(t.validate().is_err(), "chance {chance} accepted");
        }
    }

    #[test]
    fn zero_capacity_trail_is_rejected() {
        let t = TrailTuning {
            capacity: 0,
            ..TrailTuning::default()
        };
        assert_eq!(t.validate(), Err(TuningError::TrailCapacity));
    }

    #[test]
    fn inverted_stroke_range_is_rejected() {
        let t = TrailTuning {
            stroke_max: 0.5,
            stroke_min: 1.0,
            ..TrailTuning::default()
        };
        assert!(matches!(t.validate(), Err(TuningError::StrokeRange { .. })));
    }

    #[test]
    fn non_positive_jerk_is_rejected() {
        for jerk in [0.0, -0.01, f64::INFINITY] {
            let t = BallTuning {
                jerk,
                ..BallTuning::default()
            };
            assert!(t.validate().is_err(), "jerk {jerk} accepted");
        }
    }
}
