//! Pure simulation module.
//!
//! All gameplay logic lives here. This module must stay free of browser and
//! rendering dependencies:
//! - Per-tick state transitions only, driven by the caller's timestamps
//! - Injected RNG only (callers pass `&mut impl Rng`)
//! - No `web-sys`, no canvas, no DOM
//!
//! The `game` module wires these parts to the frame loop and the canvas; the
//! native test suite wires them the same way without a browser.

pub mod ball;
pub mod config;
pub mod score;
pub mod trail;

pub use ball::{Ball, BallEvent, Catch, HitBox};
pub use config::{BallTuning, TrailTuning, TuningError, Viewport};
pub use score::Scoreboard;
pub use trail::{Trail, TrailPoint};
