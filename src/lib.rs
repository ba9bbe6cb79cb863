//! Comet Catch core crate.
//!
//! A fullscreen-canvas arcade game: colored balls fall from the top of the
//! viewport and the player catches them by sweeping a pointer trail through
//! them before they escape off the bottom. Black bomb balls end the run.
//!
//! Gameplay state lives in [`sim`] and is free of browser dependencies so it
//! can be exercised with plain `cargo test` on the host; everything that
//! touches the canvas or the DOM lives in the private `game` module.

use wasm_bindgen::prelude::*;

mod game;
pub mod sim;

pub use sim::{Ball, BallTuning, Scoreboard, Trail, TrailTuning, Viewport};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Game configuration constants
pub mod consts {
    /// Balls kept in flight at once
    pub const BALL_COUNT: usize = 3;
    /// Canvas element id; the element is created when absent
    pub const CANVAS_ID: &str = "canvas";
    /// Trail stroke color
    pub const TRAIL_COLOR: &str = "#ffff00";
    /// Bomb fill color
    pub const BOMB_COLOR: &str = "black";
}

// -----------------------------------------------------------------------------
// Entrypoint
// -----------------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsValue> {
    game::start()
}

/// Linearly remap `v` from the range [a, b] to the range [c, d].
#[inline]
pub fn map_range(v: f64, a: f64, b: f64, c: f64, d: f64) -> f64 {
    (v - a) * (d - c) / (b - a) + c
}
