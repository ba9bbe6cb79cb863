//! DOM and canvas glue: component assembly around the frame loop.

mod clock;
mod hud;
mod pointer;
mod sprites;
mod surface;

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand_pcg::Pcg32;
use wasm_bindgen::JsValue;
use web_sys::window;

use crate::consts;
use crate::sim::{Ball, BallTuning, Scoreboard, TrailTuning};
use clock::Clock;

/// Build the component graph and start the frame loop.
///
/// Subscription order carries the intra-tick contract: the surface clears
/// first, balls integrate and draw next, the trail records/detects/draws
/// after them, and the HUD republishes last.
pub fn start() -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let ball_tuning = BallTuning::default();
    ball_tuning
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let trail_tuning = TrailTuning::default();
    trail_tuning
        .validate()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let surface = surface::Surface::attach(&doc)?;
    let score = Rc::new(RefCell::new(Scoreboard::new()));

    let seed = js_sys::Date::now() as u64;
    let rng = Rc::new(RefCell::new(Pcg32::seed_from_u64(seed)));
    log::info!("comet-catch starting with seed {seed}");

    let now = win.performance().map(|p| p.now()).unwrap_or(0.0);
    let vp = surface.borrow().viewport();
    let mut balls = Vec::with_capacity(consts::BALL_COUNT);
    for _ in 0..consts::BALL_COUNT {
        balls.push(Rc::new(RefCell::new(Ball::spawn(
            &ball_tuning,
            &vp,
            now,
            &mut *rng.borrow_mut(),
        ))));
    }

    let pointer = pointer::install(surface.clone())?;
    let hud = hud::ScoreHud::attach(&doc, score.clone())?;

    let mut clock = Clock::new();
    clock.subscribe(surface.clone());
    for ball in &balls {
        clock.subscribe(Rc::new(RefCell::new(sprites::BallSprite::new(
            ball.clone(),
            ball_tuning.clone(),
            surface.clone(),
            score.clone(),
            rng.clone(),
        ))));
    }
    clock.subscribe(Rc::new(RefCell::new(sprites::TrailSprite::new(
        trail_tuning,
        ball_tuning,
        pointer,
        balls,
        surface,
        score,
    ))));
    clock.subscribe(Rc::new(RefCell::new(hud)));
    clock.start();
    Ok(())
}
