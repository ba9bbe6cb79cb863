//! Per-tick drivers that marry simulation entities to the canvas.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use rand_pcg::Pcg32;
use web_sys::CanvasRenderingContext2d;

use super::clock::TickSink;
use super::surface::Surface;
use crate::sim::{Ball, BallEvent, BallTuning, Scoreboard, Trail, TrailTuning};
use crate::{consts, map_range};

/// Steps one ball each frame, reports misses to the scoreboard, and draws it.
pub struct BallSprite {
    ball: Rc<RefCell<Ball>>,
    tuning: BallTuning,
    surface: Rc<RefCell<Surface>>,
    score: Rc<RefCell<Scoreboard>>,
    rng: Rc<RefCell<Pcg32>>,
}

impl BallSprite {
    pub fn new(
        ball: Rc<RefCell<Ball>>,
        tuning: BallTuning,
        surface: Rc<RefCell<Surface>>,
        score: Rc<RefCell<Scoreboard>>,
        rng: Rc<RefCell<Pcg32>>,
    ) -> Self {
        Self {
            ball,
            tuning,
            surface,
            score,
            rng,
        }
    }
}

impl TickSink for BallSprite {
    fn tick(&mut self, now_ms: f64) {
        let surface = self.surface.borrow();
        let vp = surface.viewport();
        let game_over = self.score.borrow().game_over();
        let event = self.ball.borrow_mut().step(
            &self.tuning,
            &vp,
            now_ms,
            game_over,
            &mut *self.rng.borrow_mut(),
        );
        if let Some(BallEvent::Missed) = event {
            self.score.borrow_mut().record_miss();
        }
        // Drawn even while gated or frozen; only motion is conditional
        draw_ball(surface.ctx(), &self.ball.borrow());
    }
}

fn draw_ball(ctx: &CanvasRenderingContext2d, ball: &Ball) {
    if ball.is_bomb {
        ctx.set_fill_style_str(consts::BOMB_COLOR);
    } else {
        ctx.set_fill_style_str(&format!("hsl({:.0}, 80%, 60%)", ball.hue));
    }
    ctx.begin_path();
    ctx.arc(ball.x, ball.y, ball.radius, 0.0, std::f64::consts::TAU).ok();
    ctx.fill();
    ctx.close_path();
}

/// Records the pointer, runs the hit test against every ball, applies
/// catches and detonations to the scoreboard, and draws the tapering stroke.
pub struct TrailSprite {
    trail: Trail,
    tuning: TrailTuning,
    ball_tuning: BallTuning,
    pointer: Rc<Cell<(f64, f64)>>,
    balls: Vec<Rc<RefCell<Ball>>>,
    surface: Rc<RefCell<Surface>>,
    score: Rc<RefCell<Scoreboard>>,
}

impl TrailSprite {
    pub fn new(
        tuning: TrailTuning,
        ball_tuning: BallTuning,
        pointer: Rc<Cell<(f64, f64)>>,
        balls: Vec<Rc<RefCell<Ball>>>,
        surface: Rc<RefCell<Surface>>,
        score: Rc<RefCell<Scoreboard>>,
    ) -> Self {
        Self {
            trail: Trail::new(&tuning),
            tuning,
            ball_tuning,
            pointer,
            balls,
            surface,
            score,
        }
    }
}

impl TickSink for TrailSprite {
    fn tick(&mut self, _now_ms: f64) {
        let (x, y) = self.pointer.get();
        self.trail.record(x, y);

        for ball in &self.balls {
            let mut ball = ball.borrow_mut();
            if self.trail.hits(&ball.hit_box()) {
                if let Some(catch) = ball.explode(&self.ball_tuning) {
                    let mut score = self.score.borrow_mut();
                    score.record_catch();
                    if catch.bomb {
                        score.set_over();
                    }
                }
            }
        }

        let surface = self.surface.borrow();
        draw_trail(surface.ctx(), &self.trail, &self.tuning, surface.dpr());
    }
}

fn draw_trail(ctx: &CanvasRenderingContext2d, trail: &Trail, tuning: &TrailTuning, dpr: f64) {
    let points = trail.points();
    if points.len() < 2 {
        return;
    }
    ctx.set_stroke_style_str(consts::TRAIL_COLOR);
    ctx.set_line_cap("round");
    for i in 1..points.len() {
        // Width tapers over the full capacity, not the current length, so a
        // short trail starts thick
        ctx.set_line_width(dpr * map_range(
            i as f64,
            0.0,
            tuning.capacity as f64,
            tuning.stroke_max,
            tuning.stroke_min,
        ));
        ctx.begin_path();
        ctx.move_to(points[i - 1].x, points[i - 1].y);
        ctx.line_to(points[i].x, points[i].y);
        ctx.stroke();
    }
}
