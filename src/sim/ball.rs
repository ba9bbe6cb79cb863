//! Falling-ball entity.
//!
//! A ball's whole life is: regenerate above the top edge, wait out its
//! activation delay, fall with per-tick jerk→speed→position integration,
//! then either get swept by the trail (pop: upward kick, shrunken residue)
//! or exit the bottom and regenerate. Bombs detonate instead of popping.

use rand::Rng;

use super::config::{BallTuning, Viewport};

/// Axis-aligned box the trail tests its points against.
///
/// The half-extent is half the drawn radius, so the box spans the middle of
/// the ball rather than circumscribing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

/// Emitted by [`Ball::step`] when a never-caught, non-bomb ball exits the
/// bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallEvent {
    Missed,
}

/// Result of a successful [`Ball::explode`]; `bomb` tells the caller whether
/// this catch terminates the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catch {
    pub bomb: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    /// Center, device pixels
    pub x: f64,
    pub y: f64,
    /// Drawn radius, device pixels
    pub radius: f64,
    /// Fill hue in [0, 360); ignored for bombs, which draw black
    pub hue: f64,
    pub is_bomb: bool,
    /// Vertical speed, device px / tick
    pub speed: f64,
    /// Vertical acceleration, device px / tick²
    pub acc: f64,
    /// Set by the first catch; cleared only on regeneration
    pub exploded: bool,
    /// Spawn-delay gate: the ball does not move until `now >= ready_at`
    pub ready: bool,
    pub ready_at: f64,
}

impl Ball {
    /// Create a fresh ball just above the top edge.
    pub fn spawn(tuning: &BallTuning, vp: &Viewport, now: f64, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            x: 0.0,
            y: 0.0,
            radius: 0.0,
            hue: 0.0,
            is_bomb: false,
            speed: 0.0,
            acc: 0.0,
            exploded: false,
            ready: false,
            ready_at: 0.0,
        };
        ball.regenerate(tuning, vp, now, rng);
        ball
    }

    /// Re-roll every randomized property and park the ball above the top
    /// edge with zeroed motion and a fresh activation delay.
    pub fn regenerate(&mut self, tuning: &BallTuning, vp: &Viewport, now: f64, rng: &mut impl Rng) {
        self.is_bomb = rng.random_bool(tuning.bomb_chance);
        self.exploded = false;
        self.hue = rng.random_range(0.0..360.0);
        self.radius = if tuning.size_max > tuning.size_min {
            rng.random_range(tuning.size_min..tuning.size_max)
        } else {
            tuning.size_min
        } * vp.dpr;
        // Keep the ball fully on-screen horizontally; viewports narrower than
        // the ball get the centerline.
        let lo = self.radius;
        let hi = vp.width - self.radius;
        self.x = if hi > lo {
            rng.random_range(lo..hi)
        } else {
            vp.width * 0.5
        };
        self.y = -self.radius;
        self.acc = 0.0;
        self.speed = 0.0;
        self.ready = false;
        self.ready_at = now + rng.random_range(0.0..tuning.ready_delay_max_ms);
    }

    /// Advance one tick. Motion is gated by the activation delay and frozen
    /// for good once `game_over` is set; the ball is still drawn either way.
    ///
    /// Returns [`BallEvent::Missed`] when a never-caught, non-bomb ball
    /// crosses the bottom edge; the ball regenerates in the same call.
    pub fn step(
        &mut self,
        tuning: &BallTuning,
        vp: &Viewport,
        now: f64,
        game_over: bool,
        rng: &mut impl Rng,
    ) -> Option<BallEvent> {
        if game_over {
            return None;
        }
        if !self.ready {
            if now < self.ready_at {
                return None;
            }
            self.ready = true;
        }

        self.acc += tuning.jerk;
        self.speed += self.acc;
        self.y += self.speed;

        if self.y > vp.height + self.radius {
            let missed = !self.exploded && !self.is_bomb;
            self.regenerate(tuning, vp, now, rng);
            return missed.then_some(BallEvent::Missed);
        }
        None
    }

    /// First-catch-wins pop: subsequent calls on the same life are no-ops,
    /// so several trail points overlapping in one tick count once.
    pub fn explode(&mut self, tuning: &BallTuning) -> Option<Catch> {
        if self.exploded {
            return None;
        }
        self.exploded = true;
        self.speed = tuning.pop_kick;
        self.radius /= tuning.pop_shrink;
        Some(Catch { bomb: self.is_bomb })
    }

    pub fn hit_box(&self) -> HitBox {
        let half = self.radius / 2.0;
        HitBox {
            left: self.x - half,
            top: self.y - half,
            right: self.x + half,
            bottom: self.y + half,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn vp() -> Viewport {
        Viewport::new(2000.0, 1500.0, 2.0)
    }

    #[test]
    fn spawn_respects_tuning_and_viewport() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        for _ in 0..200 {
            let ball = Ball::spawn(&tuning, &vp, 1_000.0, &mut rng);
            assert!(ball.radius >= tuning.size_min * vp.dpr);
            assert!(ball.radius < tuning.size_max * vp.dpr);
            assert!(ball.x >= ball.radius && ball.x <= vp.width - ball.radius);
            assert_eq!(ball.y, -ball.radius);
            assert_eq!(ball.speed, 0.0);
            assert_eq!(ball.acc, 0.0);
            assert!(!ball.exploded);
            assert!(!ball.ready);
            assert!(ball.ready_at >= 1_000.0);
            assert!(ball.ready_at < 1_000.0 + tuning.ready_delay_max_ms);
            assert!((0.0..360.0).contains(&ball.hue));
        }
    }

    #[test]
    fn ball_does_not_move_before_ready() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        let mut ball = Ball::spawn(&tuning, &vp, 1_000.0, &mut rng);
        let y0 = ball.y;
        assert_eq!(ball.step(&tuning, &vp, ball.ready_at - 1.0, false, &mut rng), None);
        assert_eq!(ball.y, y0);
        assert!(!ball.ready);
    }

    #[test]
    fn fall_matches_closed_form_displacement() {
        let tuning = BallTuning::default();
        // Tall viewport so the ball never exits during the test
        let vp = Viewport::new(2000.0, 1.0e12, 2.0);
        let mut rng = rng();
        let mut ball = Ball::spawn(&tuning, &vp, 0.0, &mut rng);
        ball.ready = true;
        let y0 = ball.y;
        let k = 240u32;
        for _ in 0..k {
            assert_eq!(ball.step(&tuning, &vp, 10_000.0, false, &mut rng), None);
        }
        let k = k as f64;
        let expected = y0 + tuning.jerk * k * (k + 1.0) * (k + 2.0) / 6.0;
        assert!(
            (ball.y - expected).abs() < 1e-6,
            "y = {}, closed form = {expected}",
            ball.y
        );
    }

    #[test]
    fn game_over_freezes_motion() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        let mut ball = Ball::spawn(&tuning, &vp, 0.0, &mut rng);
        ball.ready = true;
        ball.speed = 4.0;
        let y0 = ball.y;
        for _ in 0..50 {
            assert_eq!(ball.step(&tuning, &vp, 10_000.0, true, &mut rng), None);
        }
        assert_eq!(ball.y, y0);
    }

    #[test]
    fn bottom_exit_of_uncaught_ball_reports_a_miss_and_regenerates() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        let mut ball = Ball::spawn(&tuning, &vp, 0.0, &mut rng);
        ball.ready = true;
        ball.is_bomb = false;
        ball.y = vp.height + ball.radius;
        ball.speed = 1.0;
        let event = ball.step(&tuning, &vp, 10_000.0, false, &mut rng);
        assert_eq!(event, Some(BallEvent::Missed));
        assert_eq!(ball.y, -ball.radius);
        assert!(!ball.exploded);
        assert!(!ball.ready);
    }

    #[test]
    fn bottom_exit_of_caught_or_bomb_ball_is_silent() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        for (exploded, is_bomb) in [(true, false), (false, true)] {
            let mut ball = Ball::spawn(&tuning, &vp, 0.0, &mut rng);
            ball.ready = true;
            ball.exploded = exploded;
            ball.is_bomb = is_bomb;
            ball.y = vp.height + ball.radius;
            ball.speed = 1.0;
            let event = ball.step(&tuning, &vp, 10_000.0, false, &mut rng);
            assert_eq!(event, None);
            assert_eq!(ball.y, -ball.radius);
        }
    }

    #[test]
    fn explode_is_idempotent() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        let mut ball = Ball::spawn(&tuning, &vp, 0.0, &mut rng);
        let radius = ball.radius;
        let first = ball.explode(&tuning);
        assert_eq!(first, Some(Catch { bomb: ball.is_bomb }));
        assert_eq!(ball.speed, tuning.pop_kick);
        assert!((ball.radius - radius / tuning.pop_shrink).abs() < 1e-12);
        assert_eq!(ball.explode(&tuning), None);
        assert!((ball.radius - radius / tuning.pop_shrink).abs() < 1e-12);
    }

    #[test]
    fn hit_box_spans_half_the_drawn_radius() {
        let tuning = BallTuning::default();
        let vp = vp();
        let mut rng = rng();
        let mut ball = Ball::spawn(&tuning, &vp, 0.0, &mut rng);
        ball.x = 100.0;
        ball.y = 200.0;
        ball.radius = 40.0;
        let hit_box = ball.hit_box();
        assert_eq!(hit_box.left, 80.0);
        assert_eq!(hit_box.right, 120.0);
        assert_eq!(hit_box.top, 180.0);
        assert_eq!(hit_box.bottom, 220.0);
    }
}
