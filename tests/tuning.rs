// Additional integration tests for tuning invariants.
// These tests are native-friendly and avoid wasm/browser APIs.

use comet_catch::sim::{BallTuning, TrailTuning, TuningError};

#[test]
fn default_ball_tuning_matches_the_shipped_game() {
    let t = BallTuning::default();
    assert_eq!(t.size_min, 35.0);
    assert_eq!(t.size_max, 70.0);
    assert_eq!(t.jerk, 0.01);
    assert_eq!(t.bomb_chance, 0.15);
    assert_eq!(t.pop_kick, -5.0);
    assert_eq!(t.pop_shrink, 10.0);
    assert_eq!(t.ready_delay_max_ms, 2000.0);
    assert_eq!(t.validate(), Ok(()));
}

#[test]
fn default_trail_tuning_matches_the_shipped_game() {
    let t = TrailTuning::default();
    assert_eq!(t.capacity, 10);
    assert_eq!(t.stroke_max, 15.0);
    assert_eq!(t.stroke_min, 1.0);
    assert_eq!(t.validate(), Ok(()));
}

#[test]
fn validation_errors_render_a_usable_message() {
    let t = BallTuning {
        bomb_chance: 2.0,
        ..BallTuning::default()
    };
    let err = t.validate().expect_err("chance of 2.0 must be rejected");
    let msg = err.to_string();
    assert!(msg.contains('2'), "message should carry the value: {msg}");
}

#[test]
fn equal_size_bounds_are_accepted() {
    // A degenerate-but-valid range pins every spawn to one radius
    let t = BallTuning {
        size_min: 50.0,
        size_max: 50.0,
        ..BallTuning::default()
    };
    assert_eq!(t.validate(), Ok(()));
}

#[test]
fn nan_fields_are_rejected() {
    let size = BallTuning {
        size_max: f64::NAN,
        ..BallTuning::default()
    };
    assert!(matches!(size.validate(), Err(TuningError::SizeRange { .. })));

    let stroke = TrailTuning {
        stroke_max: f64::NAN,
        ..TrailTuning::default()
    };
    assert!(matches!(
        stroke.validate(),
        Err(TuningError::StrokeRange { .. })
    ));
}
