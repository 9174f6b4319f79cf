use super::*;
use crate::config::loader::LoaderConfig;

fn playback(json: &str) -> Playback {
    let loader = LoaderConfig::from_json_str(json).unwrap().resolve();
    Playback::new(&Engine::new(), loader)
}

#[test]
fn ticks_walk_the_loop_and_wrap() {
    let mut p = playback(r#"{"variant": "scan", "grid": [3, 3]}"#);
    assert_eq!(p.state(), PlaybackState::Resolved);

    let rows: Vec<Vec<usize>> = (0..5)
        .map(|_| p.tick().unwrap().indices().collect())
        .collect();
    assert_eq!(p.state(), PlaybackState::Animating);
    assert_eq!(
        rows,
        vec![
            vec![0, 1, 2],
            vec![3, 4, 5],
            vec![6, 7, 8],
            vec![0, 1, 2],
            vec![3, 4, 5]
        ]
    );
}

#[test]
fn discrete_time_steps_per_full_interval() {
    let mut p = playback(r#"{"variant": "scan", "grid": [3, 3], "interval_ms": 100}"#);
    p.advance_ms(99);
    assert_eq!(p.frame_index(), FrameIndex(0));
    p.advance_ms(1);
    assert_eq!(p.frame_index(), FrameIndex(1));
    p.advance_ms(250);
    assert_eq!(p.frame_index(), FrameIndex(0));
    p.advance_ms(50);
    assert_eq!(p.frame_index(), FrameIndex(1));
}

#[test]
fn huge_elapsed_times_keep_the_exact_position() {
    let mut p = playback(r#"{"variant": "scan", "grid": [3, 3], "interval_ms": 100}"#);
    p.advance_ms(99);
    p.advance_ms(u64::MAX);
    // (99 + u64::MAX) / 100 steps is 1 modulo the 3-frame loop, with 14ms left over.
    assert_eq!(p.frame_index(), FrameIndex(1));
    p.advance_ms(85);
    assert_eq!(p.frame_index(), FrameIndex(1));
    p.advance_ms(1);
    assert_eq!(p.frame_index(), FrameIndex(2));
}

#[test]
fn continuous_time_wraps_at_one_loop() {
    let mut p = playback(
        r#"{"variant": "checkerboard", "mode": "continuous", "duration_ms": 1000}"#,
    );
    p.advance_ms(250);
    assert!((p.normalized_time() - 0.25).abs() < 1e-9);
    let mid = p.dot_state(0, 0).unwrap();
    assert!(mid.opacity > DotState::from_level(0.0).opacity);
    assert!(mid.opacity < DotState::from_level(1.0).opacity);

    p.advance_ms(1000);
    assert!((p.normalized_time() - 0.25).abs() < 1e-9);
    p.advance_ms(750);
    assert!(p.normalized_time().abs() < 1e-9);
    assert_eq!(p.frame_index(), FrameIndex(0));
}

#[test]
fn reduced_motion_pins_the_still_frame() {
    let mut p = playback(r#"{"variant": "fill-sweep", "grid": [2, 3], "reduced_motion": true}"#);
    let still = p.tick().unwrap();
    assert!(!still.is_empty());
    for _ in 0..10 {
        assert_eq!(p.tick().unwrap(), still);
    }
    assert_eq!(p.advance_ms(10_000).unwrap(), still);
    assert!(p.dot_state(0, 0).unwrap().is_lit());
    assert!(!p.dot_state(0, 2).unwrap().is_lit());
}

#[test]
fn torn_down_playback_yields_nothing() {
    let mut p = playback("{}");
    p.tick();
    p.tear_down();
    assert_eq!(p.state(), PlaybackState::TornDown);
    assert!(p.tick().is_none());
    assert!(p.advance_ms(500).is_none());
    assert!(p.current_frame().is_none());
    assert!(p.dot_state(0, 0).is_none());
    p.start();
    assert_eq!(p.state(), PlaybackState::TornDown);
}
