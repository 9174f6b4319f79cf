use super::*;

#[test]
fn second_generation_is_served_from_cache() {
    let engine = Engine::new();
    let shape = GridShape::new(4, 4);
    let a = engine.generate_frames(Variant::Orbit, shape);
    let b = engine.generate_frames(Variant::Orbit, shape);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(
        engine.stats(),
        CacheStats {
            context_hits: 0,
            context_misses: 1,
            frame_hits: 1,
            frame_misses: 1,
        }
    );

    engine.generate_frames(Variant::Scan, shape);
    let stats = engine.stats();
    assert_eq!((stats.context_hits, stats.context_misses), (1, 1));
    assert_eq!(engine.contexts().len(), 1);
    assert_eq!(engine.frame_cache().len(), 2);
    assert!(engine.frame_cache().get(Variant::Scan, shape).is_some());
    assert!(engine.frame_cache().get(Variant::Rain, shape).is_none());
}

#[test]
fn separate_engines_produce_identical_sequences() {
    let shape = GridShape::new(6, 9);
    for v in Variant::ALL {
        let a = Engine::new().generate_frames(v, shape);
        let b = Engine::new().generate_frames(v, shape);
        assert_eq!(*a, *b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }
}

#[test]
fn fingerprints_differ_between_variants_and_shapes() {
    let engine = Engine::new();
    let s = GridShape::new(4, 4);
    let a = engine.generate_frames(Variant::Scan, s).fingerprint();
    let b = engine.generate_frames(Variant::Checkerboard, s).fingerprint();
    let c = engine
        .generate_frames(Variant::Scan, GridShape::new(4, 5))
        .fingerprint();
    assert_ne!(a, b);
    assert_ne!(a, c);
}

#[test]
fn sequence_reports_timing() {
    let engine = Engine::new();
    let seq = engine.generate_frames(Variant::Scan, GridShape::new(3, 3));
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.interval_ms(), 126);
    assert_eq!(seq.interval_for(Speed::Slow), 198);
    assert_eq!(
        seq.timing(Speed::Normal),
        Timing::Discrete {
            frame_count: 3,
            interval_ms: 126
        }
    );
}

#[test]
fn frame_queries_wrap_and_bounds_check() {
    let engine = Engine::new();
    let shape = GridShape::new(3, 3);
    assert_eq!(
        engine.frame_at(Variant::Scan, shape, FrameIndex(4)),
        engine.frame_at(Variant::Scan, shape, FrameIndex(1))
    );
    assert!(engine.is_dot_active(Variant::Scan, shape, FrameIndex(1), 1, 2));
    assert!(!engine.is_dot_active(Variant::Scan, shape, FrameIndex(1), 0, 2));
    assert!(!engine.is_dot_active(Variant::Scan, shape, FrameIndex(1), 1, 3));
}

#[test]
fn static_frame_skips_leading_empty_frames() {
    let engine = Engine::new();
    let shape = GridShape::new(2, 3);
    let seq = engine.generate_frames(Variant::FillSweep, shape);
    assert!(seq.frames()[0].is_empty());
    let still = engine.static_frame(Variant::FillSweep, shape);
    assert_eq!(&still, &seq.frames()[1]);
}

#[test]
fn dot_state_tweens_between_cached_frames() {
    let engine = Engine::new();
    let shape = GridShape::new(4, 4);
    let lit = engine.dot_state(Variant::Checkerboard, shape, 0, 0, 0.0);
    assert_eq!(lit, DotState::from_level(1.0));
    let mid = engine.dot_state(Variant::Checkerboard, shape, 0, 0, 0.25);
    assert!(mid.opacity < lit.opacity && mid.opacity > DotState::from_level(0.0).opacity);
    assert_eq!(
        engine.dot_state(Variant::Checkerboard, shape, 4, 0, 0.0),
        DotState::from_level(0.0)
    );

    let ctx = engine.context(shape);
    for t in [0.0, 0.1, 0.37, 0.5, 0.99] {
        assert_eq!(
            engine.dot_state(Variant::Spiral, shape, 1, 2, t),
            crate::variants::compute_dot_state(Variant::Spiral, 1, 2, t, &ctx)
        );
    }
}

#[test]
fn global_engine_is_shared() {
    assert!(std::ptr::eq(Engine::global(), Engine::global()));
}
