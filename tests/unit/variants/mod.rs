use super::*;

fn ctx(rows: u8, cols: u8) -> PrecomputeContext {
    PrecomputeContext::new(GridShape::new(rows, cols))
}

fn active(frame: &Frame) -> Vec<usize> {
    frame.indices().collect()
}

#[test]
fn names_round_trip_through_parse_and_serde() {
    for v in Variant::ALL {
        assert_eq!(v.name().parse::<Variant>().unwrap(), v);
        assert_eq!(v.to_string(), v.name());
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, format!("\"{}\"", v.name()));
        assert_eq!(serde_json::from_str::<Variant>(&json).unwrap(), v);
    }
}

#[test]
fn strict_parse_rejects_unknown_names() {
    assert_eq!(" Wave-Rows ".parse::<Variant>().unwrap(), Variant::WaveRows);
    let err = "not-a-real-variant".parse::<Variant>().unwrap_err();
    assert!(matches!(err, LoaderError::UnknownVariant(ref n) if n == "not-a-real-variant"));
}

#[test]
fn normalize_falls_back_to_default() {
    assert_eq!(normalize_variant(None), DEFAULT_VARIANT);
    assert_eq!(normalize_variant(Some("not-a-real-variant")), Variant::Braille);
    assert_eq!(normalize_variant(Some("")), Variant::Braille);
    assert_eq!(normalize_variant(Some("SPIRAL")), Variant::Spiral);
}

#[test]
fn every_variant_has_a_multi_frame_loop_and_pacing() {
    for shape in GridShape::all() {
        for v in Variant::ALL {
            assert!(v.frame_count(shape) >= 2, "{v} on {shape}");
        }
    }
    for v in Variant::ALL {
        assert!((0.8..=1.2).contains(&v.pacing()), "{v}");
    }
}

#[test]
fn frames_are_well_formed_and_periodic_in_index() {
    for (rows, cols) in [(2, 2), (3, 5), (4, 4), (7, 3), (12, 12)] {
        let c = ctx(rows, cols);
        let cells = c.shape().cell_count();
        for v in Variant::ALL {
            let n = v.frame_count(c.shape());
            for i in 0..n {
                let f = v.compute(i, &c);
                let idx = active(&f);
                assert!(idx.windows(2).all(|w| w[0] < w[1]), "{v} frame {i}");
                assert!(idx.iter().all(|&k| k < cells));
                assert!(f.dots().iter().all(|d| d.level > 0.0 && d.level <= 1.0));
                assert_eq!(f, v.compute(i + n, &c), "{v} frame {i}");
            }
        }
    }
}

#[test]
fn checkerboard_alternates_parity() {
    let c = ctx(4, 4);
    let even: Vec<usize> = (0..16).filter(|i| (i / 4 + i % 4) % 2 == 0).collect();
    let odd: Vec<usize> = (0..16).filter(|i| (i / 4 + i % 4) % 2 == 1).collect();
    assert_eq!(active(&Variant::Checkerboard.compute(0, &c)), even);
    assert_eq!(active(&Variant::Checkerboard.compute(1, &c)), odd);
}

#[test]
fn scan_lights_one_row_per_frame() {
    let c = ctx(3, 3);
    assert_eq!(active(&Variant::Scan.compute(0, &c)), vec![0, 1, 2]);
    assert_eq!(active(&Variant::Scan.compute(1, &c)), vec![3, 4, 5]);
    assert_eq!(active(&Variant::Scan.compute(2, &c)), vec![6, 7, 8]);
    assert_eq!(active(&Variant::Scan.compute(3, &c)), vec![0, 1, 2]);
}

#[test]
fn braille_fills_and_drains_the_snake_path() {
    let c = ctx(4, 4);
    let counts: Vec<usize> = (0..8).map(|i| Variant::Braille.compute(i, &c).len()).collect();
    assert_eq!(counts, vec![2, 5, 8, 12, 16, 12, 8, 5]);
    // The snake path starts 0, 1, 2, 3 then turns back along row 1 from 7.
    assert_eq!(active(&Variant::Braille.compute(1, &c)), vec![0, 1, 2, 3, 7]);
}

#[test]
fn orbit_head_leads_a_fading_trail() {
    let c = ctx(3, 4);
    let f = Variant::Orbit.compute(0, &c);
    assert_eq!(active(&f), vec![0, 4]);
    assert_eq!(f.level(0), 1.0);
    assert_eq!(f.level(4), 0.75);
}

#[test]
fn cascade_pairs_a_band_with_its_predecessor() {
    let c = ctx(2, 3);
    let f = Variant::Cascade.compute(0, &c);
    assert_eq!(active(&f), vec![0, 5]);
    assert_eq!(f.level(5), 0.5);
    let f = Variant::Cascade.compute(2, &c);
    assert_eq!(active(&f), vec![1, 2, 3, 4]);
    assert_eq!(f.level(2), 1.0);
    assert_eq!(f.level(1), 0.5);
}

#[test]
fn helix_has_two_winged_heads() {
    let c = ctx(4, 4);
    // Perimeter of 12, wing of one cell on each side of both heads.
    assert_eq!(Variant::Helix.compute(0, &c).len(), 6);
}

#[test]
fn fill_sweep_reveals_then_conceals_left_to_right() {
    let c = ctx(2, 3);
    assert!(Variant::FillSweep.compute(0, &c).is_empty());
    assert_eq!(active(&Variant::FillSweep.compute(1, &c)), vec![0, 3]);
    assert_eq!(active(&Variant::FillSweep.compute(3, &c)), vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(active(&Variant::FillSweep.compute(4, &c)), vec![1, 2, 4, 5]);
    assert_eq!(active(&Variant::FillSweep.compute(5, &c)), vec![2, 5]);
}

#[test]
fn columns_cycles_through_column_groups() {
    let c = ctx(2, 4);
    assert_eq!(active(&Variant::Columns.compute(0, &c)), vec![0, 2, 4, 6]);
    assert_eq!(active(&Variant::Columns.compute(1, &c)), vec![1, 3, 5, 7]);
    assert_eq!(active(&Variant::Columns.compute(2, &c)), vec![0, 1, 4, 5]);
    assert_eq!(active(&Variant::Columns.compute(3, &c)), vec![2, 3, 6, 7]);
}

#[test]
fn breathe_and_pulse_swell_to_the_full_grid() {
    let c = ctx(4, 4);
    assert_eq!(Variant::Breathe.compute(3, &c).len(), 16);
    assert_eq!(active(&Variant::Breathe.compute(1, &c)), vec![5, 6, 9, 10]);
    assert_eq!(Variant::Pulse.compute(3, &c).len(), 16);
    assert_eq!(active(&Variant::Pulse.compute(1, &c)), vec![5, 6, 9, 10]);
}

#[test]
fn rain_has_one_head_per_column() {
    let c = ctx(5, 6);
    for i in 0..Variant::Rain.frame_count(c.shape()) {
        let f = Variant::Rain.compute(i, &c);
        let heads = f.dots().iter().filter(|d| d.level == 1.0).count();
        assert_eq!(heads, 6, "frame {i}");
    }
}

#[test]
fn sparkle_lights_each_cell_for_four_frames() {
    for (rows, cols) in [(5, 5), (2, 2), (3, 3), (2, 5)] {
        let c = ctx(rows, cols);
        let frames: Vec<Frame> = (0..16).map(|i| Variant::Sparkle.compute(i, &c)).collect();
        for cell in 0..c.shape().cell_count() {
            let lit = frames.iter().filter(|f| f.contains(cell)).count();
            assert_eq!(lit, 4, "{rows}x{cols} cell {cell}");
        }
        for (i, f) in frames.iter().enumerate() {
            assert!(!f.is_empty(), "{rows}x{cols} frame {i}");
        }
    }
}

#[test]
fn sparkle_spreads_small_grids_over_the_loop() {
    let c = ctx(2, 2);
    for i in 0..16 {
        assert_eq!(Variant::Sparkle.compute(i, &c).len(), 1, "frame {i}");
    }
}

#[test]
fn rain_columns_fall_out_of_step() {
    let c = ctx(5, 6);
    let n = Variant::Rain.frame_count(c.shape());
    let head_rows = |i: usize| -> Vec<usize> {
        let f = Variant::Rain.compute(i, &c);
        (0..6)
            .map(|col| (0..5).find(|&row| f.level(row * 6 + col) == 1.0).unwrap())
            .collect()
    };

    assert_eq!(head_rows(0), c.rain_phase());
    let next: Vec<usize> = c
        .rain_phase()
        .iter()
        .zip(c.rain_speed())
        .map(|(&p, &s)| (p + s) % 5)
        .collect();
    assert_eq!(head_rows(1), next);

    for i in 0..n {
        let mut rows = head_rows(i);
        rows.sort_unstable();
        rows.dedup();
        assert!(rows.len() > 1, "frame {i} moves in lockstep");
    }
}

#[test]
fn wave_rows_has_one_crest_per_row() {
    let c = ctx(4, 6);
    for i in 0..Variant::WaveRows.frame_count(c.shape()) {
        let f = Variant::WaveRows.compute(i, &c);
        for row in 0..4 {
            let crest = (0..6).filter(|&col| f.level(row * 6 + col) == 1.0).count();
            assert_eq!(crest, 1, "frame {i} row {row}");
        }
    }
}

#[test]
fn diagonal_swipe_fills_then_clears() {
    let c = ctx(2, 3);
    assert_eq!(active(&Variant::DiagonalSwipe.compute(0, &c)), vec![2]);
    assert_eq!(Variant::DiagonalSwipe.compute(3, &c).len(), 6);
    assert_eq!(active(&Variant::DiagonalSwipe.compute(6, &c)), vec![3]);
    assert!(Variant::DiagonalSwipe.compute(7, &c).is_empty());
}

#[test]
fn sort_reaches_ordered_heights_mid_loop() {
    let c = ctx(4, 4);
    // Sweep length is 2 * (cols + 1); its last frame has every column ordered.
    let f = Variant::Sort.compute(9, &c);
    // Targets 1, 2, 3, 4 rows tall, anchored to the bottom row.
    let expected = vec![3, 6, 7, 9, 10, 11, 12, 13, 14, 15];
    assert_eq!(active(&f), expected);
    assert!(f.dots().iter().all(|d| d.level == 1.0));
}

#[test]
fn sort_front_blends_one_column_at_a_time() {
    let c = ctx(4, 4);
    let column = |f: &Frame, col: usize| -> Vec<f32> {
        (0..4)
            .filter(|row| f.contains(row * 4 + col))
            .map(|row| f.level(row * 4 + col))
            .collect()
    };

    // Frame 4 puts the front between columns 1 and 2.
    let f = Variant::Sort.compute(4, &c);
    let ordered = column(&f, 0);
    assert_eq!(ordered.len(), c.target_heights()[0]);
    assert!(ordered.iter().all(|&l| l == 1.0));

    let blending = column(&f, 1);
    assert!(blending.iter().all(|&l| l > 0.61 && l < 0.99), "{blending:?}");
    let later = column(&Variant::Sort.compute(5, &c), 1);
    assert!(later[0] > blending[0]);

    for col in 2..4 {
        let ahead = column(&f, col);
        assert!(ahead.iter().all(|&l| (l - 0.6).abs() < 1e-6));
        assert!(ahead.len().abs_diff(c.shuffled_heights()[col]) <= 1);
    }

    // Columns ahead of the front keep jittering around their shuffled height.
    let heights: Vec<usize> = (0..5)
        .map(|i| column(&Variant::Sort.compute(i, &c), 2).len())
        .collect();
    assert!(heights.iter().any(|&h| h != heights[0]), "{heights:?}");
}

#[test]
fn compress_reaches_a_common_centred_height() {
    let c = ctx(4, 4);
    let f = Variant::Compress.compute(9, &c);
    assert_eq!(active(&f), vec![4, 5, 6, 7]);
}

#[test]
fn reorganization_holds_disorder_at_the_loop_end() {
    let c = ctx(4, 4);
    let n = Variant::Sort.frame_count(c.shape());
    assert_eq!(n, 28);
    for i in 20..n {
        let f = Variant::Sort.compute(i, &c);
        assert!(f.dots().iter().all(|d| (d.level - 0.6).abs() < 1e-6), "frame {i}");
    }
}

fn mean_centre_distance(f: &Frame, shape: GridShape) -> f64 {
    let (cr, cc) = shape.center();
    let reach = cr.hypot(cc);
    let total: f64 = f
        .indices()
        .map(|k| {
            let (row, col) = shape.row_col(k);
            (row as f64 - cr).hypot(col as f64 - cc) / reach
        })
        .sum();
    total / f.len() as f64
}

#[test]
fn gravity_well_ring_contracts_towards_the_centre() {
    for (rows, cols) in [(6, 6), (8, 8)] {
        let c = ctx(rows, cols);
        let d: Vec<f64> = [2, 6, 10]
            .iter()
            .map(|&i| mean_centre_distance(&Variant::GravityWell.compute(i, &c), c.shape()))
            .collect();
        assert!(d[0] > d[1] && d[1] > d[2], "{rows}x{cols}: {d:?}");
    }
}

#[test]
fn gravity_well_is_roughened_by_importance() {
    for (rows, cols) in [(6, 6), (8, 8)] {
        let c = ctx(rows, cols);
        let f = Variant::GravityWell.compute(0, &c);
        let corners = [0, cols - 1, (rows - 1) * cols, rows * cols - 1].map(|k| f.level(usize::from(k)));
        // Equidistant corners land at different depths in the ring.
        assert!(
            corners.iter().any(|&l| (l - corners[0]).abs() > 0.01),
            "{rows}x{cols}: {corners:?}"
        );
    }
}

#[test]
fn gravity_well_never_goes_dark() {
    for (rows, cols) in [(2, 2), (3, 3), (4, 4), (5, 5), (6, 6), (2, 12)] {
        let c = ctx(rows, cols);
        for i in 0..Variant::GravityWell.frame_count(c.shape()) {
            assert!(!Variant::GravityWell.compute(i, &c).is_empty(), "{rows}x{cols} frame {i}");
        }
    }
}

#[test]
fn spiral_arm_turns_once_per_loop() {
    for (rows, cols) in [(6, 6), (6, 4)] {
        let c = ctx(rows, cols);
        let cells = c.shape().cell_count();
        let n = Variant::Spiral.frame_count(c.shape());
        let frames: Vec<Vec<usize>> = (0..n)
            .map(|i| active(&Variant::Spiral.compute(i, &c)))
            .collect();
        // Half a loop later the arm has turned half way: the frame rotated by 180 degrees.
        for i in 0..n {
            let mut turned: Vec<usize> = frames[i].iter().map(|&k| cells - 1 - k).collect();
            turned.sort_unstable();
            assert_eq!(turned, frames[(i + n / 2) % n], "{rows}x{cols} frame {i}");
        }
        if (rows, cols) == (6, 6) {
            for i in 1..n {
                assert_ne!(frames[i], frames[0], "frame {i} repeats the start");
            }
        }
    }
}

#[test]
fn continuous_state_matches_frames_at_frame_boundaries() {
    let c = ctx(4, 4);
    let v = Variant::Checkerboard;
    let at0 = compute_dot_state(v, 0, 0, 0.0, &c);
    assert!(at0.is_lit());
    let at_half = compute_dot_state(v, 0, 0, 0.5, &c);
    assert!(!at_half.is_lit());
    assert_eq!(compute_dot_state(v, 0, 0, 1.0, &c), at0);
    assert_eq!(compute_dot_state(v, 9, 0, 0.0, &c), DotState::from_level(0.0));
}
