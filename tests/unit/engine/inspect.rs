use super::*;
use crate::engine::store::Engine;
use crate::foundation::core::GridShape;
use crate::variants::Variant;

#[test]
fn checkerboard_flips_every_cell_each_step() {
    let seq = Engine::new().generate_frames(Variant::Checkerboard, GridShape::new(4, 4));
    let p = ChangeProfile::of(&seq);
    assert_eq!(p.steps, vec![16, 16]);
    assert_eq!(p.total_changes, 32);
    assert_eq!(p.max_interior_change, 16);
    assert_eq!(p.seam_change, 16);
    assert_eq!(p.longest_static_streak, 0);
    assert_eq!(p.average_change(), 16.0);
    assert!(p.is_seamless());
}

#[test]
fn scan_moves_one_row_per_step() {
    let seq = Engine::new().generate_frames(Variant::Scan, GridShape::new(3, 5));
    let p = ChangeProfile::of(&seq);
    assert_eq!(p.steps, vec![10, 10, 10]);
    assert!(p.is_seamless());
}

#[test]
fn reorganization_hold_is_counted() {
    let seq = Engine::new().generate_frames(Variant::Sort, GridShape::new(2, 2));
    let p = ChangeProfile::of(&seq);
    assert_eq!(p.steps.len(), seq.len());
    assert!(p.is_seamless());
}
