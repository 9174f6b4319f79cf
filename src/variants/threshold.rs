//! Threshold-field variants: every cell has a scalar field value and lights when that value
//! falls inside a band that moves with time.

use std::f64::consts::TAU;

use crate::context::precompute::PrecomputeContext;
use crate::foundation::core::Step;
use crate::foundation::math::frac;
use crate::frame::model::{Frame, FrameBuilder};

const BREATHE_LEVELS: [f64; 6] = [0.3, 0.55, 0.8, 1.0, 0.8, 0.55];
const PULSE_LEVELS: [f64; 6] = [0.2, 0.45, 0.75, 1.0, 0.75, 0.45];

pub(crate) const BREATHE_FRAMES: usize = BREATHE_LEVELS.len();
pub(crate) const PULSE_FRAMES: usize = PULSE_LEVELS.len();
pub(crate) const GRAVITY_WELL_FRAMES: usize = 32;
pub(crate) const SPIRAL_FRAMES: usize = 24;

/// Rings collapsing into the centre per loop. Two, so the loop seam repeats an interior step.
const WELL_CYCLES: f64 = 2.0;
const WELL_WIDTH: f64 = 0.22;
const WELL_JITTER: f64 = 0.18;
/// Level of the cells nearest the ring while it falls between cells.
const WELL_FLOOR_LEVEL: f64 = 0.4;

const SPIRAL_TWIST: f64 = 0.35;
const SPIRAL_BAND: f64 = 0.3;

/// Square (Chebyshev) region growing from the centre and shrinking back.
pub(crate) fn breathe(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let (cr, cc) = shape.center();
    let reach = cr.max(cc);
    radial(ctx, BREATHE_LEVELS[step.index % BREATHE_FRAMES] * reach, |row, col| {
        (row - cr).abs().max((col - cc).abs())
    })
}

/// Diamond (Manhattan) region growing from the centre and shrinking back.
pub(crate) fn pulse(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let (cr, cc) = shape.center();
    let reach = cr + cc;
    radial(ctx, PULSE_LEVELS[step.index % PULSE_FRAMES] * reach, |row, col| {
        (row - cr).abs() + (col - cc).abs()
    })
}

/// Rings contracting towards the centre, roughened by the per-cell importance weights.
///
/// Distance is measured in units of the centre-to-corner reach, so a new ring enters at the
/// corners as the previous one collapses. While the ring lies between cells, the cells nearest
/// to it stay dimly lit.
pub(crate) fn gravity_well(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let (cr, cc) = shape.center();
    let reach = cr.hypot(cc);
    let phase = WELL_CYCLES * step.progress();
    let importance = ctx.importance();

    let mut offsets = Vec::with_capacity(shape.cell_count());
    for row in 0..shape.rows() {
        for col in 0..shape.cols() {
            let k = shape.index(row, col);
            let d = (row as f64 - cr).hypot(col as f64 - cc) / reach
                + WELL_JITTER * (importance[k] - 0.5);
            let p = frac(d + phase);
            offsets.push(p.min(1.0 - p));
        }
    }

    let mut b = FrameBuilder::new(shape);
    for (k, &e) in offsets.iter().enumerate() {
        if e < WELL_WIDTH {
            b.light(k, 1.0 - 0.6 * (e / WELL_WIDTH));
        }
    }
    let frame = b.finish();
    if !frame.is_empty() {
        return frame;
    }

    let nearest = offsets.iter().copied().fold(f64::INFINITY, f64::min);
    let mut b = FrameBuilder::new(shape);
    for (k, &e) in offsets.iter().enumerate() {
        if e - nearest < 1e-9 {
            b.light(k, WELL_FLOOR_LEVEL);
        }
    }
    b.finish()
}

/// A twisted arm sweeping once around the centre per loop.
pub(crate) fn spiral(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let (cr, cc) = shape.center();
    let reach = cr.hypot(cc);
    let t = step.progress();

    let mut b = FrameBuilder::new(shape);
    for row in 0..shape.rows() {
        for col in 0..shape.cols() {
            let (dy, dx) = (row as f64 - cr, col as f64 - cc);
            let angle = frac(dy.atan2(dx) / TAU);
            let field = frac(angle + SPIRAL_TWIST * dy.hypot(dx) / reach);
            let x = frac(field - t);
            if x < SPIRAL_BAND {
                b.light(shape.index(row, col), 1.0 - 0.6 * (x / SPIRAL_BAND));
            }
        }
    }
    b.finish()
}

fn radial(ctx: &PrecomputeContext, threshold: f64, distance: impl Fn(f64, f64) -> f64) -> Frame {
    let shape = ctx.shape();
    let mut b = FrameBuilder::new(shape);
    for row in 0..shape.rows() {
        for col in 0..shape.cols() {
            let d = distance(row as f64, col as f64);
            if d <= threshold {
                let level = if threshold > 0.0 {
                    1.0 - 0.35 * (d / threshold)
                } else {
                    1.0
                };
                b.light(shape.index(row, col), level);
            }
        }
    }
    b.finish()
}
