//! Seeded-random variants. All randomness was drawn when the context was built; these
//! functions only read it.

use crate::context::precompute::PrecomputeContext;
use crate::foundation::core::Step;
use crate::frame::model::{Frame, FrameBuilder};

/// Brightness of a sparkle over its four lit frames.
const TWINKLE: [f64; 4] = [0.5, 1.0, 0.75, 0.4];

pub(crate) const SPARKLE_FRAMES: usize = 16;

const RAIN_MIN_FRAMES: usize = 8;

/// Rain loops over a whole number of column cycles, at least two and at least 8 frames.
pub(crate) fn rain_frames(rows: usize) -> usize {
    rows * 2usize.max(RAIN_MIN_FRAMES.div_ceil(rows))
}

/// One falling drop per column with a dimmer cell trailing above it.
pub(crate) fn rain(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let rows = shape.rows();
    let mut b = FrameBuilder::new(shape);
    for (col, (&phase, &speed)) in ctx.rain_phase().iter().zip(ctx.rain_speed()).enumerate() {
        let head = (phase + step.index * speed) % rows;
        b.light(shape.index(head, col), 1.0);
        if head > 0 {
            b.light(shape.index(head - 1, col), 0.45);
        }
    }
    b.finish()
}

/// Each cell twinkles once per loop, offset by its seeded slot.
pub(crate) fn sparkle(step: Step, ctx: &PrecomputeContext) -> Frame {
    let slots = ctx.twinkle_slot();
    let mut b = FrameBuilder::new(ctx.shape());
    for (cell, &slot) in slots.iter().enumerate() {
        let start = sparkle_start(slot, slots.len());
        let phase = (step.index + SPARKLE_FRAMES - start) % SPARKLE_FRAMES;
        if let Some(&level) = TWINKLE.get(phase) {
            b.light(cell, level);
        }
    }
    b.finish()
}

/// Frame at which the cell with twinkle rank `slot` (out of `cells`) lights up.
///
/// Small grids spread their ranks over the whole loop so no frame is left dark.
fn sparkle_start(slot: usize, cells: usize) -> usize {
    if cells < SPARKLE_FRAMES {
        slot * SPARKLE_FRAMES / cells
    } else {
        slot % SPARKLE_FRAMES
    }
}
