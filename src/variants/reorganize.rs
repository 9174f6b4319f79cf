//! Column-reorganization variants: each column is a bar whose height travels between a
//! shuffled value and an ordered target, one column after another.
//!
//! A loop is a forward sweep (shuffled to ordered), a backward sweep (ordered back to
//! shuffled), then a short hold in the shuffled state. The hold jitter has a period that
//! divides the loop length, so the last frame leads into the first like any other step.

use std::f64::consts::TAU;

use crate::animation::ease::Ease;
use crate::context::precompute::PrecomputeContext;
use crate::foundation::core::{GridShape, Step};
use crate::frame::model::{Frame, FrameBuilder};

const JITTER_PERIOD: usize = 4;
const JITTER_AMPLITUDE: f64 = 0.8;
const HOLD_FRAMES: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Layout {
    /// Bars grow up from the bottom row towards ascending targets.
    Sort,
    /// Bars are vertically centred and shrink towards a common height, edges first.
    Compress,
}

pub(crate) fn frame_count(shape: GridShape) -> usize {
    2 * sweep_len(shape) + HOLD_FRAMES
}

pub(crate) fn sort(step: Step, ctx: &PrecomputeContext) -> Frame {
    reorganize(step, ctx, Layout::Sort)
}

pub(crate) fn compress(step: Step, ctx: &PrecomputeContext) -> Frame {
    reorganize(step, ctx, Layout::Compress)
}

fn sweep_len(shape: GridShape) -> usize {
    2 * (shape.cols() + 1)
}

fn reorganize(step: Step, ctx: &PrecomputeContext, layout: Layout) -> Frame {
    let shape = ctx.shape();
    let (rows, cols) = (shape.rows(), shape.cols());
    let sweep = sweep_len(shape);
    let i = step.index;

    // Sweep front position in column units; -1 parks every column in its shuffled state.
    let (front, forward) = if i < 2 * sweep {
        let k = i % sweep;
        let front = k as f64 / (sweep - 1) as f64 * (cols + 1) as f64 - 1.0;
        (front, i < sweep)
    } else {
        (-1.0, true)
    };

    let jitter_phase = (i % JITTER_PERIOD) as f64 / JITTER_PERIOD as f64;
    let middle = (cols - 1) as f64 / 2.0;
    let shuffled = ctx.shuffled_heights();
    let mut b = FrameBuilder::new(shape);

    for col in 0..cols {
        let (pos, target) = match layout {
            Layout::Sort => (col as f64, ctx.target_heights()[col] as f64),
            Layout::Compress => (
                (middle - (col as f64 - middle).abs()) * 2.0,
                (rows as f64 / 3.0).round().max(1.0),
            ),
        };
        let mut local = (front - pos).clamp(0.0, 1.0);
        if !forward {
            local = 1.0 - local;
        }
        let s = Ease::Smoothstep.apply(local);

        let from = shuffled[col] as f64;
        let wobble =
            (1.0 - s) * JITTER_AMPLITUDE * (TAU * (jitter_phase + ctx.column_phase()[col])).sin();
        let height = ((from + (target - from) * s + wobble).round() as usize).clamp(1, rows);

        let top = match layout {
            Layout::Sort => rows - height,
            Layout::Compress => (rows - height) / 2,
        };
        for row in top..top + height {
            b.light(shape.index(row, col), 0.6 + 0.4 * s);
        }
    }
    b.finish()
}
