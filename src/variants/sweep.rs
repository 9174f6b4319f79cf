//! Sweep variants: whole rows, columns, or bands switch on and off in a fixed order.

use std::f64::consts::PI;

use crate::context::precompute::PrecomputeContext;
use crate::foundation::core::{GridShape, Step};
use crate::frame::model::{Frame, FrameBuilder};

pub(crate) const COLUMNS_FRAMES: usize = 4;
pub(crate) const CHECKERBOARD_FRAMES: usize = 2;

const WAVE_MIN_PERIOD: usize = 8;

/// Columns revealed left to right, then concealed left to right.
pub(crate) fn fill_sweep_frames(shape: GridShape) -> usize {
    2 * shape.cols()
}

/// Two full wave cycles per loop.
pub(crate) fn wave_rows_frames(shape: GridShape) -> usize {
    2 * wave_period(shape)
}

fn wave_period(shape: GridShape) -> usize {
    (2 * shape.cols()).max(WAVE_MIN_PERIOD)
}

pub(crate) fn fill_sweep(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let cols = shape.cols();
    let i = step.index;
    let (lo, hi) = if i <= cols { (0, i) } else { (i - cols, cols) };
    light_columns(shape, |col| (lo..hi).contains(&col))
}

/// Even columns, odd columns, left half, right half.
pub(crate) fn columns(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let cols = shape.cols();
    let mid = cols / 2;
    match step.index % COLUMNS_FRAMES {
        0 => light_columns(shape, |col| col % 2 == 0),
        1 => light_columns(shape, |col| col % 2 == 1),
        2 => light_columns(shape, |col| col < mid),
        _ => light_columns(shape, |col| col >= cols - mid),
    }
}

/// Cells with `(row + col) % 2 == index`.
pub(crate) fn checkerboard(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let parity = step.index % CHECKERBOARD_FRAMES;
    let mut b = FrameBuilder::new(shape);
    for row in 0..shape.rows() {
        for col in 0..shape.cols() {
            if (row + col) % 2 == parity {
                b.light(shape.index(row, col), 1.0);
            }
        }
    }
    b.finish()
}

/// One full row per frame, top to bottom.
pub(crate) fn scan(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let row = step.index % shape.rows();
    let mut b = FrameBuilder::new(shape);
    for col in 0..shape.cols() {
        b.light(shape.index(row, col), 1.0);
    }
    b.finish()
}

/// Anti-diagonal bands accumulate from the top-right corner, then clear in the same order.
pub(crate) fn diagonal_swipe(step: Step, ctx: &PrecomputeContext) -> Frame {
    let bands = ctx.anti_diagonals();
    let n = bands.len();
    let i = step.index;
    let lit = if i < n { &bands[..=i] } else { &bands[(i - n + 1).min(n)..] };

    let mut b = FrameBuilder::new(ctx.shape());
    for band in lit {
        b.light_all(band, 1.0);
    }
    b.finish()
}

/// Each row carries one bright cell and a dimmer neighbour along a sine, phase-shifted by row.
pub(crate) fn wave_rows(step: Step, ctx: &PrecomputeContext) -> Frame {
    let shape = ctx.shape();
    let (rows, cols) = (shape.rows(), shape.cols());
    let period = wave_period(shape);
    let phase = (step.index % period) as f64 / period as f64;

    let mut b = FrameBuilder::new(shape);
    for row in 0..rows {
        let s = ((phase * 2.0 * PI + row as f64 / rows as f64 * PI).sin() + 1.0) / 2.0;
        let col = (s * (cols - 1) as f64).round() as usize;
        b.light(shape.index(row, col), 1.0);
        if col + 1 < cols {
            b.light(shape.index(row, col + 1), 0.6);
        }
    }
    b.finish()
}

fn light_columns(shape: GridShape, lit: impl Fn(usize) -> bool) -> Frame {
    let mut b = FrameBuilder::new(shape);
    for row in 0..shape.rows() {
        for col in (0..shape.cols()).filter(|&c| lit(c)) {
            b.light(shape.index(row, col), 1.0);
        }
    }
    b.finish()
}
