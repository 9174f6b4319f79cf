//! Path-traversal variants: a head advances along a precomputed path and a trail follows it.

use crate::animation::ease::Ease;
use crate::context::precompute::PrecomputeContext;
use crate::foundation::core::Step;
use crate::frame::model::{Frame, FrameBuilder};

/// Fractions of the snake path lit on the way up; the loop mirrors them back down.
const BRAILLE_FILL: [f64; 4] = [0.15, 0.35, 0.55, 0.75];

pub(crate) const BRAILLE_FRAMES: usize = 2 * BRAILLE_FILL.len();

/// Fill the snake path from its start, then drain it back.
pub(crate) fn braille(step: Step, ctx: &PrecomputeContext) -> Frame {
    let path = ctx.snake_path();
    let total = path.len();
    let partial = |fraction: f64| ((total as f64 * fraction).floor() as usize).clamp(1, total);

    let rising = BRAILLE_FILL.len();
    let count = match step.index % BRAILLE_FRAMES {
        i if i < rising => partial(BRAILLE_FILL[i]),
        i if i == rising => total,
        i => partial(BRAILLE_FILL[2 * rising - i]),
    };

    let mut b = FrameBuilder::new(ctx.shape());
    b.light_all(&path[..count], 1.0);
    b.finish()
}

/// Trail chasing its head around the perimeter.
pub(crate) fn orbit(step: Step, ctx: &PrecomputeContext) -> Frame {
    let path = ctx.perimeter_path();
    let len = path.len();
    let trail = (len / 5).clamp(2, (len - 1).max(2));
    trail_frame(ctx, path, step.index, trail)
}

/// Short trail slithering along the boustrophedon path.
pub(crate) fn snake(step: Step, ctx: &PrecomputeContext) -> Frame {
    let path = ctx.snake_path();
    let trail = (path.len() / 4).clamp(3, 8);
    trail_frame(ctx, path, step.index, trail)
}

/// Two-band diagonal stripe stepping from the top-left to the bottom-right corner.
pub(crate) fn cascade(step: Step, ctx: &PrecomputeContext) -> Frame {
    let bands = ctx.diagonals();
    let n = bands.len();
    let mut b = FrameBuilder::new(ctx.shape());
    b.light_all(&bands[step.index % n], 1.0);
    b.light_all(&bands[(step.index + n - 1) % n], 0.5);
    b.finish()
}

/// Two heads half a lap apart on the perimeter, each with wings on both sides.
pub(crate) fn helix(step: Step, ctx: &PrecomputeContext) -> Frame {
    let path = ctx.perimeter_path();
    let len = path.len();
    let half = len / 2;
    let wing = (len / 8).clamp(1, 4);
    let at = |offset: usize, back: usize| path[(step.index + offset + len - back % len) % len];

    let mut b = FrameBuilder::new(ctx.shape());
    b.light(at(0, 0), 1.0);
    b.light(at(half, 0), 1.0);
    for o in 1..=wing {
        let level = 1.0 - o as f64 / (wing + 1) as f64;
        for lead in [0, half] {
            b.light(at(lead + o, 0), level);
            b.light(at(lead, o), level);
        }
    }
    b.finish()
}

fn trail_frame(ctx: &PrecomputeContext, path: &[usize], head: usize, trail: usize) -> Frame {
    let len = path.len();
    let mut b = FrameBuilder::new(ctx.shape());
    for k in 0..trail {
        let level = Ease::OutQuad.apply(1.0 - k as f64 / trail as f64);
        b.light(path[(head + len - k % len) % len], level);
    }
    b.finish()
}
