use crate::animation::ease::Ease;
use crate::foundation::math::{frac, lerp};
use crate::frame::model::Frame;

/// Opacity of an inactive dot.
pub const IDLE_OPACITY: f32 = 0.2;
/// Opacity of a fully lit dot.
pub const ACTIVE_OPACITY: f32 = 0.9;
/// Scale of an inactive dot.
pub const IDLE_SCALE: f32 = 0.85;

/// Continuous visual state of one dot at one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DotState {
    /// Opacity in `[IDLE_OPACITY, ACTIVE_OPACITY]`.
    pub opacity: f32,
    /// Uniform scale in `[IDLE_SCALE, 1]`.
    pub scale: f32,
}

impl DotState {
    /// State for a dot lit at `level` (0 = inactive, 1 = fully lit).
    pub fn from_level(level: f32) -> Self {
        let level = level.clamp(0.0, 1.0);
        Self {
            opacity: IDLE_OPACITY + (ACTIVE_OPACITY - IDLE_OPACITY) * level,
            scale: IDLE_SCALE + (1.0 - IDLE_SCALE) * level,
        }
    }

    /// Whether the dot reads as lit (more than halfway to full opacity).
    pub fn is_lit(self) -> bool {
        self.opacity >= (IDLE_OPACITY + ACTIVE_OPACITY) / 2.0
    }
}

/// Where normalized time `t` falls in a loop of `count` frames.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenPoint {
    /// Frame at or before `t`.
    pub from: usize,
    /// Frame after `from`, wrapping to 0 at the end of the loop.
    pub to: usize,
    /// Position between the two frames in `[0, 1)`.
    pub blend: f64,
}

impl TweenPoint {
    /// Locate `t` (wrapped into `[0, 1)`) in a loop of `count` frames.
    pub fn locate(t: f64, count: usize) -> Self {
        let count = count.max(1);
        let t = if t.is_finite() { frac(t) } else { 0.0 };
        let pos = t * count as f64;
        let from = (pos.floor() as usize).min(count - 1);
        Self {
            from,
            to: (from + 1) % count,
            blend: (pos - from as f64).clamp(0.0, 1.0),
        }
    }
}

/// Eased level of cell `index` between two adjacent frames.
pub fn tween_level(from: &Frame, to: &Frame, index: usize, blend: f64, ease: Ease) -> f32 {
    let a = f64::from(from.level(index));
    let b = f64::from(to.level(index));
    lerp(a, b, ease.apply(blend)) as f32
}

#[cfg(test)]
#[path = "../../tests/unit/frame/state.rs"]
mod tests;
