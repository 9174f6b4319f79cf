//! The variant library: one pure frame function per named animation.

mod path;
mod reorganize;
mod stochastic;
mod sweep;
mod threshold;

use crate::animation::ease::Ease;
use crate::context::precompute::PrecomputeContext;
use crate::foundation::core::{GridShape, Step};
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::frame::model::Frame;
use crate::frame::state::{DotState, TweenPoint, tween_level};

/// Variant used when a name is absent or not recognized.
pub const DEFAULT_VARIANT: Variant = Variant::Braille;

/// A named animation pattern.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// Snake path fills up and drains back.
    #[default]
    Braille,
    /// Fading trail circling the perimeter.
    Orbit,
    /// Square region swelling from the centre.
    Breathe,
    /// Short trail following the boustrophedon path.
    Snake,
    /// Columns revealed then concealed left to right.
    FillSweep,
    /// Diamond region swelling from the centre.
    Pulse,
    /// Alternating column groups.
    Columns,
    /// Alternating cell parity.
    Checkerboard,
    /// One row at a time, top to bottom.
    Scan,
    /// Desynchronized falling drops, one per column.
    Rain,
    /// Diagonal stripe with a dim tail.
    Cascade,
    /// Cells twinkling at seeded offsets.
    Sparkle,
    /// Per-row sine wave.
    WaveRows,
    /// Two winged heads half a lap apart on the perimeter.
    Helix,
    /// Anti-diagonal bands filling then clearing.
    DiagonalSwipe,
    /// Ring contracting towards the centre.
    GravityWell,
    /// Twisted arm rotating about the centre.
    Spiral,
    /// Column bars sorting into ascending heights and back.
    Sort,
    /// Column bars compressing to a common height and back.
    Compress,
}

/// Motion family a variant belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Archetype {
    /// A scalar field over cell coordinates, lit inside a moving band.
    Threshold,
    /// A head advancing along a precomputed path.
    Path,
    /// Periodic per-cell signals desynchronized by seeded offsets.
    Stochastic,
    /// A front of whole rows, columns, or bands.
    Sweep,
    /// Column heights moving between disorder and order.
    Reorganization,
}

impl Archetype {
    /// Kebab-case name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Path => "path",
            Self::Stochastic => "stochastic",
            Self::Sweep => "sweep",
            Self::Reorganization => "reorganization",
        }
    }
}

impl Variant {
    /// Every variant, in listing order.
    pub const ALL: [Variant; 19] = [
        Variant::Braille,
        Variant::Orbit,
        Variant::Breathe,
        Variant::Snake,
        Variant::FillSweep,
        Variant::Pulse,
        Variant::Columns,
        Variant::Checkerboard,
        Variant::Scan,
        Variant::Rain,
        Variant::Cascade,
        Variant::Sparkle,
        Variant::WaveRows,
        Variant::Helix,
        Variant::DiagonalSwipe,
        Variant::GravityWell,
        Variant::Spiral,
        Variant::Sort,
        Variant::Compress,
    ];

    /// Kebab-case identifier, as accepted by [`normalize_variant`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Braille => "braille",
            Self::Orbit => "orbit",
            Self::Breathe => "breathe",
            Self::Snake => "snake",
            Self::FillSweep => "fill-sweep",
            Self::Pulse => "pulse",
            Self::Columns => "columns",
            Self::Checkerboard => "checkerboard",
            Self::Scan => "scan",
            Self::Rain => "rain",
            Self::Cascade => "cascade",
            Self::Sparkle => "sparkle",
            Self::WaveRows => "wave-rows",
            Self::Helix => "helix",
            Self::DiagonalSwipe => "diagonal-swipe",
            Self::GravityWell => "gravity-well",
            Self::Spiral => "spiral",
            Self::Sort => "sort",
            Self::Compress => "compress",
        }
    }

    /// Motion family.
    pub fn archetype(self) -> Archetype {
        match self {
            Self::Breathe | Self::Pulse | Self::GravityWell | Self::Spiral => Archetype::Threshold,
            Self::Braille | Self::Orbit | Self::Snake | Self::Cascade | Self::Helix => {
                Archetype::Path
            }
            Self::Rain | Self::Sparkle => Archetype::Stochastic,
            Self::FillSweep
            | Self::Columns
            | Self::Checkerboard
            | Self::Scan
            | Self::DiagonalSwipe
            | Self::WaveRows => Archetype::Sweep,
            Self::Sort | Self::Compress => Archetype::Reorganization,
        }
    }

    /// Multiplier applied to the base frame interval. Below 1 runs faster.
    pub fn pacing(self) -> f64 {
        match self {
            Self::Braille | Self::Pulse | Self::Columns | Self::WaveRows | Self::GravityWell => 1.0,
            Self::Breathe => 1.15,
            Self::Checkerboard => 1.05,
            Self::FillSweep | Self::Sparkle | Self::DiagonalSwipe => 0.95,
            Self::Orbit
            | Self::Snake
            | Self::Scan
            | Self::Cascade
            | Self::Helix
            | Self::Sort
            | Self::Compress => 0.9,
            Self::Rain | Self::Spiral => 0.85,
        }
    }

    /// Number of frames in one loop on `shape`. Always at least 2.
    pub fn frame_count(self, shape: GridShape) -> usize {
        let (rows, cols) = (shape.rows(), shape.cols());
        match self {
            Self::Braille => path::BRAILLE_FRAMES,
            Self::Orbit | Self::Helix => shape.perimeter_len(),
            Self::Breathe => threshold::BREATHE_FRAMES,
            Self::Snake => shape.cell_count(),
            Self::FillSweep => sweep::fill_sweep_frames(shape),
            Self::Pulse => threshold::PULSE_FRAMES,
            Self::Columns => sweep::COLUMNS_FRAMES,
            Self::Checkerboard => sweep::CHECKERBOARD_FRAMES,
            Self::Scan => rows,
            Self::Rain => stochastic::rain_frames(rows),
            Self::Cascade => rows + cols - 1,
            Self::Sparkle => stochastic::SPARKLE_FRAMES,
            Self::WaveRows => sweep::wave_rows_frames(shape),
            Self::DiagonalSwipe => 2 * (rows + cols - 1),
            Self::GravityWell => threshold::GRAVITY_WELL_FRAMES,
            Self::Spiral => threshold::SPIRAL_FRAMES,
            Self::Sort | Self::Compress => reorganize::frame_count(shape),
        }
    }

    /// Compute frame `index` (taken modulo the frame count) for the context's shape.
    pub fn compute(self, index: usize, ctx: &PrecomputeContext) -> Frame {
        let step = Step::new(index, self.frame_count(ctx.shape()));
        let f: fn(Step, &PrecomputeContext) -> Frame = match self {
            Self::Braille => path::braille,
            Self::Orbit => path::orbit,
            Self::Breathe => threshold::breathe,
            Self::Snake => path::snake,
            Self::FillSweep => sweep::fill_sweep,
            Self::Pulse => threshold::pulse,
            Self::Columns => sweep::columns,
            Self::Checkerboard => sweep::checkerboard,
            Self::Scan => sweep::scan,
            Self::Rain => stochastic::rain,
            Self::Cascade => path::cascade,
            Self::Sparkle => stochastic::sparkle,
            Self::WaveRows => sweep::wave_rows,
            Self::Helix => path::helix,
            Self::DiagonalSwipe => sweep::diagonal_swipe,
            Self::GravityWell => threshold::gravity_well,
            Self::Spiral => threshold::spiral,
            Self::Sort => reorganize::sort,
            Self::Compress => reorganize::compress,
        };
        f(step, ctx)
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Variant {
    type Err = LoaderError;

    /// Strict parse: trims and ignores ASCII case, but rejects unknown names.
    fn from_str(s: &str) -> LoaderResult<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == wanted)
            .ok_or_else(|| LoaderError::unknown_variant(s.trim()))
    }
}

/// Map an optional variant name to a variant, falling back to [`DEFAULT_VARIANT`].
///
/// Never fails; unrecognized names are logged at debug level.
pub fn normalize_variant(name: Option<&str>) -> Variant {
    match name {
        None => DEFAULT_VARIANT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::debug!(name = raw, fallback = %DEFAULT_VARIANT, "unknown variant");
            DEFAULT_VARIANT
        }),
    }
}

/// Continuous state of cell `(row, col)` at normalized time `t`, computed straight from
/// `ctx` without any caching.
///
/// The cell's levels in the two frames around `t` are blended with smoothstep. Cells outside
/// the grid are idle.
pub fn compute_dot_state(
    variant: Variant,
    row: usize,
    col: usize,
    t: f64,
    ctx: &PrecomputeContext,
) -> DotState {
    let shape = ctx.shape();
    if row >= shape.rows() || col >= shape.cols() {
        return DotState::from_level(0.0);
    }
    let at = TweenPoint::locate(t, variant.frame_count(shape));
    let from = variant.compute(at.from, ctx);
    let to = variant.compute(at.to, ctx);
    DotState::from_level(tween_level(
        &from,
        &to,
        shape.index(row, col),
        at.blend,
        Ease::Smoothstep,
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/variants/mod.rs"]
mod tests;
