//! Braille Loader computes the frames of small looping dot-grid animations used as loading
//! indicators.
//!
//! Given a variant (one of 19 named patterns) and a grid of 2x2 to 12x12 cells, the engine
//! produces a loop of frames. A frame can be consumed three ways:
//!
//! - **Sparse** ([`Frame`]): the active cells in ascending row-major order, each with a level.
//! - **Continuous** ([`DotState`]): per-cell opacity and scale, tweened between frames.
//! - **Braille** ([`encode_masks`], [`Frame::to_braille`]): Unicode braille glyphs, 2x4 cells
//!   per character.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: names and numbers are normalized into a [`Variant`], a [`GridShape`] and a
//!    [`Timing`]. Nothing is rejected; unknown names fall back to [`DEFAULT_VARIANT`].
//! 2. **Precompute**: a [`PrecomputeContext`] per shape holds traversal paths and seeded random
//!    arrays, derived once.
//! 3. **Generate**: each variant's pure frame function runs over the loop; the resulting
//!    [`FrameSequence`] is cached per `(variant, shape)`.
//! 4. **Play** (optional): [`Playback`] steps or tweens through a sequence for one mounted
//!    loader, honoring reduced motion.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: all randomness comes from a seeded LCG, so identical inputs give
//!   bit-identical frames across runs, processes and platforms.
//! - **Seamless loops**: every loop's last frame leads into its first like any interior step.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod context;
mod engine;
mod foundation;
mod frame;
mod grid;
mod timing;
mod variants;

pub use animation::ease::Ease;
pub use config::loader::{LoaderConfig, PlaybackMode, ResolvedLoader};
pub use config::playback::{Playback, PlaybackState};
pub use context::precompute::PrecomputeContext;
pub use engine::inspect::ChangeProfile;
pub use engine::store::{CacheStats, ContextCache, Engine, FrameCache, FrameSequence};
pub use foundation::core::{FrameIndex, GridShape, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
pub use foundation::error::{LoaderError, LoaderResult};
pub use foundation::rng::{Lcg, seeded_random, shuffle};
pub use frame::braille::{BRAILLE_BASE, dot_bit, encode_masks, glyph, glyph_dims, to_glyphs};
pub use frame::model::{Dot, Frame};
pub use frame::state::{
    ACTIVE_OPACITY, DotState, IDLE_OPACITY, IDLE_SCALE, TweenPoint, tween_level,
};
pub use grid::paths::{anti_diagonal_bands, diagonal_bands, perimeter_path, snake_path};
pub use grid::resolve::{GridPreset, resolve_grid};
pub use timing::profile::{
    DURATION_OVERRIDE_RANGE_MS, INTERVAL_OVERRIDE_RANGE_MS, MIN_FRAME_INTERVAL_MS, Speed, Timing,
    continuous_timing, discrete_timing, frame_interval_ms, get_duration,
};
pub use variants::{Archetype, DEFAULT_VARIANT, Variant, compute_dot_state, normalize_variant};

/// Shared context for `shape` from the global engine.
pub fn get_context(shape: GridShape) -> std::sync::Arc<PrecomputeContext> {
    Engine::global().context(shape)
}

/// Full loop for `(variant, shape)` from the global engine, computed at most once per process.
pub fn generate_frames(variant: Variant, shape: GridShape) -> std::sync::Arc<FrameSequence> {
    Engine::global().generate_frames(variant, shape)
}

/// Still frame for reduced motion from the global engine. Never empty.
pub fn static_frame(variant: Variant, shape: GridShape) -> Frame {
    Engine::global().static_frame(variant, shape)
}

/// Whether `(row, col)` is active in frame `index`, from the global engine.
pub fn is_dot_active(
    variant: Variant,
    shape: GridShape,
    index: FrameIndex,
    row: usize,
    col: usize,
) -> bool {
    Engine::global().is_dot_active(variant, shape, index, row, col)
}

/// Continuous state of `(row, col)` at normalized time `t`, from the global engine.
pub fn dot_state(variant: Variant, shape: GridShape, row: usize, col: usize, t: f64) -> DotState {
    Engine::global().dot_state(variant, shape, row, col, t)
}
