use std::sync::{Arc, OnceLock};

use crate::animation::ease::Ease;
use crate::context::precompute::PrecomputeContext;
use crate::engine::cache::MemoCache;
use crate::foundation::core::{FrameIndex, GridShape};
use crate::foundation::math::Fnv1a64;
use crate::frame::model::{Frame, FrameBuilder};
use crate::frame::state::{DotState, TweenPoint, tween_level};
use crate::timing::profile::{Speed, Timing, discrete_timing, frame_interval_ms};
use crate::variants::Variant;

/// Process-lifetime cache of [`PrecomputeContext`]s, keyed by shape.
#[derive(Debug, Default)]
pub struct ContextCache {
    inner: MemoCache<GridShape, PrecomputeContext>,
}

impl ContextCache {
    /// Shared context for `shape`, derived on first use.
    pub fn get_or_create(&self, shape: GridShape) -> Arc<PrecomputeContext> {
        self.inner.get_or_create(shape, || {
            tracing::debug!(%shape, "derive precompute context");
            PrecomputeContext::new(shape)
        })
    }

    /// Number of distinct shapes cached.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` before the first shape has been derived.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime cache of generated [`FrameSequence`]s, keyed by variant and shape.
#[derive(Debug, Default)]
pub struct FrameCache {
    inner: MemoCache<(Variant, GridShape), FrameSequence>,
}

impl FrameCache {
    /// Cached sequence for `(variant, shape)`, if generated already.
    pub fn get(&self, variant: Variant, shape: GridShape) -> Option<Arc<FrameSequence>> {
        self.inner.get(&(variant, shape))
    }

    /// Number of sequences cached.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` before any sequence has been generated.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Hit/miss counters for both engine caches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CacheStats {
    /// Context lookups served from cache.
    pub context_hits: u64,
    /// Contexts derived.
    pub context_misses: u64,
    /// Frame-sequence lookups served from cache.
    pub frame_hits: u64,
    /// Frame sequences generated.
    pub frame_misses: u64,
}

/// One full loop of frames for a variant on a shape.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSequence {
    variant: Variant,
    shape: GridShape,
    frames: Vec<Frame>,
    interval_ms: u32,
}

impl FrameSequence {
    /// Compute every frame of `variant` on `ctx`'s shape.
    pub fn generate(variant: Variant, ctx: &PrecomputeContext) -> Self {
        let shape = ctx.shape();
        let frames = (0..variant.frame_count(shape))
            .map(|i| variant.compute(i, ctx))
            .collect();
        Self {
            variant,
            shape,
            frames,
            interval_ms: frame_interval_ms(variant, Speed::Normal),
        }
    }

    /// Variant these frames belong to.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Grid shape the frames were computed for.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Frames in loop order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Frames per loop.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Always `false`: every variant loops over at least two frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame interval at [`Speed::Normal`].
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Frame interval at `speed`.
    pub fn interval_for(&self, speed: Speed) -> u32 {
        frame_interval_ms(self.variant, speed)
    }

    /// Discrete timing at `speed`.
    pub fn timing(&self, speed: Speed) -> Timing {
        discrete_timing(self.variant, self.shape, speed, None)
    }

    /// Frame at `index`, wrapped into the loop.
    pub fn frame(&self, index: FrameIndex) -> &Frame {
        &self.frames[index.wrap(self.frames.len()).0]
    }

    /// Continuous state of `(row, col)` at normalized time `t`.
    ///
    /// The cell's levels in the two frames around `t` are blended with smoothstep. Cells outside
    /// the grid are idle.
    pub fn dot_state(&self, row: usize, col: usize, t: f64) -> DotState {
        if row >= self.shape.rows() || col >= self.shape.cols() {
            return DotState::from_level(0.0);
        }
        let at = TweenPoint::locate(t, self.frames.len());
        DotState::from_level(tween_level(
            &self.frames[at.from],
            &self.frames[at.to],
            self.shape.index(row, col),
            at.blend,
            Ease::Smoothstep,
        ))
    }

    /// First frame with an active cell.
    pub fn first_non_empty(&self) -> Option<&Frame> {
        self.frames.iter().find(|f| !f.is_empty())
    }

    /// FNV-1a digest of the active cells and quantized levels of every frame.
    ///
    /// Stable across processes and platforms, so it can be compared against recorded values.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(self.variant.name().as_bytes());
        h.write_u8(self.shape.rows() as u8);
        h.write_u8(self.shape.cols() as u8);
        h.write_u64(self.frames.len() as u64);
        for f in &self.frames {
            f.hash_into(&mut h);
        }
        h.finish()
    }
}

/// Frame generation front door: owns the context and frame caches.
///
/// Every query is infallible. Use [`Engine::global`] for the shared process-wide instance, or
/// construct a private one (tests do, to observe cache statistics in isolation).
#[derive(Debug, Default)]
pub struct Engine {
    contexts: ContextCache,
    frames: FrameCache,
}

impl Engine {
    /// Empty engine with cold caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lazily initialised process-wide engine.
    pub fn global() -> &'static Engine {
        static GLOBAL: OnceLock<Engine> = OnceLock::new();
        GLOBAL.get_or_init(Engine::new)
    }

    /// Shared context for `shape`.
    pub fn context(&self, shape: GridShape) -> Arc<PrecomputeContext> {
        self.contexts.get_or_create(shape)
    }

    /// Context cache, for inspection.
    pub fn contexts(&self) -> &ContextCache {
        &self.contexts
    }

    /// Frame cache, for inspection.
    pub fn frame_cache(&self) -> &FrameCache {
        &self.frames
    }

    /// Full loop for `(variant, shape)`, computed at most once per engine.
    #[tracing::instrument(skip_all, fields(variant = %variant, shape = %shape))]
    pub fn generate_frames(&self, variant: Variant, shape: GridShape) -> Arc<FrameSequence> {
        self.frames.inner.get_or_create((variant, shape), || {
            let ctx = self.context(shape);
            let seq = FrameSequence::generate(variant, &ctx);
            tracing::debug!(
                frames = seq.len(),
                interval_ms = seq.interval_ms(),
                "generated frames"
            );
            seq
        })
    }

    /// Frame `index` of the loop (wrapped).
    pub fn frame_at(&self, variant: Variant, shape: GridShape, index: FrameIndex) -> Frame {
        self.generate_frames(variant, shape).frame(index).clone()
    }

    /// Whether cell `(row, col)` is active in frame `index`. Cells outside the grid never are.
    pub fn is_dot_active(
        &self,
        variant: Variant,
        shape: GridShape,
        index: FrameIndex,
        row: usize,
        col: usize,
    ) -> bool {
        if row >= shape.rows() || col >= shape.cols() {
            return false;
        }
        self.generate_frames(variant, shape)
            .frame(index)
            .contains(shape.index(row, col))
    }

    /// Single frame shown when motion is disabled: the first non-empty frame of the loop.
    ///
    /// Never empty; if a loop had no active cell at all the centre cell is lit instead.
    pub fn static_frame(&self, variant: Variant, shape: GridShape) -> Frame {
        let seq = self.generate_frames(variant, shape);
        if let Some(f) = seq.first_non_empty() {
            return f.clone();
        }
        tracing::debug!(%variant, %shape, "loop has no active cell, lighting the centre");
        let mut b = FrameBuilder::new(shape);
        b.light(shape.index(shape.rows() / 2, shape.cols() / 2), 1.0);
        b.finish()
    }

    /// Continuous state of `(row, col)` at normalized time `t`, tweened between the two cached
    /// frames around `t` with smoothstep. Cells outside the grid are idle.
    pub fn dot_state(
        &self,
        variant: Variant,
        shape: GridShape,
        row: usize,
        col: usize,
        t: f64,
    ) -> DotState {
        self.generate_frames(variant, shape).dot_state(row, col, t)
    }

    /// Snapshot of both caches' counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            context_hits: self.contexts.inner.hits(),
            context_misses: self.contexts.inner.misses(),
            frame_hits: self.frames.inner.hits(),
            frame_misses: self.frames.inner.misses(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/store.rs"]
mod tests;
