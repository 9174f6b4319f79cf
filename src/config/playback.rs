use std::sync::Arc;

use crate::config::loader::ResolvedLoader;
use crate::engine::store::{Engine, FrameSequence};
use crate::foundation::core::FrameIndex;
use crate::foundation::math::frac;
use crate::frame::model::Frame;
use crate::frame::state::DotState;
use crate::timing::profile::Timing;

/// Lifecycle of one mounted loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    /// Shape, variant and timing are fixed; no frame has been shown yet.
    Resolved,
    /// Looping indefinitely.
    Animating,
    /// Stopped for good; no further frames.
    TornDown,
}

/// Per-instance playback over a cached frame sequence.
///
/// Discrete playback steps whole frames; continuous playback wraps normalized time and tweens.
/// With reduced motion the still frame is shown regardless of elapsed time.
#[derive(Clone, Debug)]
pub struct Playback {
    loader: ResolvedLoader,
    sequence: Arc<FrameSequence>,
    still: Frame,
    state: PlaybackState,
    frame: usize,
    time: f64,
    carry_ms: u64,
}

impl Playback {
    /// Resolve frames for `loader` through `engine`. Starts in [`PlaybackState::Resolved`].
    pub fn new(engine: &Engine, loader: ResolvedLoader) -> Self {
        let sequence = engine.generate_frames(loader.variant, loader.shape);
        let still = engine.static_frame(loader.variant, loader.shape);
        Self {
            loader,
            sequence,
            still,
            state: PlaybackState::Resolved,
            frame: 0,
            time: 0.0,
            carry_ms: 0,
        }
    }

    /// Resolved options.
    pub fn loader(&self) -> &ResolvedLoader {
        &self.loader
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current frame index within the loop.
    pub fn frame_index(&self) -> FrameIndex {
        FrameIndex(self.frame)
    }

    /// Current normalized time in `[0, 1)`.
    pub fn normalized_time(&self) -> f64 {
        self.time
    }

    /// Begin animating. No effect unless freshly resolved.
    pub fn start(&mut self) {
        if self.state == PlaybackState::Resolved {
            self.state = PlaybackState::Animating;
        }
    }

    /// Stop for good.
    pub fn tear_down(&mut self) {
        self.state = PlaybackState::TornDown;
    }

    /// Advance one frame and return it.
    ///
    /// The first tick only starts playback and shows frame 0. Time stays aligned with the frame
    /// index so continuous consumers see the same position.
    pub fn tick(&mut self) -> Option<Frame> {
        match self.state {
            PlaybackState::TornDown => return None,
            PlaybackState::Resolved => self.start(),
            PlaybackState::Animating => {
                let n = self.sequence.len();
                self.frame = (self.frame + 1) % n;
                self.time = self.frame as f64 / n as f64;
            }
        }
        self.current_frame()
    }

    /// Advance by wall-clock time and return the frame now showing.
    ///
    /// Discrete timing accumulates elapsed time and steps once per full interval; continuous
    /// timing wraps normalized time modulo one loop.
    pub fn advance_ms(&mut self, elapsed_ms: u64) -> Option<Frame> {
        match self.state {
            PlaybackState::TornDown => return None,
            PlaybackState::Resolved => self.start(),
            PlaybackState::Animating => {}
        }
        let n = self.sequence.len();
        match self.loader.timing {
            Timing::Discrete { interval_ms, .. } => {
                let interval = u64::from(interval_ms.max(1));
                // Whole loops leave the frame unchanged.
                self.carry_ms += elapsed_ms % (interval * n as u64);
                let steps = self.carry_ms / interval;
                self.carry_ms %= interval;
                self.frame = ((self.frame as u64 + steps) % n as u64) as usize;
                self.time = self.frame as f64 / n as f64;
            }
            Timing::Continuous { duration_ms } => {
                let duration = f64::from(duration_ms.max(1));
                self.time = frac(self.time + elapsed_ms as f64 / duration);
                self.frame = ((self.time * n as f64).floor() as usize).min(n - 1);
            }
        }
        self.current_frame()
    }

    /// Frame showing now; the still frame under reduced motion, `None` once torn down.
    pub fn current_frame(&self) -> Option<Frame> {
        match self.state {
            PlaybackState::TornDown => None,
            _ if self.loader.reduced_motion => Some(self.still.clone()),
            _ => Some(self.sequence.frame(FrameIndex(self.frame)).clone()),
        }
    }

    /// Visual state of `(row, col)` now. Continuous playback tweens between frames; discrete
    /// playback and reduced motion report the shown frame's level directly.
    pub fn dot_state(&self, row: usize, col: usize) -> Option<DotState> {
        if self.state == PlaybackState::TornDown {
            return None;
        }
        let shape = self.loader.shape;
        let in_grid = row < shape.rows() && col < shape.cols();
        if !self.loader.reduced_motion && matches!(self.loader.timing, Timing::Continuous { .. }) {
            return Some(self.sequence.dot_state(row, col, self.time));
        }
        let level = match self.current_frame() {
            Some(f) if in_grid => f.level(shape.index(row, col)),
            _ => 0.0,
        };
        Some(DotState::from_level(level))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/playback.rs"]
mod tests;
