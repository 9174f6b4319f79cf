use std::str::FromStr;

use crate::foundation::core::GridShape;
use crate::foundation::error::LoaderError;
use crate::variants::Variant;

/// Shortest frame interval a variant's pacing can produce.
pub const MIN_FRAME_INTERVAL_MS: u32 = 50;
/// Allowed range for an explicit frame interval.
pub const INTERVAL_OVERRIDE_RANGE_MS: (u32, u32) = (16, 10_000);
/// Allowed range for an explicit loop duration.
pub const DURATION_OVERRIDE_RANGE_MS: (u32, u32) = (100, 60_000);

/// Caller-facing speed preset.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    /// Relaxed pace.
    Slow,
    /// Default pace.
    #[default]
    Normal,
    /// Brisk pace.
    Fast,
}

impl Speed {
    /// Frame interval before the variant's pacing multiplier is applied.
    pub fn base_interval_ms(self) -> u32 {
        match self {
            Self::Slow => 220,
            Self::Normal => 140,
            Self::Fast => 90,
        }
    }

    /// Loop duration for continuous playback before pacing.
    pub fn loop_duration_ms(self) -> u32 {
        match self {
            Self::Slow => 3000,
            Self::Normal => 2000,
            Self::Fast => 1200,
        }
    }

    /// Lowercase preset name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
        }
    }
}

impl FromStr for Speed {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            other => Err(LoaderError::validation(format!(
                "unknown speed '{other}' (expected slow, normal or fast)"
            ))),
        }
    }
}

/// How a consumer schedules updates for one loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Timing {
    /// Step through `frame_count` frames, one every `interval_ms`.
    Discrete {
        /// Frames per loop.
        frame_count: usize,
        /// Delay between frames.
        interval_ms: u32,
    },
    /// Drive normalized time from 0 to 1 over `duration_ms`, then wrap.
    Continuous {
        /// Loop length.
        duration_ms: u32,
    },
}

impl Timing {
    /// Length of one full loop in milliseconds.
    pub fn loop_ms(self) -> u64 {
        match self {
            Self::Discrete {
                frame_count,
                interval_ms,
            } => frame_count as u64 * u64::from(interval_ms),
            Self::Continuous { duration_ms } => u64::from(duration_ms),
        }
    }

    /// Frames per loop, for discrete timing.
    pub fn frame_count(self) -> Option<usize> {
        match self {
            Self::Discrete { frame_count, .. } => Some(frame_count),
            Self::Continuous { .. } => None,
        }
    }
}

/// Frame interval for `variant` at `speed`: the preset interval scaled by the variant's pacing,
/// never below [`MIN_FRAME_INTERVAL_MS`].
pub fn frame_interval_ms(variant: Variant, speed: Speed) -> u32 {
    let scaled = (f64::from(speed.base_interval_ms()) * variant.pacing()).round() as u32;
    scaled.max(MIN_FRAME_INTERVAL_MS)
}

/// Preset loop duration for continuous playback.
pub fn get_duration(speed: Speed) -> u32 {
    speed.loop_duration_ms()
}

/// Discrete timing for `variant` on `shape`.
///
/// An explicit interval (if finite) replaces the paced preset and is only clamped into
/// [`INTERVAL_OVERRIDE_RANGE_MS`].
pub fn discrete_timing(
    variant: Variant,
    shape: GridShape,
    speed: Speed,
    interval_override_ms: Option<f64>,
) -> Timing {
    let interval_ms = clamp_override(interval_override_ms, INTERVAL_OVERRIDE_RANGE_MS)
        .unwrap_or_else(|| frame_interval_ms(variant, speed));
    Timing::Discrete {
        frame_count: variant.frame_count(shape),
        interval_ms,
    }
}

/// Continuous timing for `variant`.
///
/// The preset duration is scaled by the variant's pacing; an explicit duration (if finite)
/// replaces it and is only clamped into [`DURATION_OVERRIDE_RANGE_MS`].
pub fn continuous_timing(
    variant: Variant,
    speed: Speed,
    duration_override_ms: Option<f64>,
) -> Timing {
    let duration_ms = clamp_override(duration_override_ms, DURATION_OVERRIDE_RANGE_MS)
        .unwrap_or_else(|| (f64::from(get_duration(speed)) * variant.pacing()).round() as u32);
    Timing::Continuous { duration_ms }
}

fn clamp_override(value: Option<f64>, (lo, hi): (u32, u32)) -> Option<u32> {
    let v = value.filter(|v| v.is_finite())?;
    Some(v.round().clamp(f64::from(lo), f64::from(hi)) as u32)
}

#[cfg(test)]
#[path = "../../tests/unit/timing/profile.rs"]
mod tests;
