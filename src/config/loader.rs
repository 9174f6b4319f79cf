use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::GridShape;
use crate::foundation::error::{LoaderError, LoaderResult};
use crate::grid::resolve::{GridPreset, resolve_grid};
use crate::timing::profile::{Speed, Timing, continuous_timing, discrete_timing};
use crate::variants::{Variant, normalize_variant};

/// How a consumer advances the animation.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Step whole frames on a fixed interval.
    #[default]
    Discrete,
    /// Tween dot states along normalized time.
    Continuous,
}

impl std::str::FromStr for PlaybackMode {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discrete" => Ok(Self::Discrete),
            "continuous" => Ok(Self::Continuous),
            other => Err(LoaderError::validation(format!(
                "unknown playback mode '{other}' (expected discrete or continuous)"
            ))),
        }
    }
}

/// Loader options as a host would write them, for example in JSON.
///
/// Every field is optional. Names and numbers are normalized when resolved, never rejected;
/// only unknown fields and malformed JSON fail to load.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// Variant name; unknown names fall back to the default variant.
    pub variant: Option<String>,
    /// Grid preset name (`sm`, `md`, `lg`, `xl`).
    pub grid_size: Option<String>,
    /// Explicit `[rows, cols]`, preferred over `grid_size`.
    pub grid: Option<[f64; 2]>,
    /// Speed preset name (`slow`, `normal`, `fast`).
    pub speed: Option<String>,
    /// Explicit frame interval for discrete playback.
    pub interval_ms: Option<f64>,
    /// Explicit loop duration for continuous playback.
    pub duration_ms: Option<f64>,
    /// Playback mode name (`discrete`, `continuous`).
    pub mode: Option<String>,
    /// Show a single still frame instead of animating.
    pub reduced_motion: bool,
}

/// A loader with every option resolved to a concrete value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedLoader {
    /// Resolved variant.
    pub variant: Variant,
    /// Resolved grid.
    pub shape: GridShape,
    /// Resolved speed preset.
    pub speed: Speed,
    /// Schedule for one loop.
    pub timing: Timing,
    /// Whether motion is disabled.
    pub reduced_motion: bool,
}

impl LoaderConfig {
    /// Parse a config from JSON text.
    pub fn from_json_str(json: &str) -> LoaderResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| LoaderError::validation(format!("invalid loader config: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn from_json_path(path: &Path) -> LoaderResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read loader config {}", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Resolve every option. Never fails.
    pub fn resolve(&self) -> ResolvedLoader {
        let variant = normalize_variant(self.variant.as_deref());
        let preset: Option<GridPreset> = self
            .grid_size
            .as_deref()
            .and_then(|raw| lenient(raw, "grid_size"));
        let shape = resolve_grid(preset, self.grid);
        let speed: Speed = self
            .speed
            .as_deref()
            .and_then(|raw| lenient(raw, "speed"))
            .unwrap_or_default();
        let mode: PlaybackMode = self
            .mode
            .as_deref()
            .and_then(|raw| lenient(raw, "mode"))
            .unwrap_or_default();
        let timing = match mode {
            PlaybackMode::Discrete => discrete_timing(variant, shape, speed, self.interval_ms),
            PlaybackMode::Continuous => continuous_timing(variant, speed, self.duration_ms),
        };
        ResolvedLoader {
            variant,
            shape,
            speed,
            timing,
            reduced_motion: self.reduced_motion,
        }
    }
}

impl ResolvedLoader {
    /// Playback mode implied by the timing.
    pub fn mode(&self) -> PlaybackMode {
        match self.timing {
            Timing::Discrete { .. } => PlaybackMode::Discrete,
            Timing::Continuous { .. } => PlaybackMode::Continuous,
        }
    }

    /// Pretty JSON rendering.
    pub fn to_json_pretty(&self) -> LoaderResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn lenient<T: std::str::FromStr>(raw: &str, field: &str) -> Option<T> {
    let parsed = raw.parse().ok();
    if parsed.is_none() {
        tracing::debug!(field, value = raw, "unrecognized value, using default");
    }
    parsed
}

#[cfg(test)]
#[path = "../../tests/unit/config/loader.rs"]
mod tests;
