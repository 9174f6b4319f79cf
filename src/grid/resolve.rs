use std::str::FromStr;

use crate::foundation::core::{GridShape, MAX_GRID_DIMENSION, MIN_GRID_DIMENSION};
use crate::foundation::error::LoaderError;

const DEFAULT_DIMENSION: u8 = 4;

/// Named grid sizes.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GridPreset {
    /// 3x3.
    Sm,
    /// 4x4.
    #[default]
    Md,
    /// 5x5.
    Lg,
    /// 6x6.
    Xl,
}

impl GridPreset {
    /// Shape for this preset.
    pub fn shape(self) -> GridShape {
        match self {
            Self::Sm => GridShape::new(3, 3),
            Self::Md => GridShape::new(4, 4),
            Self::Lg => GridShape::new(5, 5),
            Self::Xl => GridShape::new(6, 6),
        }
    }

    /// Lowercase preset name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

impl FromStr for GridPreset {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm" => Ok(Self::Sm),
            "md" => Ok(Self::Md),
            "lg" => Ok(Self::Lg),
            "xl" => Ok(Self::Xl),
            other => Err(LoaderError::validation(format!(
                "unknown grid preset '{other}' (expected sm, md, lg or xl)"
            ))),
        }
    }
}

/// Resolve the grid for a loader.
///
/// An explicit `[rows, cols]` pair wins: each value is rounded to the nearest integer and clamped
/// into the supported range independently. Otherwise the preset table applies, and with neither
/// the grid is 4x4. This never fails.
pub fn resolve_grid(preset: Option<GridPreset>, explicit: Option<[f64; 2]>) -> GridShape {
    if let Some([rows, cols]) = explicit {
        return GridShape::new(sanitize_dimension(rows), sanitize_dimension(cols));
    }
    preset.unwrap_or_default().shape()
}

fn sanitize_dimension(v: f64) -> u8 {
    if v.is_nan() {
        return DEFAULT_DIMENSION;
    }
    v.round()
        .clamp(f64::from(MIN_GRID_DIMENSION), f64::from(MAX_GRID_DIMENSION)) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/grid/resolve.rs"]
mod tests;
