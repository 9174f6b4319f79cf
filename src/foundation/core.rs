/// Smallest supported grid dimension (rows or columns).
pub const MIN_GRID_DIMENSION: u8 = 2;
/// Largest supported grid dimension (rows or columns).
pub const MAX_GRID_DIMENSION: u8 = 12;

/// Index of a frame within a looping frame sequence.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub usize);

impl FrameIndex {
    /// Wrap this index into `[0, count)`. A zero `count` maps everything to frame 0.
    pub fn wrap(self, count: usize) -> Self {
        if count == 0 {
            return Self(0);
        }
        Self(self.0 % count)
    }
}

/// Validated dot-grid dimensions.
///
/// Both dimensions are always within `[MIN_GRID_DIMENSION, MAX_GRID_DIMENSION]`; the only
/// constructor clamps. Cells are addressed row-major: `index = row * cols + col`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(from = "GridShapeDef", into = "GridShapeDef")]
pub struct GridShape {
    rows: u8,
    cols: u8,
}

#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
struct GridShapeDef {
    rows: u8,
    cols: u8,
}

impl From<GridShapeDef> for GridShape {
    fn from(def: GridShapeDef) -> Self {
        Self::new(def.rows, def.cols)
    }
}

impl From<GridShape> for GridShapeDef {
    fn from(shape: GridShape) -> Self {
        Self {
            rows: shape.rows,
            cols: shape.cols,
        }
    }
}

impl Default for GridShape {
    fn default() -> Self {
        Self::new(4, 4)
    }
}

impl std::fmt::Display for GridShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl GridShape {
    /// Build a shape, clamping each dimension into the supported range.
    pub fn new(rows: u8, cols: u8) -> Self {
        Self {
            rows: rows.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION),
            cols: cols.clamp(MIN_GRID_DIMENSION, MAX_GRID_DIMENSION),
        }
    }

    /// Iterate every supported shape, row-major over `(rows, cols)`.
    pub fn all() -> impl Iterator<Item = GridShape> {
        (MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).flat_map(|rows| {
            (MIN_GRID_DIMENSION..=MAX_GRID_DIMENSION).map(move |cols| GridShape { rows, cols })
        })
    }

    /// Number of rows.
    pub fn rows(self) -> usize {
        usize::from(self.rows)
    }

    /// Number of columns.
    pub fn cols(self) -> usize {
        usize::from(self.cols)
    }

    /// Total number of cells.
    pub fn cell_count(self) -> usize {
        self.rows() * self.cols()
    }

    /// Row-major cell index.
    pub fn index(self, row: usize, col: usize) -> usize {
        row * self.cols() + col
    }

    /// Inverse of [`GridShape::index`].
    pub fn row_col(self, index: usize) -> (usize, usize) {
        (index / self.cols(), index % self.cols())
    }

    /// Length of the clockwise perimeter path.
    pub fn perimeter_len(self) -> usize {
        2 * (self.rows() + self.cols()) - 4
    }

    /// Geometric centre in cell coordinates `(row, col)`.
    pub fn center(self) -> (f64, f64) {
        (
            (self.rows() as f64 - 1.0) / 2.0,
            (self.cols() as f64 - 1.0) / 2.0,
        )
    }
}

/// Position of one frame within a loop of `count` frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Frame index in `[0, count)`.
    pub index: usize,
    /// Total frames in the loop (> 0).
    pub count: usize,
}

impl Step {
    /// Build a step, wrapping `index` into the loop.
    pub fn new(index: usize, count: usize) -> Self {
        let count = count.max(1);
        Self {
            index: index % count,
            count,
        }
    }

    /// Normalized time in `[0, 1)`.
    pub fn progress(self) -> f64 {
        self.index as f64 / self.count as f64
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
