use crate::foundation::core::GridShape;
use crate::foundation::rng::{Lcg, shuffle};
use crate::grid::paths::{anti_diagonal_bands, diagonal_bands, perimeter_path, snake_path};

/// Fixed per-shape seeds. Changing any of these changes every cached frame sequence.
pub(crate) mod seeds {
    use crate::foundation::core::GridShape;

    pub(crate) fn importance(shape: GridShape) -> u32 {
        (shape.rows() * 7919 + shape.cols() * 104_729) as u32
    }

    pub(crate) fn rain(shape: GridShape) -> u32 {
        (shape.rows() * 131 + shape.cols() * 17) as u32
    }

    pub(crate) fn sparkle(shape: GridShape) -> u32 {
        (shape.rows() * 911 + shape.cols() * 3571) as u32
    }

    pub(crate) fn columns(shape: GridShape) -> u32 {
        (shape.rows() * 7727 + shape.cols() * 389) as u32
    }
}

/// Per-shape derived data shared read-only by every frame of every variant.
///
/// Built once per distinct [`GridShape`]; all randomness comes from [`Lcg`] with the seeds in
/// [`seeds`], so two contexts for the same shape are identical.
#[derive(Clone, Debug, PartialEq)]
pub struct PrecomputeContext {
    shape: GridShape,
    snake_path: Vec<usize>,
    perimeter_path: Vec<usize>,
    diagonals: Vec<Vec<usize>>,
    anti_diagonals: Vec<Vec<usize>>,
    importance: Vec<f64>,
    rain_phase: Vec<usize>,
    rain_speed: Vec<usize>,
    twinkle_slot: Vec<usize>,
    target_heights: Vec<usize>,
    shuffled_heights: Vec<usize>,
    column_phase: Vec<f64>,
}

impl PrecomputeContext {
    /// Derive the context for `shape`.
    pub fn new(shape: GridShape) -> Self {
        let (rows, cols) = (shape.rows(), shape.cols());
        let cells = shape.cell_count();

        let importance = Lcg::new(seeds::importance(shape)).take(cells).collect();

        let mut rng = Lcg::new(seeds::rain(shape));
        let rain_phase = (0..cols).map(|_| rng.next_below(rows)).collect();
        let rain_speed = (0..cols).map(|_| 1 + rng.next_below(2)).collect();

        let mut order: Vec<usize> = (0..cells).collect();
        shuffle(&mut order, &mut Lcg::new(seeds::sparkle(shape)));
        let mut twinkle_slot = vec![0; cells];
        for (rank, &cell) in order.iter().enumerate() {
            twinkle_slot[cell] = rank;
        }

        let target_heights: Vec<usize> = (0..cols)
            .map(|col| 1 + ((col * (rows - 1)) as f64 / (cols - 1) as f64).round() as usize)
            .collect();
        let mut rng = Lcg::new(seeds::columns(shape));
        let mut shuffled_heights = target_heights.clone();
        shuffle(&mut shuffled_heights, &mut rng);
        let column_phase = (0..cols).map(|_| rng.next_f64()).collect();

        Self {
            shape,
            snake_path: snake_path(shape),
            perimeter_path: perimeter_path(shape),
            diagonals: diagonal_bands(shape),
            anti_diagonals: anti_diagonal_bands(shape),
            importance,
            rain_phase,
            rain_speed,
            twinkle_slot,
            target_heights,
            shuffled_heights,
            column_phase,
        }
    }

    /// Grid shape this context was derived for.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Boustrophedon traversal of every cell.
    pub fn snake_path(&self) -> &[usize] {
        &self.snake_path
    }

    /// Clockwise traversal of the boundary cells.
    pub fn perimeter_path(&self) -> &[usize] {
        &self.perimeter_path
    }

    /// Bands of constant `row + col`.
    pub fn diagonals(&self) -> &[Vec<usize>] {
        &self.diagonals
    }

    /// Bands of constant `row - col`, starting top-right.
    pub fn anti_diagonals(&self) -> &[Vec<usize>] {
        &self.anti_diagonals
    }

    /// Random weight in `[0, 1)` per cell.
    pub fn importance(&self) -> &[f64] {
        &self.importance
    }

    /// Starting row of each column's rain drop.
    pub fn rain_phase(&self) -> &[usize] {
        &self.rain_phase
    }

    /// Rows advanced per frame by each column's drop (1 or 2).
    pub fn rain_speed(&self) -> &[usize] {
        &self.rain_speed
    }

    /// Rank of each cell in a seeded permutation; sparkle phase offsets derive from it.
    pub fn twinkle_slot(&self) -> &[usize] {
        &self.twinkle_slot
    }

    /// Ordered column heights (ascending left to right, each in `1..=rows`).
    pub fn target_heights(&self) -> &[usize] {
        &self.target_heights
    }

    /// A seeded permutation of [`Self::target_heights`].
    pub fn shuffled_heights(&self) -> &[usize] {
        &self.shuffled_heights
    }

    /// Jitter phase in `[0, 1)` per column.
    pub fn column_phase(&self) -> &[f64] {
        &self.column_phase
    }
}

#[cfg(test)]
#[path = "../../tests/unit/context/precompute.rs"]
mod tests;
