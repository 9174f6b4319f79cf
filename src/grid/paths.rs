//! Ordered cell traversals shared by the path-based variants.
//!
//! All paths are lists of row-major cell indices.

use crate::foundation::core::GridShape;

/// Boustrophedon path: even rows left to right, odd rows right to left. Visits every cell once.
pub fn snake_path(shape: GridShape) -> Vec<usize> {
    let mut path = Vec::with_capacity(shape.cell_count());
    for row in 0..shape.rows() {
        if row % 2 == 0 {
            path.extend((0..shape.cols()).map(|col| shape.index(row, col)));
        } else {
            path.extend((0..shape.cols()).rev().map(|col| shape.index(row, col)));
        }
    }
    path
}

/// Clockwise perimeter starting at the top-left corner. Visits every boundary cell once.
pub fn perimeter_path(shape: GridShape) -> Vec<usize> {
    let (rows, cols) = (shape.rows(), shape.cols());
    let mut path = Vec::with_capacity(shape.perimeter_len());
    path.extend((0..cols).map(|col| shape.index(0, col)));
    path.extend((1..rows - 1).map(|row| shape.index(row, cols - 1)));
    path.extend((0..cols).rev().map(|col| shape.index(rows - 1, col)));
    path.extend((1..rows - 1).rev().map(|row| shape.index(row, 0)));
    path
}

/// Bands of constant `row + col`, from the top-left corner to the bottom-right one.
pub fn diagonal_bands(shape: GridShape) -> Vec<Vec<usize>> {
    let (rows, cols) = (shape.rows(), shape.cols());
    (0..rows + cols - 1)
        .map(|sum| {
            (0..rows)
                .filter_map(|row| {
                    let col = sum.checked_sub(row)?;
                    (col < cols).then(|| shape.index(row, col))
                })
                .collect()
        })
        .collect()
}

/// Bands of constant `row - col`, from the top-right corner to the bottom-left one.
pub fn anti_diagonal_bands(shape: GridShape) -> Vec<Vec<usize>> {
    let (rows, cols) = (shape.rows(), shape.cols());
    (0..rows + cols - 1)
        .map(|band| {
            (0..rows)
                .filter_map(|row| {
                    let col = (row + cols - 1).checked_sub(band)?;
                    (col < cols).then(|| shape.index(row, col))
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/grid/paths.rs"]
mod tests;
