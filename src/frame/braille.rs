//! Bit-packed braille rendering of sparse frames.
//!
//! Each glyph covers a 2-column by 4-row block of grid cells. Dot bits follow the Unicode
//! braille layout:
//!
//! ```text
//! 0x01 0x08
//! 0x02 0x10
//! 0x04 0x20
//! 0x40 0x80
//! ```

use crate::foundation::core::GridShape;
use crate::frame::model::Frame;

/// First code point of the Unicode braille block (the blank pattern).
pub const BRAILLE_BASE: u32 = 0x2800;

const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Glyph grid size `(width, height)` in characters for `shape`.
pub fn glyph_dims(shape: GridShape) -> (usize, usize) {
    (shape.cols().div_ceil(2), shape.rows().div_ceil(4))
}

/// Bit for grid cell `(row, col)` within its glyph.
pub fn dot_bit(row: usize, col: usize) -> u8 {
    DOT_BITS[row % 4][col % 2]
}

/// Pack `frame` into one mask per glyph, row-major over glyphs. Cells outside `shape` are
/// ignored.
pub fn encode_masks(frame: &Frame, shape: GridShape) -> Vec<u8> {
    let (width, height) = glyph_dims(shape);
    let mut masks = vec![0u8; width * height];
    for index in frame.indices().filter(|&i| i < shape.cell_count()) {
        let (row, col) = shape.row_col(index);
        masks[(row / 4) * width + col / 2] |= dot_bit(row, col);
    }
    masks
}

/// Glyph for one mask.
pub fn glyph(mask: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(mask)).unwrap_or(' ')
}

/// Render masks as glyph rows joined by `\n`.
pub fn to_glyphs(masks: &[u8], width: usize) -> String {
    masks
        .chunks(width.max(1))
        .map(|row| row.iter().copied().map(glyph).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

impl Frame {
    /// Braille glyph rendering of this frame.
    pub fn to_braille(&self, shape: GridShape) -> String {
        let (width, _) = glyph_dims(shape);
        to_glyphs(&encode_masks(self, shape), width)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/braille.rs"]
mod tests;
