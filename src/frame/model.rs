use crate::foundation::core::GridShape;
use crate::foundation::math::{Fnv1a64, quantize_level};

/// One active cell in a frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Dot {
    /// Row-major cell index.
    pub index: u16,
    /// Brightness in `(0, 1]`.
    pub level: f32,
}

/// Sparse animation frame: active cells in ascending index order, each listed once.
///
/// Cells not listed are inactive.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Frame {
    dots: Vec<Dot>,
}

impl Frame {
    /// The all-inactive frame.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Active dots in ascending index order.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Active cell indices in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.dots.iter().map(|d| usize::from(d.index))
    }

    /// Number of active cells.
    pub fn len(&self) -> usize {
        self.dots.len()
    }

    /// `true` when no cell is active.
    pub fn is_empty(&self) -> bool {
        self.dots.is_empty()
    }

    /// Whether cell `index` is active.
    pub fn contains(&self, index: usize) -> bool {
        self.lookup(index).is_some()
    }

    /// Level of cell `index`, 0 when inactive.
    pub fn level(&self, index: usize) -> f32 {
        self.lookup(index).map_or(0.0, |d| d.level)
    }

    /// Number of cells active in exactly one of `self` and `other`.
    pub fn changed_cells(&self, other: &Frame) -> usize {
        let (mut a, mut b) = (self.indices().peekable(), other.indices().peekable());
        let mut changed = 0;
        loop {
            match (a.peek(), b.peek()) {
                (Some(x), Some(y)) if x == y => {
                    a.next();
                    b.next();
                }
                (Some(x), Some(y)) if x < y => {
                    changed += 1;
                    a.next();
                }
                (Some(_), Some(_)) => {
                    changed += 1;
                    b.next();
                }
                (Some(_), None) => {
                    changed += 1;
                    a.next();
                }
                (None, Some(_)) => {
                    changed += 1;
                    b.next();
                }
                (None, None) => return changed,
            }
        }
    }

    /// Dense per-cell view: `true` where active.
    pub fn to_mask(&self, shape: GridShape) -> Vec<bool> {
        let mut mask = vec![false; shape.cell_count()];
        for i in self.indices() {
            if let Some(slot) = mask.get_mut(i) {
                *slot = true;
            }
        }
        mask
    }

    pub(crate) fn hash_into(&self, h: &mut Fnv1a64) {
        h.write_u64(self.dots.len() as u64);
        for d in &self.dots {
            h.write_u16(d.index);
            h.write_u8(quantize_level(d.level));
        }
    }

    fn lookup(&self, index: usize) -> Option<&Dot> {
        let index = u16::try_from(index).ok()?;
        self.dots
            .binary_search_by_key(&index, |d| d.index)
            .ok()
            .map(|i| &self.dots[i])
    }
}

/// Dense accumulator used by the variant functions.
///
/// Lighting the same cell twice keeps the brighter level; out-of-range indices are ignored.
#[derive(Debug)]
pub(crate) struct FrameBuilder {
    levels: Vec<f32>,
}

impl FrameBuilder {
    pub(crate) fn new(shape: GridShape) -> Self {
        Self {
            levels: vec![0.0; shape.cell_count()],
        }
    }

    pub(crate) fn light(&mut self, index: usize, level: f64) {
        let level = level.clamp(0.0, 1.0) as f32;
        if let Some(slot) = self.levels.get_mut(index) {
            if level > *slot {
                *slot = level;
            }
        }
    }

    pub(crate) fn light_all(&mut self, indices: &[usize], level: f64) {
        for &i in indices {
            self.light(i, level);
        }
    }

    pub(crate) fn finish(self) -> Frame {
        let dots = self
            .levels
            .into_iter()
            .enumerate()
            .filter(|(_, level)| *level > 0.0)
            .map(|(i, level)| Dot {
                index: i as u16,
                level,
            })
            .collect();
        Frame { dots }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/frame/model.rs"]
mod tests;
