use crate::engine::store::FrameSequence;

/// Frame-to-frame change statistics for one loop, counted in toggled cells.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ChangeProfile {
    /// Toggled cells for each step `i -> i + 1`, ending with the loop seam `last -> first`.
    pub steps: Vec<usize>,
    /// Sum of [`Self::steps`].
    pub total_changes: usize,
    /// Largest change among interior steps (seam excluded).
    pub max_interior_change: usize,
    /// Change across the loop seam.
    pub seam_change: usize,
    /// Longest run of consecutive steps that change nothing.
    pub longest_static_streak: usize,
}

impl ChangeProfile {
    /// Measure `seq`.
    pub fn of(seq: &FrameSequence) -> Self {
        let frames = seq.frames();
        let n = frames.len();
        let steps: Vec<usize> = (0..n)
            .map(|i| frames[i].changed_cells(&frames[(i + 1) % n]))
            .collect();

        let (interior, seam) = steps.split_at(n.saturating_sub(1));
        let mut longest = 0;
        let mut run = 0;
        for &s in &steps {
            run = if s == 0 { run + 1 } else { 0 };
            longest = longest.max(run);
        }

        Self {
            total_changes: steps.iter().sum(),
            max_interior_change: interior.iter().copied().max().unwrap_or(0),
            seam_change: seam.first().copied().unwrap_or(0),
            longest_static_streak: longest,
            steps,
        }
    }

    /// Mean change per step.
    pub fn average_change(&self) -> f64 {
        if self.steps.is_empty() {
            return 0.0;
        }
        self.total_changes as f64 / self.steps.len() as f64
    }

    /// `true` when the seam changes no more than the busiest interior step.
    pub fn is_seamless(&self) -> bool {
        self.seam_change <= self.max_interior_change
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/inspect.rs"]
mod tests;
