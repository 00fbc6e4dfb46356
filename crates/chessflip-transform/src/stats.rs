//! Per-symmetry tallies of written and skipped games.

use std::fmt;

use crate::symmetry::Symmetry;

/// Counts of games written and pairs skipped, per symmetry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformStats {
    written: [u64; 4],
    skipped: [u64; 4],
}

impl TransformStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a game written for `symmetry`.
    pub fn record_written(&mut self, symmetry: Symmetry) {
        self.written[Self::slot(symmetry)] += 1;
    }

    /// Record a pair skipped as infeasible for `symmetry`.
    pub fn record_skipped(&mut self, symmetry: Symmetry) {
        self.skipped[Self::slot(symmetry)] += 1;
    }

    pub fn written(&self, symmetry: Symmetry) -> u64 {
        self.written[Self::slot(symmetry)]
    }

    pub fn skipped(&self, symmetry: Symmetry) -> u64 {
        self.skipped[Self::slot(symmetry)]
    }

    pub fn total_written(&self) -> u64 {
        self.written.iter().sum()
    }

    pub fn total_skipped(&self) -> u64 {
        self.skipped.iter().sum()
    }

    /// Add another tally into this one.
    pub fn merge(&mut self, other: &TransformStats) {
        for i in 0..4 {
            self.written[i] += other.written[i];
            self.skipped[i] += other.skipped[i];
        }
    }

    fn slot(symmetry: Symmetry) -> usize {
        match symmetry {
            Symmetry::Mirror => 0,
            Symmetry::HorizontalFlip => 1,
            Symmetry::VerticalFlip => 2,
            Symmetry::Rotate => 3,
        }
    }
}

impl fmt::Display for TransformStats {
    /// Lists only symmetries with any activity, e.g. `mirror 3/0 hflip 1/2`
    /// as written/skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for symmetry in Symmetry::ALL {
            let (written, skipped) = (self.written(symmetry), self.skipped(symmetry));
            if written == 0 && skipped == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{symmetry} {written}/{skipped}")?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}
