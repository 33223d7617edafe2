//! Window reductions
//!
//! An [`Aggregator`] maps one trailing window to the y-value of a plot point.
//! Any `Fn(&Window<'_>) -> f64` is an aggregator, so callers can pass a plain
//! function instead of one of the built-in metrics.

use crate::commit::CommitRecord;
use crate::window::Window;

/// A pure reduction from a window to a scalar
pub trait Aggregator {
    /// Reduce the window to a single value
    fn aggregate(&self, window: &Window<'_>) -> f64;
}

impl<F> Aggregator for F
where
    F: Fn(&Window<'_>) -> f64,
{
    fn aggregate(&self, window: &Window<'_>) -> f64 {
        self(window)
    }
}

/// Built-in window metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Metric {
    /// Lines added plus lines deleted
    #[default]
    Touched,
    /// Lines added only
    Added,
    /// Lines deleted only
    Deleted,
    /// Number of commits in the window
    Commits,
}

impl Aggregator for Metric {
    fn aggregate(&self, window: &Window<'_>) -> f64 {
        // Per-commit counts are bounded by the parser but a window of them is not
        let sum = |count: fn(&CommitRecord) -> u64| {
            window
                .iter()
                .map(count)
                .fold(0u64, u64::saturating_add)
        };
        let total = match self {
            Metric::Touched => sum(CommitRecord::lines_touched),
            Metric::Added => sum(|c| c.lines_added),
            Metric::Deleted => sum(|c| c.lines_deleted),
            Metric::Commits => window.len() as u64,
        };
        total as f64
    }
}
