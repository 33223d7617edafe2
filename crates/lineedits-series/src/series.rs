// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Per-author time series and ranking

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::Aggregator;
use crate::commit::CommitRecord;
use crate::group::AuthorGroup;
use crate::window::SlidingWindow;

/// One plotted point: javascript epoch millis and the window aggregate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Commit time in milliseconds since the unix epoch
    pub epoch_millis: i64,
    /// Aggregate of the trailing window ending at this commit
    pub value: f64,
}

/// One author's full series with its ranking score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSeries {
    /// Author email
    pub author_email: String,
    /// Display name from the author's most recent commit
    pub author_name: String,
    /// Points in commit order
    pub points: Vec<TimeSeriesPoint>,
    /// Sum of all point values
    pub score: f64,
}

/// Lazily turn an ascending commit sequence into plot points
///
/// Yields exactly one point per input commit.
pub struct WindowedPoints<'a, I, A: ?Sized> {
    commits: I,
    window: SlidingWindow,
    aggregator: &'a A,
}

impl<'a, I, A> WindowedPoints<'a, I, A>
where
    I: Iterator<Item = CommitRecord>,
    A: Aggregator + ?Sized,
{
    /// Create a point iterator over one author's commits
    pub fn new<C>(commits: C, window_size: TimeDelta, aggregator: &'a A) -> Self
    where
        C: IntoIterator<IntoIter = I>,
    {
        Self {
            commits: commits.into_iter(),
            window: SlidingWindow::new(window_size),
            aggregator,
        }
    }
}

impl<I, A> Iterator for WindowedPoints<'_, I, A>
where
    I: Iterator<Item = CommitRecord>,
    A: Aggregator + ?Sized,
{
    type Item = TimeSeriesPoint;

    fn next(&mut self) -> Option<Self::Item> {
        let commit = self.commits.next()?;
        let window = self.window.push(commit);
        Some(TimeSeriesPoint {
            epoch_millis: window.end().timestamp_millis(),
            value: self.aggregator.aggregate(&window),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.commits.size_hint()
    }
}

impl AuthorSeries {
    /// Build the series for one author group
    #[must_use]
    pub fn from_group<A>(group: AuthorGroup, window_size: TimeDelta, aggregator: &A) -> Self
    where
        A: Aggregator + ?Sized,
    {
        let author_name = group.display_name().to_string();
        let points: Vec<TimeSeriesPoint> =
            WindowedPoints::new(group.commits, window_size, aggregator).collect();
        let score = points.iter().map(|p| p.value).sum();

        Self {
            author_email: group.author_email,
            author_name,
            points,
            score,
        }
    }
}

/// Collects author series and orders them by score, highest first
///
/// Equal scores keep the order in which series were pushed.
#[derive(Debug, Default)]
pub struct SeriesRanker {
    series: Vec<AuthorSeries>,
}

impl SeriesRanker {
    /// Create an empty ranker
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one author's finished series
    pub fn push(&mut self, series: AuthorSeries) {
        self.series.push(series);
    }

    /// Number of series collected so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Whether no series have been collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Sort by descending score and return the ranked series
    #[must_use]
    pub fn finish(mut self) -> Vec<AuthorSeries> {
        self.series.sort_by(|a, b| b.score.total_cmp(&a.score));
        for (rank, series) in self.series.iter().enumerate() {
            debug!(
                rank,
                author = %series.author_email,
                score = series.score,
                points = series.points.len(),
                "Ranked author"
            );
        }
        self.series
    }
}

impl Extend<AuthorSeries> for SeriesRanker {
    fn extend<T: IntoIterator<Item = AuthorSeries>>(&mut self, iter: T) {
        self.series.extend(iter);
    }
}
