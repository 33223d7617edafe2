// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! End-to-end series pipeline
//!
//! Parsed records are sorted (the one point where the whole input is held in
//! memory), grouped by author, windowed, aggregated and ranked.
//!
//! # Example
//!
//! ```
//! use lineedits_series::parser::parse_lines;
//! use lineedits_series::pipeline::{Pipeline, PipelineOptions};
//!
//! let input = ["COMMITa@x|Alice|1000000000", "3\t2\tfile.c"];
//! let ranked = Pipeline::new(PipelineOptions::default())
//!     .run(parse_lines(input))
//!     .expect("valid input");
//! assert_eq!(ranked[0].points[0].value, 5.0);
//! ```

use chrono::TimeDelta;
use tracing::info;

use crate::aggregate::{Aggregator, Metric};
use crate::commit::CommitRecord;
use crate::error::SeriesError;
use crate::group::{group_by_author, sort_by_author_date};
use crate::series::{AuthorSeries, SeriesRanker};

/// Default trailing window length in days
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Caller-supplied pipeline settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Trailing window duration
    pub window_size: TimeDelta,
}

impl PipelineOptions {
    /// Options with a window of `days` days
    ///
    /// Returns `None` if the duration cannot be represented.
    #[must_use]
    pub fn days(days: i64) -> Option<Self> {
        TimeDelta::try_days(days).map(|window_size| Self { window_size })
    }

    /// Set the window duration
    #[must_use]
    pub fn with_window(mut self, window_size: TimeDelta) -> Self {
        self.window_size = window_size;
        self
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            window_size: TimeDelta::days(DEFAULT_WINDOW_DAYS),
        }
    }
}

/// Runs records through every stage with one aggregator
#[derive(Debug, Clone)]
pub struct Pipeline<A = Metric> {
    options: PipelineOptions,
    aggregator: A,
}

impl Pipeline<Metric> {
    /// Pipeline summing lines touched per window
    #[must_use]
    pub fn new(options: PipelineOptions) -> Self {
        Self::with_aggregator(options, Metric::Touched)
    }
}

impl<A: Aggregator> Pipeline<A> {
    /// Pipeline with a custom reduction
    #[must_use]
    pub fn with_aggregator(options: PipelineOptions, aggregator: A) -> Self {
        Self {
            options,
            aggregator,
        }
    }

    /// The configured options
    #[must_use]
    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Parse-to-ranking run over a fallible record stream
    ///
    /// # Errors
    ///
    /// Returns the first `SeriesError` produced by the record stream; no
    /// partial result is returned.
    pub fn run<I>(&self, records: I) -> Result<Vec<AuthorSeries>, SeriesError>
    where
        I: IntoIterator<Item = Result<CommitRecord, SeriesError>>,
    {
        let records: Vec<CommitRecord> = records.into_iter().collect::<Result<_, _>>()?;
        Ok(self.rank(records))
    }

    /// Sort, group, window, aggregate and rank already-parsed records
    #[must_use]
    pub fn rank(&self, records: Vec<CommitRecord>) -> Vec<AuthorSeries> {
        let commit_count = records.len();
        let sorted = sort_by_author_date(records);

        let mut ranker = SeriesRanker::new();
        ranker.extend(group_by_author(sorted).map(|group| {
            AuthorSeries::from_group(group, self.options.window_size, &self.aggregator)
        }));

        info!(
            commits = commit_count,
            authors = ranker.len(),
            window_days = self.options.window_size.num_days(),
            "Built activity series"
        );
        ranker.finish()
    }
}
