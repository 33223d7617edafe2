// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Trailing time windows over one author's commits
//!
//! [`SlidingWindow`] keeps a deque of the commits inside
//! `[t - size, t]` for the most recently pushed commit at time `t`. Each
//! commit is appended once and popped from the front at most once, so a
//! whole author costs O(n) regardless of window size.
//!
//! # Example
//!
//! ```
//! use chrono::TimeDelta;
//! use lineedits_series::commit::CommitRecord;
//! use lineedits_series::window::SlidingWindow;
//!
//! let mut window = SlidingWindow::new(TimeDelta::seconds(10));
//! for ts in [0, 5, 11] {
//!     let commit = CommitRecord::new("a@x", "A", CommitRecord::instant(ts).unwrap());
//!     window.push(commit);
//! }
//! assert_eq!(window.current().len(), 2);
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, TimeDelta, Utc};

use crate::commit::CommitRecord;

/// Read-only view of the commits in one trailing window, oldest first
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    end: DateTime<Utc>,
    commits: &'a VecDeque<CommitRecord>,
}

impl<'a> Window<'a> {
    /// Timestamp of the commit that closed this window
    #[must_use]
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Number of commits in the window
    #[must_use]
    pub fn len(&self) -> usize {
        self.commits.len()
    }

    /// Whether the window holds no commits
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commits.is_empty()
    }

    /// Commits in the window, oldest first
    pub fn iter(self) -> impl Iterator<Item = &'a CommitRecord> {
        self.commits.iter()
    }
}

/// A trailing window of fixed duration
#[derive(Debug, Clone)]
pub struct SlidingWindow {
    size: TimeDelta,
    buffer: VecDeque<CommitRecord>,
    end: Option<DateTime<Utc>>,
}

impl SlidingWindow {
    /// Create an empty window; negative sizes behave as zero
    #[must_use]
    pub fn new(size: TimeDelta) -> Self {
        Self {
            size: size.max(TimeDelta::zero()),
            buffer: VecDeque::new(),
            end: None,
        }
    }

    /// The window duration
    #[must_use]
    pub fn size(&self) -> TimeDelta {
        self.size
    }

    /// Add the next commit and evict everything older than `timestamp - size`
    ///
    /// Commits must be pushed in non-decreasing timestamp order. A commit
    /// exactly `size` older than the newest one is kept.
    pub fn push(&mut self, commit: CommitRecord) -> Window<'_> {
        let end = commit.timestamp;
        self.buffer.push_back(commit);

        // A cutoff before the representable range evicts nothing.
        if let Some(cutoff) = end.checked_sub_signed(self.size) {
            while self
                .buffer
                .front()
                .is_some_and(|oldest| oldest.timestamp < cutoff)
            {
                self.buffer.pop_front();
            }
        }

        self.end = Some(end);
        Window {
            end,
            commits: &self.buffer,
        }
    }

    /// The window as of the last push
    ///
    /// Before any push this is empty and ends at the unix epoch.
    #[must_use]
    pub fn current(&self) -> Window<'_> {
        Window {
            end: self.end.unwrap_or(DateTime::UNIX_EPOCH),
            commits: &self.buffer,
        }
    }
}
