//! Commit record types

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// The fixed-offset zone used to interpret header timestamps
pub const RECORD_ZONE: Utc = Utc;

/// One parsed commit with its line statistics
///
/// Only commits that touched at least one line are ever produced by the
/// parser; see [`CommitRecord::lines_touched`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Author email (grouping key)
    pub author_email: String,
    /// Author name (display only)
    pub author_name: String,
    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
    /// Total lines added across all text files
    pub lines_added: u64,
    /// Total lines deleted across all text files
    pub lines_deleted: u64,
}

impl CommitRecord {
    /// Create an empty record for a commit header
    #[must_use]
    pub fn new(author_email: &str, author_name: &str, timestamp: DateTime<Utc>) -> Self {
        Self {
            author_email: author_email.to_string(),
            author_name: author_name.to_string(),
            timestamp,
            lines_added: 0,
            lines_deleted: 0,
        }
    }

    /// Convert a unix timestamp in seconds to a UTC instant
    ///
    /// Returns `None` when the value is outside chrono's representable range.
    #[must_use]
    pub fn instant(unix_seconds: i64) -> Option<DateTime<Utc>> {
        RECORD_ZONE.timestamp_opt(unix_seconds, 0).single()
    }

    /// Lines added plus lines deleted
    #[must_use]
    pub fn lines_touched(&self) -> u64 {
        self.lines_added.saturating_add(self.lines_deleted)
    }

    /// Timestamp as javascript epoch milliseconds
    #[must_use]
    pub fn epoch_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
