// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for lineedits-series

use std::convert::Infallible;

use thiserror::Error;

/// Errors that can occur while building activity series
///
/// Every variant aborts the run. Malformed input is never skipped because a
/// dropped record would silently skew every later aggregate for its author.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Error reading the line stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from git2 library
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    /// Header line without exactly three `|`-separated fields
    #[error("Malformed commit header on line {line_number}: '{line}'")]
    MalformedHeader {
        /// 1-based line number in the input stream
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// Change line that is neither a binary marker nor `adds<TAB>deletes<TAB>path`
    #[error("Could not parse change line {line_number}: '{line}'")]
    MalformedChange {
        /// 1-based line number in the input stream
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// Change line seen before any commit header
    #[error("Change line {line_number} appears before any commit header: '{line}'")]
    OrphanChange {
        /// 1-based line number in the input stream
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// Header timestamp that is not a representable unix time
    #[error("Invalid unix timestamp on line {line_number}: '{value}'")]
    InvalidTimestamp {
        /// 1-based line number in the input stream
        line_number: usize,
        /// The raw timestamp field
        value: String,
    },

    /// Accumulated line counts exceed `u64`
    #[error("Line count overflow in commit ending at line {line_number}")]
    LineCountOverflow {
        /// 1-based line number of the change line that overflowed
        line_number: usize,
    },
}

impl From<Infallible> for SeriesError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
