// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Commit record stream parsing
//!
//! The input is the textual stream produced by `git log --numstat` with a
//! custom header format:
//!
//! ```text
//! COMMITalice@example.com|Alice|1000000000
//! 3	2	src/lib.rs
//! -	-	logo.png
//! ```
//!
//! A header opens a commit; every following change line adds to it until the
//! next header or end of input. Commits that touched no text lines are dropped.
//!
//! # Example
//!
//! ```
//! use lineedits_series::parser::parse_lines;
//!
//! let input = ["COMMITa@x|Alice|1000000000", "3\t2\tfile.c"];
//! let commits: Vec<_> = parse_lines(input)
//!     .collect::<Result<_, _>>()
//!     .expect("valid input");
//! assert_eq!(commits[0].lines_touched(), 5);
//! ```

use std::convert::Infallible;
use std::io::BufRead;

use tracing::{debug, error};

use crate::commit::CommitRecord;
use crate::error::SeriesError;

/// Prefix that marks a commit header line
pub const HEADER_MARKER: &str = "COMMIT";

/// A classified change line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeLine<'a> {
    /// A text file with line counts
    Text {
        /// Lines added
        added: u64,
        /// Lines deleted
        deleted: u64,
        /// File path
        path: &'a str,
    },
    /// A binary file (`-` for both counts)
    Binary {
        /// File path
        path: &'a str,
    },
}

/// Parse a single `adds<TAB>deletes<TAB>path` change line
///
/// Returns `None` if the line is neither a binary marker pair nor two
/// non-negative integers followed by a path.
#[must_use]
pub fn parse_change_line(line: &str) -> Option<ChangeLine<'_>> {
    let mut parts = line.splitn(3, '\t');
    let (added, deleted, path) = (parts.next()?, parts.next()?, parts.next()?);
    match (added, deleted) {
        ("-", "-") => Some(ChangeLine::Binary { path }),
        _ => Some(ChangeLine::Text {
            added: added.parse().ok()?,
            deleted: deleted.parse().ok()?,
            path,
        }),
    }
}

/// Lazily parse lines into commit records
///
/// The iterator is fused on error: after yielding an `Err` it only yields
/// `None`, so a malformed line can never be followed by partial results.
pub struct RecordParser<I> {
    lines: I,
    line_number: usize,
    current: Option<CommitRecord>,
    finished: bool,
}

impl<I> RecordParser<I> {
    /// Wrap a fallible line iterator
    #[must_use]
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            line_number: 0,
            current: None,
            finished: false,
        }
    }

    /// Number of lines consumed so far
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn process_line(&mut self, raw: &str) -> Result<Option<CommitRecord>, SeriesError> {
        let line = raw.trim();

        if let Some(header) = line.strip_prefix(HEADER_MARKER) {
            let next = self.parse_header(header, line)?;
            let finished = self.current.replace(next);
            return Ok(finished.filter(|c| c.lines_touched() > 0));
        }

        if line.is_empty() {
            return Ok(None);
        }

        let line_number = self.line_number;
        let Some(commit) = self.current.as_mut() else {
            return Err(SeriesError::OrphanChange {
                line_number,
                line: line.to_string(),
            });
        };

        match parse_change_line(line) {
            Some(ChangeLine::Binary { path }) => {
                debug!(path, line_number, "Binary file");
            }
            Some(ChangeLine::Text { added, deleted, .. }) => {
                commit.lines_added = commit
                    .lines_added
                    .checked_add(added)
                    .ok_or(SeriesError::LineCountOverflow { line_number })?;
                commit.lines_deleted = commit
                    .lines_deleted
                    .checked_add(deleted)
                    .ok_or(SeriesError::LineCountOverflow { line_number })?;
            }
            None => {
                return Err(SeriesError::MalformedChange {
                    line_number,
                    line: line.to_string(),
                });
            }
        }

        Ok(None)
    }

    fn parse_header(&self, header: &str, line: &str) -> Result<CommitRecord, SeriesError> {
        let fields: Vec<&str> = header.split('|').collect();
        let [email, name, timestamp] = fields.as_slice() else {
            return Err(SeriesError::MalformedHeader {
                line_number: self.line_number,
                line: line.to_string(),
            });
        };

        let instant = timestamp
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(CommitRecord::instant)
            .ok_or_else(|| SeriesError::InvalidTimestamp {
                line_number: self.line_number,
                value: (*timestamp).to_string(),
            })?;

        Ok(CommitRecord::new(email, name, instant))
    }
}

impl<I, S, E> Iterator for RecordParser<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
    SeriesError: From<E>,
{
    type Item = Result<CommitRecord, SeriesError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(item) = self.lines.next() else {
                self.finished = true;
                return self
                    .current
                    .take()
                    .filter(|c| c.lines_touched() > 0)
                    .map(Ok);
            };
            self.line_number += 1;

            let result = item
                .map_err(SeriesError::from)
                .and_then(|line| self.process_line(line.as_ref()));

            match result {
                Ok(Some(commit)) => return Some(Ok(commit)),
                Ok(None) => {}
                Err(err) => {
                    error!(line_number = self.line_number, error = %err, "Could not parse input");
                    self.finished = true;
                    self.current = None;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<I, S, E> std::iter::FusedIterator for RecordParser<I>
where
    I: Iterator<Item = Result<S, E>>,
    S: AsRef<str>,
    SeriesError: From<E>,
{
}

/// Parse an infallible sequence of lines
pub fn parse_lines<I, S>(lines: I) -> RecordParser<impl Iterator<Item = Result<S, Infallible>>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    RecordParser::new(lines.into_iter().map(Ok))
}

/// Parse lines read from a buffered reader
///
/// Read failures (including invalid UTF-8) surface as `SeriesError::Io`.
pub fn parse_reader<R: BufRead>(reader: R) -> RecordParser<std::io::Lines<R>> {
    RecordParser::new(reader.lines())
}
