// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Record stream straight from a git repository
//!
//! Produces the same text the parser expects from
//! `git log --numstat --format='COMMIT%ae|%an|%at'`, so repository input goes
//! through exactly the same parsing path as piped input.
//!
//! # Example
//!
//! ```no_run
//! use lineedits_series::parser::RecordParser;
//! use lineedits_series::source::GitLogSource;
//!
//! let source = GitLogSource::open(".").expect("open repo");
//! let lines = source.lines().expect("walk history");
//! for record in RecordParser::new(lines) {
//!     let record = record.expect("valid record");
//!     println!("{} {}", record.author_email, record.lines_touched());
//! }
//! ```

use std::collections::VecDeque;
use std::path::Path;

use git2::{Oid, Patch, Repository, Revwalk, Sort};
use tracing::debug;

use crate::error::SeriesError;
use crate::parser::HEADER_MARKER;

/// A git repository used as a record source
pub struct GitLogSource {
    repo: Repository,
}

impl GitLogSource {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::Git` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, SeriesError> {
        let repo = Repository::open(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Discover the repository containing the given path
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::Git` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, SeriesError> {
        let repo = Repository::discover(path.as_ref())?;
        Ok(Self { repo })
    }

    /// Lazily render HEAD's history as header and change lines
    ///
    /// # Errors
    ///
    /// Returns `SeriesError::Git` if HEAD cannot be resolved (for example in
    /// a repository without commits).
    pub fn lines(&self) -> Result<GitLines<'_>, SeriesError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;
        revwalk.push_head()?;
        Ok(GitLines {
            repo: &self.repo,
            revwalk,
            pending: VecDeque::new(),
        })
    }
}

/// Iterator over the rendered lines of a repository's history
pub struct GitLines<'repo> {
    repo: &'repo Repository,
    revwalk: Revwalk<'repo>,
    pending: VecDeque<String>,
}

impl Iterator for GitLines<'_> {
    type Item = Result<String, SeriesError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(line) = self.pending.pop_front() {
                return Some(Ok(line));
            }
            let oid = match self.revwalk.next()? {
                Ok(oid) => oid,
                Err(err) => return Some(Err(err.into())),
            };
            match commit_lines(self.repo, oid) {
                Ok(lines) => self.pending.extend(lines),
                Err(err) => return Some(Err(err)),
            }
        }
    }
}

/// Render one commit as a header line followed by its numstat lines
fn commit_lines(repo: &Repository, oid: Oid) -> Result<Vec<String>, SeriesError> {
    let commit = repo.find_commit(oid)?;
    let author = commit.author();
    let mut lines = vec![format!(
        "{HEADER_MARKER}{}|{}|{}",
        author.email().unwrap_or(""),
        author.name().unwrap_or("Unknown"),
        author.when().seconds()
    )];

    // Like `git log --numstat`, merges list no files.
    if commit.parent_count() > 1 {
        debug!(sha = %oid, "Skipping merge commit diff");
        return Ok(lines);
    }

    let tree = commit.tree()?;
    let parent_tree = if commit.parent_count() > 0 {
        Some(commit.parent(0)?.tree()?)
    } else {
        None
    };
    let diff = repo.diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

    for (idx, delta) in diff.deltas().enumerate() {
        let path = delta
            .new_file()
            .path()
            .or_else(|| delta.old_file().path())
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string());

        match Patch::from_diff(&diff, idx)? {
            Some(patch) if !patch.delta().flags().is_binary() => {
                let (_context, added, deleted) = patch.line_stats()?;
                lines.push(format!("{added}\t{deleted}\t{path}"));
            }
            _ => lines.push(format!("-\t-\t{path}")),
        }
    }

    Ok(lines)
}
