//! Chronological sorting and per-author grouping
//!
//! Grouping only merges *contiguous* runs of the same author, so it must be
//! fed the output of [`sort_by_author_date`]. Unsorted input silently yields
//! several disjoint groups for one author.

use std::iter::Peekable;

use crate::commit::CommitRecord;

/// Sort commits by `(author_email, timestamp)` ascending
///
/// The sort is stable: records with equal keys keep their input order.
#[must_use]
pub fn sort_by_author_date<I>(records: I) -> Vec<CommitRecord>
where
    I: IntoIterator<Item = CommitRecord>,
{
    let mut sorted: Vec<CommitRecord> = records.into_iter().collect();
    sorted.sort_by(|a, b| {
        a.author_email
            .cmp(&b.author_email)
            .then_with(|| a.timestamp.cmp(&b.timestamp))
    });
    sorted
}

/// One author's contiguous run of commits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorGroup {
    /// Shared author email
    pub author_email: String,
    /// Commits in ascending timestamp order
    pub commits: Vec<CommitRecord>,
}

impl AuthorGroup {
    /// Name from the most recent commit, falling back to the email
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.commits
            .last()
            .map(|c| c.author_name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.author_email)
    }
}

/// Lazy iterator over contiguous equal-email runs
pub struct AuthorGroups<I: Iterator<Item = CommitRecord>> {
    records: Peekable<I>,
}

impl<I: Iterator<Item = CommitRecord>> Iterator for AuthorGroups<I> {
    type Item = AuthorGroup;

    fn next(&mut self) -> Option<Self::Item> {
        let first = self.records.next()?;
        let author_email = first.author_email.clone();
        let mut commits = vec![first];
        while let Some(commit) = self
            .records
            .next_if(|c| c.author_email == author_email)
        {
            commits.push(commit);
        }
        Some(AuthorGroup {
            author_email,
            commits,
        })
    }
}

/// Group a sorted sequence into per-author runs
pub fn group_by_author<I>(sorted: I) -> AuthorGroups<I::IntoIter>
where
    I: IntoIterator<Item = CommitRecord>,
{
    AuthorGroups {
        records: sorted.into_iter().peekable(),
    }
}
