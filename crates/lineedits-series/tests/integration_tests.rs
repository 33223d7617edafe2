//! Integration tests for lineedits-series
//!
//! These tests drive the full pipeline from raw text (and from a throwaway
//! git repository) through to the plot payload.

use std::fs;
use std::path::Path;

use chrono::TimeDelta;
use git2::{Commit, Repository, Signature, Time};
use lineedits_series::prelude::*;
use lineedits_series::source::GitLogSource;
use lineedits_series::{RecordParser, SeriesError};

const DAY: i64 = 86_400;

const SAMPLE_LOG: &str = "\
COMMITalice@example.com|Alice|1000000000
3\t2\tsrc/lib.rs
-\t-\tassets/logo.png

COMMITbob@example.com|Bob|1000000100
1\t0\tREADME.md
COMMITalice@example.com|Alice|1000086400
10\t5\tsrc/main.rs
COMMITcarol@example.com|Carol|1000000200
-\t-\tassets/banner.png
COMMITalice@example.com|Alice Smith|1005184000
0\t1\tsrc/lib.rs
";

fn run(input: &str, options: PipelineOptions) -> Result<Vec<AuthorSeries>, SeriesError> {
    Pipeline::new(options).run(parse_lines(input.lines()))
}

fn payload(input: &str) -> String {
    let ranked = run(input, PipelineOptions::default()).expect("pipeline should succeed");
    to_payload(&plot_data(&ranked, LabelStyle::Email)).expect("serialize")
}

#[test]
fn test_sample_log_end_to_end() {
    let ranked = run(SAMPLE_LOG, PipelineOptions::default()).expect("Should run");

    // Carol only touched a binary file and never appears.
    let emails: Vec<&str> = ranked.iter().map(|s| s.author_email.as_str()).collect();
    assert_eq!(emails, vec!["alice@example.com", "bob@example.com"]);

    let alice = &ranked[0];
    assert_eq!(alice.author_name, "Alice Smith");
    let values: Vec<f64> = alice.points.iter().map(|p| p.value).collect();
    // Day 0: 5. Day 1: 5 + 15. Day 60: only itself.
    assert_eq!(values, vec![5.0, 20.0, 1.0]);
    assert_eq!(alice.score, 26.0);
    assert_eq!(alice.points[0].epoch_millis, 1_000_000_000_000);

    assert_eq!(ranked[1].points.len(), 1);
    assert_eq!(ranked[1].score, 1.0);
}

#[test]
fn test_point_count_matches_non_empty_commits() {
    let ranked = run(SAMPLE_LOG, PipelineOptions::default()).expect("Should run");
    let total_points: usize = ranked.iter().map(|s| s.points.len()).sum();
    let non_empty = parse_lines(SAMPLE_LOG.lines()).count();
    assert_eq!(total_points, non_empty);
    assert_eq!(total_points, 4);
}

#[test]
fn test_window_example_in_seconds() {
    let input = "\
COMMITa@x|A|0
1\t0\tf
COMMITa@x|A|5
2\t0\tf
COMMITa@x|A|11
4\t0\tf
COMMITa@x|A|12
8\t0\tf
";
    let options = PipelineOptions::default().with_window(TimeDelta::seconds(10));
    let ranked = run(input, options).expect("Should run");
    let values: Vec<f64> = ranked[0].points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![1.0, 3.0, 6.0, 14.0]);
}

#[test]
fn test_zero_window_is_per_commit() {
    let input = "COMMITa@x|A|0\n7\t0\tf\nCOMMITa@x|A|1\n3\t0\tf\n";
    let options = PipelineOptions::default().with_window(TimeDelta::zero());
    let ranked = run(input, options).expect("Should run");
    let values: Vec<f64> = ranked[0].points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![7.0, 3.0]);
}

#[test]
fn test_exactly_thirty_days_old_is_kept() {
    let input = format!(
        "COMMITa@x|A|0\n7\t0\tf\nCOMMITa@x|A|{}\n3\t0\tf\nCOMMITa@x|A|{}\n1\t0\tf\n",
        30 * DAY,
        30 * DAY + 1
    );
    let ranked = run(&input, PipelineOptions::default()).expect("Should run");
    let values: Vec<f64> = ranked[0].points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![7.0, 10.0, 4.0]);
}

#[test]
fn test_payload_is_idempotent() {
    assert_eq!(payload(SAMPLE_LOG), payload(SAMPLE_LOG));
}

#[test]
fn test_payload_content() {
    let json: serde_json::Value = serde_json::from_str(&payload(SAMPLE_LOG)).expect("valid json");
    let entries = json.as_array().expect("array");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["label"], "alice@example.com");
    assert_eq!(entries[0]["color"], 0);
    assert_eq!(entries[0]["lines"]["fill"], true);
    assert_eq!(entries[0]["data"][1][1], 20.0);
    assert_eq!(entries[1]["color"], 1);
}

#[test]
fn test_malformed_input_aborts_run() {
    let input = "COMMITa@x|A|0\n7\t0\tf\nCOMMITb@x|B|0\nseven\t0\tf\n";
    let err = run(input, PipelineOptions::default()).expect_err("Should fail");
    match err {
        SeriesError::MalformedChange { line_number, .. } => assert_eq!(line_number, 4),
        other => panic!("Expected MalformedChange, got {other:?}"),
    }
}

#[test]
fn test_window_total_beyond_u64_saturates() {
    let input = "\
COMMITa@x|A|0
9223372036854775808\t0\tf
COMMITa@x|A|1
9223372036854775808\t0\tf
";
    let ranked = run(input, PipelineOptions::default()).expect("Should run");
    let values: Vec<f64> = ranked[0].points.iter().map(|p| p.value).collect();
    assert_eq!(values, vec![9_223_372_036_854_775_808.0, u64::MAX as f64]);
}

#[test]
fn test_reader_input() {
    let ranked = Pipeline::new(PipelineOptions::default())
        .run(parse_reader(SAMPLE_LOG.as_bytes()))
        .expect("Should run");
    assert_eq!(ranked.len(), 2);
}

// ============================================================================
// Git source
// ============================================================================

fn commit_file<'r>(
    repo: &'r Repository,
    path: &str,
    contents: &[u8],
    author: (&str, &str, i64),
    parent: Option<&Commit<'r>>,
) -> Commit<'r> {
    let workdir = repo.workdir().expect("non-bare repo");
    fs::write(workdir.join(path), contents).expect("write file");

    let mut index = repo.index().expect("index");
    index.add_path(Path::new(path)).expect("add path");
    index.write().expect("write index");
    let tree = repo
        .find_tree(index.write_tree().expect("write tree"))
        .expect("find tree");

    let (name, email, seconds) = author;
    let sig = Signature::new(name, email, &Time::new(seconds, 0)).expect("signature");
    let parents: Vec<&Commit<'_>> = parent.into_iter().collect();
    let oid = repo
        .commit(Some("HEAD"), &sig, &sig, "test commit", &tree, &parents)
        .expect("commit");
    repo.find_commit(oid).expect("find commit")
}

#[test]
fn test_git_source_matches_numstat() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = Repository::init(dir.path()).expect("init repo");

    let first = commit_file(
        &repo,
        "a.txt",
        b"one\ntwo\nthree\n",
        ("Alice", "alice@example.com", 1_000_000_000),
        None,
    );
    let second = commit_file(
        &repo,
        "a.txt",
        b"one\n2\nthree\nfour\n",
        ("Bob", "bob@example.com", 1_000_000_100),
        Some(&first),
    );
    commit_file(
        &repo,
        "logo.bin",
        &[0u8, 159, 146, 150, 0, 1, 2, 3],
        ("Bob", "bob@example.com", 1_000_000_200),
        Some(&second),
    );

    let source = GitLogSource::open(dir.path()).expect("open source");
    let lines: Vec<String> = source
        .lines()
        .expect("walk")
        .collect::<Result<_, _>>()
        .expect("render lines");

    assert!(lines.contains(&"COMMITalice@example.com|Alice|1000000000".to_string()));
    assert!(lines.contains(&"3\t0\ta.txt".to_string()));
    assert!(lines.contains(&"2\t1\ta.txt".to_string()));
    assert!(lines.contains(&"-\t-\tlogo.bin".to_string()));

    let records: Vec<CommitRecord> = RecordParser::new(source.lines().expect("walk"))
        .collect::<Result<_, _>>()
        .expect("parse");
    // The binary-only commit is dropped.
    assert_eq!(records.len(), 2);

    let ranked = Pipeline::new(PipelineOptions::default())
        .run(RecordParser::new(source.lines().expect("walk")))
        .expect("Should run");
    assert_eq!(ranked[0].author_email, "alice@example.com");
    assert_eq!(ranked[0].score, 3.0);
    assert_eq!(ranked[1].score, 3.0);
}

#[test]
fn test_git_source_not_a_repository() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = GitLogSource::open(dir.path().join("missing"));
    assert!(matches!(result, Err(SeriesError::Git(_))));
}

#[test]
fn test_git_source_discovers_from_subdirectory() {
    let dir = tempfile::tempdir().expect("tempdir");
    let repo = Repository::init(dir.path()).expect("init repo");
    commit_file(
        &repo,
        "a.txt",
        b"one\n",
        ("Alice", "alice@example.com", 1_000_000_000),
        None,
    );
    let nested = dir.path().join("src").join("deep");
    fs::create_dir_all(&nested).expect("create subdirectory");

    assert!(GitLogSource::open(&nested).is_err());
    let source = GitLogSource::discover(&nested).expect("discover source");
    let ranked = Pipeline::new(PipelineOptions::default())
        .run(RecordParser::new(source.lines().expect("walk")))
        .expect("Should run");
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].score, 1.0);
}

#[test]
fn test_git_source_empty_repository() {
    let dir = tempfile::tempdir().expect("tempdir");
    Repository::init(dir.path()).expect("init repo");
    let source = GitLogSource::open(dir.path()).expect("open source");
    assert!(source.lines().is_err());
}
