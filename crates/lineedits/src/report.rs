// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report generation
//!
//! Reads commit records from the configured source, runs them through the
//! series pipeline, and renders the plot payload.
//!
//! # Example
//!
//! ```no_run
//! use lineedits::config::Config;
//! use lineedits::report;
//!
//! let config = Config {
//!     files: vec!["history.log".into()],
//!     ..Default::default()
//! };
//! let ranked = report::load_series(&config).expect("load series");
//! let page = report::render(&config, &ranked).expect("render");
//! println!("{page}");
//! ```

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use lineedits_series::prelude::*;
use lineedits_series::{GitLogSource, RecordParser};
use tracing::{debug, info};

use crate::config::{Config, is_stdin};
use crate::render::render_template;

/// Open every configured input in order as one line stream
///
/// No files means standard input, as does a file named `-`.
fn input_lines(config: &Config) -> Result<impl Iterator<Item = io::Result<String>>> {
    let readers = open_inputs(&config.files, || -> Box<dyn BufRead> {
        Box::new(io::stdin().lock())
    })?;
    Ok(readers.into_iter().flat_map(BufRead::lines))
}

/// Open inputs in order, handing standard input to the first `-` only
///
/// Standard input is at EOF once the first reader has drained it, so later
/// `-` entries get an empty reader. Locking it again would block forever.
fn open_inputs<'a>(
    files: &[PathBuf],
    stdin: impl FnOnce() -> Box<dyn BufRead + 'a>,
) -> Result<Vec<Box<dyn BufRead + 'a>>> {
    let stdin_only = [PathBuf::from("-")];
    let files = if files.is_empty() { &stdin_only[..] } else { files };

    let mut stdin = Some(stdin);
    let mut readers: Vec<Box<dyn BufRead + 'a>> = Vec::with_capacity(files.len());
    for path in files {
        if is_stdin(path) {
            match stdin.take() {
                Some(open) => readers.push(open()),
                None => {
                    debug!("Standard input named again; reading it as empty");
                    readers.push(Box::new(io::empty()));
                }
            }
        } else {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            readers.push(Box::new(BufReader::new(file)));
        }
    }
    Ok(readers)
}

/// Build ranked series from the configured source
///
/// # Errors
///
/// Returns an error if an input cannot be read, the repository cannot be
/// walked, or any record is malformed.
pub fn load_series(config: &Config) -> Result<Vec<AuthorSeries>> {
    let options = config.pipeline_options()?;
    let pipeline = Pipeline::with_aggregator(options, Metric::from(config.metric));

    let mut ranked = if let Some(ref repo) = config.repo {
        info!(path = %repo.display(), "Reading history from repository");
        let source = GitLogSource::discover(repo)
            .with_context(|| format!("Failed to open repository {}", repo.display()))?;
        pipeline.run(RecordParser::new(source.lines()?))?
    } else {
        debug!(files = config.files.len(), "Reading history from input files");
        pipeline.run(RecordParser::new(input_lines(config)?))?
    };

    if let Some(top) = config.top {
        ranked.truncate(top);
    }
    Ok(ranked)
}

/// Render ranked series as a payload or a filled-in template
///
/// # Errors
///
/// Returns an error if the template cannot be read or rendered.
pub fn render(config: &Config, ranked: &[AuthorSeries]) -> Result<String> {
    let payload = to_payload(&plot_data(ranked, config.label.into()))?;

    match config.template {
        Some(ref path) => {
            let template = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template {}", path.display()))?;
            render_template(&template, &payload)
                .with_context(|| format!("Failed to render template {}", path.display()))
        }
        None => Ok(payload + "\n"),
    }
}

/// Run the whole command: load, render, write
///
/// # Errors
///
/// Returns the first error from loading, rendering, or writing.
pub fn run(config: &Config) -> Result<()> {
    let ranked = load_series(config)?;
    let output = render(config, &ranked)?;

    match config.output {
        Some(ref path) => {
            fs::write(path, output)
                .with_context(|| format!("Failed to write output {}", path.display()))?;
            info!(path = %path.display(), authors = ranked.len(), "Wrote report");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
