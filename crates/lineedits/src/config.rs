//! Configuration for the lineedits command
//!
//! This module provides the command-line configuration: where commits are
//! read from, the window and metric used to build series, and where the
//! rendered payload goes.

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use lineedits_series::pipeline::DEFAULT_WINDOW_DAYS;
use lineedits_series::{LabelStyle, Metric, PipelineOptions};

/// Lineedits - plot recent lines touched per author from git history
///
/// Reads the output of
/// `git log --numstat --format='COMMIT%ae|%an|%at'` from FILES (or stdin)
/// and writes a flot plot payload, optionally substituted into a template.
#[derive(Parser, Debug, Clone)]
#[command(name = "lineedits")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Input files, read in order; none or `-` means standard input
    #[arg(value_name = "FILE", conflicts_with = "repo")]
    pub files: Vec<PathBuf>,

    /// Read history directly from this git repository instead of FILES
    #[arg(short, long)]
    pub repo: Option<PathBuf>,

    /// Trailing window length in days
    #[arg(
        short,
        long,
        env = "LINEEDITS_WINDOW_DAYS",
        default_value_t = DEFAULT_WINDOW_DAYS,
        value_parser = clap::value_parser!(i64).range(0..)
    )]
    pub window_days: i64,

    /// Value plotted for each window
    #[arg(short, long, value_enum, default_value_t = MetricArg::Touched)]
    pub metric: MetricArg,

    /// Author field used as the series label
    #[arg(short, long, value_enum, default_value_t = LabelArg::Email)]
    pub label: LabelArg,

    /// Only keep the N highest-ranked authors
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Page template containing a `%(plotdata)s` placeholder
    ///
    /// Without a template the raw JSON payload is written.
    #[arg(short, long, env = "LINEEDITS_TEMPLATE")]
    pub template: Option<PathBuf>,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout only carries the output.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            repo: None,
            window_days: DEFAULT_WINDOW_DAYS,
            metric: MetricArg::Touched,
            label: LabelArg::Email,
            top: None,
            template: None,
            output: None,
            verbose: false,
            quiet: false,
        }
    }
}

/// Window metric choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MetricArg {
    /// Lines added plus lines deleted
    Touched,
    /// Lines added
    Added,
    /// Lines deleted
    Deleted,
    /// Number of commits
    Commits,
}

impl From<MetricArg> for Metric {
    fn from(arg: MetricArg) -> Self {
        match arg {
            MetricArg::Touched => Metric::Touched,
            MetricArg::Added => Metric::Added,
            MetricArg::Deleted => Metric::Deleted,
            MetricArg::Commits => Metric::Commits,
        }
    }
}

/// Series label choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LabelArg {
    /// Author email
    Email,
    /// Author name from the most recent commit
    Name,
}

impl From<LabelArg> for LabelStyle {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::Email => LabelStyle::Email,
            LabelArg::Name => LabelStyle::Name,
        }
    }
}

impl Config {
    /// Whether input comes from standard input
    #[must_use]
    pub fn reads_stdin(&self) -> bool {
        self.repo.is_none()
            && (self.files.is_empty() || self.files.iter().any(|p| is_stdin(p)))
    }

    /// Pipeline options for the configured window
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::WindowOutOfRange` if the window is negative or
    /// too large to represent.
    pub fn pipeline_options(&self) -> Result<PipelineOptions, ConfigError> {
        if self.window_days < 0 {
            return Err(ConfigError::WindowOutOfRange(self.window_days));
        }
        PipelineOptions::days(self.window_days)
            .ok_or(ConfigError::WindowOutOfRange(self.window_days))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input file, the template, or the repository does not exist
    /// - The window length cannot be represented
    pub fn validate(&self) -> Result<(), ConfigError> {
        for file in &self.files {
            if !is_stdin(file) && !file.is_file() {
                return Err(ConfigError::InputNotFound(file.clone()));
            }
        }

        if let Some(ref template) = self.template {
            if !template.is_file() {
                return Err(ConfigError::TemplateNotFound(template.clone()));
            }
        }

        if let Some(ref repo) = self.repo {
            if !repo.is_dir() {
                return Err(ConfigError::RepositoryNotFound(repo.clone()));
            }
        }

        self.pipeline_options()?;
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Whether a path names standard input
#[must_use]
pub fn is_stdin(path: &Path) -> bool {
    path == Path::new("-")
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input file not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Template file not found
    #[error("Template file not found: {0}")]
    TemplateNotFound(PathBuf),

    /// Repository directory not found
    #[error("Repository not found: {0}")]
    RepositoryNotFound(PathBuf),

    /// Window length out of range
    #[error("Window length out of range: {0} days")]
    WindowOutOfRange(i64),
}
