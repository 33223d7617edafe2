// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! lineedits-series: trailing-window activity series per author
//!
//! This library crate turns a stream of per-commit line statistics into one
//! time series per author, where each point is an aggregate (by default the
//! lines touched) over the trailing window ending at that commit.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use lineedits_series::prelude::*;
//!
//! let input = [
//!     "COMMITa@x|Alice|1000000000",
//!     "3\t2\tfile.c",
//!     "COMMITb@x|Bob|1000000100",
//!     "1\t0\tREADME",
//! ];
//! let ranked = Pipeline::new(PipelineOptions::default())
//!     .run(parse_lines(input))
//!     .expect("valid input");
//! let plot = plot_data(&ranked, LabelStyle::Email);
//! assert_eq!(plot[0].label, "a@x");
//! ```

pub mod aggregate;
pub mod commit;
pub mod error;
pub mod group;
pub mod parser;
pub mod pipeline;
pub mod plot;
pub mod series;
pub mod source;
pub mod window;

pub use aggregate::{Aggregator, Metric};
pub use commit::CommitRecord;
pub use error::SeriesError;
pub use group::{AuthorGroup, group_by_author, sort_by_author_date};
pub use parser::{RecordParser, parse_lines, parse_reader};
pub use pipeline::{Pipeline, PipelineOptions};
pub use plot::{LabelStyle, PlotSeries, plot_data, to_payload};
pub use series::{AuthorSeries, SeriesRanker, TimeSeriesPoint};
pub use source::GitLogSource;
pub use window::{SlidingWindow, Window};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::aggregate::{Aggregator, Metric};
    pub use crate::commit::CommitRecord;
    pub use crate::error::SeriesError;
    pub use crate::parser::{parse_lines, parse_reader};
    pub use crate::pipeline::{Pipeline, PipelineOptions};
    pub use crate::plot::{LabelStyle, plot_data, to_payload};
    pub use crate::series::AuthorSeries;
}
