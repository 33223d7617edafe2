//! Flot-compatible plot payload
//!
//! The payload is a JSON array with one object per ranked author:
//!
//! ```json
//! [{"data":[[1000000000000,5.0]],"label":"a@x","points":{"show":true},
//!   "lines":{"show":true,"fill":true},"color":0}]
//! ```

use serde::Serialize;

use crate::series::AuthorSeries;

/// Which author field becomes the series label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Author email
    #[default]
    Email,
    /// Author display name
    Name,
}

/// Point marker options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointStyle {
    /// Draw point markers
    pub show: bool,
}

/// Line options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineStyle {
    /// Draw connecting lines
    pub show: bool,
    /// Fill the area under the line
    pub fill: bool,
}

/// One series entry in the plot payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    /// `[epoch_millis, value]` pairs
    pub data: Vec<(i64, f64)>,
    /// Display label
    pub label: String,
    /// Point marker options
    pub points: PointStyle,
    /// Line options
    pub lines: LineStyle,
    /// Rank index, used by the chart as the color index
    pub color: usize,
}

impl PlotSeries {
    /// Build the entry for the series at position `rank`
    #[must_use]
    pub fn new(rank: usize, series: &AuthorSeries, label: LabelStyle) -> Self {
        let label = match label {
            LabelStyle::Email => series.author_email.clone(),
            LabelStyle::Name => series.author_name.clone(),
        };
        Self {
            data: series
                .points
                .iter()
                .map(|p| (p.epoch_millis, p.value))
                .collect(),
            label,
            points: PointStyle { show: true },
            lines: LineStyle {
                show: true,
                fill: true,
            },
            color: rank,
        }
    }
}

/// Turn ranked series into plot entries, keeping rank order
#[must_use]
pub fn plot_data(ranked: &[AuthorSeries], label: LabelStyle) -> Vec<PlotSeries> {
    ranked
        .iter()
        .enumerate()
        .map(|(rank, series)| PlotSeries::new(rank, series, label))
        .collect()
}

/// Serialize plot entries to the JSON substitution payload
///
/// # Errors
///
/// Returns `serde_json::Error` if serialization fails (non-finite values
/// serialize as `null` and do not fail).
pub fn to_payload(plot: &[PlotSeries]) -> Result<String, serde_json::Error> {
    serde_json::to_string(plot)
}
