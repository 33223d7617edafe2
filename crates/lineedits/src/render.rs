// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Page template substitution
//!
//! Templates use printf-style named placeholders: `%(plotdata)s` is replaced
//! by the JSON payload and `%%` produces a literal `%`. Any other `%`
//! sequence is rejected so a broken template fails loudly instead of
//! producing a page with no chart.

use thiserror::Error;

/// Placeholder replaced by the plot payload
pub const PLOTDATA_PLACEHOLDER: &str = "%(plotdata)s";

/// Template rendering errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A `%` sequence other than `%%` or the plotdata placeholder
    #[error("Unsupported template placeholder at byte {offset}: '{snippet}'")]
    UnsupportedPlaceholder {
        /// Byte offset of the `%` in the template
        offset: usize,
        /// The text following the `%`, truncated
        snippet: String,
    },

    /// Template never mentions the plotdata placeholder
    #[error("Template has no %(plotdata)s placeholder")]
    MissingPlaceholder,
}

/// Substitute the payload into a template
///
/// # Errors
///
/// Returns `RenderError` if the template contains an unsupported `%`
/// sequence or no plotdata placeholder at all.
pub fn render_template(template: &str, payload: &str) -> Result<String, RenderError> {
    let mut rendered = String::with_capacity(template.len() + payload.len());
    let mut rest = template;
    let mut substituted = false;

    while let Some(idx) = rest.find('%') {
        rendered.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if let Some(after) = tail.strip_prefix("%%") {
            rendered.push('%');
            rest = after;
        } else if let Some(after) = tail.strip_prefix(PLOTDATA_PLACEHOLDER) {
            rendered.push_str(payload);
            substituted = true;
            rest = after;
        } else {
            return Err(RenderError::UnsupportedPlaceholder {
                offset: template.len() - tail.len(),
                snippet: tail.chars().take(16).collect(),
            });
        }
    }
    rendered.push_str(rest);

    if substituted {
        Ok(rendered)
    } else {
        Err(RenderError::MissingPlaceholder)
    }
}
