//! Gist report pipeline: fetch, parse, sort, render.
//!
//! Every stage runs to completion before the next one starts, and any
//! failure aborts the whole report. There is no partial output: either all
//! lines parse and the full report is produced, or an error is returned.

use log::debug;

use crate::error::{ParseError, Result};
use crate::gist::{Gist, parse_line};
use crate::source::ListingSource;

/// Fetch raw listing text for up to `limit` gists.
pub fn fetch_raw_listing(source: &dyn ListingSource, limit: usize) -> Result<String> {
    debug!("fetching up to {limit} gists from {}", source.describe());
    source.fetch(limit)
}

/// Parse every non-empty line of `raw_text`, in order.
///
/// Stops at the first line that fails to parse.
pub fn parse_all(raw_text: &str) -> std::result::Result<Vec<Gist>, ParseError> {
    raw_text
        .lines()
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect()
}

/// Sort by last update, oldest first. Gists updated at the same instant
/// keep their input order.
pub fn sort_ascending(mut gists: Vec<Gist>) -> Vec<Gist> {
    gists.sort_by_key(Gist::last_updated);
    gists
}

/// Render one gist as its three-line block.
pub fn render(gist: &Gist) -> String {
    gist.to_string()
}

/// Render every gist, each block followed by a blank line.
pub fn render_all(gists: &[Gist]) -> String {
    gists
        .iter()
        .map(|g| format!("{}\n", render(g)))
        .collect()
}

/// Build the complete report: fetch, parse, sort, and render.
///
/// Returns (report_text, gist_count) on success.
pub fn build_report(source: &dyn ListingSource, limit: usize) -> Result<(String, usize)> {
    let raw = fetch_raw_listing(source, limit)?;
    let gists = sort_ascending(parse_all(&raw)?);
    debug!("parsed and sorted {} gists", gists.len());
    Ok((render_all(&gists), gists.len()))
}
