//! Gist records and the listing-line parser.
//!
//! `gh gist list` prints one gist per line as five tab-separated fields:
//! ```text
//! <id>\t<description>\t<n> file(s)\t<public|secret>\t<YYYY-MM-DDTHH:MM:SSZ>
//! ```
//!
//! The line is searched rather than matched whole, so stray text around the
//! five fields (a trailing newline, a prefix) does not cause a failure. The
//! id never starts right after a tab, so a description holding a tab cannot
//! shift the match onto a later field.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{DateTime, NaiveDateTime, Utc};
use regex::Regex;

use crate::error::{ParseError, ParseFailure};

/// Timestamp layout of the last field of a listing line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Layout of the first line of a rendered gist, e.g. `Nov 05, 2023 02:22:01 PM`.
pub const DISPLAY_FORMAT: &str = "%b %d, %Y %I:%M:%S %p";

/// Minimum width of the id line in a rendered gist.
pub const ID_WIDTH: usize = 32;

static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?:^|[^\t])\b(?P<id>[a-f0-9]+)\t",
        r"(?P<description>[^\t]*)\t",
        r"(?P<file_count>\d+) files?\t",
        r"(?P<visibility>[^\t]+)\t",
        r"(?P<last_updated>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}Z)",
    ))
    .expect("listing line pattern is valid")
});

/// Who can see a gist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Visibility {
    Public,
    Secret,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Public => "public",
            Visibility::Secret => "secret",
        }
    }
}

impl FromStr for Visibility {
    type Err = ParseFailure;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Visibility::Public),
            "secret" => Ok(Visibility::Secret),
            other => Err(ParseFailure::InvalidVisibility(other.to_string())),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for one gist, as listed by `gh gist list`.
///
/// Only built by [`parse_line`], so every value satisfies the listing
/// grammar: a lowercase hex id, at least one file, and a valid UTC time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gist {
    id: String,
    file_count: u32,
    description: String,
    visibility: Visibility,
    last_updated: DateTime<Utc>,
}

impl Gist {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn file_count(&self) -> u32 {
        self.file_count
    }

    /// Description exactly as listed; may be empty.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}

/// Three lines: update time, visibility and file count; padded id; description.
impl fmt::Display for Gist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} ({}) {}",
            self.last_updated.format(DISPLAY_FORMAT),
            self.visibility,
            self.file_count
        )?;
        writeln!(f, "{:<width$}", self.id, width = ID_WIDTH)?;
        writeln!(f, "{}", self.description)
    }
}

impl FromStr for Gist {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_line(s)
    }
}

/// Parse one listing line into a [`Gist`].
///
/// Any failure, including a well-shaped line whose timestamp is not a real
/// calendar time, yields a [`ParseError`] carrying the raw line.
pub fn parse_line(line: &str) -> Result<Gist, ParseError> {
    let fail = |reason: ParseFailure| ParseError::new(line, reason);

    let caps = LINE_RE
        .captures(line)
        .ok_or_else(|| fail(ParseFailure::NoMatch))?;

    let count_text = &caps["file_count"];
    let file_count: u32 = count_text
        .parse()
        .map_err(|_| fail(ParseFailure::InvalidFileCount(count_text.to_string())))?;
    if file_count == 0 {
        return Err(fail(ParseFailure::ZeroFileCount));
    }

    let visibility = caps["visibility"].parse::<Visibility>().map_err(fail)?;

    let time_text = &caps["last_updated"];
    let last_updated = NaiveDateTime::parse_from_str(time_text, TIMESTAMP_FORMAT)
        .map_err(|_| fail(ParseFailure::InvalidTimestamp(time_text.to_string())))?
        .and_utc();

    Ok(Gist {
        id: caps["id"].to_string(),
        file_count,
        description: caps["description"].to_string(),
        visibility,
        last_updated,
    })
}
