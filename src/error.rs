//! Error types for listing, parsing, and reporting gists.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use std::string::FromUtf8Error;

/// Why a listing line was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFailure {
    #[error("expected <id>\\t<description>\\t<n> file(s)\\t<public|secret>\\t<YYYY-MM-DDTHH:MM:SSZ>")]
    NoMatch,
    #[error("invalid timestamp {0:?}")]
    InvalidTimestamp(String),
    #[error("invalid visibility {0:?}, expected public or secret")]
    InvalidVisibility(String),
    #[error("invalid file count {0:?}")]
    InvalidFileCount(String),
    #[error("file count must be at least 1")]
    ZeroFileCount,
}

/// A listing line that could not be turned into a [`crate::Gist`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("the line {line:?} could not be parsed: {reason}")]
pub struct ParseError {
    /// The raw line, as received.
    pub line: String,
    pub reason: ParseFailure,
}

impl ParseError {
    pub fn new(line: &str, reason: ParseFailure) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The listing program could not be started.
    #[error("failed to run '{program}': {source}")]
    SourceInvocation {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The listing program ran but exited unsuccessfully.
    #[error("'{program}' exited with {status}:\n{output}")]
    SourceFailed {
        program: String,
        status: ExitStatus,
        output: String,
    },

    /// The listing program printed bytes that are not valid UTF-8.
    #[error("'{program}' produced output that is not valid UTF-8: {source}")]
    SourceEncoding {
        program: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("failed to read listing file '{}': {source}", .path.display())]
    ReadListing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_names_line() {
        let err = ParseError::new("deadbeef\tbroken", ParseFailure::NoMatch);
        let msg = err.to_string();
        assert!(msg.contains("deadbeef\\tbroken"));
        assert!(msg.contains("could not be parsed"));
    }

    #[test]
    fn test_parse_error_converts_to_error() {
        let err: Error = ParseError::new("x", ParseFailure::ZeroFileCount).into();
        match err {
            Error::Parse(inner) => assert_eq!(inner.reason, ParseFailure::ZeroFileCount),
            _ => panic!("Expected Parse"),
        }
    }

    #[test]
    fn test_read_listing_display() {
        let err = Error::ReadListing {
            path: PathBuf::from("/nope/list.tsv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "failed to read listing file '/nope/list.tsv': not found"
        );
    }
}
