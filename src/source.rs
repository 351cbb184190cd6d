//! Listing sources: where the raw `gh gist list` text comes from.
//!
//! [`GhCli`] runs the external command and blocks until it exits.
//! [`ListingFile`] reads a listing that was saved to disk earlier.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Record limit requested from the listing source when none is given.
pub const DEFAULT_LIMIT: usize = 100;

/// Produces raw listing text, one gist per line.
pub trait ListingSource {
    /// Fetch up to `limit` gists worth of listing text.
    fn fetch(&self, limit: usize) -> Result<String>;

    /// Human-readable description used in log output.
    fn describe(&self) -> String;
}

/// Runs `<program> <args...> -L <limit>` and captures its output.
///
/// Standard error is appended after standard output, so diagnostics from
/// the command are seen by the parser instead of being dropped. Both
/// streams must be valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GhCli {
    program: String,
    args: Vec<String>,
}

impl GhCli {
    /// `<program> gist list`, the usual GitHub CLI invocation.
    pub fn new(program: impl Into<String>) -> Self {
        Self::with_args(program, ["gist", "list"])
    }

    pub fn with_args<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    fn command_line(&self, limit: usize) -> Vec<String> {
        let mut args = self.args.clone();
        args.push("-L".to_string());
        args.push(limit.to_string());
        args
    }
}

impl Default for GhCli {
    fn default() -> Self {
        Self::new("gh")
    }
}

impl ListingSource for GhCli {
    fn fetch(&self, limit: usize) -> Result<String> {
        let args = self.command_line(limit);
        debug!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .map_err(|source| Error::SourceInvocation {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            // diagnostic only, never parsed
            let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
            text.push_str(&String::from_utf8_lossy(&output.stderr));
            return Err(Error::SourceFailed {
                program: self.program.clone(),
                status: output.status,
                output: text,
            });
        }

        let decode = |bytes: Vec<u8>| {
            String::from_utf8(bytes).map_err(|source| Error::SourceEncoding {
                program: self.program.clone(),
                source,
            })
        };
        let mut text = decode(output.stdout)?;
        text.push_str(&decode(output.stderr)?);

        debug!("{} returned {} bytes", self.program, text.len());
        Ok(text)
    }

    fn describe(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }
}

/// A listing captured earlier, e.g. `gh gist list > gists.tsv`.
///
/// The file is returned whole; `limit` does not apply to saved output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingFile {
    path: PathBuf,
}

impl ListingFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ListingSource for ListingFile {
    fn fetch(&self, _limit: usize) -> Result<String> {
        debug!("reading listing from {}", self.path.display());
        fs::read_to_string(&self.path).map_err(|source| Error::ReadListing {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_gh_gist_list() {
        let gh = GhCli::default();
        assert_eq!(gh.describe(), "gh gist list");
        assert_eq!(gh.command_line(100), vec!["gist", "list", "-L", "100"]);
    }

    #[test]
    fn test_missing_program_is_invocation_error() {
        let gh = GhCli::new("gist-list-test-no-such-program");
        match gh.fetch(5) {
            Err(Error::SourceInvocation { program, .. }) => {
                assert_eq!(program, "gist-list-test-no-such-program");
            }
            other => panic!("Expected SourceInvocation, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_passes_limit() {
        // sh -c <script> sh -L <n>: the limit lands in $2
        let gh = GhCli::with_args("sh", ["-c", r#"printf 'limit=%s\n' "$2""#, "sh"]);
        assert_eq!(gh.fetch(7).unwrap(), "limit=7\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_fetch_merges_stderr() {
        let gh = GhCli::with_args("sh", ["-c", "echo out; echo err >&2", "sh"]);
        assert_eq!(gh.fetch(1).unwrap(), "out\nerr\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_is_failure() {
        let gh = GhCli::with_args("sh", ["-c", "echo 'not logged in' >&2; exit 4", "sh"]);
        match gh.fetch(1) {
            Err(Error::SourceFailed { status, output, .. }) => {
                assert_eq!(status.code(), Some(4));
                assert_eq!(output, "not logged in\n");
            }
            other => panic!("Expected SourceFailed, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_output_is_error() {
        let script = r"printf 'ab\tcaf\351\t1 file\tpublic\t2023-01-01T00:00:00Z\n'";
        let gh = GhCli::with_args("sh", ["-c", script, "sh"]);
        match gh.fetch(1) {
            Err(Error::SourceEncoding { program, .. }) => assert_eq!(program, "sh"),
            other => panic!("Expected SourceEncoding, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_on_stderr_is_error() {
        let gh = GhCli::with_args("sh", ["-c", r"printf 'warn \377\n' >&2", "sh"]);
        assert!(matches!(gh.fetch(1), Err(Error::SourceEncoding { .. })));
    }

    #[test]
    fn test_listing_file_reads_whole_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "aa\t\t1 file\tpublic\t2023-01-01T00:00:00Z").unwrap();
        let source = ListingFile::new(file.path());
        assert_eq!(
            source.fetch(0).unwrap(),
            "aa\t\t1 file\tpublic\t2023-01-01T00:00:00Z\n"
        );
    }

    #[test]
    fn test_listing_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = ListingFile::new(dir.path().join("absent.tsv"));
        assert!(matches!(source.fetch(10), Err(Error::ReadListing { .. })));
    }
}
