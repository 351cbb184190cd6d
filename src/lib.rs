//! # gist-list
//!
//! List a user's GitHub gists, oldest update first.
//!
//! The listing comes from `gh gist list`, which prints one tab-separated
//! line per gist. Each line is parsed into a [`Gist`], the gists are sorted
//! by update time, and each is rendered as a three-line block.
//!
//! ## Example
//!
//! ```
//! use gist_list::{parse_all, render, sort_ascending};
//!
//! let raw = "aa11\tnewer\t1 file\tpublic\t2023-01-01T00:00:00Z\n\
//!            bb22\tolder\t2 files\tsecret\t2022-01-01T00:00:00Z\n";
//!
//! let gists = sort_ascending(parse_all(raw).unwrap());
//! assert_eq!(gists[0].id(), "bb22");
//! assert!(render(&gists[0]).starts_with("Jan 01, 2022 12:00:00 AM (secret) 2\n"));
//! ```

pub mod error;
pub mod gist;
pub mod pipeline;
pub mod source;

pub use error::{Error, ParseError, ParseFailure, Result};
pub use gist::{Gist, Visibility, parse_line};
pub use pipeline::{
    build_report, fetch_raw_listing, parse_all, render, render_all, sort_ascending,
};
pub use source::{DEFAULT_LIMIT, GhCli, ListingFile, ListingSource};
