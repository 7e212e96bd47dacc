//! # semy
//!
//! A fixed-capacity [Semantic Versioning 2.0.0](https://semver.org/) parser
//! and precedence comparator.
//!
//! A parsed version lives entirely inside one [`SemVer`] value of
//! [`RECORD_SIZE`] bytes: the core numbers, up to [`MAX_IDENTIFIERS`]
//! pre-release and build identifiers, and a small arena holding the
//! identifier text. Parsing never allocates.
//!
//! ## Overview
//!
//! - [`SemVer::parse`] validates an input against the SemVer grammar and
//!   decomposes it. Inputs that are not versions fail with
//!   [`SemyError::BadSyntax`]; versions that do not fit the record (numbers
//!   above `i32::MAX`, more than [`MAX_IDENTIFIERS`] identifiers, inputs longer
//!   than [`MAX_VERSION_LENGTH`]) fail with [`SemyError::LimitsExceeded`].
//! - [`compare`] and the `Ord` impl order versions by SemVer precedence.
//! - Accessors such as [`SemVer::major`] and [`SemVer::pre_release`] read the
//!   decomposed fields; the text they return borrows from the record.
//! - [`api`] exposes the same operations over nullable handles with sentinel
//!   results, for callers that manage records themselves.
//! - [`class`] is the byte classifier the grammar is built on.
//!
//! ## Example
//!
//! ```rust
//! use semy::{SemVer, SemyError};
//!
//! let mut versions: Vec<SemVer> = ["1.0.0", "1.0.0-rc.1", "1.0.0-alpha", "0.9.12"]
//!     .iter()
//!     .map(|s| s.parse())
//!     .collect::<Result<_, SemyError>>()
//!     .unwrap();
//! versions.sort();
//!
//! let sorted: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
//! assert_eq!(sorted, ["0.9.12", "1.0.0-alpha", "1.0.0-rc.1", "1.0.0"]);
//!
//! assert_eq!("1.2.3-01".parse::<SemVer>().unwrap_err(), SemyError::BadSyntax);
//! ```

pub mod api;
pub mod class;
mod compare;
mod cursor;
mod error;
mod grammar;
mod record;

pub use compare::compare;
pub use error::SemyError;
pub use record::{
    ARENA_CAPACITY, MAX_IDENTIFIERS, MAX_VERSION_LENGTH, PreRelease, RECORD_SIZE, SemVer,
};
