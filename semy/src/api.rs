//! Boundary contract for callers that hold records by nullable handle.
//!
//! These functions mirror the record methods but accept `Option` handles and
//! report misuse instead of relying on the type system: a missing record or
//! string is [`SemyError::InvalidOperation`], and the accessors return
//! sentinels (`-1` or `None`) rather than panicking. Every function is total.
//!
//! Accessors are meaningful only on a successfully parsed record. On a zeroed
//! record they report `0.0.0` with no identifiers, which a caller cannot tell
//! apart from a parsed `"0.0.0"`.
//!
//! ```rust
//! # use semy::{SemVer, SemyError, RECORD_SIZE, api};
//! let mut record = SemVer::new();
//! api::parse(Some(&mut record), RECORD_SIZE, Some("1.4.0-rc.2")).unwrap();
//! assert_eq!(api::get_minor(Some(&record)), 4);
//! assert_eq!(api::get_pre_release(Some(&record), 1), Some("2"));
//! assert_eq!(api::get_pre_release(None, 0), None);
//! assert_eq!(
//!     api::parse(Some(&mut record), RECORD_SIZE - 1, Some("1.0.0")),
//!     Err(SemyError::InvalidOperation)
//! );
//! ```

use crate::{RECORD_SIZE, SemVer, SemyError};

/// Parses `text` into `record`.
///
/// `size` must equal [`RECORD_SIZE`] exactly; any other value, or a missing
/// record or text, fails with [`SemyError::InvalidOperation`] and leaves the
/// record untouched.
pub fn parse(
    record: Option<&mut SemVer>,
    size: usize,
    text: Option<&str>,
) -> Result<(), SemyError> {
    let (Some(record), Some(text)) = (record, text) else {
        log::trace!("parse called without a record or text");
        return Err(SemyError::InvalidOperation);
    };
    if size != RECORD_SIZE {
        log::trace!("parse called with record size {size}, expected {RECORD_SIZE}");
        return Err(SemyError::InvalidOperation);
    }
    record.parse_into(text)
}

/// Compares two records by precedence, returning `-1`, `0` or `1`.
pub fn compare(a: Option<&SemVer>, b: Option<&SemVer>) -> Result<i32, SemyError> {
    let (Some(a), Some(b)) = (a, b) else {
        return Err(SemyError::InvalidOperation);
    };
    let result = crate::compare(a, b);
    log::trace!("compare {a} with {b}: {result}");
    Ok(result)
}

/// Major version, or `-1` without a record.
pub fn get_major(record: Option<&SemVer>) -> i32 {
    record.map_or(-1, SemVer::major)
}

/// Minor version, or `-1` without a record.
pub fn get_minor(record: Option<&SemVer>) -> i32 {
    record.map_or(-1, SemVer::minor)
}

/// Patch version, or `-1` without a record.
pub fn get_patch(record: Option<&SemVer>) -> i32 {
    record.map_or(-1, SemVer::patch)
}

/// Number of pre-release identifiers, or `-1` without a record.
pub fn get_pre_release_count(record: Option<&SemVer>) -> i32 {
    record.map_or(-1, |r| r.pre_release_count() as i32)
}

/// Number of build identifiers, or `-1` without a record.
pub fn get_build_count(record: Option<&SemVer>) -> i32 {
    record.map_or(-1, |r| r.build_count() as i32)
}

/// Text of the pre-release identifier at `index`.
///
/// `None` without a record or for an index outside `0..count`. The text
/// borrows from the record.
pub fn get_pre_release(record: Option<&SemVer>, index: i32) -> Option<&str> {
    let index = usize::try_from(index).ok()?;
    record?.pre_release(index)
}

/// Text of the build identifier at `index`.
///
/// `None` without a record or for an index outside `0..count`. The text
/// borrows from the record.
pub fn get_build(record: Option<&SemVer>, index: i32) -> Option<&str> {
    let index = usize::try_from(index).ok()?;
    record?.build(index)
}
