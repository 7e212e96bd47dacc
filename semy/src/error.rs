//! Error type shared by the parser, the comparator and the boundary API.
//!
//! Every fallible operation in this crate reports one of three failure kinds.
//! The distinction matters to callers: a [`SemyError::BadSyntax`] input is not
//! a semantic version at all, while a [`SemyError::LimitsExceeded`] input may
//! well be a valid version that simply does not fit the fixed-capacity record.
//!
//! # Examples
//!
//! ```rust
//! # use semy::{SemVer, SemyError};
//! assert_eq!(SemVer::parse("1.2").unwrap_err(), SemyError::BadSyntax);
//! assert_eq!(
//!     SemVer::parse("2147483648.0.0").unwrap_err(),
//!     SemyError::LimitsExceeded
//! );
//! ```

use thiserror::Error;

/// Failure kinds reported by [`SemVer`](crate::SemVer) parsing and the
/// [`api`](crate::api) functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SemyError {
    /// The API was misused: a required record or string was missing, or the
    /// declared record size does not match [`RECORD_SIZE`](crate::RECORD_SIZE).
    ///
    /// Never caused by untrusted input.
    #[error("invalid operation")]
    InvalidOperation,

    /// The input does not match the Semantic Versioning grammar, or it matched
    /// only a prefix and left trailing characters unconsumed.
    #[error("invalid semantic version")]
    BadSyntax,

    /// An implementation bound was hit: input length, numeric overflow,
    /// identifier count, or string arena capacity.
    #[error("semantic version exceeds implementation limits")]
    LimitsExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_error_trait_obj(e: &dyn std::error::Error) -> &dyn std::error::Error {
        e
    }

    #[test]
    fn display_messages() {
        assert_eq!(SemyError::InvalidOperation.to_string(), "invalid operation");
        assert_eq!(SemyError::BadSyntax.to_string(), "invalid semantic version");
        assert!(SemyError::LimitsExceeded.to_string().contains("limits"));
    }

    #[test]
    fn is_std_error() {
        let err = SemyError::BadSyntax;
        let _ = _assert_error_trait_obj(&err);
    }

    // If SemyError ever stops being Send + Sync + 'static this will fail to compile.
    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn semy_error_is_send_sync_static() {
        _assert_send_sync_static::<SemyError>();
    }
}
