//! # CLI Error Type
//!
//! [`CliError`] is the single error surface of the command implementations.
//! It wraps failures from:
//!
//! - **Parsing** a version argument ([`SemyError`]),
//! - **Writing** results to the output stream,
//! - **Serializing** a decomposition as JSON.
//!
//! Conversions are derived with `#[from]`, so command code propagates with
//! `?`. [`CliError::exit_code`] maps each failure to the process exit status.
use semy::SemyError;
use thiserror::Error;

/// Exit status for malformed semantic versions.
pub const EXIT_BAD_SYNTAX: u8 = 1;
/// Exit status for incorrect program arguments (clap reports these itself).
pub const EXIT_INVALID_OPTION: u8 = 2;
/// Exit status for every other failure.
pub const EXIT_GENERAL_ERROR: u8 = 3;

/// Represents all possible errors of a CLI command.
///
/// # Examples
/// ```rust
/// # use semy::SemyError;
/// # use semy_cli::CliError;
/// let err: CliError = SemyError::BadSyntax.into();
/// assert_eq!(err.to_string(), "invalid semantic version");
/// assert_eq!(err.exit_code(), 1);
/// ```
#[derive(Debug, Error)]
pub enum CliError {
    /// A version argument was rejected by the parser.
    #[error("{}", describe(.0))]
    Version(#[from] SemyError),

    /// Writing to the output stream failed.
    #[error("unable to write output: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("unable to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe(err: &SemyError) -> &'static str {
    match err {
        SemyError::BadSyntax => "invalid semantic version",
        SemyError::LimitsExceeded => "semantic version is too complex for this implementation",
        SemyError::InvalidOperation => "internal malfunction",
    }
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Version(SemyError::BadSyntax) => EXIT_BAD_SYNTAX,
            _ => EXIT_GENERAL_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_errors_map_to_messages_and_codes() {
        let cases = [
            (SemyError::BadSyntax, "invalid semantic version", EXIT_BAD_SYNTAX),
            (
                SemyError::LimitsExceeded,
                "semantic version is too complex for this implementation",
                EXIT_GENERAL_ERROR,
            ),
            (SemyError::InvalidOperation, "internal malfunction", EXIT_GENERAL_ERROR),
        ];
        for (underlying, message, code) in cases {
            let err = CliError::from(underlying);
            assert_eq!(err.to_string(), message);
            assert_eq!(err.exit_code(), code);
        }
    }

    #[test]
    fn io_error_is_general() {
        let err: CliError = std::io::Error::other("closed").into();
        assert!(matches!(err, CliError::Io(_)));
        assert!(err.to_string().contains("unable to write output"));
        assert_eq!(err.exit_code(), EXIT_GENERAL_ERROR);
    }

    fn _assert_send_sync_static<T: Send + Sync + 'static>() {}
    #[test]
    fn cli_error_is_send_sync_static() {
        _assert_send_sync_static::<CliError>();
    }
}
