//! # semy-cli
//!
//! Command implementations behind the `semy` binary. Each command parses its
//! arguments with [`semy::SemVer`] and writes its result to the given output
//! stream, so the commands can be exercised without spawning a process.
//!
//! - [`validate`]: parse every argument, fail on the first malformed one.
//! - [`compare`]: print `-1`, `0` or `1`.
//! - [`sort`]: print the arguments in ascending precedence.
//! - [`decompose`]: print the fields of one version as JSON or XML.
//!
//! ## Example
//!
//! ```rust
//! let mut out = Vec::new();
//! semy_cli::sort(&["1.0.0", "1.0.0-rc.1", "0.9.0"], &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "0.9.0\n1.0.0-rc.1\n1.0.0\n");
//! ```
pub mod decompose;
pub mod error;

pub use decompose::{Decomposition, Format};
pub use error::CliError;

use semy::SemVer;
use std::io::Write;

fn parse(text: &str) -> Result<SemVer, CliError> {
    SemVer::parse(text).map_err(|err| {
        log::debug!("rejected {:?}: {:?}", text, err);
        CliError::from(err)
    })
}

/// Checks that every version is valid, stopping at the first failure.
pub fn validate<S: AsRef<str>>(versions: &[S]) -> Result<(), CliError> {
    for version in versions {
        parse(version.as_ref())?;
        log::debug!("valid: {:?}", version.as_ref());
    }
    Ok(())
}

/// Writes the precedence of `v1` relative to `v2` as `-1`, `0` or `1`.
pub fn compare(v1: &str, v2: &str, out: &mut impl Write) -> Result<(), CliError> {
    let (a, b) = (parse(v1)?, parse(v2)?);
    writeln!(out, "{}", semy::compare(&a, &b))?;
    Ok(())
}

/// Writes `versions` in ascending precedence, one per line.
///
/// Versions of equal precedence (for instance, differing only in build
/// metadata) keep their input order.
pub fn sort<S: AsRef<str>>(versions: &[S], out: &mut impl Write) -> Result<(), CliError> {
    let mut parsed = versions
        .iter()
        .map(|raw| Ok((raw.as_ref(), parse(raw.as_ref())?)))
        .collect::<Result<Vec<_>, CliError>>()?;
    parsed.sort_by(|(_, a), (_, b)| a.cmp(b));
    for (raw, _) in &parsed {
        writeln!(out, "{raw}")?;
    }
    Ok(())
}

/// Writes the fields of `version` in the requested format.
pub fn decompose(format: Format, version: &str, out: &mut impl Write) -> Result<(), CliError> {
    let parsed = parse(version)?;
    Decomposition::new(version, &parsed).write(format, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use semy::SemyError;

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn validate_stops_at_first_invalid() {
        assert!(validate(&["1.0.0", "2.0.0-rc.1+b"]).is_ok());
        assert!(validate::<&str>(&[]).is_ok());
        let err = validate(&["1.0.0", "1.0", "2147483648.0.0"]).unwrap_err();
        assert!(matches!(err, CliError::Version(SemyError::BadSyntax)));
        let err = validate(&["2147483648.0.0", "1.0"]).unwrap_err();
        assert!(matches!(err, CliError::Version(SemyError::LimitsExceeded)));
    }

    #[test]
    fn compare_prints_sign() {
        assert_eq!(output(|o| compare("1.0.0-alpha", "1.0.0-alpha.1", o)), "-1\n");
        assert_eq!(output(|o| compare("1.0.0+a", "1.0.0+b", o)), "0\n");
        assert_eq!(output(|o| compare("1.0.0", "1.0.0-rc.1", o)), "1\n");
        assert!(compare("1.0.0", "x", &mut Vec::new()).is_err());
    }

    #[test]
    fn sort_orders_by_precedence() {
        let input = [
            "2.0.0",
            "2.0.0-rc.1",
            "2.0.0-beta.11",
            "2.0.0-beta.2",
            "2.0.0-beta",
            "2.0.0-alpha.beta",
            "2.0.0-alpha.1",
            "2.0.0-alpha",
        ];
        assert_eq!(
            output(|o| sort(&input, o)),
            "2.0.0-alpha\n2.0.0-alpha.1\n2.0.0-alpha.beta\n2.0.0-beta\n\
             2.0.0-beta.2\n2.0.0-beta.11\n2.0.0-rc.1\n2.0.0\n"
        );
    }

    #[test]
    fn sort_is_stable_for_equal_precedence() {
        assert_eq!(
            output(|o| sort(&["1.0.0+b", "0.1.0", "1.0.0+a"], o)),
            "0.1.0\n1.0.0+b\n1.0.0+a\n"
        );
    }

    #[test]
    fn sort_writes_nothing_on_invalid_input() {
        let mut out = Vec::new();
        assert!(sort(&["1.0.0", "bad"], &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn decompose_rejects_invalid() {
        let err = decompose(Format::Json, "1.2", &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), error::EXIT_BAD_SYNTAX);
    }
}
