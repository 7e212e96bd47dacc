//! Recursive-descent parser for the Semantic Versioning 2.0.0 grammar.
//!
//! Each function below mirrors one BNF production from <https://semver.org/>.
//! Lexical productions look at the unconsumed bytes and report how many they
//! match; structural productions drive a [`Cursor`] and append identifiers to
//! the [`SemVer`] record as soon as each one is recognized.
//!
//! The grammar is LL(1) at every choice point, so alternatives are tried in
//! order without backtracking. If a list fails half-way the record keeps the
//! identifiers appended so far; [`SemVer::parse_into`] discards the whole
//! record on any error.

use crate::SemyError;
use crate::class;
use crate::cursor::Cursor;
use crate::record::{MAX_VERSION_LENGTH, SemVer, text_to_int};

/// Outcome of a single production.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Production {
    /// The production matched `len` bytes.
    Matched { len: usize },
    /// The input does not start with this production.
    NoMatch,
    /// The input matched, but a number or identifier list does not fit the record.
    Limits,
}

/// Unwraps a `Matched` length, returning any other outcome from the caller.
macro_rules! try_match {
    ($production:expr) => {
        match $production {
            Production::Matched { len } => len,
            other => return other,
        }
    };
}

/// Parses a complete version string into `record`.
///
/// `record` must be zeroed. Trailing input after a valid version is
/// [`SemyError::BadSyntax`].
pub(crate) fn parse(record: &mut SemVer, input: &[u8]) -> Result<(), SemyError> {
    if input.len() > MAX_VERSION_LENGTH {
        return Err(SemyError::LimitsExceeded);
    }
    let mut cursor = Cursor::new(input);
    match valid_semver(record, &mut cursor) {
        Production::Matched { .. } if cursor.is_at_end() => Ok(()),
        Production::Matched { .. } | Production::NoMatch => Err(SemyError::BadSyntax),
        Production::Limits => Err(SemyError::LimitsExceeded),
    }
}

// <valid semver> ::= <version core>
//                  | <version core> "-" <pre-release>
//                  | <version core> "+" <build>
//                  | <version core> "-" <pre-release> "+" <build>
fn valid_semver(record: &mut SemVer, cursor: &mut Cursor<'_>) -> Production {
    let start = cursor.pos();
    try_match!(version_core(record, cursor));
    if cursor.eat(b'-') {
        try_match!(pre_release(record, cursor));
    }
    if cursor.eat(b'+') {
        try_match!(build(record, cursor));
    }
    Production::Matched {
        len: cursor.pos() - start,
    }
}

// <version core> ::= <major> "." <minor> "." <patch>
//
// Each component is converted as soon as it is matched, so an overflowing
// major fails before minor is looked at.
fn version_core(record: &mut SemVer, cursor: &mut Cursor<'_>) -> Production {
    let start = cursor.pos();
    let mut core = [0; 3];
    for (i, part) in core.iter_mut().enumerate() {
        if i > 0 && !cursor.eat(b'.') {
            return Production::NoMatch;
        }
        let len = try_match!(numeric_identifier(cursor.rest()));
        match text_to_int(cursor.take(len)) {
            Ok(value) => *part = value,
            Err(_) => return Production::Limits,
        }
    }
    record.set_core(core);
    Production::Matched {
        len: cursor.pos() - start,
    }
}

// <pre-release> ::= <dot-separated pre-release identifiers>
fn pre_release(record: &mut SemVer, cursor: &mut Cursor<'_>) -> Production {
    let start = cursor.pos();
    loop {
        let Some((len, is_alphanumeric)) = pre_release_identifier(cursor.rest()) else {
            return Production::NoMatch;
        };
        if record
            .push_pre_release(is_alphanumeric, cursor.take(len))
            .is_err()
        {
            return Production::Limits;
        }
        if !cursor.eat(b'.') {
            break;
        }
    }
    Production::Matched {
        len: cursor.pos() - start,
    }
}

// <build> ::= <dot-separated build identifiers>
fn build(record: &mut SemVer, cursor: &mut Cursor<'_>) -> Production {
    let start = cursor.pos();
    loop {
        let len = try_match!(build_identifier(cursor.rest()));
        if record.push_build(cursor.take(len)).is_err() {
            return Production::Limits;
        }
        if !cursor.eat(b'.') {
            break;
        }
    }
    Production::Matched {
        len: cursor.pos() - start,
    }
}

// <pre-release identifier> ::= <alphanumeric identifier>
//                            | <numeric identifier>
//
// Returns the matched length and whether the identifier is alphanumeric. The
// two alternatives are disjoint: an all-digit run never satisfies the
// alphanumeric rule.
fn pre_release_identifier(input: &[u8]) -> Option<(usize, bool)> {
    if let Production::Matched { len } = alphanumeric_identifier(input) {
        return Some((len, true));
    }
    match numeric_identifier(input) {
        Production::Matched { len } => Some((len, false)),
        _ => None,
    }
}

// <build identifier> ::= <alphanumeric identifier>
//                      | <digits>
fn build_identifier(input: &[u8]) -> Production {
    match alphanumeric_identifier(input) {
        Production::NoMatch => digits(input),
        matched => matched,
    }
}

// <alphanumeric identifier> ::= <non-digit>
//                             | <non-digit> <identifier characters>
//                             | <identifier characters> <non-digit>
//                             | <identifier characters> <non-digit> <identifier characters>
//
// Both shapes consume the whole greedy run of identifier characters; the run
// qualifies as long as one of its characters is a non-digit.
fn alphanumeric_identifier(input: &[u8]) -> Production {
    let len = identifier_characters(input);
    if input[..len].iter().any(|&b| class::is_non_digit(b)) {
        Production::Matched { len }
    } else {
        Production::NoMatch
    }
}

// <numeric identifier> ::= "0"
//                        | <positive digit>
//                        | <positive digit> <digits>
//
// A leading "0" matches alone; whatever digit follows it is left for the
// caller to reject.
fn numeric_identifier(input: &[u8]) -> Production {
    match input.first() {
        Some(b'0') => Production::Matched { len: 1 },
        Some(&b) if class::is_positive_digit(b) => Production::Matched {
            len: 1 + count_while(&input[1..], class::is_digit),
        },
        _ => Production::NoMatch,
    }
}

// <identifier characters> ::= <identifier character>
//                           | <identifier character> <identifier characters>
//
// Zero or more; the callers decide whether an empty run is acceptable.
fn identifier_characters(input: &[u8]) -> usize {
    count_while(input, class::is_identifier_char)
}

// <digits> ::= <digit>
//            | <digit> <digits>
fn digits(input: &[u8]) -> Production {
    match count_while(input, class::is_digit) {
        0 => Production::NoMatch,
        len => Production::Matched { len },
    }
}

#[inline]
fn count_while(input: &[u8], pred: fn(u8) -> bool) -> usize {
    input.iter().take_while(|&&b| pred(b)).count()
}
