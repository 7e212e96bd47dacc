//! The fixed-capacity version record.
//!
//! A [`SemVer`] holds everything a parsed version needs in one plain value of
//! [`RECORD_SIZE`] bytes: the three core numbers, up to [`MAX_IDENTIFIERS`]
//! pre-release and build identifiers, and a small bump-allocated byte arena
//! that stores the identifier text. Identifiers refer to their text by a
//! `u16` offset into that arena instead of owning a heap string.
//!
//! Text returned by the accessors borrows from the record, so it cannot
//! outlive the record or survive a re-parse into it.

use crate::SemyError;
use crate::grammar;
use std::fmt;
use std::mem;
use std::str::FromStr;

/// Longest accepted input, in bytes. Longer inputs fail with
/// [`SemyError::LimitsExceeded`] before any grammar work is done.
pub const MAX_VERSION_LENGTH: usize = 200;

/// Maximum number of pre-release identifiers, and separately of build
/// identifiers, a record can hold.
pub const MAX_IDENTIFIERS: usize = 25;

/// Size of the identifier text arena in bytes. Each interned identifier costs
/// its length plus one terminator byte.
pub const ARENA_CAPACITY: usize = 244;

/// Exact size of a [`SemVer`] record, checked by [`api::parse`](crate::api::parse).
pub const RECORD_SIZE: usize = mem::size_of::<SemVer>();

// Every identifier of a maximum-length input, terminators included, fits.
const _: () = assert!(ARENA_CAPACITY > MAX_VERSION_LENGTH);
const _: () = assert!(MAX_IDENTIFIERS <= u8::MAX as usize);
const _: () = assert!(ARENA_CAPACITY <= u16::MAX as usize);

/// Offset of an interned string within the owning record's arena.
type TextRef = u16;

const MAJOR: usize = 0;
const MINOR: usize = 1;
const PATCH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PreReleaseEntry {
    numeric_value: i32,
    text: TextRef,
    is_alphanumeric: bool,
}

impl PreReleaseEntry {
    const EMPTY: Self = Self {
        numeric_value: 0,
        text: 0,
        is_alphanumeric: false,
    };
}

/// A borrowed view of one pre-release identifier.
///
/// Numeric identifiers keep both their value and their original text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreRelease<'a> {
    /// An identifier made only of digits, compared by value.
    Numeric { value: i32, text: &'a str },
    /// An identifier containing at least one letter or hyphen, compared
    /// lexically in ASCII order.
    Alphanumeric(&'a str),
}

impl<'a> PreRelease<'a> {
    /// The identifier exactly as written in the input.
    pub fn as_str(&self) -> &'a str {
        match *self {
            PreRelease::Numeric { text, .. } => text,
            PreRelease::Alphanumeric(text) => text,
        }
    }

    pub fn is_alphanumeric(&self) -> bool {
        matches!(self, PreRelease::Alphanumeric(_))
    }

    /// The decimal value of a numeric identifier, `None` for alphanumeric ones.
    pub fn numeric_value(&self) -> Option<i32> {
        match *self {
            PreRelease::Numeric { value, .. } => Some(value),
            PreRelease::Alphanumeric(_) => None,
        }
    }
}

impl fmt::Display for PreRelease<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed Semantic Versioning 2.0.0 version.
///
/// The record is either zeroed (see [`SemVer::new`]) or holds a complete,
/// valid parse. A failed parse leaves it zeroed.
///
/// Equality and ordering follow SemVer precedence, so build metadata is
/// ignored by `==`, `<` and friends.
///
/// # Examples
///
/// ```rust
/// # use semy::SemVer;
/// let v = SemVer::parse("1.0.0-beta.11+exp.sha.5114f85").unwrap();
/// assert_eq!((v.major(), v.minor(), v.patch()), (1, 0, 0));
/// assert_eq!(v.pre_release(1), Some("11"));
/// assert_eq!(v.build(2), Some("5114f85"));
/// assert_eq!(v.to_string(), "1.0.0-beta.11+exp.sha.5114f85");
/// ```
#[derive(Clone)]
pub struct SemVer {
    core: [i32; 3],
    pre_release: [PreReleaseEntry; MAX_IDENTIFIERS],
    build: [TextRef; MAX_IDENTIFIERS],
    pre_release_count: u8,
    build_count: u8,
    arena_used: u16,
    arena: [u8; ARENA_CAPACITY],
}

impl SemVer {
    /// Creates a zeroed, not-yet-parsed record.
    pub const fn new() -> Self {
        Self {
            core: [0; 3],
            pre_release: [PreReleaseEntry::EMPTY; MAX_IDENTIFIERS],
            build: [0; MAX_IDENTIFIERS],
            pre_release_count: 0,
            build_count: 0,
            arena_used: 0,
            arena: [0; ARENA_CAPACITY],
        }
    }

    /// Parses `text` into a new record.
    pub fn parse(text: &str) -> Result<Self, SemyError> {
        let mut version = Self::new();
        version.parse_into(text)?;
        Ok(version)
    }

    /// Parses `text` into this record, replacing whatever it held before.
    ///
    /// On failure the record is reset to the zeroed state.
    pub fn parse_into(&mut self, text: &str) -> Result<(), SemyError> {
        self.clear();
        let result = grammar::parse(self, text.as_bytes());
        match result {
            Ok(()) => log::trace!("parsed {:?} into {:?}", text, self),
            Err(err) => {
                log::trace!("failed to parse {:?}: {:?}", text, err);
                self.clear();
            }
        }
        result
    }

    fn clear(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn major(&self) -> i32 {
        self.core[MAJOR]
    }

    #[inline]
    pub fn minor(&self) -> i32 {
        self.core[MINOR]
    }

    #[inline]
    pub fn patch(&self) -> i32 {
        self.core[PATCH]
    }

    /// `[major, minor, patch]`.
    #[inline]
    pub fn core(&self) -> [i32; 3] {
        self.core
    }

    #[inline]
    pub fn pre_release_count(&self) -> usize {
        self.pre_release_count as usize
    }

    #[inline]
    pub fn build_count(&self) -> usize {
        self.build_count as usize
    }

    /// Returns `true` if the version carries at least one pre-release identifier.
    #[inline]
    pub fn is_pre_release(&self) -> bool {
        self.pre_release_count > 0
    }

    /// Text of the pre-release identifier at `index`, or `None` when out of range.
    pub fn pre_release(&self, index: usize) -> Option<&str> {
        self.pre_release_identifier(index).map(|id| id.as_str())
    }

    /// The pre-release identifier at `index`, with its numeric value if it has one.
    pub fn pre_release_identifier(&self, index: usize) -> Option<PreRelease<'_>> {
        self.pre_release_entries()
            .get(index)
            .map(|entry| self.view(entry))
    }

    /// Text of the build identifier at `index`, or `None` when out of range.
    pub fn build(&self, index: usize) -> Option<&str> {
        self.build_entries().get(index).map(|&text| self.text(text))
    }

    /// Pre-release identifiers in precedence order.
    pub fn pre_release_identifiers(&self) -> impl ExactSizeIterator<Item = PreRelease<'_>> + '_ {
        self.pre_release_entries()
            .iter()
            .map(move |entry| self.view(entry))
    }

    /// Build identifiers in input order.
    pub fn build_identifiers(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.build_entries().iter().map(move |&text| self.text(text))
    }

    /// Bytes of the arena consumed by interned identifiers.
    #[inline]
    pub fn arena_used(&self) -> usize {
        self.arena_used as usize
    }

    fn pre_release_entries(&self) -> &[PreReleaseEntry] {
        &self.pre_release[..self.pre_release_count()]
    }

    fn build_entries(&self) -> &[TextRef] {
        &self.build[..self.build_count()]
    }

    fn view(&self, entry: &PreReleaseEntry) -> PreRelease<'_> {
        let text = self.text(entry.text);
        if entry.is_alphanumeric {
            PreRelease::Alphanumeric(text)
        } else {
            PreRelease::Numeric {
                value: entry.numeric_value,
                text,
            }
        }
    }

    /// Resolves an interned offset to the terminated string stored there.
    fn text(&self, offset: TextRef) -> &str {
        let tail = self.arena.get(offset as usize..).unwrap_or_default();
        let len = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
        // Only grammar-approved ASCII is ever interned.
        std::str::from_utf8(&tail[..len]).unwrap_or_default()
    }

    pub(crate) fn set_core(&mut self, core: [i32; 3]) {
        self.core = core;
    }

    /// Copies `bytes` plus a terminator into the arena and returns its offset.
    pub(crate) fn intern(&mut self, bytes: &[u8]) -> Result<TextRef, SemyError> {
        let start = self.arena_used();
        let end = start + bytes.len();
        if end >= ARENA_CAPACITY {
            return Err(SemyError::LimitsExceeded);
        }
        self.arena[start..end].copy_from_slice(bytes);
        self.arena[end] = 0;
        self.arena_used = (end + 1) as u16;
        Ok(start as TextRef)
    }

    /// Appends a pre-release identifier, converting numeric ones to `i32`.
    pub(crate) fn push_pre_release(
        &mut self,
        is_alphanumeric: bool,
        bytes: &[u8],
    ) -> Result<(), SemyError> {
        let index = self.pre_release_count();
        if index >= MAX_IDENTIFIERS {
            return Err(SemyError::LimitsExceeded);
        }
        let numeric_value = if is_alphanumeric {
            0
        } else {
            text_to_int(bytes)?
        };
        let text = self.intern(bytes)?;
        self.pre_release[index] = PreReleaseEntry {
            numeric_value,
            text,
            is_alphanumeric,
        };
        self.pre_release_count += 1;
        Ok(())
    }

    /// Appends a build identifier. Build text is never converted to a number.
    pub(crate) fn push_build(&mut self, bytes: &[u8]) -> Result<(), SemyError> {
        let index = self.build_count();
        if index >= MAX_IDENTIFIERS {
            return Err(SemyError::LimitsExceeded);
        }
        self.build[index] = self.intern(bytes)?;
        self.build_count += 1;
        Ok(())
    }
}

impl Default for SemVer {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for SemVer {
    type Err = SemyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())?;
        for (i, id) in self.pre_release_identifiers().enumerate() {
            f.write_str(if i == 0 { "-" } else { "." })?;
            f.write_str(id.as_str())?;
        }
        for (i, id) in self.build_identifiers().enumerate() {
            f.write_str(if i == 0 { "+" } else { "." })?;
            f.write_str(id)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SemVer")
            .field("major", &self.major())
            .field("minor", &self.minor())
            .field("patch", &self.patch())
            .field(
                "pre_release",
                &self.pre_release_identifiers().collect::<Vec<_>>(),
            )
            .field("build", &self.build_identifiers().collect::<Vec<_>>())
            .finish()
    }
}

/// Converts a run of ASCII digits to an `i32`.
///
/// Fails with [`SemyError::LimitsExceeded`] as soon as the accumulated value
/// exceeds `i32::MAX`. The caller guarantees `digits` holds only `0`-`9`.
pub(crate) fn text_to_int(digits: &[u8]) -> Result<i32, SemyError> {
    let mut value: u64 = 0;
    for &b in digits {
        debug_assert!(b.is_ascii_digit(), "non-digit byte {b:#04x}");
        value = value * 10 + u64::from(b - b'0');
        if value > i32::MAX as u64 {
            return Err(SemyError::LimitsExceeded);
        }
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_zeroed() {
        let v = SemVer::new();
        assert_eq!(v.core(), [0, 0, 0]);
        assert_eq!(v.pre_release_count(), 0);
        assert_eq!(v.build_count(), 0);
        assert_eq!(v.arena_used(), 0);
        assert_eq!(v.pre_release(0), None);
        assert_eq!(v.build(0), None);
        assert_eq!(v.to_string(), "0.0.0");
    }

    #[test]
    fn record_size_matches_type() {
        assert_eq!(RECORD_SIZE, mem::size_of::<SemVer>());
        assert!(RECORD_SIZE >= ARENA_CAPACITY + MAX_IDENTIFIERS * 2);
    }

    #[test]
    fn text_to_int_limits() {
        assert_eq!(text_to_int(b"0"), Ok(0));
        assert_eq!(text_to_int(b"0042"), Ok(42));
        assert_eq!(text_to_int(b"2147483647"), Ok(i32::MAX));
        assert_eq!(text_to_int(b"2147483648"), Err(SemyError::LimitsExceeded));
        assert_eq!(
            text_to_int(b"99999999999999999999999999"),
            Err(SemyError::LimitsExceeded)
        );
    }

    #[test]
    fn intern_is_append_only_and_terminated() {
        let mut v = SemVer::new();
        let a = v.intern(b"alpha").unwrap();
        let b = v.intern(b"1").unwrap();
        assert_eq!((a, b), (0, 6));
        assert_eq!(v.arena_used(), 8);
        assert_eq!(v.text(a), "alpha");
        assert_eq!(v.text(b), "1");
        assert_eq!(v.arena[5], 0);
        assert_eq!(v.arena[7], 0);
    }

    #[test]
    fn intern_fails_when_arena_is_full() {
        let mut v = SemVer::new();
        let chunk = [b'a'; 60];
        for _ in 0..4 {
            v.intern(&chunk).unwrap();
        }
        assert_eq!(v.arena_used(), 244);
        assert_eq!(v.intern(b""), Err(SemyError::LimitsExceeded));

        let mut v = SemVer::new();
        assert_eq!(
            v.intern(&[b'x'; ARENA_CAPACITY]),
            Err(SemyError::LimitsExceeded)
        );
        assert_eq!(v.arena_used(), 0);
        v.intern(&[b'x'; ARENA_CAPACITY - 1]).unwrap();
        assert_eq!(v.arena_used(), ARENA_CAPACITY);
    }

    #[test]
    fn push_pre_release_converts_numeric() {
        let mut v = SemVer::new();
        v.push_pre_release(true, b"rc").unwrap();
        v.push_pre_release(false, b"11").unwrap();
        assert_eq!(v.pre_release_count(), 2);
        assert_eq!(
            v.pre_release_identifier(0),
            Some(PreRelease::Alphanumeric("rc"))
        );
        assert_eq!(
            v.pre_release_identifier(1),
            Some(PreRelease::Numeric {
                value: 11,
                text: "11"
            })
        );
        assert_eq!(
            v.push_pre_release(false, b"2147483648"),
            Err(SemyError::LimitsExceeded)
        );
        assert_eq!(v.pre_release_count(), 2);
    }

    #[test]
    fn push_respects_identifier_capacity() {
        let mut v = SemVer::new();
        for _ in 0..MAX_IDENTIFIERS {
            v.push_build(b"b").unwrap();
        }
        assert_eq!(v.push_build(b"b"), Err(SemyError::LimitsExceeded));
        assert_eq!(v.build_count(), MAX_IDENTIFIERS);

        for _ in 0..MAX_IDENTIFIERS {
            v.push_pre_release(false, b"0").unwrap();
        }
        assert_eq!(
            v.push_pre_release(true, b"a"),
            Err(SemyError::LimitsExceeded)
        );
    }

    #[test]
    fn accessors_and_iterators() {
        let v = SemVer::parse("10.20.30-alpha.7.x-y+build.007").unwrap();
        assert_eq!(v.core(), [10, 20, 30]);
        assert!(v.is_pre_release());
        let ids: Vec<_> = v.pre_release_identifiers().map(|id| id.as_str()).collect();
        assert_eq!(ids, ["alpha", "7", "x-y"]);
        let values: Vec<_> = v
            .pre_release_identifiers()
            .map(|id| id.numeric_value())
            .collect();
        assert_eq!(values, [None, Some(7), None]);
        assert_eq!(v.build_identifiers().collect::<Vec<_>>(), ["build", "007"]);
        assert_eq!(v.pre_release(3), None);
        assert_eq!(v.build(2), None);
        assert_eq!(v.pre_release_identifiers().len(), 3);
    }

    #[test]
    fn failed_reparse_resets_record() {
        let mut v = SemVer::parse("1.2.3-alpha+b").unwrap();
        assert_eq!(v.parse_into("1.2.3-alpha..x"), Err(SemyError::BadSyntax));
        assert_eq!(v.core(), [0, 0, 0]);
        assert_eq!(v.pre_release_count(), 0);
        assert_eq!(v.build_count(), 0);
        assert_eq!(v.arena_used(), 0);
    }

    #[test]
    fn reparse_replaces_contents() {
        let mut v = SemVer::parse("9.9.9-a.b.c+x.y").unwrap();
        v.parse_into("1.0.0-rc").unwrap();
        assert_eq!(v.to_string(), "1.0.0-rc");
        assert_eq!(v.arena_used(), 3);
    }

    #[test]
    fn from_str_and_debug() {
        let v: SemVer = "1.0.0-x.1+sha".parse().unwrap();
        let dbg = format!("{v:?}");
        assert!(dbg.contains("major: 1"));
        assert!(dbg.contains("Alphanumeric(\"x\")"));
        assert!(dbg.contains("\"sha\""));
        assert!("nope".parse::<SemVer>().is_err());
    }

    #[test]
    fn pre_release_display() {
        let v = SemVer::parse("1.0.0-rc.5").unwrap();
        let shown: Vec<String> = v.pre_release_identifiers().map(|id| id.to_string()).collect();
        assert_eq!(shown, ["rc", "5"]);
    }
}
