//! SemVer precedence.
//!
//! Versions are ordered by major, minor and patch, then by their pre-release
//! identifiers. A version without pre-release identifiers outranks every
//! pre-release of the same core version. Build metadata never takes part.
//!
//! ```rust
//! # use semy::{SemVer, compare};
//! let rc = SemVer::parse("1.0.0-rc.1").unwrap();
//! let release = SemVer::parse("1.0.0").unwrap();
//! assert_eq!(compare(&rc, &release), -1);
//! assert!(rc < release);
//! ```

use crate::{PreRelease, SemVer};
use std::cmp::Ordering;

/// Compares two versions by precedence, returning `-1`, `0` or `1`.
pub fn compare(a: &SemVer, b: &SemVer) -> i32 {
    match precedence(a, b) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}

fn precedence(a: &SemVer, b: &SemVer) -> Ordering {
    let core = a.core().cmp(&b.core());
    if core != Ordering::Equal {
        return core;
    }

    for (x, y) in a.pre_release_identifiers().zip(b.pre_release_identifiers()) {
        let ord = identifier_precedence(x, y);
        if ord != Ordering::Equal {
            return ord;
        }
    }

    let (na, nb) = (a.pre_release_count(), b.pre_release_count());
    if na.min(nb) > 0 {
        // One list is a prefix of the other: the longer one is higher.
        na.cmp(&nb)
    } else {
        // A release outranks any of its pre-releases.
        nb.cmp(&na)
    }
}

fn identifier_precedence(x: PreRelease<'_>, y: PreRelease<'_>) -> Ordering {
    match (x, y) {
        (PreRelease::Numeric { value: x, .. }, PreRelease::Numeric { value: y, .. }) => x.cmp(&y),
        (PreRelease::Alphanumeric(x), PreRelease::Alphanumeric(y)) => {
            x.as_bytes().cmp(y.as_bytes())
        }
        (PreRelease::Numeric { .. }, PreRelease::Alphanumeric(_)) => Ordering::Less,
        (PreRelease::Alphanumeric(_), PreRelease::Numeric { .. }) => Ordering::Greater,
    }
}

impl Ord for SemVer {
    fn cmp(&self, other: &Self) -> Ordering {
        precedence(self, other)
    }
}

impl PartialOrd for SemVer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Precedence equality: versions differing only in build metadata are equal.
impl PartialEq for SemVer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SemVer {}
