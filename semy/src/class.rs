//! Lexical character classification.
//!
//! The Semantic Versioning grammar only knows four character classes over the
//! ASCII alphabet: digits, positive digits, letters, and non-digits (letters
//! plus `-`). Each byte value maps to a [`CharClass`] bit set through a
//! 256-entry table that is built at compile time, so classifying a byte is a
//! single indexed load.
//!
//! ```rust
//! # use semy::class::{self, CharClass};
//! assert!(class::classify(b'7').contains(CharClass::POSITIVE_DIGIT));
//! assert!(class::is_non_digit(b'-'));
//! assert!(!class::is_letter(b'_'));
//! assert_eq!(class::classify(0xC3), CharClass::NONE);
//! ```

use std::fmt;
use std::ops::BitOr;

/// A set of character classes, stored as bit flags.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharClass(u8);

impl CharClass {
    /// The empty set: the byte may not appear in a semantic version.
    pub const NONE: Self = Self(0);
    /// `A`-`Z` and `a`-`z`.
    pub const LETTER: Self = Self(0x1);
    /// `0`-`9`.
    pub const DIGIT: Self = Self(0x2);
    /// `1`-`9`.
    pub const POSITIVE_DIGIT: Self = Self(0x4);
    /// Letters and `-`.
    pub const NON_DIGIT: Self = Self(0x8);

    /// Returns the raw flag bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if every class in `other` is also in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no class is set.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl BitOr for CharClass {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Debug for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(CharClass, &str); 4] = [
            (CharClass::LETTER, "LETTER"),
            (CharClass::DIGIT, "DIGIT"),
            (CharClass::POSITIVE_DIGIT, "POSITIVE_DIGIT"),
            (CharClass::NON_DIGIT, "NON_DIGIT"),
        ];
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (class, name) in NAMES {
            if self.contains(class) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

const fn build_table() -> [CharClass; 256] {
    let mut table = [CharClass::NONE; 256];
    let mut i = 0;
    while i < table.len() {
        let b = i as u8;
        let mut class = CharClass::NONE;
        if b.is_ascii_alphabetic() {
            class = class.union(CharClass::LETTER).union(CharClass::NON_DIGIT);
        }
        if b.is_ascii_digit() {
            class = class.union(CharClass::DIGIT);
            if b != b'0' {
                class = class.union(CharClass::POSITIVE_DIGIT);
            }
        }
        if b == b'-' {
            class = class.union(CharClass::NON_DIGIT);
        }
        table[i] = class;
        i += 1;
    }
    table
}

static CHAR_CLASSES: [CharClass; 256] = build_table();

/// Classifies a byte. Total over all byte values.
#[inline]
pub fn classify(b: u8) -> CharClass {
    CHAR_CLASSES[b as usize]
}

#[inline]
pub fn is_letter(b: u8) -> bool {
    classify(b).contains(CharClass::LETTER)
}

#[inline]
pub fn is_digit(b: u8) -> bool {
    classify(b).contains(CharClass::DIGIT)
}

#[inline]
pub fn is_positive_digit(b: u8) -> bool {
    classify(b).contains(CharClass::POSITIVE_DIGIT)
}

#[inline]
pub fn is_non_digit(b: u8) -> bool {
    classify(b).contains(CharClass::NON_DIGIT)
}

/// `<identifier-character> ::= <digit> | <non-digit>`
#[inline]
pub fn is_identifier_char(b: u8) -> bool {
    let class = classify(b);
    class.contains(CharClass::DIGIT) || class.contains(CharClass::NON_DIGIT)
}
