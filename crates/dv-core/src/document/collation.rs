//! Locale-aware comparison of display names.
//!
//! Approximates the root collation order users expect from a file browser:
//! case is ignored at the first level (`apple` < `Banana` < `cherry`),
//! whitespace and punctuation sort before digits, digits before letters.
//! When two names differ only by case, lowercase sorts first.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    Other,
}

fn class_of(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if c.is_ascii_punctuation() {
        CharClass::Punctuation
    } else if c.is_numeric() {
        CharClass::Digit
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

fn primary_keys(s: &str) -> impl Iterator<Item = (CharClass, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (class_of(c), c))
}

/// 0 for lowercase or caseless, 1 for uppercase.
fn case_keys(s: &str) -> impl Iterator<Item = u8> + '_ {
    s.chars().map(|c| u8::from(c.is_uppercase()))
}

/// Compares two display names for sorting.
pub fn collate(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| case_keys(a).cmp(case_keys(b)))
        .then_with(|| a.cmp(b))
}
