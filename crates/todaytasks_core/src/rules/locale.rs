//! Locale data for the first-letter capitalization rule.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static UPPERCASE_LETTER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\p{Lu}\p{Lt}]").expect("valid uppercase letter regex"));

/// Inclusive character range, e.g. `A..=Z`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharRange {
    pub start: char,
    pub end: char,
}

impl CharRange {
    pub const fn new(start: char, end: char) -> Self {
        Self { start, end }
    }

    pub fn contains(self, value: char) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns whether `start` does not come after `end`.
    pub fn is_ordered(self) -> bool {
        self.start <= self.end
    }
}

/// Policy deciding which characters count as an uppercase task initial.
///
/// Serialized with a `kind` tag:
/// - `{"kind": "unicode_uppercase"}`
/// - `{"kind": "ranges", "ranges": [{"start": "A", "end": "Z"}]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialLetterRule {
    /// Any letter in general category `Lu` or `Lt`, accented ones included
    /// (`Á`, `Ç`, `Ö`, ...). Uppercase-looking symbols such as `Ⓑ` (`So`)
    /// and `Ⅻ` (`Nl`) are not letters and do not qualify.
    #[default]
    UnicodeUppercase,
    /// Explicit inclusive ranges supplied by the deployment.
    Ranges { ranges: Vec<CharRange> },
}

/// Ranges used by the Portuguese-language release: `A-Z` plus `À-Ÿ`.
///
/// `À-Ÿ` is a raw code point span (U+00C0..=U+0178), so it also admits
/// a handful of non-uppercase characters such as `×` and `ß`.
pub const PORTUGUESE_SOURCE_RANGES: &[CharRange] = &[
    CharRange::new('A', 'Z'),
    CharRange::new('\u{00C0}', '\u{0178}'),
];

impl InitialLetterRule {
    /// Builds the range rule matching the Portuguese-language release.
    pub fn portuguese_source_ranges() -> Self {
        Self::Ranges {
            ranges: PORTUGUESE_SOURCE_RANGES.to_vec(),
        }
    }

    /// Returns whether `value` is an acceptable first character.
    pub fn accepts(&self, value: char) -> bool {
        match self {
            Self::UnicodeUppercase => {
                UPPERCASE_LETTER_RE.is_match(value.encode_utf8(&mut [0; 4]))
            }
            Self::Ranges { ranges } => ranges.iter().any(|range| range.contains(value)),
        }
    }

    /// Returns the first inverted range, if any.
    pub fn first_inverted_range(&self) -> Option<CharRange> {
        match self {
            Self::UnicodeUppercase => None,
            Self::Ranges { ranges } => ranges.iter().copied().find(|range| !range.is_ordered()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CharRange, InitialLetterRule};

    #[test]
    fn unicode_uppercase_accepts_accented_capitals() {
        let rule = InitialLetterRule::UnicodeUppercase;
        for value in ['A', 'Z', 'Á', 'Ç', 'É', 'Õ', 'Ü'] {
            assert!(rule.accepts(value), "{value} should be accepted");
        }
        for value in ['a', 'ç', 'é', '1', ' ', 'ß'] {
            assert!(!rule.accepts(value), "{value} should be rejected");
        }
    }

    #[test]
    fn unicode_uppercase_requires_a_letter_category() {
        let rule = InitialLetterRule::UnicodeUppercase;
        // Titlecase digraph (Lt).
        assert!(rule.accepts('ǅ'));
        // Carry the Uppercase property but are a symbol (So) and a number (Nl).
        for value in ['Ⓑ', 'Ⅻ', 'Ⅰ'] {
            assert!(!rule.accepts(value), "{value} should be rejected");
        }
    }

    #[test]
    fn portuguese_ranges_follow_raw_code_points() {
        let rule = InitialLetterRule::portuguese_source_ranges();
        assert!(rule.accepts('B'));
        assert!(rule.accepts('Ã'));
        assert!(rule.accepts('Ÿ'));
        // Inside the raw span even though it is lowercase.
        assert!(rule.accepts('é'));
        assert!(!rule.accepts('b'));
        assert!(!rule.accepts('Ź'));
    }

    #[test]
    fn inverted_range_is_reported() {
        let rule = InitialLetterRule::Ranges {
            ranges: vec![CharRange::new('A', 'Z'), CharRange::new('z', 'a')],
        };
        assert_eq!(rule.first_inverted_range(), Some(CharRange::new('z', 'a')));
        assert_eq!(
            InitialLetterRule::portuguese_source_ranges().first_inverted_range(),
            None
        );
    }
}
