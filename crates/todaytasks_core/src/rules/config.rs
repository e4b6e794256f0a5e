//! Validation rule tables and their JSON configuration.
//!
//! # Responsibility
//! - Name every constant the task validator depends on.
//! - Load deployment overrides from JSON and reject inconsistent tables.
//!
//! # Invariants
//! - Rule tables are immutable once constructed.
//! - `min_chars <= max_chars` and `repeat_run_limit >= 2` always hold for a
//!   value returned by `ValidationRules::from_json`.

use crate::rules::locale::{CharRange, InitialLetterRule};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Minimum trimmed task length, in characters.
pub const DEFAULT_MIN_CHARS: usize = 5;
/// Maximum trimmed task length, in characters.
pub const DEFAULT_MAX_CHARS: usize = 100;
/// Run length of one repeated character that triggers rejection.
pub const DEFAULT_REPEAT_RUN_LIMIT: usize = 5;
/// Symbols a task may not contain.
pub const DEFAULT_DISALLOWED_SYMBOLS: &str = r#"@#$%^&*()_+=[]{};':"\|,.<>/?"#;
/// Words a task may not contain, matched case-insensitively as substrings.
pub const DEFAULT_FORBIDDEN_WORDS: &[&str] = &["palavrão", "ofensivo", "proibido"];

static DEFAULT_RULES: Lazy<ValidationRules> = Lazy::new(ValidationRules::default);

/// Returns the process-wide default rule tables.
pub fn default_rules() -> &'static ValidationRules {
    &DEFAULT_RULES
}

/// Complete rule set consulted by `TaskValidator`.
///
/// Missing JSON fields fall back to the defaults above.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationRules {
    pub min_chars: usize,
    pub max_chars: usize,
    pub repeat_run_limit: usize,
    /// Every character of this string is disallowed.
    pub disallowed_symbols: String,
    pub forbidden_words: Vec<String>,
    pub initial_letter: InitialLetterRule,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
            max_chars: DEFAULT_MAX_CHARS,
            repeat_run_limit: DEFAULT_REPEAT_RUN_LIMIT,
            disallowed_symbols: DEFAULT_DISALLOWED_SYMBOLS.to_string(),
            forbidden_words: DEFAULT_FORBIDDEN_WORDS
                .iter()
                .map(|word| word.to_string())
                .collect(),
            initial_letter: InitialLetterRule::default(),
        }
    }
}

impl ValidationRules {
    /// Parses and validates a JSON rules document.
    ///
    /// # Errors
    /// - `RulesConfigError::Parse` for malformed JSON or unknown fields.
    /// - Any table error reported by [`ValidationRules::validate`].
    pub fn from_json(json: &str) -> Result<Self, RulesConfigError> {
        let rules: Self = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Checks table consistency.
    pub fn validate(&self) -> Result<(), RulesConfigError> {
        if self.min_chars == 0 {
            return Err(RulesConfigError::ZeroMinChars);
        }
        if self.min_chars > self.max_chars {
            return Err(RulesConfigError::InvalidLengthBounds {
                min: self.min_chars,
                max: self.max_chars,
            });
        }
        if self.repeat_run_limit < 2 {
            return Err(RulesConfigError::InvalidRepeatRunLimit(
                self.repeat_run_limit,
            ));
        }
        if let Some(symbol) = self
            .disallowed_symbols
            .chars()
            .find(|symbol| symbol.is_alphanumeric() || symbol.is_whitespace())
        {
            return Err(RulesConfigError::InvalidDisallowedSymbol(symbol));
        }
        if self
            .forbidden_words
            .iter()
            .any(|word| word.trim().is_empty())
        {
            return Err(RulesConfigError::EmptyForbiddenWord);
        }
        if let Some(range) = self.initial_letter.first_inverted_range() {
            return Err(RulesConfigError::InvertedCharRange(range));
        }
        Ok(())
    }
}

/// Rule table load/validation errors.
#[derive(Debug)]
pub enum RulesConfigError {
    Parse(serde_json::Error),
    ZeroMinChars,
    InvalidLengthBounds { min: usize, max: usize },
    InvalidRepeatRunLimit(usize),
    InvalidDisallowedSymbol(char),
    EmptyForbiddenWord,
    InvertedCharRange(CharRange),
    SymbolPattern(regex::Error),
}

impl Display for RulesConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid rules document: {err}"),
            Self::ZeroMinChars => write!(f, "min_chars must be at least 1"),
            Self::InvalidLengthBounds { min, max } => {
                write!(f, "min_chars ({min}) must be <= max_chars ({max})")
            }
            Self::InvalidRepeatRunLimit(value) => {
                write!(f, "repeat_run_limit must be at least 2, got {value}")
            }
            Self::InvalidDisallowedSymbol(value) => write!(
                f,
                "disallowed_symbols must not contain letters, digits or whitespace, got `{value}`"
            ),
            Self::EmptyForbiddenWord => write!(f, "forbidden_words cannot contain empty entries"),
            Self::InvertedCharRange(range) => write!(
                f,
                "initial_letter range `{}`..=`{}` is inverted",
                range.start, range.end
            ),
            Self::SymbolPattern(err) => write!(f, "invalid disallowed_symbols pattern: {err}"),
        }
    }
}

impl Error for RulesConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::SymbolPattern(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RulesConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<regex::Error> for RulesConfigError {
    fn from(value: regex::Error) -> Self {
        Self::SymbolPattern(value)
    }
}
