//! Candidate task validation.
//!
//! # Responsibility
//! - Trim candidate text and check it against the configured rule tables.
//! - Map every failure to one fixed, user-facing rejection reason.
//!
//! # Invariants
//! - Rules are evaluated in a fixed order; the first failing rule wins.
//! - On acceptance the returned text is the trimmed candidate.
//! - Duplicate detection is exact and case-sensitive.

use crate::rules::config::{RulesConfigError, ValidationRules};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static ONLY_DIGITS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("valid digits regex"));
static DEFAULT_VALIDATOR: Lazy<TaskValidator> = Lazy::new(|| {
    TaskValidator::new(ValidationRules::default()).expect("default validation rules are valid")
});

/// `Ok` carries the canonical trimmed text to store.
pub type ValidationResult = Result<String, RejectionReason>;

/// Why a candidate task was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    Empty,
    TooShort { min_chars: usize },
    TooLong { max_chars: usize },
    OnlyDigits,
    Duplicate,
    InvalidCharacters,
    RepeatedCharacters,
    LowercaseInitial,
    ForbiddenWord,
}

impl RejectionReason {
    /// Stable identifier for logs and FFI envelopes.
    pub fn code(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::OnlyDigits => "only_digits",
            Self::Duplicate => "duplicate",
            Self::InvalidCharacters => "invalid_characters",
            Self::RepeatedCharacters => "repeated_characters",
            Self::LowercaseInitial => "lowercase_initial",
            Self::ForbiddenWord => "forbidden_word",
        }
    }

    /// User-facing message shown in the error alert.
    pub fn message(self) -> String {
        self.to_string()
    }
}

impl Display for RejectionReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "task cannot be empty."),
            Self::TooShort { min_chars } => {
                write!(f, "task must have at least {min_chars} characters.")
            }
            Self::TooLong { max_chars } => {
                write!(f, "task cannot exceed {max_chars} characters.")
            }
            Self::OnlyDigits => write!(f, "task cannot contain only numbers."),
            Self::Duplicate => write!(f, "this task has already been added."),
            Self::InvalidCharacters => write!(f, "task contains invalid characters."),
            Self::RepeatedCharacters => {
                write!(f, "task cannot have excessively repeated characters.")
            }
            Self::LowercaseInitial => {
                write!(f, "the first letter of the task must be uppercase.")
            }
            Self::ForbiddenWord => write!(f, "task contains forbidden words."),
        }
    }
}

impl Error for RejectionReason {}

/// Validates candidate text against the default rule tables.
pub fn validate<S: AsRef<str>>(candidate: &str, existing: &[S]) -> ValidationResult {
    default_validator().validate(candidate, existing)
}

/// Returns the process-wide validator built from default rules.
pub fn default_validator() -> &'static TaskValidator {
    &DEFAULT_VALIDATOR
}

/// Rule tables plus derived matchers.
#[derive(Debug, Clone)]
pub struct TaskValidator {
    rules: ValidationRules,
    symbol_class: Option<Regex>,
    forbidden_lowercase: Vec<String>,
}

impl TaskValidator {
    /// Builds a validator after checking rule table consistency.
    pub fn new(rules: ValidationRules) -> Result<Self, RulesConfigError> {
        rules.validate()?;
        let symbol_class = compile_symbol_class(&rules.disallowed_symbols)?;
        let forbidden_lowercase = rules
            .forbidden_words
            .iter()
            .map(|word| word.trim().to_lowercase())
            .collect();
        Ok(Self {
            rules,
            symbol_class,
            forbidden_lowercase,
        })
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Checks `candidate` against `existing` accepted entries.
    ///
    /// Rule order:
    /// empty, too short, too long, only digits, duplicate, invalid
    /// characters, repeated characters, lowercase initial, forbidden word.
    pub fn validate<S: AsRef<str>>(&self, candidate: &str, existing: &[S]) -> ValidationResult {
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            return Err(RejectionReason::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count < self.rules.min_chars {
            return Err(RejectionReason::TooShort {
                min_chars: self.rules.min_chars,
            });
        }
        if char_count > self.rules.max_chars {
            return Err(RejectionReason::TooLong {
                max_chars: self.rules.max_chars,
            });
        }

        if ONLY_DIGITS_RE.is_match(trimmed) {
            return Err(RejectionReason::OnlyDigits);
        }

        if existing
            .iter()
            .any(|entry| entry.as_ref().trim() == trimmed)
        {
            return Err(RejectionReason::Duplicate);
        }

        if self
            .symbol_class
            .as_ref()
            .is_some_and(|class| class.is_match(trimmed))
        {
            return Err(RejectionReason::InvalidCharacters);
        }

        if longest_run(trimmed) >= self.rules.repeat_run_limit {
            return Err(RejectionReason::RepeatedCharacters);
        }

        let starts_uppercase = trimmed
            .chars()
            .next()
            .is_some_and(|first| self.rules.initial_letter.accepts(first));
        if !starts_uppercase {
            return Err(RejectionReason::LowercaseInitial);
        }

        let lowered = trimmed.to_lowercase();
        if self
            .forbidden_lowercase
            .iter()
            .any(|word| lowered.contains(word.as_str()))
        {
            return Err(RejectionReason::ForbiddenWord);
        }

        Ok(trimmed.to_string())
    }
}

impl Default for TaskValidator {
    fn default() -> Self {
        default_validator().clone()
    }
}

fn compile_symbol_class(symbols: &str) -> Result<Option<Regex>, RulesConfigError> {
    if symbols.is_empty() {
        return Ok(None);
    }
    let mut buffer = [0_u8; 4];
    let escaped = symbols
        .chars()
        .map(|symbol| regex::escape(symbol.encode_utf8(&mut buffer)))
        .collect::<String>();
    Ok(Some(Regex::new(&format!("[{escaped}]"))?))
}

/// Length of the longest run of one repeated character.
fn longest_run(value: &str) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut previous = None;
    for ch in value.chars() {
        if previous == Some(ch) {
            current += 1;
        } else {
            previous = Some(ch);
            current = 1;
        }
        longest = longest.max(current);
    }
    longest
}
