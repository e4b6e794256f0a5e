use todaytasks_core::rules::config::{
    DEFAULT_DISALLOWED_SYMBOLS, DEFAULT_FORBIDDEN_WORDS, DEFAULT_MAX_CHARS, DEFAULT_MIN_CHARS,
    DEFAULT_REPEAT_RUN_LIMIT,
};
use todaytasks_core::{
    default_rules, CharRange, InitialLetterRule, RejectionReason, RulesConfigError, TaskValidator,
    ValidationRules,
};

const NONE: &[&str] = &[];

#[test]
fn default_rules_enumerate_recognized_entries() {
    let rules = default_rules();
    assert_eq!(rules.min_chars, DEFAULT_MIN_CHARS);
    assert_eq!(rules.max_chars, DEFAULT_MAX_CHARS);
    assert_eq!(rules.repeat_run_limit, DEFAULT_REPEAT_RUN_LIMIT);
    assert_eq!(rules.disallowed_symbols, r#"@#$%^&*()_+=[]{};':"\|,.<>/?"#);
    assert_eq!(
        rules.forbidden_words,
        vec!["palavrão", "ofensivo", "proibido"]
    );
    assert_eq!(rules.initial_letter, InitialLetterRule::UnicodeUppercase);
    assert_eq!(DEFAULT_DISALLOWED_SYMBOLS.chars().count(), 28);
    assert_eq!(DEFAULT_FORBIDDEN_WORDS.len(), 3);
    rules.validate().expect("defaults are consistent");
}

#[test]
fn empty_document_yields_defaults() {
    let rules = ValidationRules::from_json("{}").expect("empty object is valid");
    assert_eq!(&rules, default_rules());
}

#[test]
fn partial_document_overrides_named_fields() {
    let rules = ValidationRules::from_json(
        r#"{
            "forbidden_words": ["spam"],
            "initial_letter": {
                "kind": "ranges",
                "ranges": [{"start": "A", "end": "Z"}, {"start": "À", "end": "Ÿ"}]
            }
        }"#,
    )
    .expect("document is valid");

    assert_eq!(rules.forbidden_words, vec!["spam"]);
    assert_eq!(rules.initial_letter, InitialLetterRule::portuguese_source_ranges());
    assert_eq!(rules.min_chars, DEFAULT_MIN_CHARS);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = ValidationRules::from_json(r#"{"min_length": 3}"#).expect_err("typo must fail");
    assert!(matches!(err, RulesConfigError::Parse(_)));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn inconsistent_tables_are_rejected() {
    assert!(matches!(
        ValidationRules::from_json(r#"{"min_chars": 0}"#),
        Err(RulesConfigError::ZeroMinChars)
    ));
    assert!(matches!(
        ValidationRules::from_json(r#"{"min_chars": 20, "max_chars": 10}"#),
        Err(RulesConfigError::InvalidLengthBounds { min: 20, max: 10 })
    ));
    assert!(matches!(
        ValidationRules::from_json(r#"{"repeat_run_limit": 1}"#),
        Err(RulesConfigError::InvalidRepeatRunLimit(1))
    ));
    assert!(matches!(
        ValidationRules::from_json(r#"{"disallowed_symbols": "@a"}"#),
        Err(RulesConfigError::InvalidDisallowedSymbol('a'))
    ));
    assert!(matches!(
        ValidationRules::from_json(r#"{"forbidden_words": ["ok", "  "]}"#),
        Err(RulesConfigError::EmptyForbiddenWord)
    ));
    let err = ValidationRules::from_json(
        r#"{"initial_letter": {"kind": "ranges", "ranges": [{"start": "Z", "end": "A"}]}}"#,
    )
    .expect_err("inverted range must fail");
    assert!(matches!(
        err,
        RulesConfigError::InvertedCharRange(CharRange { start: 'Z', end: 'A' })
    ));
    assert!(err.to_string().contains("inverted"));
}

#[test]
fn validator_new_rejects_inconsistent_rules() {
    let result = TaskValidator::new(ValidationRules {
        max_chars: 2,
        ..ValidationRules::default()
    });
    assert!(matches!(
        result,
        Err(RulesConfigError::InvalidLengthBounds { min: 5, max: 2 })
    ));
}

#[test]
fn portuguese_ranges_reproduce_raw_span() {
    let validator = TaskValidator::new(ValidationRules {
        initial_letter: InitialLetterRule::portuguese_source_ranges(),
        ..ValidationRules::default()
    })
    .expect("rules are valid");

    assert_eq!(
        validator.validate("Ária final", NONE),
        Ok("Ária final".to_string())
    );
    // Lowercase accented letters sit inside U+00C0..=U+0178.
    assert_eq!(
        validator.validate("água nas plantas", NONE),
        Ok("água nas plantas".to_string())
    );
    assert_eq!(
        validator.validate("agua nas plantas", NONE),
        Err(RejectionReason::LowercaseInitial)
    );
}

#[test]
fn empty_symbol_set_disables_the_symbol_rule() {
    let validator = TaskValidator::new(ValidationRules {
        disallowed_symbols: String::new(),
        ..ValidationRules::default()
    })
    .expect("rules are valid");

    assert_eq!(
        validator.validate("Buy eggs, milk.", NONE),
        Ok("Buy eggs, milk.".to_string())
    );
}

#[test]
fn custom_symbols_with_regex_metacharacters_compile() {
    let validator = TaskValidator::new(ValidationRules {
        disallowed_symbols: r"-^]\[~&".to_string(),
        ..ValidationRules::default()
    })
    .expect("metacharacters are escaped");

    for candidate in ["Plan - trip", "Up ^ here", "Close ] now", "A ~ tilde", "Rock & roll"] {
        assert_eq!(
            validator.validate(candidate, NONE),
            Err(RejectionReason::InvalidCharacters),
            "{candidate}"
        );
    }
    assert_eq!(
        validator.validate("Buy eggs, milk", NONE),
        Ok("Buy eggs, milk".to_string())
    );
}
