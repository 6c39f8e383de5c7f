use lifeos_core::{
    Classifier, ClassifierConfig, ConfigError, ConfigValidationError, LengthThresholds, Tone,
    ToneRule, ToneRules, CLASSIFIER_CONFIG_ENV,
};
use std::io::Write;

#[test]
fn loads_config_file_and_applies_it() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{
            "thought": {{ "short": 3, "long": 6 }},
            "tone": [
                {{ "tone": "cool", "keywords": ["plan"] }},
                {{ "tone": "warm", "keywords": ["sun"] }}
            ]
        }}"#
    )
    .expect("write config");

    let config = ClassifierConfig::from_json_file(file.path()).expect("config should load");
    let classifier = Classifier::new(config).expect("config should validate");
    assert_eq!(classifier.tone("a sunny plan"), Tone::Cool);
    assert_eq!(classifier.thought_length("abc").as_str(), "fragment");
    assert_eq!(classifier.message_length("abc").as_str(), "whisper");
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");
    let err = ClassifierConfig::from_json_file(&path).expect_err("missing file must fail");
    match &err {
        ConfigError::Io { path: reported, .. } => assert_eq!(reported, &path),
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_reports_parse_error() {
    let err = ClassifierConfig::from_json_str("{ not json").expect_err("bad json must fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn rejects_empty_and_blank_keywords() {
    let err = ClassifierConfig::from_json_str(r#"{"tone":[{"tone":"warm","keywords":[]}]}"#)
        .expect_err("empty keywords must fail");
    assert!(matches!(
        err,
        ConfigError::Invalid(ConfigValidationError::EmptyKeywords(Tone::Warm))
    ));

    let err = ClassifierConfig::from_json_str(r#"{"tone":[{"tone":"soft","keywords":["  "]}]}"#)
        .expect_err("blank keyword must fail");
    assert!(matches!(
        err,
        ConfigError::Invalid(ConfigValidationError::BlankKeyword(Tone::Soft))
    ));
}

#[test]
fn rejects_zero_threshold() {
    let err = ClassifierConfig::from_json_str(r#"{"thought":{"short":0,"long":10}}"#)
        .expect_err("zero threshold must fail");
    assert!(matches!(
        err,
        ConfigError::Invalid(ConfigValidationError::ZeroThreshold("thought"))
    ));
}

#[test]
fn env_override_selects_file_or_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "message": {{ "short": 1, "long": 2 }} }}"#).expect("write config");

    std::env::set_var(CLASSIFIER_CONFIG_ENV, file.path());
    let loaded = ClassifierConfig::load_from_env().expect("env config should load");
    assert_eq!(loaded.message.short, 1);

    std::env::set_var(CLASSIFIER_CONFIG_ENV, "   ");
    let fallback = ClassifierConfig::load_from_env().expect("blank env uses defaults");
    assert_eq!(fallback, ClassifierConfig::default());

    std::env::remove_var(CLASSIFIER_CONFIG_ENV);
    let unset = ClassifierConfig::load_from_env().expect("unset env uses defaults");
    assert_eq!(unset, ClassifierConfig::default());
}

#[test]
fn classifier_new_normalizes_hand_built_keywords() {
    let config = ClassifierConfig {
        tone: ToneRules::new(vec![ToneRule::new(Tone::Deep, [" HEART "])]),
        ..ClassifierConfig::default()
    };
    let classifier = Classifier::new(config).expect("upper-case keyword is valid");
    assert_eq!(classifier.tone("my heart"), Tone::Deep);
    assert_eq!(classifier.config().tone.rules()[0].keywords, vec!["heart"]);
}

#[test]
fn classifier_new_rejects_hand_built_invalid_configs() {
    let blank = ClassifierConfig {
        tone: ToneRules::new(vec![ToneRule::new(Tone::Warm, [""])]),
        ..ClassifierConfig::default()
    };
    assert_eq!(
        Classifier::new(blank).expect_err("blank keyword must fail"),
        ConfigValidationError::BlankKeyword(Tone::Warm)
    );

    let inverted = ClassifierConfig {
        thought: LengthThresholds {
            short: 200,
            long: 80,
        },
        ..ClassifierConfig::default()
    };
    assert_eq!(
        Classifier::new(inverted).expect_err("inverted thresholds must fail"),
        ConfigValidationError::ThresholdOrder {
            domain: "thought",
            short: 200,
            long: 80,
        }
    );
}
