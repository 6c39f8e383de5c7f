use lifeos_core::{
    classify_tone, Classifier, ClassifierConfig, MessageLength, ThoughtLength, Tone, ToneRule,
    ToneRules,
};

#[test]
fn each_keyword_group_maps_to_its_tone() {
    assert_eq!(classify_tone("I feel it"), Tone::Deep);
    assert_eq!(classify_tone("a sad afternoon"), Tone::Deep);
    assert_eq!(classify_tone("there is still hope"), Tone::Warm);
    assert_eq!(classify_tone("morning light"), Tone::Warm);
    assert_eq!(classify_tone("the structure holds"), Tone::Cool);
    assert_eq!(classify_tone("a gentle rain"), Tone::Soft);
    assert_eq!(classify_tone("quiet room"), Tone::Soft);
    assert_eq!(classify_tone("groceries on tuesday"), Tone::Neutral);
}

#[test]
fn deep_wins_over_cool_when_both_match() {
    assert_eq!(classify_tone("I think with my heart"), Tone::Deep);
}

#[test]
fn priority_order_is_deep_warm_cool_soft() {
    assert_eq!(classify_tone("soft light"), Tone::Warm);
    assert_eq!(classify_tone("quiet logic"), Tone::Cool);
    assert_eq!(classify_tone("love and sadness"), Tone::Deep);
}

#[test]
fn matching_is_substring_and_case_insensitive() {
    assert_eq!(classify_tone("LOGICAL steps"), Tone::Cool);
    assert_eq!(classify_tone("Heartbeat"), Tone::Deep);
    // Negation is not understood.
    assert_eq!(classify_tone("I don't feel sad"), Tone::Deep);
}

#[test]
fn non_ascii_and_empty_text_never_fail() {
    assert_eq!(classify_tone(""), Tone::Neutral);
    assert_eq!(classify_tone("静かな夜"), Tone::Neutral);
    assert_eq!(classify_tone("ÉNORME LOVE"), Tone::Warm);
}

#[test]
fn classification_is_deterministic() {
    let classifier = Classifier::default();
    let text = "Hope is a structure I think about";
    let first = classifier.classify(text);
    for _ in 0..10 {
        assert_eq!(classifier.classify(text), first);
    }
    assert_eq!(first.tone, Tone::Warm);
    assert_eq!(first.thought, ThoughtLength::Spark);
    assert_eq!(first.message, MessageLength::Whisper);
}

#[test]
fn configured_rules_replace_default_table() {
    let config = ClassifierConfig {
        tone: ToneRules::new(vec![
            ToneRule::new(Tone::Soft, ["Rain"]),
            ToneRule::new(Tone::Deep, ["heart"]),
        ]),
        ..ClassifierConfig::default()
    };
    let classifier = Classifier::new(config).expect("custom rules are valid");

    assert_eq!(classifier.tone("rain on my heart"), Tone::Soft);
    assert_eq!(classifier.tone("I think"), Tone::Neutral);
}
