//! Core logic for LifeOS views.
//! Views call into this crate for draft handoff and content classification.

pub mod classify;
pub mod handoff;
pub mod logging;
pub mod model;

pub use classify::config::{
    ClassifierConfig, ConfigError, ConfigValidationError, CLASSIFIER_CONFIG_ENV,
};
pub use classify::length::LengthThresholds;
pub use classify::tone::{ToneRule, ToneRules};
pub use classify::{
    classify_message_length, classify_thought_length, classify_tone, Classification, Classifier,
};
pub use handoff::mailbox::{DraftMailbox, DraftState};
pub use handoff::prefill::{ComposerPrefill, LengthCategory};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{CategoryParseError, MessageLength, ThoughtLength, Tone};
pub use model::draft::{DraftId, DraftPayload, DraftRoute};

/// Minimal health-check API for shell wiring.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
