//! Classifier configuration loading and validation.
//!
//! # Responsibility
//! - Carry length thresholds and tone rules as data instead of branches.
//! - Load overrides from a JSON document or the `LIFEOS_CLASSIFIER_CONFIG` file.
//!
//! # Invariants
//! - A config returned by any loader has passed `validated()`.
//! - Sections missing from a document fall back to built-in defaults.
//! - Tone keywords are stored trimmed and lowercase.

use crate::classify::length::LengthThresholds;
use crate::classify::tone::ToneRules;
use crate::model::category::Tone;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable naming a JSON classifier config file.
pub const CLASSIFIER_CONFIG_ENV: &str = "LIFEOS_CLASSIFIER_CONFIG";

/// Full classifier configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Cut points for `spark|fragment|stream`.
    pub thought: LengthThresholds,
    /// Cut points for `whisper|signal|echo`.
    pub message: LengthThresholds,
    /// Tone rules in priority order.
    pub tone: ToneRules,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            thought: LengthThresholds::THOUGHT,
            message: LengthThresholds::MESSAGE,
            tone: ToneRules::default(),
        }
    }
}

impl ClassifierConfig {
    /// Checks invariants and returns the config with normalized keywords.
    ///
    /// # Errors
    /// - Any threshold is zero, or `short >= long`.
    /// - A tone rule names `neutral`, repeats a tone, or has no usable keywords.
    pub fn validated(mut self) -> Result<Self, ConfigValidationError> {
        validate_thresholds("thought", self.thought)?;
        validate_thresholds("message", self.message)?;

        let mut seen = BTreeSet::new();
        for rule in self.tone.rules_mut() {
            if rule.tone == Tone::Neutral {
                return Err(ConfigValidationError::NeutralRule);
            }
            if !seen.insert(rule.tone) {
                return Err(ConfigValidationError::DuplicateTone(rule.tone));
            }
            if rule.keywords.is_empty() {
                return Err(ConfigValidationError::EmptyKeywords(rule.tone));
            }
            for keyword in rule.keywords.iter_mut() {
                let normalized = keyword.trim().to_lowercase();
                if normalized.is_empty() {
                    return Err(ConfigValidationError::BlankKeyword(rule.tone));
                }
                *keyword = normalized;
            }
        }

        Ok(self)
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        parsed.validated().map_err(ConfigError::Invalid)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(raw.as_str())?;
        info!(
            "event=classifier_config_loaded module=classify status=ok rules={}",
            config.tone.rules().len()
        );
        Ok(config)
    }

    /// Loads the file named by `LIFEOS_CLASSIFIER_CONFIG`, or defaults.
    ///
    /// A blank or unset variable selects the built-in defaults.
    pub fn load_from_env() -> Result<Self, ConfigError> {
        match std::env::var(CLASSIFIER_CONFIG_ENV) {
            Ok(raw) if !raw.trim().is_empty() => Self::from_json_file(raw.trim()).map_err(|err| {
                warn!("event=classifier_config_loaded module=classify status=error");
                err
            }),
            _ => Ok(Self::default()),
        }
    }
}

fn validate_thresholds(
    domain: &'static str,
    thresholds: LengthThresholds,
) -> Result<(), ConfigValidationError> {
    if thresholds.short == 0 || thresholds.long == 0 {
        return Err(ConfigValidationError::ZeroThreshold(domain));
    }
    if thresholds.short >= thresholds.long {
        return Err(ConfigValidationError::ThresholdOrder {
            domain,
            short: thresholds.short,
            long: thresholds.long,
        });
    }
    Ok(())
}

/// Declaration-level config problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    ZeroThreshold(&'static str),
    ThresholdOrder {
        domain: &'static str,
        short: usize,
        long: usize,
    },
    NeutralRule,
    DuplicateTone(Tone),
    EmptyKeywords(Tone),
    BlankKeyword(Tone),
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroThreshold(domain) => write!(f, "{domain} thresholds must be non-zero"),
            Self::ThresholdOrder {
                domain,
                short,
                long,
            } => write!(
                f,
                "{domain} threshold short ({short}) must be < long ({long})"
            ),
            Self::NeutralRule => write!(f, "tone rules must not declare the neutral fallback"),
            Self::DuplicateTone(tone) => write!(f, "tone rule declared twice: {tone}"),
            Self::EmptyKeywords(tone) => write!(f, "tone rule has no keywords: {tone}"),
            Self::BlankKeyword(tone) => write!(f, "tone rule has a blank keyword: {tone}"),
        }
    }
}

impl Error for ConfigValidationError {}

/// Config loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    Invalid(ConfigValidationError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config JSON: {err}"),
            Self::Invalid(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifierConfig, ConfigError, ConfigValidationError};
    use crate::classify::length::LengthThresholds;
    use crate::model::category::Tone;

    #[test]
    fn default_config_is_valid() {
        let config = ClassifierConfig::default();
        assert_eq!(config.clone().validated().expect("default valid"), config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = ClassifierConfig::from_json_str(r#"{"thought":{"short":10,"long":20}}"#)
            .expect("partial config");
        assert_eq!(config.thought, LengthThresholds { short: 10, long: 20 });
        assert_eq!(config.message, LengthThresholds::MESSAGE);
        assert_eq!(config.tone, ClassifierConfig::default().tone);
    }

    #[test]
    fn keywords_are_normalized() {
        let config = ClassifierConfig::from_json_str(
            r#"{"tone":[{"tone":"warm","keywords":["  SUNRISE "]}]}"#,
        )
        .expect("config");
        assert_eq!(config.tone.rules()[0].keywords, vec!["sunrise".to_string()]);
    }

    #[test]
    fn rejects_inverted_thresholds() {
        let err = ClassifierConfig::from_json_str(r#"{"message":{"short":300,"long":120}}"#)
            .expect_err("inverted thresholds must fail");
        match err {
            ConfigError::Invalid(ConfigValidationError::ThresholdOrder {
                domain,
                short,
                long,
            }) => {
                assert_eq!(domain, "message");
                assert_eq!((short, long), (300, 120));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_neutral_and_duplicate_rules() {
        let err = ClassifierConfig::from_json_str(
            r#"{"tone":[{"tone":"neutral","keywords":["meh"]}]}"#,
        )
        .expect_err("neutral rule must fail");
        assert!(matches!(
            err,
            ConfigError::Invalid(ConfigValidationError::NeutralRule)
        ));

        let err = ClassifierConfig::from_json_str(
            r#"{"tone":[{"tone":"deep","keywords":["a"]},{"tone":"deep","keywords":["b"]}]}"#,
        )
        .expect_err("duplicate rule must fail");
        assert!(matches!(
            err,
            ConfigError::Invalid(ConfigValidationError::DuplicateTone(Tone::Deep))
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let err = ClassifierConfig::from_json_str(r#"{"mood":{}}"#)
            .expect_err("unknown section must fail");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
