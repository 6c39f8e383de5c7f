//! Content classification heuristics.
//!
//! # Responsibility
//! - Bucket free text by length for thought and message displays.
//! - Tag free text with a tone by ordered keyword rules.
//!
//! # Invariants
//! - Every classifier is a pure function of its input text and config.
//! - No input string, including empty or non-ASCII text, can fail or panic.

pub mod config;
pub mod length;
pub mod tone;

use crate::classify::config::{ClassifierConfig, ConfigValidationError};
use crate::model::category::{MessageLength, ThoughtLength, Tone};
use once_cell::sync::Lazy;

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(Classifier::default);

/// All three categories for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub thought: ThoughtLength,
    pub message: MessageLength,
    pub tone: Tone,
}

/// Classifier bound to one validated configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Creates a classifier, validating and normalizing `config` first.
    ///
    /// `Classifier::default()` is the infallible path for built-in rules.
    pub fn new(config: ClassifierConfig) -> Result<Self, ConfigValidationError> {
        Ok(Self {
            config: config.validated()?,
        })
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn thought_length(&self, text: &str) -> ThoughtLength {
        self.config.thought.thought(text)
    }

    pub fn message_length(&self, text: &str) -> MessageLength {
        self.config.message.message(text)
    }

    pub fn tone(&self, text: &str) -> Tone {
        self.config.tone.classify(text)
    }

    pub fn classify(&self, text: &str) -> Classification {
        Classification {
            thought: self.thought_length(text),
            message: self.message_length(text),
            tone: self.tone(text),
        }
    }
}

/// Buckets thought text: `< 80` spark, `< 200` fragment, else stream.
pub fn classify_thought_length(text: &str) -> ThoughtLength {
    DEFAULT_CLASSIFIER.thought_length(text)
}

/// Buckets echo text: `< 120` whisper, `< 300` signal, else echo.
pub fn classify_message_length(text: &str) -> MessageLength {
    DEFAULT_CLASSIFIER.message_length(text)
}

/// Tags text with the first matching default tone rule.
///
/// Priority: deep, warm, cool, soft; `neutral` when nothing matches.
pub fn classify_tone(text: &str) -> Tone {
    DEFAULT_CLASSIFIER.tone(text)
}
