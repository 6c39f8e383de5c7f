//! Classification category enumerations.
//!
//! # Responsibility
//! - Define the closed label sets produced by the content classifiers.
//! - Provide stable lowercase ids shared by display styling and tagging.
//!
//! # Invariants
//! - `as_str` and `FromStr` are exact inverses for every variant.
//! - Serialized form equals `as_str`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Length bucket for captured thought fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThoughtLength {
    /// Short flash of an idea.
    Spark,
    /// Medium-length note.
    Fragment,
    /// Long free-flowing capture.
    Stream,
}

/// Length bucket for echo messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageLength {
    Whisper,
    Signal,
    Echo,
}

/// Emotional register assigned by keyword matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Deep,
    Warm,
    Cool,
    Soft,
    /// Fallback when no keyword group matches.
    Neutral,
}

impl ThoughtLength {
    pub const ALL: [ThoughtLength; 3] = [Self::Spark, Self::Fragment, Self::Stream];

    /// Stable string id used for styling and storage tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spark => "spark",
            Self::Fragment => "fragment",
            Self::Stream => "stream",
        }
    }
}

impl MessageLength {
    pub const ALL: [MessageLength; 3] = [Self::Whisper, Self::Signal, Self::Echo];

    /// Stable string id used for styling and storage tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whisper => "whisper",
            Self::Signal => "signal",
            Self::Echo => "echo",
        }
    }
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Self::Deep,
        Self::Warm,
        Self::Cool,
        Self::Soft,
        Self::Neutral,
    ];

    /// Stable string id used for styling and storage tags.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Deep => "deep",
            Self::Warm => "warm",
            Self::Cool => "cool",
            Self::Soft => "soft",
            Self::Neutral => "neutral",
        }
    }
}

/// Parse error for category string ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryParseError {
    /// Category domain that rejected the value (`thought|message|tone`).
    pub domain: &'static str,
    pub value: String,
}

impl Display for CategoryParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} category: `{}`", self.domain, self.value)
    }
}

impl Error for CategoryParseError {}

fn parse_category<T: Copy>(
    domain: &'static str,
    all: &[T],
    as_str: fn(T) -> &'static str,
    value: &str,
) -> Result<T, CategoryParseError> {
    let normalized = value.trim();
    all.iter()
        .copied()
        .find(|candidate| as_str(*candidate) == normalized)
        .ok_or_else(|| CategoryParseError {
            domain,
            value: normalized.to_string(),
        })
}

impl FromStr for ThoughtLength {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_category("thought", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for MessageLength {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_category("message", &Self::ALL, Self::as_str, value)
    }
}

impl FromStr for Tone {
    type Err = CategoryParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        parse_category("tone", &Self::ALL, Self::as_str, value)
    }
}

impl Display for ThoughtLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for MessageLength {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Tone {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryParseError, MessageLength, ThoughtLength, Tone};

    #[test]
    fn string_ids_parse_back_to_same_variant() {
        for tone in Tone::ALL {
            assert_eq!(tone.as_str().parse::<Tone>().expect("tone id"), tone);
        }
        for thought in ThoughtLength::ALL {
            assert_eq!(
                thought.as_str().parse::<ThoughtLength>().expect("thought id"),
                thought
            );
        }
        for message in MessageLength::ALL {
            assert_eq!(
                message.as_str().parse::<MessageLength>().expect("message id"),
                message
            );
        }
    }

    #[test]
    fn rejects_unknown_or_capitalized_ids() {
        let err = "Deep".parse::<Tone>().expect_err("capitalized id must fail");
        assert_eq!(
            err,
            CategoryParseError {
                domain: "tone",
                value: "Deep".to_string(),
            }
        );
        assert!("ripple".parse::<MessageLength>().is_err());
    }

    #[test]
    fn serializes_as_lowercase_id() {
        let json = serde_json::to_value(Tone::Neutral).expect("serialize tone");
        assert_eq!(json, "neutral");
        let decoded: ThoughtLength =
            serde_json::from_value(serde_json::json!("stream")).expect("deserialize thought");
        assert_eq!(decoded, ThoughtLength::Stream);
    }
}
