//! Keyword-driven tone rules.
//!
//! # Responsibility
//! - Hold the ordered category -> keyword table used for tone tagging.
//! - Evaluate rules against lower-cased text, first match wins.
//!
//! # Invariants
//! - Rule order is the priority order; it is never re-sorted.
//! - Matching is substring-based, so `logical` matches `logic`.
//! - `Tone::Neutral` is the fallback and never appears as a rule.

use crate::model::category::Tone;
use serde::{Deserialize, Serialize};

/// One tone category with the keywords that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneRule {
    pub tone: Tone,
    pub keywords: Vec<String>,
}

impl ToneRule {
    pub fn new<I, S>(tone: Tone, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tone,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
    }
}

/// Ordered tone rule table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToneRules {
    rules: Vec<ToneRule>,
}

impl ToneRules {
    /// Builds a table from rules in priority order.
    ///
    /// `Classifier::new` validates the table before it is used.
    pub fn new(rules: Vec<ToneRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ToneRule] {
        &self.rules
    }

    /// Returns the first matching tone, or `Tone::Neutral`.
    pub fn classify(&self, text: &str) -> Tone {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(lowered.as_str()))
            .map(|rule| rule.tone)
            .unwrap_or(Tone::Neutral)
    }

    pub(crate) fn rules_mut(&mut self) -> &mut Vec<ToneRule> {
        &mut self.rules
    }
}

impl Default for ToneRules {
    fn default() -> Self {
        Self::new(vec![
            ToneRule::new(Tone::Deep, ["feel", "heart", "sad"]),
            ToneRule::new(Tone::Warm, ["hope", "love", "light"]),
            ToneRule::new(Tone::Cool, ["think", "logic", "structure"]),
            ToneRule::new(Tone::Soft, ["gentle", "quiet", "soft"]),
        ])
    }
}
