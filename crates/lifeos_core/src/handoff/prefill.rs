//! Consumer-side draft prefill.
//!
//! # Responsibility
//! - Drain the mailbox when a destination view mounts.
//! - Apply the classification selected by the draft's routing hint.
//! - Derive a short plain-text preview for the "continuing from" banner.
//!
//! # Invariants
//! - An empty mailbox yields `ComposerPrefill::empty()`, never an error.
//! - Building a prefill always leaves the mailbox empty.
//! - Tags are trimmed, lowercased and deduplicated in first-seen order.

use crate::classify::Classifier;
use crate::handoff::mailbox::DraftMailbox;
use crate::model::category::{MessageLength, ThoughtLength, Tone};
use crate::model::draft::{DraftPayload, DraftRoute};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\([^)]*\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Length category chosen by the draft route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthCategory {
    Thought(ThoughtLength),
    Message(MessageLength),
}

impl LengthCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Thought(value) => value.as_str(),
            Self::Message(value) => value.as_str(),
        }
    }
}

/// Initial state of a composer view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerPrefill {
    pub content: String,
    /// Origin label; `None` for the default empty state.
    pub source: Option<String>,
    /// Routing hint as staged, unknown values included.
    pub kind: Option<String>,
    pub tags: Vec<String>,
    pub tone: Tone,
    /// Set only when the route asks for a length bucket.
    pub length: Option<LengthCategory>,
    pub preview: Option<String>,
}

impl ComposerPrefill {
    /// Default state for a view opened without a staged draft.
    pub fn empty() -> Self {
        Self {
            content: String::new(),
            source: None,
            kind: None,
            tags: Vec::new(),
            tone: Tone::Neutral,
            length: None,
            preview: None,
        }
    }

    /// Drains `mailbox` and classifies the draft, if any.
    pub fn from_mailbox(mailbox: &DraftMailbox, classifier: &Classifier) -> Self {
        match mailbox.get_draft() {
            Some(payload) => Self::from_payload(payload, classifier),
            None => {
                debug!("event=prefill_empty module=handoff status=fallback");
                Self::empty()
            }
        }
    }

    /// Classifies an already-received draft.
    pub fn from_payload(payload: DraftPayload, classifier: &Classifier) -> Self {
        let length = match payload.route() {
            DraftRoute::Thought => Some(LengthCategory::Thought(
                classifier.thought_length(payload.content.as_str()),
            )),
            DraftRoute::Message => Some(LengthCategory::Message(
                classifier.message_length(payload.content.as_str()),
            )),
            DraftRoute::ToneOnly => None,
        };
        let tone = classifier.tone(payload.content.as_str());
        let preview = derive_preview(payload.content.as_str());
        let tags = payload
            .tags
            .as_deref()
            .map(normalize_tags)
            .unwrap_or_default();

        Self {
            content: payload.content,
            source: Some(payload.source),
            kind: payload.kind,
            tags,
            tone,
            length,
            preview,
        }
    }

    /// Returns whether this is the default empty state.
    pub fn is_empty(&self) -> bool {
        self.source.is_none()
    }
}

/// Derives a plain-text preview from markdown-ish draft content.
///
/// Images are dropped, links keep their label, markdown symbols are removed,
/// whitespace is collapsed, and the first 100 chars are kept.
pub fn derive_preview(content: &str) -> Option<String> {
    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let without_links = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}

/// Normalizes carried-over tags.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    tags.iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
