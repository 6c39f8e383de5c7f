//! Draft payload model.
//!
//! # Responsibility
//! - Define the transient value handed from a producer view to a consumer view.
//! - Interpret the optional routing hint into a typed route.
//!
//! # Invariants
//! - A payload is a plain value object; it carries no identity of its own.
//! - Unknown routing hints are preserved verbatim, never rejected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Correlation id assigned to a payload when it is staged.
///
/// Used only for diagnostics; payload equality ignores it.
pub type DraftId = Uuid;

/// Routing hint value for insight drafts.
pub const DRAFT_TYPE_INSIGHT: &str = "insight";
/// Routing hint value for thought-stream drafts.
pub const DRAFT_TYPE_THOUGHT: &str = "thought";
/// Routing hint value for echo drafts.
pub const DRAFT_TYPE_ECHO: &str = "echo";
/// Routing hint value for message drafts.
pub const DRAFT_TYPE_MESSAGE: &str = "message";
/// Routing hint value for journal drafts.
pub const DRAFT_TYPE_JOURNAL: &str = "journal";

/// Content staged by one view for a one-time read by another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftPayload {
    /// Staged text. Empty strings are allowed; callers guard if needed.
    pub content: String,
    /// Free-text label of the origin view or feature.
    pub source: String,
    /// Serialized as `type` to match the view-layer naming.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl DraftPayload {
    /// Creates a payload with no routing hint and no tags.
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
            kind: None,
            tags: None,
        }
    }

    /// Sets the routing hint.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Sets carried-over tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Returns the typed route derived from the routing hint.
    pub fn route(&self) -> DraftRoute {
        DraftRoute::from_hint(self.kind.as_deref())
    }
}

/// Classification a consumer applies to a received draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftRoute {
    /// `insight` or `thought`: bucket by thought length.
    Thought,
    /// `echo` or `message`: bucket by message length.
    Message,
    /// `journal`, missing, or unrecognized hint: tone only.
    ToneOnly,
}

impl DraftRoute {
    /// Maps an optional hint to a route.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn from_hint(hint: Option<&str>) -> Self {
        let Some(raw) = hint else {
            return Self::ToneOnly;
        };
        match raw.trim().to_lowercase().as_str() {
            DRAFT_TYPE_INSIGHT | DRAFT_TYPE_THOUGHT => Self::Thought,
            DRAFT_TYPE_ECHO | DRAFT_TYPE_MESSAGE => Self::Message,
            DRAFT_TYPE_JOURNAL => Self::ToneOnly,
            _ => Self::ToneOnly,
        }
    }
}
