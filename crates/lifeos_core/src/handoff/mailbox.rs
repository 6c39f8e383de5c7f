//! Single-slot draft mailbox.
//!
//! # Responsibility
//! - Hold at most one staged draft between a producer and a consumer view.
//! - Hand the draft out exactly once, then clear.
//!
//! # Invariants
//! - Initial state is `Empty`; there is no terminal state.
//! - `set_draft` always leaves the mailbox `Loaded`, replacing any unread draft.
//! - `get_draft` is a destructive read: a returned draft is never returned again.
//! - No operation fails or panics; a poisoned lock is recovered.

use crate::model::draft::{DraftId, DraftPayload};
use log::{debug, info};
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// Observable mailbox state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    Empty,
    Loaded,
}

#[derive(Debug)]
struct StagedDraft {
    id: DraftId,
    payload: DraftPayload,
}

/// One-slot, last-write-wins holder for a pending draft.
///
/// Owned by the application root; views receive `&DraftMailbox` (or an
/// `Arc`). Independent instances never share state.
#[derive(Debug, Default)]
pub struct DraftMailbox {
    slot: Mutex<Option<StagedDraft>>,
}

impl DraftMailbox {
    /// Creates an empty mailbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a draft, silently replacing any unread one.
    pub fn set_draft(&self, payload: DraftPayload) {
        self.stage(payload);
    }

    /// Stages a draft and returns the correlation id used in logs.
    pub fn stage(&self, payload: DraftPayload) -> DraftId {
        let id = Uuid::new_v4();
        let source_len = payload.source.chars().count();
        let content_len = payload.content.chars().count();
        let replaced = self
            .lock()
            .replace(StagedDraft { id, payload })
            .map(|previous| previous.id);

        if let Some(previous_id) = replaced {
            debug!(
                "event=draft_overwritten module=handoff draft_id={} replaced_id={}",
                id, previous_id
            );
        }
        info!(
            "event=draft_staged module=handoff draft_id={} source_len={} content_len={}",
            id, source_len, content_len
        );
        id
    }

    /// Returns whether a draft is waiting.
    pub fn has_draft(&self) -> bool {
        self.lock().is_some()
    }

    pub fn state(&self) -> DraftState {
        if self.has_draft() {
            DraftState::Loaded
        } else {
            DraftState::Empty
        }
    }

    /// Takes the staged draft, leaving the mailbox empty.
    ///
    /// Returns `None` when nothing is staged; that is a normal outcome.
    pub fn get_draft(&self) -> Option<DraftPayload> {
        let staged = self.lock().take()?;
        info!(
            "event=draft_consumed module=handoff draft_id={}",
            staged.id
        );
        Some(staged.payload)
    }

    fn lock(&self) -> MutexGuard<'_, Option<StagedDraft>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
