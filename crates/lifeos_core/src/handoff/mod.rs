//! Cross-view draft handoff.
//!
//! # Responsibility
//! - Let a producer view stage content for one later read by a consumer view.
//! - Turn a received draft into a classified composer prefill.
//!
//! # Invariants
//! - There is no process-wide mailbox; the application root owns one and
//!   passes references to the views that need it.

pub mod mailbox;
pub mod prefill;
