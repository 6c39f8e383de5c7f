//! Value types shared by the handoff and classifier modules.
//!
//! # Responsibility
//! - Define the draft payload exchanged between views.
//! - Define the closed category sets produced by classification.
//!
//! # Invariants
//! - Every type here is plain in-memory data; nothing is persisted.

pub mod category;
pub mod draft;
