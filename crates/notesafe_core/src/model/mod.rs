//! Domain model for the note store.
//!
//! # Responsibility
//! - Define the canonical note record and its slot lifecycle.
//!
//! # Invariants
//! - A note's buffer is exactly as long as its declared length.
//! - Deletion is represented by permanent tombstone slots, not removal.

pub mod note;
