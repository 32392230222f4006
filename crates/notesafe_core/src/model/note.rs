//! Note domain model.
//!
//! # Responsibility
//! - Define the length-tagged owned byte buffer stored per slot.
//! - Define the two-state slot lifecycle (Live -> Tombstone).
//!
//! # Invariants
//! - `Note::content().len()` equals the declared length from construction
//!   onward; the buffer is never over-allocated or left uninitialized.
//! - A `Slot` transitions from `Live` to `Tombstone` exactly once and never
//!   back.

use serde::{Deserialize, Serialize};

/// A length-tagged owned byte buffer.
///
/// The buffer is allocated to exactly the requested length. Construction
/// copies at most that many bytes from the caller's content and zero-fills
/// the remainder, so every byte of a note is always initialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    content: Vec<u8>,
}

impl Note {
    /// Builds a note of exactly `requested_len` bytes.
    ///
    /// Copies `min(content.len(), requested_len)` bytes from `content`;
    /// short input is zero-padded, surplus input is truncated.
    pub fn from_bytes(requested_len: usize, content: &[u8]) -> Self {
        let mut buf = vec![0u8; requested_len];
        let copied = requested_len.min(content.len());
        buf[..copied].copy_from_slice(&content[..copied]);
        Self { content: buf }
    }

    /// Returns the declared length in bytes.
    pub fn len(&self) -> u64 {
        self.content.len() as u64
    }

    /// Returns whether the note holds zero bytes.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the full note content. Exactly `len()` bytes, never more.
    pub fn content(&self) -> &[u8] {
        &self.content
    }
}

/// One indexed position in the store.
///
/// Indices are stable: a deleted slot stays in place as a `Tombstone`
/// instead of shifting its neighbors, and is never reused for a new note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Slot {
    /// Slot holds an owned note.
    Live(Note),
    /// Slot held a note that has been deleted. Permanent.
    Tombstone,
}

impl Slot {
    /// Returns whether this slot still holds a note.
    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live(_))
    }

    /// Returns the note when the slot is live.
    pub fn note(&self) -> Option<&Note> {
        match self {
            Self::Live(note) => Some(note),
            Self::Tombstone => None,
        }
    }
}
