//! Note store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable create/read/delete APIs over an append-only slot arena.
//! - Own lifetime counters and keep them consistent with slot state.
//!
//! # Invariants
//! - Slot indices are stable for the lifetime of the store; deletion
//!   tombstones a slot in place and never renumbers its neighbors.
//! - `bytes_allocated - bytes_freed == active_bytes` and
//!   `created - deleted == active_count` after every call.
//! - Allocation size equals the requested note length exactly; any length
//!   that cannot be represented or exceeds `MAX_NOTE_LEN` is rejected
//!   before any state change.

use crate::model::note::{Note, Slot};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Upper bound for a single note length in bytes.
///
/// Lengths arrive from console input as 32-bit values; capping at half of
/// `u32::MAX` keeps every derived 32-bit size computation wrap-free and
/// guarantees the buffer fits `usize` on all supported platforms.
pub const MAX_NOTE_LEN: u64 = (u32::MAX / 2) as u64;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note slot and sizing operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Requested length is unrepresentable or exceeds `MAX_NOTE_LEN`.
    InvalidLength { requested: u64 },
    /// Index is past the end of the slot sequence.
    IndexOutOfRange { index: usize, slot_count: usize },
    /// Index refers to a tombstoned (deleted) slot.
    SlotEmpty { index: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLength { requested } => {
                write!(
                    f,
                    "invalid note length {requested}: exceeds maximum of {MAX_NOTE_LEN} bytes"
                )
            }
            Self::IndexOutOfRange { index, slot_count } => {
                write!(
                    f,
                    "note index {index} out of range: store holds {slot_count} slots"
                )
            }
            Self::SlotEmpty { index } => {
                write!(f, "note at index {index} has been deleted")
            }
        }
    }
}

impl Error for StoreError {}

/// Aggregate view over slot state and lifetime counters.
///
/// Lifetime counters (`created`, `deleted`, `bytes_allocated`,
/// `bytes_freed`) are monotonically non-decreasing and reset only when the
/// store is constructed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    /// Live (non-tombstone) slots.
    pub active_count: u64,
    /// Sum of lengths of all live notes.
    pub active_bytes: u64,
    /// Notes created since store construction.
    pub created: u64,
    /// Notes deleted since store construction.
    pub deleted: u64,
    /// Bytes allocated for note buffers since store construction.
    pub bytes_allocated: u64,
    /// Bytes released by delete/clear since store construction.
    pub bytes_freed: u64,
}

/// Read model for per-slot summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSummary {
    /// Stable slot index.
    pub index: usize,
    /// Note length in bytes.
    pub length: u64,
}

/// Store interface for note lifecycle operations.
pub trait NoteStore {
    /// Creates a note of exactly `requested_len` bytes and returns its
    /// stable slot index. Short `content` is zero-padded, surplus content
    /// is truncated.
    fn create(&mut self, requested_len: u64, content: &[u8]) -> StoreResult<usize>;
    /// Reads the full content of the note at `index`.
    fn read(&self, index: usize) -> StoreResult<&[u8]>;
    /// Deletes the note at `index` and returns its length in bytes.
    fn delete(&mut self, index: usize) -> StoreResult<u64>;
    /// Deletes every live note and returns how many were deleted.
    fn clear_all(&mut self) -> u64;
    /// Returns aggregate slot and counter state.
    fn stats(&self) -> StoreStats;
    /// Returns `(index, length)` for every live slot in ascending index
    /// order.
    fn summary(&self) -> Vec<NoteSummary>;
}

/// Heap-backed note store with append-only index allocation.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    slots: Vec<Slot>,
    created: u64,
    deleted: u64,
    bytes_allocated: u64,
    bytes_freed: u64,
}

impl InMemoryNoteStore {
    /// Creates an empty store with zeroed lifetime counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the total slot count, tombstones included.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    fn live_slot(&self, index: usize) -> StoreResult<&Note> {
        match self.slots.get(index) {
            None => Err(StoreError::IndexOutOfRange {
                index,
                slot_count: self.slots.len(),
            }),
            Some(Slot::Tombstone) => Err(StoreError::SlotEmpty { index }),
            Some(Slot::Live(note)) => Ok(note),
        }
    }
}

/// Validates a requested note length against platform and contract limits.
///
/// Runs before any allocation, so an oversized request cannot touch store
/// state.
pub fn checked_note_len(requested_len: u64) -> StoreResult<usize> {
    if requested_len > MAX_NOTE_LEN {
        return Err(StoreError::InvalidLength {
            requested: requested_len,
        });
    }
    usize::try_from(requested_len).map_err(|_| StoreError::InvalidLength {
        requested: requested_len,
    })
}

impl NoteStore for InMemoryNoteStore {
    fn create(&mut self, requested_len: u64, content: &[u8]) -> StoreResult<usize> {
        let len = checked_note_len(requested_len)?;
        let note = Note::from_bytes(len, content);

        let index = self.slots.len();
        self.slots.push(Slot::Live(note));
        self.created += 1;
        self.bytes_allocated += requested_len;
        Ok(index)
    }

    fn read(&self, index: usize) -> StoreResult<&[u8]> {
        self.live_slot(index).map(Note::content)
    }

    fn delete(&mut self, index: usize) -> StoreResult<u64> {
        // Check through the shared path first so a failed delete cannot
        // touch counters or slot state.
        let len = self.live_slot(index)?.len();
        self.slots[index] = Slot::Tombstone;
        self.deleted += 1;
        self.bytes_freed += len;
        Ok(len)
    }

    fn clear_all(&mut self) -> u64 {
        let mut cleared = 0u64;
        for slot in self.slots.iter_mut() {
            if let Slot::Live(note) = slot {
                self.deleted += 1;
                self.bytes_freed += note.len();
                cleared += 1;
                *slot = Slot::Tombstone;
            }
        }
        cleared
    }

    fn stats(&self) -> StoreStats {
        let mut active_count = 0u64;
        let mut active_bytes = 0u64;
        for slot in &self.slots {
            if let Slot::Live(note) = slot {
                active_count += 1;
                active_bytes += note.len();
            }
        }
        StoreStats {
            active_count,
            active_bytes,
            created: self.created,
            deleted: self.deleted,
            bytes_allocated: self.bytes_allocated,
            bytes_freed: self.bytes_freed,
        }
    }

    fn summary(&self) -> Vec<NoteSummary> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.note().map(|note| NoteSummary {
                    index,
                    length: note.len(),
                })
            })
            .collect()
    }
}
