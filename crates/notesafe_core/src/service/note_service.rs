//! Note use-case service.
//!
//! # Responsibility
//! - Provide create/view/delete/clear/stats/summary entry points for
//!   console callers.
//! - Emit one metadata-only diagnostic event per mutating call.
//!
//! # Invariants
//! - Service APIs never bypass store sizing or slot-state checks.
//! - Events carry lengths and indices only, never note content.

use crate::store::note_store::{NoteStore, NoteSummary, StoreResult, StoreStats};
use log::info;

/// Fixed scratch size for the bounded buffer-processing helper.
pub const SCRATCH_BUFFER_LEN: usize = 64;

/// Use-case service facade over a note store implementation.
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a note of exactly `requested_len` bytes from `content`.
    ///
    /// # Contract
    /// - Short content is zero-padded, surplus content is truncated.
    /// - Returns the stable slot index of the new note.
    pub fn create_note(&mut self, requested_len: u64, content: &[u8]) -> StoreResult<usize> {
        let index = self.store.create(requested_len, content)?;
        info!("event=note_added module=core status=ok index={index} len={requested_len}");
        Ok(index)
    }

    /// Reads the full content of the note at `index`.
    ///
    /// Repeated reads return identical bytes; viewing a deleted slot is a
    /// defined `SlotEmpty` error, never stale data.
    pub fn view_note(&self, index: usize) -> StoreResult<&[u8]> {
        self.store.read(index)
    }

    /// Deletes the note at `index` and returns its length in bytes.
    ///
    /// A second delete of the same index fails with `SlotEmpty`.
    pub fn delete_note(&mut self, index: usize) -> StoreResult<u64> {
        let len = self.store.delete(index)?;
        info!("event=note_deleted module=core status=ok index={index} len={len}");
        Ok(len)
    }

    /// Deletes every live note and returns how many were deleted.
    pub fn clear_notes(&mut self) -> u64 {
        let cleared = self.store.clear_all();
        info!("event=notes_cleared module=core status=ok count={cleared}");
        cleared
    }

    /// Returns aggregate slot and counter state.
    pub fn stats(&self) -> StoreStats {
        self.store.stats()
    }

    /// Returns `(index, length)` for every live note in ascending index
    /// order.
    pub fn summary(&self) -> Vec<NoteSummary> {
        self.store.summary()
    }
}

/// Copies `input` through a fixed-size scratch buffer, truncating at
/// `SCRATCH_BUFFER_LEN` bytes.
///
/// The copy is bounded by the scratch capacity no matter how long the
/// input is, so oversized input degrades to truncation instead of writing
/// past the buffer.
pub fn process_buffer(input: &[u8]) -> Vec<u8> {
    let mut scratch = [0u8; SCRATCH_BUFFER_LEN];
    let copied = input.len().min(SCRATCH_BUFFER_LEN);
    scratch[..copied].copy_from_slice(&input[..copied]);
    scratch[..copied].to_vec()
}

#[cfg(test)]
mod tests {
    use super::{process_buffer, SCRATCH_BUFFER_LEN};

    #[test]
    fn process_buffer_passes_short_input_through() {
        assert_eq!(process_buffer(b"hello"), b"hello".to_vec());
    }

    #[test]
    fn process_buffer_truncates_at_scratch_capacity() {
        let oversized = vec![0x41u8; SCRATCH_BUFFER_LEN * 3];
        let processed = process_buffer(&oversized);
        assert_eq!(processed.len(), SCRATCH_BUFFER_LEN);
        assert!(processed.iter().all(|byte| *byte == 0x41));
    }

    #[test]
    fn process_buffer_handles_empty_input() {
        assert!(process_buffer(b"").is_empty());
    }
}
