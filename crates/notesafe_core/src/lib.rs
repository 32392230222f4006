//! Core domain logic for the notesafe store.
//! This crate is the single source of truth for slot and counter invariants.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, Slot};
pub use service::note_service::{process_buffer, NoteService, SCRATCH_BUFFER_LEN};
pub use store::note_store::{
    checked_note_len, InMemoryNoteStore, NoteStore, NoteSummary, StoreError, StoreResult,
    StoreStats, MAX_NOTE_LEN,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
