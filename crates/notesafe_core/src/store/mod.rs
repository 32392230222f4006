//! Store layer: the indexable slot arena and its contracts.
//!
//! # Responsibility
//! - Define the use-case oriented store contract (`NoteStore`).
//! - Keep slot bookkeeping and counter arithmetic inside the store
//!   boundary.
//!
//! # Invariants
//! - Store APIs return semantic errors (`SlotEmpty`, `IndexOutOfRange`)
//!   instead of panicking on bad indices.
//! - A failed call leaves the store unchanged.

pub mod note_store;
