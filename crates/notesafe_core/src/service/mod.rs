//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Keep the CLI layer decoupled from slot bookkeeping details.

pub mod note_service;
