//! Menu-driven console front end for the notesafe store.
//!
//! # Responsibility
//! - Own the single store instance and translate menu selections into
//!   `NoteService` calls.
//! - Keep all prompting, parsing, and formatted printing out of core.

use log::{info, warn};
use notesafe_core::{
    default_log_level, init_logging, process_buffer, InMemoryNoteStore, NoteService, StoreResult,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

fn main() {
    // File logging is best-effort for an interactive session; the menu
    // still works when the log directory is unavailable.
    match session_log_dir().to_str() {
        Some(log_dir) => {
            if let Err(err) = init_logging(default_log_level(), log_dir) {
                eprintln!("warning: logging disabled: {err}");
            }
        }
        None => eprintln!("warning: logging disabled: log directory path is not valid UTF-8"),
    }
    info!("event=session_started module=cli status=ok");

    banner();

    let mut service = NoteService::new(InMemoryNoteStore::new());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        menu();
        let Some(choice) = read_line(&mut lines) else {
            println!("Input closed - exiting.");
            break;
        };
        match choice.trim() {
            "1" => add_note(&mut service, &mut lines),
            "2" => view_note(&service, &mut lines),
            "3" => delete_note(&mut service, &mut lines),
            "4" => run_process_buffer(&mut lines),
            "5" => show_stats(&service),
            "6" => show_summary(&service),
            "7" => clear_all(&mut service),
            "0" => {
                println!("Goodbye!");
                break;
            }
            "" => {}
            other => {
                warn!("event=unknown_option module=cli status=rejected choice_len={}", other.len());
                println!("Unknown option.");
            }
        }
    }
    info!("event=session_closed module=cli status=ok");
}

/// Returns the per-user directory for session log files.
fn session_log_dir() -> PathBuf {
    std::env::temp_dir().join("notesafe-logs")
}

fn banner() {
    println!("===============================");
    println!("  notesafe v{}", notesafe_core::core_version());
    println!("===============================");
}

fn menu() {
    println!();
    println!("Menu:");
    println!(" 1. Add note");
    println!(" 2. View note");
    println!(" 3. Delete note");
    println!(" 4. Process buffer");
    println!(" 5. Show statistics");
    println!(" 6. Note summary");
    println!(" 7. Clear all notes");
    println!(" 0. Exit");
    print!("> ");
    let _ = io::stdout().flush();
}

fn read_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    match lines.next()? {
        Ok(line) => Some(line),
        Err(_) => None,
    }
}

fn prompt(label: &str, lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<String> {
    print!("{label}");
    let _ = io::stdout().flush();
    read_line(lines)
}

fn prompt_index(lines: &mut impl Iterator<Item = io::Result<String>>) -> Option<usize> {
    let raw = prompt("Enter note index: ", lines)?;
    match raw.trim().parse::<usize>() {
        Ok(index) => Some(index),
        Err(_) => {
            println!("Invalid index.");
            None
        }
    }
}

fn report<T>(result: StoreResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            println!("Error: {err}");
            None
        }
    }
}

fn add_note(
    service: &mut NoteService<InMemoryNoteStore>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(raw_len) = prompt("Enter note length: ", lines) else {
        return;
    };
    let Ok(len) = raw_len.trim().parse::<u64>() else {
        println!("Invalid length.");
        return;
    };

    let Some(content) = prompt(&format!("Enter note content ({len} bytes expected): "), lines)
    else {
        return;
    };

    if let Some(index) = report(service.create_note(len, content.as_bytes())) {
        println!("Note added at index {index}");
    }
}

fn view_note(
    service: &NoteService<InMemoryNoteStore>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(index) = prompt_index(lines) else {
        return;
    };
    if let Some(content) = report(service.view_note(index)) {
        println!("[Note {index}] (len={}):", content.len());
        println!("{}", String::from_utf8_lossy(content));
    }
}

fn delete_note(
    service: &mut NoteService<InMemoryNoteStore>,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) {
    let Some(index) = prompt_index(lines) else {
        return;
    };
    if report(service.delete_note(index)).is_some() {
        println!("Note deleted.");
    }
}

fn run_process_buffer(lines: &mut impl Iterator<Item = io::Result<String>>) {
    let Some(data) = prompt("Enter data to process (any length): ", lines) else {
        return;
    };
    let processed = process_buffer(data.as_bytes());
    println!("Data processed: {}", String::from_utf8_lossy(&processed));
}

fn show_stats(service: &NoteService<InMemoryNoteStore>) {
    let stats = service.stats();
    println!();
    println!("Statistics:");
    println!(" - Active notes: {}", stats.active_count);
    println!(" - Total bytes stored: {}", stats.active_bytes);
    println!(" - notes_created: {}", stats.created);
    println!(" - notes_deleted: {}", stats.deleted);
    println!(" - bytes_allocated: {}", stats.bytes_allocated);
    println!(" - bytes_freed: {}", stats.bytes_freed);
}

fn show_summary(service: &NoteService<InMemoryNoteStore>) {
    println!();
    println!("Note Summary:");
    for entry in service.summary() {
        println!(" - Note {}: length = {}", entry.index, entry.length);
    }
}

fn clear_all(service: &mut NoteService<InMemoryNoteStore>) {
    let cleared = service.clear_notes();
    println!("All notes cleared ({cleared}).");
}

#[cfg(test)]
mod tests {
    use super::session_log_dir;

    #[test]
    fn session_log_dir_is_absolute_and_crate_scoped() {
        let dir = session_log_dir();
        assert!(dir.is_absolute());
        assert!(dir.ends_with("notesafe-logs"));
    }
}
