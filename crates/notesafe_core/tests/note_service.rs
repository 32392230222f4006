use notesafe_core::{InMemoryNoteStore, NoteService, StoreError};

#[test]
fn service_create_view_delete_roundtrip() {
    let mut service = NoteService::new(InMemoryNoteStore::new());

    let index = service.create_note(5, b"ab").unwrap();
    assert_eq!(index, 0);
    assert_eq!(
        service.view_note(index).unwrap(),
        &[0x61, 0x62, 0x00, 0x00, 0x00]
    );

    assert_eq!(service.delete_note(index).unwrap(), 5);
    assert_eq!(
        service.view_note(index).unwrap_err(),
        StoreError::SlotEmpty { index: 0 }
    );
}

#[test]
fn service_surfaces_store_errors_unchanged() {
    let mut service = NoteService::new(InMemoryNoteStore::new());

    assert!(matches!(
        service.view_note(0).unwrap_err(),
        StoreError::IndexOutOfRange { .. }
    ));
    assert!(matches!(
        service.create_note(u64::MAX, b"").unwrap_err(),
        StoreError::InvalidLength { .. }
    ));
}

#[test]
fn service_clear_reports_count_and_stats_stay_consistent() {
    let mut service = NoteService::new(InMemoryNoteStore::new());
    service.create_note(3, b"one").unwrap();
    service.create_note(4, b"two!").unwrap();

    assert_eq!(service.clear_notes(), 2);

    let stats = service.stats();
    assert_eq!(stats.active_count, 0);
    assert_eq!(stats.created, 2);
    assert_eq!(stats.deleted, 2);
    assert_eq!(stats.bytes_allocated, 7);
    assert_eq!(stats.bytes_freed, 7);
    assert!(service.summary().is_empty());
}

#[test]
fn service_summary_skips_deleted_notes() {
    let mut service = NoteService::new(InMemoryNoteStore::new());
    service.create_note(1, b"a").unwrap();
    service.create_note(2, b"bb").unwrap();
    service.delete_note(0).unwrap();

    let summary = service.summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].index, 1);
    assert_eq!(summary[0].length, 2);
}
