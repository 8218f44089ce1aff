use chrono::NaiveDate;
use daybook_core::db::{open_db, open_db_in_memory};
use daybook_core::{Note, NoteRepository, NoteService, RepoError, SqliteNoteRepository, UNSAVED_NOTE_ID};
use rusqlite::Connection;

const SCHEMA_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/notes_schema.sql");

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn create_then_get_by_id_roundtrip() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let note = Note::new(date(2024, 2, 29), "leap day", "only every four years");
    let id = repo.create(&note).unwrap();
    assert!(id >= 0);

    let loaded = repo.get_by_id(id).unwrap();
    assert_eq!(loaded.date, note.date);
    assert_eq!(loaded.name, note.name);
    assert_eq!(loaded.description, note.description);
    assert_eq!(loaded.uuid, id);
    assert!(loaded.is_saved());
}

#[test]
fn create_rejects_already_persisted_identity() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::new(date(2024, 1, 1), "a", "b");
    note.uuid = 42;
    let err = repo.create(&note).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn update_overwrites_name_and_description_only() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo
        .create(&Note::new(date(2024, 3, 8), "draft", "to be replaced"))
        .unwrap();

    // The update payload carries a different date; persisted date must stay.
    let update = Note {
        date: date(2025, 1, 1),
        name: "final".to_string(),
        description: "kept text".to_string(),
        uuid: id,
    };
    repo.update(&update).unwrap();

    let loaded = repo.get_by_id(id).unwrap();
    assert_eq!(loaded.name, "final");
    assert_eq!(loaded.description, "kept text");
    assert_eq!(loaded.date, date(2024, 3, 8));
    assert_eq!(loaded.uuid, id);
}

#[test]
fn update_of_missing_identity_is_not_found() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let mut note = Note::new(date(2024, 1, 1), "ghost", "nobody here");
    note.uuid = 999;
    let err = repo.update(&note).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn update_rejects_unsaved_sentinel() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let note = Note::new(date(2024, 1, 1), "transient", "never stored");
    assert_eq!(note.uuid, UNSAVED_NOTE_ID);
    let err = repo.update(&note).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn delete_then_get_by_id_is_not_found() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let id = repo
        .create(&Note::new(date(2024, 6, 12), "holiday plans", "grill"))
        .unwrap();
    repo.delete(id).unwrap();

    let err = repo.get_by_id(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(found) if found == id));
}

#[test]
fn delete_of_missing_identity_is_a_noop() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    repo.delete(12345).unwrap();
}

#[test]
fn get_by_date_lists_matching_notes_in_identity_order() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let target = date(2024, 11, 4);
    let first = repo.create(&Note::new(target, "morning", "parade")).unwrap();
    let second = repo.create(&Note::new(target, "evening", "dinner")).unwrap();
    repo.create(&Note::new(date(2024, 11, 5), "unrelated", "skip"))
        .unwrap();

    let notes = repo.get_by_date(target).unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].uuid, first);
    assert_eq!(notes[1].uuid, second);
    assert!(notes.iter().all(|note| note.date == target));
}

#[test]
fn get_all_dumps_every_note_in_identity_order() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();

    let a = repo.create(&Note::new(date(2024, 1, 1), "a", "1")).unwrap();
    let b = repo.create(&Note::new(date(2024, 1, 2), "b", "2")).unwrap();
    let c = repo.create(&Note::new(date(2024, 1, 3), "c", "3")).unwrap();

    let all = repo.get_all().unwrap();
    assert_eq!(
        all.iter().map(|note| note.uuid).collect::<Vec<_>>(),
        vec![a, b, c]
    );
}

#[test]
fn schema_application_is_idempotent_across_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("daybook.sqlite3");

    let id = {
        let conn = open_db(&db_path, SCHEMA_PATH).unwrap();
        let repo = SqliteNoteRepository::try_new(&conn).unwrap();
        repo.create(&Note::new(date(2024, 5, 1), "kept", "survives reopen"))
            .unwrap()
    };

    let conn = open_db(&db_path, SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let loaded = repo.get_by_id(id).unwrap();
    assert_eq!(loaded.name, "kept");
}

#[test]
fn repository_rejects_connection_without_notes_table() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteNoteRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("notes"))
    ));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory(SCHEMA_PATH).unwrap();
    let repo = SqliteNoteRepository::try_new(&conn).unwrap();
    let service = NoteService::new(repo);

    let created = service
        .create_for_day(date(2024, 12, 31), "party", "bring sparklers")
        .unwrap();
    assert!(created.is_saved());

    let listed = service.notes_for_day(date(2024, 12, 31)).unwrap();
    assert_eq!(listed, vec![created.clone()]);

    let mut renamed = created.clone();
    renamed.name = "quiet evening".to_string();
    service.update_note(&renamed).unwrap();
    assert_eq!(service.get_note(created.uuid).unwrap().name, "quiet evening");

    service.delete_note(created.uuid).unwrap();
    assert!(matches!(
        service.get_note(created.uuid),
        Err(RepoError::NotFound(_))
    ));
}
