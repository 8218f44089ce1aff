//! Note repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD persistence for day-scoped notes.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `create` requires the unsaved identity sentinel and returns the
//!   store-assigned identity directly.
//! - `update` overwrites name/description only; date and identity are
//!   immutable after creation.
//! - `delete` of a non-existent identity is a no-op, not an error.
//! - Dates persist as ISO `YYYY-MM-DD` text and are the listing query key.

use crate::db::DbError;
use crate::model::note::{Note, NoteId, UNSAVED_NOTE_ID};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const NOTE_SELECT_SQL: &str = "SELECT date, name, description, uuid FROM notes";
const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for note persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    NotFound(NoteId),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "note not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid note data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table is missing: {table}")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column is missing: {table}.{column}")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for note CRUD operations.
pub trait NoteRepository {
    /// Persists one transient note and returns the assigned identity.
    fn create(&self, note: &Note) -> RepoResult<NoteId>;
    /// Overwrites name/description of an existing note.
    fn update(&self, note: &Note) -> RepoResult<()>;
    /// Removes one note; absent identities are ignored.
    fn delete(&self, id: NoteId) -> RepoResult<()>;
    /// Dumps every stored note in identity order. Diagnostic/bulk use only.
    fn get_all(&self) -> RepoResult<Vec<Note>>;
    /// Lists notes for one calendar day in identity order.
    fn get_by_date(&self, date: NaiveDate) -> RepoResult<Vec<Note>>;
    /// Gets one note by identity.
    fn get_by_id(&self, id: NoteId) -> RepoResult<Note>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    /// Constructs a repository from a bootstrapped connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_note_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create(&self, note: &Note) -> RepoResult<NoteId> {
        if note.uuid != UNSAVED_NOTE_ID {
            return Err(RepoError::InvalidData(format!(
                "create requires the unsaved identity sentinel, got {}",
                note.uuid
            )));
        }

        self.conn.execute(
            "INSERT INTO notes (date, name, description) VALUES (?1, ?2, ?3);",
            params![
                note.date.format(DATE_FORMAT).to_string(),
                note.name.as_str(),
                note.description.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn update(&self, note: &Note) -> RepoResult<()> {
        if note.uuid < 0 {
            return Err(RepoError::InvalidData(format!(
                "update requires a store-assigned identity, got {}",
                note.uuid
            )));
        }

        let changed = self.conn.execute(
            "UPDATE notes SET name = ?1, description = ?2 WHERE uuid = ?3;",
            params![note.name.as_str(), note.description.as_str(), note.uuid],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(note.uuid));
        }

        Ok(())
    }

    fn delete(&self, id: NoteId) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM notes WHERE uuid = ?1;", [id])?;
        Ok(())
    }

    fn get_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY uuid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn get_by_date(&self, date: NaiveDate) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE date = ?1 ORDER BY uuid ASC;"))?;
        let mut rows = stmt.query([date.format(DATE_FORMAT).to_string()])?;
        let mut notes = Vec::new();
        while let Some(row) = rows.next()? {
            notes.push(parse_note_row(row)?);
        }
        Ok(notes)
    }

    fn get_by_id(&self, id: NoteId) -> RepoResult<Note> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE uuid = ?1;"))?;
        let mut rows = stmt.query([id])?;
        match rows.next()? {
            Some(row) => parse_note_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let date_text: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!("invalid date value `{date_text}` in notes.date"))
    })?;

    Ok(Note {
        date,
        name: row.get("name")?,
        description: row.get("description")?,
        uuid: row.get("uuid")?,
    })
}

fn ensure_note_connection_ready(conn: &Connection) -> RepoResult<()> {
    if !table_exists(conn, "notes")? {
        return Err(RepoError::MissingRequiredTable("notes"));
    }

    for column in ["date", "name", "description", "uuid"] {
        if !table_has_column(conn, "notes", column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "notes",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
