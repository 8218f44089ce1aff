//! Note use-case service.
//!
//! # Responsibility
//! - Provide stable note CRUD entry points for UI collaborators.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - The service layer remains storage-agnostic.

use crate::model::note::{Note, NoteId};
use crate::repo::note_repo::{NoteRepository, RepoResult};
use chrono::NaiveDate;

/// Use-case service wrapper for note CRUD operations.
pub struct NoteService<R: NoteRepository> {
    repo: R,
}

impl<R: NoteRepository> NoteService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a note for one day and returns it with the assigned identity.
    pub fn create_for_day(
        &self,
        date: NaiveDate,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> RepoResult<Note> {
        let mut note = Note::new(date, name, description);
        note.uuid = self.repo.create(&note)?;
        Ok(note)
    }

    /// Overwrites name/description of an existing note.
    ///
    /// Returns repository-level not-found errors unchanged.
    pub fn update_note(&self, note: &Note) -> RepoResult<()> {
        self.repo.update(note)
    }

    /// Deletes one note by identity; absent identities are ignored.
    pub fn delete_note(&self, id: NoteId) -> RepoResult<()> {
        self.repo.delete(id)
    }

    /// Lists notes attached to one calendar day.
    pub fn notes_for_day(&self, date: NaiveDate) -> RepoResult<Vec<Note>> {
        self.repo.get_by_date(date)
    }

    /// Gets one note by identity.
    pub fn get_note(&self, id: NoteId) -> RepoResult<Note> {
        self.repo.get_by_id(id)
    }

    /// Dumps every stored note. Diagnostic/bulk use only.
    pub fn all_notes(&self) -> RepoResult<Vec<Note>> {
        self.repo.get_all()
    }
}
