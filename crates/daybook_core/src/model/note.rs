//! Note domain model.
//!
//! # Responsibility
//! - Define the day-scoped note record persisted by the note store.
//! - Encode the unsaved-identity sentinel used by the create path.
//!
//! # Invariants
//! - `uuid` is assigned by the store and never reused for another note.
//! - A transient, not-yet-created note carries `UNSAVED_NOTE_ID`.
//! - `date` is immutable after creation; updates touch name/description only.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned integer identity for persisted notes.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type NoteId = i64;

/// Identity sentinel marking a note that has not been persisted yet.
pub const UNSAVED_NOTE_ID: NoteId = -1;

/// Free-text note attached to one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Calendar day this note belongs to. Query key for listing.
    pub date: NaiveDate,
    /// Short note title.
    pub name: String,
    /// Free-text body.
    pub description: String,
    /// Store identity; `UNSAVED_NOTE_ID` until the store assigns one.
    #[serde(default = "unsaved_id")]
    pub uuid: NoteId,
}

fn unsaved_id() -> NoteId {
    UNSAVED_NOTE_ID
}

impl Note {
    /// Creates a transient note carrying the unsaved identity sentinel.
    pub fn new(date: NaiveDate, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            description: description.into(),
            uuid: UNSAVED_NOTE_ID,
        }
    }

    /// Returns whether this note has been persisted by a store.
    pub fn is_saved(&self) -> bool {
        self.uuid != UNSAVED_NOTE_ID
    }
}
