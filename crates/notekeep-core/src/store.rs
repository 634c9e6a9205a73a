//! # In-Memory Note Store
//!
//! Holds the note collection and the next-id counter. Both sit behind one
//! `RwLock` so allocation and insertion happen in the same critical section:
//! concurrent creates can never observe the same id.
//!
//! Notes are kept in insertion order. Collections in this service are small
//! (a demo workspace), so lookups are linear scans.
//!
//! Storage is not persisted; everything is lost on restart.

use parking_lot::RwLock;

use crate::error::NoteError;
use crate::identity::NoteId;
use crate::note::{validate_content, Note};
use crate::temporal::Timestamp;

/// Content of the notes a fresh workspace starts with.
pub const WELCOME_NOTES: [&str; 2] = [
    "Welcome to your notes app!",
    "Click edit to modify this note",
];

struct Inner {
    notes: Vec<Note>,
    next_id: NoteId,
}

impl Inner {
    fn allocate_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id = id.next();
        id
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|n| n.id == id)
    }
}

/// Shared note collection. Wrap in `Arc` to share across handlers.
pub struct NoteStore {
    inner: RwLock<Inner>,
}

impl std::fmt::Debug for NoteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("NoteStore")
            .field("notes", &inner.notes.len())
            .field("next_id", &inner.next_id)
            .finish()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new()
    }
}

impl NoteStore {
    /// An empty store whose first note will get id 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                notes: Vec::new(),
                next_id: NoteId::FIRST,
            }),
        }
    }

    /// A store pre-populated with [`WELCOME_NOTES`], stamped `now`.
    pub fn with_welcome_notes(now: Timestamp) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write();
            for content in WELCOME_NOTES {
                let id = inner.allocate_id();
                inner.notes.push(Note::new(id, content.to_string(), now));
            }
        }
        store
    }

    /// Snapshot of every note, in insertion order.
    pub fn list(&self) -> Vec<Note> {
        self.inner.read().notes.clone()
    }

    /// Look up a single note.
    pub fn get(&self, id: NoteId) -> Option<Note> {
        let inner = self.inner.read();
        inner.position(id).map(|i| inner.notes[i].clone())
    }

    pub fn len(&self) -> usize {
        self.inner.read().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The id the next successful `create` will assign.
    pub fn next_id(&self) -> NoteId {
        self.inner.read().next_id
    }

    /// Validate `content`, assign the next id, and append a new note.
    pub fn create(&self, content: Option<&str>, now: Timestamp) -> Result<Note, NoteError> {
        let content = validate_content(content)?;
        let mut inner = self.inner.write();
        let id = inner.allocate_id();
        let note = Note::new(id, content, now);
        inner.notes.push(note.clone());
        tracing::debug!(note_id = %id, "note created");
        Ok(note)
    }

    /// Replace the content of note `id` and stamp `updated_at`.
    ///
    /// Content is validated before the id is looked up, so empty content is
    /// reported as [`NoteError::EmptyContent`] even for unknown ids.
    pub fn update(
        &self,
        id: NoteId,
        content: Option<&str>,
        now: Timestamp,
    ) -> Result<Note, NoteError> {
        let content = validate_content(content)?;
        let mut inner = self.inner.write();
        let index = inner.position(id).ok_or(NoteError::NotFound)?;
        let note = &mut inner.notes[index];
        note.content = content;
        note.updated_at = Some(now);
        tracing::debug!(note_id = %id, "note updated");
        Ok(note.clone())
    }

    /// Remove note `id`, returning it.
    pub fn delete(&self, id: NoteId) -> Result<Note, NoteError> {
        let mut inner = self.inner.write();
        let index = inner.position(id).ok_or(NoteError::NotFound)?;
        let note = inner.notes.remove(index);
        tracing::debug!(note_id = %id, "note deleted");
        Ok(note)
    }
}
