use crate::models::Note;

pub const ADD_FAILED: &str = "Failed to add note";
pub const DELETE_FAILED: &str = "Failed to delete note";
pub const LOAD_FAILED: &str = "Failed to load notes";

/// Everything the notes screen shows. Mutated only through the transition
/// methods below.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesState {
    pub notes: Vec<Note>,
    pub content: String,
    pub is_fetching: bool,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl NotesState {
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    pub const fn begin_fetch(&mut self) {
        self.is_fetching = true;
    }

    pub fn finish_fetch(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.is_fetching = false;
        if self.error.as_deref() == Some(LOAD_FAILED) {
            self.error = None;
        }
    }

    pub fn fail_fetch(&mut self) {
        self.is_fetching = false;
        self.error = Some(LOAD_FAILED.to_string());
    }

    /// Returns the trimmed text to send, or `None` when there is nothing to
    /// submit or a submission is already in flight.
    pub fn begin_submit(&mut self) -> Option<String> {
        if self.is_submitting {
            return None;
        }
        let text = self.content.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();

        self.is_submitting = true;
        self.error = None;
        Some(text)
    }

    pub fn submit_succeeded(&mut self) {
        self.content.clear();
    }

    pub fn submit_failed(&mut self) {
        self.error = Some(ADD_FAILED.to_string());
    }

    pub const fn finish_submit(&mut self) {
        self.is_submitting = false;
    }

    /// Hides the note right away. The returned command restores the previous
    /// list if the server refuses the delete.
    pub fn begin_delete(&mut self, id: &str) -> Option<PendingDelete> {
        if !self.notes.iter().any(|note| note.id == id) {
            return None;
        }

        let snapshot = self.notes.clone();
        self.notes.retain(|note| note.id != id);

        Some(PendingDelete {
            id: id.to_string(),
            snapshot,
        })
    }
}

#[derive(Debug)]
#[must_use]
pub struct PendingDelete {
    id: String,
    snapshot: Vec<Note>,
}

impl PendingDelete {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn compensate(self, state: &mut NotesState) {
        state.notes = self.snapshot;
        state.error = Some(DELETE_FAILED.to_string());
    }
}
