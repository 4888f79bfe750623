use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{api::NotesApi, models::Note, state::NotesState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Declined,
    NotListed,
    RolledBack,
}

/// Drives the notes screen. The state lock is never held across a request.
#[derive(Clone)]
pub struct NotesController {
    api: Arc<dyn NotesApi>,
    state: Arc<Mutex<NotesState>>,
}

fn lock(state: &Mutex<NotesState>) -> MutexGuard<'_, NotesState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clears `is_submitting` however the submit future ends.
struct SubmitInFlight<'a> {
    state: &'a Mutex<NotesState>,
}

impl Drop for SubmitInFlight<'_> {
    fn drop(&mut self) {
        lock(self.state).finish_submit();
    }
}

impl NotesController {
    pub fn new(api: Arc<dyn NotesApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(NotesState::default())),
        }
    }

    pub fn state(&self) -> NotesState {
        lock(&self.state).clone()
    }

    pub fn set_content(&self, content: impl Into<String>) {
        lock(&self.state).set_content(content);
    }

    pub async fn load(&self) {
        lock(&self.state).begin_fetch();

        let result = self.api.list().await;

        let mut state = lock(&self.state);
        match result {
            Ok(notes) => state.finish_fetch(notes),
            Err(e) => {
                tracing::warn!("Failed to load notes: {e}");
                state.fail_fetch();
            }
        }
    }

    /// Returns `false` when the submit was ignored.
    pub async fn submit(&self) -> bool {
        let begun = lock(&self.state).begin_submit();
        let Some(text) = begun else {
            return false;
        };
        let _in_flight = SubmitInFlight { state: &self.state };

        match self.api.create(&text).await {
            Ok(()) => {
                lock(&self.state).submit_succeeded();
                self.load().await;
            }
            Err(e) => {
                tracing::warn!("Failed to add note: {e}");
                lock(&self.state).submit_failed();
            }
        }

        true
    }

    pub async fn delete(&self, id: &str, confirm: impl FnOnce(&Note) -> bool) -> DeleteOutcome {
        let target = lock(&self.state).notes.iter().find(|n| n.id == id).cloned();
        let Some(note) = target else {
            return DeleteOutcome::NotListed;
        };
        if !confirm(&note) {
            return DeleteOutcome::Declined;
        }

        let pending = lock(&self.state).begin_delete(id);
        let Some(pending) = pending else {
            return DeleteOutcome::NotListed;
        };

        match self.api.delete(pending.id()).await {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) => {
                tracing::warn!("Failed to delete note {}: {e}", pending.id());
                pending.compensate(&mut lock(&self.state));
                DeleteOutcome::RolledBack
            }
        }
    }
}
