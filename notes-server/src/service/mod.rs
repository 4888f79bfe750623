use crate::{
    dto::{CreateNoteRequest, DeleteNoteParams, NoteResponse},
    store::{NoteStore, StoreError},
};

use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum NoteServiceError {
    #[error("Content required")]
    ContentRequired,

    #[error("id query param required")]
    IdRequired,

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    pub async fn create_note(
        &self,
        request: CreateNoteRequest,
    ) -> Result<NoteResponse, NoteServiceError> {
        let content = request.content_text().trim().to_string();
        if content.is_empty() {
            return Err(NoteServiceError::ContentRequired);
        }

        let note = self.store.create(content).await?;
        tracing::info!("Created note {}", note.id);

        Ok(note.into())
    }

    pub async fn delete_note(&self, params: DeleteNoteParams) -> Result<(), NoteServiceError> {
        let id = params
            .id
            .filter(|id| !id.is_empty())
            .ok_or(NoteServiceError::IdRequired)?;

        self.store.delete(&id).await?;
        tracing::info!("Deleted note {}", id);

        Ok(())
    }

    pub async fn get_all_notes(&self) -> Result<Vec<NoteResponse>, NoteServiceError> {
        let notes = self.store.list().await?;
        Ok(notes.into_iter().map(NoteResponse::from).collect())
    }
}
