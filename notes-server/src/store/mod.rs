mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Postgres(#[from] tokio_postgres::Error),

    #[cfg_attr(not(test), allow(dead_code))]
    #[error("{0}")]
    Backend(String),
}

/// Capability interface over the persistent `notes` collection.
///
/// Every call is a single round trip to the backend, nothing is cached or
/// retried.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes, newest `created_at` first.
    async fn list(&self) -> Result<Vec<Note>, StoreError>;

    /// Persists a note. The store assigns `id` and `created_at`.
    async fn create(&self, content: String) -> Result<Note, StoreError>;

    /// Removes the note with the given id. Unknown ids are not an error.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}
