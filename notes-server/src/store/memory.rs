use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{NoteStore, StoreError};
use crate::models::Note;

/// Process-local store. Notes are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    notes: RwLock<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Note>, StoreError> {
        let mut notes: Vec<Note> = self.notes.read().await.iter().rev().cloned().collect();
        // Stable sort keeps later inserts first on equal timestamps
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(notes)
    }

    async fn create(&self, content: String) -> Result<Note, StoreError> {
        let note = Note {
            id: Uuid::new_v4().to_string(),
            content,
            created_at: Utc::now(),
        };

        self.notes.write().await.push(note.clone());
        tracing::debug!("Stored note {} in memory", note.id);

        Ok(note)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.notes.write().await.retain(|note| note.id != id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_newest_first() {
        let store = MemoryStore::new();
        let a = store.create("A".to_string()).await.unwrap();
        let b = store.create("B".to_string()).await.unwrap();

        let notes = store.list().await.unwrap();

        assert_eq!(notes, vec![b, a]);
    }

    #[tokio::test]
    async fn assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = store.create("same".to_string()).await.unwrap();
        let b = store.create("same".to_string()).await.unwrap();

        assert_ne!(a.id, b.id);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = MemoryStore::new();
        let kept = store.create("keep".to_string()).await.unwrap();
        let gone = store.create("drop".to_string()).await.unwrap();

        store.delete(&gone.id).await.unwrap();
        store.delete(&gone.id).await.unwrap();
        store.delete("no-such-id").await.unwrap();

        assert_eq!(store.list().await.unwrap(), vec![kept]);
    }
}
