use async_trait::async_trait;
use reqwest::{Client, StatusCode, header};
use serde_json::{Value, json};

use std::time::Duration;

use crate::models::Note;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {0}")]
    Status(StatusCode),
}

/// Client side view of the notes endpoint.
#[async_trait]
pub trait NotesApi: Send + Sync {
    /// Current notes in server order. A body that is not an array of notes
    /// reads as an empty list.
    async fn list(&self) -> Result<Vec<Note>, ApiError>;

    async fn create(&self, content: &str) -> Result<(), ApiError>;

    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

pub struct HttpNotesApi {
    client: Client,
    notes_url: String,
}

impl HttpNotesApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            notes_url: format!("{}/api/notes", base_url.trim_end_matches('/')),
        })
    }
}

fn decode_note_list(body: &[u8]) -> Vec<Note> {
    let Ok(Value::Array(items)) = serde_json::from_slice::<Value>(body) else {
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Note>(item) {
            Ok(note) => Some(note),
            Err(e) => {
                tracing::warn!("Skipping malformed note: {e}");
                None
            }
        })
        .collect()
}

#[async_trait]
impl NotesApi for HttpNotesApi {
    async fn list(&self) -> Result<Vec<Note>, ApiError> {
        let response = self
            .client
            .get(&self.notes_url)
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        tracing::debug!("List responded with status {}", response.status());
        let body = response.bytes().await?;

        Ok(decode_note_list(&body))
    }

    async fn create(&self, content: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(&self.notes_url)
            .json(&json!({ "content": content }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(&self.notes_url)
            .query(&[("id", id)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(())
    }
}
