use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use crate::models::Note;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteResponse {
    /// Note ID, assigned by the store
    pub id: String,
    /// Note content
    pub content: String,
    /// Creation time, newest notes are listed first
    pub created_at: DateTime<Utc>,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            content: note.content,
            created_at: note.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    /// Note content, surrounding whitespace is trimmed
    #[schema(value_type = Option<String>)]
    pub content: Option<Value>,
}

impl CreateNoteRequest {
    /// Reads the request from a raw body. Anything that is not a JSON object
    /// is treated as an empty request.
    pub fn from_json_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut fields)) => Self {
                content: fields.remove("content"),
            },
            _ => Self::default(),
        }
    }

    /// Textual form of `content`; missing and `null` read as empty.
    pub fn content_text(&self) -> String {
        match &self.content {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteNoteParams {
    /// ID of the note to delete
    pub id: Option<String>,
}

impl DeleteNoteParams {
    /// Builds the params from decoded query pairs. Only the first `id` counts.
    pub fn from_query_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            id: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "id").then_some(value)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteNoteResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable failure description
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
