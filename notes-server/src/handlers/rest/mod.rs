use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_macros::debug_handler;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, DeleteNoteParams, DeleteNoteResponse, ErrorResponse, NoteResponse},
    handlers::root,
    service::{NoteService, NoteServiceError},
};


#[derive(OpenApi)]
#[openapi(
    paths(get_all_notes, create_note, delete_note),
    components(schemas(NoteResponse, CreateNoteRequest, DeleteNoteResponse, ErrorResponse)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

pub fn router(service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/", get(root))
        .route(
            "/api/notes",
            get(get_all_notes).post(create_note).delete(delete_note),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
}

fn error_response(action: &str, error: &NoteServiceError) -> Response {
    match error {
        NoteServiceError::ContentRequired | NoteServiceError::IdRequired => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(error.to_string())),
        )
            .into_response(),
        NoteServiceError::Store(e) => {
            tracing::error!("failed to {}: {}", action, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string())),
            )
                .into_response()
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "All notes, newest first", body = Vec<NoteResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(State(service): State<Arc<NoteService>>) -> Response {
    match service.get_all_notes().await {
        Ok(notes) => (StatusCode::OK, Json(notes)).into_response(),
        Err(e) => error_response("get note entries", &e),
    }
}

/// The body is read raw: a missing or unparseable body counts as `{}`.
#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Content is empty", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(State(service): State<Arc<NoteService>>, body: Bytes) -> Response {
    let payload = CreateNoteRequest::from_json_body(&body);

    match service.create_note(payload).await {
        Ok(note) => (StatusCode::CREATED, Json(note)).into_response(),
        Err(e) => error_response("create note entry", &e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/notes",
    params(DeleteNoteParams),
    responses(
        (status = 200, description = "Note deleted, unknown ids included", body = DeleteNoteResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Response {
    let params = DeleteNoteParams::from_query_pairs(pairs);

    match service.delete_note(params).await {
        Ok(()) => (StatusCode::OK, Json(DeleteNoteResponse { ok: true })).into_response(),
        Err(e) => error_response("delete note entry", &e),
    }
}
