pub mod rest;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub async fn root() -> Response {
    (StatusCode::OK, "Hello world!").into_response()
}
