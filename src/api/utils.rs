use crate::api::dto::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

pub fn parse_id(value: &str, message: &str) -> Result<i64, Response> {
    value
        .parse::<i64>()
        .map_err(|_| ErrorResponse::reply(StatusCode::BAD_REQUEST, message).into_response())
}

pub fn forbidden(message: &str) -> Response {
    ErrorResponse::reply(StatusCode::FORBIDDEN, message).into_response()
}
