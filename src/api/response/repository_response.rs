use crate::api::dto::ErrorResponse;
use crate::domain::error::ValidationError;
use crate::domain::repository::RepositoryError;
use axum::http::StatusCode;
use axum::response::IntoResponse;

impl IntoResponse for RepositoryError {
    fn into_response(self) -> axum::response::Response {
        match self {
            RepositoryError::NotFound(msg) => {
                ErrorResponse::reply(StatusCode::NOT_FOUND, msg).into_response()
            }
            RepositoryError::Conflict(msg) => {
                ErrorResponse::reply(StatusCode::CONFLICT, msg).into_response()
            }
            RepositoryError::Database(e) => {
                tracing::error!("Database error: {}", e);
                ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
                    .into_response()
            }
        }
    }
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> axum::response::Response {
        ErrorResponse::reply(StatusCode::BAD_REQUEST, self.message).into_response()
    }
}
