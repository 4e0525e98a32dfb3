use crate::api::dto::ErrorResponse;
use crate::application::service::auth_service::AuthError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;

impl AuthError {
    pub fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            AuthError::InvalidCredentials => {
                ErrorResponse::reply(StatusCode::UNAUTHORIZED, "Invalid email or password")
            }
            AuthError::TokenExpired => {
                tracing::debug!("Rejected expired token");
                ErrorResponse::reply(StatusCode::UNAUTHORIZED, "Token expired")
            }
            AuthError::InvalidToken => {
                tracing::debug!("Rejected invalid token");
                ErrorResponse::reply(StatusCode::UNAUTHORIZED, "Invalid token")
            }
            AuthError::UserNotFound => {
                tracing::warn!("Token issued for a user that no longer exists");
                ErrorResponse::reply(StatusCode::UNAUTHORIZED, "User not found")
            }
            AuthError::TokenEncodingFailed | AuthError::InternalError(_) => {
                tracing::error!("Authentication failed: {}", self);
                ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        self.into_error_response().into_response()
    }
}
