use crate::api::dto::{ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, UserDTO};
use crate::api::extractor::validated_json::ValidatedJson;
use crate::api::server_state::ServerState;
use crate::domain::crypto::SchemeAwareHasher;
use crate::domain::repository::RepositoryError;
use crate::domain::user::PasswordHandler;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

#[utoipa::path(post, path = "/auth/register",
    tag="auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", content_type = "application/json", body = UserDTO),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 409, description = "User already exists", content_type = "application/json", body = ErrorResponse),
        (status = 500, description = "Internal server error", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn register(
    State(state): State<ServerState>,
    ValidatedJson(mut user): ValidatedJson<RegisterRequest>,
) -> impl IntoResponse {
    let hasher = SchemeAwareHasher::with_scheme(state.config.password_hashing_scheme());

    if let Err(e) = user.hash_password(&hasher) {
        tracing::error!("Failed to hash password: {}", e);

        return ErrorResponse::reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            .into_response();
    }

    match state.user_repository.insert(&user).await {
        Ok(user) => {
            tracing::info!("User registered: {}", user.id);

            (StatusCode::CREATED, Json(UserDTO::from(user))).into_response()
        }
        Err(RepositoryError::Conflict(_)) => {
            ErrorResponse::reply(StatusCode::CONFLICT, "User already exists").into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(post, path = "/auth/login",
    tag="auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login response", content_type = "application/json", body = LoginResponse),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 401, description = "Invalid email or password", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn login(
    State(state): State<ServerState>,
    ValidatedJson(credentials): ValidatedJson<LoginRequest>,
) -> impl IntoResponse {
    match state
        .auth_service
        .login(&credentials.email, &credentials.password)
        .await
    {
        Ok(token) => (StatusCode::OK, Json(LoginResponse { token: token.value })).into_response(),
        Err(e) => e.into_response(),
    }
}
