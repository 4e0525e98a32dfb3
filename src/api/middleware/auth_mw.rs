use crate::api::extractor::auth_extractor::LoggedInUser;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

pub async fn authenticated(
    LoggedInUser(user): LoggedInUser,
    mut request: Request,
    next: Next,
) -> Response {
    tracing::debug!("Authenticated user: {}", user.id);

    request.extensions_mut().insert(user);
    next.run(request).await
}
