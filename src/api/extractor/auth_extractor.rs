use crate::api::dto::ErrorResponse;
use crate::api::server_state::AuthServiceAware;
use crate::domain::user::User;
use axum::{Json, extract::FromRequestParts, http::StatusCode, http::header, http::request::Parts};

#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

#[derive(Debug, Clone)]
pub struct LoggedInUser(pub User);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(header::AUTHORIZATION) {
            Some(value) => {
                let value = value.to_str().unwrap_or("");
                match value.split_once(' ') {
                    Some((scheme, token))
                        if scheme.eq_ignore_ascii_case("Bearer") && !token.trim().is_empty() =>
                    {
                        Ok(BearerToken(token.trim().to_string()))
                    }
                    _ => {
                        tracing::warn!("Invalid Authorization header");

                        Err(ErrorResponse::reply(
                            StatusCode::UNAUTHORIZED,
                            "Missing bearer token",
                        ))
                    }
                }
            }
            None => Err(ErrorResponse::reply(
                StatusCode::UNAUTHORIZED,
                "Authorization header is missing",
            )),
        }
    }
}

impl<S> FromRequestParts<S> for LoggedInUser
where
    S: AuthServiceAware + Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<User>() {
            return Ok(LoggedInUser(user.clone()));
        }

        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;

        state
            .get_auth_service()
            .authenticate(&token)
            .await
            .map(LoggedInUser)
            .map_err(|e| e.into_error_response())
    }
}
