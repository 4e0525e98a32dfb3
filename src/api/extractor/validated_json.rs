use crate::api::dto::ErrorResponse;
use crate::domain::validation::Validate;
use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde::de::DeserializeOwned;

/// JSON body that has been deserialized and checked against its field rules.
///
/// Malformed JSON and rule violations are both rejected with 400 and an
/// `{"error": ...}` body.
pub struct ValidatedJson<T: Validate>(pub T::Output);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: Validate + DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ErrorResponse>);

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(request, state)
            .await
            .map_err(|rejection| {
                tracing::debug!("Rejected request body: {}", rejection.body_text());
                ErrorResponse::reply(StatusCode::BAD_REQUEST, rejection.body_text())
            })?;

        payload
            .validate()
            .map(ValidatedJson)
            .map_err(|e| ErrorResponse::reply(StatusCode::BAD_REQUEST, e.message))
    }
}
