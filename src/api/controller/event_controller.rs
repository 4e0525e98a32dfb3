use crate::api::dto::{ErrorResponse, EventDTO, EventRequest};
use crate::api::extractor::auth_extractor::LoggedInUser;
use crate::api::extractor::validated_json::ValidatedJson;
use crate::api::server_state::ServerState;
use crate::api::utils::{forbidden, parse_id};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

const INVALID_EVENT_ID: &str = "Invalid event id";

#[utoipa::path(post, path = "/events",
    tag="events",
    request_body = EventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event created", content_type = "application/json", body = EventDTO),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 401, description = "Unauthorized", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn create_event(
    State(state): State<ServerState>,
    LoggedInUser(user): LoggedInUser,
    ValidatedJson(details): ValidatedJson<EventRequest>,
) -> Result<impl IntoResponse, Response> {
    let event = state
        .event_repository
        .insert(user.id, &details)
        .await
        .map_err(IntoResponse::into_response)?;

    tracing::info!("Event {} created by user {}", event.id, user.id);

    Ok((StatusCode::CREATED, Json(EventDTO::from(event))))
}

#[utoipa::path(get, path = "/events/{id}",
    tag="events",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event", content_type = "application/json", body = EventDTO),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "Event not found", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn get_event(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let id = parse_id(&id, INVALID_EVENT_ID)?;

    let event = state
        .event_repository
        .get_by_id(id)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(EventDTO::from(event)))
}

#[utoipa::path(get, path = "/events",
    tag="events",
    responses(
        (status = 200, description = "All events", content_type = "application/json", body = Vec<EventDTO>),
    )
)]
pub async fn get_all_events(State(state): State<ServerState>) -> Result<impl IntoResponse, Response> {
    let events = state
        .event_repository
        .get_all()
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(
        events.into_iter().map(EventDTO::from).collect::<Vec<_>>(),
    ))
}

/// The body is only looked at once the caller is known to own the event.
#[utoipa::path(put, path = "/events/{id}",
    tag="events",
    request_body = EventRequest,
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event updated", content_type = "application/json", body = EventDTO),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 401, description = "Unauthorized", content_type = "application/json", body = ErrorResponse),
        (status = 403, description = "Forbidden", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "Event not found", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn update_event(
    State(state): State<ServerState>,
    LoggedInUser(user): LoggedInUser,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<EventRequest>, (StatusCode, Json<ErrorResponse>)>,
) -> Result<impl IntoResponse, Response> {
    let id = parse_id(&id, INVALID_EVENT_ID)?;

    let event = state
        .event_repository
        .get_by_id(id)
        .await
        .map_err(IntoResponse::into_response)?;

    if !event.is_owned_by(user.id) {
        tracing::warn!("User {} tried to update event {}", user.id, id);
        return Err(forbidden("You are not allowed to update this event"));
    }

    let ValidatedJson(details) = payload.map_err(IntoResponse::into_response)?;
    let event = event.with_details(details);

    state
        .event_repository
        .update(&event)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(EventDTO::from(event)))
}

#[utoipa::path(delete, path = "/events/{id}",
    tag="events",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 401, description = "Unauthorized", content_type = "application/json", body = ErrorResponse),
        (status = 403, description = "Forbidden", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "Event not found", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn delete_event(
    State(state): State<ServerState>,
    LoggedInUser(user): LoggedInUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let id = parse_id(&id, INVALID_EVENT_ID)?;

    let event = state
        .event_repository
        .get_by_id(id)
        .await
        .map_err(IntoResponse::into_response)?;

    if !event.is_owned_by(user.id) {
        tracing::warn!("User {} tried to delete event {}", user.id, id);
        return Err(forbidden("You are not allowed to delete this event"));
    }

    state
        .event_repository
        .delete(id)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(StatusCode::NO_CONTENT)
}
