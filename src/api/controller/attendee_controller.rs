use crate::api::dto::{AttendeeDTO, ErrorResponse, EventDTO, UserDTO};
use crate::api::extractor::auth_extractor::LoggedInUser;
use crate::api::server_state::ServerState;
use crate::api::utils::{forbidden, parse_id};
use crate::domain::repository::RepositoryError;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

const INVALID_EVENT_ID: &str = "Invalid event id";
const INVALID_USER_ID: &str = "Invalid user id";
const ALREADY_ATTENDING: &str = "User is already an attendee of this event";

#[utoipa::path(post, path = "/events/{id}/attendees/{user_id}",
    tag="attendees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Event id"),
        ("user_id" = i64, Path, description = "User id"),
    ),
    responses(
        (status = 201, description = "Attendee added", content_type = "application/json", body = AttendeeDTO),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 401, description = "Unauthorized", content_type = "application/json", body = ErrorResponse),
        (status = 403, description = "Forbidden", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "Event or user not found", content_type = "application/json", body = ErrorResponse),
        (status = 409, description = "Already attending", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn add_attendee(
    State(state): State<ServerState>,
    LoggedInUser(caller): LoggedInUser,
    Path((event_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Response> {
    let event_id = parse_id(&event_id, INVALID_EVENT_ID)?;
    let user_id = parse_id(&user_id, INVALID_USER_ID)?;

    let event = state
        .event_repository
        .get_by_id(event_id)
        .await
        .map_err(IntoResponse::into_response)?;

    state
        .user_repository
        .get_by_id(user_id)
        .await
        .map_err(IntoResponse::into_response)?;

    if !event.is_owned_by(caller.id) {
        tracing::warn!(
            "User {} tried to add attendees to event {}",
            caller.id,
            event_id
        );
        return Err(forbidden("You are not allowed to manage attendees of this event"));
    }

    match state
        .attendee_repository
        .get_by_event_and_user(event_id, user_id)
        .await
    {
        Ok(_) => {
            return Err(ErrorResponse::reply(StatusCode::CONFLICT, ALREADY_ATTENDING).into_response());
        }
        Err(RepositoryError::NotFound(_)) => {}
        Err(e) => return Err(e.into_response()),
    }

    let attendee = state
        .attendee_repository
        .insert(event_id, user_id)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => {
                ErrorResponse::reply(StatusCode::CONFLICT, ALREADY_ATTENDING).into_response()
            }
            e => e.into_response(),
        })?;

    Ok((StatusCode::CREATED, Json(AttendeeDTO::from(attendee))))
}

#[utoipa::path(get, path = "/events/{id}/attendees",
    tag="attendees",
    params(("id" = i64, Path, description = "Event id")),
    responses(
        (status = 200, description = "Users attending the event", content_type = "application/json", body = Vec<UserDTO>),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn get_attendees_for_event(
    State(state): State<ServerState>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let event_id = parse_id(&event_id, INVALID_EVENT_ID)?;

    let users = state
        .attendee_repository
        .get_users_by_event(event_id)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(users.into_iter().map(UserDTO::from).collect::<Vec<_>>()))
}

#[utoipa::path(delete, path = "/events/{id}/attendees/{user_id}",
    tag="attendees",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Event id"),
        ("user_id" = i64, Path, description = "User id"),
    ),
    responses(
        (status = 204, description = "Attendee removed"),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
        (status = 401, description = "Unauthorized", content_type = "application/json", body = ErrorResponse),
        (status = 403, description = "Forbidden", content_type = "application/json", body = ErrorResponse),
        (status = 404, description = "Event not found", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn delete_attendee_from_event(
    State(state): State<ServerState>,
    LoggedInUser(caller): LoggedInUser,
    Path((event_id, user_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, Response> {
    let event_id = parse_id(&event_id, INVALID_EVENT_ID)?;
    let user_id = parse_id(&user_id, INVALID_USER_ID)?;

    let event = state
        .event_repository
        .get_by_id(event_id)
        .await
        .map_err(IntoResponse::into_response)?;

    if !event.is_owned_by(caller.id) {
        tracing::warn!(
            "User {} tried to remove attendees from event {}",
            caller.id,
            event_id
        );
        return Err(forbidden("You are not allowed to manage attendees of this event"));
    }

    state
        .attendee_repository
        .delete(event_id, user_id)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(get, path = "/attendees/{id}/events",
    tag="attendees",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Events the user attends", content_type = "application/json", body = Vec<EventDTO>),
        (status = 400, description = "Bad request", content_type = "application/json", body = ErrorResponse),
    )
)]
pub async fn get_events_by_attendee(
    State(state): State<ServerState>,
    Path(user_id): Path<String>,
) -> Result<impl IntoResponse, Response> {
    let user_id = parse_id(&user_id, INVALID_USER_ID)?;

    let events = state
        .attendee_repository
        .get_events_by_user(user_id)
        .await
        .map_err(IntoResponse::into_response)?;

    Ok(Json(events.into_iter().map(EventDTO::from).collect::<Vec<_>>()))
}
