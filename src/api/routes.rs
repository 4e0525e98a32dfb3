use crate::api::controller::attendee_controller::*;
use crate::api::controller::auth_controller::*;
use crate::api::controller::event_controller::*;
use crate::api::controller::utils_controller::*;
use crate::api::dto::*;
use crate::api::middleware::auth_mw::authenticated;
use crate::api::middleware::security_mw::{restrict_methods, security_headers};
use crate::api::server_state::ServerState;
use axum::routing::{post, put};
use axum::{Router, middleware, routing::get};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

pub fn routes(state: ServerState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_action))
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/events", get(get_all_events))
        .route("/events/{id}", get(get_event))
        .route("/events/{id}/attendees", get(get_attendees_for_event))
        .route("/attendees/{id}/events", get(get_events_by_attendee))
        .merge(
            Router::new()
                .route("/events", post(create_event))
                .route("/events/{id}", put(update_event).delete(delete_event))
                .route(
                    "/events/{id}/attendees/{user_id}",
                    post(add_attendee).delete(delete_attendee_from_event),
                )
                .route_layer(middleware::from_fn_with_state(
                    state.clone(),
                    authenticated,
                )),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(security_headers))
                .layer(middleware::from_fn(restrict_methods)),
        )
        .with_state(state)
}

#[derive(OpenApi)]
#[openapi(
    servers(
        (description="dev", url="http://localhost:8080"),
    ),
    paths(
        health_action,
        register,
        login,
        create_event,
        get_event,
        get_all_events,
        update_event,
        delete_event,
        add_attendee,
        get_attendees_for_event,
        delete_attendee_from_event,
        get_events_by_attendee,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            EventRequest,
            UserDTO,
            EventDTO,
            AttendeeDTO,
        ),
    ),
    modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
