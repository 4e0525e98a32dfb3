use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use event_service::api::dto::{EventDTO, LoginResponse, UserDTO};
use serde_json::{Value, json};

pub const PASSWORD: &str = "Iknow#othing1";

pub fn authorization() -> HeaderName {
    HeaderName::try_from("Authorization").unwrap()
}

pub fn bearer(token: &str) -> HeaderValue {
    HeaderValue::try_from(format!("Bearer {}", token)).unwrap()
}

pub fn event_payload(name: &str) -> Value {
    json!({
        "name": name,
        "description": "A long enough description",
        "date": "2030-06-01",
        "location": "Winterfell",
    })
}

pub async fn register(server: &TestServer, email: &str, name: &str) -> UserDTO {
    let response = server
        .post("/auth/register")
        .json(&json!({
            "email": email,
            "password": PASSWORD,
            "name": name,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    response.json::<UserDTO>()
}

pub async fn login(server: &TestServer, email: &str) -> String {
    let response = server
        .post("/auth/login")
        .json(&json!({
            "email": email,
            "password": PASSWORD,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    response.json::<LoginResponse>().token
}

/// Registers a user and logs in, returning the user and a bearer token.
pub async fn signed_up(server: &TestServer, email: &str, name: &str) -> (UserDTO, String) {
    let user = register(server, email, name).await;
    let token = login(server, email).await;

    (user, token)
}

pub async fn create_event(server: &TestServer, token: &str, name: &str) -> EventDTO {
    let response = server
        .post("/events")
        .add_header(authorization(), bearer(token))
        .json(&event_payload(name))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    response.json::<EventDTO>()
}
