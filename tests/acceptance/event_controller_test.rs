use crate::utils::fixtures::{authorization, bearer, create_event, event_payload, signed_up};
use crate::utils::runners::run_integration_test_with_default;
use axum::http::StatusCode;
use event_service::api::dto::{ErrorResponse, EventDTO};
use serde_json::json;

#[tokio::test]
async fn it_creates_event_owned_by_caller() {
    run_integration_test_with_default(|c| async move {
        let (jon, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;

        let response = c
            .server
            .post("/events")
            .add_header(authorization(), bearer(&token))
            .json(&json!({
                "name": "Feast",
                "description": "A feast at Winterfell",
                "date": "2030-06-01",
                "location": "Winterfell",
                "ownerId": jon.id + 100,
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::CREATED);

        let event = response.json::<EventDTO>();
        assert_eq!(event.owner_id, jon.id);
        assert_eq!(event.name, "Feast");
        assert_eq!(event.date.to_string(), "2030-06-01");

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["ownerId"], json!(jon.id));
        assert_eq!(body["date"], json!("2030-06-01"));
    })
    .await;
}

#[tokio::test]
async fn it_validates_event_payload() {
    run_integration_test_with_default(|c| async move {
        let (_, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let valid = event_payload("Feast");

        let cases = [
            ("name", json!("Fe")),
            ("name", json!("x".repeat(101))),
            ("description", json!("Too short")),
            ("description", json!("x".repeat(151))),
            ("date", json!("2030-13-01")),
            ("date", json!("01/06/2030")),
            ("location", json!("WF")),
        ];

        for (field, value) in cases {
            let mut payload = valid.clone();
            payload[field] = value;

            let response = c
                .server
                .post("/events")
                .add_header(authorization(), bearer(&token))
                .json(&payload)
                .await;

            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert!(response.json::<ErrorResponse>().error.starts_with(field));
        }

        let events = c.server.get("/events").await.json::<Vec<EventDTO>>();
        assert!(events.is_empty());
    })
    .await;
}

#[tokio::test]
async fn it_gets_event_by_id() {
    run_integration_test_with_default(|c| async move {
        let (_, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let event = create_event(&c.server, &token, "Feast").await;

        let response = c.server.get(&format!("/events/{}", event.id)).await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<EventDTO>(), event);
    })
    .await;
}

#[tokio::test]
async fn it_rejects_non_numeric_id() {
    run_integration_test_with_default(|c| async move {
        let response = c.server.get("/events/abc").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<ErrorResponse>().error, "Invalid event id");
    })
    .await;
}

#[tokio::test]
async fn it_returns_not_found_for_missing_event() {
    run_integration_test_with_default(|c| async move {
        let response = c.server.get("/events/404").await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<ErrorResponse>().error, "Event not found");
    })
    .await;
}

#[tokio::test]
async fn it_lists_all_events() {
    run_integration_test_with_default(|c| async move {
        let (_, jon_token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let (_, arya_token) = signed_up(&c.server, "arya@stark.test", "Arya").await;
        let feast = create_event(&c.server, &jon_token, "Feast").await;
        let duel = create_event(&c.server, &arya_token, "Duel").await;

        let response = c.server.get("/events").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Vec<EventDTO>>(), vec![feast, duel]);
    })
    .await;
}

#[tokio::test]
async fn it_lets_owner_update_event() {
    run_integration_test_with_default(|c| async move {
        let (jon, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let event = create_event(&c.server, &token, "Feast").await;

        let response = c
            .server
            .put(&format!("/events/{}", event.id))
            .add_header(authorization(), bearer(&token))
            .json(&json!({
                "name": "Wedding",
                "description": "A wedding at the Twins",
                "date": "2031-01-01",
                "location": "The Twins",
            }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let updated = response.json::<EventDTO>();
        assert_eq!(updated.id, event.id);
        assert_eq!(updated.owner_id, jon.id);
        assert_eq!(updated.name, "Wedding");

        let stored = c.server.get(&format!("/events/{}", event.id)).await;
        assert_eq!(stored.json::<EventDTO>(), updated);
    })
    .await;
}

#[tokio::test]
async fn it_forbids_updating_event_of_other_user() {
    run_integration_test_with_default(|c| async move {
        let (_, jon_token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let (_, arya_token) = signed_up(&c.server, "arya@stark.test", "Arya").await;
        let event = create_event(&c.server, &jon_token, "Feast").await;

        let response = c
            .server
            .put(&format!("/events/{}", event.id))
            .add_header(authorization(), bearer(&arya_token))
            .json(&event_payload("Hijacked"))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

        let stored = c.server.get(&format!("/events/{}", event.id)).await;
        assert_eq!(stored.json::<EventDTO>(), event);
    })
    .await;
}

#[tokio::test]
async fn it_checks_ownership_before_validating_update() {
    run_integration_test_with_default(|c| async move {
        let (_, jon_token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let (_, arya_token) = signed_up(&c.server, "arya@stark.test", "Arya").await;
        let event = create_event(&c.server, &jon_token, "Feast").await;
        let uri = format!("/events/{}", event.id);

        let foreign = c
            .server
            .put(&uri)
            .add_header(authorization(), bearer(&arya_token))
            .json(&json!({"name": "x"}))
            .await;
        let own = c
            .server
            .put(&uri)
            .add_header(authorization(), bearer(&jon_token))
            .json(&json!({"name": "x"}))
            .await;

        assert_eq!(foreign.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(own.status_code(), StatusCode::BAD_REQUEST);
    })
    .await;
}

#[tokio::test]
async fn it_returns_not_found_when_updating_missing_event() {
    run_integration_test_with_default(|c| async move {
        let (_, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;

        let missing = c
            .server
            .put("/events/404")
            .add_header(authorization(), bearer(&token))
            .json(&event_payload("Feast"))
            .await;
        let invalid = c
            .server
            .put("/events/abc")
            .add_header(authorization(), bearer(&token))
            .json(&event_payload("Feast"))
            .await;

        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
    })
    .await;
}

#[tokio::test]
async fn it_lets_owner_delete_event() {
    run_integration_test_with_default(|c| async move {
        let (_, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let event = create_event(&c.server, &token, "Feast").await;

        let response = c
            .server
            .delete(&format!("/events/{}", event.id))
            .add_header(authorization(), bearer(&token))
            .await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());

        let stored = c.server.get(&format!("/events/{}", event.id)).await;
        assert_eq!(stored.status_code(), StatusCode::NOT_FOUND);
    })
    .await;
}

#[tokio::test]
async fn it_forbids_deleting_event_of_other_user() {
    run_integration_test_with_default(|c| async move {
        let (_, jon_token) = signed_up(&c.server, "jon@snow.test", "Jon").await;
        let (_, arya_token) = signed_up(&c.server, "arya@stark.test", "Arya").await;
        let event = create_event(&c.server, &jon_token, "Feast").await;

        let response = c
            .server
            .delete(&format!("/events/{}", event.id))
            .add_header(authorization(), bearer(&arya_token))
            .await;

        assert_eq!(response.status_code(), StatusCode::FORBIDDEN);

        let stored = c.server.get(&format!("/events/{}", event.id)).await;
        assert_eq!(stored.status_code(), StatusCode::OK);
    })
    .await;
}

#[tokio::test]
async fn it_returns_not_found_when_deleting_missing_event() {
    run_integration_test_with_default(|c| async move {
        let (_, token) = signed_up(&c.server, "jon@snow.test", "Jon").await;

        let response = c
            .server
            .delete("/events/404")
            .add_header(authorization(), bearer(&token))
            .await;

        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    })
    .await;
}
