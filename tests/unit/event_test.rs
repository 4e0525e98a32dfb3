use chrono::NaiveDate;
use event_service::api::dto::EventRequest;
use event_service::domain::event::{Event, EventDetails};
use event_service::domain::validation::Validate;

fn event_request() -> EventRequest {
    EventRequest {
        name: "Feast".to_string(),
        description: "A feast at Winterfell".to_string(),
        date: "2030-06-01".to_string(),
        location: "Winterfell".to_string(),
    }
}

fn event(owner_id: i64) -> Event {
    Event {
        id: 7,
        owner_id,
        name: "Feast".to_string(),
        description: "A feast at Winterfell".to_string(),
        date: NaiveDate::from_ymd_opt(2030, 6, 1).unwrap(),
        location: "Winterfell".to_string(),
    }
}

#[test]
fn it_builds_details_from_valid_request() {
    let details = event_request().validate().unwrap();

    assert_eq!(details.name, "Feast");
    assert_eq!(details.date, NaiveDate::from_ymd_opt(2030, 6, 1).unwrap());
}

#[test]
fn it_rejects_name_out_of_bounds() {
    let mut request = event_request();
    request.name = "Fe".to_string();
    assert_eq!(request.validate().unwrap_err().field, "name");

    let mut request = event_request();
    request.name = "x".repeat(101);
    assert_eq!(request.validate().unwrap_err().field, "name");

    let mut request = event_request();
    request.name = "x".repeat(100);
    assert!(request.validate().is_ok());
}

#[test]
fn it_rejects_description_out_of_bounds() {
    let mut request = event_request();
    request.description = "Too short".to_string();
    assert_eq!(request.validate().unwrap_err().field, "description");

    let mut request = event_request();
    request.description = "x".repeat(151);
    assert_eq!(request.validate().unwrap_err().field, "description");
}

#[test]
fn it_rejects_invalid_date() {
    let mut request = event_request();
    request.date = "2030/06/01".to_string();
    let error = request.validate().unwrap_err();

    assert_eq!(error.field, "date");
    assert_eq!(error.message, "date must be a date in YYYY-MM-DD format");
}

#[test]
fn it_rejects_short_location() {
    let mut request = event_request();
    request.location = "WF".to_string();

    assert_eq!(request.validate().unwrap_err().field, "location");
}

#[test]
fn it_rejects_location_longer_than_255_characters() {
    let mut request = event_request();
    request.location = "x".repeat(256);
    let error = request.validate().unwrap_err();

    assert_eq!(error.field, "location");
    assert_eq!(error.message, "location must be at most 255 characters long");

    let mut request = event_request();
    request.location = "x".repeat(255);
    assert!(request.validate().is_ok());
}

#[test]
fn it_requires_every_field() {
    let error = EventRequest::default().validate().unwrap_err();

    assert_eq!(error.message, "name is required");
}

#[test]
fn it_checks_ownership() {
    let event = event(1);

    assert!(event.is_owned_by(1));
    assert!(!event.is_owned_by(2));
}

#[test]
fn it_replaces_details_but_keeps_identity() {
    let updated = event(1).with_details(EventDetails {
        name: "Wedding".to_string(),
        description: "A wedding at the Twins".to_string(),
        date: NaiveDate::from_ymd_opt(2031, 1, 1).unwrap(),
        location: "The Twins".to_string(),
    });

    assert_eq!(updated.id, 7);
    assert_eq!(updated.owner_id, 1);
    assert_eq!(updated.name, "Wedding");
    assert_eq!(updated.location, "The Twins");
}
