pub mod attendee_controller;
pub mod auth_controller;
pub mod event_controller;
pub mod utils_controller;
