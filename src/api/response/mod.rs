pub mod auth_response;
pub mod repository_response;
