pub mod controller;
pub mod dto;
pub mod extractor;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server_state;
pub mod utils;
