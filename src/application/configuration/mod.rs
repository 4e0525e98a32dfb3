pub mod app;
#[allow(clippy::module_inception)]
pub mod configuration;
pub mod database;
pub mod dto;
