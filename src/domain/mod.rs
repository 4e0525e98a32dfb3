pub mod attendee;
pub mod crypto;
pub mod error;
pub mod event;
pub mod jwt;
pub mod repository;
pub mod user;
pub mod validation;
