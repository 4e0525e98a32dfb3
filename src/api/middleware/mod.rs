pub mod auth_mw;
pub mod security_mw;
