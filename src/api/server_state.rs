use crate::application::configuration::app::AppConfiguration;
use crate::application::service::auth_service::AuthService;
use crate::domain::repository::{AttendeeRepository, EventRepository, UserRepository};
use std::sync::Arc;

#[derive(Clone)]
pub struct ServerState {
    pub config: AppConfiguration,
    pub user_repository: Arc<dyn UserRepository>,
    pub event_repository: Arc<dyn EventRepository>,
    pub attendee_repository: Arc<dyn AttendeeRepository>,
    pub auth_service: AuthService,
}

impl ServerState {
    pub fn new(
        config: AppConfiguration,
        user_repository: Arc<dyn UserRepository>,
        event_repository: Arc<dyn EventRepository>,
        attendee_repository: Arc<dyn AttendeeRepository>,
        auth_service: AuthService,
    ) -> Self {
        ServerState {
            config,
            user_repository,
            event_repository,
            attendee_repository,
            auth_service,
        }
    }
}

pub trait AuthServiceAware {
    fn get_auth_service(&self) -> &AuthService;
}

impl AuthServiceAware for ServerState {
    fn get_auth_service(&self) -> &AuthService {
        &self.auth_service
    }
}
