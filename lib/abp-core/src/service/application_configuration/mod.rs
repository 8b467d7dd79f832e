use std::sync::Arc;

use crate::provider::environment::EnvironmentProvider;
use crate::provider::rest::RestService;

pub mod dto;
pub mod service;

#[derive(Clone)]
pub struct ApplicationConfigurationService {
    rest_service: Arc<dyn RestService>,
    environment: Arc<dyn EnvironmentProvider>,
}

impl ApplicationConfigurationService {
    pub fn new(
        rest_service: Arc<dyn RestService>,
        environment: Arc<dyn EnvironmentProvider>,
    ) -> Self {
        Self {
            rest_service,
            environment,
        }
    }
}
