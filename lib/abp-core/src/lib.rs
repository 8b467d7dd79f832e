use std::sync::Arc;

use provider::environment::EnvironmentProvider;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use provider::rest::RestService;
use provider::rest::http::HttpRestService;
use service::application_configuration::ApplicationConfigurationService;

pub mod config;
pub mod provider;
pub mod service;

/// Process-wide entry point. Build once and share by reference.
#[derive(Clone)]
pub struct AbpCore {
    pub rest_service: Arc<dyn RestService>,
    pub application_configuration_service: ApplicationConfigurationService,
}

impl AbpCore {
    pub fn new(
        environment: Arc<dyn EnvironmentProvider>,
        http_client: Option<Arc<dyn HttpClient>>,
    ) -> AbpCore {
        let http_client = http_client.unwrap_or_else(|| Arc::new(ReqwestClient::default()));
        let rest_service: Arc<dyn RestService> =
            Arc::new(HttpRestService::new(http_client, environment.clone()));

        AbpCore {
            application_configuration_service: ApplicationConfigurationService::new(
                rest_service.clone(),
                environment,
            ),
            rest_service,
        }
    }
}
