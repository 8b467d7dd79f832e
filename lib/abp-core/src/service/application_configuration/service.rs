use super::ApplicationConfigurationService;
use super::dto::ApplicationConfigurationDTO;
use crate::provider::rest::error::RestError;
use crate::provider::rest::{RestOptions, RestRequest};

impl ApplicationConfigurationService {
    /// Current API target name from the environment, `None` meaning the default API.
    pub fn api_name(&self) -> Option<String> {
        self.environment
            .get_settings()
            .application_name()
            .map(ToOwned::to_owned)
    }

    pub async fn get_configuration(&self) -> Result<ApplicationConfigurationDTO, RestError> {
        let api_name = self.api_name();
        tracing::debug!(?api_name, "Fetching application configuration");

        self.rest_service
            .request(
                RestRequest::application_configuration(),
                RestOptions { api_name },
            )
            .await
            .map(ApplicationConfigurationDTO::from)
    }
}
