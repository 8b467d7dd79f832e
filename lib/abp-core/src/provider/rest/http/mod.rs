use std::sync::Arc;

use serde_json::Value;
use url::Url;

use super::error::RestError;
use super::{RestOptions, RestRequest, RestService};
use crate::config::core_config::DEFAULT_API_NAME;
use crate::provider::environment::EnvironmentProvider;
use crate::provider::http_client::HttpClient;

/// `RestService` over an `HttpClient`, resolving base URLs from the
/// environment's `apis` section.
pub struct HttpRestService {
    http_client: Arc<dyn HttpClient>,
    environment: Arc<dyn EnvironmentProvider>,
}

impl HttpRestService {
    pub fn new(
        http_client: Arc<dyn HttpClient>,
        environment: Arc<dyn EnvironmentProvider>,
    ) -> Self {
        Self {
            http_client,
            environment,
        }
    }

    fn resolve_url(&self, request: &RestRequest, options: &RestOptions) -> Result<Url, RestError> {
        let mut url = if let Some(url) = absolute_url(&request.url) {
            url
        } else {
            let settings = self.environment.get_settings();
            let api_name = options.api_name.as_deref();
            let base_url = settings
                .api_url(api_name)
                .ok_or_else(|| RestError::MissingApiUrl {
                    api_name: api_name.unwrap_or(DEFAULT_API_NAME).to_owned(),
                })?;

            Url::parse(&format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                request.url.trim_start_matches('/')
            ))?
        };

        if !request.params.is_empty() {
            url.query_pairs_mut().extend_pairs(&request.params);
        }

        Ok(url)
    }
}

#[async_trait::async_trait]
impl RestService for HttpRestService {
    async fn request(
        &self,
        request: RestRequest,
        options: RestOptions,
    ) -> Result<Value, RestError> {
        let url = self.resolve_url(&request, &options)?;

        tracing::debug!(
            method = %request.method,
            %url,
            api_name = ?options.api_name,
            "Sending REST request"
        );

        let mut builder = self
            .http_client
            .request(request.method, url.as_str())
            .accept_json();
        if let Some(body) = &request.body {
            builder = builder.json(body)?;
        }

        // anything but 2xx, including unfollowed 3xx, fails here
        let response = builder.send().await?.error_for_status()?;

        // empty 2xx responses carry no document
        if response.is_empty() {
            return Ok(Value::Null);
        }

        Ok(response.json()?)
    }
}

/// Request URLs that already name an HTTP(S) endpoint skip base URL resolution.
fn absolute_url(url: &str) -> Option<Url> {
    Url::parse(url)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}
