use std::collections::BTreeMap;

use serde_json::Value;

use crate::provider::http_client::Method;
use crate::provider::rest::error::RestError;

pub mod error;
pub mod http;

pub const APPLICATION_CONFIGURATION_PATH: &str = "/api/abp/application-configuration";

/// Executes REST calls against one of the configured backend APIs.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RestService: Send + Sync {
    async fn request(
        &self,
        request: RestRequest,
        options: RestOptions,
    ) -> Result<Value, RestError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct RestRequest {
    pub method: Method,
    pub url: String,
    pub params: BTreeMap<String, String>,
    pub body: Option<Value>,
}

impl RestRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            params: BTreeMap::new(),
            body: None,
        }
    }

    pub fn application_configuration() -> Self {
        Self::new(Method::Get, APPLICATION_CONFIGURATION_PATH)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Routing metadata. `api_name: None` selects the default API.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RestOptions {
    pub api_name: Option<String>,
}
