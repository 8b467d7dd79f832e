use thiserror::Error;

use crate::provider::http_client;

#[derive(Debug, Error)]
pub enum RestError {
    #[error("No API URL configured for `{api_name}` and no default API")]
    MissingApiUrl { api_name: String },
    #[error("Invalid request URL: `{0}`")]
    InvalidUrl(#[from] url::ParseError),
    #[error(transparent)]
    HttpClient(#[from] http_client::Error),
}
