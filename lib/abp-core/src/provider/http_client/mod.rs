pub mod reqwest_client;

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::Arc;

use itertools::Itertools;
use serde::Serialize;
use serde::de::DeserializeOwned;
use strum_macros::Display;
use thiserror::Error;

/// Transport used by the REST layer. One builder entry point per method and
/// a single `send` that carries a fully built request.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait HttpClient: Send + Sync {
    fn request(&self, method: Method, url: &str) -> RequestBuilder;

    async fn send(&self, request: Request) -> Result<Response, Error>;
}

pub type Headers = HashMap<String, String>;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Only 2xx counts as a usable answer; unfollowed redirects are failures too.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }
}

impl Display for StatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum Method {
    #[strum(serialize = "GET")]
    Get,
    #[strum(serialize = "POST")]
    Post,
    #[strum(serialize = "PUT")]
    Put,
    #[strum(serialize = "DELETE")]
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    pub method: Method,
    pub url: String,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub body: Vec<u8>,

    pub request: Request,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    HttpError(String),
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("HTTP status code is error: {0}")]
    StatusCodeIsError(StatusCode),
}

impl Response {
    /// Rejects every status outside 2xx.
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.status.is_success() {
            return Ok(self);
        }

        let error = Error::StatusCodeIsError(self.status);
        log_failure(&self.request, &error);
        Err(error)
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn json<T: DeserializeOwned>(self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|e| {
            let error = Error::JsonError(e);
            log_failure(&self.request, &error);
            error
        })
    }
}

pub struct RequestBuilder {
    client: Arc<dyn HttpClient>,
    request: Request,
}

impl RequestBuilder {
    pub fn new(client: Arc<dyn HttpClient>, method: Method, url: &str) -> Self {
        Self {
            client,
            request: Request {
                method,
                url: url.to_owned(),
                headers: Headers::default(),
                body: None,
            },
        }
    }

    pub fn header(mut self, key: &str, value: &str) -> Self {
        self.request
            .headers
            .insert(key.to_owned(), value.to_owned());
        self
    }

    pub fn accept_json(self) -> Self {
        self.header("Accept", "application/json")
    }

    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, Error> {
        let body = serde_json::to_vec(value).map_err(|e| {
            let error = Error::JsonError(e);
            log_failure(&self.request, &error);
            error
        })?;

        self.request.body = Some(body);
        Ok(self.header("Content-Type", "application/json"))
    }

    pub async fn send(self) -> Result<Response, Error> {
        let Self { client, request } = self;
        tracing::trace!(
            method = %request.method,
            url = %request.url,
            headers = %format_headers(&request.headers),
            body = %format_body(request.body.as_deref()),
            "HTTP request"
        );

        match client.send(request.clone()).await {
            Ok(response) => {
                tracing::debug!(
                    method = %request.method,
                    url = %request.url,
                    status = %response.status,
                    "HTTP request finished"
                );
                tracing::trace!(body = %format_body(Some(&response.body)), "HTTP response");
                Ok(response)
            }
            Err(error) => {
                log_failure(&request, &error);
                Err(error)
            }
        }
    }
}

fn log_failure(request: &Request, error: &Error) {
    tracing::error!(method = %request.method, url = %request.url, %error, "HTTP request failed");
}

fn format_headers(headers: &Headers) -> String {
    if headers.is_empty() {
        return "<None>".to_owned();
    }

    headers
        .iter()
        .sorted_by(|(a, _), (b, _)| a.cmp(b))
        .map(|(k, v)| format!("{k}: {v}"))
        .join(", ")
}

fn format_body(body: Option<&[u8]>) -> String {
    match body {
        None => "<None>".to_owned(),
        Some(value) => match std::str::from_utf8(value) {
            Ok(text) => text.to_owned(),
            Err(_) => format!("{value:?}"),
        },
    }
}
