//! HTTP transport implementation using reqwest.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::redirect::Policy;
use serde_json::Value;
use url::Url;

use crate::domain::AppError;
use crate::ports::HttpTransport;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP transport.
///
/// Manifest retrieval follows redirects; link probes do not, so a redirecting
/// asset host counts as reachable without touching the redirect target. Every
/// request carries the bearer credential when one is configured.
#[derive(Clone)]
pub struct ReqwestTransport {
    bearer_token: Option<String>,
    client: Client,
    probe_client: Client,
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("bearer_token", &self.bearer_token.as_ref().map(|_| "[REDACTED]"))
            .finish_non_exhaustive()
    }
}

impl ReqwestTransport {
    pub fn new(bearer_token: Option<String>, timeout: Option<Duration>) -> Result<Self, AppError> {
        let client = build_client(Client::builder(), timeout)?;
        let probe_client = build_client(Client::builder().redirect(Policy::none()), timeout)?;

        Ok(Self { bearer_token, client, probe_client })
    }

    pub fn is_authenticated(&self) -> bool {
        self.bearer_token.is_some()
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.bearer_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

fn build_client(
    builder: reqwest::blocking::ClientBuilder,
    timeout: Option<Duration>,
) -> Result<Client, AppError> {
    let builder = builder.user_agent(USER_AGENT);
    let builder = match timeout {
        Some(timeout) => builder.timeout(timeout),
        None => builder,
    };
    builder.build().map_err(|e| AppError::config_error(format!("Failed to create HTTP client: {}", e)))
}

fn ensure_success(url: &Url, response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if is_failure(status) {
        return Err(AppError::http_status(
            url.as_str(),
            status.as_u16(),
            status.canonical_reason().unwrap_or("request failed"),
        ));
    }
    Ok(response)
}

/// 4xx and 5xx are failures; redirects and informational codes are not.
fn is_failure(status: StatusCode) -> bool {
    status.is_client_error() || status.is_server_error()
}

impl HttpTransport for ReqwestTransport {
    fn head(&self, url: &Url) -> Result<(), AppError> {
        let response = self
            .authorize(self.probe_client.head(url.clone()))
            .send()
            .map_err(|e| AppError::http_transport(url.as_str(), e.to_string()))?;

        ensure_success(url, response).map(|_| ())
    }

    fn get_json(&self, url: &Url) -> Result<Value, AppError> {
        let response = self
            .authorize(self.client.get(url.clone()))
            .send()
            .map_err(|e| AppError::http_transport(url.as_str(), e.to_string()))?;

        let body = ensure_success(url, response)?
            .text()
            .map_err(|e| AppError::http_transport(url.as_str(), e.to_string()))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::Parse { what: url.to_string(), details: e.to_string() })
    }
}
