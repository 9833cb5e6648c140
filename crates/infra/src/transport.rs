//! Management API transport
//!
//! One authenticated HTTP round trip per call against the configured
//! endpoint. Non-2xx statuses surface as the transport error taxonomy;
//! nothing is retried or reinterpreted here.

use std::time::Duration;

use async_trait::async_trait;
use edgekit_core::ports::ManagementTransport;
use edgekit_domain::{EdgeError, OrgConfig, Result};
use reqwest::header::ACCEPT;
use reqwest::{Method, Response, StatusCode};
use serde::Serialize;

use crate::http::HttpClient;

const USER_AGENT: &str = concat!("edgekit/", env!("CARGO_PKG_VERSION"));

/// Authenticated transport for one organization's Management API.
pub struct EdgeTransport {
    http: HttpClient,
    config: OrgConfig,
}

impl EdgeTransport {
    /// Create a transport for the given organization.
    pub fn new(config: OrgConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { http, config })
    }

    /// Organization this transport is bound to.
    pub fn org_name(&self) -> &str {
        &self.config.org_name
    }

    fn url_for(&self, path_and_query: &str) -> String {
        format!(
            "{}/{}",
            self.config.endpoint.trim_end_matches('/'),
            path_and_query.trim_start_matches('/')
        )
    }

    async fn execute(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<serde_json::Value>,
    ) -> Result<Response> {
        let mut builder = self
            .http
            .request(method, self.url_for(path_and_query))
            .basic_auth(&self.config.username, Some(&self.config.password))
            .header(ACCEPT, "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = self.http.send(builder).await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body_text =
            response.text().await.unwrap_or_else(|_| "unreadable response body".to_string());
        Err(status_error(status, &body_text))
    }

    async fn decode(response: Response) -> Result<serde_json::Value> {
        response.json().await.map_err(|err| {
            EdgeError::MalformedResponse(format!("response body is not valid JSON: {err}"))
        })
    }

    fn encode<T: Serialize + ?Sized>(body: &T) -> Result<serde_json::Value> {
        serde_json::to_value(body)
            .map_err(|err| EdgeError::Internal(format!("unserializable request body: {err}")))
    }

    /// GET a JSON document.
    pub async fn get(&self, path_and_query: &str) -> Result<serde_json::Value> {
        let response = self.execute(Method::GET, path_and_query, None).await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON reply.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        path_and_query: &str,
        body: &T,
    ) -> Result<serde_json::Value> {
        let body = Self::encode(body)?;
        let response = self.execute(Method::POST, path_and_query, Some(body)).await?;
        Self::decode(response).await
    }

    /// PUT a JSON body and decode the JSON reply.
    pub async fn put<T: Serialize + ?Sized>(
        &self,
        path_and_query: &str,
        body: &T,
    ) -> Result<serde_json::Value> {
        let body = Self::encode(body)?;
        let response = self.execute(Method::PUT, path_and_query, Some(body)).await?;
        Self::decode(response).await
    }

    /// DELETE and decode the JSON reply (the platform echoes the deleted
    /// entity).
    pub async fn delete(&self, path_and_query: &str) -> Result<serde_json::Value> {
        let response = self.execute(Method::DELETE, path_and_query, None).await?;
        Self::decode(response).await
    }

    /// POST with an empty body, discarding the reply.
    ///
    /// Used for status-change actions where the platform answers 204.
    pub async fn post_empty(&self, path_and_query: &str) -> Result<()> {
        self.execute(Method::POST, path_and_query, None).await?;
        Ok(())
    }
}

#[async_trait]
impl ManagementTransport for EdgeTransport {
    async fn get_json(&self, path_and_query: &str) -> Result<serde_json::Value> {
        self.get(path_and_query).await
    }
}

fn status_error(status: StatusCode, body: &str) -> EdgeError {
    let message = format!("HTTP {status}: {body}");
    match status.as_u16() {
        401 | 403 => EdgeError::Auth(message),
        404 => EdgeError::NotFound(message),
        _ => EdgeError::Transport(message),
    }
}
