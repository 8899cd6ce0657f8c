//! HTTP client service
//!
//! Executes request descriptors against the Places API

use crate::models::{HttpMethod, RequestDescriptor};
use crate::utils::error::{ErrorContext, PlacesResult};
use crate::utils::logging::{request_log_summary, truncate_content};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error};

/// Transport-level failure, kept apart from response bodies
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Connection, DNS, timeout or body read failure
    #[error("Network error: {message}")]
    Network { message: String },

    /// Non-2xx status; `body` is the raw response text
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// Executes one HTTP request per call and returns the raw body
///
/// Implementations must not retry or cache.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: &RequestDescriptor) -> Result<String, TransportError>;
}

/// `reqwest` backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout: Duration,
}

impl ReqwestTransport {
    /// Create a transport whose requests give up after `timeout`
    pub fn new(timeout: Duration) -> PlacesResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("{}/{}", crate::NAME, crate::VERSION))
            .build()
            .configuration_context("Failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    fn network_error(&self, err: &reqwest::Error) -> TransportError {
        let message = if err.is_timeout() {
            format!("Request timed out after {:?}", self.timeout)
        } else if err.is_connect() {
            format!("Connection failed: {}", err)
        } else {
            format!("Request failed: {}", err)
        };
        TransportError::Network { message }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: &RequestDescriptor) -> Result<String, TransportError> {
        debug!("Sending Places request: {}", request_log_summary(request));

        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            let err = self.network_error(&e);
            error!("Places request to {} failed: {}", request.url, err);
            err
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| TransportError::Network {
            message: format!("Failed to read response body: {}", e),
        })?;

        if status.is_success() {
            debug!("Places request completed: {} ({} bytes)", status, body.len());
            Ok(body)
        } else {
            error!("Places API request failed: {} - {}", status, truncate_content(&body, 200));
            Err(TransportError::HttpStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}
