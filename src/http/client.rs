//! HTTP client wrapper for the single audit request

use crate::error::Result;
use crate::models::AuditConfig;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::debug;

/// Redirects followed before the request fails
const MAX_REDIRECTS: usize = 30;

/// HTTP client configured from the audit settings
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HttpClient from audit configuration
    pub fn from_config(config: &AuditConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;

        Ok(Self { client })
    }

    /// Sends one GET request. Failures are returned as-is, there is no retry.
    pub async fn get(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await?;
        debug!("Response: {} for {}", response.status(), response.url());
        Ok(response)
    }
}
