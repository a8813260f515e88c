//! HTTP implementation of the database API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{
    DatabasesApi, FirewallRule, FirewallRulesRequest, FirewallRulesResponse, firewall_path,
};
use crate::error::{ApiError, Result};

/// Per-request timeout
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Token-authenticated client for the provider's v2 REST API
pub struct CloudClient {
    http: HttpClient,
    base_url: String,
    access_token: String,
}

impl CloudClient {
    /// Create a client talking to `base_url` (no trailing slash)
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("dbctl/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            access_token: access_token.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send(self.http.get(self.url(path))).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.http.put(self.url(path)).json(body)).await
    }

    /// Attach credentials, execute, and decode the response by status class
    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let request = builder
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .build()
            .map_err(ApiError::from)?;

        log::debug!("{} {}", request.method(), request.url());

        let response = self.http.execute(request).await.map_err(ApiError::from)?;
        let status = response.status();
        log::debug!("Response status: {}", status);

        match status {
            status if status.is_success() => {
                let text = response.text().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to read response: {}", e))
                })?;
                let data = serde_json::from_str::<T>(&text).map_err(|e| {
                    ApiError::InvalidResponse(format!(
                        "Failed to parse response: {}. Body was: {}",
                        e, text
                    ))
                })?;
                Ok(data)
            }
            StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized.into()),
            StatusCode::FORBIDDEN => Err(ApiError::Forbidden.into()),
            StatusCode::NOT_FOUND => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Resource not found".to_string());
                Err(ApiError::NotFound(error_msg).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Bad request".to_string());
                Err(ApiError::BadRequest(error_msg).into())
            }
            status if status.is_server_error() => {
                let error_msg = response
                    .text()
                    .await
                    .unwrap_or_else(|_| format!("Server error: {}", status));
                Err(ApiError::ServerError(error_msg).into())
            }
            _ => {
                let error_msg = format!("Unexpected status code: {}", status);
                Err(ApiError::InvalidResponse(error_msg).into())
            }
        }
    }
}

#[async_trait]
impl DatabasesApi for CloudClient {
    async fn list_firewall_rules(&self, cluster_id: &str) -> Result<Vec<FirewallRule>> {
        let response: FirewallRulesResponse = self.get(&firewall_path(cluster_id)).await?;
        Ok(response.rules)
    }

    async fn update_firewall_rules(
        &self,
        cluster_id: &str,
        request: &FirewallRulesRequest,
    ) -> Result<Vec<FirewallRule>> {
        let response: FirewallRulesResponse =
            self.put(&firewall_path(cluster_id), request).await?;
        Ok(response.rules)
    }
}
