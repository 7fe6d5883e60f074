use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::api::traits::CompatibilityService;
use crate::core::error::{DevRadarError, Result};
use crate::core::result::{CompatibilityResult, ScanResult};

const USER_AGENT: &str = concat!("devradar-cli/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the DevRadar v1 API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new<S: Into<String>>(base_url: S) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post(&self, endpoint: &str, body: &Value, fallback: &str) -> Result<Value> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        debug!("{} responded with {}", url, status);

        if !status.is_success() {
            let message = response
                .json::<Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.pointer("/error/message")
                        .and_then(Value::as_str)
                        .filter(|m| !m.is_empty())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| fallback.to_string());
            // Surfaced to the user through the rendered error.
            debug!("{} failed with {}: {}", url, status, message);
            return Err(DevRadarError::api(message));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| DevRadarError::invalid_response(e.to_string()))
    }
}

#[async_trait]
impl CompatibilityService for ApiClient {
    async fn check_compatibility(&self, tech_a: &str, tech_b: &str) -> Result<CompatibilityResult> {
        let body = json!({ "techA": tech_a, "techB": tech_b });
        let value = self.post("check", &body, "Check request failed").await?;
        CompatibilityResult::from_value(value)
    }

    async fn scan_package_json(&self, manifest: &Map<String, Value>) -> Result<ScanResult> {
        let body = json!({ "packageJson": manifest });
        let value = self.post("scan", &body, "Scan request failed").await?;
        ScanResult::from_value(value)
    }
}
