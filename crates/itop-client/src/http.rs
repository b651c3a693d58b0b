//! reqwest transport for the iTop REST/JSON web service.
//!
//! Every call is a form-encoded POST to `/webservices/rest.php` carrying the
//! protocol version, credentials and the JSON-encoded operation.

use std::time::Duration;

use async_trait::async_trait;
use itop_protocol::{OperationRequest, RawResult};

use crate::backend::Backend;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const USER_AGENT: &str = "iTop-MCP-Server/1.0";

/// HTTP client for a single iTop instance.
pub struct ITopClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl ITopClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Backend for ITopClient {
    async fn submit(&self, request: &OperationRequest) -> ClientResult<RawResult> {
        let json_data =
            serde_json::to_string(request).map_err(|e| ClientError::Decode(e.to_string()))?;
        let form = [
            ("version", self.config.version.as_str()),
            ("auth_user", self.config.user.as_str()),
            ("auth_pwd", self.config.password.as_str()),
            ("json_data", json_data.as_str()),
        ];

        tracing::debug!(
            operation = %request.operation,
            class = request.class().unwrap_or(""),
            "submitting iTop operation"
        );

        let response = self
            .client
            .post(self.config.endpoint())
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "iTop request failed");
                ClientError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "iTop returned non-success status");
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let result: RawResult = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "failed to decode iTop response body");
            ClientError::Decode(e.to_string())
        })?;

        if !result.is_success() {
            tracing::debug!(
                code = result.code,
                message = result.message.as_deref().unwrap_or(""),
                "iTop reported an error"
            );
        }
        Ok(result)
    }
}
