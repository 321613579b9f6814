use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

use crate::utils::types::{HistoryRecord, ModelOption, PromptRequest, PromptResponse};

// ============================================================================
// Constants
// ============================================================================

// Generous ceiling so slow model inference is not cut off mid-call.
const REQUEST_TIMEOUT_SECS: u64 = 300;

// ============================================================================
// Error Types
// ============================================================================

/// Failure modes of the backend contract. "No model selected yet" is not an
/// error; `fetch_selected_model` reports it as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("record not found")]
    NotFound,
}

// ============================================================================
// Wire Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct PromptReply {
    response: PromptResponse,
}

#[derive(Debug, Clone, Deserialize)]
struct LlmsReply {
    llms: Vec<LlmEntry>,
}

#[derive(Debug, Clone, Deserialize)]
struct LlmEntry {
    name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct SelectedReply {
    selected_llm: String,
}

#[derive(Debug, Clone, Serialize)]
struct SelectRequest<'a> {
    model_name: &'a str,
}

// ============================================================================
// API Client
// ============================================================================

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Arc<String>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: Arc::new(base_url.into().trim_end_matches('/').to_string()),
        })
    }

    // ========================================================================
    // Prompt Submission
    // ========================================================================

    pub async fn submit_prompt(
        &self,
        request: &PromptRequest,
    ) -> Result<PromptResponse, ApiError> {
        let url = format!("{}/prompt", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to submit prompt: {}", e)))?;

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let reply: PromptReply = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to parse prompt response: {}", e)))?;

        Ok(reply.response)
    }

    // ========================================================================
    // Model Registry
    // ========================================================================

    pub async fn fetch_models(&self) -> Result<Vec<ModelOption>, ApiError> {
        let url = format!("{}/llms/", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to fetch models: {}", e)))?;

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let reply: LlmsReply = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to parse models response: {}", e)))?;

        // Order as received; the backend decides presentation order.
        Ok(reply
            .llms
            .into_iter()
            .map(|entry| ModelOption::from_name(entry.name))
            .collect())
    }

    /// Fetches the backend's active model id. The backend answers non-2xx
    /// when nothing has been selected yet, so that case resolves to
    /// `Ok(None)` instead of an error; only transport failures propagate.
    pub async fn fetch_selected_model(&self) -> Result<Option<String>, ApiError> {
        let url = format!("{}/llms/selected", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to fetch selected model: {}", e)))?;

        if !response.status().is_success() {
            return Ok(None);
        }

        let reply: SelectedReply = response.json().await.map_err(|e| {
            ApiError::Transport(format!("failed to parse selected model response: {}", e))
        })?;

        Ok(Some(reply.selected_llm))
    }

    pub async fn select_model(&self, model_name: &str) -> Result<(), ApiError> {
        let url = format!("{}/llms/select", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SelectRequest { model_name })
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to select model: {}", e)))?;

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        Ok(())
    }

    // ========================================================================
    // Response History
    // ========================================================================

    pub async fn fetch_responses(&self) -> Result<Vec<HistoryRecord>, ApiError> {
        let url = format!("{}/responses", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to fetch history: {}", e)))?;

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let records: Vec<HistoryRecord> = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to parse history response: {}", e)))?;

        Ok(records)
    }

    pub async fn fetch_response(&self, id: &str) -> Result<HistoryRecord, ApiError> {
        let url = format!("{}/responses/{}", self.base_url, id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to fetch record: {}", e)))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }

        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        let record: HistoryRecord = response
            .json()
            .await
            .map_err(|e| ApiError::Transport(format!("failed to parse record response: {}", e)))?;

        Ok(record)
    }
}

// ============================================================================
// Error Body Helpers
// ============================================================================

async fn server_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    ApiError::Server {
        status,
        message: server_message(body),
    }
}

/// FastAPI-style error bodies carry the useful text under "detail"; anything
/// else is surfaced as-is.
fn server_message(body: String) -> String {
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|value| {
            value
                .get("detail")
                .and_then(|detail| detail.as_str())
                .map(str::to_string)
        })
        .unwrap_or(body)
}
