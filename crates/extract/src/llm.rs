use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Text-completion collaborator: a fixed system instruction plus user
/// content in, free text out. One call per work item, no retries.
#[allow(async_fn_in_trait)]
pub trait CompletionClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ServiceError>;
}

#[derive(Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    system: String,
    prompt: String,
    stream: bool,
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

impl OllamaClient {
    pub fn new(base_url: String, model: String) -> Self {
        Self {
            base_url,
            model,
            client: reqwest::Client::new(),
        }
    }
}

impl CompletionClient for OllamaClient {
    async fn complete(&self, system: &str, user: &str) -> Result<String, ServiceError> {
        let url = format!("{}/api/generate", self.base_url);

        let request = OllamaRequest {
            model: self.model.clone(),
            system: system.to_string(),
            prompt: user.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ServiceError::Status(response.status().as_u16()));
        }

        let body: OllamaResponse = response
            .json()
            .await
            .map_err(|e| ServiceError::MalformedResponse(e.to_string()))?;

        Ok(body.response)
    }
}

/// Scripted completion client for tests and offline runs. Responses are
/// handed out in push order; an exhausted script fails the way the live
/// service would.
#[derive(Clone, Default)]
pub struct MockCompletionClient {
    script: Arc<Mutex<VecDeque<Result<String, ServiceError>>>>,
}

impl MockCompletionClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_response(&self, text: impl Into<String>) {
        self.lock().push_back(Ok(text.into()));
    }

    pub fn push_failure(&self, reason: impl Into<String>) {
        self.lock()
            .push_back(Err(ServiceError::Transport(reason.into())));
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Result<String, ServiceError>>> {
        self.script.lock().expect("mock script lock poisoned")
    }
}

impl CompletionClient for MockCompletionClient {
    async fn complete(&self, _system: &str, _user: &str) -> Result<String, ServiceError> {
        self.lock()
            .pop_front()
            .unwrap_or(Err(ServiceError::ScriptExhausted))
    }
}
