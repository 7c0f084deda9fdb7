//! Title summarization through an OpenAI-compatible chat endpoint.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Settings;

/// Placeholder returned when no API credential is configured.
pub const UNAVAILABLE: &str = "AI summarization unavailable";

const PROMPT_PREFIX: &str = "Summarize this research: ";

/// One-shot summarizer over a chat-completion endpoint.
///
/// The credential is injected at construction, so a missing key is a
/// property of the instance and never an ambient lookup at call time.
pub struct Summarizer {
    http: Client,
    base: String,
    model: String,
    api_key: Option<String>,
    max_tokens: u32,
}

impl Summarizer {
    pub fn new(settings: &Settings) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .build()
            .context("building summarizer HTTP client")?;
        Ok(Self {
            http,
            base: settings.openai_base.clone(),
            model: settings.openai_model.clone(),
            api_key: settings.openai_api_key.clone(),
            max_tokens: settings.summary_max_tokens,
        })
    }

    /// Whether a completion call would be attempted at all.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Summarize `text`, degrading to a sentinel string rather than
    /// failing the surrounding workflow.
    ///
    /// Without a credential this returns [`UNAVAILABLE`] immediately
    /// and performs no network call.
    pub async fn summarize(&self, text: &str) -> String {
        let Some(api_key) = self.api_key.as_deref() else {
            return UNAVAILABLE.to_string();
        };
        match self.complete(api_key, text).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(%err, "completion call failed");
                format!("summary unavailable: {err}")
            }
        }
    }

    async fn complete(&self, api_key: &str, text: &str) -> Result<String> {
        let request = CompletionRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: format!("{PROMPT_PREFIX}{text}"),
            }],
            max_tokens: self.max_tokens,
        };
        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .context("sending completion request")?;
        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("completion endpoint returned HTTP {status}"));
        }
        let payload: CompletionResponse =
            resp.json().await.context("decoding completion response")?;
        payload
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| anyhow!("completion response contained no choices"))
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}
