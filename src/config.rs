//! Runtime configuration utilities for clinician-scope.

use std::{env, str::FromStr};

use serde::Deserialize;

const DEFAULT_EUTILS_BASE: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";
const DEFAULT_OPENAI_BASE: &str = "https://api.openai.com/v1";

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Contact email for PubMed E-utilities courtesy policy.
    pub pubmed_email: String,
    /// Tool name sent with PubMed requests.
    pub pubmed_tool: String,
    /// Maximum publication matches fetched per lookup.
    pub max_results: usize,
    /// Base URL for the E-utilities endpoints.
    pub eutils_base: String,
    /// Credential for the completion endpoint. Absent degrades
    /// summarization to a placeholder without aborting the lookup.
    pub openai_api_key: Option<String>,
    /// Completion model identifier.
    pub openai_model: String,
    /// Base URL for the completion endpoint.
    pub openai_base: String,
    /// Output-length bound for generated summaries.
    pub summary_max_tokens: u32,
    /// Per-request timeout in seconds.
    pub http_timeout_secs: u64,
    /// Extra attempts after a retryable failure.
    pub http_retries: u32,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let pubmed_email =
            env::var("PUBMED_EMAIL").unwrap_or_else(|_| "research@example.com".to_string());
        let pubmed_tool =
            env::var("PUBMED_TOOL").unwrap_or_else(|_| "clinician_scope".to_string());
        let eutils_base =
            env::var("EUTILS_BASE_URL").unwrap_or_else(|_| DEFAULT_EUTILS_BASE.to_string());
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let openai_model =
            env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let openai_base =
            env::var("OPENAI_BASE_URL").unwrap_or_else(|_| DEFAULT_OPENAI_BASE.to_string());

        Ok(Self {
            pubmed_email,
            pubmed_tool,
            max_results: parsed_env("MAX_RESULTS").unwrap_or(5),
            eutils_base,
            openai_api_key,
            openai_model,
            openai_base,
            summary_max_tokens: parsed_env("SUMMARY_MAX_TOKENS").unwrap_or(100),
            http_timeout_secs: parsed_env("HTTP_TIMEOUT_SECS").unwrap_or(10),
            http_retries: parsed_env("HTTP_RETRIES").unwrap_or(1),
        })
    }
}

fn parsed_env<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}
