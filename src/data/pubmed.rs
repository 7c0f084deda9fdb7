//! PubMed E-utilities client: identifier search and title resolution.

use std::{collections::HashMap, time::Duration};

use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tokio::time::sleep;
use tracing::warn;
use urlencoding::encode;

use crate::{config::Settings, error::LookupError};

/// Sentinel used when a summary document carries no usable title.
pub const NO_TITLE: &str = "No Title Found";

/// Pause between retry attempts, matching the E-utilities courtesy rate.
const RETRY_BACKOFF: Duration = Duration::from_millis(350);

/// Client over the two E-utilities endpoints this tool consumes.
#[derive(Debug, Clone)]
pub struct PubmedClient {
    http: Client,
    base: String,
    tool: String,
    email: String,
    retries: u32,
}

impl PubmedClient {
    pub fn new(settings: &Settings) -> Result<Self, LookupError> {
        let http = Client::builder()
            .user_agent(format!("clinician-scope/0.1 (+{})", settings.pubmed_email))
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .gzip(true)
            .brotli(true)
            .build()?;
        Ok(Self {
            http,
            base: settings.eutils_base.clone(),
            tool: settings.pubmed_tool.clone(),
            email: settings.pubmed_email.clone(),
            retries: settings.http_retries,
        })
    }

    /// Search for publication identifiers matching `term`.
    ///
    /// Identifiers come back in provider order, never re-sorted. A
    /// transport failure or non-success status is an `Err`, distinct
    /// from a genuine zero-match search which is `Ok` and empty.
    pub async fn search(&self, term: &str, retmax: usize) -> Result<Vec<String>, LookupError> {
        if term.trim().is_empty() {
            return Ok(Vec::new());
        }
        let url = format!(
            "{base}/esearch.fcgi?db=pubmed&retmode=json&term={term}&retmax={retmax}&tool={tool}&email={email}",
            base = self.base,
            term = encode(term),
            retmax = retmax,
            tool = self.tool,
            email = self.email
        );
        let resp = self.get_with_retry(&url).await?;
        let payload: ESearchResponse = resp.json().await?;
        Ok(payload.esearchresult.idlist)
    }

    /// Resolve one identifier to its article title.
    ///
    /// A missing or empty title field yields the [`NO_TITLE`] sentinel;
    /// a failed call is a per-identifier `Err` the caller can annotate
    /// rather than drop.
    pub async fn resolve_title(&self, pmid: &str) -> Result<String, LookupError> {
        let url = format!(
            "{base}/esummary.fcgi?db=pubmed&retmode=json&id={pmid}&tool={tool}&email={email}",
            base = self.base,
            pmid = pmid,
            tool = self.tool,
            email = self.email
        );
        let resp = self.get_with_retry(&url).await?;
        let payload: ESummaryResponse = resp.json().await?;
        let title = payload
            .result
            .get(pmid)
            .and_then(|doc| doc.get("title"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|title| !title.is_empty());
        Ok(title.map_or_else(|| NO_TITLE.to_string(), str::to_string))
    }

    async fn get_with_retry(&self, url: &str) -> Result<reqwest::Response, LookupError> {
        let mut attempt = 0u32;
        loop {
            let result = match self.http.get(url).send().await {
                Ok(resp) if resp.status().is_success() => Ok(resp),
                Ok(resp) => Err(LookupError::Status {
                    status: resp.status(),
                }),
                Err(err) => Err(LookupError::Transport(err)),
            };
            match result {
                Ok(resp) => return Ok(resp),
                Err(err) if attempt < self.retries && err.is_retryable() => {
                    attempt += 1;
                    warn!(%url, %err, attempt, "retrying E-utilities request");
                    sleep(RETRY_BACKOFF).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: ESearchResult,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

/// The esummary payload keys its `result` object by identifier, next to
/// a `uids` index array, so the documents stay untyped until looked up.
#[derive(Debug, Deserialize)]
struct ESummaryResponse {
    #[serde(default)]
    result: HashMap<String, Value>,
}
