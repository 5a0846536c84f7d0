use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RemoteError, Summarizer};
use crate::domain::{Summary, UserId};
use crate::infrastructure::http::{classify_send_error, read_json};

const SERVICE: &str = "summarizer";

pub struct SummarizerClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    text: &'a str,
    user_id: UserId,
}

#[derive(Deserialize)]
struct SummarizeResponse {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    meeting_date: Option<String>,
}

impl SummarizerClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl Summarizer for SummarizerClient {
    async fn summarize(&self, transcript: &str, user_id: UserId) -> Result<Summary, RemoteError> {
        let url = format!("{}/summarize", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&SummarizeRequest {
                text: transcript,
                user_id,
            })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(SERVICE, e))?;

        let result: SummarizeResponse = read_json(SERVICE, response).await?;
        let meeting_date = result
            .meeting_date
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        tracing::debug!(
            has_summary = result.summary.is_some(),
            meeting_date = ?meeting_date,
            "Summarization completed"
        );

        Ok(Summary::new(result.summary.unwrap_or_default(), meeting_date))
    }
}
