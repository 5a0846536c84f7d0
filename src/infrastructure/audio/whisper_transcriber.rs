use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{RemoteError, Transcriber};
use crate::infrastructure::http::{classify_send_error, read_json};
use crate::infrastructure::observability::{preview_text, redact_bot_token};

const SERVICE: &str = "whisper";

/// Client of the Whisper service, which downloads the audio itself.
pub struct WhisperTranscriber {
    client: Client,
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct TranscribeRequest<'a> {
    file_url: &'a str,
}

#[derive(Deserialize)]
struct TranscribeResponse {
    #[serde(default)]
    transcription: Option<String>,
}

impl WhisperTranscriber {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl Transcriber for WhisperTranscriber {
    async fn transcribe(&self, file_url: &str) -> Result<String, RemoteError> {
        let url = format!("{}/transcribe", self.base_url);

        tracing::debug!(file_url = %redact_bot_token(file_url), "Sending audio to Whisper");

        let response = self
            .client
            .post(&url)
            .json(&TranscribeRequest { file_url })
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(SERVICE, e))?;

        let result: TranscribeResponse = read_json(SERVICE, response).await?;
        let transcript = result.transcription.unwrap_or_default().trim().to_string();

        tracing::debug!(preview = %preview_text(&transcript), "Whisper transcription received");

        Ok(transcript)
    }
}
