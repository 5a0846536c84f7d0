use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::application::ports::{ChatNotifier, RemoteError};
use crate::domain::ChatId;
use crate::infrastructure::http::{classify_send_error, ensure_success};

const SERVICE: &str = "telegram-adapter";

/// Client of the messaging adapter's `/send-reply` and `/send-file` endpoints.
pub struct TelegramNotifier {
    client: Client,
    base_url: String,
    text_timeout: Duration,
    file_timeout: Duration,
}

#[derive(Serialize)]
struct SendReplyRequest<'a> {
    chat_id: ChatId,
    message_text: &'a str,
}

#[derive(Serialize)]
struct SendFileRequest<'a> {
    chat_id: ChatId,
    file_url: &'a str,
    caption: &'a str,
    file_type: &'a str,
}

impl TelegramNotifier {
    pub fn new(base_url: &str, text_timeout: Duration, file_timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            text_timeout,
            file_timeout,
        }
    }

    async fn post<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        timeout: Duration,
    ) -> Result<(), RemoteError> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(SERVICE, e))?;

        ensure_success(SERVICE, response).await.map(|_| ())
    }
}

#[async_trait]
impl ChatNotifier for TelegramNotifier {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RemoteError> {
        let body = SendReplyRequest {
            chat_id,
            message_text: text,
        };
        self.post("/send-reply", &body, self.text_timeout).await?;

        tracing::debug!(chat_id = %chat_id, "Text message delivered");
        Ok(())
    }

    async fn send_file(
        &self,
        chat_id: ChatId,
        file_url: &str,
        caption: &str,
        file_type: &str,
    ) -> Result<(), RemoteError> {
        let body = SendFileRequest {
            chat_id,
            file_url,
            caption,
            file_type,
        };
        self.post("/send-file", &body, self.file_timeout).await?;

        tracing::debug!(chat_id = %chat_id, file_type, "File delivered");
        Ok(())
    }
}
