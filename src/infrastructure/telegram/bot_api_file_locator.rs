use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{FileLocator, RemoteError};
use crate::domain::FileId;
use crate::infrastructure::http::{classify_send_error, read_json};
use crate::infrastructure::observability::redact_bot_token;

pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
const SERVICE: &str = "telegram-bot-api";

/// Resolves chat file ids through the Bot API `getFile` method.
pub struct BotApiFileLocator {
    client: Client,
    api_base_url: String,
    bot_token: String,
    timeout: Duration,
}

#[derive(Deserialize)]
struct GetFileResponse {
    ok: bool,
    result: Option<TelegramFile>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TelegramFile {
    file_path: Option<String>,
}

impl BotApiFileLocator {
    pub fn new(api_base_url: &str, bot_token: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
            timeout,
        }
    }

    fn download_url(&self, file_path: &str) -> String {
        format!(
            "{}/file/bot{}/{}",
            self.api_base_url,
            self.bot_token,
            file_path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl FileLocator for BotApiFileLocator {
    async fn locate(&self, file_id: &FileId) -> Result<String, RemoteError> {
        if self.bot_token.trim().is_empty() {
            return Err(RemoteError::InvalidRequest {
                service: SERVICE,
                reason: "bot token is not configured".to_string(),
            });
        }

        let url = format!("{}/bot{}/getFile", self.api_base_url, self.bot_token);
        tracing::debug!(url = %redact_bot_token(&url), file_id = %file_id, "Looking up file");

        let response = self
            .client
            .get(&url)
            .query(&[("file_id", file_id.as_str())])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(SERVICE, e.without_url()))?;
        let status = response.status().as_u16();

        let body: GetFileResponse = read_json(SERVICE, response).await?;
        if !body.ok {
            return Err(RemoteError::Remote {
                service: SERVICE,
                status,
                message: body
                    .description
                    .unwrap_or_else(|| "getFile was not ok".to_string()),
            });
        }

        let file_path = body
            .result
            .and_then(|file| file.file_path)
            .filter(|path| !path.is_empty())
            .ok_or_else(|| RemoteError::Remote {
                service: SERVICE,
                status,
                message: "getFile returned no file_path".to_string(),
            })?;

        let download_url = self.download_url(&file_path);
        tracing::debug!(file_url = %redact_bot_token(&download_url), "File located");

        Ok(download_url)
    }
}
