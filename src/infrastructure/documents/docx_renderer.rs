use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{DocumentRenderer, RemoteError};
use crate::domain::{OutputFormat, RenderRequest, RenderResponse};
use crate::infrastructure::http::{classify_send_error, read_json};

const SERVICE: &str = "docx-renderer";

/// Client of the template rendering service (`POST /generate`).
pub struct DocxRenderer {
    client: Client,
    base_url: String,
    timeout: Duration,
}

/// Template keys are the ones the minutes template declares.
#[derive(Serialize)]
struct TemplateData<'a> {
    texto: &'a str,
    data: &'a str,
    dia: &'a str,
    mes: &'a str,
    ano: &'a str,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    template_name: &'a str,
    data: TemplateData<'a>,
    format: OutputFormat,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    file_url: Option<String>,
    #[serde(default)]
    file_type: Option<String>,
}

impl DocxRenderer {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[async_trait]
impl DocumentRenderer for DocxRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderResponse, RemoteError> {
        let url = format!("{}/generate", self.base_url);
        let date = &request.fields.date;

        let body = GenerateRequest {
            template_name: &request.template_name,
            data: TemplateData {
                texto: &request.fields.text,
                data: &date.formatted,
                dia: &date.day,
                mes: &date.month,
                ano: &date.year,
            },
            format: request.format,
        };

        tracing::debug!(
            template = %request.template_name,
            format = %request.format,
            date = %date.formatted,
            "Requesting document rendering"
        );

        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(SERVICE, e))?;

        let result: GenerateResponse = read_json(SERVICE, response).await?;

        Ok(RenderResponse {
            file_url: result.file_url,
            file_type: result.file_type,
        })
    }
}
