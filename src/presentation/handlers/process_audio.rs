use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::domain::{ChatId, FileId, Job, OutputFormat, UserId};
use crate::presentation::state::AppState;

const ACCEPTED_MESSAGE: &str = "Áudio recebido e enfileirado para processamento.";

/// Intake payload sent by the messaging adapter. Numeric fields may arrive as JSON
/// numbers or as strings.
#[derive(Debug, Deserialize)]
pub struct ProcessAudioRequest {
    #[serde(default)]
    pub chat_id: Option<NumericField>,
    #[serde(default)]
    pub user_id: Option<NumericField>,
    #[serde(default)]
    pub file_id: Option<String>,
    /// Epoch seconds of the chat message.
    #[serde(default)]
    pub message_date: Option<NumericField>,
    #[serde(default)]
    pub output_format: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl NumericField {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            NumericField::Integer(n) => Some(*n),
            NumericField::Float(f) => integral(*f),
            NumericField::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// `1.0` is accepted as `1`; `1.9` and values outside `i64` are not.
fn integral(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then(|| value as i64)
}

impl ProcessAudioRequest {
    pub fn into_job(self) -> Result<Job, String> {
        let chat_id = required_id("chat_id", self.chat_id.as_ref())?;
        let user_id = required_id("user_id", self.user_id.as_ref())?;
        let file_id = self
            .file_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| "Missing required field: file_id".to_string())?;

        // Non-numeric or non-positive timestamps count as absent.
        let message_timestamp = self
            .message_date
            .as_ref()
            .and_then(NumericField::as_i64)
            .filter(|ts| *ts > 0);

        Ok(Job::new(
            ChatId::new(chat_id),
            UserId::new(user_id),
            FileId::new(file_id),
            message_timestamp,
            OutputFormat::from_hint(self.output_format.as_deref()),
        ))
    }
}

fn required_id(name: &str, field: Option<&NumericField>) -> Result<i64, String> {
    let field = field.ok_or_else(|| format!("Missing required field: {}", name))?;
    field
        .as_i64()
        .ok_or_else(|| format!("Invalid {}: expected an integer", name))
}

/// Rides in the 202 response's extensions. The job starts once the server drops the
/// response after writing it, so no stage can start before the acknowledgement exists.
#[derive(Clone)]
struct JobRelease {
    _sender: Arc<oneshot::Sender<()>>,
}

#[derive(Serialize)]
pub struct AcceptedResponse {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accepts a job and answers before any pipeline stage has run.
#[tracing::instrument(skip(state, payload))]
pub async fn process_audio_handler(
    State(state): State<AppState>,
    payload: Result<Json<ProcessAudioRequest>, JsonRejection>,
) -> impl IntoResponse {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::warn!(error = %rejection.body_text(), "Unreadable intake request");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: rejection.body_text(),
                }),
            )
                .into_response();
        }
    };

    let job = match request.into_job() {
        Ok(job) => job,
        Err(error) => {
            tracing::warn!(error = %error, "Rejected intake request");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response();
        }
    };

    tracing::info!(
        job_id = %job.id,
        chat_id = %job.chat_id,
        user_id = %job.user_id,
        "Audio job accepted"
    );

    // Detached: the outcome is reported to the chat, never through this response.
    let (release_tx, release_rx) = oneshot::channel::<()>();
    drop(state.dispatcher.dispatch_after(job, async move {
        // Resolves with an error once the sender is dropped; nothing is ever sent.
        let _ = release_rx.await;
    }));

    let mut response = (
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            status: "received",
            message: ACCEPTED_MESSAGE,
        }),
    )
        .into_response();
    response
        .extensions_mut()
        .insert(JobRelease {
            _sender: Arc::new(release_tx),
        });
    response
}
