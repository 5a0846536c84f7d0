use std::sync::Arc;

use chrono::Local;

use super::best_effort::{BestEffort, best_effort};
use super::messages::{GENERIC_FAILURE_MESSAGE, document_caption, document_failure_message};
use crate::application::ports::{
    ChatNotifier, DocumentRenderer, FileLocator, RemoteError, Summarizer, Transcriber,
};
use crate::domain::{
    DEFAULT_TEMPLATE_NAME, DocumentFields, Job, MeetingDate, PipelineStage, RenderRequest,
    RenderedDocument, Summary,
};

/// How the optional document branch ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentOutcome {
    Delivered { file_type: String },
    Failed { reason: String, notice: BestEffort },
}

/// Terminal state of one job run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobOutcome {
    Done {
        document: DocumentOutcome,
    },
    Failed {
        stage: PipelineStage,
        reason: String,
        notice: BestEffort,
    },
}

impl JobOutcome {
    pub fn terminal_stage(&self) -> PipelineStage {
        match self {
            JobOutcome::Done { .. } => PipelineStage::Done,
            JobOutcome::Failed { .. } => PipelineStage::Failed,
        }
    }
}

/// Drives one job through locate → transcribe → summarize → notify, then the
/// optional render → deliver branch.
///
/// Failures of the first four stages end the job in `Failed` after one generic notice.
/// Failures of the document branch are contained: the job still ends in `Done` and
/// the user gets a dedicated notice instead.
pub struct JobOrchestrator {
    file_locator: Arc<dyn FileLocator>,
    transcriber: Arc<dyn Transcriber>,
    summarizer: Arc<dyn Summarizer>,
    renderer: Arc<dyn DocumentRenderer>,
    notifier: Arc<dyn ChatNotifier>,
    template_name: String,
}

impl JobOrchestrator {
    pub fn new(
        file_locator: Arc<dyn FileLocator>,
        transcriber: Arc<dyn Transcriber>,
        summarizer: Arc<dyn Summarizer>,
        renderer: Arc<dyn DocumentRenderer>,
        notifier: Arc<dyn ChatNotifier>,
    ) -> Self {
        Self {
            file_locator,
            transcriber,
            summarizer,
            renderer,
            notifier,
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }

    pub fn with_template_name(mut self, template_name: impl Into<String>) -> Self {
        self.template_name = template_name.into();
        self
    }

    pub async fn run(&self, job: Job) -> JobOutcome {
        let mut progress = StageTracker::new();
        tracing::info!(format = %job.output_format, "Audio job started");

        let summary = match self.deliver_summary(&job, &mut progress).await {
            Ok(summary) => summary,
            Err(e) => {
                let stage = e.stage();
                tracing::error!(stage = %stage, error = %e, "Audio job failed");
                progress.advance(PipelineStage::Failed);

                let notice = best_effort(
                    "failure_notice",
                    self.notifier.send_text(job.chat_id, GENERIC_FAILURE_MESSAGE),
                )
                .await;
                if notice.is_delivered() {
                    tracing::info!("User notified about failure");
                }

                return JobOutcome::Failed {
                    stage,
                    reason: e.to_string(),
                    notice,
                };
            }
        };

        let document = match self.deliver_document(&job, &summary, &mut progress).await {
            Ok(document) => DocumentOutcome::Delivered {
                file_type: document.file_type,
            },
            Err(e) => {
                tracing::error!(stage = %e.stage(), error = %e, "Document generation failed");
                let notice = best_effort(
                    "document_failure_notice",
                    self.notifier
                        .send_text(job.chat_id, &document_failure_message(job.output_format)),
                )
                .await;
                DocumentOutcome::Failed {
                    reason: e.to_string(),
                    notice,
                }
            }
        };

        progress.advance(PipelineStage::Done);
        tracing::info!("Audio job completed");

        JobOutcome::Done { document }
    }

    async fn deliver_summary(
        &self,
        job: &Job,
        progress: &mut StageTracker,
    ) -> Result<Summary, PipelineError> {
        let file_url = self
            .file_locator
            .locate(&job.file_id)
            .await
            .map_err(PipelineError::LocateFile)?;

        progress.advance(PipelineStage::Transcribing);
        let transcript = self
            .transcriber
            .transcribe(&file_url)
            .await
            .map_err(PipelineError::Transcription)?;
        if transcript.trim().is_empty() {
            return Err(PipelineError::EmptyTranscript);
        }
        tracing::info!(chars = transcript.chars().count(), "Transcription completed");

        progress.advance(PipelineStage::Summarizing);
        let summary = self
            .summarizer
            .summarize(&transcript, job.user_id)
            .await
            .map_err(PipelineError::Summarization)?;
        if summary.text.is_empty() {
            tracing::warn!("Summarizer returned no summary, delivering empty text");
        }

        progress.advance(PipelineStage::NotifyingText);
        self.notifier
            .send_text(job.chat_id, &summary.text)
            .await
            .map_err(PipelineError::TextDelivery)?;
        tracing::info!("Summary delivered");

        Ok(summary)
    }

    async fn deliver_document(
        &self,
        job: &Job,
        summary: &Summary,
        progress: &mut StageTracker,
    ) -> Result<RenderedDocument, PipelineError> {
        progress.advance(PipelineStage::RenderingDocument);

        let meeting_date = MeetingDate::resolve(
            summary.meeting_date.as_deref(),
            job.message_timestamp,
            Local::now(),
        );
        tracing::debug!(
            date = %meeting_date.date,
            source = ?meeting_date.source,
            "Meeting date resolved"
        );

        let request = RenderRequest {
            template_name: self.template_name.clone(),
            fields: DocumentFields {
                text: summary.text.clone(),
                date: meeting_date.components(),
            },
            format: job.output_format,
        };
        let response = self
            .renderer
            .render(&request)
            .await
            .map_err(PipelineError::Rendering)?;
        let document = RenderedDocument::from_response(response, job.output_format)
            .ok_or(PipelineError::MissingDocumentLocation)?;

        progress.advance(PipelineStage::DeliveringDocument);
        self.notifier
            .send_file(
                job.chat_id,
                &document.file_url,
                &document_caption(&document.file_type),
                &document.file_type,
            )
            .await
            .map_err(PipelineError::FileDelivery)?;
        tracing::info!(file_type = %document.file_type, "Document delivered");

        Ok(document)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("file lookup: {0}")]
    LocateFile(RemoteError),
    #[error("transcription: {0}")]
    Transcription(RemoteError),
    #[error("transcription produced empty text")]
    EmptyTranscript,
    #[error("summarization: {0}")]
    Summarization(RemoteError),
    #[error("text delivery: {0}")]
    TextDelivery(RemoteError),
    #[error("document rendering: {0}")]
    Rendering(RemoteError),
    #[error("document renderer returned no file location")]
    MissingDocumentLocation,
    #[error("file delivery: {0}")]
    FileDelivery(RemoteError),
}

impl PipelineError {
    pub fn stage(&self) -> PipelineStage {
        match self {
            PipelineError::LocateFile(_) => PipelineStage::LocatingFile,
            PipelineError::Transcription(_) | PipelineError::EmptyTranscript => {
                PipelineStage::Transcribing
            }
            PipelineError::Summarization(_) => PipelineStage::Summarizing,
            PipelineError::TextDelivery(_) => PipelineStage::NotifyingText,
            PipelineError::Rendering(_) | PipelineError::MissingDocumentLocation => {
                PipelineStage::RenderingDocument
            }
            PipelineError::FileDelivery(_) => PipelineStage::DeliveringDocument,
        }
    }
}

struct StageTracker {
    current: PipelineStage,
}

impl StageTracker {
    fn new() -> Self {
        tracing::debug!(stage = %PipelineStage::LocatingFile, "Stage entered");
        Self {
            current: PipelineStage::LocatingFile,
        }
    }

    fn advance(&mut self, next: PipelineStage) {
        debug_assert!(
            self.current.can_transition_to(next),
            "illegal stage transition {} -> {}",
            self.current,
            next
        );
        tracing::debug!(from = %self.current, to = %next, "Stage transition");
        self.current = next;
    }
}
