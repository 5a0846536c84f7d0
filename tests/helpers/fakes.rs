use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;

use voice_minutes::application::ports::{
    ChatNotifier, DocumentRenderer, FileLocator, RemoteError, Summarizer, Transcriber,
};
use voice_minutes::application::services::JobOrchestrator;
use voice_minutes::domain::{
    ChatId, FileId, Job, OutputFormat, RenderRequest, RenderResponse, Summary, UserId,
};

pub const LOCATED_URL: &str = "https://files.example.test/voice/file_1.oga";
pub const RENDERED_URL: &str = "http://docx.example.test/files/minutes.docx";

pub fn sample_job() -> Job {
    Job::new(
        ChatId::new(1),
        UserId::new(7),
        FileId::new("abc"),
        None,
        OutputFormat::Docx,
    )
}

pub fn remote_failure(service: &'static str) -> RemoteError {
    RemoteError::Remote {
        service,
        status: 500,
        message: "boom".to_string(),
    }
}

pub fn unreachable(service: &'static str) -> RemoteError {
    RemoteError::Unreachable {
        service,
        reason: "connection refused".to_string(),
    }
}

pub fn invalid_request(service: &'static str) -> RemoteError {
    RemoteError::InvalidRequest {
        service,
        reason: "relative URL without a base".to_string(),
    }
}

/// Closed gate that stalls callers until the test opens it.
pub struct Gate {
    permits: Semaphore,
}

impl Gate {
    pub fn closed() -> Arc<Self> {
        Arc::new(Self {
            permits: Semaphore::new(0),
        })
    }

    pub fn open(&self, callers: usize) {
        self.permits.add_permits(callers);
    }

    async fn pass(&self) {
        if let Ok(permit) = self.permits.acquire().await {
            permit.forget();
        }
    }
}

pub struct FakeFileLocator {
    result: Result<String, RemoteError>,
    gate: Option<Arc<Gate>>,
    started: AtomicUsize,
    completed: AtomicUsize,
    requested: Mutex<Vec<FileId>>,
}

impl FakeFileLocator {
    pub fn returning(result: Result<String, RemoteError>) -> Self {
        Self {
            result,
            gate: None,
            started: AtomicUsize::new(0),
            completed: AtomicUsize::new(0),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn stalled(gate: Arc<Gate>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::returning(Ok(LOCATED_URL.to_string()))
        }
    }

    pub fn started(&self) -> usize {
        self.started.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<FileId> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl FileLocator for FakeFileLocator {
    async fn locate(&self, file_id: &FileId) -> Result<String, RemoteError> {
        self.started.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(file_id.clone());
        if let Some(gate) = &self.gate {
            gate.pass().await;
        }
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

pub struct FakeTranscriber {
    result: Result<String, RemoteError>,
    received_urls: Mutex<Vec<String>>,
}

impl FakeTranscriber {
    pub fn returning(result: Result<String, RemoteError>) -> Self {
        Self {
            result,
            received_urls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.received_urls.lock().unwrap().len()
    }

    pub fn received_urls(&self) -> Vec<String> {
        self.received_urls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Transcriber for FakeTranscriber {
    async fn transcribe(&self, file_url: &str) -> Result<String, RemoteError> {
        self.received_urls.lock().unwrap().push(file_url.to_string());
        self.result.clone()
    }
}

pub struct FakeSummarizer {
    result: Result<Summary, RemoteError>,
    received: Mutex<Vec<(String, UserId)>>,
}

impl FakeSummarizer {
    pub fn returning(result: Result<Summary, RemoteError>) -> Self {
        Self {
            result,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn received(&self) -> Vec<(String, UserId)> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, transcript: &str, user_id: UserId) -> Result<Summary, RemoteError> {
        self.received
            .lock()
            .unwrap()
            .push((transcript.to_string(), user_id));
        self.result.clone()
    }
}

pub struct FakeRenderer {
    result: Result<RenderResponse, RemoteError>,
    requests: Mutex<Vec<RenderRequest>>,
}

impl FakeRenderer {
    pub fn returning(result: Result<RenderResponse, RemoteError>) -> Self {
        Self {
            result,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn rendered(file_url: &str, file_type: Option<&str>) -> Self {
        Self::returning(Ok(RenderResponse {
            file_url: Some(file_url.to_string()),
            file_type: file_type.map(str::to_string),
        }))
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<RenderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl DocumentRenderer for FakeRenderer {
    async fn render(&self, request: &RenderRequest) -> Result<RenderResponse, RemoteError> {
        self.requests.lock().unwrap().push(request.clone());
        self.result.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    Text {
        chat_id: ChatId,
        text: String,
    },
    File {
        chat_id: ChatId,
        file_url: String,
        caption: String,
        file_type: String,
    },
}

/// Records every delivery attempt, including the ones it is told to fail.
#[derive(Default)]
pub struct RecordingNotifier {
    attempts: Mutex<Vec<Delivery>>,
    text_calls: AtomicUsize,
    failing_text_calls: Vec<usize>,
    fail_all_texts: bool,
    fail_files: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the text deliveries with the given zero-based call indices.
    pub fn failing_text_calls(calls: &[usize]) -> Self {
        Self {
            failing_text_calls: calls.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing_all_texts() -> Self {
        Self {
            fail_all_texts: true,
            ..Self::default()
        }
    }

    pub fn failing_files() -> Self {
        Self {
            fail_files: true,
            ..Self::default()
        }
    }

    pub fn attempts(&self) -> Vec<Delivery> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn texts(&self) -> Vec<String> {
        self.attempts()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Text { text, .. } => Some(text),
                Delivery::File { .. } => None,
            })
            .collect()
    }

    pub fn files(&self) -> Vec<Delivery> {
        self.attempts()
            .into_iter()
            .filter(|d| matches!(d, Delivery::File { .. }))
            .collect()
    }

    pub async fn wait_for_attempts(&self, count: usize) -> Vec<Delivery> {
        let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
        loop {
            let attempts = self.attempts();
            if attempts.len() >= count || tokio::time::Instant::now() >= deadline {
                return attempts;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }
}

#[async_trait::async_trait]
impl ChatNotifier for RecordingNotifier {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RemoteError> {
        self.attempts.lock().unwrap().push(Delivery::Text {
            chat_id,
            text: text.to_string(),
        });
        let call = self.text_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_all_texts || self.failing_text_calls.contains(&call) {
            return Err(unreachable("telegram-adapter"));
        }
        Ok(())
    }

    async fn send_file(
        &self,
        chat_id: ChatId,
        file_url: &str,
        caption: &str,
        file_type: &str,
    ) -> Result<(), RemoteError> {
        self.attempts.lock().unwrap().push(Delivery::File {
            chat_id,
            file_url: file_url.to_string(),
            caption: caption.to_string(),
            file_type: file_type.to_string(),
        });
        if self.fail_files {
            return Err(remote_failure("telegram-adapter"));
        }
        Ok(())
    }
}

/// One fake per collaborator, preset for the successful path.
pub struct FakePipeline {
    pub locator: Arc<FakeFileLocator>,
    pub transcriber: Arc<FakeTranscriber>,
    pub summarizer: Arc<FakeSummarizer>,
    pub renderer: Arc<FakeRenderer>,
    pub notifier: Arc<RecordingNotifier>,
}

impl FakePipeline {
    pub fn successful() -> Self {
        Self {
            locator: Arc::new(FakeFileLocator::returning(Ok(LOCATED_URL.to_string()))),
            transcriber: Arc::new(FakeTranscriber::returning(Ok("hello world".to_string()))),
            summarizer: Arc::new(FakeSummarizer::returning(Ok(Summary::new(
                "Hello.",
                Some("2024-03-05".to_string()),
            )))),
            renderer: Arc::new(FakeRenderer::rendered(RENDERED_URL, Some("docx"))),
            notifier: Arc::new(RecordingNotifier::new()),
        }
    }

    pub fn orchestrator(&self) -> JobOrchestrator {
        JobOrchestrator::new(
            self.locator.clone(),
            self.transcriber.clone(),
            self.summarizer.clone(),
            self.renderer.clone(),
            self.notifier.clone(),
        )
    }
}
