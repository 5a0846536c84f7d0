use std::future::{Future, ready};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::Instrument;

use super::job_orchestrator::{JobOrchestrator, JobOutcome};
use crate::domain::Job;

/// Runs every accepted job as its own detached task.
///
/// There is no concurrency cap and no per-chat ordering. Jobs share no mutable state.
pub struct JobDispatcher {
    orchestrator: Arc<JobOrchestrator>,
}

impl JobDispatcher {
    pub fn new(orchestrator: Arc<JobOrchestrator>) -> Self {
        Self { orchestrator }
    }

    /// Returns immediately. Dropping the handle detaches the job; it still runs to a
    /// terminal state.
    pub fn dispatch(&self, job: Job) -> JoinHandle<JobOutcome> {
        self.dispatch_after(job, ready(()))
    }

    /// Like [`dispatch`](Self::dispatch), but no stage starts before `release` resolves.
    pub fn dispatch_after<R>(&self, job: Job, release: R) -> JoinHandle<JobOutcome>
    where
        R: Future<Output = ()> + Send + 'static,
    {
        let span = tracing::info_span!(
            "audio_job",
            job_id = %job.id,
            chat_id = %job.chat_id,
            user_id = %job.user_id,
            file_id = %job.file_id,
        );
        let orchestrator = Arc::clone(&self.orchestrator);

        tokio::spawn(
            async move {
                release.await;
                orchestrator.run(job).await
            }
            .instrument(span),
        )
    }
}
