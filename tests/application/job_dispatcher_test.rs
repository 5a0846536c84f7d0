use std::sync::Arc;
use std::time::Duration;

use voice_minutes::application::services::{JobDispatcher, JobOutcome};
use voice_minutes::domain::PipelineStage;

use crate::helpers::fakes::{FakeFileLocator, FakePipeline, Gate, sample_job};

#[tokio::test]
async fn given_job_when_dispatched_then_runs_to_done_in_background() {
    let pipeline = FakePipeline::successful();
    let dispatcher = JobDispatcher::new(Arc::new(pipeline.orchestrator()));

    let outcome = dispatcher.dispatch(sample_job()).await.unwrap();

    assert_eq!(outcome.terminal_stage(), PipelineStage::Done);
    assert_eq!(pipeline.notifier.attempts().len(), 2);
}

#[tokio::test]
async fn given_dropped_handle_when_dispatched_then_job_still_completes() {
    let pipeline = FakePipeline::successful();
    let dispatcher = JobDispatcher::new(Arc::new(pipeline.orchestrator()));

    drop(dispatcher.dispatch(sample_job()));

    let attempts = pipeline.notifier.wait_for_attempts(2).await;
    assert_eq!(attempts.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_pending_release_when_dispatched_after_then_no_stage_starts_until_released() {
    let pipeline = FakePipeline::successful();
    let dispatcher = JobDispatcher::new(Arc::new(pipeline.orchestrator()));
    let (release_tx, release_rx) = tokio::sync::oneshot::channel::<()>();

    let handle = dispatcher.dispatch_after(sample_job(), async move {
        let _ = release_rx.await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(pipeline.locator.started(), 0);

    drop(release_tx);
    let outcome = handle.await.unwrap();
    assert_eq!(outcome.terminal_stage(), PipelineStage::Done);
    assert_eq!(pipeline.locator.started(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn given_two_jobs_for_same_chat_when_dispatched_then_they_run_concurrently() {
    let gate = Gate::closed();
    let mut pipeline = FakePipeline::successful();
    pipeline.locator = Arc::new(FakeFileLocator::stalled(Arc::clone(&gate)));
    let dispatcher = JobDispatcher::new(Arc::new(pipeline.orchestrator()));

    let first = dispatcher.dispatch(sample_job());
    let second = dispatcher.dispatch(sample_job());

    // Both jobs reach the stalled lookup before either is allowed to finish.
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while pipeline.locator.started() < 2 && tokio::time::Instant::now() < deadline {
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(pipeline.locator.started(), 2);
    assert_eq!(pipeline.locator.completed(), 0);

    gate.open(2);

    let outcomes: Vec<JobOutcome> = vec![first.await.unwrap(), second.await.unwrap()];
    assert!(
        outcomes
            .iter()
            .all(|o| o.terminal_stage() == PipelineStage::Done)
    );
    assert_eq!(pipeline.notifier.texts(), vec!["Hello.", "Hello."]);
}
