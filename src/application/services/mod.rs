mod best_effort;
mod job_dispatcher;
mod job_orchestrator;
mod messages;

pub use best_effort::{BestEffort, best_effort};
pub use job_dispatcher::JobDispatcher;
pub use job_orchestrator::{DocumentOutcome, JobOrchestrator, JobOutcome, PipelineError};
pub use messages::{GENERIC_FAILURE_MESSAGE, document_caption, document_failure_message};
