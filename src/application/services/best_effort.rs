use std::future::Future;

use crate::application::ports::RemoteError;

/// Result of a notification that is attempted once and never escalated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BestEffort {
    Delivered,
    Dropped(RemoteError),
}

impl BestEffort {
    pub fn is_delivered(&self) -> bool {
        matches!(self, BestEffort::Delivered)
    }
}

/// Awaits a single delivery attempt. A failure is logged and returned as
/// [`BestEffort::Dropped`]; it is not retried and never propagates.
pub async fn best_effort<F>(label: &'static str, attempt: F) -> BestEffort
where
    F: Future<Output = Result<(), RemoteError>>,
{
    match attempt.await {
        Ok(()) => {
            tracing::debug!(notification = label, "Best-effort notification delivered");
            BestEffort::Delivered
        }
        Err(e) => {
            tracing::warn!(
                notification = label,
                service = e.service(),
                error = %e,
                "Best-effort notification dropped"
            );
            BestEffort::Dropped(e)
        }
    }
}
