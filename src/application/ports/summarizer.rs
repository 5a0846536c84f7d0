use async_trait::async_trait;

use super::RemoteError;
use crate::domain::{Summary, UserId};

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, transcript: &str, user_id: UserId) -> Result<Summary, RemoteError>;
}
