use async_trait::async_trait;

use super::RemoteError;

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, file_url: &str) -> Result<String, RemoteError>;
}
