use async_trait::async_trait;

use super::RemoteError;
use crate::domain::FileId;

#[async_trait]
pub trait FileLocator: Send + Sync {
    /// Resolves a chat file identifier to a URI the transcriber can fetch.
    async fn locate(&self, file_id: &FileId) -> Result<String, RemoteError>;
}
