use async_trait::async_trait;

use super::RemoteError;
use crate::domain::{RenderRequest, RenderResponse};

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    async fn render(&self, request: &RenderRequest) -> Result<RenderResponse, RemoteError>;
}
