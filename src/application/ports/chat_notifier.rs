use async_trait::async_trait;

use super::RemoteError;
use crate::domain::ChatId;

/// Delivery endpoint of the messaging adapter.
///
/// Calls are independent of each other; implementations must allow concurrent use
/// for the same chat.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RemoteError>;

    /// The adapter fetches `file_url` itself and forwards the bytes to the chat.
    async fn send_file(
        &self,
        chat_id: ChatId,
        file_url: &str,
        caption: &str,
        file_type: &str,
    ) -> Result<(), RemoteError>;
}
