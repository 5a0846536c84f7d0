use super::{ChatId, FileId, JobId, OutputFormat, UserId};

/// One audio-to-minutes unit of work. Owned by a single pipeline run and never persisted.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub chat_id: ChatId,
    pub user_id: UserId,
    pub file_id: FileId,
    /// Seconds since epoch of the originating chat message.
    pub message_timestamp: Option<i64>,
    pub output_format: OutputFormat,
}

impl Job {
    pub fn new(
        chat_id: ChatId,
        user_id: UserId,
        file_id: FileId,
        message_timestamp: Option<i64>,
        output_format: OutputFormat,
    ) -> Self {
        Self {
            id: JobId::new(),
            chat_id,
            user_id,
            file_id,
            message_timestamp,
            output_format,
        }
    }
}
