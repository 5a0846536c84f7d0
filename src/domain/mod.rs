mod chat_identity;
mod document;
mod job;
mod job_id;
mod meeting_date;
mod output_format;
mod pipeline_stage;
mod summary;

pub use chat_identity::{ChatId, FileId, UserId};
pub use document::{
    DEFAULT_TEMPLATE_NAME, DocumentFields, RenderRequest, RenderResponse, RenderedDocument,
};
pub use job::Job;
pub use job_id::JobId;
pub use meeting_date::{DateComponents, DateSource, MEETING_DATE_FORMAT, MeetingDate};
pub use output_format::OutputFormat;
pub use pipeline_stage::PipelineStage;
pub use summary::Summary;
