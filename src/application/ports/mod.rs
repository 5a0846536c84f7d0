mod chat_notifier;
mod document_renderer;
mod file_locator;
mod remote_error;
mod summarizer;
mod transcriber;

pub use chat_notifier::ChatNotifier;
pub use document_renderer::DocumentRenderer;
pub use file_locator::FileLocator;
pub use remote_error::RemoteError;
pub use summarizer::Summarizer;
pub use transcriber::Transcriber;
