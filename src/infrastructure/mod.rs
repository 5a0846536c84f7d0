pub mod audio;
pub mod documents;
pub mod http;
pub mod llm;
pub mod observability;
pub mod telegram;
