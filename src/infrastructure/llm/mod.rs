mod summarizer_client;

pub use summarizer_client::SummarizerClient;
