/// Result of the summarization stage.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    /// Empty when the summarizer answered without a summary field.
    pub text: String,
    /// `YYYY-MM-DD` date the summarizer inferred from the transcript, if any.
    pub meeting_date: Option<String>,
}

impl Summary {
    pub fn new(text: impl Into<String>, meeting_date: Option<String>) -> Self {
        Self {
            text: text.into(),
            meeting_date,
        }
    }
}
