use std::fmt;

/// States of the audio job pipeline, in strict forward order.
///
/// `Done` and `Failed` are absorbing. The document stages are optional: a job may
/// move from `NotifyingText` straight to `Done`, and `Failed` is only reachable
/// from the first four stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PipelineStage {
    LocatingFile,
    Transcribing,
    Summarizing,
    NotifyingText,
    RenderingDocument,
    DeliveringDocument,
    Done,
    Failed,
}

impl PipelineStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineStage::LocatingFile => "LOCATING_FILE",
            PipelineStage::Transcribing => "TRANSCRIBING",
            PipelineStage::Summarizing => "SUMMARIZING",
            PipelineStage::NotifyingText => "NOTIFYING_TEXT",
            PipelineStage::RenderingDocument => "RENDERING_DOCUMENT",
            PipelineStage::DeliveringDocument => "DELIVERING_DOCUMENT",
            PipelineStage::Done => "DONE",
            PipelineStage::Failed => "FAILED",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineStage::Done | PipelineStage::Failed)
    }

    /// Stages whose failure escalates to the generic failure notice.
    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            PipelineStage::LocatingFile
                | PipelineStage::Transcribing
                | PipelineStage::Summarizing
                | PipelineStage::NotifyingText
        )
    }

    pub fn can_transition_to(&self, next: PipelineStage) -> bool {
        use PipelineStage::*;
        match (self, next) {
            (Done | Failed, _) => false,
            (current, Failed) => current.is_critical(),
            (NotifyingText | RenderingDocument | DeliveringDocument, Done) => true,
            (current, next) => next as u8 == *current as u8 + 1,
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
