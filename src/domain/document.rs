use super::{DateComponents, OutputFormat};

pub const DEFAULT_TEMPLATE_NAME: &str = "summary_template.docx";

/// Values substituted into the minutes template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFields {
    pub text: String,
    pub date: DateComponents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub template_name: String,
    pub fields: DocumentFields,
    pub format: OutputFormat,
}

/// What the renderer answered. The location may be missing in a malformed answer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderResponse {
    pub file_url: Option<String>,
    pub file_type: Option<String>,
}

/// A rendered document ready to be forwarded to the chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub file_url: String,
    /// Declared type tag, e.g. `docx` or `pdf`.
    pub file_type: String,
    pub requested_format: OutputFormat,
}

impl RenderedDocument {
    /// Accepts a renderer answer only when it names a usable location. A missing type
    /// tag defaults to the requested format.
    pub fn from_response(response: RenderResponse, requested_format: OutputFormat) -> Option<Self> {
        let file_url = response.file_url.filter(|url| !url.trim().is_empty())?;
        let file_type = response
            .file_type
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| requested_format.as_str().to_string());
        Some(Self {
            file_url,
            file_type,
            requested_format,
        })
    }
}
