use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Format of the rendered minutes document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Docx,
    Pdf,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "docx",
            OutputFormat::Pdf => "pdf",
        }
    }

    /// Upper-case label used in user-facing texts.
    pub fn label(&self) -> &'static str {
        match self {
            OutputFormat::Docx => "DOCX",
            OutputFormat::Pdf => "PDF",
        }
    }

    /// Resolves an optional client hint, falling back to the primary format when the
    /// hint is absent or names an unsupported format.
    pub fn from_hint(hint: Option<&str>) -> Self {
        match hint {
            None => Self::default(),
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!(requested = %raw, "Unsupported output format, using default");
                Self::default()
            }),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "docx" => Ok(OutputFormat::Docx),
            "pdf" => Ok(OutputFormat::Pdf),
            other => Err(format!("Invalid output format: {}", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
