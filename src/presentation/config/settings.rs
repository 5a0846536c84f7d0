use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use super::Environment;
use crate::domain::DEFAULT_TEMPLATE_NAME;
use crate::infrastructure::telegram::DEFAULT_TELEGRAM_API_URL;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub services: ServiceSettings,
    pub timeouts: TimeoutSettings,
    pub document: DocumentSettings,
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers built-in defaults, `appsettings.<environment>.toml` (optional) and
    /// `APP__SECTION__KEY` environment variables, later sources winning.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.config_file_stem()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Base URLs of the collaborators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    pub telegram_url: String,
    pub whisper_url: String,
    pub summarizer_url: String,
    pub docx_url: String,
    pub telegram_api_url: String,
    pub bot_token: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            telegram_url: "http://localhost:8081".to_string(),
            whisper_url: "http://localhost:5000".to_string(),
            summarizer_url: "http://localhost:8000".to_string(),
            docx_url: "http://localhost:8090".to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            bot_token: String::new(),
        }
    }
}

/// Per-call bounds, in seconds.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TimeoutSettings {
    pub lookup_secs: u64,
    pub transcription_secs: u64,
    pub summarization_secs: u64,
    pub render_secs: u64,
    pub send_text_secs: u64,
    pub send_file_secs: u64,
}

impl TimeoutSettings {
    pub fn lookup(&self) -> Duration {
        Duration::from_secs(self.lookup_secs)
    }

    pub fn transcription(&self) -> Duration {
        Duration::from_secs(self.transcription_secs)
    }

    pub fn summarization(&self) -> Duration {
        Duration::from_secs(self.summarization_secs)
    }

    pub fn render(&self) -> Duration {
        Duration::from_secs(self.render_secs)
    }

    pub fn send_text(&self) -> Duration {
        Duration::from_secs(self.send_text_secs)
    }

    pub fn send_file(&self) -> Duration {
        Duration::from_secs(self.send_file_secs)
    }
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            lookup_secs: 10,
            transcription_secs: 300,
            summarization_secs: 120,
            render_secs: 120,
            send_text_secs: 10,
            send_file_secs: 20,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    pub template_name: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            template_name: DEFAULT_TEMPLATE_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub filter: Option<String>,
}
