mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DocumentSettings, LoggingSettings, ServerSettings, ServiceSettings, Settings, TimeoutSettings,
};
