mod health;
mod process_audio;

pub use health::health_handler;
pub use process_audio::{NumericField, ProcessAudioRequest, process_audio_handler};
