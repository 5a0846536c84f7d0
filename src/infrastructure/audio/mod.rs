mod whisper_transcriber;

pub use whisper_transcriber::WhisperTranscriber;
