mod api_transcriber;
mod client;
mod error;
mod openai_client;
mod service;

// Re-export public types
pub use api_transcriber::ApiTranscriber;
pub use client::TranscriptionClient;
pub use error::TranscriptionError;
pub use openai_client::OpenAIClient;
pub use service::TranscriptionService;
