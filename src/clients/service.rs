//! High-level transcription service abstraction.

use std::path::Path;

use super::error::TranscriptionError;

/// High-level transcription service abstraction.
///
/// The orchestrator holds a boxed implementation and doesn't need to know
/// which provider is behind it; tests substitute a fake.
pub trait TranscriptionService: Send + Sync {
    /// Transcribe one chunk's audio file to text.
    ///
    /// # Returns
    /// * `Ok(String)` - Transcribed text
    /// * `Err(TranscriptionError)` - Transcription failed
    fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError>;
}
