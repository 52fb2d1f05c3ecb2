use std::path::PathBuf;

use crate::clients::TranscriptionError;

/// Top-level error for a transcription run.
///
/// Nothing here is recovered internally; every variant aborts the run and is
/// reported to the invoker with the stage (and, for transcription, the chunk
/// index) that failed.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to decode audio: {0}")]
    Decode(String),

    #[error("OPENAI_API_KEY environment variable is not set")]
    CredentialMissing,

    #[error("transcription of chunk {chunk} failed: {source}")]
    Transcription {
        chunk: usize,
        #[source]
        source: TranscriptionError,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
