/// Maximum upload size accepted by the transcription API.
pub const MAX_FILE_SIZE_BYTES: u64 = 25 * 1024 * 1024; // 25MB limit

#[derive(Debug, thiserror::Error)]
pub enum TranscriptionError {
    #[error("file too large: {size_bytes} bytes (maximum 25MB)")]
    FileTooLarge { size_bytes: u64 },
    #[error("file not found: {0}")]
    FileNotFound(String),
    #[error("authentication rejected by the API: {0}")]
    AuthFailed(String),
    #[error("API quota exceeded: {0}")]
    QuotaExceeded(String),
    #[error("rate limited by the API: {0}")]
    RateLimited(String),
    #[error("network error reaching the API: {0}")]
    TransientNetwork(String),
    #[error("unexpected API response: {0}")]
    MalformedResponse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscriptionError {
    /// Whether a retry can plausibly succeed. Auth, quota, malformed-response
    /// and local IO failures are permanent for the lifetime of a run.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TranscriptionError::RateLimited(_) | TranscriptionError::TransientNetwork(_)
        )
    }
}
