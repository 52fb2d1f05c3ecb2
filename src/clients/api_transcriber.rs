//! API-based transcription service implementation.
//!
//! Handles transcription via the remote HTTP API.

use std::path::Path;

use log::{error, info};
use reqwest::StatusCode;

use super::client::TranscriptionClient;
use super::error::{TranscriptionError, MAX_FILE_SIZE_BYTES};
use super::service::TranscriptionService;

/// API-based transcription service.
pub struct ApiTranscriber {
    client: Box<dyn TranscriptionClient>,
    http: reqwest::blocking::Client,
}

impl ApiTranscriber {
    /// Create a new API transcriber with the given client.
    pub fn new(client: Box<dyn TranscriptionClient>) -> Self {
        Self {
            client,
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Validate file exists and is within the API upload limit
    fn validate_file(&self, file_path: &Path) -> Result<(), TranscriptionError> {
        if !file_path.exists() {
            error!("File not found: {:?}", file_path);
            return Err(TranscriptionError::FileNotFound(
                file_path.to_string_lossy().to_string(),
            ));
        }

        let metadata = std::fs::metadata(file_path)?;
        let file_size = metadata.len();

        if file_size > MAX_FILE_SIZE_BYTES {
            error!(
                "File too large: {} bytes > {} bytes",
                file_size, MAX_FILE_SIZE_BYTES
            );
            return Err(TranscriptionError::FileTooLarge {
                size_bytes: file_size,
            });
        }

        Ok(())
    }
}

impl TranscriptionService for ApiTranscriber {
    fn transcribe(&self, audio_path: &Path) -> Result<String, TranscriptionError> {
        self.validate_file(audio_path)?;

        // Build multipart form from file
        let form = self.client.build_form(audio_path)?;

        // Send request
        let request = self.http.post(self.client.transcription_url());
        let request = self.client.add_auth(request);

        let response = request.multipart(form).send().map_err(|e| {
            error!("API request error: {}", e);
            TranscriptionError::TransientNetwork(format!("Request failed: {}", e))
        })?;

        // Check response status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("API error response ({}): {}", status, error_text);
            return Err(classify_failure(status, &error_text));
        }

        // Parse JSON response
        let json: serde_json::Value = response.json().map_err(|e| {
            error!("Failed to parse response: {}", e);
            TranscriptionError::MalformedResponse(format!("Failed to parse response: {}", e))
        })?;

        let text = json["text"]
            .as_str()
            .ok_or_else(|| {
                TranscriptionError::MalformedResponse("response has no text field".to_string())
            })?
            .to_string();

        info!("Transcription successful: {} characters", text.len());

        Ok(text)
    }
}

/// Map a non-success HTTP response onto the error taxonomy.
fn classify_failure(status: StatusCode, body: &str) -> TranscriptionError {
    let detail = format!("API returned status {}: {}", status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TranscriptionError::AuthFailed(detail),
        StatusCode::TOO_MANY_REQUESTS if body.to_lowercase().contains("quota") => {
            TranscriptionError::QuotaExceeded(detail)
        }
        StatusCode::TOO_MANY_REQUESTS => TranscriptionError::RateLimited(detail),
        s if s.is_server_error() => TranscriptionError::TransientNetwork(detail),
        _ => TranscriptionError::MalformedResponse(detail),
    }
}
