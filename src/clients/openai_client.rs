use std::path::Path;

use secrecy::{ExposeSecret, SecretString};

use super::client::TranscriptionClient;
use super::error::TranscriptionError;

const OPENAI_TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";

/// OpenAI audio transcription API client
pub struct OpenAIClient {
    api_key: SecretString,
    model: String,
    language: Option<String>,
}

impl OpenAIClient {
    pub fn new(api_key: SecretString, model: String, language: Option<String>) -> Self {
        Self {
            api_key,
            model,
            language,
        }
    }
}

impl TranscriptionClient for OpenAIClient {
    fn transcription_url(&self) -> String {
        OPENAI_TRANSCRIPTION_URL.to_string()
    }

    fn add_auth(
        &self,
        request: reqwest::blocking::RequestBuilder,
    ) -> reqwest::blocking::RequestBuilder {
        request.bearer_auth(self.api_key.expose_secret())
    }

    fn build_form(
        &self,
        file_path: &Path,
    ) -> Result<reqwest::blocking::multipart::Form, TranscriptionError> {
        let mut form = reqwest::blocking::multipart::Form::new()
            .file("file", file_path)
            .map_err(|e| {
                TranscriptionError::Io(std::io::Error::other(format!(
                    "Failed to read file: {}",
                    e
                )))
            })?
            .text("model", self.model.clone())
            .text("temperature", "0.0")
            .text("response_format", "json");

        if let Some(language) = &self.language {
            form = form.text("language", language.clone());
        }

        Ok(form)
    }
}
