use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini-transcribe";
pub const DEFAULT_CHUNK_MINUTES: u32 = 20;

/// Run configuration for a transcription job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeConfig {
    /// Transcription model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Optional language hint, e.g. "he" for Hebrew
    #[serde(default)]
    pub language: Option<String>,
    /// Chunk length in minutes
    #[serde(default = "default_chunk_minutes", alias = "chunk_minutes")]
    pub chunk_minutes: u32,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_chunk_minutes() -> u32 {
    DEFAULT_CHUNK_MINUTES
}

impl Default for TranscribeConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            language: None,
            chunk_minutes: DEFAULT_CHUNK_MINUTES,
        }
    }
}

impl TranscribeConfig {
    /// Reject configurations the chunker cannot honor.
    pub fn validate(&self) -> Result<(), Error> {
        if self.chunk_minutes == 0 {
            return Err(Error::InvalidArgument(
                "chunk length must be a positive number of minutes".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_contract() {
        let config = TranscribeConfig::default();
        assert_eq!(config.model, "gpt-4o-mini-transcribe");
        assert_eq!(config.chunk_minutes, 20);
        assert!(config.language.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_chunk_minutes_is_rejected() {
        let config = TranscribeConfig {
            chunk_minutes: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn deserializes_with_defaults() {
        let config: TranscribeConfig = serde_json::from_str(r#"{"language":"he"}"#).unwrap();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.language.as_deref(), Some("he"));
        assert_eq!(config.chunk_minutes, DEFAULT_CHUNK_MINUTES);
    }
}
