//! Splitscribe: split a long audio recording into fixed-duration chunks and
//! transcribe each chunk via a remote speech-to-text API.
//!
//! The whole system is a linear pipeline: probe the source, plan and export
//! time-based chunks, transcribe them strictly in order, then write one
//! merged transcript with per-chunk headings.

pub mod audio;
pub mod clients;
pub mod config;
pub mod credentials;
pub mod error;
pub mod pipeline;

use std::path::Path;

use crate::audio::{export_chunks, plan_chunks, AudioSource};
use crate::clients::{ApiTranscriber, OpenAIClient};
use crate::config::TranscribeConfig;
use crate::credentials::CredentialProvider;
use crate::error::Error;
use crate::pipeline::{MergedTranscript, Orchestrator};

/// Run the full pipeline against one audio file.
///
/// The credential is resolved before any chunking begins, and the
/// configuration is validated before any file is written.
pub fn run(
    source_path: &Path,
    config: &TranscribeConfig,
    credentials: &dyn CredentialProvider,
) -> Result<MergedTranscript, Error> {
    config.validate()?;
    let api_key = credentials.api_key()?;

    let source = AudioSource::probe(source_path)?;
    let chunks = plan_chunks(&source, config.chunk_minutes)?;
    log::info!(
        "Splitting into {} chunk(s) of ~{} minutes each",
        chunks.len(),
        config.chunk_minutes
    );
    export_chunks(&source, &chunks)?;

    let client = OpenAIClient::new(api_key, config.model.clone(), config.language.clone());
    let orchestrator = Orchestrator::new(Box::new(ApiTranscriber::new(Box::new(client))));
    orchestrator.transcribe_all(&source, &chunks)
}
