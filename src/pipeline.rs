//! Sequential transcription of exported chunks and the final merge.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use log::{info, warn};

use crate::audio::{minutes, AudioSource, Chunk};
use crate::clients::TranscriptionService;
use crate::error::Error;

/// Total attempts per chunk for retryable failures (rate limit, transient
/// network). All other failures abort on the first attempt.
const MAX_ATTEMPTS: u32 = 3;
const RETRY_PAUSE: Duration = Duration::from_secs(2);

/// One chunk's transcript, already persisted to its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptRecord {
    pub chunk_index: usize,
    pub text: String,
    pub path: PathBuf,
}

/// The final `<basename>_full_transcript.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedTranscript {
    pub path: PathBuf,
}

/// Heading line identifying a chunk in the merged transcript.
pub fn heading(chunk: &Chunk) -> String {
    format!(
        "### Part {} ({:.1}\u{2013}{:.1} min)",
        chunk.index,
        minutes(chunk.start_ms),
        minutes(chunk.end_ms)
    )
}

/// Drives transcription of the chunk sequence, strictly in order.
///
/// A linear fold: chunk N+1 is not started until chunk N's transcript has
/// been written. Any chunk failure aborts the run; the merged file is only
/// written once every chunk has succeeded.
pub struct Orchestrator {
    service: Box<dyn TranscriptionService>,
}

impl Orchestrator {
    pub fn new(service: Box<dyn TranscriptionService>) -> Self {
        Self { service }
    }

    pub fn transcribe_all(
        &self,
        source: &AudioSource,
        chunks: &[Chunk],
    ) -> Result<MergedTranscript, Error> {
        let mut records = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            info!("Transcribing part {} of {} ...", chunk.index, chunks.len());
            let text = self.transcribe_chunk(chunk)?;

            let path = chunk.transcript_path();
            fs::write(&path, &text).map_err(|e| Error::Write {
                path: path.clone(),
                source: e,
            })?;
            info!("Saved transcript -> {}", path.display());

            records.push(TranscriptRecord {
                chunk_index: chunk.index,
                text,
                path,
            });
        }

        write_merged(source, chunks, &records)
    }

    fn transcribe_chunk(&self, chunk: &Chunk) -> Result<String, Error> {
        let mut attempt = 1;
        loop {
            match self.service.transcribe(&chunk.audio_path) {
                Ok(text) => return Ok(text),
                Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                    warn!(
                        "Part {} attempt {} failed ({}), retrying in {:?}",
                        chunk.index, attempt, e, RETRY_PAUSE
                    );
                    std::thread::sleep(RETRY_PAUSE);
                    attempt += 1;
                }
                Err(e) => {
                    return Err(Error::Transcription {
                        chunk: chunk.index,
                        source: e,
                    })
                }
            }
        }
    }
}

fn write_merged(
    source: &AudioSource,
    chunks: &[Chunk],
    records: &[TranscriptRecord],
) -> Result<MergedTranscript, Error> {
    let sections: Vec<String> = chunks
        .iter()
        .zip(records)
        .map(|(chunk, record)| format!("{}\n\n{}", heading(chunk), record.text))
        .collect();

    let path = source
        .dir()
        .join(format!("{}_full_transcript.txt", source.basename));
    fs::write(&path, sections.join("\n\n")).map_err(|e| Error::Write {
        path: path.clone(),
        source: e,
    })?;

    info!("Full transcript saved to {}", path.display());
    Ok(MergedTranscript { path })
}
