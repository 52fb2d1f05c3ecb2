use std::path::{Path, PathBuf};

use log::info;

use super::reader::TrackReader;
use crate::error::Error;

/// The input recording: path, stem for derived file names, and total duration.
///
/// Probed once; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioSource {
    pub path: PathBuf,
    pub basename: String,
    pub duration_ms: u64,
}

impl AudioSource {
    /// Probe an audio file and measure its duration.
    ///
    /// Duration comes from a full packet scan rather than header metadata:
    /// for VBR MP3 the header-declared frame count is only an estimate.
    pub fn probe(path: &Path) -> Result<Self, Error> {
        if !path.exists() {
            return Err(Error::InvalidArgument(format!(
                "audio file not found: {}",
                path.display()
            )));
        }

        let basename = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| {
                Error::InvalidArgument(format!("unusable file name: {}", path.display()))
            })?
            .to_string();

        info!("Loading audio file {}", path.display());
        let duration_ms = scan_duration_ms(path)?;
        if duration_ms == 0 {
            return Err(Error::Decode("audio stream is empty".to_string()));
        }
        info!("Total audio length: {:.1} minutes", minutes(duration_ms));

        Ok(Self {
            path: path.to_path_buf(),
            basename,
            duration_ms,
        })
    }

    /// Directory the input lives in; all outputs are written next to it.
    pub fn dir(&self) -> PathBuf {
        self.path.parent().map(Path::to_path_buf).unwrap_or_default()
    }
}

/// Fractional minutes, for logging and merged-transcript headings.
pub fn minutes(ms: u64) -> f64 {
    ms as f64 / 60_000.0
}

fn scan_duration_ms(path: &Path) -> Result<u64, Error> {
    let mut reader = TrackReader::open(path)?;
    let mut end_ts = 0u64;
    while let Some(packet) = reader.next_packet()? {
        end_ts = end_ts.max(packet.ts() + packet.dur());
    }
    Ok(reader.ts_to_ms(end_ts))
}
