//! Thin wrapper over symphonia's format reader, pinned to one audio track.

use std::fs::File;
use std::path::Path;

use symphonia::core::codecs::CODEC_TYPE_NULL;
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::{FormatOptions, FormatReader, Packet};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use symphonia::core::units::TimeBase;

use crate::error::Error;

/// Reads compressed packets from the default audio track of a media file.
pub(crate) struct TrackReader {
    format: Box<dyn FormatReader>,
    track_id: u32,
    time_base: TimeBase,
}

impl TrackReader {
    pub fn open(path: &Path) -> Result<Self, Error> {
        let file = File::open(path)
            .map_err(|e| Error::Decode(format!("cannot open {}: {}", path.display(), e)))?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| Error::Decode(format!("cannot parse {}: {}", path.display(), e)))?;
        let format = probed.format;

        let track = format
            .tracks()
            .iter()
            .find(|t| t.codec_params.codec != CODEC_TYPE_NULL)
            .ok_or_else(|| Error::Decode("no supported audio track".to_string()))?;
        let track_id = track.id;
        let time_base = track
            .codec_params
            .time_base
            .ok_or_else(|| Error::Decode("audio track has no time base".to_string()))?;

        Ok(Self {
            format,
            track_id,
            time_base,
        })
    }

    /// Next packet of the selected track, or `None` at end of stream.
    pub fn next_packet(&mut self) -> Result<Option<Packet>, Error> {
        loop {
            match self.format.next_packet() {
                Ok(packet) if packet.track_id() == self.track_id => return Ok(Some(packet)),
                Ok(_) => continue,
                Err(SymphoniaError::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    return Ok(None)
                }
                // A chained stream boundary ends the chunkable portion.
                Err(SymphoniaError::ResetRequired) => return Ok(None),
                Err(e) => return Err(Error::Decode(e.to_string())),
            }
        }
    }

    /// Convert a track timestamp to milliseconds.
    pub fn ts_to_ms(&self, ts: u64) -> u64 {
        let time = self.time_base.calc_time(ts);
        time.seconds * 1000 + (time.frac * 1000.0) as u64
    }
}
