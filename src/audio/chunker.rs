//! Time-based chunking of the source audio.
//!
//! Chunk export is a packet-level stream copy: compressed packets are routed
//! to per-chunk files by timestamp, never decoded or re-encoded. MP3 frame
//! streams are self-delimiting, so each chunk file is playable on its own.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use log::info;

use super::reader::TrackReader;
use super::source::{minutes, AudioSource};
use crate::error::Error;

const MS_PER_MINUTE: u64 = 60_000;

/// One contiguous time slice of the source, materialized as its own file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    /// 1-based position in the source timeline
    pub index: usize,
    pub start_ms: u64,
    pub end_ms: u64,
    /// `<basename>_part_<index>.mp3`, next to the source
    pub audio_path: PathBuf,
}

impl Chunk {
    /// `<basename>_part_<index>_transcript.txt`, next to the chunk audio.
    pub fn transcript_path(&self) -> PathBuf {
        let stem = self
            .audio_path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("chunk");
        self.audio_path
            .with_file_name(format!("{}_transcript.txt", stem))
    }
}

/// Partition the source timeline into `ceil(duration / chunk_minutes)`
/// consecutive chunks. The last chunk is clamped to the source duration;
/// exact divisibility produces no zero-length trailing chunk.
pub fn plan_chunks(source: &AudioSource, chunk_minutes: u32) -> Result<Vec<Chunk>, Error> {
    if chunk_minutes == 0 {
        return Err(Error::InvalidArgument(
            "chunk length must be a positive number of minutes".to_string(),
        ));
    }

    let chunk_ms = u64::from(chunk_minutes) * MS_PER_MINUTE;
    let count = source.duration_ms.div_ceil(chunk_ms).max(1);
    let dir = source.dir();

    let mut chunks = Vec::with_capacity(count as usize);
    for i in 1..=count {
        let start_ms = (i - 1) * chunk_ms;
        let end_ms = (i * chunk_ms).min(source.duration_ms);
        let audio_path = dir.join(format!("{}_part_{}.mp3", source.basename, i));
        chunks.push(Chunk {
            index: i as usize,
            start_ms,
            end_ms,
            audio_path,
        });
    }
    Ok(chunks)
}

/// Write each chunk's packets to its audio file, overwriting existing files.
pub fn export_chunks(source: &AudioSource, chunks: &[Chunk]) -> Result<(), Error> {
    let Some(first) = chunks.first() else {
        return Ok(());
    };

    let mut reader = TrackReader::open(&source.path)?;
    let mut cur = 0usize;
    let mut writer = open_chunk_writer(first)?;

    while let Some(packet) = reader.next_packet()? {
        let ms = reader.ts_to_ms(packet.ts());
        // Packets arrive in ascending timestamp order, so advancing one
        // chunk at a time creates every file even across sparse regions.
        while cur + 1 < chunks.len() && ms >= chunks[cur].end_ms {
            finish_chunk_writer(&chunks[cur], writer)?;
            cur += 1;
            writer = open_chunk_writer(&chunks[cur])?;
        }
        writer.write_all(packet.buf()).map_err(|e| Error::Write {
            path: chunks[cur].audio_path.clone(),
            source: e,
        })?;
    }
    finish_chunk_writer(&chunks[cur], writer)?;

    // A trailing chunk with no packets would mean the probe-measured
    // duration and the export scan disagree about the same file.
    if cur + 1 < chunks.len() {
        return Err(Error::Decode(format!(
            "audio stream ended before chunk {}",
            chunks[cur + 1].index
        )));
    }

    Ok(())
}

fn open_chunk_writer(chunk: &Chunk) -> Result<BufWriter<File>, Error> {
    info!(
        "Exporting part {} ({:.1}-{:.1} min) -> {}",
        chunk.index,
        minutes(chunk.start_ms),
        minutes(chunk.end_ms),
        chunk.audio_path.display()
    );
    let file = File::create(&chunk.audio_path).map_err(|e| Error::Write {
        path: chunk.audio_path.clone(),
        source: e,
    })?;
    Ok(BufWriter::new(file))
}

fn finish_chunk_writer(chunk: &Chunk, mut writer: BufWriter<File>) -> Result<(), Error> {
    writer.flush().map_err(|e| Error::Write {
        path: chunk.audio_path.clone(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn source(duration_ms: u64) -> AudioSource {
        AudioSource {
            path: PathBuf::from("/data/lecture.mp3"),
            basename: "lecture".to_string(),
            duration_ms,
        }
    }

    const MIN: u64 = MS_PER_MINUTE;

    #[test]
    fn forty_five_minutes_at_default_twenty() {
        let chunks = plan_chunks(&source(45 * MIN), 20).unwrap();
        assert_eq!(chunks.len(), 3);
        assert_eq!((chunks[0].start_ms, chunks[0].end_ms), (0, 20 * MIN));
        assert_eq!((chunks[1].start_ms, chunks[1].end_ms), (20 * MIN, 40 * MIN));
        assert_eq!((chunks[2].start_ms, chunks[2].end_ms), (40 * MIN, 45 * MIN));
    }

    #[test]
    fn chunks_tile_the_source_exactly() {
        for (duration_ms, chunk_minutes) in [
            (45 * MIN, 20u32),
            (45 * MIN + 1, 20),
            (MIN / 2, 20),
            (7 * MIN, 3),
            (61 * MIN, 1),
        ] {
            let src = source(duration_ms);
            let chunks = plan_chunks(&src, chunk_minutes).unwrap();
            let chunk_ms = u64::from(chunk_minutes) * MIN;
            assert_eq!(chunks.len() as u64, duration_ms.div_ceil(chunk_ms));

            let mut expected_start = 0;
            for (i, chunk) in chunks.iter().enumerate() {
                assert_eq!(chunk.index, i + 1);
                assert_eq!(chunk.start_ms, expected_start);
                assert!(chunk.end_ms > chunk.start_ms);
                expected_start = chunk.end_ms;
            }
            assert_eq!(expected_start, duration_ms);
        }
    }

    #[test]
    fn short_source_yields_one_chunk() {
        let chunks = plan_chunks(&source(12 * MIN), 20).unwrap();
        assert_eq!(chunks.len(), 1);
        assert_eq!((chunks[0].start_ms, chunks[0].end_ms), (0, 12 * MIN));
    }

    #[test]
    fn exact_divisibility_has_no_empty_trailing_chunk() {
        let chunks = plan_chunks(&source(40 * MIN), 20).unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].end_ms, 40 * MIN);
    }

    #[test]
    fn zero_chunk_minutes_is_rejected() {
        assert!(matches!(
            plan_chunks(&source(45 * MIN), 0),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn file_names_are_one_indexed_next_to_the_source() {
        let chunks = plan_chunks(&source(45 * MIN), 20).unwrap();
        assert_eq!(
            chunks[0].audio_path,
            Path::new("/data/lecture_part_1.mp3")
        );
        assert_eq!(
            chunks[2].audio_path,
            Path::new("/data/lecture_part_3.mp3")
        );
        assert_eq!(
            chunks[1].transcript_path(),
            Path::new("/data/lecture_part_2_transcript.txt")
        );
    }
}
