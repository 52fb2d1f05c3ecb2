use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use splitscribe::config::{TranscribeConfig, DEFAULT_CHUNK_MINUTES, DEFAULT_MODEL};
use splitscribe::credentials::EnvCredentials;

/// Split a long audio file into chunks and transcribe each one.
#[derive(Parser)]
#[command(name = "splitscribe", version)]
struct Cli {
    /// Path to the audio file (e.g. a long MP3 lecture)
    audio_path: PathBuf,

    /// Chunk length in minutes
    #[arg(default_value_t = DEFAULT_CHUNK_MINUTES)]
    chunk_minutes: u32,

    /// Transcription model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Optional language hint, e.g. "he" for Hebrew
    #[arg(long)]
    language: Option<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = TranscribeConfig {
        model: cli.model,
        language: cli.language,
        chunk_minutes: cli.chunk_minutes,
    };

    match splitscribe::run(&cli.audio_path, &config, &EnvCredentials) {
        Ok(merged) => {
            println!("Done. Full transcript saved to: {}", merged.path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
