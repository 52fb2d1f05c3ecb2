mod chunker;
mod reader;
mod source;

// Re-export public types
pub use chunker::{export_chunks, plan_chunks, Chunk};
pub use source::{minutes, AudioSource};
