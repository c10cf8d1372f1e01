mod config;
mod error;
mod splitter;


pub use config::{ChunkerConfig, EmptySplitPolicy};
pub use error::ChunkError;
pub use splitter::{smart_chunk, Chunk, ChunkMetadata, SmartChunker};

/// Default token budget per chunk
pub const DEFAULT_MAX_TOKENS: usize = 1000;
