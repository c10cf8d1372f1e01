// Public API exports
pub mod chunker;
pub mod parser;
pub mod tokenizer;

// Re-export main types for convenience
pub use parser::{
    DocumentParser, DocxParser, Element, FormatParser, ParseError, ParseMode, ParsedDocument,
    ParserRegistry, PdfParser,
};

pub use chunker::{
    smart_chunk, Chunk, ChunkError, ChunkMetadata, ChunkerConfig, EmptySplitPolicy, SmartChunker,
    DEFAULT_MAX_TOKENS,
};

pub use tokenizer::{Encoding, HeuristicCounter, TiktokenCounter, TokenCounter, TokenizerError};
