use super::{ChunkError, ChunkerConfig, EmptySplitPolicy};
use crate::parser::Element;
use crate::tokenizer::TokenCounter;
use serde::{Deserialize, Serialize};
use std::mem;
use tracing::{debug, trace};

/// A chunk of text ready for embedding/indexing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Element texts, newline-joined and trimmed
    pub text: String,
    /// Metadata about the chunk
    pub metadata: ChunkMetadata,
}

/// Metadata for a chunk
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Text of the most recent Title/SectionHeader
    pub section: Option<String>,
    /// Categories of the body elements recorded for this chunk, in order
    pub categories: Vec<String>,
    /// Tokens buffered when the chunk was closed
    pub token_count: usize,
}

/// Chunker bound to a token counter and config
pub struct SmartChunker {
    counter: Box<dyn TokenCounter>,
    config: ChunkerConfig,
}

impl SmartChunker {
    pub fn new(
        counter: impl TokenCounter + 'static,
        config: ChunkerConfig,
    ) -> Result<Self, ChunkError> {
        config.validate()?;
        Ok(Self {
            counter: Box::new(counter),
            config,
        })
    }

    pub fn config(&self) -> &ChunkerConfig {
        &self.config
    }

    pub fn counter(&self) -> &dyn TokenCounter {
        &*self.counter
    }

    /// Segment `elements` into chunks
    pub fn chunk(&self, elements: &[Element]) -> Vec<Chunk> {
        segment(elements, &self.config, &*self.counter)
    }
}

/// Chunk structured elements, starting a new chunk at every Title or
/// SectionHeader and whenever the next element would push the chunk past
/// `max_tokens`
///
/// An element that is over budget on its own is kept whole in a chunk of
/// its own.
pub fn smart_chunk(
    elements: &[Element],
    max_tokens: usize,
    counter: &dyn TokenCounter,
) -> Result<Vec<Chunk>, ChunkError> {
    let config = ChunkerConfig::new().max_tokens(max_tokens);
    config.validate()?;
    Ok(segment(elements, &config, counter))
}

/// The chunk currently being filled
#[derive(Default)]
struct Pending {
    text: String,
    tokens: usize,
    section: Option<String>,
    categories: Vec<String>,
}

impl Pending {
    /// Close the pending chunk and open the next one under `next_section`
    fn close(&mut self, next_section: Option<String>) -> Chunk {
        let chunk = Chunk {
            text: self.text.trim().to_string(),
            metadata: ChunkMetadata {
                section: mem::replace(&mut self.section, next_section),
                categories: mem::take(&mut self.categories),
                token_count: self.tokens,
            },
        };
        self.text.clear();
        self.tokens = 0;
        chunk
    }

    /// Fresh metadata for a new section; any buffered text must already be closed
    fn reset_section(&mut self, section: &str) {
        self.text.clear();
        self.tokens = 0;
        self.section = Some(section.to_string());
        self.categories.clear();
    }

    fn push(&mut self, text: &str, tokens: usize) {
        self.text.push_str(text);
        self.text.push('\n');
        self.tokens = self.tokens.saturating_add(tokens);
    }
}

fn segment(elements: &[Element], config: &ChunkerConfig, counter: &dyn TokenCounter) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut pending = Pending::default();

    for element in elements {
        if element.is_header() {
            if !pending.text.is_empty() {
                trace!(section = %element.text, "header boundary");
                chunks.push(pending.close(None));
            }
            pending.reset_section(&element.text);
        } else {
            pending.categories.push(element.category.clone());
        }

        let tokens = counter.count(&element.text);
        if pending.tokens.saturating_add(tokens) > config.max_tokens
            && (!pending.text.is_empty() || config.empty_splits == EmptySplitPolicy::Emit)
        {
            trace!(
                buffered = pending.tokens,
                incoming = tokens,
                max = config.max_tokens,
                "token budget boundary"
            );
            let section = pending.section.clone();
            chunks.push(pending.close(section));
        }

        pending.push(&element.text, tokens);
    }

    // Raw buffer check: an element with empty text still leaves "\n" behind
    if !pending.text.is_empty() {
        chunks.push(pending.close(None));
    }

    debug!(
        elements = elements.len(),
        chunks = chunks.len(),
        counter = counter.name(),
        max_tokens = config.max_tokens,
        "segmented elements"
    );
    chunks
}
