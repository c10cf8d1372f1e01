use super::{ChunkError, DEFAULT_MAX_TOKENS};
use serde::{Deserialize, Serialize};

/// What a budget split does when nothing has been buffered yet
///
/// This happens when the very first element of a chunk is already over
/// budget on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySplitPolicy {
    /// Split anyway and emit a chunk with empty text
    #[default]
    Emit,
    /// Skip the split; the oversized element opens the chunk by itself
    Skip,
}

/// Settings for the smart chunker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkerConfig {
    /// Token budget per chunk. Advisory: a single element is never split.
    pub max_tokens: usize,
    pub empty_splits: EmptySplitPolicy,
}

impl ChunkerConfig {
    /// Config with `DEFAULT_MAX_TOKENS` and `EmptySplitPolicy::Emit`
    pub fn new() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            empty_splits: EmptySplitPolicy::default(),
        }
    }

    /// Set the per-chunk token budget
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the empty-split policy
    pub fn empty_splits(mut self, policy: EmptySplitPolicy) -> Self {
        self.empty_splits = policy;
        self
    }

    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.max_tokens == 0 {
            return Err(ChunkError::ZeroBudget);
        }
        Ok(())
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self::new()
    }
}
