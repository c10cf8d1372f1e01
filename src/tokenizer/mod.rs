mod error;
mod heuristic;
mod tiktoken;

#[cfg(test)]
mod tests;

pub use error::TokenizerError;
pub use heuristic::HeuristicCounter;
pub use tiktoken::{Encoding, TiktokenCounter};

/// Counts tokens the way the downstream embedding model will see them
pub trait TokenCounter: Send + Sync {
    /// Number of tokens in `text`. Must not fail for any valid string.
    fn count(&self, text: &str) -> usize;

    /// Human-readable name of the encoding, for logs
    fn name(&self) -> &str;
}

impl<T: TokenCounter + ?Sized> TokenCounter for Box<T> {
    fn count(&self, text: &str) -> usize {
        (**self).count(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
