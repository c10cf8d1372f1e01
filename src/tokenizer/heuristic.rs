use super::TokenCounter;

/// Approximate counter: one token per 4 characters, rounded up
///
/// Rough for English prose and worse for code or CJK text. Useful when the
/// BPE tables are not wanted, e.g. in tests or quick previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicCounter;

impl TokenCounter for HeuristicCounter {
    fn count(&self, text: &str) -> usize {
        text.chars().count().div_ceil(4)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}
