use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ChunkError {
    #[error("max_tokens must be a positive integer")]
    ZeroBudget,
}
