use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenizerError {
    #[error("Unknown tokenizer encoding: {0}")]
    UnknownEncoding(String),

    #[error("Failed to load {encoding} encoding: {reason}")]
    Load { encoding: String, reason: String },
}
