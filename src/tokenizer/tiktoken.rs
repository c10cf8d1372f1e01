use super::{TokenCounter, TokenizerError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tiktoken_rs::CoreBPE;

/// BPE encodings shipped with tiktoken
///
/// Pick the one matching the model that will consume the chunks
/// (`cl100k_base` for GPT-4 / ada-002, `o200k_base` for GPT-4o).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    #[default]
    Cl100kBase,
    O200kBase,
    P50kBase,
    P50kEdit,
    R50kBase,
}

impl Encoding {
    pub const ALL: [Encoding; 5] = [
        Encoding::Cl100kBase,
        Encoding::O200kBase,
        Encoding::P50kBase,
        Encoding::P50kEdit,
        Encoding::R50kBase,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Cl100kBase => "cl100k_base",
            Encoding::O200kBase => "o200k_base",
            Encoding::P50kBase => "p50k_base",
            Encoding::P50kEdit => "p50k_edit",
            Encoding::R50kBase => "r50k_base",
        }
    }

    fn load(&self) -> anyhow::Result<CoreBPE> {
        match self {
            Encoding::Cl100kBase => tiktoken_rs::cl100k_base(),
            Encoding::O200kBase => tiktoken_rs::o200k_base(),
            Encoding::P50kBase => tiktoken_rs::p50k_base(),
            Encoding::P50kEdit => tiktoken_rs::p50k_edit(),
            Encoding::R50kBase => tiktoken_rs::r50k_base(),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Encoding {
    type Err = TokenizerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Encoding::ALL
            .into_iter()
            .find(|enc| enc.as_str() == wanted)
            .ok_or_else(|| TokenizerError::UnknownEncoding(s.to_string()))
    }
}

/// Exact token counts from a tiktoken BPE
pub struct TiktokenCounter {
    encoding: Encoding,
    bpe: CoreBPE,
}

impl TiktokenCounter {
    /// Load the BPE ranks for `encoding`
    pub fn new(encoding: Encoding) -> Result<Self, TokenizerError> {
        let bpe = encoding.load().map_err(|e| TokenizerError::Load {
            encoding: encoding.to_string(),
            reason: e.to_string(),
        })?;
        tracing::debug!(encoding = %encoding, "loaded tiktoken encoding");
        Ok(Self { encoding, bpe })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }
}

impl TokenCounter for TiktokenCounter {
    // Ordinary encoding: special-token markers in document text count as plain text
    fn count(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    fn name(&self) -> &str {
        self.encoding.as_str()
    }
}

impl fmt::Debug for TiktokenCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TiktokenCounter")
            .field("encoding", &self.encoding)
            .finish_non_exhaustive()
    }
}
