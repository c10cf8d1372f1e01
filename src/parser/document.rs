use super::{Element, FormatParser, ParseError, ParseMode, ParsedDocument, ParserRegistry};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Whether the element partitioner was compiled in
pub const STRUCTURED_AVAILABLE: bool = cfg!(feature = "structured");

/// Entry point for turning a document file into text or elements
///
/// The mode is fixed at construction. Structured mode needs the
/// `structured` feature and fails fast without it.
pub struct DocumentParser {
    registry: ParserRegistry,
    mode: ParseMode,
}

impl DocumentParser {
    /// Flat parsing when `structured` is false, element parsing otherwise
    pub fn new(structured: bool) -> Result<Self, ParseError> {
        let mode = if structured {
            ParseMode::Structured
        } else {
            ParseMode::Flat
        };
        Self::with_registry(ParserRegistry::with_defaults(), mode)
    }

    pub fn with_registry(registry: ParserRegistry, mode: ParseMode) -> Result<Self, ParseError> {
        if mode == ParseMode::Structured && !STRUCTURED_AVAILABLE {
            return Err(ParseError::structured_unavailable());
        }
        Ok(Self { registry, mode })
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Parse the file at `path`
    ///
    /// The extension is checked before the file is touched, so unsupported
    /// types fail without any I/O.
    pub fn parse(&self, path: &Path) -> Result<ParsedDocument, ParseError> {
        let parser = self.registry.select(path, self.mode)?;

        let bytes = fs::read(path).map_err(|source| ParseError::Io {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), parser = parser.name(), mode = %self.mode, "parsing document");

        self.parse_bytes(parser, &bytes)
    }

    /// Flat text of the file; errors unless constructed in flat mode
    pub fn parse_text(&self, path: &Path) -> Result<String, ParseError> {
        self.expect_mode(ParseMode::Flat)?;
        self.parse(path)?
            .into_text()
            .ok_or(ParseError::WrongMode {
                expected: ParseMode::Flat,
            })
    }

    /// Elements of the file; errors unless constructed in structured mode
    pub fn parse_elements(&self, path: &Path) -> Result<Vec<Element>, ParseError> {
        self.expect_mode(ParseMode::Structured)?;
        self.parse(path)?
            .into_elements()
            .ok_or(ParseError::WrongMode {
                expected: ParseMode::Structured,
            })
    }

    fn expect_mode(&self, expected: ParseMode) -> Result<(), ParseError> {
        if self.mode == expected {
            Ok(())
        } else {
            Err(ParseError::WrongMode { expected })
        }
    }

    fn parse_bytes(
        &self,
        parser: &dyn FormatParser,
        bytes: &[u8],
    ) -> Result<ParsedDocument, ParseError> {
        match self.mode {
            ParseMode::Flat => parser.extract_text(bytes).map(ParsedDocument::Flat),
            ParseMode::Structured => partition(parser, bytes).map(ParsedDocument::Structured),
        }
    }
}

#[cfg(feature = "structured")]
fn partition(parser: &dyn FormatParser, bytes: &[u8]) -> Result<Vec<Element>, ParseError> {
    parser.extract_elements(bytes)
}

#[cfg(not(feature = "structured"))]
fn partition(_parser: &dyn FormatParser, _bytes: &[u8]) -> Result<Vec<Element>, ParseError> {
    Err(ParseError::structured_unavailable())
}
