use super::{DocxParser, FormatParser, ParseError, ParseMode, PdfParser};
use std::collections::HashMap;
use std::path::Path;

/// Dispatch table from file extension to format parser
///
/// There is no fallback: an extension without a registered parser is an
/// `UnsupportedFileType` error.
pub struct ParserRegistry {
    /// Extension (lowercase, no dot) -> Parser mapping
    map: HashMap<String, Box<dyn FormatParser>>,
}

impl ParserRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Registry with the built-in PDF and DOCX parsers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("pdf", PdfParser);
        registry.register("docx", DocxParser);
        registry
    }

    /// Register a parser for a file extension (without dot, e.g. "pdf")
    ///
    /// Extensions are matched case-insensitively.
    pub fn register(&mut self, extension: impl Into<String>, parser: impl FormatParser + 'static) {
        self.map
            .insert(extension.into().to_lowercase(), Box::new(parser));
    }

    /// Select the parser for `path` by its extension
    ///
    /// `mode` only flavours the error message.
    pub fn select(&self, path: &Path, mode: ParseMode) -> Result<&dyn FormatParser, ParseError> {
        let ext = extension_of(path);

        self.map
            .get(&ext)
            .map(|p| &**p)
            .ok_or_else(|| ParseError::UnsupportedFileType {
                extension: if ext.is_empty() {
                    ext
                } else {
                    format!(".{}", ext)
                },
                mode,
            })
    }

    /// Get the number of registered parsers
    pub fn parser_count(&self) -> usize {
        self.map.len()
    }

    /// List all registered extensions, sorted
    pub fn registered_extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.map.keys().map(|s| s.as_str()).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}
