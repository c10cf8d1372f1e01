mod document;
mod docx;
mod error;
#[cfg(feature = "structured")]
pub mod partition;
mod pdf;
mod registry;
mod result;

#[cfg(test)]
mod tests;

pub use document::{DocumentParser, STRUCTURED_AVAILABLE};
pub use docx::DocxParser;
pub use error::ParseError;
pub use pdf::PdfParser;
pub use registry::ParserRegistry;
pub use result::{category, Element, ParseMode, ParsedDocument};

/// Core trait that all format parsers implement
pub trait FormatParser: Send + Sync {
    /// Short name for logs, e.g. "pdf"
    fn name(&self) -> &'static str;

    /// Extract the document as one flat string
    ///
    /// # Arguments
    /// * `bytes` - Raw file contents
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ParseError>;

    /// Extract the document as ordered, categorized elements
    #[cfg(feature = "structured")]
    fn extract_elements(&self, bytes: &[u8]) -> Result<Vec<Element>, ParseError>;
}
