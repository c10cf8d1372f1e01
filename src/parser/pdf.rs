use super::{FormatParser, ParseError};
#[cfg(feature = "structured")]
use super::{partition, Element};
use tracing::debug;

/// PDF text extraction backed by pdf-extract
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfParser;

impl FormatParser for PdfParser {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn extract_text(&self, bytes: &[u8]) -> Result<String, ParseError> {
        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| ParseError::Pdf(e.to_string()))?;
        debug!(bytes = bytes.len(), chars = text.len(), "extracted PDF text");
        Ok(text)
    }

    #[cfg(feature = "structured")]
    fn extract_elements(&self, bytes: &[u8]) -> Result<Vec<Element>, ParseError> {
        let text = self.extract_text(bytes)?;
        let elements = partition::partition_text(&text);
        debug!(elements = elements.len(), "partitioned PDF text");
        Ok(elements)
    }
}
