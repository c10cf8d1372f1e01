use super::{FormatParser, ParseError};
#[cfg(feature = "structured")]
use super::{category, partition, Element};
#[cfg(feature = "structured")]
use quick_xml::events::BytesStart;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use tracing::debug;

const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX text extraction: unzips the package and walks `word/document.xml`
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxParser;

impl FormatParser for DocxParser {
    fn name(&self) -> &'static str {
        "docx"
    }

    /// Body paragraphs joined by newlines; tables are skipped and empty
    /// paragraphs kept as blank lines
    fn extract_text(&self, bytes: &[u8]) -> Result<String, ParseError> {
        let blocks = read_blocks(&read_document_xml(bytes)?)?;
        let paragraphs: Vec<String> = blocks
            .into_iter()
            .filter_map(|block| match block {
                Block::Paragraph(p) => Some(p.text),
                Block::Table(_) => None,
            })
            .collect();

        debug!(paragraphs = paragraphs.len(), "extracted DOCX text");
        Ok(paragraphs.join("\n"))
    }

    #[cfg(feature = "structured")]
    fn extract_elements(&self, bytes: &[u8]) -> Result<Vec<Element>, ParseError> {
        let blocks = read_blocks(&read_document_xml(bytes)?)?;
        let elements: Vec<Element> = blocks.into_iter().filter_map(block_to_element).collect();

        debug!(elements = elements.len(), "partitioned DOCX body");
        Ok(elements)
    }
}

/// A top-level body item of the document
#[derive(Debug)]
enum Block {
    Paragraph(Paragraph),
    /// Rows of cell texts; flat text skips tables
    #[cfg_attr(not(feature = "structured"), allow(dead_code))]
    Table(Vec<Vec<String>>),
}

#[derive(Debug, Default)]
struct Paragraph {
    /// Style id from `w:pStyle`, e.g. "Heading1"
    #[cfg(feature = "structured")]
    style: Option<String>,
    /// Paragraph carries list numbering (`w:numPr`)
    #[cfg(feature = "structured")]
    numbered: bool,
    text: String,
}

fn read_document_xml(bytes: &[u8]) -> Result<String, ParseError> {
    let mut archive =
        zip::ZipArchive::new(Cursor::new(bytes)).map_err(|e| ParseError::Docx(e.to_string()))?;

    let mut part = archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ParseError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?;

    let mut xml = String::new();
    part.read_to_string(&mut xml)
        .map_err(|e| ParseError::Docx(format!("{}: {}", DOCUMENT_PART, e)))?;
    Ok(xml)
}

/// Walk WordprocessingML and collect body paragraphs and tables in order
fn read_blocks(xml: &str) -> Result<Vec<Block>, ParseError> {
    let mut reader = Reader::from_str(xml);
    let mut blocks = Vec::new();

    let mut paragraph: Option<Paragraph> = None;
    let mut paragraph_depth = 0usize;
    let mut table: Option<Vec<Vec<String>>> = None;
    let mut table_depth = 0usize;
    let mut run_depth = 0usize;
    let mut in_text = false;
    // Open elements inside a skipped subtree
    let mut skip_depth = 0usize;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ParseError::Docx(format!("malformed {}: {}", DOCUMENT_PART, e)))?;

        if skip_depth > 0 {
            match event {
                Event::Start(_) => skip_depth += 1,
                Event::End(_) => skip_depth -= 1,
                Event::Eof => break,
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                // Text boxes sit inside the anchor run, and mc:Fallback repeats
                // the mc:Choice content; neither belongs to the paragraph text
                b"Fallback" | b"txbxContent" => skip_depth = 1,
                b"tbl" => {
                    table_depth += 1;
                    if table_depth == 1 {
                        table = Some(Vec::new());
                    }
                }
                b"tr" if table_depth == 1 => {
                    if let Some(rows) = table.as_mut() {
                        rows.push(Vec::new());
                    }
                }
                b"tc" if table_depth == 1 => {
                    if let Some(row) = table.as_mut().and_then(|rows| rows.last_mut()) {
                        row.push(String::new());
                    }
                }
                b"p" => {
                    paragraph_depth += 1;
                    if paragraph_depth == 1 {
                        paragraph = Some(Paragraph::default());
                    }
                }
                #[cfg(feature = "structured")]
                b"pStyle" => set_style(&e, paragraph.as_mut()),
                #[cfg(feature = "structured")]
                b"numPr" => mark_numbered(paragraph.as_mut()),
                b"r" => run_depth += 1,
                b"t" => in_text = true,
                _ => {}
            },
            Event::Empty(e) => match e.local_name().as_ref() {
                b"p" if paragraph_depth == 0 => {
                    finish_paragraph(Paragraph::default(), table_depth, &mut table, &mut blocks)
                }
                #[cfg(feature = "structured")]
                b"pStyle" => set_style(&e, paragraph.as_mut()),
                #[cfg(feature = "structured")]
                b"numPr" => mark_numbered(paragraph.as_mut()),
                // Tab stops under w:pPr share the element name, only runs count
                b"tab" if run_depth > 0 => push_text(paragraph.as_mut(), "\t"),
                b"br" | b"cr" if run_depth > 0 => push_text(paragraph.as_mut(), "\n"),
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ParseError::Docx(format!("bad text node: {}", e)))?;
                push_text(paragraph.as_mut(), &text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"r" => run_depth = run_depth.saturating_sub(1),
                b"p" => {
                    paragraph_depth = paragraph_depth.saturating_sub(1);
                    if paragraph_depth == 0 {
                        if let Some(done) = paragraph.take() {
                            finish_paragraph(done, table_depth, &mut table, &mut blocks);
                        }
                    }
                }
                b"tbl" => {
                    table_depth = table_depth.saturating_sub(1);
                    if table_depth == 0 {
                        if let Some(rows) = table.take() {
                            blocks.push(Block::Table(rows));
                        }
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(blocks)
}

#[cfg(feature = "structured")]
fn set_style(e: &BytesStart<'_>, paragraph: Option<&mut Paragraph>) {
    let Some(paragraph) = paragraph else {
        return;
    };

    for attr in e.attributes().flatten() {
        if attr.key.local_name().as_ref() == b"val" {
            paragraph.style = Some(String::from_utf8_lossy(&attr.value).into_owned());
        }
    }
}

#[cfg(feature = "structured")]
fn mark_numbered(paragraph: Option<&mut Paragraph>) {
    if let Some(paragraph) = paragraph {
        paragraph.numbered = true;
    }
}

fn push_text(paragraph: Option<&mut Paragraph>, text: &str) {
    if let Some(paragraph) = paragraph {
        paragraph.text.push_str(text);
    }
}

// Paragraphs inside a table land in the current cell, one line each
fn finish_paragraph(
    paragraph: Paragraph,
    table_depth: usize,
    table: &mut Option<Vec<Vec<String>>>,
    blocks: &mut Vec<Block>,
) {
    if table_depth == 0 {
        blocks.push(Block::Paragraph(paragraph));
        return;
    }

    let cell = table
        .as_mut()
        .and_then(|rows| rows.last_mut())
        .and_then(|row| row.last_mut());
    if let Some(cell) = cell {
        if !cell.is_empty() {
            cell.push('\n');
        }
        cell.push_str(&paragraph.text);
    }
}

#[cfg(feature = "structured")]
fn block_to_element(block: Block) -> Option<Element> {
    match block {
        Block::Paragraph(p) => {
            if p.text.trim().is_empty() {
                return None;
            }
            let category = classify_paragraph(&p);
            Some(Element::new(category, p.text.trim()))
        }
        Block::Table(rows) => {
            let text = rows
                .iter()
                .map(|row| row.join("\t"))
                .collect::<Vec<_>>()
                .join("\n");
            if text.trim().is_empty() {
                return None;
            }
            Some(Element::new(category::TABLE, text))
        }
    }
}

/// Explicit paragraph styles win over the text heuristic
#[cfg(feature = "structured")]
fn classify_paragraph(paragraph: &Paragraph) -> &'static str {
    let style = paragraph.style.as_deref().unwrap_or_default().to_lowercase();

    if style == "title" {
        category::TITLE
    } else if style.starts_with("heading") || style == "subtitle" {
        category::SECTION_HEADER
    } else if paragraph.numbered || style.starts_with("list") {
        category::LIST_ITEM
    } else {
        partition::classify_text(&paragraph.text)
    }
}
