//! Heuristic partitioning of plain text into categorized elements.
//!
//! Used for PDFs, which carry no reliable structure once the text is
//! extracted, and for DOCX paragraphs without a telling style.

use super::result::category;
use super::Element;

const BULLETS: [char; 7] = ['•', '●', '▪', '◦', '‣', '–', '-'];

/// Split extracted text into blocks and classify each one
///
/// Blocks are separated by blank lines or form feeds (page breaks).
/// Whitespace-only blocks are dropped. Bulleted lines inside a block each
/// become their own `ListItem`.
pub fn partition_text(text: &str) -> Vec<Element> {
    let mut elements = Vec::new();

    for block in blocks(text) {
        if block.lines().any(|line| strip_bullet(line).is_some()) {
            push_list_block(&block, &mut elements);
        } else {
            elements.push(Element::new(classify_text(&block), block));
        }
    }

    elements
}

/// Category for a single paragraph of text
pub fn classify_text(text: &str) -> &'static str {
    let text = text.trim();

    if strip_bullet(text).is_some() {
        category::LIST_ITEM
    } else if looks_like_title(text) {
        category::TITLE
    } else if looks_like_narrative(text) {
        category::NARRATIVE_TEXT
    } else {
        category::UNCATEGORIZED_TEXT
    }
}

/// Text after a leading bullet marker, if the line starts with one
pub fn strip_bullet(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let mut chars = line.chars();
    let first = chars.next()?;

    if BULLETS.contains(&first) {
        let rest = chars.as_str();
        // "-5 degrees" and "--" are not bullets
        if rest.starts_with(char::is_whitespace) && !rest.trim().is_empty() {
            return Some(rest.trim());
        }
    }

    None
}

fn blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for page in text.split('\x0C') {
        for line in page.lines() {
            if line.trim().is_empty() {
                flush_block(&mut current, &mut blocks);
            } else {
                current.push(line.trim());
            }
        }
        flush_block(&mut current, &mut blocks);
    }

    blocks
}

fn flush_block(current: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if !current.is_empty() {
        blocks.push(current.join("\n"));
        current.clear();
    }
}

// Lines before the first bullet keep their own classification, continuation
// lines are folded into the preceding item.
fn push_list_block(block: &str, elements: &mut Vec<Element>) {
    let mut lead: Vec<&str> = Vec::new();
    let mut item: Option<String> = None;

    for line in block.lines() {
        match strip_bullet(line) {
            Some(rest) => {
                if let Some(done) = item.take() {
                    elements.push(Element::new(category::LIST_ITEM, done));
                } else if !lead.is_empty() {
                    let text = lead.join("\n");
                    elements.push(Element::new(classify_text(&text), text));
                    lead.clear();
                }
                item = Some(rest.to_string());
            }
            None => match item.as_mut() {
                Some(current) => {
                    current.push(' ');
                    current.push_str(line.trim());
                }
                None => lead.push(line),
            },
        }
    }

    if let Some(done) = item {
        elements.push(Element::new(category::LIST_ITEM, done));
    }
}

fn looks_like_title(text: &str) -> bool {
    if text.is_empty() || text.len() > 100 || text.contains('\n') {
        return false;
    }

    if text.ends_with(['.', ',', ';', ':']) {
        return false;
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > 8 {
        return false;
    }

    // Needs at least one letter: page numbers and dates are not titles
    if !text.chars().any(char::is_alphabetic) {
        return false;
    }

    let capitalized = words
        .iter()
        .filter(|w| w.chars().next().is_some_and(char::is_uppercase))
        .count();
    capitalized * 2 >= words.len()
}

fn looks_like_narrative(text: &str) -> bool {
    text.ends_with(['.', '!', '?', ':', ';']) || text.split_whitespace().count() >= 5
}
