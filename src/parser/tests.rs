#[cfg(test)]
mod tests {
    use crate::parser::{
        DocumentParser, DocxParser, FormatParser, ParseError, ParseMode, ParsedDocument,
    };
    use std::io::{Cursor, Write};
    use std::path::Path;
    use zip::write::SimpleFileOptions;
    use zip::{CompressionMethod, ZipWriter};

    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    const MC_NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
    const WPS_NS: &str = "http://schemas.microsoft.com/office/word/2010/wordprocessingShape";
    const V_NS: &str = "urn:schemas-microsoft-com:vml";

    fn document_xml(body: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}" xmlns:mc="{}" xmlns:wps="{}" xmlns:v="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            W_NS, MC_NS, WPS_NS, V_NS, body
        )
    }

    /// Minimal .docx package containing only the main document part
    fn docx_package(body: &str) -> Vec<u8> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        writer.start_file("word/document.xml", options).unwrap();
        writer.write_all(document_xml(body).as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    fn para(text: &str) -> String {
        format!(r#"<w:p><w:r><w:t xml:space="preserve">{}</w:t></w:r></w:p>"#, text)
    }

    fn styled(style: &str, text: &str) -> String {
        format!(
            r#"<w:p><w:pPr><w:pStyle w:val="{}"/></w:pPr><w:r><w:t>{}</w:t></w:r></w:p>"#,
            style, text
        )
    }

    fn resume_body() -> String {
        [
            styled("Title", "Jane Doe"),
            styled("Heading1", "Experience"),
            para("Built search infrastructure at Acme for four years."),
            r#"<w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>Rust</w:t></w:r></w:p>"#.to_string(),
            "<w:p/>".to_string(),
            r#"<w:tbl><w:tr><w:tc><w:p><w:r><w:t>Lang</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>Years</w:t></w:r></w:p></w:tc></w:tr><w:tr><w:tc><w:p><w:r><w:t>Rust</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>5</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#.to_string(),
            para("Skills &amp; tools"),
        ]
        .concat()
    }

    // ========================================================================
    // DocxParser Tests
    // ========================================================================

    #[test]
    fn test_docx_flat_joins_body_paragraphs() {
        let bytes = docx_package(&resume_body());
        let text = DocxParser.extract_text(&bytes).unwrap();

        assert_eq!(
            text,
            "Jane Doe\nExperience\nBuilt search infrastructure at Acme for four years.\nRust\n\nSkills & tools"
        );
    }

    #[test]
    fn test_docx_runs_tabs_and_breaks() {
        let body = r#"<w:p><w:pPr><w:tabs><w:tab w:val="left" w:pos="720"/></w:tabs></w:pPr><w:r><w:t>Name</w:t></w:r><w:r><w:tab/><w:t>Jane</w:t><w:br/><w:t>Doe</w:t></w:r></w:p>"#;
        let bytes = docx_package(body);

        assert_eq!(DocxParser.extract_text(&bytes).unwrap(), "Name\tJane\nDoe");
    }

    /// A paragraph whose run anchors a text box, written the way Word does:
    /// the DrawingML shape in mc:Choice and a VML copy in mc:Fallback
    fn text_box_body() -> String {
        let boxed = r#"<w:txbxContent><w:p><w:r><w:t>Boxed</w:t></w:r></w:p></w:txbxContent>"#;
        format!(
            concat!(
                r#"<w:p><w:r><w:t>Name</w:t></w:r><w:r><mc:AlternateContent>"#,
                r#"<mc:Choice Requires="wps"><w:drawing><wps:wsp><wps:txbx>{}</wps:txbx></wps:wsp></w:drawing></mc:Choice>"#,
                r#"<mc:Fallback><w:pict><v:shape><v:textbox>{}</v:textbox></v:shape></w:pict></mc:Fallback>"#,
                r#"</mc:AlternateContent><w:tab/><w:t>Jane</w:t></w:r></w:p>"#,
                r#"<w:p><w:r><w:t>Doe</w:t></w:r></w:p>"#
            ),
            boxed, boxed
        )
    }

    #[test]
    fn test_docx_text_box_not_merged_into_anchor() {
        let bytes = docx_package(&text_box_body());

        // The tab after the nested runs still belongs to the outer run
        assert_eq!(DocxParser.extract_text(&bytes).unwrap(), "Name\tJane\nDoe");
    }

    #[cfg(feature = "structured")]
    #[test]
    fn test_docx_structured_text_box_not_duplicated() {
        let bytes = docx_package(&text_box_body());
        let elements = DocxParser.extract_elements(&bytes).unwrap();

        let texts: Vec<&str> = elements.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Name\tJane", "Doe"]);
    }

    #[cfg(feature = "structured")]
    #[test]
    fn test_docx_structured_uses_styles() {
        use crate::parser::Element;

        let bytes = docx_package(&resume_body());
        let elements = DocxParser.extract_elements(&bytes).unwrap();

        assert_eq!(
            elements,
            vec![
                Element::new("Title", "Jane Doe"),
                Element::new("SectionHeader", "Experience"),
                Element::new(
                    "NarrativeText",
                    "Built search infrastructure at Acme for four years."
                ),
                Element::new("ListItem", "Rust"),
                Element::new("Table", "Lang\tYears\nRust\t5"),
                Element::new("UncategorizedText", "Skills & tools"),
            ]
        );
    }

    #[test]
    fn test_docx_without_document_part() {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/styles.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<w:styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let err = DocxParser.extract_text(&bytes).unwrap_err();
        assert!(matches!(err, ParseError::Docx(ref msg) if msg.contains("word/document.xml")));
    }

    #[test]
    fn test_docx_not_a_zip() {
        let err = DocxParser.extract_text(b"plain text pretending").unwrap_err();
        assert!(matches!(err, ParseError::Docx(_)));
    }

    // ========================================================================
    // DocumentParser Tests
    // ========================================================================

    #[test]
    fn test_unsupported_extension_fails_before_io() {
        let parser = DocumentParser::new(false).unwrap();
        // File does not exist: the extension check must come first
        let err = parser.parse(Path::new("/nonexistent/notes.txt")).unwrap_err();

        assert!(matches!(
            err,
            ParseError::UnsupportedFileType { ref extension, mode: ParseMode::Flat } if extension == ".txt"
        ));
        assert_eq!(err.to_string(), "Unsupported file type for basic parsing: .txt");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let parser = DocumentParser::new(false).unwrap();
        let err = parser.parse(Path::new("/nonexistent/resume.docx")).unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }

    #[test]
    fn test_flat_parse_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Resume.DOCX");
        std::fs::write(&path, docx_package(&resume_body())).unwrap();

        let parser = DocumentParser::new(false).unwrap();
        assert_eq!(parser.mode(), ParseMode::Flat);

        let parsed = parser.parse(&path).unwrap();
        assert!(matches!(parsed, ParsedDocument::Flat(ref text) if text.starts_with("Jane Doe\n")));

        let text = parser.parse_text(&path).unwrap();
        assert!(text.ends_with("Skills & tools"));
    }

    #[test]
    fn test_wrong_mode_accessor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, docx_package(&para("hello"))).unwrap();

        let parser = DocumentParser::new(false).unwrap();
        let err = parser.parse_elements(&path).unwrap_err();
        assert!(matches!(
            err,
            ParseError::WrongMode {
                expected: ParseMode::Structured
            }
        ));
    }

    #[cfg(feature = "structured")]
    #[test]
    fn test_structured_parse_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, docx_package(&resume_body())).unwrap();

        let parser = DocumentParser::new(true).unwrap();
        let elements = parser.parse_elements(&path).unwrap();

        assert_eq!(elements.len(), 6);
        assert!(elements[0].is_header());
        assert!(elements[1].is_header());
        assert!(!elements[2].is_header());
    }

    #[cfg(not(feature = "structured"))]
    #[test]
    fn test_structured_mode_needs_feature() {
        let err = DocumentParser::new(true).err().unwrap();
        assert!(matches!(err, ParseError::MissingDependency(_)));
    }

    // ========================================================================
    // Element / ParsedDocument Tests
    // ========================================================================

    #[test]
    fn test_element_from_tuple() {
        let element: crate::parser::Element = ("SectionHeader", "Skills").into();
        assert_eq!(element.category, "SectionHeader");
        assert_eq!(element.text, "Skills");
        assert!(element.is_header());
    }

    #[test]
    fn test_body_categories_are_not_headers() {
        for category in ["NarrativeText", "ListItem", "Text", "title", ""] {
            let element = crate::parser::Element::new(category, "x");
            assert!(!element.is_header(), "{} should not be a header", category);
        }
    }

    #[test]
    fn test_parsed_document_json_shape() {
        let doc = ParsedDocument::Flat("hello".to_string());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json, serde_json::json!({"mode": "flat", "content": "hello"}));
        assert_eq!(doc.mode(), ParseMode::Flat);
    }
}
