//! Office Open XML (`.docx`) encoding of a [`Document`].
//!
//! A `.docx` file is a zip package of XML parts. Only the parts Word and
//! LibreOffice need to open a plain text document are written: content
//! types, package relationships, the main document, styles and core
//! properties.

use super::document::{Block, Document, List, Spacing, Table};
use crate::error::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const EXTENSION: &str = "docx";

const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

// A4 with one-inch margins, in twips
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: u32 = 1440;
const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_MARGIN;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/><Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/><Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:eastAsia="Calibri" w:cs="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/></w:rPr></w:rPrDefault><w:pPrDefault><w:pPr><w:spacing w:after="0" w:line="276" w:lineRule="auto"/></w:pPr></w:pPrDefault></w:docDefaults><w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style><w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:rPr><w:sz w:val="56"/><w:szCs w:val="56"/></w:rPr></w:style><w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:outlineLvl w:val="1"/></w:pPr><w:rPr><w:b/><w:bCs/><w:sz w:val="26"/><w:szCs w:val="26"/></w:rPr></w:style><w:style w:type="table" w:default="1" w:styleId="TableNormal"><w:name w:val="Normal Table"/><w:tblPr><w:tblCellMar><w:top w:w="0" w:type="dxa"/><w:left w:w="108" w:type="dxa"/><w:bottom w:w="0" w:type="dxa"/><w:right w:w="108" w:type="dxa"/></w:tblCellMar></w:tblPr></w:style></w:styles>"#;

/// Metadata written to `docProps/core.xml`
#[derive(Debug, Clone)]
pub struct DocumentProperties {
    pub title: String,
    pub creator: String,
    pub created: DateTime<Utc>,
}

/// Encode `document` as a complete `.docx` package
pub fn write(document: &Document, properties: &DocumentProperties) -> Result<Vec<u8>> {
    let document_xml = document_xml(document)?;
    let core_xml = core_xml(properties)?;

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &[u8]); 6] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.as_bytes()),
        ("_rels/.rels", PACKAGE_RELS_XML.as_bytes()),
        ("word/document.xml", document_xml.as_slice()),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.as_bytes()),
        ("word/styles.xml", STYLES_XML.as_bytes()),
        ("docProps/core.xml", core_xml.as_slice()),
    ];

    for (name, bytes) in parts {
        zip.start_file(name, options)?;
        zip.write_all(bytes)?;
    }

    Ok(zip.finish()?.into_inner())
}

/// The `word/document.xml` part
pub fn document_xml(document: &Document) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;

    xml.start("w:document", &[("xmlns:w", WORDML_NS)])?;
    xml.start("w:body", &[])?;

    for block in &document.blocks {
        match block {
            Block::Title { text, spacing } => xml.paragraph(Some("Title"), text, *spacing)?,
            Block::Heading { text, spacing } => xml.paragraph(Some("Heading2"), text, *spacing)?,
            Block::Paragraph { text, spacing } => xml.paragraph(None, text, *spacing)?,
            Block::Table(table) => xml.table(table)?,
            Block::List(list) => xml.list(list)?,
        }
    }

    xml.section_properties()?;
    xml.end("w:body")?;
    xml.end("w:document")?;

    Ok(xml.finish())
}

fn core_xml(properties: &DocumentProperties) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    let created = properties
        .created
        .to_rfc3339_opts(SecondsFormat::Secs, true);

    xml.start(
        "cp:coreProperties",
        &[
            (
                "xmlns:cp",
                "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
            ),
            ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
            ("xmlns:dcterms", "http://purl.org/dc/terms/"),
            ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
        ],
    )?;
    xml.text_element("dc:title", &[], &properties.title)?;
    xml.text_element("dc:creator", &[], &properties.creator)?;
    xml.text_element(
        "dcterms:created",
        &[("xsi:type", "dcterms:W3CDTF")],
        &created,
    )?;
    xml.end("cp:coreProperties")?;

    Ok(xml.finish())
}

fn xml_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Export(format!("XML write failed: {e}"))
}

/// Thin event writer over quick-xml with WordprocessingML helpers
struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    fn new() -> Result<Self> {
        let mut inner = Writer::new(Vec::new());
        inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_err)?;
        Ok(Self { inner })
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.inner.write_event(Event::Start(elem)).map_err(xml_err)
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let elem = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.inner.write_event(Event::Empty(elem)).map_err(xml_err)
    }

    fn end(&mut self, name: &str) -> Result<()> {
        self.inner
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_err)
    }

    fn text(&mut self, text: &str) -> Result<()> {
        self.inner
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_err)
    }

    fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    fn paragraph(&mut self, style: Option<&str>, text: &str, spacing: Spacing) -> Result<()> {
        let before = spacing.before.to_string();
        let after = spacing.after.to_string();

        self.start("w:p", &[])?;
        self.start("w:pPr", &[])?;
        if let Some(style) = style {
            self.empty("w:pStyle", &[("w:val", style)])?;
        }
        self.empty("w:spacing", &[("w:before", before.as_str()), ("w:after", after.as_str())])?;
        self.end("w:pPr")?;

        if !text.is_empty() {
            self.start("w:r", &[])?;
            self.text_element("w:t", &[("xml:space", "preserve")], text)?;
            self.end("w:r")?;
        }

        self.end("w:p")
    }

    fn table(&mut self, table: &Table) -> Result<()> {
        self.start("w:tbl", &[])?;

        self.start("w:tblPr", &[])?;
        self.empty("w:tblW", &[("w:w", "5000"), ("w:type", "pct")])?;
        self.start("w:tblBorders", &[])?;
        for edge in ["w:top", "w:left", "w:bottom", "w:right", "w:insideH", "w:insideV"] {
            self.empty(
                edge,
                &[
                    ("w:val", "single"),
                    ("w:sz", "4"),
                    ("w:space", "0"),
                    ("w:color", "auto"),
                ],
            )?;
        }
        self.end("w:tblBorders")?;
        self.empty("w:tblLayout", &[("w:type", "fixed")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid", &[])?;
        for percent in &table.column_widths {
            let twips = (TEXT_WIDTH * percent / 100).to_string();
            self.empty("w:gridCol", &[("w:w", twips.as_str())])?;
        }
        self.end("w:tblGrid")?;

        for row in &table.rows {
            self.start("w:tr", &[])?;
            for (cell, percent) in row.iter().zip(&table.column_widths) {
                // pct widths are expressed in fiftieths of a percent
                let width = (percent * 50).to_string();
                self.start("w:tc", &[])?;
                self.start("w:tcPr", &[])?;
                self.empty("w:tcW", &[("w:w", width.as_str()), ("w:type", "pct")])?;
                self.end("w:tcPr")?;
                self.paragraph(None, cell, Spacing::default())?;
                self.end("w:tc")?;
            }
            self.end("w:tr")?;
        }

        self.end("w:tbl")
    }

    fn list(&mut self, list: &List) -> Result<()> {
        for item in list.rendered_items() {
            self.paragraph(None, &item, list.spacing)?;
        }
        Ok(())
    }

    fn section_properties(&mut self) -> Result<()> {
        let width = PAGE_WIDTH.to_string();
        let height = PAGE_HEIGHT.to_string();
        let margin = PAGE_MARGIN.to_string();

        self.start("w:sectPr", &[])?;
        self.empty("w:pgSz", &[("w:w", width.as_str()), ("w:h", height.as_str())])?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", margin.as_str()),
                ("w:right", margin.as_str()),
                ("w:bottom", margin.as_str()),
                ("w:left", margin.as_str()),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?;
        self.end("w:sectPr")
    }

    fn finish(self) -> Vec<u8> {
        self.inner.into_inner()
    }
}
