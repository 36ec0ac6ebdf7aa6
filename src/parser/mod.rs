//! Event-driven document parser.
//!
//! [`XmlParser`] drives a [`Reader`] over a notebook document and turns
//! the node stream into typed [`DocumentBuilder`] events. It recognises
//! the recursive tag grammar (`xournal > page > layer > stroke|text|…`),
//! validates open/close balance with an explicit tag stack, and degrades
//! gracefully on content problems: unknown tags, bad attribute values and
//! malformed payloads are logged as warnings and skipped, while
//! structural violations (a mismatched closing tag, a closing tag at the
//! root) abort the parse with an error.
//!
//! Each grammar level is a parsing mode; the central parse loop
//! dispatches nodes to the current level until one belongs to a shallower
//! level, and hands that node back to the enclosing level.

mod attrs;
pub(crate) mod helpers;
mod tags;


pub use tags::TagType;

use log::warn;
use std::path::PathBuf;

use crate::builder::DocumentBuilder;
use crate::common::{Color, Error, Result};
use crate::model::{LineStyle, PageType, PageTypeFormat, Point, StrokeCapStyle, StrokeTool};
use crate::reader::{ClosingNode, InputStream, Node, OpeningNode, Reader, TextNode};
use helpers::{
    AttributeMap, Domain, decode_base64, get_attrib, get_attrib_color_mandatory,
    get_attrib_mandatory, next_double,
};

/// Grammar level the parser is currently processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Root,
    Document,
    Page,
    Layer,
    Attachment,
}

/// Recursive-descent parser over a reader's node stream.
///
/// Lives for a single document parse: construct it, call
/// [`parse`](Self::parse) once, then ask the builder for the result.
pub struct XmlParser<'a, I: InputStream, B: DocumentBuilder + ?Sized> {
    reader: Reader<I>,
    builder: &'a mut B,
    /// Stack of open elements, innermost last.
    hierarchy: Vec<TagType>,
    /// Only the first PDF background with a filename loads the PDF.
    pdf_filename_parsed: bool,
    /// Audio reference buffered from a preceding `<timestamp>` element,
    /// waiting for the stroke or text element it belongs to.
    temp_filename: PathBuf,
    temp_timestamp: u64,
    /// Pressures gathered from the stroke attributes, shipped together
    /// with the points once the stroke text payload arrives.
    pressure_buffer: Vec<f64>,
}

impl<'a, I: InputStream, B: DocumentBuilder + ?Sized> XmlParser<'a, I, B> {
    /// Create a parser feeding `builder` from `reader`.
    pub fn new(reader: Reader<I>, builder: &'a mut B) -> Self {
        Self {
            reader,
            builder,
            hierarchy: Vec::new(),
            pdf_filename_parsed: false,
            temp_filename: PathBuf::new(),
            temp_timestamp: 0,
            pressure_buffer: Vec::new(),
        }
    }

    /// Parse the whole document, emitting builder events as it goes.
    ///
    /// Content problems are logged and skipped; structural problems
    /// return an error. A truncated document returns `Ok` with the
    /// builder left incomplete, which
    /// [`DocumentBuilder::is_parsing_complete`] reports.
    pub fn parse(&mut self) -> Result<()> {
        self.run(Mode::Root)?;
        Ok(())
    }

    /// Drive `mode` over the node stream. Reads the first node and, while
    /// nodes belong to this level (their effective depth is at least the
    /// stack depth at entry), lets the level's handler process each one.
    /// The first node belonging to a shallower level is handed back to
    /// the caller; [`Node::End`] terminates every level.
    fn run(&mut self, mode: Mode) -> Result<Node> {
        let node = self.reader.read_node()?;
        if !matches!(node, Node::Opening(_)) {
            return Ok(node);
        }
        let start_depth = self.hierarchy.len();

        let mut node = node;
        loop {
            if matches!(node, Node::End) || self.effective_depth(&node) < start_depth {
                return Ok(node);
            }
            node = self.process(mode, node)?;
        }
    }

    /// Depth of a node in the element tree. A closing tag belongs to the
    /// level of the element it closes, one above the stack top.
    fn effective_depth(&self, node: &Node) -> usize {
        match node {
            Node::Closing(_) => self.hierarchy.len().saturating_sub(1),
            _ => self.hierarchy.len(),
        }
    }

    fn process(&mut self, mode: Mode, node: Node) -> Result<Node> {
        match mode {
            Mode::Root => self.process_root(node),
            Mode::Document => self.process_document_child(node),
            Mode::Page => self.process_page_child(node),
            Mode::Layer => self.process_layer_child(node),
            Mode::Attachment => self.process_attachment(node),
        }
    }

    fn process_root(&mut self, node: Node) -> Result<Node> {
        match node {
            Node::Opening(opening) => {
                // The root tag should not be empty
                if opening.is_empty_element() {
                    return Err(Error::EmptyRootTag);
                }
                let tag = self.open_tag(&opening)?;
                let attributes = self.attribute_map(&opening)?;
                match tag {
                    TagType::Xournal => self.parse_xournal_tag(&attributes),
                    TagType::MrWriter => self.parse_mr_writer_tag(&attributes),
                    _ => {
                        // Attempt parsing the document anyway
                        warn!(
                            "XML parser: Unexpected root tag: \"{}\"",
                            self.reader.view(opening.name())?
                        );
                    }
                }
                self.run(Mode::Document)
            }
            Node::Closing(closing) => {
                // Parsing is done: we have arrived at the closing node.
                // Keep reading afterwards so trailing data gets reported.
                self.builder.finalize_document();
                let tag = self.closing_tag_type(&closing)?;
                self.close_tag(tag)?;
                self.reader.read_node()
            }
            Node::Text(_) => {
                warn!("XML parser: Ignoring unexpected text at document root");
                self.reader.read_node()
            }
            Node::End => Ok(Node::End),
        }
    }

    fn process_document_child(&mut self, node: Node) -> Result<Node> {
        match node {
            Node::Opening(opening) => {
                let is_empty = opening.is_empty_element();
                let tag = self.open_tag(&opening)?;
                match tag {
                    TagType::Title | TagType::Preview => {
                        // Ignore these tags, we don't need them.
                    }
                    TagType::Page => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_page_tag(&attributes);
                        if is_empty {
                            warn!("XML parser: Found empty page");
                            self.builder.finalize_page();
                        } else {
                            return self.run(Mode::Page);
                        }
                    }
                    TagType::Audio => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_audio_tag(&attributes);
                    }
                    _ => {
                        warn!(
                            "XML parser: Ignoring unexpected tag in document: \"{}\"",
                            self.reader.view(opening.name())?
                        );
                    }
                }
                self.reader.read_node()
            }
            Node::Text(_) => {
                // Text from title or preview is expected, anything else is not.
                if !matches!(
                    self.hierarchy.last(),
                    Some(TagType::Title | TagType::Preview)
                ) {
                    warn!(
                        "XML parser: Ignoring unexpected text under tag \"{}\"",
                        self.open_tag_name()
                    );
                }
                self.reader.read_node()
            }
            Node::Closing(closing) => {
                if self.hierarchy.last() == Some(&TagType::Page) {
                    self.builder.finalize_page();
                }
                let tag = self.closing_tag_type(&closing)?;
                self.close_tag(tag)?;
                self.reader.read_node()
            }
            Node::End => Ok(Node::End),
        }
    }

    fn process_page_child(&mut self, node: Node) -> Result<Node> {
        match node {
            Node::Opening(opening) => {
                let is_empty = opening.is_empty_element();
                let tag = self.open_tag(&opening)?;
                match tag {
                    TagType::Background => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_background_tag(&attributes);
                    }
                    TagType::Layer => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_layer_tag(&attributes);
                        if is_empty {
                            // Don't warn: it's normal to have an empty
                            // layer in an empty page
                            self.builder.finalize_layer();
                        } else {
                            return self.run(Mode::Layer);
                        }
                    }
                    _ => {
                        warn!(
                            "XML parser: Ignoring unexpected tag in page: \"{}\"",
                            self.reader.view(opening.name())?
                        );
                    }
                }
                self.reader.read_node()
            }
            Node::Text(_) => {
                warn!("XML parser: Ignoring unexpected text in page");
                self.reader.read_node()
            }
            Node::Closing(closing) => {
                if self.hierarchy.last() == Some(&TagType::Layer) {
                    self.builder.finalize_layer();
                }
                let tag = self.closing_tag_type(&closing)?;
                self.close_tag(tag)?;
                self.reader.read_node()
            }
            Node::End => Ok(Node::End),
        }
    }

    fn process_layer_child(&mut self, node: Node) -> Result<Node> {
        match node {
            Node::Opening(opening) => {
                let is_empty = opening.is_empty_element();
                let tag = self.open_tag(&opening)?;
                match tag {
                    TagType::Timestamp => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_timestamp_tag(&attributes);
                    }
                    TagType::Stroke => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_stroke_tag(&attributes);
                        if is_empty {
                            warn!("XML parser: Found empty stroke");
                            self.builder.finalize_stroke();
                        }
                    }
                    TagType::Text => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_text_tag(&attributes);
                        if is_empty {
                            warn!("XML parser: Found empty text");
                            self.builder.finalize_text();
                        }
                    }
                    TagType::Image => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_image_tag(&attributes);
                        if is_empty {
                            warn!("XML parser: Found empty image");
                            self.builder.finalize_image();
                        } else {
                            // An image may have an attachment. If it
                            // doesn't, run() will return right away.
                            return self.run(Mode::Attachment);
                        }
                    }
                    TagType::TexImage => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_tex_image_tag(&attributes);
                        if is_empty {
                            warn!("XML parser: Found empty TEX image");
                            self.builder.finalize_tex_image();
                        } else {
                            return self.run(Mode::Attachment);
                        }
                    }
                    _ => {
                        warn!(
                            "XML parser: Ignoring unexpected tag in layer: \"{}\"",
                            self.reader.view(opening.name())?
                        );
                    }
                }
                self.reader.read_node()
            }
            Node::Text(text) => {
                match self.hierarchy.last() {
                    Some(TagType::Stroke) => self.parse_stroke_text(&text)?,
                    Some(TagType::Text) => self.parse_text_text(&text)?,
                    Some(TagType::Image) => self.parse_image_text(&text)?,
                    Some(TagType::TexImage) => self.parse_tex_image_text(&text)?,
                    _ => {
                        warn!(
                            "XML parser: Ignoring unexpected text under tag \"{}\"",
                            self.open_tag_name()
                        );
                    }
                }
                self.reader.read_node()
            }
            Node::Closing(closing) => {
                match self.hierarchy.last() {
                    Some(TagType::Stroke) => self.builder.finalize_stroke(),
                    Some(TagType::Text) => self.builder.finalize_text(),
                    Some(TagType::Image) => self.builder.finalize_image(),
                    Some(TagType::TexImage) => self.builder.finalize_tex_image(),
                    _ => {}
                }
                let tag = self.closing_tag_type(&closing)?;
                self.close_tag(tag)?;
                self.reader.read_node()
            }
            Node::End => Ok(Node::End),
        }
    }

    fn process_attachment(&mut self, node: Node) -> Result<Node> {
        match node {
            Node::Opening(opening) => {
                let tag = self.open_tag(&opening)?;
                match tag {
                    TagType::Attachment => {
                        let attributes = self.attribute_map(&opening)?;
                        self.parse_attachment_tag(&attributes);
                    }
                    _ => {
                        warn!(
                            "XML parser: Ignoring unexpected tag in image or TEX image: \"{}\"",
                            self.reader.view(opening.name())?
                        );
                    }
                }
                self.reader.read_node()
            }
            Node::Text(_) => {
                warn!("XML parser: Ignoring unexpected text in image or TEX image");
                self.reader.read_node()
            }
            Node::Closing(closing) => {
                let tag = self.closing_tag_type(&closing)?;
                self.close_tag(tag)?;
                self.reader.read_node()
            }
            Node::End => Ok(Node::End),
        }
    }

    // -- tag stack -----------------------------------------------------

    /// Resolve the tag kind and push it, unless the element is empty
    /// (an empty element has no closing tag to pop it).
    fn open_tag(&mut self, opening: &OpeningNode) -> Result<TagType> {
        let tag = TagType::from_name(self.reader.view(opening.name())?);
        if !opening.is_empty_element() {
            self.hierarchy.push(tag);
        }
        Ok(tag)
    }

    /// Pop the stack for a closing tag, verifying the document structure
    /// is not messed up.
    fn close_tag(&mut self, tag: TagType) -> Result<()> {
        match self.hierarchy.pop() {
            None => Err(Error::ClosingTagAtRoot { tag: tag.name() }),
            Some(open) if open != tag => Err(Error::MismatchedClosingTag {
                closing: tag.name(),
                open: open.name(),
            }),
            Some(_) => Ok(()),
        }
    }

    fn closing_tag_type(&self, closing: &ClosingNode) -> Result<TagType> {
        Ok(TagType::from_name(self.reader.view(closing.name())?))
    }

    fn open_tag_name(&self) -> &'static str {
        self.hierarchy.last().map_or("none", |tag| tag.name())
    }

    /// Copy an opening node's attributes into owned strings. Text
    /// payloads stay as reader spans; attribute values are small.
    fn attribute_map(&self, opening: &OpeningNode) -> Result<AttributeMap> {
        let mut map = AttributeMap::with_capacity(opening.attributes().len());
        for &(name, value) in opening.attributes() {
            map.insert(
                self.reader.view(name)?.to_owned(),
                self.reader.view(value)?.to_owned(),
            );
        }
        Ok(map)
    }

    // -- per-tag attribute handling ------------------------------------

    fn parse_xournal_tag(&mut self, attributes: &AttributeMap) {
        let creator = match get_attrib::<String>(attrs::CREATOR, attributes) {
            Some(creator) => creator,
            // Compatibility: before the creator attribute existed, only a
            // version string was written
            None => match get_attrib::<String>(attrs::VERSION, attributes) {
                Some(version) => format!("Xournal {version}"),
                None => "Unknown".to_owned(),
            },
        };
        let fileversion = get_attrib_mandatory::<i32>(attrs::FILEVERSION, attributes, 1, true);
        self.builder.add_xournal(creator, fileversion);
    }

    fn parse_mr_writer_tag(&mut self, attributes: &AttributeMap) {
        let creator = match get_attrib::<String>(attrs::VERSION, attributes) {
            Some(version) => format!("MrWriter {version}"),
            None => "Unknown".to_owned(),
        };
        self.builder.add_mr_writer(creator);
    }

    fn parse_page_tag(&mut self, attributes: &AttributeMap) {
        let width = get_attrib_mandatory::<f64>(attrs::WIDTH, attributes, 0.0, true);
        let height = get_attrib_mandatory::<f64>(attrs::HEIGHT, attributes, 0.0, true);
        self.builder.add_page(width, height);
    }

    fn parse_audio_tag(&mut self, attributes: &AttributeMap) {
        let filename =
            get_attrib_mandatory::<PathBuf>(attrs::AUDIO_FILENAME, attributes, PathBuf::new(), true);
        self.builder.add_audio_attachment(filename);
    }

    fn parse_background_tag(&mut self, attributes: &AttributeMap) {
        if let Some(name) = get_attrib::<String>(attrs::NAME, attributes) {
            self.builder.set_bg_name(name);
        }
        match get_attrib::<String>(attrs::TYPE, attributes) {
            Some(bg_type) => match bg_type.as_str() {
                "solid" => self.parse_bg_solid(attributes),
                "pixmap" => self.parse_bg_pixmap(attributes),
                "pdf" => self.parse_bg_pdf(attributes),
                other => {
                    warn!("XML parser: Ignoring unknown background type \"{other}\"");
                }
            },
            None => {
                // Without a type, the other attributes cannot be
                // interpreted; leave the default background in place.
                warn!("XML parser: Attribute \"type\" not found in background tag. Ignoring tag.");
            }
        }
    }

    fn parse_bg_solid(&mut self, attributes: &AttributeMap) {
        let format = get_attrib::<String>(attrs::STYLE, attributes)
            .map(|style| PageTypeFormat::from_name(&style))
            .unwrap_or_default();
        let config = get_attrib_mandatory::<String>(attrs::CONFIG, attributes, String::new(), false);
        let color = get_attrib_color_mandatory(attributes, Color::WHITE, true);
        self.builder.set_bg_solid(PageType { format, config }, color);
    }

    fn parse_bg_pixmap(&mut self, attributes: &AttributeMap) {
        let domain = get_attrib_mandatory(attrs::DOMAIN, attributes, Domain::Absolute, true);
        if domain != Domain::Clone {
            let filename =
                get_attrib_mandatory::<String>(attrs::FILENAME, attributes, String::new(), true);
            self.builder
                .set_bg_pixmap(domain == Domain::Attach, PathBuf::from(filename));
        } else {
            // For a cloned background image, filename carries the page
            // number the image is cloned from.
            let page_nr = get_attrib_mandatory::<usize>(attrs::FILENAME, attributes, 0, true);
            self.builder.set_bg_pixmap_cloned(page_nr);
        }
    }

    fn parse_bg_pdf(&mut self, attributes: &AttributeMap) {
        if !self.pdf_filename_parsed {
            let mut domain = get_attrib_mandatory(attrs::DOMAIN, attributes, Domain::Absolute, true);
            if domain == Domain::Clone {
                warn!(
                    "XML parser: Domain \"clone\" is invalid for PDF backgrounds. Using \"absolute\" instead"
                );
                domain = Domain::Absolute;
            }

            let filename =
                get_attrib_mandatory::<String>(attrs::FILENAME, attributes, String::new(), true);
            if !filename.is_empty() {
                self.pdf_filename_parsed = true;
                self.builder
                    .load_bg_pdf(domain == Domain::Attach, PathBuf::from(filename));
            } else {
                warn!("XML parser: PDF background filename is empty");
            }
        }

        let pageno =
            get_attrib_mandatory::<usize>(attrs::PAGE_NUMBER, attributes, 1, true).saturating_sub(1);
        self.builder.set_bg_pdf(pageno);
    }

    fn parse_layer_tag(&mut self, attributes: &AttributeMap) {
        let name = get_attrib::<String>(attrs::NAME, attributes);
        self.builder.add_layer(name);
    }

    fn parse_timestamp_tag(&mut self, attributes: &AttributeMap) {
        // Compatibility: newer files store audio timestamps in the stroke
        // or text attributes instead of a preceding timestamp element.
        if !self.temp_filename.as_os_str().is_empty() {
            warn!(
                "XML parser: Discarding unused audio timestamp element. Filename: {}",
                self.temp_filename.display()
            );
        }
        self.temp_filename =
            get_attrib_mandatory::<PathBuf>(attrs::AUDIO_FILENAME, attributes, PathBuf::new(), true);
        self.temp_timestamp = get_attrib_mandatory::<u64>(attrs::TIMESTAMP, attributes, 0, true);
    }

    /// Take the audio reference for a stroke or text element: its own
    /// `fn`/`ts` attributes win over a buffered timestamp element.
    fn read_audio_attributes(&mut self, attributes: &AttributeMap, tag_name: &str) {
        if let Some(filename) = get_attrib::<String>(attrs::AUDIO_FILENAME, attributes) {
            if !filename.is_empty() {
                if !self.temp_filename.as_os_str().is_empty() {
                    warn!(
                        "XML parser: Discarding audio timestamp element, because {tag_name} tag contains \"fn\" attribute"
                    );
                }
                self.temp_filename = PathBuf::from(filename);
                self.temp_timestamp =
                    get_attrib_mandatory::<u64>(attrs::TIMESTAMP, attributes, 0, true);
            }
        }
    }

    fn parse_stroke_tag(&mut self, attributes: &AttributeMap) {
        let tool = get_attrib_mandatory(attrs::TOOL, attributes, StrokeTool::Pen, true);
        let color = get_attrib_color_mandatory(attributes, Color::BLACK, false);

        // The width attribute carries the nominal width, optionally
        // followed by one pressure per point.
        let width_str =
            get_attrib_mandatory::<String>(attrs::WIDTH, attributes, "1".to_owned(), true);
        let (width, width_rest) = match next_double(&width_str) {
            Some((width, rest)) => (width, rest),
            None => (0.0, width_str.as_str()),
        };

        // MrWriter writes pressures in a separate attribute instead.
        let pressures_attr = get_attrib::<String>(attrs::PRESSURES, attributes);
        let mut rest = pressures_attr.as_deref().unwrap_or(width_rest);
        while !rest.is_empty() {
            match next_double(rest) {
                Some((pressure, remaining)) => {
                    self.pressure_buffer.push(pressure);
                    rest = remaining;
                }
                None => {
                    warn!(
                        "XML parser: A pressure point could not be parsed as double. Remaining points: \"{rest}\""
                    );
                    break;
                }
            }
        }

        let fill = get_attrib_mandatory::<i32>(attrs::FILL, attributes, -1, false);
        let cap_style =
            get_attrib_mandatory(attrs::CAPSTYLE, attributes, StrokeCapStyle::Round, false);
        let line_style = get_attrib::<LineStyle>(attrs::STYLE, attributes);

        self.read_audio_attributes(attributes, "stroke");

        let filename = std::mem::take(&mut self.temp_filename);
        self.builder.add_stroke(
            tool,
            color,
            width,
            fill,
            cap_style,
            line_style,
            filename,
            self.temp_timestamp,
        );
        // Filename was already moved out
        self.temp_timestamp = 0;
    }

    /// Parse the stroke payload: whitespace-separated `x y` pairs.
    fn parse_stroke_text(&mut self, text: &TextNode) -> Result<()> {
        let data = self.reader.view(text.text())?;
        let mut points = Vec::with_capacity(self.pressure_buffer.len());

        let mut rest = data;
        while !rest.is_empty() {
            let Some((x, after_x)) = next_double(rest) else {
                warn!(
                    "XML parser: A stroke coordinate could not be parsed as double. Remaining data: \"{rest}\""
                );
                break;
            };
            let Some((y, after_y)) = next_double(after_x) else {
                warn!(
                    "XML parser: A stroke coordinate could not be parsed as double. Remaining data: \"{after_x}\""
                );
                break;
            };
            points.push(Point { x, y });
            rest = after_y;
        }

        self.builder
            .set_stroke_points(points, std::mem::take(&mut self.pressure_buffer));
        Ok(())
    }

    fn parse_text_tag(&mut self, attributes: &AttributeMap) {
        let font = get_attrib_mandatory::<String>(attrs::FONT, attributes, "Sans".to_owned(), true);
        let size = get_attrib_mandatory::<f64>(attrs::SIZE, attributes, 12.0, true);
        let x = get_attrib_mandatory::<f64>(attrs::X_COORD, attributes, 0.0, true);
        let y = get_attrib_mandatory::<f64>(attrs::Y_COORD, attributes, 0.0, true);
        let color = get_attrib_color_mandatory(attributes, Color::BLACK, false);

        self.read_audio_attributes(attributes, "text");

        let filename = std::mem::take(&mut self.temp_filename);
        self.builder
            .add_text(font, size, x, y, color, filename, self.temp_timestamp);
        self.temp_timestamp = 0;
    }

    fn parse_text_text(&mut self, text: &TextNode) -> Result<()> {
        let contents = self.reader.view(text.text())?.to_owned();
        self.builder.set_text_contents(contents);
        Ok(())
    }

    fn parse_image_tag(&mut self, attributes: &AttributeMap) {
        let left = get_attrib_mandatory::<f64>(attrs::LEFT_POS, attributes, 0.0, true);
        let top = get_attrib_mandatory::<f64>(attrs::TOP_POS, attributes, 0.0, true);
        let right = get_attrib_mandatory::<f64>(attrs::RIGHT_POS, attributes, 0.0, true);
        let bottom = get_attrib_mandatory::<f64>(attrs::BOTTOM_POS, attributes, 0.0, true);
        self.builder.add_image(left, top, right, bottom);
    }

    fn parse_image_text(&mut self, text: &TextNode) -> Result<()> {
        let data = decode_base64(self.reader.view(text.text())?);
        self.builder.set_image_data(data);
        Ok(())
    }

    fn parse_tex_image_tag(&mut self, attributes: &AttributeMap) {
        let left = get_attrib_mandatory::<f64>(attrs::LEFT_POS, attributes, 0.0, true);
        let top = get_attrib_mandatory::<f64>(attrs::TOP_POS, attributes, 0.0, true);
        let right = get_attrib_mandatory::<f64>(attrs::RIGHT_POS, attributes, 0.0, true);
        let bottom = get_attrib_mandatory::<f64>(attrs::BOTTOM_POS, attributes, 0.0, true);
        let text = get_attrib_mandatory::<String>(attrs::TEXT, attributes, String::new(), true);
        // The legacy "texlength" attribute is ignored.
        self.builder.add_tex_image(left, top, right, bottom, text);
    }

    fn parse_tex_image_text(&mut self, text: &TextNode) -> Result<()> {
        let data = decode_base64(self.reader.view(text.text())?);
        self.builder.set_tex_image_data(data);
        Ok(())
    }

    fn parse_attachment_tag(&mut self, attributes: &AttributeMap) {
        let path = get_attrib_mandatory::<PathBuf>(attrs::PATH, attributes, PathBuf::new(), true);
        match self.hierarchy.last() {
            Some(TagType::Image) => self.builder.set_image_attachment(path),
            Some(TagType::TexImage) => self.builder.set_tex_image_attachment(path),
            _ => {}
        }
    }
}
