//! xopp-stream - Streaming reader and parser for Xournal++ notebook files
//!
//! This library parses the XML payload of `.xopp` / `.xoj` notebook
//! documents (Xournal, Xournal++ and MrWriter) into a stream of typed
//! document events, without building a DOM and without copying character
//! data out of its read buffer.
//!
//! # Features
//!
//! - **Streaming reader**: Tokenises XML of any size through a fixed
//!   entry-point buffer that grows only when a single node demands it
//! - **In-situ entity expansion**: `&amp;`, `&#xA9;` and friends are
//!   rewritten inside the buffer, so text comes back as one slice
//! - **Typed events**: Pages, layers, strokes, text, images and their
//!   attributes arrive as strongly-typed builder calls
//! - **Lenient parsing**: Unknown tags and malformed values are logged
//!   and skipped; only structural damage aborts
//!
//! The caller supplies the two ends: an [`InputStream`] producing
//! (already decompressed) bytes, and a [`DocumentBuilder`] consuming
//! events. Gzip/zip container handling, rendering and the document model
//! itself live outside this crate.
//!
//! # Example - Tokenising a document
//!
//! ```no_run
//! use xopp_stream::{Node, Reader};
//! use std::fs::File;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // A decompressed .xopp payload
//! let file = File::open("notes.xml")?;
//! let mut reader = Reader::new(file);
//!
//! loop {
//!     match reader.read_node()? {
//!         Node::Opening(tag) => println!("<{}>", reader.view(tag.name())?),
//!         Node::Closing(tag) => println!("</{}>", reader.view(tag.name())?),
//!         Node::Text(text) => println!("{} bytes of text", text.text().len()),
//!         Node::End => break,
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Parsing into a builder
//!
//! ```no_run
//! use xopp_stream::{Reader, XmlParser};
//! use std::fs::File;
//!
//! # struct MyBuilder;
//! # impl MyBuilder { fn new() -> Self { MyBuilder } }
//! # use xopp_stream::DocumentBuilder;
//! # use std::path::PathBuf;
//! # use xopp_stream::{Color, LineStyle, PageType, Point, StrokeCapStyle, StrokeTool};
//! # impl DocumentBuilder for MyBuilder {
//! #     fn add_xournal(&mut self, _: String, _: i32) {}
//! #     fn add_mr_writer(&mut self, _: String) {}
//! #     fn finalize_document(&mut self) {}
//! #     fn add_page(&mut self, _: f64, _: f64) {}
//! #     fn finalize_page(&mut self) {}
//! #     fn add_audio_attachment(&mut self, _: PathBuf) {}
//! #     fn set_bg_name(&mut self, _: String) {}
//! #     fn set_bg_solid(&mut self, _: PageType, _: Color) {}
//! #     fn set_bg_pixmap(&mut self, _: bool, _: PathBuf) {}
//! #     fn set_bg_pixmap_cloned(&mut self, _: usize) {}
//! #     fn load_bg_pdf(&mut self, _: bool, _: PathBuf) {}
//! #     fn set_bg_pdf(&mut self, _: usize) {}
//! #     fn add_layer(&mut self, _: Option<String>) {}
//! #     fn finalize_layer(&mut self) {}
//! #     fn add_stroke(&mut self, _: StrokeTool, _: Color, _: f64, _: i32, _: StrokeCapStyle, _: Option<LineStyle>, _: PathBuf, _: u64) {}
//! #     fn set_stroke_points(&mut self, _: Vec<Point>, _: Vec<f64>) {}
//! #     fn finalize_stroke(&mut self) {}
//! #     fn add_text(&mut self, _: String, _: f64, _: f64, _: f64, _: Color, _: PathBuf, _: u64) {}
//! #     fn set_text_contents(&mut self, _: String) {}
//! #     fn finalize_text(&mut self) {}
//! #     fn add_image(&mut self, _: f64, _: f64, _: f64, _: f64) {}
//! #     fn set_image_data(&mut self, _: Vec<u8>) {}
//! #     fn set_image_attachment(&mut self, _: PathBuf) {}
//! #     fn finalize_image(&mut self) {}
//! #     fn add_tex_image(&mut self, _: f64, _: f64, _: f64, _: f64, _: String) {}
//! #     fn set_tex_image_data(&mut self, _: Vec<u8>) {}
//! #     fn set_tex_image_attachment(&mut self, _: PathBuf) {}
//! #     fn finalize_tex_image(&mut self) {}
//! #     fn is_parsing_complete(&self) -> bool { true }
//! # }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = File::open("notes.xml")?;
//! let mut builder = MyBuilder::new();
//!
//! let mut parser = XmlParser::new(Reader::new(file), &mut builder);
//! parser.parse()?;
//!
//! assert!(builder.is_parsing_complete());
//! # Ok(())
//! # }
//! ```

/// Consumer interface receiving typed document events
pub mod builder;
/// Shared primitives: errors and colors
pub mod common;
/// Payload types carried by document events
pub mod model;
/// Event-driven document parser over the reader's node stream
pub mod parser;
/// Streaming, in-situ XML tokeniser
pub mod reader;

// Re-export the whole public surface at the crate root for convenience
pub use builder::DocumentBuilder;
pub use common::{Color, Error, Result};
pub use model::{LineStyle, PageType, PageTypeFormat, Point, StrokeCapStyle, StrokeTool};
pub use parser::{TagType, XmlParser};
pub use reader::{ClosingNode, InputStream, Node, OpeningNode, Reader, Span, TextNode};
