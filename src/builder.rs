//! Consumer interface for document events.

use std::path::PathBuf;

use crate::common::Color;
use crate::model::{LineStyle, PageType, Point, StrokeCapStyle, StrokeTool};

/// Receiver of typed document events, in strict document order.
///
/// The parser drives exactly one implementation per parse. For every
/// element the attribute-carrying `add_*` / `set_*` event arrives first,
/// then any text or child events, then the matching `finalize_*` event.
/// The overall shape is:
///
/// 1. `add_xournal` or `add_mr_writer`
/// 2. per page: `add_page`, background selection (exactly one of
///    `set_bg_solid`, `set_bg_pixmap`, `set_bg_pixmap_cloned`, or
///    `load_bg_pdf` followed by `set_bg_pdf`; `set_bg_name` may precede
///    any of them), then layers, then `finalize_page`
/// 3. per layer: `add_layer`, element events, `finalize_layer`
/// 4. `finalize_document` once the root element closes
///
/// Implementations typically build an in-memory document model; tests use
/// a recording implementation instead.
pub trait DocumentBuilder {
    /// Document header of a Xournal / Xournal++ file.
    fn add_xournal(&mut self, creator: String, fileversion: i32);
    /// Document header of a MrWriter file.
    fn add_mr_writer(&mut self, creator: String);
    /// The root element closed; the document is structurally complete.
    fn finalize_document(&mut self);

    /// A new page with its dimensions in document units.
    fn add_page(&mut self, width: f64, height: f64);
    /// The current page closed.
    fn finalize_page(&mut self);

    /// A referenced audio recording attached to the document.
    fn add_audio_attachment(&mut self, filename: PathBuf);

    /// Background name, delivered before the background variant.
    fn set_bg_name(&mut self, name: String);
    /// Solid-color background with the given ruling.
    fn set_bg_solid(&mut self, page_type: PageType, color: Color);
    /// Pixmap background; `attach` selects attached over absolute paths.
    fn set_bg_pixmap(&mut self, attach: bool, filename: PathBuf);
    /// Pixmap background cloned from another page of this document.
    fn set_bg_pixmap_cloned(&mut self, page_nr: usize);
    /// Load the document-wide background PDF. Sent at most once.
    fn load_bg_pdf(&mut self, attach: bool, filename: PathBuf);
    /// Select the zero-based PDF page backing the current page.
    fn set_bg_pdf(&mut self, pageno: usize);

    /// A new layer, optionally named.
    fn add_layer(&mut self, name: Option<String>);
    /// The current layer closed.
    fn finalize_layer(&mut self);

    /// A stroke with its attributes. `audio_filename` is empty when the
    /// stroke has no recording attached.
    #[allow(clippy::too_many_arguments)]
    fn add_stroke(
        &mut self,
        tool: StrokeTool,
        color: Color,
        width: f64,
        fill: i32,
        cap_style: StrokeCapStyle,
        line_style: Option<LineStyle>,
        audio_filename: PathBuf,
        audio_timestamp: u64,
    );
    /// Coordinates and per-point pressures of the current stroke.
    /// `pressures` may be shorter than `points` or empty.
    fn set_stroke_points(&mut self, points: Vec<Point>, pressures: Vec<f64>);
    /// The current stroke closed.
    fn finalize_stroke(&mut self);

    /// A text element with its font and position.
    #[allow(clippy::too_many_arguments)]
    fn add_text(
        &mut self,
        font: String,
        size: f64,
        x: f64,
        y: f64,
        color: Color,
        audio_filename: PathBuf,
        audio_timestamp: u64,
    );
    /// Contents of the current text element.
    fn set_text_contents(&mut self, contents: String);
    /// The current text element closed.
    fn finalize_text(&mut self);

    /// A raster image with its bounding box.
    fn add_image(&mut self, left: f64, top: f64, right: f64, bottom: f64);
    /// Decoded image bytes of the current image.
    fn set_image_data(&mut self, data: Vec<u8>);
    /// Attachment path of the current image, if it references one.
    fn set_image_attachment(&mut self, path: PathBuf);
    /// The current image closed.
    fn finalize_image(&mut self);

    /// A rendered LaTeX image with its bounding box and source text.
    fn add_tex_image(&mut self, left: f64, top: f64, right: f64, bottom: f64, text: String);
    /// Decoded image bytes of the current LaTeX image.
    fn set_tex_image_data(&mut self, data: Vec<u8>);
    /// Attachment path of the current LaTeX image, if it references one.
    fn set_tex_image_attachment(&mut self, path: PathBuf);
    /// The current LaTeX image closed.
    fn finalize_tex_image(&mut self);

    /// Whether `finalize_document` has been received, i.e. the parse saw a
    /// complete document rather than stopping at a truncated input.
    fn is_parsing_complete(&self) -> bool;
}
