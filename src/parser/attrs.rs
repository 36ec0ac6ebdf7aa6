//! Attribute names used in .xoj / .xopp files.

// xournal
pub(crate) const CREATOR: &str = "creator";
pub(crate) const VERSION: &str = "version"; // also in MrWriter
pub(crate) const FILEVERSION: &str = "fileversion";

// page
pub(crate) const WIDTH: &str = "width"; // also in stroke
pub(crate) const HEIGHT: &str = "height";

// background
pub(crate) const NAME: &str = "name"; // also in layer
pub(crate) const TYPE: &str = "type";
pub(crate) const STYLE: &str = "style"; // also in stroke
pub(crate) const CONFIG: &str = "config";
pub(crate) const COLOR: &str = "color"; // also in stroke and text
pub(crate) const DOMAIN: &str = "domain";
pub(crate) const FILENAME: &str = "filename";
pub(crate) const PAGE_NUMBER: &str = "pageno";

// timestamp
pub(crate) const AUDIO_FILENAME: &str = "fn"; // also in stroke, text and audio
pub(crate) const TIMESTAMP: &str = "ts"; // also in stroke and text

// stroke
pub(crate) const TOOL: &str = "tool";
pub(crate) const PRESSURES: &str = "pressures";
pub(crate) const FILL: &str = "fill";
pub(crate) const CAPSTYLE: &str = "capStyle";

// text
pub(crate) const FONT: &str = "font";
pub(crate) const SIZE: &str = "size";
pub(crate) const X_COORD: &str = "x";
pub(crate) const Y_COORD: &str = "y";

// image
pub(crate) const LEFT_POS: &str = "left"; // also in teximage
pub(crate) const TOP_POS: &str = "top";
pub(crate) const RIGHT_POS: &str = "right";
pub(crate) const BOTTOM_POS: &str = "bottom";

// teximage
pub(crate) const TEXT: &str = "text";

// attachment
pub(crate) const PATH: &str = "path";
