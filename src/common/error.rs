//! Unified error type for document loading.
//!
//! Only structural failures surface here: reader I/O problems, malformed
//! bytes the tokeniser cannot recover from, and document-structure
//! violations caught by the parser. Recoverable content problems (unknown
//! tags, unparseable attribute values and the like) are reported through
//! the `log` facade instead and never abort a parse.
use thiserror::Error;

/// Main error type for xopp-stream operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The input stream reported an error
    #[error("Read error occurred: {0}")]
    Io(#[from] std::io::Error),

    /// A byte that cannot start a node appeared between elements
    #[error("Unexpected character '{0}' found outside node")]
    UnexpectedCharacter(char),

    /// The input ended in the middle of a token
    #[error("Unexpected end of data while parsing")]
    UnexpectedEof,

    /// A slice of the document is not valid UTF-8
    #[error("Document text is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// A span no longer lies within the reader's buffer
    #[error("Requested a view outside the reader buffer")]
    StaleSpan,

    /// The document root element was self-closing
    #[error("Error parsing XML file: the document root tag is empty")]
    EmptyRootTag,

    /// A closing tag appeared with no element open
    #[error("Error parsing XML file: found closing tag \"{tag}\" at document root")]
    ClosingTagAtRoot {
        /// Kind of the offending closing tag
        tag: &'static str,
    },

    /// A closing tag did not match the innermost open element
    #[error(
        "Error parsing XML file: closing tag \"{closing}\" does not correspond to last open element \"{open}\""
    )]
    MismatchedClosingTag {
        /// Kind of the closing tag that was read
        closing: &'static str,
        /// Kind of the element actually open
        open: &'static str,
    },
}

/// Result type for xopp-stream operations.
pub type Result<T> = std::result::Result<T, Error>;
