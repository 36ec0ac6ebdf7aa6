//! Nodes and the buffer spans they carry.
//!
//! Node string fields are `(start, len)` ranges into the reader's buffer
//! rather than references, so a node stays a plain value while the buffer
//! underneath it may still be compacted or grown. The reader materialises
//! the actual bytes on demand through its checked `view` accessors, and
//! rebases the spans of the node under construction whenever a refill
//! moves data. Spans are only valid until the next `read_node` call.

use smallvec::SmallVec;

/// A byte range inside the reader's buffer.
///
/// Obtain the text through [`Reader::view`](super::Reader::view) or the
/// raw bytes through [`Reader::view_bytes`](super::Reader::view_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    len: usize,
}

impl Span {
    #[inline]
    pub(crate) fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// Length of the range in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the range is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn start(&self) -> usize {
        self.start
    }

    #[inline]
    pub(crate) fn end(&self) -> usize {
        self.start + self.len
    }

    /// Rebase after the buffer contents moved `distance` bytes to the
    /// left. Empty spans carry no position worth preserving.
    #[inline]
    pub(crate) fn shift_left(&mut self, distance: usize) {
        if self.len != 0 {
            self.start -= distance;
        }
    }
}

/// One node of the XML stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `<name attr="value" ...>` or `<name ... />`
    Opening(OpeningNode),
    /// `</name>`
    Closing(ClosingNode),
    /// Character data between elements, entities already expanded
    Text(TextNode),
    /// End of input
    End,
}

/// An element opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpeningNode {
    pub(crate) name: Span,
    pub(crate) empty: bool,
    pub(crate) attributes: SmallVec<[(Span, Span); 8]>,
}

impl OpeningNode {
    /// The tag name.
    pub fn name(&self) -> Span {
        self.name
    }

    /// Whether the element was closed in its opening tag (`<foo/>`).
    pub fn is_empty_element(&self) -> bool {
        self.empty
    }

    /// The attributes as `(name, value)` pairs, in document order.
    pub fn attributes(&self) -> &[(Span, Span)] {
        &self.attributes
    }
}

/// An element closing tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosingNode {
    pub(crate) name: Span,
}

impl ClosingNode {
    /// The tag name.
    pub fn name(&self) -> Span {
        self.name
    }
}

/// A run of character data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    pub(crate) text: Span,
}

impl TextNode {
    /// The expanded text.
    pub fn text(&self) -> Span {
        self.text
    }
}

/// Spans of the node currently being tokenised. The reader shifts these
/// in lockstep with any buffer compaction so that partially built nodes
/// survive refills; `temp_attr_name` holds an attribute name while its
/// value is still being read.
#[derive(Debug, Default)]
pub(crate) struct NodeScratch {
    pub(crate) name: Span,
    pub(crate) text: Span,
    pub(crate) attributes: SmallVec<[(Span, Span); 8]>,
    pub(crate) temp_attr_name: Span,
}

impl NodeScratch {
    pub(crate) fn reset(&mut self) {
        self.name = Span::default();
        self.text = Span::default();
        self.attributes.clear();
        self.temp_attr_name = Span::default();
    }

    pub(crate) fn shift_left(&mut self, distance: usize) {
        self.name.shift_left(distance);
        self.text.shift_left(distance);
        for (name, value) in &mut self.attributes {
            name.shift_left(distance);
            value.shift_left(distance);
        }
        self.temp_attr_name.shift_left(distance);
    }
}
