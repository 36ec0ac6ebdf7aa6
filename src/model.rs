//! Typed values carried by document events.
//!
//! These are the payload types the parser hands to a [`DocumentBuilder`]:
//! stroke coordinates, tool and cap-style enumerations, page background
//! descriptions and dash patterns. Each enumeration parses the exact token
//! set the file format writes.
//!
//! [`DocumentBuilder`]: crate::builder::DocumentBuilder

/// A single stroke coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position in document units
    pub x: f64,
    /// Vertical position in document units
    pub y: f64,
}

/// Ruling of a solid page background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageTypeFormat {
    /// Blank page
    #[default]
    Plain,
    /// Horizontal lines
    Lined,
    /// Horizontal lines with a margin
    Ruled,
    /// Square grid
    Graph,
    /// Dot grid
    Dotted,
    /// Isometric dot grid
    IsoDotted,
    /// Isometric triangle grid
    IsoGraph,
    /// Music staves
    Staves,
}

impl PageTypeFormat {
    /// Map a background `style` attribute to a format.
    ///
    /// Unknown styles fall back to a plain page, matching what older
    /// loaders did for files written by newer versions.
    pub fn from_name(name: &str) -> Self {
        match name {
            "plain" => Self::Plain,
            "lined" => Self::Lined,
            "ruled" => Self::Ruled,
            "graph" => Self::Graph,
            "dotted" => Self::Dotted,
            "isodotted" => Self::IsoDotted,
            "isograph" => Self::IsoGraph,
            "staves" => Self::Staves,
            _ => Self::Plain,
        }
    }
}

/// Solid background description: ruling plus free-form configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageType {
    /// Page ruling
    pub format: PageTypeFormat,
    /// Extra configuration string, verbatim from the file
    pub config: String,
}

/// Drawing tool that produced a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeTool {
    /// Regular pen
    Pen,
    /// Eraser stroke (white-out)
    Eraser,
    /// Translucent highlighter
    Highlighter,
}

impl StrokeTool {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "pen" => Some(Self::Pen),
            "eraser" => Some(Self::Eraser),
            "highlighter" => Some(Self::Highlighter),
            _ => None,
        }
    }
}

/// Stroke end-cap shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCapStyle {
    /// Flat cap ending at the endpoint
    Butt,
    /// Semicircular cap
    Round,
    /// Square cap extending past the endpoint
    Square,
}

impl StrokeCapStyle {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "butt" => Some(Self::Butt),
            "round" => Some(Self::Round),
            "square" => Some(Self::Square),
            _ => None,
        }
    }
}

/// Dash pattern of a stroke.
///
/// `dashes` is `None` for a solid line, or the on/off lengths of the
/// repeating pattern.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineStyle {
    /// Alternating dash/gap lengths, or `None` for a solid line
    pub dashes: Option<Vec<f64>>,
}

impl LineStyle {
    /// Parse a stroke `style` attribute.
    ///
    /// Accepts the predefined names `plain`, `dash`, `dashdot` and `dot`,
    /// or `cust:` followed by a whitespace-separated dash length list.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "plain" => Some(Self { dashes: None }),
            "dash" => Some(Self {
                dashes: Some(vec![6.0, 3.0]),
            }),
            "dashdot" => Some(Self {
                dashes: Some(vec![6.0, 3.0, 0.5, 3.0]),
            }),
            "dot" => Some(Self {
                dashes: Some(vec![0.5, 3.0]),
            }),
            _ => {
                let list = name.strip_prefix("cust:")?;
                let mut dashes = Vec::new();
                let mut rest = list;
                while !rest.trim_start().is_empty() {
                    let (value, remaining) = crate::parser::helpers::next_double(rest)?;
                    dashes.push(value);
                    rest = remaining;
                }
                if dashes.is_empty() {
                    return None;
                }
                Some(Self {
                    dashes: Some(dashes),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_type_formats() {
        assert_eq!(PageTypeFormat::from_name("plain"), PageTypeFormat::Plain);
        assert_eq!(PageTypeFormat::from_name("graph"), PageTypeFormat::Graph);
        assert_eq!(PageTypeFormat::from_name("isodotted"), PageTypeFormat::IsoDotted);
        // Unknown styles degrade to plain
        assert_eq!(PageTypeFormat::from_name("hexagonal"), PageTypeFormat::Plain);
    }

    #[test]
    fn stroke_tools() {
        assert_eq!(StrokeTool::from_name("pen"), Some(StrokeTool::Pen));
        assert_eq!(StrokeTool::from_name("highlighter"), Some(StrokeTool::Highlighter));
        assert_eq!(StrokeTool::from_name("crayon"), None);
    }

    #[test]
    fn cap_styles() {
        assert_eq!(StrokeCapStyle::from_name("butt"), Some(StrokeCapStyle::Butt));
        assert_eq!(StrokeCapStyle::from_name("round"), Some(StrokeCapStyle::Round));
        assert_eq!(StrokeCapStyle::from_name(""), None);
    }

    #[test]
    fn line_styles() {
        assert_eq!(LineStyle::from_name("plain"), Some(LineStyle { dashes: None }));
        assert_eq!(
            LineStyle::from_name("dash"),
            Some(LineStyle {
                dashes: Some(vec![6.0, 3.0])
            })
        );
        assert_eq!(
            LineStyle::from_name("cust: 2 1 4 1"),
            Some(LineStyle {
                dashes: Some(vec![2.0, 1.0, 4.0, 1.0])
            })
        );
        assert_eq!(LineStyle::from_name("cust:"), None);
        assert_eq!(LineStyle::from_name("cust: 2 x"), None);
        assert_eq!(LineStyle::from_name("wavy"), None);
    }
}
