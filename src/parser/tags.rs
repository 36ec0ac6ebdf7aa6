//! Tag vocabulary of the file format.

use phf::{Map, phf_map};

/// Element kinds the parser recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagType {
    /// `<xournal>` root (Xournal and Xournal++)
    Xournal,
    /// `<MrWriter>` root
    MrWriter,
    /// `<title>` metadata, ignored
    Title,
    /// `<preview>` thumbnail, ignored
    Preview,
    /// `<page>`
    Page,
    /// `<audio>` document-level attachment
    Audio,
    /// `<background>`
    Background,
    /// `<layer>`
    Layer,
    /// `<timestamp>` legacy audio reference
    Timestamp,
    /// `<stroke>`
    Stroke,
    /// `<text>`
    Text,
    /// `<image>`
    Image,
    /// `<teximage>`
    TexImage,
    /// `<attachment>` inside image / teximage
    Attachment,
    /// Anything else
    Unknown,
}

static TAG_TYPES: Map<&'static str, TagType> = phf_map! {
    "MrWriter" => TagType::MrWriter,
    "attachment" => TagType::Attachment,
    "audio" => TagType::Audio,
    "background" => TagType::Background,
    "image" => TagType::Image,
    "layer" => TagType::Layer,
    "page" => TagType::Page,
    "preview" => TagType::Preview,
    "stroke" => TagType::Stroke,
    "teximage" => TagType::TexImage,
    "text" => TagType::Text,
    "timestamp" => TagType::Timestamp,
    "title" => TagType::Title,
    "xournal" => TagType::Xournal,
};

impl TagType {
    /// Map a tag name to its kind; anything unrecognised is `Unknown`.
    pub fn from_name(name: &str) -> Self {
        TAG_TYPES.get(name).copied().unwrap_or(TagType::Unknown)
    }

    /// Canonical name, used in structural error messages.
    pub fn name(self) -> &'static str {
        match self {
            TagType::Xournal => "xournal",
            TagType::MrWriter => "MrWriter",
            TagType::Title => "title",
            TagType::Preview => "preview",
            TagType::Page => "page",
            TagType::Audio => "audio",
            TagType::Background => "background",
            TagType::Layer => "layer",
            TagType::Timestamp => "timestamp",
            TagType::Stroke => "stroke",
            TagType::Text => "text",
            TagType::Image => "image",
            TagType::TexImage => "teximage",
            TagType::Attachment => "attachment",
            TagType::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_round_trip() {
        for tag in [
            TagType::Xournal,
            TagType::MrWriter,
            TagType::Page,
            TagType::Background,
            TagType::Layer,
            TagType::Stroke,
            TagType::TexImage,
            TagType::Attachment,
        ] {
            assert_eq!(TagType::from_name(tag.name()), tag);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(TagType::from_name("Xournal"), TagType::Unknown);
        assert_eq!(TagType::from_name("mrwriter"), TagType::Unknown);
        assert_eq!(TagType::from_name(""), TagType::Unknown);
    }
}
