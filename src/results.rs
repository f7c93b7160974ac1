use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata extracted from a single page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Text of the page `<title>`
    pub title: String,

    /// Content of `<meta name="description">`
    pub description: String,

    /// Absolute URLs of every `<a href>` in document order
    pub links: Vec<String>,

    /// Absolute URL of the last icon link
    pub favicon: String,

    /// Absolute URLs from `<img src>` and image meta tags in document order
    pub images: Vec<String>,

    /// First image found on the page
    pub preview_image: String,

    /// Absolute URL of the page video
    pub video: String,
}

/// A field of [`PageInfo`] that the extractor can record a value into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Link,
    Image,
    Favicon,
    PreviewImage,
    Video,
}

/// How a recorded value combines with what a field already holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Push onto the sequence
    Append,
    /// Keep the first value, ignore the rest
    SetOnce,
    /// Replace whatever was there
    Overwrite,
}

impl Field {
    /// Every field, in serialization order
    pub const ALL: [Field; 7] = [
        Field::Title,
        Field::Description,
        Field::Link,
        Field::Favicon,
        Field::Image,
        Field::PreviewImage,
        Field::Video,
    ];

    /// The accumulation policy of this field
    pub fn policy(self) -> Policy {
        PageInfo::new().slot(self).policy()
    }
}

/// A field of a [`PageInfo`] tagged with its policy
enum Slot<'a> {
    Append(&'a mut Vec<String>),
    SetOnce(&'a mut String),
    Overwrite(&'a mut String),
}

impl Slot<'_> {
    fn policy(&self) -> Policy {
        match self {
            Slot::Append(_) => Policy::Append,
            Slot::SetOnce(_) => Policy::SetOnce,
            Slot::Overwrite(_) => Policy::Overwrite,
        }
    }
}

impl PageInfo {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a value into `field` according to the field's policy
    pub fn record(&mut self, field: Field, value: String) {
        match self.slot(field) {
            Slot::Append(values) => values.push(value),
            Slot::SetOnce(current) => {
                if current.is_empty() {
                    *current = value;
                }
            }
            Slot::Overwrite(current) => *current = value,
        }
    }

    fn slot(&mut self, field: Field) -> Slot<'_> {
        match field {
            Field::Title => Slot::Overwrite(&mut self.title),
            Field::Description => Slot::Overwrite(&mut self.description),
            Field::Favicon => Slot::Overwrite(&mut self.favicon),
            Field::Video => Slot::Overwrite(&mut self.video),
            Field::PreviewImage => Slot::SetOnce(&mut self.preview_image),
            Field::Link => Slot::Append(&mut self.links),
            Field::Image => Slot::Append(&mut self.images),
        }
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Favicon: {}", self.favicon)?;
        writeln!(f, "Preview image: {}", self.preview_image)?;
        writeln!(f, "Video: {}", self.video)?;
        writeln!(f, "Links: [{}]", self.links.join(" "))?;
        write!(f, "Images: [{}]", self.images.join(" "))
    }
}
