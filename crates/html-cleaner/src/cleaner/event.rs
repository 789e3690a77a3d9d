//! Tokenizer events consumed by the filter.

/// A raw attribute as it appeared on a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    /// Lowercase attribute name.
    pub name: &'a str,
    /// Decoded value, `None` for a valueless attribute.
    pub value: Option<&'a str>,
}

impl<'a> Attribute<'a> {
    /// Attribute with a value.
    pub const fn new(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value: Some(value),
        }
    }

    /// Attribute written without a value (`<div hidden>`).
    pub const fn bare(name: &'a str) -> Self {
        Self { name, value: None }
    }

    /// Value with `None` read as the empty string.
    pub fn value_or_empty(&self) -> &'a str {
        self.value.unwrap_or("")
    }
}

/// One event of the tokenizer stream, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// `<name attrs...>`
    StartTag {
        /// Lowercase tag name.
        name: &'a str,
        /// Attributes in encounter order.
        attrs: Vec<Attribute<'a>>,
    },
    /// `</name>`
    EndTag {
        /// Lowercase tag name.
        name: &'a str,
    },
    /// `<name attrs.../>`
    SelfClosingTag {
        /// Lowercase tag name.
        name: &'a str,
        /// Attributes in encounter order.
        attrs: Vec<Attribute<'a>>,
    },
    /// Decoded character data.
    Text(&'a str),
    /// Comment body without the `<!--`/`-->` markers.
    Comment(&'a str),
    /// Declaration body without `<!`/`>`, e.g. `DOCTYPE html`.
    Declaration(&'a str),
}
