//! Configuration options for HTML cleaning.
//!
//! Every tag table and attribute rule the filter consults lives here, so callers
//! can extend or narrow the default policy without touching the filter.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Attribute names and name prefixes that are dropped from every kept tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AttributeRules {
    /// Exact attribute names to drop.
    pub drop_names: Vec<String>,
    /// Attribute name prefixes to drop (event handlers, `data-*`, `aria-*`).
    pub drop_prefixes: Vec<String>,
}

impl Default for AttributeRules {
    fn default() -> Self {
        Self {
            drop_names: tags(&["style", "href", "class", "id"]),
            drop_prefixes: tags(&["on", "data-", "aria-"]),
        }
    }
}

/// An attribute that must carry a specific value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeMatch {
    /// Attribute name.
    pub name: String,
    /// Expected value, compared ASCII case-insensitively after trimming.
    pub value: String,
}

impl AttributeMatch {
    /// Create a new name/value match.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Attributes that mark an element as not rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HiddenRules {
    /// Attributes whose mere presence hides the element.
    pub presence: Vec<String>,
    /// Attribute/value pairs that hide the element.
    pub value_matches: Vec<AttributeMatch>,
}

impl Default for HiddenRules {
    fn default() -> Self {
        Self {
            presence: tags(&["hidden"]),
            value_matches: vec![
                AttributeMatch::new("aria-hidden", "true"),
                AttributeMatch::new("type", "hidden"),
            ],
        }
    }
}

/// Options for the cosmetic post-formatting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FormattingOptions {
    /// Apply the post-formatter after serialization.
    pub enabled: bool,
    /// Tags that are deleted when they have no content at all.
    pub removable_empty_tags: Vec<String>,
    /// Upper bound on empty-tag removal passes.
    pub max_empty_tag_passes: usize,
}

/// Default cap on empty-tag removal passes.
pub const DEFAULT_MAX_EMPTY_TAG_PASSES: usize = 50;

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            removable_empty_tags: tags(&[
                "p",
                "div",
                "section",
                "article",
                "aside",
                "main",
                "ul",
                "ol",
                "li",
                "dl",
                "dt",
                "dd",
                "table",
                "thead",
                "tbody",
                "tfoot",
                "tr",
                "td",
                "th",
                "h1",
                "h2",
                "h3",
                "h4",
                "h5",
                "h6",
                "strong",
                "em",
                "b",
                "i",
                "u",
                "small",
                "blockquote",
                "pre",
                "code",
                "figure",
                "figcaption",
            ]),
            max_empty_tag_passes: DEFAULT_MAX_EMPTY_TAG_PASSES,
        }
    }
}

/// Main cleaning options.
///
/// The defaults strip scripts, styles, forms, navigation chrome, media and
/// metadata, unwrap links and spans, and drop presentational attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CleaningOptions {
    /// Tags removed together with everything inside them.
    pub remove_with_content: Vec<String>,
    /// Form tags whose content is removed.
    pub form_tags: Vec<String>,
    /// Form tags without content (never closed), dropped on their own.
    pub form_void_tags: Vec<String>,
    /// Navigation chrome whose content is removed.
    pub navigation_tags: Vec<String>,
    /// Media tags whose content is removed.
    pub media_tags: Vec<String>,
    /// Media tags without content, dropped on their own.
    pub media_void_tags: Vec<String>,
    /// Document metadata tags, dropped on their own.
    pub metadata_tags: Vec<String>,
    /// Tags whose markers are dropped while their content is kept.
    pub unwrap_tags: Vec<String>,
    /// Attribute drop rules.
    pub attributes: AttributeRules,
    /// Hidden-element detection rules.
    pub hidden: HiddenRules,
    /// Post-formatting.
    pub formatting: FormattingOptions,
}

impl Default for CleaningOptions {
    fn default() -> Self {
        Self {
            remove_with_content: tags(&["style", "script", "noscript"]),
            form_tags: tags(&[
                "form", "button", "select", "option", "optgroup", "textarea", "fieldset", "legend", "label",
                "datalist", "output",
            ]),
            form_void_tags: tags(&["input", "keygen"]),
            navigation_tags: tags(&["nav", "header", "footer"]),
            media_tags: tags(&["video", "audio", "iframe", "object", "svg", "canvas"]),
            media_void_tags: tags(&["img", "source", "track", "embed"]),
            metadata_tags: tags(&["meta", "base", "link"]),
            unwrap_tags: tags(&["a", "span"]),
            attributes: AttributeRules::default(),
            hidden: HiddenRules::default(),
            formatting: FormattingOptions::default(),
        }
    }
}

impl CleaningOptions {
    /// Remove `tag` together with its content.
    ///
    /// The tag is taken out of every other table first so it keeps a single policy.
    #[must_use]
    pub fn with_removed_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        self.forget_tag(&tag);
        self.remove_with_content.push(tag);
        self
    }

    /// Unwrap `tag`: drop its markers, keep its content.
    #[must_use]
    pub fn with_unwrapped_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        self.forget_tag(&tag);
        self.unwrap_tags.push(tag);
        self
    }

    /// Enable or disable the post-formatter.
    #[must_use]
    pub fn with_formatting(mut self, enabled: bool) -> Self {
        self.formatting.enabled = enabled;
        self
    }

    fn forget_tag(&mut self, tag: &str) {
        for table in [
            &mut self.remove_with_content,
            &mut self.form_tags,
            &mut self.form_void_tags,
            &mut self.navigation_tags,
            &mut self.media_tags,
            &mut self.media_void_tags,
            &mut self.metadata_tags,
            &mut self.unwrap_tags,
        ] {
            table.retain(|existing| !existing.eq_ignore_ascii_case(tag));
        }
    }
}
