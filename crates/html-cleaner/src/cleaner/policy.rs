//! Tag policy table.
//!
//! Maps every lowercase tag name to exactly one [`TagPolicy`]. Tags missing from
//! the table pass through.

use std::collections::HashMap;

use crate::error::{CleanError, Result};
use crate::options::{AttributeMatch, AttributeRules, CleaningOptions, HiddenRules};

/// Independent "currently skipping" trackers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipCategory {
    /// `style`, `script`, `noscript`.
    RawContent,
    /// Content-bearing form controls.
    Form,
    /// `nav`, `header`, `footer`.
    Navigation,
    /// Content-bearing media.
    Media,
}

impl SkipCategory {
    /// Number of categories.
    pub const COUNT: usize = 4;

    /// All categories in slot order.
    pub const ALL: [Self; Self::COUNT] = [Self::RawContent, Self::Form, Self::Navigation, Self::Media];

    /// Slot index of this category.
    pub const fn index(self) -> usize {
        match self {
            Self::RawContent => 0,
            Self::Form => 1,
            Self::Navigation => 2,
            Self::Media => 3,
        }
    }

    /// Short name used in log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RawContent => "raw-content",
            Self::Form => "form",
            Self::Navigation => "navigation",
            Self::Media => "media",
        }
    }
}

/// What happens to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagPolicy {
    /// Emit with cleaned attributes.
    Pass,
    /// Drop the tag and everything up to its matching end tag.
    RemoveWithContent(SkipCategory),
    /// Drop the tag markers, keep the children.
    Unwrap,
    /// Drop the tag itself; it has no content to skip (void media/form tags, metadata).
    RemoveTagOnly,
}

/// Compiled, immutable cleaning policy.
#[derive(Debug, Clone, Default)]
pub struct PolicyTable {
    tags: HashMap<String, TagPolicy>,
    pub(crate) attributes: AttributeRules,
    pub(crate) hidden: HiddenRules,
}

impl PolicyTable {
    /// Compile `options` into a lookup table.
    ///
    /// # Errors
    ///
    /// Returns [`CleanError::InvalidOptions`] when a tag name is empty or listed in
    /// more than one category.
    pub fn compile(options: &CleaningOptions) -> Result<Self> {
        let mut table = Self {
            tags: HashMap::new(),
            attributes: AttributeRules {
                drop_names: lowercase_all(&options.attributes.drop_names),
                drop_prefixes: lowercase_all(&options.attributes.drop_prefixes),
            },
            hidden: HiddenRules {
                presence: lowercase_all(&options.hidden.presence),
                value_matches: options
                    .hidden
                    .value_matches
                    .iter()
                    .map(|m| AttributeMatch::new(m.name.to_ascii_lowercase(), m.value.trim()))
                    .collect(),
            },
        };

        let groups: [(&[String], TagPolicy); 8] = [
            (
                options.remove_with_content.as_slice(),
                TagPolicy::RemoveWithContent(SkipCategory::RawContent),
            ),
            (options.form_tags.as_slice(), TagPolicy::RemoveWithContent(SkipCategory::Form)),
            (options.form_void_tags.as_slice(), TagPolicy::RemoveTagOnly),
            (
                options.navigation_tags.as_slice(),
                TagPolicy::RemoveWithContent(SkipCategory::Navigation),
            ),
            (options.media_tags.as_slice(), TagPolicy::RemoveWithContent(SkipCategory::Media)),
            (options.media_void_tags.as_slice(), TagPolicy::RemoveTagOnly),
            (options.metadata_tags.as_slice(), TagPolicy::RemoveTagOnly),
            (options.unwrap_tags.as_slice(), TagPolicy::Unwrap),
        ];

        for (names, policy) in groups {
            for name in names {
                table.insert(name, policy)?;
            }
        }

        Ok(table)
    }

    fn insert(&mut self, name: &str, policy: TagPolicy) -> Result<()> {
        let name = name.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(CleanError::InvalidOptions("empty tag name".to_string()));
        }
        match self.tags.get(&name) {
            Some(existing) if *existing != policy => Err(CleanError::InvalidOptions(format!(
                "tag `{name}` is listed as both {existing:?} and {policy:?}"
            ))),
            Some(_) => Ok(()),
            None => {
                let _ = self.tags.insert(name, policy);
                Ok(())
            }
        }
    }

    /// Policy for a lowercase tag name.
    pub fn policy(&self, name: &str) -> TagPolicy {
        self.tags.get(name).copied().unwrap_or(TagPolicy::Pass)
    }
}

fn lowercase_all(values: &[String]) -> Vec<String> {
    values.iter().map(|value| value.to_ascii_lowercase()).collect()
}
