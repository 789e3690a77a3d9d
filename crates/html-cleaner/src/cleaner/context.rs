//! Filter state: skip regions and head/title context.

use super::policy::SkipCategory;

/// One "currently skipping" slot per [`SkipCategory`].
///
/// Each slot remembers the tag that opened it. Same-category nesting is not
/// tracked: opening an already active slot is a no-op, so the first matching
/// end tag closes the region.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SkipRegions {
    slots: [Option<String>; SkipCategory::COUNT],
}

impl SkipRegions {
    /// Activate `category` for `tag`. Returns `false` when the slot was already active.
    pub fn open(&mut self, category: SkipCategory, tag: &str) -> bool {
        let slot = &mut self.slots[category.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(tag.to_string());
        true
    }

    /// Close the region opened by `tag`, if any.
    pub fn close(&mut self, tag: &str) -> Option<SkipCategory> {
        let category = SkipCategory::ALL
            .into_iter()
            .find(|category| self.slots[category.index()].as_deref() == Some(tag))?;
        self.slots[category.index()] = None;
        Some(category)
    }

    /// Is any region active?
    pub fn is_active(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Tag that opened `category`, if active.
    pub fn opened_by(&self, category: SkipCategory) -> Option<&str> {
        self.slots[category.index()].as_deref()
    }

    /// Active regions as `(category, tag)` pairs.
    pub fn active(&self) -> impl Iterator<Item = (SkipCategory, &str)> {
        SkipCategory::ALL
            .into_iter()
            .filter_map(|category| self.opened_by(category).map(|tag| (category, tag)))
    }
}

/// Whether the stream is inside `<head>` and/or `<title>`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SectionContext {
    /// Inside `<head>`.
    pub in_head: bool,
    /// Inside `<title>`.
    pub in_title: bool,
}

impl SectionContext {
    /// Track a start tag.
    pub fn enter(&mut self, tag: &str) {
        match tag {
            "head" => self.in_head = true,
            "title" => self.in_title = true,
            _ => {}
        }
    }

    /// Track an end tag.
    pub fn leave(&mut self, tag: &str) {
        match tag {
            "head" => self.in_head = false,
            "title" => self.in_title = false,
            _ => {}
        }
    }

    /// Text in the head outside the title is not visible.
    pub const fn suppresses_text(self) -> bool {
        self.in_head && !self.in_title
    }
}
