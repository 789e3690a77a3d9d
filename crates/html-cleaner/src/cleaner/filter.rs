//! The tokenizing filter.
//!
//! Consumes [`Event`]s in document order and appends the kept markup to an
//! [`OutputBuffer`]. All state lives in one [`Filter`] created per document.

use log::{debug, warn};

use super::context::{SectionContext, SkipRegions};
use super::event::{Attribute, Event};
use super::policy::{PolicyTable, TagPolicy};
use super::utility::attributes::{clean_attributes, has_hidden_attribute, is_stylesheet_link};
use super::utility::serialization::{
    serialize_declaration, serialize_end_tag, serialize_self_closing_tag, serialize_start_tag,
};

/// Append-only serialized output.
#[derive(Debug, Default, Clone)]
pub struct OutputBuffer {
    html: String,
}

impl OutputBuffer {
    /// Buffer with room for roughly `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            html: String::with_capacity(capacity),
        }
    }

    /// Serialized output so far.
    pub fn as_str(&self) -> &str {
        &self.html
    }

    /// Consume the buffer.
    pub fn into_string(self) -> String {
        self.html
    }
}

/// Streaming filter state for one document.
#[derive(Debug)]
pub struct Filter<'p> {
    policy: &'p PolicyTable,
    regions: SkipRegions,
    section: SectionContext,
    output: OutputBuffer,
}

impl<'p> Filter<'p> {
    /// Fresh filter for a new document.
    pub fn new(policy: &'p PolicyTable) -> Self {
        Self::with_capacity(policy, 0)
    }

    /// Fresh filter whose output buffer is pre-sized.
    pub fn with_capacity(policy: &'p PolicyTable, capacity: usize) -> Self {
        Self {
            policy,
            regions: SkipRegions::default(),
            section: SectionContext::default(),
            output: OutputBuffer::with_capacity(capacity),
        }
    }

    /// Feed one event.
    pub fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::StartTag { name, attrs } => self.start_tag(name, &attrs),
            Event::EndTag { name } => self.end_tag(name),
            Event::SelfClosingTag { name, attrs } => self.self_closing_tag(name, &attrs),
            Event::Text(data) => self.text(data),
            Event::Comment(_) => {}
            Event::Declaration(data) => serialize_declaration(&mut self.output.html, data),
        }
    }

    /// Active skip regions.
    pub const fn regions(&self) -> &SkipRegions {
        &self.regions
    }

    /// Output produced so far.
    pub const fn output(&self) -> &OutputBuffer {
        &self.output
    }

    /// End of input: report unclosed regions and hand back the output.
    pub fn finish(self) -> String {
        for (category, tag) in self.regions.active() {
            warn!("input ended inside <{tag}>; {} region never closed", category.as_str());
        }
        self.output.into_string()
    }

    fn start_tag(&mut self, name: &str, attrs: &[Attribute<'_>]) {
        self.section.enter(name);

        match self.policy.policy(name) {
            TagPolicy::RemoveWithContent(category) => {
                if self.regions.open(category, name) {
                    debug!("skipping <{name}> ({} region)", category.as_str());
                }
                return;
            }
            TagPolicy::RemoveTagOnly | TagPolicy::Unwrap => return,
            TagPolicy::Pass => {}
        }

        if self.regions.is_active()
            || is_stylesheet_link(name, attrs)
            || has_hidden_attribute(attrs, &self.policy.hidden)
        {
            return;
        }

        let kept = clean_attributes(attrs, &self.policy.attributes);
        serialize_start_tag(&mut self.output.html, name, &kept);
    }

    fn end_tag(&mut self, name: &str) {
        self.section.leave(name);

        if let Some(category) = self.regions.close(name) {
            debug!("closed {} region at </{name}>", category.as_str());
            return;
        }

        // Also covers end tags whose start was swallowed by an already active slot.
        if self.policy.policy(name) != TagPolicy::Pass || self.regions.is_active() {
            return;
        }

        serialize_end_tag(&mut self.output.html, name);
    }

    fn self_closing_tag(&mut self, name: &str, attrs: &[Attribute<'_>]) {
        if self.policy.policy(name) != TagPolicy::Pass
            || self.regions.is_active()
            || is_stylesheet_link(name, attrs)
            || has_hidden_attribute(attrs, &self.policy.hidden)
        {
            return;
        }

        let kept = clean_attributes(attrs, &self.policy.attributes);
        serialize_self_closing_tag(&mut self.output.html, name, &kept);
    }

    fn text(&mut self, data: &str) {
        if self.regions.is_active() || self.section.suppresses_text() {
            return;
        }
        self.output.html.push_str(data);
    }
}
