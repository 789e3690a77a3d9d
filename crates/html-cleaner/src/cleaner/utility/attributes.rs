//! Attribute predicates.

use crate::cleaner::event::Attribute;
use crate::options::{AttributeRules, HiddenRules};

/// Should this attribute be dropped from a kept tag?
pub(crate) fn should_drop_attribute(name: &str, rules: &AttributeRules) -> bool {
    rules.drop_names.iter().any(|drop| drop == name)
        || rules
            .drop_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
}

/// Attributes that survive [`should_drop_attribute`], in encounter order.
pub(crate) fn clean_attributes<'a>(attrs: &[Attribute<'a>], rules: &AttributeRules) -> Vec<Attribute<'a>> {
    attrs
        .iter()
        .filter(|attr| !should_drop_attribute(attr.name, rules))
        .copied()
        .collect()
}

/// Does the raw attribute list mark the element as not rendered?
pub(crate) fn has_hidden_attribute(attrs: &[Attribute<'_>], rules: &HiddenRules) -> bool {
    attrs.iter().any(|attr| {
        rules.presence.iter().any(|name| name == attr.name)
            || rules
                .value_matches
                .iter()
                .any(|m| m.name == attr.name && attr.value_or_empty().trim().eq_ignore_ascii_case(&m.value))
    })
}

/// `<link rel="stylesheet">`. Every `link` is metadata under the default policy, so
/// this only matters when callers take `link` out of the metadata table.
pub(crate) fn is_stylesheet_link(name: &str, attrs: &[Attribute<'_>]) -> bool {
    name == "link"
        && attrs.iter().any(|attr| {
            attr.name == "rel"
                && attr
                    .value_or_empty()
                    .split_ascii_whitespace()
                    .any(|token| token.eq_ignore_ascii_case("stylesheet"))
        })
}
