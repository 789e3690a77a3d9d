//! Tag serialization.

use std::borrow::Cow;

use crate::cleaner::event::Attribute;

/// Escape an attribute value for use inside double quotes.
pub(crate) fn escape_attribute_value(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"']) {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    Cow::Owned(escaped)
}

fn push_attributes(output: &mut String, attrs: &[Attribute<'_>]) {
    for attr in attrs {
        output.push(' ');
        output.push_str(attr.name);
        output.push_str("=\"");
        output.push_str(&escape_attribute_value(attr.value_or_empty()));
        output.push('"');
    }
}

/// Append `<name attr="value" ...>`.
pub(crate) fn serialize_start_tag(output: &mut String, name: &str, attrs: &[Attribute<'_>]) {
    output.push('<');
    output.push_str(name);
    push_attributes(output, attrs);
    output.push('>');
}

/// Append `<name attr="value" .../>`.
pub(crate) fn serialize_self_closing_tag(output: &mut String, name: &str, attrs: &[Attribute<'_>]) {
    output.push('<');
    output.push_str(name);
    push_attributes(output, attrs);
    output.push_str("/>");
}

/// Append `</name>`.
pub(crate) fn serialize_end_tag(output: &mut String, name: &str) {
    output.push_str("</");
    output.push_str(name);
    output.push('>');
}

/// Append `<!data>`.
pub(crate) fn serialize_declaration(output: &mut String, data: &str) {
    output.push_str("<!");
    output.push_str(data);
    output.push('>');
}
