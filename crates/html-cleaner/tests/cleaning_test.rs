//! End-to-end cleaning behaviour through the public API.

use html_cleaner_rs::{
    AttributeMatch, CleanError, Cleaner, CleaningOptions, Event, Filter, PolicyTable, clean_html, clean_html_default,
    format_output,
};
use pretty_assertions::assert_eq;

fn clean(html: &str) -> String {
    clean_html_default(html)
}

#[test]
fn script_is_removed_with_its_content() {
    assert_eq!(clean("<script>alert(1)</script><p>ok</p>"), "<p>ok</p>");
}

#[test]
fn anchor_is_unwrapped() {
    assert_eq!(clean(r#"<a href="x">click</a>"#), "click");
}

#[test]
fn span_is_unwrapped() {
    assert_eq!(clean(r#"<p>a <span class="hl">b</span> c</p>"#), "<p>a b c</p>");
}

#[test]
fn head_keeps_title_and_drops_other_text() {
    let out = clean(r#"<head><title>T</title><meta charset="utf-8">ignored text</head><body>kept</body>"#);
    assert!(out.contains('T'));
    assert!(out.contains("kept"));
    assert!(!out.contains("ignored text"));
    assert!(!out.contains("<meta"));
    assert_eq!(out, "<head><title>T</title></head><body>kept</body>");
}

#[test]
fn hidden_element_loses_only_its_start_tag() {
    assert_eq!(clean("<div hidden>x</div>"), "x</div>");
    assert_eq!(clean(r#"<section aria-hidden="true"><p>y</p></section>"#), "<p>y</p></section>");
}

#[test]
fn hidden_input_produces_nothing() {
    assert_eq!(clean(r#"<input type="hidden" value="v">"#), "");
    assert_eq!(clean(r#"<p>a<input type="hidden" value="v"/>b</p>"#), "<p>ab</p>");
}

#[test]
fn hidden_type_on_non_form_element() {
    assert_eq!(clean(r#"<div type="hidden">z</div><p>w</p>"#), "z</div><p>w</p>");
}

#[test]
fn media_is_elided() {
    assert_eq!(clean(r#"<img src="a.png"/>"#), "");
    assert_eq!(clean(r#"<img src="a.png">"#), "");
    assert_eq!(
        clean(r#"<p>text<video><source src="b.mp4"></video></p>"#),
        "<p>text</p>"
    );
}

#[test]
fn svg_content_is_removed() {
    assert_eq!(
        clean(r#"<p>a</p><svg viewBox="0 0 1 1"><title>icon</title><path d="M0"/></svg><p>b</p>"#),
        "<p>a</p><p>b</p>"
    );
}

#[test]
fn comments_are_removed_everywhere() {
    assert_eq!(clean("<!-- top --><p>a<!-- inner --></p>"), "<p>a</p>");
    assert_eq!(clean("<nav><!-- in nav --></nav><p>b</p>"), "<p>b</p>");
}

#[test]
fn doctype_passes_through_first() {
    let out = clean("<!DOCTYPE html><html><body><p>x</p></body></html>");
    assert!(out.starts_with("<!DOCTYPE html>"));
    assert_eq!(out, "<!DOCTYPE html><html><body><p>x</p></body></html>");
}

#[test]
fn doctype_is_normalised() {
    assert_eq!(clean("<!doctype html><p>x</p>"), "<!DOCTYPE html><p>x</p>");
    assert_eq!(clean("<!DOCTYPE HTML>"), "<!DOCTYPE html>");
    assert_eq!(
        clean("<!DOCTYPE html PUBLIC 'a' 'b'>"),
        r#"<!DOCTYPE html PUBLIC "a" "b">"#
    );
}

#[test]
fn omitted_head_end_tag_keeps_head_context() {
    // Only an explicit </head> leaves the head; body text stays suppressed.
    assert_eq!(
        clean("<html><head><title>T</title><body><p>visible</p></body></html>"),
        "<html><head><title>T</title><body><p></p></body></html>"
    );
}

#[test]
fn forms_and_navigation_are_removed() {
    let html = concat!(
        "<header><h1>Site</h1></header>",
        "<nav><a href=\"/\">Home</a></nav>",
        "<main><h2>Article</h2>",
        "<form action=\"/s\"><label>Q</label><input name=\"q\"><button>Go</button></form>",
        "<p>Body</p></main>",
        "<footer>(c)</footer>"
    );
    assert_eq!(clean(html), "<main><h2>Article</h2><p>Body</p></main>");
}

#[test]
fn noisy_attributes_are_dropped_and_others_kept_in_order() {
    let html = r#"<td id="c1" title="cell" class="x" colspan="2" onclick="f()" data-k="v" aria-label="l" style="color:red" lang="en">v</td>"#;
    assert_eq!(clean(html), r#"<td title="cell" colspan="2" lang="en">v</td>"#);
}

#[test]
fn attribute_values_are_escaped() {
    assert_eq!(
        clean(r#"<abbr title="&quot;a&quot; &amp; b">x</abbr>"#),
        r#"<abbr title="&quot;a&quot; &amp; b">x</abbr>"#
    );
}

#[test]
fn cleaning_own_output_drops_no_further_attributes() {
    let html = concat!(
        "<!DOCTYPE html><html lang=\"en\"><head><title>T</title><link rel=\"stylesheet\" href=\"s.css\"></head>",
        "<body><div class=\"c\" title=\"t\"><p id=\"p\" dir=\"ltr\">Hi <a href=\"#\">there</a></p>",
        "<table summary=\"s\"><tr><td colspan=\"2\" data-x=\"1\">1</td></tr></table></div></body></html>"
    );
    let once = clean(html);
    let twice = clean(&once);
    assert_eq!(once, twice);
}

#[test]
fn metadata_end_tags_and_stray_closers_are_absorbed() {
    assert_eq!(clean("</script></form></nav></video></a><p>x</p>"), "<p>x</p>");
}

#[test]
fn nested_same_tag_closes_early() {
    // The inner </form> closes the only form slot.
    assert_eq!(
        clean("<form><div><form>inner</form>leaked</div></form><p>after</p>"),
        "leaked</div><p>after</p>"
    );
}

#[test]
fn text_is_not_re_escaped() {
    assert_eq!(clean("<p>a &amp; b &lt;c&gt;</p>"), "<p>a & b <c></p>");
}

#[test]
fn custom_options_extend_the_tables() {
    let options = CleaningOptions::default()
        .with_removed_tag("aside")
        .with_unwrapped_tag("em");
    let out = clean_html("<aside>ad</aside><p><em>hi</em></p>", &options).unwrap();
    assert_eq!(out, "<p>hi</p>");
}

#[test]
fn custom_hidden_rules() {
    let mut options = CleaningOptions::default();
    options.hidden.value_matches.push(AttributeMatch::new("role", "presentation"));
    let out = clean_html(r#"<table role="presentation"><tr><td>x</td></tr></table>"#, &options).unwrap();
    assert_eq!(out, "<tr><td>x</td></tr></table>");
}

#[test]
fn links_survive_when_no_longer_metadata() {
    let mut options = CleaningOptions::default();
    options.metadata_tags.retain(|tag| tag != "link");
    options.attributes.drop_names.retain(|name| name != "href");
    let out = clean_html(
        r#"<link rel="stylesheet" href="a.css"><link rel="canonical" href="/x">"#,
        &options,
    )
    .unwrap();
    assert_eq!(out, r#"<link rel="canonical" href="/x">"#);
}

#[test]
fn conflicting_options_are_rejected() {
    let mut options = CleaningOptions::default();
    options.media_tags.push("a".to_string());
    let err = clean_html("<p>x</p>", &options).unwrap_err();
    assert!(matches!(err, CleanError::InvalidOptions(_)));
}

#[test]
fn formatting_pipeline() {
    let html = "<div>\n  <p>Hello   <b>world</b></p>\n  <p></p>\n  <script>x()</script>\n</div>";
    let cleaner = Cleaner::new(&CleaningOptions::default().with_formatting(true)).unwrap();
    assert_eq!(cleaner.clean(html), "<div>\n<p>\nHello \n<b>\nworld\n</b></p>\n</div>\n");
}

#[test]
fn formatter_is_usable_on_its_own() {
    let formatted = format_output("<p></p><p>a</p>", &Default::default());
    assert_eq!(formatted, "<p>\na\n</p>\n");
}

#[test]
fn filter_can_be_driven_by_other_tokenizers() {
    let policy = PolicyTable::compile(&CleaningOptions::default()).unwrap();
    let mut filter = Filter::new(&policy);
    for event in [
        Event::Declaration("DOCTYPE html"),
        Event::StartTag { name: "p", attrs: Vec::new() },
        Event::Text("hi"),
        Event::Comment("gone"),
        Event::EndTag { name: "p" },
    ] {
        filter.handle(event);
    }
    assert_eq!(filter.output().as_str(), "<!DOCTYPE html><p>hi</p>");
    assert!(!filter.regions().is_active());
    assert_eq!(filter.finish(), "<!DOCTYPE html><p>hi</p>");
}
