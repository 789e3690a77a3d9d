//! `html5ever` tokenizer adapter.
//!
//! Translates html5ever tokens into [`Event`]s and feeds them to a [`Filter`] as
//! they are produced. There is no tree builder, so the sink switches the
//! tokenizer into raw-text states itself where the HTML tree builder would.

use std::cell::RefCell;

use html5ever::TokenizerResult;
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Doctype, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use log::trace;

use super::event::{Attribute, Event};
use super::filter::Filter;

/// Tokenizer state a start tag switches into, if it is not plain data.
fn content_model(tag_name: &str) -> TokenSinkResult<()> {
    match tag_name {
        "script" => TokenSinkResult::RawData(RawKind::ScriptData),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" | "noscript" => {
            TokenSinkResult::RawData(RawKind::Rawtext)
        }
        "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
        "plaintext" => TokenSinkResult::Plaintext,
        _ => TokenSinkResult::Continue,
    }
}

/// Rebuild the declaration body (`DOCTYPE html ...`) from a parsed doctype.
fn doctype_declaration(doctype: &Doctype) -> String {
    let mut decl = String::from("DOCTYPE");
    if let Some(name) = &doctype.name {
        decl.push(' ');
        decl.push_str(name);
    }
    match (&doctype.public_id, &doctype.system_id) {
        (Some(public_id), system_id) => {
            decl.push_str(" PUBLIC \"");
            decl.push_str(public_id);
            decl.push('"');
            if let Some(system_id) = system_id {
                decl.push_str(" \"");
                decl.push_str(system_id);
                decl.push('"');
            }
        }
        (None, Some(system_id)) => {
            decl.push_str(" SYSTEM \"");
            decl.push_str(system_id);
            decl.push('"');
        }
        (None, None) => {}
    }
    decl
}

fn tag_attributes(tag: &Tag) -> Vec<Attribute<'_>> {
    tag.attrs
        .iter()
        .map(|attr| Attribute::new(&attr.name.local, &attr.value))
        .collect()
}

struct FilterSink<'p> {
    filter: RefCell<Option<Filter<'p>>>,
}

impl FilterSink<'_> {
    fn dispatch(&self, event: Event<'_>) {
        if let Some(filter) = self.filter.borrow_mut().as_mut() {
            filter.handle(event);
        }
    }

    fn process_tag(&self, tag: &Tag) -> TokenSinkResult<()> {
        let name: &str = &tag.name;
        let attrs = || tag_attributes(tag);

        match tag.kind {
            TagKind::StartTag if tag.self_closing => {
                self.dispatch(Event::SelfClosingTag { name, attrs: attrs() });
                TokenSinkResult::Continue
            }
            TagKind::StartTag => {
                self.dispatch(Event::StartTag { name, attrs: attrs() });
                content_model(name)
            }
            TagKind::EndTag => {
                self.dispatch(Event::EndTag { name });
                TokenSinkResult::Continue
            }
        }
    }
}

impl TokenSink for FilterSink<'_> {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => return self.process_tag(&tag),
            Token::CharacterTokens(text) => self.dispatch(Event::Text(&text)),
            Token::CommentToken(text) => self.dispatch(Event::Comment(&text)),
            Token::DoctypeToken(doctype) => {
                let decl = doctype_declaration(&doctype);
                self.dispatch(Event::Declaration(&decl));
            }
            Token::ParseError(message) => trace!("tolerating malformed markup: {message}"),
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Tokenize `html` and run every event through `filter`, returning its output.
pub(crate) fn run_filter(html: &str, filter: Filter<'_>) -> String {
    let sink = FilterSink {
        filter: RefCell::new(Some(filter)),
    };
    let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    while let TokenizerResult::Script(()) = tokenizer.feed(&input) {}
    tokenizer.end();

    let filter = tokenizer.sink.filter.borrow_mut().take();
    filter.map(Filter::finish).unwrap_or_default()
}
