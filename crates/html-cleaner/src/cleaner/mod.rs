//! HTML cleaning: tokenizer adapter, policy table and streaming filter.

pub mod context;
pub mod event;
pub mod filter;
pub mod main;
pub mod policy;
pub(crate) mod tokenizer;
pub(crate) mod utility;

pub use main::{Cleaner, clean_html, clean_html_default};
