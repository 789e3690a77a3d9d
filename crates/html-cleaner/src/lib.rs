//! Streaming HTML cleaner.
//!
//! Reduces an HTML document to its semantic structure and visible text, ready to
//! be handed to text or data extraction:
//!
//! - `script`, `style` and `noscript` are removed with their content
//! - forms, navigation chrome (`nav`, `header`, `footer`) and media are removed with their content
//! - `meta`, `base` and `link` are dropped
//! - links and spans are unwrapped, keeping their text
//! - `style`, `href`, `class`, `id`, `on*`, `data-*` and `aria-*` attributes are dropped
//! - comments are dropped; the doctype is kept
//!
//! The document is processed in a single forward pass over the `html5ever`
//! tokenizer's event stream; no DOM is built. Malformed markup is never an error.
//!
//! ```
//! use html_cleaner_rs::{CleaningOptions, clean_html};
//!
//! let html = r#"<script>alert(1)</script><p class="lead">Read <a href="/more">more</a></p>"#;
//! let cleaned = clean_html(html, &CleaningOptions::default()).unwrap();
//! assert_eq!(cleaned, "<p>Read more</p>");
//! ```

pub mod cleaner;
pub mod error;
pub mod file;
pub mod formatting;
pub mod options;

pub use cleaner::event::{Attribute, Event};
pub use cleaner::filter::{Filter, OutputBuffer};
pub use cleaner::policy::{PolicyTable, SkipCategory, TagPolicy};
pub use cleaner::{Cleaner, clean_html, clean_html_default};
pub use error::{CleanError, Result};
pub use file::clean_file;
pub use formatting::format_output;
pub use options::{AttributeMatch, AttributeRules, CleaningOptions, FormattingOptions, HiddenRules};
