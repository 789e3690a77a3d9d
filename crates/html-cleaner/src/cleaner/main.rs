//! Main cleaning pipeline.
//!
//! Tokenizer -> filter -> serialized output -> optional post-formatter. One
//! [`Filter`] is created per document, so a [`Cleaner`] can be shared freely
//! between threads.

use log::debug;

use crate::cleaner::filter::Filter;
use crate::cleaner::policy::PolicyTable;
use crate::cleaner::tokenizer::run_filter;
use crate::error::Result;
use crate::formatting::format_output;
use crate::options::{CleaningOptions, FormattingOptions};

/// A compiled cleaning policy, reusable across documents.
#[derive(Debug, Clone)]
pub struct Cleaner {
    policy: PolicyTable,
    formatting: FormattingOptions,
}

impl Cleaner {
    /// Compile `options`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CleanError::InvalidOptions`] when the tag tables conflict.
    pub fn new(options: &CleaningOptions) -> Result<Self> {
        Ok(Self {
            policy: PolicyTable::compile(options)?,
            formatting: options.formatting.clone(),
        })
    }

    /// The compiled tag policy.
    pub const fn policy(&self) -> &PolicyTable {
        &self.policy
    }

    /// Clean one document.
    pub fn clean(&self, html: &str) -> String {
        let filter = Filter::with_capacity(&self.policy, html.len() / 2);
        let cleaned = run_filter(html, filter);
        debug!("cleaned document: {} bytes in, {} bytes out", html.len(), cleaned.len());

        if self.formatting.enabled {
            format_output(&cleaned, &self.formatting)
        } else {
            cleaned
        }
    }
}

impl Default for Cleaner {
    // The default tables are disjoint, so compilation cannot fail.
    fn default() -> Self {
        Self {
            policy: PolicyTable::compile(&CleaningOptions::default()).unwrap_or_default(),
            formatting: FormattingOptions::default(),
        }
    }
}

/// Cleans HTML using the provided options.
///
/// This is the main entry point for one-off cleaning. Use [`Cleaner`] to reuse a
/// compiled policy for many documents.
///
/// # Errors
///
/// Returns [`crate::CleanError::InvalidOptions`] when the tag tables conflict.
/// Malformed markup is never an error.
pub fn clean_html(html: &str, options: &CleaningOptions) -> Result<String> {
    Ok(Cleaner::new(options)?.clean(html))
}

/// Cleans HTML with the default options and no post-formatting.
pub fn clean_html_default(html: &str) -> String {
    Cleaner::default().clean(html)
}
