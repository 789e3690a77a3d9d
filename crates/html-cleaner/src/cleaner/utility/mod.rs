//! Helpers shared by the filter.

pub(crate) mod attributes;
pub(crate) mod serialization;
