//! Report renderers for scan results.
//!
//! - [`terminal`]: the line-oriented stdout contract (match chains, `None found!`,
//!   numbered summary), colored when the terminal allows it.
//! - [`json`]: a single JSON document covering every crawl and the summary.

pub mod json;
pub mod terminal;
