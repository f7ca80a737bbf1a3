//! Rule-based content scorers
//!
//! Each scorer is a pure function over immutable inputs producing one
//! [`Signal`](crate::types::Signal). They share no state and are
//! composed here in a fixed order; that order is part of the report
//! contract.

pub mod accessibility;
pub mod headings;
pub mod meta_tags;
pub mod readability;
pub mod semantic;

use crate::types::{PageMetadata, Signal};

/// Run every content scorer against the page, in contract order:
/// heading structure, readability, meta tags, semantic HTML,
/// accessibility.
pub fn run_content_checks(html: &str, text: &str, metadata: &PageMetadata) -> Vec<Signal> {
    vec![
        headings::check(html),
        readability::check(text),
        meta_tags::check(html, metadata),
        semantic::check(html),
        accessibility::check(html),
    ]
}
