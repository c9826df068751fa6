//! Source list handling and retrieval of source payloads.
//!
//! This module turns configured URLs into validated [`Source`](crate::models::Source)s and
//! fetches their text content. The main entry points are [`read_sources_file`],
//! [`HttpFetcher`] and [`fetch_in_order`].

mod batch;
mod http_fetcher;
mod source_list;

// Re-export public API
pub use batch::fetch_in_order;
pub use http_fetcher::{HttpFetcher, SourceFetcher};
pub use source_list::{dedup_sources, parse_source_list, read_sources_file};
