//! Parsing and ranking of HTTP `Accept` headers.
//!
//! ```
//! use rustyaccept::AcceptHeaderList;
//!
//! let list = AcceptHeaderList::parse("text/html;q=0.8,application/json;q=0.9,*/*;q=0.1")
//!     .unwrap()
//!     .sorted_by_preference();
//!
//! assert_eq!(list[0].essence(), "application/json");
//! assert_eq!(list[2].essence(), "*/*");
//! ```
//!
//! This crate does not read headers from a request nor choose a
//! representation; it only turns the raw header value into an ordered list.

pub mod config;
pub mod http;

pub use config::{MalformedPolicy, NegotiationConfig};
pub use http::accept::AcceptHeaderList;
pub use http::error::ParseError;
pub use http::media_type::MediaTypeEntry;
pub use http::params::MediaParams;
pub use http::preference::{compare, compare_wildcard};
