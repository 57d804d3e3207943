//! Catalog pagination and search.
//!
//! - [`CatalogEngine`] - Page cursor, merge and stale-response handling
//! - [`SearchQuery`], [`filter_products`] - Client-side text search

mod engine;
mod filter;

pub use engine::{CatalogEngine, Completion, FetchStatus, FilterKey, NextPage, Page, PageRequest};
pub use filter::{SearchQuery, filter_products};
