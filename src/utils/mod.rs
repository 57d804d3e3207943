//! Browser utilities.
//!
//! Provides:
//! - [`HttpCatalog`] - Fetch API catalog source with timeout
//! - [`cache`] - sessionStorage/localStorage persistence
//! - [`VisibilityObserver`] - `IntersectionObserver` wrapper
//! - [`logging`] - `tracing` to browser console bridge

pub mod cache;
pub mod dom;
mod fetch;
pub mod logging;
mod observer;

pub use fetch::HttpCatalog;
pub use observer::VisibilityObserver;
