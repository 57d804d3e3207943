//! Portable core of the storefront.
//!
//! Everything here is free of browser APIs so it runs under plain
//! `cargo test`. The web shell binds these state machines to signals,
//! timers, the Fetch API and `IntersectionObserver`.
//!
//! - [`catalog`] - Paginated fetch engine and client-side search
//! - [`debounce`] - Clock-driven debounce
//! - [`sentinel`] - Load-more visibility sentinel
//! - [`cart`] - Shopping cart store
//! - [`api`] - Remote catalog endpoints and the [`CatalogSource`] seam
//! - [`config`] - [`StorefrontConfig`] and fixed keys

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod debounce;
pub mod error;
pub mod product;
pub mod sentinel;

pub use api::{CatalogSource, CategoryCache, Endpoint};
pub use cart::{Cart, CartLine};
pub use catalog::{CatalogEngine, FetchStatus, FilterKey, NextPage};
pub use config::StorefrontConfig;
pub use debounce::Debouncer;
pub use error::{CartError, CatalogError, ConfigError};
pub use product::{Product, ProductId, Rating};
pub use sentinel::{ObserverCommand, Sentinel};
