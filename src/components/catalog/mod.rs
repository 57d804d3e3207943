//! Product catalog UI.
//!
//! Components:
//! - [`Catalog`] - Filterable product grid with infinite scroll
//! - `ProductCard` - Single product tile
//!
//! Hooks live in [`hooks`] and wrap the portable state machines from
//! `storefront-core`.

#[allow(clippy::module_inception)]
mod catalog;
mod filters;
pub mod hooks;
mod product_card;

pub use catalog::Catalog;
