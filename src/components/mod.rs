//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`Layout`] - Header, theme toggle and footer around every page
//! - [`catalog`] - Product grid with filters and infinite scroll
//! - [`product_detail`] - Single product page
//! - [`cart`] - Cart page with order summary
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod cart;
pub mod catalog;
pub mod icons;
mod layout;
pub mod not_found;
pub mod product_detail;
pub mod router;

pub use layout::Layout;
pub use router::AppRouter;
