//! Data models for the application shell.
//!
//! - [`AppRoute`] - Hash-based navigation
//! - [`Theme`] - Light/dark color theme

mod route;
mod theme;

pub use route::AppRoute;
pub use theme::Theme;
