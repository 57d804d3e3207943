//! Application router component.
//!
//! Handles URL-based routing with hash history so the build can be served
//! from any static host without rewrite rules.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the current page is derived from `#/path`
//! - **hashchange events**: links and back/forward buttons work automatically
//! - **Layout never re-renders on navigation**: only the page below it swaps

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::cart::CartPage;
use crate::components::catalog::Catalog;
use crate::components::not_found::NotFound;
use crate::components::product_detail::ProductDetail;
use crate::models::AppRoute;
use crate::utils::dom;

/// Main application router.
///
/// - `#/` → Catalog
/// - `#/cart` → Cart
/// - `#/product/{id}` → Product detail
/// - anything else → 404
#[component]
pub fn AppRouter() -> impl IntoView {
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    // Repeated hashchange events to the same route must not remount the page
    let page = Memo::new(move |_| route.get());

    // Start each page at the top
    Effect::new(move |prev: Option<AppRoute>| {
        let current = page.get();
        if prev.is_some_and(|p| p != current) {
            dom::scroll_to_top();
        }
        current
    });

    move || match page.get() {
        AppRoute::Catalog => view! { <Catalog /> }.into_any(),
        AppRoute::Cart => view! { <CartPage /> }.into_any(),
        AppRoute::Product(id) => view! { <ProductDetail id=id /> }.into_any(),
        AppRoute::NotFound(path) => view! { <NotFound path=path /> }.into_any(),
    }
}
