//! Application root.
//!
//! Owns the [`AppContext`] handed to every view through Leptos context, the
//! cart wrapper that persists itself, and the `App` component.

use leptos::error::Errors;
use leptos::prelude::*;
use leptos_use::use_media_query;
use storefront_core::{Cart, CartLine, CategoryCache, Product, ProductId, StorefrontConfig};
use tracing::{debug, warn};

use crate::components::{AppRouter, Layout};
use crate::config::{CART_STORAGE_KEY, THEME_STORAGE_KEY};
use crate::models::Theme;
use crate::utils::cache::{self, Store};
use crate::utils::dom;

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// CartState
// ============================================================================

/// Cart store wrapped in a signal.
///
/// This struct is `Copy` because its only field is a Leptos signal.
#[derive(Clone, Copy)]
pub struct CartState {
    pub cart: RwSignal<Cart>,
}

impl CartState {
    /// Restore the cart from localStorage, falling back to an empty cart.
    pub fn restore(max_quantity: u32) -> Self {
        let lines = cache::get::<Vec<CartLine>>(Store::Local, CART_STORAGE_KEY).unwrap_or_default();
        debug!(lines = lines.len(), "restored cart");
        Self {
            cart: RwSignal::new(Cart::with_lines(lines, max_quantity)),
        }
    }

    pub fn add(&self, product: Product) {
        self.cart.update(|c| c.add(product));
    }

    pub fn remove(&self, id: ProductId) {
        self.cart.update(|c| {
            c.remove(id);
        });
    }

    pub fn increment(&self, id: ProductId) {
        self.cart.update(|c| {
            if let Err(err) = c.increment(id) {
                warn!(error = %err, "increment failed");
            }
        });
    }

    pub fn decrement(&self, id: ProductId) {
        self.cart.update(|c| {
            if let Err(err) = c.decrement(id) {
                warn!(error = %err, "decrement failed");
            }
        });
    }

    pub fn clear(&self) {
        self.cart.update(Cart::clear);
    }

    /// Total units across all lines (header badge).
    pub fn total_items(&self) -> u32 {
        self.cart.with(Cart::total_items)
    }

    fn persist(&self) {
        let lines = self.cart.with(|c| c.items().to_vec());
        if let Err(err) = cache::set(Store::Local, CART_STORAGE_KEY, &lines) {
            warn!(error = %err, "failed to persist cart");
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. Replaces any ambient global store: every
/// view receives the same explicitly constructed state.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub config: StoredValue<StorefrontConfig>,
    pub cart: CartState,
    pub theme: RwSignal<Theme>,
    /// Category list, fetched at most once per TTL.
    pub categories: RwSignal<Option<CategoryCache>>,
}

impl AppContext {
    pub fn new(config: StorefrontConfig, theme: Theme) -> Self {
        let cart = CartState::restore(config.max_quantity);
        Self {
            config: StoredValue::new(config),
            cart,
            theme: RwSignal::new(theme),
            categories: RwSignal::new(None),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

/// Keep localStorage and `<html data-theme>` in sync with state.
fn setup_persistence(ctx: AppContext) {
    Effect::new(move || {
        ctx.cart.cart.track();
        ctx.cart.persist();
    });

    Effect::new(move || {
        let theme = ctx.theme.get();
        dom::set_root_attribute("data-theme", theme.as_str());
        if let Err(err) = cache::set_raw(Store::Local, THEME_STORAGE_KEY, theme.as_str()) {
            warn!(error = %err, "failed to persist theme");
        }
    });
}

/// Shown when a view below the root raises an error.
#[component]
fn CrashScreen(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let messages = move || {
        errors
            .get()
            .into_iter()
            .map(|(_, err)| view! { <li>{err.to_string()}</li> })
            .collect_view()
    };
    let reload = |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    };

    view! {
        <div class=css::crash role="alert">
            <h1>"Something went wrong"</h1>
            <p>"The store hit an unexpected error. Reloading usually fixes it."</p>
            <ul class=css::crashErrors>{messages}</ul>
            <button class=css::reload on:click=reload>"Reload"</button>
        </div>
    }
}

/// Root component: resolves the theme, provides [`AppContext`] and renders
/// the layout around the router inside an error boundary.
#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    let prefers_dark = use_media_query("(prefers-color-scheme: dark)");
    let saved_theme = cache::get_raw(Store::Local, THEME_STORAGE_KEY);
    let theme = Theme::resolve(saved_theme.as_deref(), prefers_dark.get_untracked());

    let ctx = AppContext::new(config, theme);
    provide_context(ctx);
    setup_persistence(ctx);

    view! {
        <ErrorBoundary fallback=|errors| view! { <CrashScreen errors=errors /> }>
            <Layout>
                <AppRouter />
            </Layout>
        </ErrorBoundary>
    }
}
