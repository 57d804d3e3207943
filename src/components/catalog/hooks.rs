//! Hooks binding the core catalog state machines to Leptos.
//!
//! - [`use_debounced`] - Debounced copy of a signal, driven by `setTimeout`
//! - [`CatalogHandle`] - Reactive wrapper around [`CatalogEngine`]
//! - [`use_load_more_sentinel`] - `IntersectionObserver` on the last card
//! - [`use_categories`] - Category list with session caching

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use storefront_core::catalog::{FetchStatus, NextPage};
use storefront_core::{
    CatalogEngine, CatalogError, CatalogSource, CategoryCache, Debouncer, ObserverCommand,
    Product, ProductId, Sentinel,
};
use tracing::{debug, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::app::AppContext;
use crate::config::CATEGORIES_CACHE_KEY;
use crate::utils::cache::{self, Store};
use crate::utils::{HttpCatalog, VisibilityObserver, dom};

/// Attribute carrying a product id on each rendered card.
pub const PRODUCT_ID_ATTR: &str = "data-product-id";

// ============================================================================
// Debounce
// ============================================================================

/// Debounced view of a signal.
pub struct Debounced<T: Send + Sync + 'static> {
    settled: RwSignal<T>,
    state: StoredValue<Debouncer<T>>,
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl<T: Send + Sync + 'static> Clone for Debounced<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for Debounced<T> {}

impl<T: Clone + PartialEq + Send + Sync + 'static> Debounced<T> {
    pub fn get(&self) -> T {
        self.settled.get()
    }

    /// Settle on `value` immediately, dropping anything pending.
    pub fn reset(&self, value: T) {
        self.timer.set_value(None);
        self.state.update_value(|d| d.reset(value.clone()));
        self.settled.set(value);
    }
}

/// Follow `input`, propagating only after it has been stable for `delay_ms`.
///
/// The pending timer is cancelled when the owner is torn down.
pub fn use_debounced<T>(input: Signal<T>, delay_ms: u32) -> Debounced<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let initial = input.get_untracked();
    let state = StoredValue::new(Debouncer::new(initial.clone(), u64::from(delay_ms)));
    let settled = RwSignal::new(initial);
    let timer = StoredValue::new_local(None::<Timeout>);

    Effect::new(move || {
        let value = input.get();
        let now = dom::now_ms();
        let Some(deadline) = state.try_update_value(|d| d.push(value, now)) else {
            return;
        };
        let wait = u32::try_from(deadline.saturating_sub(now)).unwrap_or(u32::MAX);

        // Replacing the stored timeout drops, and thereby cancels, the previous one
        timer.set_value(Some(Timeout::new(wait, move || {
            let now = dom::now_ms().max(deadline);
            if let Some(Some(value)) = state.try_update_value(|d| d.poll(now).cloned()) {
                settled.try_set(value);
            }
        })));
    });

    on_cleanup(move || {
        timer.try_update_value(|t| t.take());
        state.try_update_value(Debouncer::cancel);
    });

    Debounced {
        settled,
        state,
        timer,
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Reactive handle over the paginated fetch engine.
///
/// Network completions are applied through the engine's generation check,
/// so a response for a category the user has already left is dropped.
#[derive(Clone, Copy)]
pub struct CatalogHandle {
    engine: RwSignal<CatalogEngine>,
    source: StoredValue<HttpCatalog>,
}

impl CatalogHandle {
    pub fn new(source: HttpCatalog, page_size: usize) -> Self {
        Self {
            engine: RwSignal::new(CatalogEngine::new(page_size)),
            source: StoredValue::new(source),
        }
    }

    pub fn set_filter(&self, category: &str, search: &str) {
        let next = self.engine.try_update(|e| e.set_filter(category, search));
        self.dispatch(next);
    }

    pub fn load_more(&self) {
        let next = self.engine.try_update(CatalogEngine::fetch_next_page);
        self.dispatch(next);
    }

    pub fn retry(&self) {
        let next = self.engine.try_update(CatalogEngine::retry);
        self.dispatch(next);
    }

    fn dispatch(&self, next: Option<NextPage>) {
        let Some(NextPage::Fetch(request)) = next else {
            return;
        };
        let engine = self.engine;
        let source = self.source.get_value();
        debug!(cursor = request.cursor, category = ?request.key.category(), "fetching catalog");

        spawn_local(async move {
            let result = source.products(&request.key).await;
            engine.try_update(|e| e.complete(&request, result));
        });
    }

    pub fn status(&self) -> FetchStatus {
        self.engine.with(CatalogEngine::status)
    }

    pub fn is_loading(&self) -> bool {
        self.engine.with(CatalogEngine::is_loading)
    }

    pub fn has_more(&self) -> bool {
        self.engine.with(CatalogEngine::has_more)
    }

    /// Next page to load; advances even when a page is served from cache.
    pub fn cursor(&self) -> usize {
        self.engine.with(CatalogEngine::cursor)
    }

    pub fn error(&self) -> Option<CatalogError> {
        self.engine.with(|e| e.last_error().cloned())
    }

    /// Loaded products narrowed by the engine's search text.
    pub fn visible_products(&self) -> Memo<Vec<Product>> {
        let engine = self.engine;
        Memo::new(move |_| {
            engine.with(|e| e.visible_products().into_iter().cloned().collect())
        })
    }
}

// ============================================================================
// Sentinel
// ============================================================================

fn product_id_of(element: &Element) -> Option<ProductId> {
    element.get_attribute(PRODUCT_ID_ATTR)?.parse().ok()
}

fn card_element(id: ProductId) -> Option<Element> {
    dom::query_selector(&format!("[{}=\"{}\"]", PRODUCT_ID_ATTR, id))
}

/// Observe the card whose id is `last_id` and load the next page when it
/// scrolls into view.
///
/// Observation is dropped while a page is loading and once the list is
/// exhausted; it follows the last card as new pages render.
pub fn use_load_more_sentinel(
    catalog: CatalogHandle,
    last_id: Signal<Option<ProductId>>,
    root_margin: &str,
) {
    let sentinel = StoredValue::new(Sentinel::<ProductId>::new());
    let observer = StoredValue::new_local(None::<VisibilityObserver>);
    let observed = StoredValue::new_local(None::<Element>);

    match VisibilityObserver::new(root_margin, move |element, visible| {
        let Some(id) = product_id_of(&element) else {
            return;
        };
        let fire = sentinel
            .try_update_value(|s| s.on_visibility(&id, visible))
            .unwrap_or(false);
        if fire {
            debug!(%id, "sentinel visible, loading next page");
            catalog.load_more();
        }
    }) {
        Ok(obs) => observer.set_value(Some(obs)),
        Err(err) => warn!(?err, "IntersectionObserver unavailable, infinite scroll disabled"),
    }

    Effect::new(move || {
        let last = last_id.get();
        let cursor = catalog.cursor();
        let loading = catalog.is_loading();
        let has_more = catalog.has_more();
        let commands = sentinel
            .try_update_value(|s| s.sync(last, cursor, loading, has_more))
            .unwrap_or_default();

        observer.with_value(|obs| {
            let Some(obs) = obs else {
                return;
            };
            for command in commands {
                match command {
                    ObserverCommand::Unobserve(_) => {
                        if let Some(el) = observed.try_update_value(Option::take).flatten() {
                            obs.unobserve(&el);
                        }
                    }
                    ObserverCommand::Observe(id) => {
                        if let Some(el) = card_element(id) {
                            obs.observe(&el);
                            observed.set_value(Some(el));
                        }
                    }
                }
            }
        });
    });

    on_cleanup(move || {
        sentinel.try_update_value(|s| s.disarm());
        observed.try_update_value(Option::take);
        // Dropping the observer disconnects it
        observer.try_update_value(Option::take);
    });
}

// ============================================================================
// Categories
// ============================================================================

/// Category labels, fetched once and then served from memory or
/// sessionStorage until the configured TTL expires.
pub fn use_categories() -> LocalResource<Vec<String>> {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (ttl, source) = ctx
        .config
        .with_value(|c| (c.category_ttl_ms, HttpCatalog::new(c)));

    LocalResource::new(move || {
        let source = source.clone();
        async move {
            let now = dom::now_ms();
            let in_memory = ctx.categories.get_untracked();
            let cached = in_memory
                .or_else(|| cache::get::<CategoryCache>(Store::Session, CATEGORIES_CACHE_KEY))
                .filter(|c| c.is_fresh(now, ttl));
            if let Some(cached) = cached {
                ctx.categories.set(Some(cached.clone()));
                return cached.labels;
            }

            match source.categories().await {
                Ok(labels) => {
                    let entry = CategoryCache::new(labels, now);
                    if let Err(err) = cache::set(Store::Session, CATEGORIES_CACHE_KEY, &entry) {
                        warn!(error = %err, "failed to cache categories");
                    }
                    ctx.categories.set(Some(entry.clone()));
                    entry.labels
                }
                Err(err) => {
                    warn!(error = %err, "failed to load categories");
                    Vec::new()
                }
            }
        }
    })
}
