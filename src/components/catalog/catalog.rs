//! Catalog page: filter bar, product grid and infinite scroll.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::FetchStatus;

use super::filters::Filters;
use super::hooks::{CatalogHandle, use_debounced, use_load_more_sentinel};
use super::product_card::ProductCard;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::utils::HttpCatalog;

stylance::import_crate_style!(css, "src/components/catalog/catalog.module.css");

#[component]
pub fn Catalog() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (page_size, debounce_ms, root_margin, source) = ctx.config.with_value(|c| {
        (
            c.page_size,
            c.search_debounce_ms,
            c.sentinel_root_margin.clone(),
            HttpCatalog::new(c),
        )
    });

    let catalog = CatalogHandle::new(source, page_size);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let debounced = use_debounced::<String>(search.into(), debounce_ms);

    // Category changes reset pagination; search only narrows what is loaded
    Effect::new(move || {
        let category = category.get();
        let search = debounced.get();
        catalog.set_filter(&category, &search);
    });

    let products = catalog.visible_products();
    let last_id = Signal::derive(move || products.with(|p| p.last().map(|p| p.id)));
    use_load_more_sentinel(catalog, last_id, &root_margin);

    let clear_filters = move |()| {
        search.set(String::new());
        debounced.reset(String::new());
        category.set(String::new());
    };

    let status = Signal::derive(move || catalog.status());
    let is_empty = Signal::derive(move || products.with(Vec::is_empty));

    view! {
        <section class=css::catalog>
            <Filters search=search category=category on_clear=clear_filters />

            <Show when=move || status.get() == FetchStatus::Error>
                <div class=css::errorBanner role="alert">
                    <Icon icon=ic::ALERT />
                    <span>
                        {move || {
                            catalog
                                .error()
                                .map(|e| e.to_string())
                                .unwrap_or_else(|| "Failed to load products".to_string())
                        }}
                    </span>
                    <button class=css::retry on:click=move |_| catalog.retry()>
                        <Icon icon=ic::RETRY />
                        "Retry"
                    </button>
                </div>
            </Show>

            <Show
                when=move || status.get() == FetchStatus::Loading
                fallback=move || {
                    view! {
                        <Show
                            when=move || !is_empty.get()
                            fallback=move || {
                                view! {
                                    <Show when=move || status.get() == FetchStatus::Idle>
                                        <div class=css::empty>
                                            <Icon icon=ic::BAG />
                                            <p>"No products found"</p>
                                        </div>
                                    </Show>
                                }
                            }
                        >
                            <div class=css::grid>
                                <For
                                    each=move || products.get()
                                    key=|product| product.id
                                    children=move |product| view! { <ProductCard product=product /> }
                                />
                            </div>
                        </Show>
                    }
                }
            >
                <div class=css::spinner aria-label="Loading products"></div>
            </Show>

            <Show when=move || status.get() == FetchStatus::LoadingMore>
                <div class=css::loadingMore>"Loading more…"</div>
            </Show>

            // No card to observe when the search hides every loaded product
            <Show when=move || {
                status.get() == FetchStatus::Idle && catalog.has_more() && is_empty.get()
            }>
                <button class=css::loadMore on:click=move |_| catalog.load_more()>
                    "Load more"
                </button>
            </Show>

            <Show when=move || {
                status.get() == FetchStatus::Idle && !catalog.has_more() && !is_empty.get()
            }>
                <p class=css::end>"You've reached the end"</p>
            </Show>
        </section>
    }
}
