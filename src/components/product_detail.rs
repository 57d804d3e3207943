//! Product detail page.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::{CatalogError, CatalogSource, Product, ProductId};
use tracing::{info, warn};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::not_found::NotFound;
use crate::models::AppRoute;
use crate::utils::HttpCatalog;

stylance::import_crate_style!(css, "src/components/product_detail.module.css");

#[component]
pub fn ProductDetail(id: ProductId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let source = ctx.config.with_value(HttpCatalog::new);

    // Bumped by the retry button to refetch
    let attempt = RwSignal::new(0u32);
    let product = LocalResource::new(move || {
        attempt.track();
        let source = source.clone();
        async move {
            let result = source.product(id).await;
            match &result {
                Err(CatalogError::NotFound(_)) => info!(%id, "product not found"),
                Err(err) => warn!(%id, error = %err, "failed to load product"),
                Ok(_) => {}
            }
            result
        }
    });

    view! {
        <section class=css::detail>
            <a class=css::back href=AppRoute::Catalog.to_hash()>
                <Icon icon=ic::ARROW_LEFT />
                "Back to products"
            </a>
            {move || match product.get() {
                None => view! { <div class=css::spinner aria-label="Loading product"></div> }.into_any(),
                Some(Ok(product)) => view! { <ProductView product=product /> }.into_any(),
                Some(Err(CatalogError::NotFound(_))) => {
                    view! { <NotFound path=format!("product/{}", id) /> }.into_any()
                }
                Some(Err(err)) => {
                    let retryable = err.is_retryable();
                    view! {
                        <div class=css::error role="alert">
                            <Icon icon=ic::ALERT />
                            <span>{err.to_string()}</span>
                            <Show when=move || retryable>
                                <button on:click=move |_| attempt.update(|n| *n += 1)>
                                    <Icon icon=ic::RETRY />
                                    "Retry"
                                </button>
                            </Show>
                        </div>
                    }
                    .into_any()
                }
            }}
        </section>
    }
}

#[component]
fn ProductView(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = product.id;
    let max = ctx.cart.cart.with_untracked(|c| c.max_quantity());
    let in_cart = Signal::derive(move || {
        ctx.cart
            .cart
            .with(|c| c.get(id).map(|line| line.quantity).unwrap_or(0))
    });

    let rating = product
        .rating
        .map(|r| format!("{:.1} / 5 ({} reviews)", r.rate, r.count));
    let price = product.formatted_price();
    let category = product.category_label();
    let title = product.title.clone();
    let description = product.description.clone();
    let image = product.image.clone();

    view! {
        <article class=css::product>
            <div class=css::imageWrap>
                <img class=css::image src=image alt=title.clone() />
            </div>
            <div class=css::info>
                <span class=css::category>{category}</span>
                <h1 class=css::title>{title}</h1>
                {rating.map(|r| view! {
                    <span class=css::rating>
                        <Icon icon=ic::STAR />
                        {r}
                    </span>
                })}
                <p class=css::price>{price}</p>
                <p class=css::description>{description}</p>
                <div class=css::actions>
                    <button
                        class=css::addButton
                        disabled=move || in_cart.get() >= max
                        on:click=move |_| ctx.cart.add(product.clone())
                    >
                        <Icon icon=ic::CART />
                        "Add to cart"
                    </button>
                    <Show when=move || { in_cart.get() > 0 }>
                        <a class=css::viewCart href=AppRoute::Cart.to_hash()>
                            {move || format!("In cart: {}", in_cart.get())}
                        </a>
                    </Show>
                </div>
            </div>
        </article>
    }
}
