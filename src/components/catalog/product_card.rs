//! Product card shown in the catalog grid.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::Product;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/catalog/product_card.module.css");

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let href = AppRoute::Product(product.id).to_hash();
    let price = product.formatted_price();
    let category = product.category_label();
    let rating = product.rating.map(|r| format!("{:.1} ({})", r.rate, r.count));
    let id_attr = product.id.to_string();
    let title = product.title.clone();
    let image = product.image.clone();

    let handle_add = move |ev: leptos::ev::MouseEvent| {
        // The button sits inside the card link
        ev.prevent_default();
        ev.stop_propagation();
        ctx.cart.add(product.clone());
    };

    view! {
        <article class=css::card data-product-id=id_attr>
            <a class=css::link href=href>
                <div class=css::imageWrap>
                    <img class=css::image src=image alt=title.clone() loading="lazy" />
                </div>
                <div class=css::body>
                    <span class=css::category>{category}</span>
                    <h3 class=css::title>{title}</h3>
                    {rating.map(|r| view! {
                        <span class=css::rating>
                            <Icon icon=ic::STAR />
                            {r}
                        </span>
                    })}
                    <div class=css::footer>
                        <span class=css::price>{price}</span>
                        <button class=css::addButton on:click=handle_add aria-label="Add to cart">
                            <Icon icon=ic::CART />
                            "Add"
                        </button>
                    </div>
                </div>
            </a>
        </article>
    }
}
