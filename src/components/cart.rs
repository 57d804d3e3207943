//! Cart page with line items and order summary.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::CartLine;
use storefront_core::product::format_price;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/cart.module.css");

#[component]
pub fn CartPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let cart = ctx.cart.cart;

    let lines = Memo::new(move |_| cart.with(|c| c.items().to_vec()));
    let is_empty = Signal::derive(move || lines.with(Vec::is_empty));

    view! {
        <section class=css::cart>
            <h1 class=css::heading>"Shopping Cart"</h1>
            <Show
                when=move || !is_empty.get()
                fallback=|| {
                    view! {
                        <div class=css::empty>
                            <Icon icon=ic::CART />
                            <p>"Your cart is empty"</p>
                            <a class=css::continueLink href=AppRoute::Catalog.to_hash()>
                                "Continue shopping"
                            </a>
                        </div>
                    }
                }
            >
                <div class=css::content>
                    <ul class=css::lines>
                        <For
                            each=move || lines.get()
                            key=|line| line.product.id
                            children=move |line| view! { <CartLineRow line=line /> }
                        />
                    </ul>
                    <OrderSummary />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let id = line.product.id;
    let max = ctx.cart.cart.with_untracked(|c| c.max_quantity());

    // Rows are keyed by id, so quantity is read live rather than from `line`
    let quantity = Signal::derive(move || {
        ctx.cart
            .cart
            .with(|c| c.get(id).map(|l| l.quantity).unwrap_or(0))
    });
    let line_total = Signal::derive(move || {
        ctx.cart
            .cart
            .with(|c| c.get(id).map(|l| format_price(l.line_total())).unwrap_or_default())
    });

    let product = line.product;
    let href = AppRoute::Product(id).to_hash();

    view! {
        <li class=css::line>
            <a class=css::thumb href=href.clone()>
                <img src=product.image.clone() alt=product.title.clone() />
            </a>
            <div class=css::lineInfo>
                <a class=css::lineTitle href=href>{product.title.clone()}</a>
                <span class=css::unitPrice>{product.formatted_price()}</span>
            </div>
            <div class=css::stepper>
                <button
                    aria-label="Decrease quantity"
                    disabled=move || quantity.get() <= 1
                    on:click=move |_| ctx.cart.decrement(id)
                >
                    <Icon icon=ic::MINUS />
                </button>
                <span class=css::quantity>{move || quantity.get()}</span>
                <button
                    aria-label="Increase quantity"
                    disabled=move || quantity.get() >= max
                    on:click=move |_| ctx.cart.increment(id)
                >
                    <Icon icon=ic::PLUS />
                </button>
            </div>
            <span class=css::lineTotal>{move || line_total.get()}</span>
            <button
                class=css::remove
                aria-label="Remove item"
                on:click=move |_| ctx.cart.remove(id)
            >
                <Icon icon=ic::TRASH />
            </button>
        </li>
    }
}

#[component]
fn OrderSummary() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let cart = ctx.cart.cart;
    let rate = ctx.config.with_value(|c| c.tax_rate);
    let rate_label = format!("Tax ({}%)", (rate * rust_decimal::Decimal::ONE_HUNDRED).normalize());

    let subtotal = Signal::derive(move || cart.with(|c| format_price(c.subtotal())));
    let tax = Signal::derive(move || cart.with(|c| format_price(c.tax(rate))));
    let total = Signal::derive(move || cart.with(|c| format_price(c.total(rate))));
    let items = Signal::derive(move || ctx.cart.total_items());

    view! {
        <aside class=css::summary>
            <h2>"Order Summary"</h2>
            <dl>
                <div class=css::row>
                    <dt>{move || format!("Subtotal ({} items)", items.get())}</dt>
                    <dd>{move || subtotal.get()}</dd>
                </div>
                <div class=css::row>
                    <dt>"Shipping"</dt>
                    <dd>"Free"</dd>
                </div>
                <div class=css::row>
                    <dt>{rate_label}</dt>
                    <dd>{move || tax.get()}</dd>
                </div>
                <div class=css::totalRow>
                    <dt>"Total"</dt>
                    <dd>{move || total.get()}</dd>
                </div>
            </dl>
            <button class=css::clear on:click=move |_| ctx.cart.clear()>
                <Icon icon=ic::TRASH />
                "Clear cart"
            </button>
        </aside>
    }
}
