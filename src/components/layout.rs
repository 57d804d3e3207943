//! Page chrome: header with cart badge and theme toggle, and footer.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{ABOUT_TEXT, APP_NAME, CONTACT_EMAIL, CONTACT_PHONE};
use crate::models::{AppRoute, Theme};

stylance::import_crate_style!(css, "src/components/layout.module.css");

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class=css::layout>
            <Header />
            <main class=css::main>{children()}</main>
            <Footer />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let item_count = Signal::derive(move || ctx.cart.total_items());
    let theme_icon = Signal::derive(move || match ctx.theme.get() {
        Theme::Light => ic::MOON,
        Theme::Dark => ic::SUN,
    });
    let theme_label = Signal::derive(move || match ctx.theme.get() {
        Theme::Light => "Switch to dark theme",
        Theme::Dark => "Switch to light theme",
    });

    view! {
        <header class=css::header>
            <a class=css::logo href=AppRoute::Catalog.to_hash()>
                <Icon icon=ic::BAG />
                <span>{APP_NAME}</span>
            </a>

            <nav class=css::actions>
                <button
                    class=css::iconButton
                    on:click=move |_| ctx.toggle_theme()
                    aria-label=move || theme_label.get()
                    title=move || theme_label.get()
                >
                    {move || view! { <Icon icon=theme_icon.get() /> }}
                </button>

                <a class=css::cartLink href=AppRoute::Cart.to_hash() aria-label="Cart">
                    <Icon icon=ic::CART />
                    <Show when=move || { item_count.get() > 0 }>
                        <span class=css::badge>{move || item_count.get()}</span>
                    </Show>
                </a>
            </nav>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class=css::footer>
            <div class=css::footerGrid>
                <section>
                    <h4>"About Us"</h4>
                    <p>{ABOUT_TEXT}</p>
                </section>
                <section>
                    <h4>"Quick Links"</h4>
                    <ul>
                        <li><a href=AppRoute::Catalog.to_hash()>"Home"</a></li>
                        <li><a href=AppRoute::Cart.to_hash()>"Cart"</a></li>
                    </ul>
                </section>
                <section>
                    <h4>"Contact"</h4>
                    <p>{format!("Email: {}", CONTACT_EMAIL)}</p>
                    <p>{format!("Phone: {}", CONTACT_PHONE)}</p>
                </section>
            </div>
            <p class=css::copyright>{format!("© {} {}. All rights reserved.", year, APP_NAME)}</p>
        </footer>
    }
}
