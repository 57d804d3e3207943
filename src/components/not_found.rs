//! 404 page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/not_found.module.css");

/// 404 page naming the unmatched `path`.
#[component]
pub fn NotFound(#[prop(optional, into)] path: String) -> impl IntoView {
    view! {
        <section class=css::notFound>
            <h1 class=css::code>"404"</h1>
            <p>"The page you are looking for does not exist."</p>
            {(!path.is_empty()).then(|| view! { <code class=css::path>{format!("/{}", path)}</code> })}
            <button class=css::home on:click=move |_| AppRoute::Catalog.push()>
                <Icon icon=ic::ARROW_LEFT />
                "Back to shop"
            </button>
        </section>
    }
}
