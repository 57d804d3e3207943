//! Search box and category selector above the catalog grid.

use leptos::prelude::*;
use leptos_icons::Icon;
use storefront_core::product::capitalize;

use super::hooks::use_categories;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/catalog/filters.module.css");

/// Filter bar.
///
/// `search` receives raw keystrokes; debouncing happens in the parent.
#[component]
pub fn Filters(
    search: RwSignal<String>,
    category: RwSignal<String>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    let categories = use_categories();
    let has_filters = Signal::derive(move || {
        !search.with(String::is_empty) || !category.with(String::is_empty)
    });

    view! {
        <div class=css::filters>
            <label class=css::search>
                <Icon icon=ic::SEARCH />
                <input
                    type="search"
                    placeholder="Search products"
                    aria-label="Search products"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </label>

            <label class=css::category>
                <Icon icon=ic::FILTER />
                <select
                    aria-label="Category"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value="">"All categories"</option>
                    {move || {
                        categories
                            .get()
                            .unwrap_or_default()
                            .into_iter()
                            .map(|label| {
                                let text = capitalize(&label);
                                view! { <option value=label>{text}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <Show when=move || has_filters.get()>
                <button class=css::clear on:click=move |_| on_clear.run(())>
                    "Clear filters"
                </button>
            </Show>
        </div>
    }
}
