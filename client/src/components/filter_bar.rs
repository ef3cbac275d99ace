//! Search box plus category select driving a [`ListFilter`].

use leptos::prelude::*;

use crate::state::filter::ListFilter;

/// A `(value, label)` pair for the category select. An empty value means all.
pub type CategoryOption = (&'static str, &'static str);

#[component]
pub fn FilterBar(
    filter: RwSignal<ListFilter>,
    #[prop(default = &[])] categories: &'static [CategoryOption],
    #[prop(default = "Search...")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="search"
                placeholder=placeholder
                prop:value=move || filter.get().query
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    filter.update(|f| f.query = value);
                }
            />
            <Show when=move || !categories.is_empty()>
                <select
                    class="filter-bar__category"
                    prop:value=move || filter.get().category
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filter.update(|f| f.category = value);
                    }
                >
                    {categories
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </Show>
            <Show when=move || !filter.with(ListFilter::is_empty)>
                <button class="btn btn--link filter-bar__clear" on:click=move |_| filter.set(ListFilter::default())>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
