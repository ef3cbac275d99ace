//! Labelled form inputs bound to a `RwSignal<String>`.

use leptos::prelude::*;

use crate::components::filter_bar::CategoryOption;

#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] kind: &'static str,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=kind
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextArea(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <textarea
                class="field__input field__input--multiline"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: &'static [CategoryOption],
    /// Leading empty option text, if the field may be left unset.
    #[prop(optional)]
    blank: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <select
                class="field__input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {blank.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .iter()
                    .map(|(v, text)| view! { <option value=*v>{*text}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Inline form status: error in red, success in green.
#[component]
pub fn FormMessage(message: RwSignal<Option<Result<String, String>>>) -> impl IntoView {
    move || {
        message.get().map(|outcome| match outcome {
            Ok(text) => view! { <p class="form-message form-message--ok">{text}</p> }.into_any(),
            Err(text) => view! { <p class="form-message form-message--error">{text}</p> }.into_any(),
        })
    }
}
