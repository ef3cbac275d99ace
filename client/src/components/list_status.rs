//! Loading / error / empty banner shown above every list.

use leptos::prelude::*;

/// Which banner a list should show, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListBanner {
    Loading,
    Error,
    Empty,
    None,
}

/// Pick the banner. Errors win over loading so a failed refresh is visible.
pub fn banner(loading: bool, has_error: bool, is_empty: bool) -> ListBanner {
    if has_error {
        ListBanner::Error
    } else if loading && is_empty {
        ListBanner::Loading
    } else if is_empty && !loading {
        ListBanner::Empty
    } else {
        ListBanner::None
    }
}

#[component]
pub fn ListStatus(
    loading: Signal<bool>,
    error: Signal<Option<String>>,
    is_empty: Signal<bool>,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    let which = move || banner(loading.get(), error.with(Option::is_some), is_empty.get());

    move || match which() {
        ListBanner::Loading => view! { <p class="list-status list-status--loading">"Loading..."</p> }.into_any(),
        ListBanner::Error => {
            view! { <p class="list-status list-status--error">{error.get().unwrap_or_default()}</p> }.into_any()
        }
        ListBanner::Empty => view! { <p class="list-status list-status--empty">{empty_message.clone()}</p> }.into_any(),
        ListBanner::None => ().into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_wins() {
        assert_eq!(banner(true, true, true), ListBanner::Error);
        assert_eq!(banner(false, true, false), ListBanner::Error);
    }

    #[test]
    fn loading_only_while_nothing_to_show() {
        assert_eq!(banner(true, false, true), ListBanner::Loading);
        assert_eq!(banner(true, false, false), ListBanner::None);
    }

    #[test]
    fn empty_after_load() {
        assert_eq!(banner(false, false, true), ListBanner::Empty);
        assert_eq!(banner(false, false, false), ListBanner::None);
    }
}
