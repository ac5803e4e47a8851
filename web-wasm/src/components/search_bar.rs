//! 検索ボックス
//!
//! 入力のたびに検索を発行する（デバウンスなし）。

use leptos::prelude::*;
use recipe_browser_common::config::SEARCH_PLACEHOLDER;

#[component]
pub fn SearchBar<F>(
    query: Memo<String>,
    on_search: F,
) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send,
{
    view! {
        <input
            type="text"
            class="search-input"
            placeholder=SEARCH_PLACEHOLDER
            aria-label=SEARCH_PLACEHOLDER
            prop:value=move || query.get()
            on:input=move |ev| {
                on_search(event_target_value(&ev));
            }
        />
    }
}
