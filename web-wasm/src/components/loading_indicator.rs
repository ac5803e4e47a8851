//! 読み込み中表示

use leptos::prelude::*;
use recipe_browser_common::config::LOADING_TEXT;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <p class="loading" role="status">{LOADING_TEXT}</p>
    }
}
