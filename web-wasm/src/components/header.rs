//! ヘッダーコンポーネント

use leptos::prelude::*;
use recipe_browser_common::config::APP_TITLE;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>{APP_TITLE}</h1>
        </header>
    }
}
