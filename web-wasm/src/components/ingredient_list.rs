//! 材料リスト

use leptos::prelude::*;

#[component]
pub fn IngredientList(items: Vec<String>) -> impl IntoView {
    view! {
        <h4>"Ingredients:"</h4>
        <ul>
            {items
                .into_iter()
                .map(|item| view! { <li>{item}</li> })
                .collect_view()}
        </ul>
    }
}
