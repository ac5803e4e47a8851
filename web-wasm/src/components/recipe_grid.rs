//! レシピグリッド

use leptos::prelude::*;
use recipe_browser_common::Recipe;
use web_sys::HtmlElement;

use crate::components::recipe_card::RecipeCard;

#[component]
pub fn RecipeGrid<F>(
    recipes: Memo<Vec<Recipe>>,
    on_open: F,
) -> impl IntoView
where
    F: Fn(Recipe, Option<HtmlElement>) + 'static + Clone + Send,
{
    view! {
        <div class="recipes-grid">
            <For
                each=move || recipes.get()
                key=|recipe| recipe.id.clone()
                let:recipe
            >
                <RecipeCard recipe=recipe on_open=on_open.clone() />
            </For>
        </div>
    }
}
