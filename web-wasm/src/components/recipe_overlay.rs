//! レシピ詳細オーバーレイ（モーダルダイアログ）
//!
//! スタイルシートは同梱しないので、backdrop はグリッドを覆わず、開いている間も
//! 別のカードをクリックできる。その場合は選択だけが切り替わり（`Transition::Switched`）、
//! 最初のカードへのフォーカス復帰とスクロールロックはそのまま維持される。

use leptos::prelude::*;
use recipe_browser_common::{extract_ingredients, Recipe};

use crate::components::ingredient_list::IngredientList;

#[component]
pub fn RecipeOverlay<F>(
    recipe: Recipe,
    on_close: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    let ingredients = extract_ingredients(&recipe);
    let Recipe {
        name,
        category,
        thumbnail,
        instructions,
        ..
    } = recipe;

    view! {
        <div class="overlay" role="dialog" aria-modal="true" aria-labelledby="overlay-title">
            <div
                class="overlay-backdrop"
                on:click={
                    let on_close = on_close.clone();
                    move |_| on_close(())
                }
            />
            <div class="overlay-content">
                <button
                    class="overlay-close"
                    aria-label="Close"
                    on:click=move |_| on_close(())
                >
                    "×"
                </button>
                <h2 class="overlay-title" id="overlay-title">{name.clone()}</h2>
                {thumbnail.map(|src| view! { <img class="overlay-image" src=src alt=name.clone() /> })}
                <p>
                    <strong>"Category:"</strong>
                    " "
                    {category.unwrap_or_default()}
                </p>
                <IngredientList items=ingredients />
                <h4>"Instructions:"</h4>
                <p>{instructions.unwrap_or_default()}</p>
            </div>
        </div>
    }
}
