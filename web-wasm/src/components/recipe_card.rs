//! レシピカード
//!
//! フォーカス可能なボタンとして振る舞い、`data-mealid` にレシピIDを持つ。
//! キーボードからの起動は App のグローバルキーリスナーが処理する。

use leptos::html;
use leptos::prelude::*;
use recipe_browser_common::{extract_ingredients, Recipe};
use web_sys::{HtmlElement, MouseEvent};

use crate::components::ingredient_list::IngredientList;

#[component]
pub fn RecipeCard<F>(
    recipe: Recipe,
    on_open: F,
) -> impl IntoView
where
    F: Fn(Recipe, Option<HtmlElement>) + 'static + Clone + Send,
{
    let card_ref = NodeRef::<html::Div>::new();
    let ingredients = extract_ingredients(&recipe);
    let name = recipe.name.clone();
    let thumbnail = recipe.thumbnail.clone();
    let category = recipe.category.clone().unwrap_or_default();
    let instructions = recipe.instructions.clone().unwrap_or_default();
    let meal_id = recipe.id.clone();

    let on_click = move |_: MouseEvent| {
        let source = card_ref.get_untracked().map(HtmlElement::from);
        on_open(recipe.clone(), source);
    };

    view! {
        <div
            class="card"
            role="button"
            tabindex="0"
            data-mealid=meal_id
            node_ref=card_ref
            on:click=on_click
        >
            <h2>{name.clone()}</h2>
            {thumbnail.map(|src| view! { <img src=src alt=name.clone() /> })}
            <p>
                <strong>"Category:"</strong>
                " "
                {category}
            </p>
            <IngredientList items=ingredients />
            <h4>"Instructions:"</h4>
            <p>{instructions}</p>
        </div>
    }
}
