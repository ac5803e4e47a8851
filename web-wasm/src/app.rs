//! メインアプリケーションコンポーネント
//!
//! 状態:
//! - 検索コントローラ（クエリ・結果セット・ビジーフラグ）
//! - オーバーレイ（選択中レシピ・フォーカス復帰先・スクロールロック）
//!
//! 2つは独立しており、オーバーレイを閉じても結果セットは変わらない。

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_browser_common::{
    dispatch_key, Key, KeyAction, OverlayState, Recipe, SearchController,
};
use web_sys::HtmlElement;

use crate::api::mealdb;
use crate::components::{
    header::Header,
    loading_indicator::LoadingIndicator,
    recipe_grid::RecipeGrid,
    recipe_overlay::RecipeOverlay,
    search_bar::SearchBar,
};
use crate::dom::{self, BodyScrollLock, CardAnchor};

/// オーバーレイ状態（DOM版）
type Overlay = OverlayState<CardAnchor, Option<BodyScrollLock>>;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(SearchController::default());
    let overlay = RwSignal::new_local(Overlay::new());

    let query = Memo::new(move |_| controller.with(|c| c.query().to_string()));
    let recipes = Memo::new(move |_| controller.with(|c| c.results().to_vec()));
    let is_loading = Memo::new(move |_| controller.with(SearchController::is_loading));
    let selected = Memo::new(move |_| overlay.with(|o| o.selected().cloned()));

    // 検索ハンドラ（前のリクエストはキャンセルしない）
    let run_search = move |q: String| {
        let Some(ticket) = controller.try_update(|c| c.begin(q)) else {
            return;
        };
        spawn_local(async move {
            let result = mealdb::search_meals(ticket.query()).await;
            controller.update(|c| {
                c.complete(ticket, result);
            });
        });
    };

    let open_recipe = move |recipe: Recipe, source: Option<HtmlElement>| {
        overlay.update(|o| {
            o.open(recipe, source.map(CardAnchor::from), BodyScrollLock::acquire);
        });
    };

    // 状態を取り出してからロック解放・フォーカス復帰を行う
    let close_recipe = move |_: ()| {
        if !overlay.with_untracked(|o| o.is_open()) {
            return;
        }
        if let Some(mut closing) = overlay.try_update(std::mem::take) {
            closing.close();
        }
    };

    // グローバルキーリスナー: 毎回その時点の状態を読む
    let key_handle = window_event_listener(ev::keydown, move |ev| {
        let key = Key::from_key_value(&ev.key());
        let focused = dom::focused_element();
        let focused_id = focused.as_ref().and_then(dom::meal_id);
        let overlay_open = overlay.with_untracked(|o| o.is_open());

        let action = controller.with_untracked(|c| {
            dispatch_key(key, overlay_open, focused_id.as_deref(), c.results())
        });

        match action {
            KeyAction::Close => close_recipe(()),
            KeyAction::Activate(index) => {
                ev.prevent_default();
                let recipe = controller.with_untracked(|c| c.results().get(index).cloned());
                if let Some(recipe) = recipe {
                    open_recipe(recipe, focused);
                }
            }
            KeyAction::Ignore => {}
        }
    });

    on_cleanup(move || {
        key_handle.remove();
        // アンマウント時もスクロールロックを解放する
        overlay.try_update(std::mem::take);
    });

    // 起動時に全件を読み込む
    run_search(String::new());

    view! {
        <div class="app-container">
            <Header />

            <SearchBar query=query on_search=run_search />

            <Show when=move || is_loading.get()>
                <LoadingIndicator />
            </Show>

            <Show when=move || !is_loading.get() && recipes.with(Vec::is_empty)>
                <p class="text-muted">"No recipes found."</p>
            </Show>

            <RecipeGrid recipes=recipes on_open=open_recipe />

            {move || {
                selected
                    .get()
                    .map(|recipe| view! { <RecipeOverlay recipe=recipe on_close=close_recipe /> })
            }}
        </div>
    }
}
