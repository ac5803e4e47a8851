//! ヘッドレスのレシピブラウザ
//!
//! 検索結果とオーバーレイ選択は独立した状態として保持する。
//! スクロールロックは存在しないため `()` を使う。

use crate::client::MealDbClient;
use crate::config::Config;
use crate::error::Result;
use recipe_browser_common::{
    dispatch_key, FocusAnchor, Key, KeyAction, OverlayState, Recipe, Result as CommonResult,
    SearchController, SearchOutcome, SearchTicket, StalePolicy, Transition,
};

pub struct RecipeBrowser<A: FocusAnchor> {
    client: MealDbClient,
    controller: SearchController,
    overlay: OverlayState<A, ()>,
}

impl<A: FocusAnchor> RecipeBrowser<A> {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            client: MealDbClient::new(config)?,
            controller: SearchController::new(config.stale_policy),
            overlay: OverlayState::new(),
        })
    }

    /// 検索して結果セットを置き換える
    ///
    /// `&mut self` を保持したまま完了まで待つので、この経路では検索は常に1件ずつ。
    /// 複数のリクエストを重ねる場合は `begin_search` / `fetch` / `complete_search` を使う。
    /// 失敗はログに記録され、結果セットはそのまま残る。
    pub async fn search(&mut self, query: &str) -> SearchOutcome {
        let ticket = self.begin_search(query);
        let result = self.fetch(&ticket).await;
        self.complete_search(ticket, result)
    }

    /// 検索開始（ビジーフラグを立ててチケットを発行）
    pub fn begin_search(&mut self, query: &str) -> SearchTicket {
        self.controller.begin(query)
    }

    /// チケットのクエリで通信する（状態は変更しない）
    pub async fn fetch(&self, ticket: &SearchTicket) -> CommonResult<Vec<Recipe>> {
        self.client
            .search(ticket.query())
            .await
            .map_err(|e| e.into_search_error())
    }

    /// 検索完了（古いレスポンスはポリシーに従って破棄）
    pub fn complete_search(
        &mut self,
        ticket: SearchTicket,
        result: CommonResult<Vec<Recipe>>,
    ) -> SearchOutcome {
        self.controller.complete(ticket, result)
    }

    pub fn query(&self) -> &str {
        self.controller.query()
    }

    pub fn results(&self) -> &[Recipe] {
        self.controller.results()
    }

    pub fn is_loading(&self) -> bool {
        self.controller.is_loading()
    }

    /// 完了していない検索の数
    pub fn in_flight(&self) -> usize {
        self.controller.in_flight()
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.controller.policy()
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.overlay.selected()
    }

    /// ID で結果セットのレシピを開く（該当なしは何もしない）
    pub fn open(&mut self, id: &str, anchor: Option<A>) -> Transition {
        match self.controller.find(id) {
            Some(recipe) => self.overlay.open(recipe.clone(), anchor, || ()),
            None => Transition::Unchanged,
        }
    }

    pub fn close(&mut self) -> Transition {
        self.overlay.close()
    }

    /// キー入力を処理する
    ///
    /// `focused` はフォーカス中の要素（ID とフォーカス復帰先）。
    pub fn handle_key(&mut self, key: Key, focused: Option<(&str, A)>) -> KeyAction {
        let (focused_id, anchor) = match focused {
            Some((id, anchor)) => (Some(id), Some(anchor)),
            None => (None, None),
        };

        let action = dispatch_key(
            key,
            self.overlay.is_open(),
            focused_id,
            self.controller.results(),
        );

        match action {
            KeyAction::Close => {
                self.overlay.close();
            }
            KeyAction::Activate(index) => {
                if let Some(recipe) = self.controller.results().get(index) {
                    self.overlay.open(recipe.clone(), anchor, || ());
                }
            }
            KeyAction::Ignore => {}
        }
        action
    }
}
