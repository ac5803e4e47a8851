//! 詳細オーバーレイの状態機械
//!
//! `Closed` / `Open(レシピ, アンカー)` の2状態。
//! 開いている間はスクロールロック `L` を保持し、閉じる（または状態ごと破棄する）と
//! ロックが drop されて背景スクロールが元に戻る。

use crate::model::Recipe;

/// フォーカス復帰先の要素
pub trait FocusAnchor {
    /// まだドキュメントに接続されているか
    fn is_attached(&self) -> bool;
    fn focus(&self);
}

/// 状態遷移の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Opened,
    /// 開いたまま別のレシピに切り替えた（アンカーとロックは維持）
    Switched,
    Closed,
    Unchanged,
}

struct OpenOverlay<A, L> {
    recipe: Recipe,
    anchor: Option<A>,
    scroll_lock: L,
}

/// オーバーレイ状態
pub struct OverlayState<A, L> {
    open: Option<OpenOverlay<A, L>>,
}

impl<A, L> Default for OverlayState<A, L> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<A: FocusAnchor, L> OverlayState<A, L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn selected(&self) -> Option<&Recipe> {
        self.open.as_ref().map(|o| &o.recipe)
    }

    pub fn anchor(&self) -> Option<&A> {
        self.open.as_ref().and_then(|o| o.anchor.as_ref())
    }

    /// レシピを選択してオーバーレイを開く
    ///
    /// `acquire_lock` は Closed から開くときだけ呼ばれる。
    /// 既に開いている場合は選択だけを差し替え、最初のアンカーとロックを維持する。
    pub fn open(
        &mut self,
        recipe: Recipe,
        anchor: Option<A>,
        acquire_lock: impl FnOnce() -> L,
    ) -> Transition {
        match &mut self.open {
            Some(current) => {
                current.recipe = recipe;
                Transition::Switched
            }
            None => {
                self.open = Some(OpenOverlay {
                    recipe,
                    anchor,
                    scroll_lock: acquire_lock(),
                });
                Transition::Opened
            }
        }
    }

    /// オーバーレイを閉じる
    ///
    /// スクロールロックを解放してから、アンカーがまだ存在すればフォーカスを戻す。
    /// 閉じている状態で呼ばれた場合は何もしない。
    pub fn close(&mut self) -> Transition {
        let Some(OpenOverlay {
            anchor,
            scroll_lock,
            ..
        }) = self.open.take()
        else {
            return Transition::Unchanged;
        };

        drop(scroll_lock);

        match anchor {
            Some(anchor) if anchor.is_attached() => anchor.focus(),
            Some(_) => log::debug!("focus anchor detached; skipping focus restore"),
            None => {}
        }
        Transition::Closed
    }
}
