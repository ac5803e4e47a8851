//! グローバルキー入力の振り分け
//!
//! - Escape: フォーカス位置に関係なくオーバーレイを閉じる
//! - Enter / Space: オーバーレイが閉じていて、フォーカス中の要素がカードなら開く

use crate::model::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Space,
    Other,
}

impl Key {
    /// `KeyboardEvent.key` の値から変換
    pub fn from_key_value(value: &str) -> Self {
        match value {
            "Escape" | "Esc" => Key::Escape,
            "Enter" => Key::Enter,
            " " | "Spacebar" => Key::Space,
            _ => Key::Other,
        }
    }

    fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    /// 結果セット中のインデックス
    Activate(usize),
    Ignore,
}

/// キー入力に対する動作を決める
///
/// `focused_id` はフォーカス中の要素に記録されたレシピID（カードでなければ None）。
/// ID が結果セットのどのレシピとも一致しない場合は何もしない。
pub fn dispatch_key(
    key: Key,
    overlay_open: bool,
    focused_id: Option<&str>,
    results: &[Recipe],
) -> KeyAction {
    if key == Key::Escape {
        return if overlay_open {
            KeyAction::Close
        } else {
            KeyAction::Ignore
        };
    }

    if overlay_open || !key.activates() {
        return KeyAction::Ignore;
    }

    focused_id
        .and_then(|id| results.iter().position(|r| r.id == id))
        .map_or(KeyAction::Ignore, KeyAction::Activate)
}
