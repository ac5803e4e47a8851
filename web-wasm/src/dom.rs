//! DOM 副作用（スクロールロック・フォーカス復帰・フォーカス中カードの特定）

use recipe_browser_common::FocusAnchor;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// カード要素に付与するレシピID属性
pub const MEAL_ID_ATTR: &str = "data-mealid";

const OVERFLOW: &str = "overflow";

/// オーバーレイを開いたカード（フォーカス復帰先）
#[derive(Clone)]
pub struct CardAnchor(HtmlElement);

impl From<HtmlElement> for CardAnchor {
    fn from(element: HtmlElement) -> Self {
        Self(element)
    }
}

impl FocusAnchor for CardAnchor {
    fn is_attached(&self) -> bool {
        self.0.is_connected()
    }

    fn focus(&self) {
        if let Err(e) = self.0.focus() {
            log::warn!("failed to restore focus: {:?}", e);
        }
    }
}

/// `<body>` の背景スクロールを止めるガード
///
/// drop 時に取得前の `overflow` 値へ戻す。
pub struct BodyScrollLock {
    body: HtmlElement,
    previous: String,
}

impl BodyScrollLock {
    /// body が無い環境では None
    pub fn acquire() -> Option<Self> {
        let body = web_sys::window()?.document()?.body()?;
        let style = body.style();
        let previous = style.get_property_value(OVERFLOW).unwrap_or_default();

        if let Err(e) = style.set_property(OVERFLOW, "hidden") {
            log::warn!("failed to lock background scroll: {:?}", e);
            return None;
        }

        Some(Self { body, previous })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let result = if self.previous.is_empty() {
            style.remove_property(OVERFLOW).map(|_| ())
        } else {
            style.set_property(OVERFLOW, &self.previous)
        };

        if let Err(e) = result {
            log::warn!("failed to unlock background scroll: {:?}", e);
        }
    }
}

/// 現在フォーカスされている要素
pub fn focused_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .active_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// 要素に記録されたレシピID（カード以外は None）
pub fn meal_id(element: &HtmlElement) -> Option<String> {
    element.get_attribute(MEAL_ID_ATTR)
}
