//! TheMealDB 検索 API 呼び出し（fetch）

use recipe_browser_common::config::{search_url, MEALDB_SEARCH_URL};
use recipe_browser_common::{parse_search_response, Error, Recipe, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> Error {
    Error::Transport(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// クエリでレシピを検索
///
/// 空文字列はデフォルト（全件）検索。
/// 通信・HTTPステータス・デコードの失敗はすべて `Err` で返す。
pub async fn search_meals(query: &str) -> Result<Vec<Recipe>> {
    let encoded = String::from(js_sys::encode_uri_component(query));
    let url = search_url(MEALDB_SEARCH_URL, &encoded);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Transport("window is unavailable".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| Error::Transport("response body is not text".into()))?;

    parse_search_response(&body)
}
