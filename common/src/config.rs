//! 固定設定値
//!
//! Web版は環境設定を持たないため、エンドポイントは定数で固定する。

/// TheMealDB 検索エンドポイント（`?s=<query>` を付与して使う）
pub const MEALDB_SEARCH_URL: &str = "https://www.themealdb.com/api/json/v1/1/search.php";

/// 検索クエリのパラメータ名
pub const SEARCH_QUERY_PARAM: &str = "s";

/// レシピ1件あたりの材料スロット数（strIngredient1..20）
pub const INGREDIENT_SLOTS: usize = 20;

pub const APP_TITLE: &str = "Recipe App";
pub const SEARCH_PLACEHOLDER: &str = "Search recipes...";
pub const LOADING_TEXT: &str = "Loading recipes...";

/// ホスト側でエンコード済みのクエリから検索URLを組み立てる
pub fn search_url(base: &str, encoded_query: &str) -> String {
    format!("{}?{}={}", base, SEARCH_QUERY_PARAM, encoded_query)
}
