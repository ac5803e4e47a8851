//! 材料リスト抽出
//!
//! カード表示と詳細オーバーレイの両方がこの関数を使うため、
//! 同じレシピに対して必ず同じ結果になる。

use crate::model::{IngredientSlot, Recipe};

/// 材料リストを番号順に抽出
///
/// 材料名が空白のみ/欠落のスロットは除外する。
/// 材料名と分量はトリムせずそのまま `"<材料> - <分量>"` に整形し、
/// 分量が欠落している場合は空文字として扱う。
///
/// # Examples
/// ```
/// use recipe_browser_common::{Recipe, extract_ingredients};
///
/// let recipe = Recipe::new("52771", "Arrabiata")
///     .with_ingredient(1, "Tomato", "4")
///     .with_ingredient(2, "", "");
/// assert_eq!(extract_ingredients(&recipe), vec!["Tomato - 4"]);
/// ```
pub fn extract_ingredients(recipe: &Recipe) -> Vec<String> {
    recipe.slots().iter().filter_map(format_slot).collect()
}

fn format_slot(slot: &IngredientSlot) -> Option<String> {
    let ingredient = slot
        .ingredient
        .as_deref()
        .filter(|s| !s.trim().is_empty())?;
    let measure = slot.measure.as_deref().unwrap_or("");
    Some(format!("{} - {}", ingredient, measure))
}
