//! レシピの型定義
//!
//! TheMealDB の検索レスポンスをデコードする:
//! - Recipe: 1件のレシピ（材料/分量は20個の番号付きフィールド）
//! - SearchResponse: `meals` 配列（null/欠落は空扱い）

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::config::INGREDIENT_SLOTS;
use crate::error::{Error, Result};

/// 材料スロット（同じ番号の strIngredientN / strMeasureN の組）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub ingredient: Option<String>,
    pub measure: Option<String>,
}

/// レシピ1件
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct Recipe {
    /// idMeal
    pub id: String,
    /// strMeal
    pub name: String,
    /// strCategory
    pub category: Option<String>,
    /// strArea
    pub area: Option<String>,
    /// strMealThumb
    pub thumbnail: Option<String>,
    /// strInstructions
    pub instructions: Option<String>,
    slots: [IngredientSlot; INGREDIENT_SLOTS],
}

impl Recipe {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
            area: None,
            thumbnail: None,
            instructions: None,
            slots: Default::default(),
        }
    }

    /// 1始まりの番号で材料スロットを設定（範囲外は無視）
    pub fn with_ingredient(
        mut self,
        index: usize,
        ingredient: impl Into<String>,
        measure: impl Into<String>,
    ) -> Self {
        if let Some(slot) = index.checked_sub(1).and_then(|i| self.slots.get_mut(i)) {
            slot.ingredient = Some(ingredient.into());
            slot.measure = Some(measure.into());
        }
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.thumbnail = Some(thumbnail.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }

    /// 番号順（1→20）の材料スロット
    pub fn slots(&self) -> &[IngredientSlot] {
        &self.slots
    }

    /// 1始まりの番号で材料スロットを取得
    pub fn slot(&self, index: usize) -> Option<&IngredientSlot> {
        index.checked_sub(1).and_then(|i| self.slots.get(i))
    }
}

impl TryFrom<Map<String, Value>> for Recipe {
    type Error = Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self> {
        let id = raw_text(&fields, "idMeal")
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| Error::InvalidRecord("missing idMeal".into()))?;

        let slots = std::array::from_fn(|i| IngredientSlot {
            ingredient: raw_text(&fields, &format!("strIngredient{}", i + 1)),
            measure: raw_text(&fields, &format!("strMeasure{}", i + 1)),
        });

        Ok(Self {
            id,
            name: raw_text(&fields, "strMeal").unwrap_or_default(),
            category: display_text(&fields, "strCategory"),
            area: display_text(&fields, "strArea"),
            thumbnail: display_text(&fields, "strMealThumb"),
            instructions: display_text(&fields, "strInstructions"),
            slots,
        })
    }
}

/// 文字列/数値フィールドをそのまま取り出す（null・欠落は None）
fn raw_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// 表示用フィールド: 空白のみの値は None
fn display_text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    raw_text(fields, key).filter(|s| !s.trim().is_empty())
}

/// 検索APIレスポンス
///
/// `meals` の各要素は個別にデコードし、1件の不正レコードで全体を失わないようにする。
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub meals: Option<Vec<Value>>,
}

impl SearchResponse {
    /// レシピに変換（idMeal の無いレコード・オブジェクト以外の要素は警告して読み飛ばす）
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.meals
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, meal)| {
                let decoded = match meal {
                    Value::Object(fields) => Recipe::try_from(fields),
                    other => Err(Error::InvalidRecord(format!("not an object: {}", other))),
                };
                decoded
                    .map_err(|e| log::warn!("skipping meal #{}: {}", index, e))
                    .ok()
            })
            .collect()
    }
}

/// 検索APIレスポンス本文をパース
///
/// `meals` が欠落または null の場合は空の Vec を返す（エラーではない）。
/// 本文自体が JSON でない場合のみ `Err`。
pub fn parse_search_response(body: &str) -> Result<Vec<Recipe>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.into_recipes())
}
