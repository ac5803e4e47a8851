use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeBrowserError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("検索エラー: {0}")]
    Search(#[from] recipe_browser_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl RecipeBrowserError {
    /// 検索コントローラに渡す共通エラーへ変換
    pub fn into_search_error(self) -> recipe_browser_common::Error {
        match self {
            RecipeBrowserError::Search(e) => e,
            RecipeBrowserError::JsonParse(e) => recipe_browser_common::Error::Json(e),
            other => recipe_browser_common::Error::Transport(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeBrowserError>;
