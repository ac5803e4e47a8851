//! エラー型定義
//!
//! すべての variant は「検索リクエスト失敗」という1種類の論理エラーを表す。

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unexpected HTTP status: {0}")]
    Status(u16),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid recipe record: {0}")]
    InvalidRecord(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
