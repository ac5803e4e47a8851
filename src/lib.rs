//! Recipe Browser (native host)
//!
//! Web版と同じ検索コントローラ・オーバーレイ状態機械を
//! reqwest クライアントで駆動するヘッドレス実装。

pub mod browser;
pub mod client;
pub mod config;
pub mod error;

pub use browser::RecipeBrowser;
pub use client::MealDbClient;
pub use config::Config;
pub use error::{RecipeBrowserError, Result};
