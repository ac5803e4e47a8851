//! 検索コントローラ
//!
//! リクエストごとに連番を振り、完了時に結果を適用するか破棄するかを決める。
//! 通信自体はホスト（Web: fetch, ネイティブ: reqwest）が行う。
//!
//! ```text
//! begin(query) -> SearchTicket -> (ホストが通信) -> complete(ticket, result)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Recipe;

/// 古いレスポンスの扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StalePolicy {
    /// 新しいリクエストが発行済みなら古いレスポンスは破棄
    #[default]
    LatestWins,
    /// 到着順にそのまま適用（後から届いた古い結果で上書きされうる）
    ArrivalOrder,
}

/// 発行済みリクエストの識別子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    seq: u64,
    query: String,
}

impl SearchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn query(&self) -> &str {
        &self.query
    }
}

/// complete() の結果
#[derive(Debug)]
pub enum SearchOutcome {
    /// 結果セットを置き換えた
    Applied { count: usize },
    /// より新しいリクエストがあるため破棄した
    Stale,
    /// 通信/デコード失敗（結果セットは変更なし）
    Failed(crate::error::Error),
}

impl SearchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, SearchOutcome::Applied { .. })
    }
}

/// 検索状態（クエリ・結果セット・ビジーフラグ）
#[derive(Debug, Clone, Default)]
pub struct SearchController {
    query: String,
    results: Vec<Recipe>,
    policy: StalePolicy,
    issued: u64,
    in_flight: usize,
}

impl SearchController {
    pub fn new(policy: StalePolicy) -> Self {
        Self {
            policy,
            ..Default::default()
        }
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    /// 最後に入力されたクエリ
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[Recipe] {
        &self.results
    }

    /// 完了していないリクエストがある間 true
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.results.iter().find(|r| r.id == id)
    }

    /// 検索開始: ビジーフラグを立て、連番付きチケットを発行
    ///
    /// 空文字列は「全件（デフォルト結果）」を意味する有効なクエリ。
    pub fn begin(&mut self, query: impl Into<String>) -> SearchTicket {
        let query = query.into();
        self.issued += 1;
        self.in_flight += 1;
        self.query = query.clone();
        log::debug!("search #{} started: {:?}", self.issued, query);

        SearchTicket {
            seq: self.issued,
            query,
        }
    }

    /// 検索完了: 結果を適用、破棄、または失敗として記録
    ///
    /// 失敗はログに出すだけで呼び出し元には伝播しない。
    pub fn complete(&mut self, ticket: SearchTicket, result: Result<Vec<Recipe>>) -> SearchOutcome {
        self.in_flight = self.in_flight.saturating_sub(1);

        match result {
            Err(e) => {
                log::error!("Error fetching recipes for {:?}: {}", ticket.query, e);
                SearchOutcome::Failed(e)
            }
            Ok(_) if self.is_superseded(&ticket) => {
                log::warn!(
                    "discarding stale response #{} ({:?}); latest is #{}",
                    ticket.seq,
                    ticket.query,
                    self.issued
                );
                SearchOutcome::Stale
            }
            Ok(recipes) => {
                let count = recipes.len();
                self.results = recipes;
                log::debug!("search #{} applied: {} recipes", ticket.seq, count);
                SearchOutcome::Applied { count }
            }
        }
    }

    fn is_superseded(&self, ticket: &SearchTicket) -> bool {
        match self.policy {
            StalePolicy::LatestWins => ticket.seq != self.issued,
            StalePolicy::ArrivalOrder => false,
        }
    }
}
