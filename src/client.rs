//! TheMealDB 検索クライアント（reqwest）

use crate::config::Config;
use crate::error::{RecipeBrowserError, Result};
use recipe_browser_common::config::SEARCH_QUERY_PARAM;
use recipe_browser_common::{parse_search_response, Recipe};
use reqwest::Client;
use std::time::Duration;

pub struct MealDbClient {
    client: Client,
    endpoint: String,
}

impl MealDbClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// クエリでレシピを検索（空文字列は全件）
    pub async fn search(&self, query: &str) -> Result<Vec<Recipe>> {
        log::debug!("GET {} s={:?}", self.endpoint, query);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[(SEARCH_QUERY_PARAM, query)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeBrowserError::Search(
                recipe_browser_common::Error::Status(status.as_u16()),
            ));
        }

        let body = response.text().await?;
        Ok(parse_search_response(&body)?)
    }
}
