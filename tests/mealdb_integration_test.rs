use recipe_browser::{Config, MealDbClient};
use recipe_browser_common::extract_ingredients;

#[tokio::test]
async fn mealdb_live_search() {
    if std::env::var("MEALDB_LIVE_TEST").map(|v| v != "1").unwrap_or(true) {
        eprintln!("MEALDB_LIVE_TEST not set; skipping integration test");
        return;
    }

    let client = MealDbClient::new(&Config::default()).expect("client should build");
    let recipes = client.search("arrabiata").await.expect("live search failed");

    let recipe = recipes
        .iter()
        .find(|r| r.name.contains("Arrabiata"))
        .expect("Arrabiata should be listed");
    assert!(!extract_ingredients(recipe).is_empty());
}
