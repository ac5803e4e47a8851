//! RecipeBrowser 統合テスト
//!
//! 検索結果とオーバーレイ選択が独立していること、
//! 失敗時に結果セットが残ることを検証

use mockito::Matcher;
use recipe_browser::{Config, RecipeBrowser};
use recipe_browser_common::{FocusAnchor, Key, KeyAction, SearchOutcome, StalePolicy, Transition};
use std::cell::Cell;
use std::rc::Rc;

const SEARCH_PATH: &str = "/api/json/v1/1/search.php";

const ALL_MEALS: &str = r#"{"meals": [
    {"idMeal": "52771", "strMeal": "Arrabiata", "strIngredient1": "Tomato", "strMeasure1": "4"},
    {"idMeal": "53060", "strMeal": "Burek", "strIngredient1": "Filo Pastry", "strMeasure1": "1 Packet"}
]}"#;

/// フォーカス回数を数えるテスト用アンカー
#[derive(Clone, Default)]
struct TestAnchor {
    focused: Rc<Cell<u32>>,
}

impl FocusAnchor for TestAnchor {
    fn is_attached(&self) -> bool {
        true
    }

    fn focus(&self) {
        self.focused.set(self.focused.get() + 1);
    }
}

async fn browser_with_meals(server: &mut mockito::ServerGuard) -> RecipeBrowser<TestAnchor> {
    let _ = env_logger::builder().is_test(true).try_init();
    let _mock = server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::UrlEncoded("s".into(), "".into()))
        .with_status(200)
        .with_body(ALL_MEALS)
        .create_async()
        .await;

    let config = Config::default().with_endpoint(format!("{}{}", server.url(), SEARCH_PATH));
    let mut browser = RecipeBrowser::new(&config).expect("browser should build");
    let outcome = browser.search("").await;
    assert!(matches!(outcome, SearchOutcome::Applied { count: 2 }));
    browser
}

fn names(browser: &RecipeBrowser<TestAnchor>) -> Vec<String> {
    browser.results().iter().map(|r| r.name.clone()).collect()
}

#[tokio::test]
async fn test_failed_search_keeps_previous_results() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;

    let _mock = server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::UrlEncoded("s".into(), "arr".into()))
        .with_status(500)
        .create_async()
        .await;

    let outcome = browser.search("arr").await;
    assert!(matches!(outcome, SearchOutcome::Failed(_)));
    assert_eq!(names(&browser), vec!["Arrabiata", "Burek"]);
    assert!(!browser.is_loading());
    assert_eq!(browser.query(), "arr");
}

#[tokio::test]
async fn test_unreachable_endpoint_keeps_results() {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config::default().with_endpoint("http://127.0.0.1:1/search.php");
    let mut browser: RecipeBrowser<TestAnchor> = RecipeBrowser::new(&config).unwrap();

    let outcome = browser.search("a").await;
    assert!(matches!(
        outcome,
        SearchOutcome::Failed(recipe_browser_common::Error::Transport(_))
    ));
    assert!(browser.results().is_empty());
    assert!(!browser.is_loading());
}

#[tokio::test]
async fn test_open_and_close_do_not_touch_results() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;
    let anchor = TestAnchor::default();

    assert_eq!(browser.open("53060", Some(anchor.clone())), Transition::Opened);
    assert_eq!(browser.selected().map(|r| r.name.as_str()), Some("Burek"));
    assert_eq!(names(&browser), vec!["Arrabiata", "Burek"]);

    assert_eq!(browser.close(), Transition::Closed);
    assert!(browser.selected().is_none());
    assert_eq!(names(&browser), vec!["Arrabiata", "Burek"]);
    assert_eq!(anchor.focused.get(), 1);
}

#[tokio::test]
async fn test_open_unknown_id_is_noop() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;

    assert_eq!(browser.open("99999", None), Transition::Unchanged);
    assert!(browser.selected().is_none());
}

#[tokio::test]
async fn test_keyboard_space_matches_pointer_open() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;

    browser.open("52771", None);
    let by_pointer = browser.selected().cloned();
    browser.close();

    let anchor = TestAnchor::default();
    let action = browser.handle_key(Key::Space, Some(("52771", anchor.clone())));
    assert_eq!(action, KeyAction::Activate(0));
    assert_eq!(browser.selected().cloned(), by_pointer);

    let action = browser.handle_key(Key::Escape, None);
    assert_eq!(action, KeyAction::Close);
    assert!(browser.selected().is_none());
    assert_eq!(anchor.focused.get(), 1);
}

#[tokio::test]
async fn test_escape_when_closed_is_noop() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;

    let action = browser.handle_key(Key::Escape, None);
    assert_eq!(action, KeyAction::Ignore);
    assert!(browser.selected().is_none());
    assert_eq!(names(&browser), vec!["Arrabiata", "Burek"]);
}

#[tokio::test]
async fn test_enter_ignored_while_overlay_open() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;

    browser.open("52771", None);
    let action = browser.handle_key(Key::Enter, Some(("53060", TestAnchor::default())));
    assert_eq!(action, KeyAction::Ignore);
    assert_eq!(browser.selected().map(|r| r.id.as_str()), Some("52771"));
}

#[tokio::test]
async fn test_pointer_open_while_open_switches_selection() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;
    let first = TestAnchor::default();
    let second = TestAnchor::default();

    assert_eq!(browser.open("52771", Some(first.clone())), Transition::Opened);
    assert_eq!(browser.open("53060", Some(second.clone())), Transition::Switched);
    assert_eq!(browser.selected().map(|r| r.name.as_str()), Some("Burek"));

    browser.close();
    assert_eq!(first.focused.get(), 1);
    assert_eq!(second.focused.get(), 0);
}

/// "a" と "ar" の検索を重ねて発行し、"ar" が先に返るようにする
async fn overlapping_searches(
    server: &mut mockito::ServerGuard,
    browser: &mut RecipeBrowser<TestAnchor>,
) -> (SearchOutcome, SearchOutcome) {
    let _short = server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::UrlEncoded("s".into(), "a".into()))
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52768", "strMeal": "Apple Frangipan Tart"}, {"idMeal": "52771", "strMeal": "Arrabiata"}]}"#)
        .create_async()
        .await;
    let _long = server
        .mock("GET", SEARCH_PATH)
        .match_query(Matcher::UrlEncoded("s".into(), "ar".into()))
        .with_status(200)
        .with_body(r#"{"meals": [{"idMeal": "52771", "strMeal": "Arrabiata"}]}"#)
        .create_async()
        .await;

    let first = browser.begin_search("a");
    let second = browser.begin_search("ar");
    assert!(browser.is_loading());
    assert_eq!(browser.in_flight(), 2);
    assert_eq!(browser.query(), "ar");

    let second_result = browser.fetch(&second).await;
    let first_result = browser.fetch(&first).await;

    let second_outcome = browser.complete_search(second, second_result);
    assert!(browser.is_loading());
    let first_outcome = browser.complete_search(first, first_result);
    assert!(!browser.is_loading());
    (second_outcome, first_outcome)
}

#[tokio::test]
async fn test_overlapping_searches_keep_latest_results() {
    let mut server = mockito::Server::new_async().await;
    let mut browser = browser_with_meals(&mut server).await;
    assert_eq!(browser.stale_policy(), StalePolicy::LatestWins);

    let (latest, earlier) = overlapping_searches(&mut server, &mut browser).await;
    assert!(matches!(latest, SearchOutcome::Applied { count: 1 }));
    assert!(matches!(earlier, SearchOutcome::Stale));
    assert_eq!(names(&browser), vec!["Arrabiata"]);
}

#[tokio::test]
async fn test_overlapping_searches_in_arrival_order() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut server = mockito::Server::new_async().await;
    let config = Config::default()
        .with_endpoint(format!("{}{}", server.url(), SEARCH_PATH))
        .with_stale_policy(StalePolicy::ArrivalOrder);
    let mut browser: RecipeBrowser<TestAnchor> = RecipeBrowser::new(&config).unwrap();
    assert_eq!(browser.stale_policy(), StalePolicy::ArrivalOrder);

    let (latest, earlier) = overlapping_searches(&mut server, &mut browser).await;
    assert!(latest.is_applied());
    assert!(matches!(earlier, SearchOutcome::Applied { count: 2 }));
    assert_eq!(names(&browser), vec!["Apple Frangipan Tart", "Arrabiata"]);
    assert_eq!(browser.query(), "ar");
}
