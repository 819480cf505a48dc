use std::sync::Arc;

use async_trait::async_trait;
use storage::repository::{KeyValueStore, StorageError};
use tracker_core::model::QuestionId;

use super::test_harness::{setup_view_harness, setup_view_harness_with_store};

const DATASET: &str = r#"{
  "data": [
    {"id": 1, "title": "Edit Distance", "slug": "edit-distance", "pattern": ["DP"], "difficulty": "Hard"},
    {"id": 2, "title": "Contains Duplicate", "slug": "contains-duplicate", "pattern": ["Array", "Hashing"], "difficulty": "Easy",
     "solution": "https://example.com/contains-duplicate"},
    {"id": 3, "title": "Flood Fill", "slug": "flood-fill", "pattern": ["BFS"], "difficulty": "Easy"}
  ]
}"#;

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("missing {needle} in {html}"))
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_renders_sorted_rows() {
    let mut harness = setup_view_harness(DATASET, "", "");
    harness.settle().await;
    let html = harness.render();

    assert!(html.contains("questionTableBody"), "missing table body in {html}");
    let first = position(&html, "Contains Duplicate");
    let second = position(&html, "Flood Fill");
    let third = position(&html, "Edit Distance");
    assert!(first < second && second < third, "rows out of order in {html}");

    assert!(html.contains(r#"data-tag="array hashing""#), "missing data-tag in {html}");
    assert!(html.contains(r#"difficulty-tag="hard""#), "missing difficulty-tag in {html}");
    assert!(html.contains(r#"data-tip="q2""#), "missing tip in {html}");
    assert!(html.contains("Array, Hashing"), "missing joined tags in {html}");
    assert!(html.contains("https://leetcode.com/problems/flood-fill/"), "missing problem url in {html}");
    assert!(html.contains("https://example.com/contains-duplicate"), "missing solution url in {html}");
    assert!(html.contains("Coming Soon"), "missing placeholder in {html}");
    assert!(html.contains("0 / 3 completed"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_offers_tag_options() {
    let mut harness = setup_view_harness(DATASET, "", "");
    harness.settle().await;
    let html = harness.render();

    let array = position(&html, r#"value="Array""#);
    let bfs = position(&html, r#"value="BFS""#);
    let dp = position(&html, r#"value="DP""#);
    assert!(array < bfs && bfs < dp, "tag options out of order in {html}");
    assert!(html.contains(r#"value="medium""#), "missing difficulty option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_applies_initial_filters() {
    let mut harness = setup_view_harness(DATASET, "", "easy");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Contains Duplicate"), "missing easy row in {html}");
    assert!(html.contains("Flood Fill"), "missing easy row in {html}");
    assert!(!html.contains("Edit Distance"), "hard row leaked into {html}");

    let mut harness = setup_view_harness(DATASET, "BFS", "easy");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Flood Fill"), "missing bfs row in {html}");
    assert!(!html.contains("Contains Duplicate"), "array row leaked into {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn changing_filters_rerenders_rows() {
    let mut harness = setup_view_harness(DATASET, "", "");
    harness.settle().await;
    assert!(harness.render().contains("Edit Distance"));

    harness.set_filters("", "HARD");
    harness.drive_pending().await;
    let html = harness.render();
    assert!(html.contains("Edit Distance"), "missing hard row in {html}");
    assert!(!html.contains("Flood Fill"), "easy row leaked into {html}");

    harness.set_filters("bfs", "");
    harness.drive_pending().await;
    let html = harness.render();
    assert!(html.contains("Flood Fill"), "missing bfs row in {html}");
    assert!(!html.contains("Edit Distance"), "dp row leaked into {html}");
    assert!(!html.contains("Contains Duplicate"), "array row leaked into {html}");

    harness.set_filters(" ", "");
    harness.drive_pending().await;
    let html = harness.render();
    assert!(html.contains("Contains Duplicate") && html.contains("Edit Distance"));
}

#[tokio::test(flavor = "current_thread")]
async fn toggling_a_row_saves_and_updates_progress() {
    let mut harness = setup_view_harness(DATASET, "", "");
    harness.settle().await;

    harness.toggle(QuestionId::from(1), true);
    harness.toggle(QuestionId::from(3), true);
    harness.drive_pending().await;

    assert!(harness.completion.load(&QuestionId::from(1)).await.unwrap());
    assert!(harness.completion.load(&QuestionId::from(3)).await.unwrap());
    let html = harness.render();
    assert!(html.contains("2 / 3 completed"), "missing progress in {html}");

    harness.toggle(QuestionId::from(1), false);
    harness.drive_pending().await;

    assert!(!harness.completion.load(&QuestionId::from(1)).await.unwrap());
    let html = harness.render();
    assert!(html.contains("1 / 3 completed"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_reflects_saved_completion() {
    let mut harness = setup_view_harness(DATASET, "", "");
    harness
        .completion
        .save(&QuestionId::from(3), true)
        .await
        .expect("save completion");

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("1 / 3 completed"), "missing progress in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_renders_empty_table_on_bad_dataset() {
    let mut harness = setup_view_harness("<html>not found</html>", "", "");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("questionTableBody"), "missing table body in {html}");
    assert!(!html.contains("data-tag="), "unexpected rows in {html}");
    assert!(html.contains("0 / 0 completed"), "missing progress in {html}");
}

struct FailingStore;

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }

    async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Connection("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn questions_view_survives_unreadable_completion_state() {
    let mut harness = setup_view_harness_with_store(DATASET, Arc::new(FailingStore), "", "");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Edit Distance"), "rows missing in {html}");
    assert!(html.contains("Progress unavailable."), "missing error text in {html}");
}
