use super::*;
use crate::test_support::{user, RecordingApi};

#[tokio::test]
async fn refresh_replaces_sequence_wholesale() {
    let api = RecordingApi::with_users(vec![user(1, "Ana", "a@x.com", "1")]);
    let store = CollectionStore::new();

    assert_eq!(store.refresh(&api).await.expect("refresh"), 1);
    assert_eq!(store.users().await, api.server_users());
    assert_eq!(store.find(UserId(1)).await.map(|u| u.name), Some("Ana".into()));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn failed_refresh_keeps_previous_sequence() {
    let api = RecordingApi::with_users(vec![user(1, "Ana", "a@x.com", "1")]);
    let store = CollectionStore::new();
    store.refresh(&api).await.expect("refresh");

    api.fail_reads(true);
    store.refresh(&api).await.expect_err("read fails");

    assert_eq!(store.users().await.len(), 1);
    assert!(!store.is_loading());
}

#[test]
fn loading_lasts_until_last_overlapping_fetch_ends() {
    let store = CollectionStore::new();
    let first = store.begin_fetch();
    let second = store.begin_fetch();

    drop(first);
    assert!(store.is_loading());
    drop(second);
    assert!(!store.is_loading());
}
