//! Unit tests for the in-memory token store

use crate::repositories::store::{MockTokenStore, TokenStore};

#[tokio::test]
async fn test_set_and_get() {
    let store = MockTokenStore::new();

    store.set_with_expiry("k", "v", 60).await.unwrap();

    assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    assert!(store.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_missing_key() {
    let store = MockTokenStore::new();

    assert_eq!(store.get("absent").await.unwrap(), None);
    assert!(!store.exists("absent").await.unwrap());
}

#[tokio::test]
async fn test_expired_key_behaves_like_deleted() {
    let store = MockTokenStore::new();

    store.set_with_expiry("k", "v", 60).await.unwrap();
    store.expire_now("k").await;

    assert_eq!(store.get("k").await.unwrap(), None);
    assert!(!store.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_increment_defaults_to_zero() {
    let store = MockTokenStore::new();

    assert_eq!(store.increment("counter").await.unwrap(), 1);
    assert_eq!(store.increment("counter").await.unwrap(), 2);
    assert_eq!(store.get("counter").await.unwrap(), Some("2".to_string()));
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let store = MockTokenStore::new();

    store.set_with_expiry("k", "v", 60).await.unwrap();

    assert!(store.delete("k").await.unwrap());
    assert!(!store.delete("k").await.unwrap());
    assert!(!store.exists("k").await.unwrap());
}

#[tokio::test]
async fn test_increment_rejects_non_integer_value() {
    let store = MockTokenStore::new();

    store.set_with_expiry("k", "not-a-number", 60).await.unwrap();

    assert!(store.increment("k").await.is_err());
}
