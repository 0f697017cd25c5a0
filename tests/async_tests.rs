//! Integration tests for async initialization.
#![cfg(feature = "async")]

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use wordtree_finder::{
    AsyncWordListLoader, FileWordListLoader, FinderError, LoadErrorKind, ListKind, Result,
    TrieSelector, VocabularyStore,
};

fn testdata_dir() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("testdata");
    path
}

/// Loader that answers after a fixed delay
struct SlowLoader {
    delay: Duration,
}

#[async_trait]
impl AsyncWordListLoader for SlowLoader {
    async fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        tokio::time::sleep(self.delay).await;
        Ok(match kind {
            ListKind::Names => vec!["ana".to_string()],
            ListKind::Surnames => vec!["garcia".to_string()],
            ListKind::Connectors => vec!["de".to_string()],
        })
    }
}

#[tokio::test]
async fn test_init_async_from_files() {
    let store = VocabularyStore::new();
    let loader = FileWordListLoader::from_dir(testdata_dir());
    store
        .init_async(&loader, Duration::from_secs(10))
        .await
        .unwrap();

    assert!(store.is_ready());
    // Relative include resolved against testdata/
    assert!(store.names().unwrap().contains("sofia"));

    let matches = store
        .scan("Maria del Carmen", &TrieSelector::Names)
        .unwrap()
        .unwrap();
    assert_eq!(matches[1].connector.as_ref().unwrap().matched, "del");
}

#[tokio::test]
async fn test_init_async_loads_concurrently() {
    let store = VocabularyStore::new();
    let loader = SlowLoader {
        delay: Duration::from_millis(300),
    };

    // Three sequential loads would need 900ms
    store
        .init_async(&loader, Duration::from_millis(700))
        .await
        .unwrap();
    assert!(store.connectors().unwrap().contains("de"));
}

#[tokio::test]
async fn test_init_async_timeout() {
    let store = VocabularyStore::new();
    let loader = SlowLoader {
        delay: Duration::from_secs(5),
    };

    let err = store
        .init_async(&loader, Duration::from_millis(50))
        .await
        .unwrap_err();
    assert!(
        matches!(err, FinderError::Timeout(d) if d == Duration::from_millis(50)),
        "got {:?}",
        err
    );
    assert!(!store.is_ready());
}

#[tokio::test]
async fn test_init_async_timeout_keeps_previous_snapshot() {
    let store = VocabularyStore::new();
    store.init(vec!["luis".into()], Vec::new(), Vec::new());

    let loader = SlowLoader {
        delay: Duration::from_secs(5),
    };
    let result = store.init_async(&loader, Duration::from_millis(20)).await;
    assert!(result.is_err());

    assert!(store.names().unwrap().contains("luis"));
    assert!(!store.names().unwrap().contains("ana"));
}

#[tokio::test]
async fn test_init_async_load_error() {
    let store = VocabularyStore::new();
    // No paths configured
    let loader = FileWordListLoader::new();

    match store.init_async(&loader, Duration::from_secs(1)).await {
        Err(FinderError::LoadError { kind, .. }) => assert_eq!(kind, LoadErrorKind::NotConfigured),
        other => panic!("expected LoadError, got {:?}", other),
    }
    assert!(!store.is_ready());
}
