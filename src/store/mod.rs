//! Vocabulary store.
//!
//! Owns the canonical vocabularies (names, surnames, connectors) and a
//! registry of ad-hoc named vocabularies. The canonical three are published
//! together as one snapshot; scans clone the snapshot and run lock-free.

mod registry;

use std::sync::Arc;
#[cfg(feature = "async")]
use std::time::Duration;

use log::info;
use parking_lot::RwLock;

use crate::error::{FinderError, Result};
#[cfg(feature = "async")]
use crate::loader::AsyncWordListLoader;
use crate::loader::{ListKind, WordListLoader};
use crate::matcher::Matcher;
use crate::options::StoreOptions;
use crate::trie::Vocabulary;
use crate::types::{MatchRecord, TrieSelector};

use registry::Registry;

/// The three canonical vocabularies, always published together.
#[derive(Debug)]
struct Canonical {
    names: Arc<Vocabulary>,
    surnames: Arc<Vocabulary>,
    connectors: Arc<Vocabulary>,
}

impl Canonical {
    /// Build all three vocabularies in parallel.
    fn build(
        names: Vec<String>,
        surnames: Vec<String>,
        connectors: Vec<String>,
        fold_case: bool,
    ) -> Self {
        let (names, (surnames, connectors)) = rayon::join(
            || Vocabulary::build(names, fold_case),
            || {
                rayon::join(
                    || Vocabulary::build(surnames, fold_case),
                    || Vocabulary::build(connectors, fold_case),
                )
            },
        );

        Self {
            names: Arc::new(names),
            surnames: Arc::new(surnames),
            connectors: Arc::new(connectors),
        }
    }
}

/// Shared vocabulary store.
///
/// All methods take `&self`; wrap the store in an `Arc` to share it
/// between threads.
pub struct VocabularyStore {
    options: StoreOptions,
    canonical: RwLock<Option<Arc<Canonical>>>,
    registry: Registry,
}

impl Default for VocabularyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyStore {
    /// Create an empty store with default options
    pub fn new() -> Self {
        Self::with_options(StoreOptions::default())
    }

    /// Create an empty store with the given options
    pub fn with_options(options: StoreOptions) -> Self {
        let registry = Registry::new(options.fold_case);
        Self {
            options,
            canonical: RwLock::new(None),
            registry,
        }
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Build and publish the canonical vocabularies.
    ///
    /// Calling it again rebuilds all three and replaces the previous set
    /// in one step; scans already running keep their old snapshot.
    pub fn init(&self, names: Vec<String>, surnames: Vec<String>, connectors: Vec<String>) {
        info!(
            "Building vocabularies: {} names, {} surnames, {} connectors",
            names.len(),
            surnames.len(),
            connectors.len()
        );
        let canonical = Canonical::build(names, surnames, connectors, self.options.fold_case);
        self.publish(canonical);
    }

    /// Load the canonical lists from `loader` and [`init`](Self::init).
    ///
    /// On a load error nothing is published.
    pub fn init_from_loader(&self, loader: &dyn WordListLoader) -> Result<()> {
        let names = loader.load(ListKind::Names)?;
        let surnames = loader.load(ListKind::Surnames)?;
        let connectors = loader.load(ListKind::Connectors)?;
        self.init(names, surnames, connectors);
        Ok(())
    }

    /// Load the canonical lists concurrently and build them on blocking
    /// tasks, giving up with [`FinderError::Timeout`] after `timeout`.
    ///
    /// Nothing is published unless every list loads and builds in time.
    /// Dropping the returned future cancels the load.
    #[cfg(feature = "async")]
    pub async fn init_async(
        &self,
        loader: &dyn AsyncWordListLoader,
        timeout: Duration,
    ) -> Result<()> {
        let fold_case = self.options.fold_case;

        let build = async {
            let (names, surnames, connectors) = tokio::try_join!(
                loader.load(ListKind::Names),
                loader.load(ListKind::Surnames),
                loader.load(ListKind::Connectors),
            )?;
            info!(
                "Building vocabularies: {} names, {} surnames, {} connectors",
                names.len(),
                surnames.len(),
                connectors.len()
            );

            let canonical = tokio::task::spawn_blocking(move || {
                Canonical::build(names, surnames, connectors, fold_case)
            })
            .await
            .map_err(|e| {
                if e.is_panic() {
                    std::panic::resume_unwind(e.into_panic());
                }
                FinderError::BuildFailed(e.to_string())
            })?;
            Ok::<_, FinderError>(canonical)
        };

        let canonical = tokio::time::timeout(timeout, build)
            .await
            .map_err(|_| FinderError::Timeout(timeout))??;

        self.publish(canonical);
        Ok(())
    }

    fn publish(&self, canonical: Canonical) {
        info!(
            "Vocabularies ready: {} names, {} surnames, {} connectors",
            canonical.names.len(),
            canonical.surnames.len(),
            canonical.connectors.len()
        );
        *self.canonical.write() = Some(Arc::new(canonical));
    }

    fn snapshot(&self) -> Result<Arc<Canonical>> {
        self.canonical.read().clone().ok_or(FinderError::NotReady)
    }

    /// Whether the canonical vocabularies have been published
    pub fn is_ready(&self) -> bool {
        self.canonical.read().is_some()
    }

    pub fn names(&self) -> Result<Arc<Vocabulary>> {
        Ok(Arc::clone(&self.snapshot()?.names))
    }

    pub fn surnames(&self) -> Result<Arc<Vocabulary>> {
        Ok(Arc::clone(&self.snapshot()?.surnames))
    }

    pub fn connectors(&self) -> Result<Arc<Vocabulary>> {
        Ok(Arc::clone(&self.snapshot()?.connectors))
    }

    /// Register a new named vocabulary under any string key.
    pub fn create(&self, key: &str, words: Vec<String>) -> Result<()> {
        self.registry.create(key, words)
    }

    /// Replace the words of a registered vocabulary
    pub fn update(&self, key: &str, words: Vec<String>) -> Result<()> {
        self.registry.update(key, words)
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        self.registry.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.registry.contains(key)
    }

    /// Registered keys, sorted
    pub fn registry_keys(&self) -> Vec<String> {
        self.registry.keys()
    }

    /// Scan `text` against the selected vocabulary and the connectors.
    ///
    /// Returns `Ok(None)` when nothing matched.
    pub fn scan(&self, text: &str, selector: &TrieSelector) -> Result<Option<Vec<MatchRecord>>> {
        self.run(text, selector, None)
    }

    /// Like [`scan`](Self::scan), keeping only records accepted by
    /// `predicate`.
    pub fn scan_filtered<F>(
        &self,
        text: &str,
        selector: &TrieSelector,
        predicate: F,
    ) -> Result<Option<Vec<MatchRecord>>>
    where
        F: Fn(&MatchRecord) -> bool,
    {
        self.run(text, selector, Some(&predicate))
    }

    fn run(
        &self,
        text: &str,
        selector: &TrieSelector,
        predicate: Option<&dyn Fn(&MatchRecord) -> bool>,
    ) -> Result<Option<Vec<MatchRecord>>> {
        let canonical = self.snapshot()?;
        let words = match selector {
            TrieSelector::Names => Arc::clone(&canonical.names),
            TrieSelector::Surnames => Arc::clone(&canonical.surnames),
            TrieSelector::Custom(key) => self
                .registry
                .get(key)
                .ok_or_else(|| FinderError::KeyNotFound(key.clone()))?,
        };

        let matcher = Matcher::new(&words, &canonical.connectors, &self.options.separators)
            .with_fold_case(self.options.fold_case);
        Ok(matcher.run(text, predicate))
    }
}
