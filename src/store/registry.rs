use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use parking_lot::{Mutex, RwLock};

use crate::error::{FinderError, Result};
use crate::trie::Vocabulary;

/// Ad-hoc named vocabularies.
///
/// Every mutation runs under one mutex, even for unrelated keys; lookups
/// only take the shared side of the map lock.
pub(crate) struct Registry {
    lists: RwLock<HashMap<String, Arc<Vocabulary>>>,
    write_lock: Mutex<()>,
    fold_case: bool,
}

impl Registry {
    pub(crate) fn new(fold_case: bool) -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
            write_lock: Mutex::new(()),
            fold_case,
        }
    }

    pub(crate) fn create(&self, key: &str, words: Vec<String>) -> Result<()> {
        let _lock = self.write_lock.lock();

        if self.lists.read().contains_key(key) {
            warn!("Rejected word list create: {} already registered", key);
            return Err(FinderError::DuplicateKey(key.to_string()));
        }

        // Build outside the map lock so readers are not blocked
        let vocabulary = Arc::new(Vocabulary::build(words, self.fold_case));
        debug!("Registered word list {} ({} words)", key, vocabulary.len());
        self.lists.write().insert(key.to_string(), vocabulary);
        Ok(())
    }

    pub(crate) fn update(&self, key: &str, words: Vec<String>) -> Result<()> {
        let _lock = self.write_lock.lock();

        if !self.lists.read().contains_key(key) {
            warn!("Rejected word list update: {} not registered", key);
            return Err(FinderError::KeyNotFound(key.to_string()));
        }

        let vocabulary = Arc::new(Vocabulary::build(words, self.fold_case));
        debug!("Updated word list {} ({} words)", key, vocabulary.len());
        self.lists.write().insert(key.to_string(), vocabulary);
        Ok(())
    }

    pub(crate) fn remove(&self, key: &str) -> Result<()> {
        let _lock = self.write_lock.lock();

        match self.lists.write().remove(key) {
            Some(_) => {
                debug!("Removed word list {}", key);
                Ok(())
            }
            None => {
                warn!("Rejected word list remove: {} not registered", key);
                Err(FinderError::KeyNotFound(key.to_string()))
            }
        }
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.lists.read().contains_key(key)
    }

    pub(crate) fn get(&self, key: &str) -> Option<Arc<Vocabulary>> {
        self.lists.read().get(key).cloned()
    }

    /// Registered keys, sorted
    pub(crate) fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.lists.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
