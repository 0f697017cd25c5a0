//! Word-list loaders.
//!
//! A loader supplies the three canonical lists (names, surnames,
//! connectors). The store builds tries from whatever the loader returns.

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "async")]
use async_trait::async_trait;
use log::{debug, warn};

use crate::error::{FinderError, LoadErrorKind, Result};
#[cfg(feature = "async")]
use crate::parser::parse_word_list_in;
use crate::parser::parse_word_list_from_file;

/// Canonical word lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Names,
    Surnames,
    Connectors,
}

impl ListKind {
    pub const ALL: [ListKind; 3] = [ListKind::Names, ListKind::Surnames, ListKind::Connectors];

    /// Get default filename for this list
    pub fn default_filename(&self) -> &'static str {
        match self {
            ListKind::Names => "names.txt",
            ListKind::Surnames => "surnames.txt",
            ListKind::Connectors => "connectors.txt",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ListKind::Names => "names",
            ListKind::Surnames => "surnames",
            ListKind::Connectors => "connectors",
        };
        f.write_str(name)
    }
}

/// Trait for loading canonical word lists
pub trait WordListLoader: Send + Sync {
    /// Load one canonical list
    fn load(&self, kind: ListKind) -> Result<Vec<String>>;
}

/// Async counterpart of [`WordListLoader`]
#[cfg(feature = "async")]
#[async_trait]
pub trait AsyncWordListLoader: Send + Sync {
    /// Load one canonical list
    async fn load(&self, kind: ListKind) -> Result<Vec<String>>;
}

/// File-based loader: one word list file per canonical list
#[derive(Debug, Clone, Default)]
pub struct FileWordListLoader {
    names_path: Option<PathBuf>,
    surnames_path: Option<PathBuf>,
    connectors_path: Option<PathBuf>,
}

impl FileWordListLoader {
    /// Create a new FileWordListLoader
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `names.txt`, `surnames.txt` and `connectors.txt` inside `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            names_path: Some(dir.join(ListKind::Names.default_filename())),
            surnames_path: Some(dir.join(ListKind::Surnames.default_filename())),
            connectors_path: Some(dir.join(ListKind::Connectors.default_filename())),
        }
    }

    /// Set the names file path
    pub fn with_names_path(mut self, path: impl AsRef<Path>) -> Self {
        self.names_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the surnames file path
    pub fn with_surnames_path(mut self, path: impl AsRef<Path>) -> Self {
        self.surnames_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the connectors file path
    pub fn with_connectors_path(mut self, path: impl AsRef<Path>) -> Self {
        self.connectors_path = Some(path.as_ref().to_path_buf());
        self
    }

    fn path_for(&self, kind: ListKind) -> Result<&Path> {
        let path = match kind {
            ListKind::Names => self.names_path.as_deref(),
            ListKind::Surnames => self.surnames_path.as_deref(),
            ListKind::Connectors => self.connectors_path.as_deref(),
        };
        path.ok_or_else(|| {
            FinderError::load(
                LoadErrorKind::NotConfigured,
                format!("{} path not configured", kind),
            )
        })
    }
}

impl WordListLoader for FileWordListLoader {
    fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        let path = self.path_for(kind)?;
        debug!("Loading {} from {}", kind, path.display());
        parse_word_list_from_file(path).inspect_err(|e| warn!("Failed to load {}: {}", kind, e))
    }
}

#[cfg(feature = "async")]
#[async_trait]
impl AsyncWordListLoader for FileWordListLoader {
    async fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        let path = self.path_for(kind)?;
        debug!("Loading {} from {}", kind, path.display());
        let text = tokio::fs::read_to_string(path).await.map_err(|e| {
            warn!("Failed to load {}: {}", kind, e);
            FinderError::load(
                LoadErrorKind::FileError,
                format!("Failed to read word list '{}': {}", path.display(), e),
            )
        })?;

        // `file:` includes are read with blocking IO
        let base = path.parent().map(Path::to_path_buf);
        tokio::task::spawn_blocking(move || parse_word_list_in(&text, base.as_deref()))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    std::panic::resume_unwind(e.into_panic());
                }
                FinderError::load(
                    LoadErrorKind::FileError,
                    format!("Word list parse for {} cancelled: {}", kind, e),
                )
            })?
    }
}

/// Nil loader - returns errors for all lists
pub struct NilWordListLoader;

impl WordListLoader for NilWordListLoader {
    fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        Err(FinderError::load(
            LoadErrorKind::NotConfigured,
            format!("Word lists not available (requested: {})", kind),
        ))
    }
}

/// In-memory loader for testing
#[derive(Debug, Clone, Default)]
pub struct MemoryWordListLoader {
    lists: HashMap<ListKind, Vec<String>>,
}

impl MemoryWordListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_list<I, S>(&mut self, kind: ListKind, words: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lists
            .insert(kind, words.into_iter().map(Into::into).collect());
    }

    pub fn with_list<I, S>(mut self, kind: ListKind, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_list(kind, words);
        self
    }
}

impl WordListLoader for MemoryWordListLoader {
    fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        Ok(self.lists.get(&kind).cloned().unwrap_or_default())
    }
}

#[cfg(feature = "async")]
#[async_trait]
impl AsyncWordListLoader for MemoryWordListLoader {
    async fn load(&self, kind: ListKind) -> Result<Vec<String>> {
        WordListLoader::load(self, kind)
    }
}
