use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FinderError, LoadErrorKind, Result};

/// Maximum nesting depth for `file:` include directives.
const MAX_INCLUDE_DEPTH: usize = 10;

/// Parse a word list from text.
///
/// One word per line. `#` starts a comment, blank lines are skipped, and
/// `file: /path/to/list.txt` includes another list in place.
pub fn parse_word_list(text: &str) -> Result<Vec<String>> {
    parse_word_list_inner(text, None, 0)
}

/// Parse a word list from a file. Relative includes resolve against the
/// including file's directory.
pub fn parse_word_list_from_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    parse_word_list_from_file_inner(path.as_ref(), 0)
}

/// Parse word-list text read from a file in `base`, resolving relative
/// includes against it.
#[cfg(feature = "async")]
pub(crate) fn parse_word_list_in(text: &str, base: Option<&Path>) -> Result<Vec<String>> {
    parse_word_list_inner(text, base, 0)
}

fn parse_word_list_inner(text: &str, base: Option<&Path>, depth: usize) -> Result<Vec<String>> {
    if depth > MAX_INCLUDE_DEPTH {
        return Err(FinderError::load(
            LoadErrorKind::IncludeDepth,
            format!(
                "file include depth exceeds maximum ({MAX_INCLUDE_DEPTH}), possible circular include"
            ),
        ));
    }

    let mut words = Vec::new();

    for line in text.lines() {
        // Remove comments and trim whitespace
        let line = match line.find('#') {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let line = line.trim();

        if line.is_empty() {
            continue;
        }

        if let Some(path) = line.strip_prefix("file:") {
            let path = resolve_include(path.trim(), base);
            words.extend(parse_word_list_from_file_inner(&path, depth + 1)?);
            continue;
        }

        words.push(line.to_string());
    }

    Ok(words)
}

fn parse_word_list_from_file_inner(path: &Path, depth: usize) -> Result<Vec<String>> {
    let text = fs::read_to_string(path).map_err(|e| {
        FinderError::load(
            LoadErrorKind::FileError,
            format!("Failed to read word list '{}': {}", path.display(), e),
        )
    })?;
    parse_word_list_inner(&text, path.parent(), depth)
}

fn resolve_include(path: &str, base: Option<&Path>) -> PathBuf {
    let path = Path::new(path);
    match base {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}
