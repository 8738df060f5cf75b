use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load the base-form dictionary: one word per line, blank lines skipped.
/// An empty dictionary is returned as-is; the gate then admits no terms, so
/// callers should warn about it.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading dictionary {}", path.display()))?;
    let dictionary: HashSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    if dictionary.is_empty() {
        tracing::warn!(path = %path.display(), "dictionary file is empty");
    }
    Ok(dictionary)
}

/// Load stopwords from a CSV file, one stopword in the first field of each
/// row. May legitimately be empty (then only punctuation is filtered).
pub fn load_stopwords(path: impl AsRef<Path>) -> Result<HashSet<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading stopwords {}", path.display()))?;
    Ok(content
        .lines()
        .filter_map(|line| line.split(',').next())
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect())
}

/// Read a document's full text. Only `.txt` sources are supported; empty
/// content is a valid zero-term document, not an error.
pub fn read_document(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    match path.extension().and_then(|e| e.to_str()) {
        Some("txt") => {}
        other => bail!(
            "unsupported document format {:?} for {}",
            other.unwrap_or(""),
            path.display()
        ),
    }
    fs::read_to_string(path).with_context(|| format!("reading document {}", path.display()))
}
