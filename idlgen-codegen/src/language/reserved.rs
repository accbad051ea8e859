//! Reserved-word sets.

use std::{collections::HashSet, sync::Arc};

use super::keywords;

/// The identifiers a target language forbids as user-chosen names.
///
/// Built once per target and never mutated afterwards; clones share the
/// same underlying set.
#[derive(Debug, Clone, Default)]
pub struct ReservedWords {
    words: Arc<HashSet<String>>,
}

impl ReservedWords {
    /// Create a reserved-word set from any list of words.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
        }
    }

    /// A set that reserves nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Rust keywords (strict and reserved).
    pub fn rust() -> Self {
        Self::new(keywords::RUST.iter().copied())
    }

    /// TypeScript keywords.
    pub fn typescript() -> Self {
        Self::new(keywords::TYPESCRIPT.iter().copied())
    }

    /// Go keywords.
    pub fn go() -> Self {
        Self::new(keywords::GO.iter().copied())
    }

    /// Python keywords.
    pub fn python() -> Self {
        Self::new(keywords::PYTHON.iter().copied())
    }

    /// Look up a built-in set by language name.
    pub fn for_language(language: &str) -> Option<Self> {
        match language.to_ascii_lowercase().as_str() {
            "rust" | "rs" => Some(Self::rust()),
            "typescript" | "ts" => Some(Self::typescript()),
            "go" => Some(Self::go()),
            "python" | "py" => Some(Self::python()),
            _ => None,
        }
    }

    /// Check if a name is a reserved word.
    pub fn contains(&self, name: &str) -> bool {
        self.words.contains(name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for ReservedWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_reserved_words() {
        let words = ReservedWords::rust();
        assert!(words.contains("type"));
        assert!(words.contains("async"));
        assert!(words.contains("match"));
        assert!(!words.contains("hello"));
    }

    #[test]
    fn test_typescript_reserved() {
        let words = ReservedWords::typescript();
        assert!(words.contains("class"));
        assert!(words.contains("interface"));
        assert!(!words.contains("Class"));
    }

    #[test]
    fn test_python_reserved() {
        let words = ReservedWords::python();
        assert!(words.contains("lambda"));
        assert!(words.contains("None"));
    }

    #[test]
    fn test_for_language() {
        assert!(ReservedWords::for_language("rs").unwrap().contains("fn"));
        assert!(ReservedWords::for_language("Go").unwrap().contains("chan"));
        assert!(ReservedWords::for_language("cobol").is_none());
    }

    #[test]
    fn test_empty_and_collect() {
        assert!(ReservedWords::empty().is_empty());

        let words: ReservedWords = ["class", "def"].into_iter().collect();
        assert_eq!(words.len(), 2);
        assert!(words.contains("def"));
    }

    #[test]
    fn test_clones_share_the_set() {
        let words = ReservedWords::go();
        let clone = words.clone();
        assert!(Arc::ptr_eq(&words.words, &clone.words));
    }
}
