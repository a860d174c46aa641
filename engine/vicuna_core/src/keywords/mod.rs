//! Host-loadable keyword tables.
//!
//! Grammars classify identifier tokens against a handful of word lists
//! (keywords, builtin types, known classes, ...) addressed by a small
//! index. Lists are parsed once from whitespace-separated text and then
//! queried on every identifier exit, so [`WordList::contains`] puts a
//! length check in front of the hash lookup.

use rustc_hash::FxHashSet;

/// One membership set built from whitespace-separated words.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    words: FxHashSet<Box<str>>,
    min_len: usize,
    max_len: usize,
}

impl WordList {
    /// Parse a list from whitespace-separated text. Duplicates collapse.
    pub fn new(words: &str) -> Self {
        let mut set = FxHashSet::default();
        let mut min_len = usize::MAX;
        let mut max_len = 0;
        for word in words.split_ascii_whitespace() {
            min_len = min_len.min(word.len());
            max_len = max_len.max(word.len());
            set.insert(Box::from(word));
        }
        if set.is_empty() {
            min_len = 0;
        }
        Self {
            words: set,
            min_len,
            max_len,
        }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership check with a cheap length pre-check.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        let len = text.len();
        len >= self.min_len && len <= self.max_len && self.words.contains(text)
    }
}

/// Indexed collection of word lists, one slot per keyword class.
///
/// Slots a grammar never loaded answer false for every query.
#[derive(Debug, Default, Clone)]
pub struct KeywordSets {
    lists: Vec<WordList>,
}

impl KeywordSets {
    /// Build from one source string per slot, in slot order.
    pub fn new(lists: &[&str]) -> Self {
        Self {
            lists: lists.iter().map(|words| WordList::new(words)).collect(),
        }
    }

    /// Replace the list in `index`, growing the collection as needed.
    pub fn set(&mut self, index: usize, words: &str) {
        if self.lists.len() <= index {
            self.lists.resize_with(index + 1, WordList::default);
        }
        self.lists[index] = WordList::new(words);
    }

    /// Membership check against slot `index`.
    #[inline]
    pub fn contains(&self, index: usize, text: &str) -> bool {
        self.lists.get(index).is_some_and(|list| list.contains(text))
    }
}
