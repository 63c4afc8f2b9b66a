//! Insertion-ordered vocabulary with a reserved missing entry.

use std::collections::HashMap;
use std::hash::Hash;

/// Ordered set of distinct categorical values.
///
/// Position 0 is always the missing sentinel; every other entry sits at the
/// position of its first occurrence. Positions are the integer codes.
#[derive(Clone, Debug)]
pub struct Vocabulary<V> {
    entries: Vec<V>,
    index: HashMap<V, usize>,
}

impl<V: Eq + Hash + Clone> Vocabulary<V> {
    /// Build a vocabulary from values, keeping the first occurrence of each.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        let mut vocab = Self {
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for value in values {
            vocab.insert(value);
        }
        vocab
    }

    /// Insert `value` if unseen. Returns its code either way.
    pub fn insert(&mut self, value: V) -> usize {
        if let Some(&code) = self.index.get(&value) {
            return code;
        }
        self.entries.push(value.clone());
        let code = self.entries.len();
        self.index.insert(value, code);
        code
    }

    /// Code of `value`, or `None` if it was never inserted.
    pub fn code_of(&self, value: &V) -> Option<usize> {
        self.index.get(value).copied()
    }

    /// Entry at `code`. `Some(None)` is the missing sentinel.
    pub fn get(&self, code: usize) -> Option<Option<&V>> {
        match code {
            0 => Some(None),
            _ => self.entries.get(code - 1).map(Some),
        }
    }

    /// Number of entries, counting the missing sentinel.
    pub fn len(&self) -> usize {
        self.entries.len() + 1
    }

    /// Always false: the sentinel is always present.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of observed (non-sentinel) values.
    pub fn n_values(&self) -> usize {
        self.entries.len()
    }

    /// Entries in code order, starting with the sentinel as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<&V>> + '_ {
        std::iter::once(None).chain(self.entries.iter().map(Some))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_first_occurrence_order() {
        let vocab = Vocabulary::from_values(["b", "a", "b", "c", "a"]);
        let entries: Vec<Option<&&str>> = vocab.iter().collect();
        assert_eq!(entries, vec![None, Some(&"b"), Some(&"a"), Some(&"c")]);
        assert_eq!(vocab.len(), 4);
        assert_eq!(vocab.n_values(), 3);
    }

    #[test]
    fn test_vocabulary_codes_are_positions() {
        let vocab = Vocabulary::from_values(["x", "y"]);
        assert_eq!(vocab.code_of(&"x"), Some(1));
        assert_eq!(vocab.code_of(&"y"), Some(2));
        assert_eq!(vocab.code_of(&"z"), None);
    }

    #[test]
    fn test_vocabulary_get() {
        let vocab = Vocabulary::from_values([10, 20]);
        assert_eq!(vocab.get(0), Some(None));
        assert_eq!(vocab.get(2), Some(Some(&20)));
        assert_eq!(vocab.get(3), None);
    }

    #[test]
    fn test_vocabulary_insert_existing_keeps_code() {
        let mut vocab = Vocabulary::from_values(["a"]);
        assert_eq!(vocab.insert("b"), 2);
        assert_eq!(vocab.insert("a"), 1);
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn test_vocabulary_empty_has_sentinel() {
        let vocab: Vocabulary<String> = Vocabulary::from_values(Vec::new());
        assert_eq!(vocab.len(), 1);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.get(0), Some(None));
    }
}
