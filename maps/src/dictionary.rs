use std::collections::HashMap;

use crate::error::{DictionaryError, Result};

/// In-memory mapping from word to definition.
///
/// Not synchronised. Wrap it in a lock if it has to be shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: HashMap<String, String>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary {
            entries: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Looks up the definition of `word`.
    ///
    /// Fails with [`DictionaryError::NotFound`] when the word is absent.
    pub fn search(&self, word: &str) -> Result<&str> {
        self.entries
            .get(word)
            .map(String::as_str)
            .ok_or(DictionaryError::NotFound)
    }

    /// Inserts a new word. An existing definition is never overwritten.
    pub fn add(&mut self, word: impl Into<String>, definition: impl Into<String>) -> Result<()> {
        let word = word.into();

        match self.search(&word) {
            Err(DictionaryError::NotFound) => {
                tracing::debug!(word = %word, "adding word");
                self.entries.insert(word, definition.into());
                Ok(())
            }
            Ok(_) => {
                tracing::debug!(word = %word, "word already exists, add rejected");
                Err(DictionaryError::AlreadyExists)
            }
            Err(e) => Err(e),
        }
    }

    /// Replaces the definition of a word that is already present.
    pub fn update(&mut self, word: &str, definition: impl Into<String>) -> Result<()> {
        match self.search(word) {
            Err(DictionaryError::NotFound) => {
                tracing::debug!(word, "word does not exist, update rejected");
                Err(DictionaryError::DoesNotExist)
            }
            Ok(_) => {
                tracing::debug!(word, "updating word");
                self.entries.insert(word.to_string(), definition.into());
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Removes `word`. Removing an absent word is a no-op.
    pub fn delete(&mut self, word: &str) {
        if self.entries.remove(word).is_some() {
            tracing::debug!(word, "deleted word");
        }
    }
}

impl<W, D> FromIterator<(W, D)> for Dictionary
where
    W: Into<String>,
    D: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (W, D)>>(iter: I) -> Self {
        Dictionary {
            entries: iter
                .into_iter()
                .map(|(word, definition)| (word.into(), definition.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn seeded() -> Dictionary {
        Dictionary::from_iter([("test", "this is just a test")])
    }

    #[test]
    fn search_known_word() {
        let dictionary = seeded();
        assert_eq!(dictionary.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn search_unknown_word() {
        let dictionary = seeded();
        assert_eq!(dictionary.search("unknown"), Err(DictionaryError::NotFound));
    }

    #[test]
    fn search_empty_word() {
        let mut dictionary = Dictionary::new();
        assert_eq!(dictionary.search(""), Err(DictionaryError::NotFound));

        dictionary.add("", "nothing at all").unwrap();
        assert_eq!(dictionary.search(""), Ok("nothing at all"));
    }

    #[test]
    fn add_new_word() {
        let mut dictionary = Dictionary::new();
        assert!(dictionary.is_empty());

        dictionary.add("test", "this is just a test").unwrap();

        assert_eq!(dictionary.search("test"), Ok("this is just a test"));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn add_existing_word_keeps_definition() {
        let mut dictionary = seeded();

        let result = dictionary.add("test", "new test");

        assert_eq!(result, Err(DictionaryError::AlreadyExists));
        assert_eq!(dictionary.search("test"), Ok("this is just a test"));
    }

    #[test]
    fn update_existing_word() {
        let mut dictionary = seeded();

        dictionary.update("test", "new definition").unwrap();

        assert_eq!(dictionary.search("test"), Ok("new definition"));
        assert_eq!(dictionary.len(), 1);
    }

    #[test]
    fn update_new_word() {
        let mut dictionary = Dictionary::new();

        let result = dictionary.update("test", "this is just a test");

        assert_eq!(result, Err(DictionaryError::DoesNotExist));
        assert!(dictionary.is_empty());
    }

    #[test]
    fn delete_word() {
        let mut dictionary = seeded();

        dictionary.delete("test");

        assert!(!dictionary.contains("test"));
        assert_eq!(dictionary.search("test"), Err(DictionaryError::NotFound));
    }

    #[test]
    fn delete_absent_word_is_noop() {
        let mut dictionary = seeded();
        let before = dictionary.clone();

        dictionary.delete("unknown");

        assert_eq!(dictionary, before);
    }

    #[test_case(DictionaryError::NotFound => "could not find the word you were looking for" ; "not found")]
    #[test_case(DictionaryError::AlreadyExists => "cannot add word because it already exists" ; "already exists")]
    #[test_case(DictionaryError::DoesNotExist => "cannot update word because it does not exist" ; "does not exist")]
    fn error_messages(err: DictionaryError) -> String {
        err.to_string()
    }

    proptest! {
        #[test]
        fn prop_added_word_is_found(word in ".*", definition in ".*") {
            let mut dictionary = Dictionary::new();
            prop_assert_eq!(dictionary.search(&word), Err(DictionaryError::NotFound));

            prop_assert!(dictionary.add(word.clone(), definition.clone()).is_ok());
            prop_assert_eq!(dictionary.search(&word), Ok(definition.as_str()));
        }

        #[test]
        fn prop_second_add_is_rejected(word in ".*", first in ".*", second in ".*") {
            let mut dictionary = Dictionary::new();
            dictionary.add(word.clone(), first.clone()).unwrap();

            prop_assert_eq!(dictionary.add(word.clone(), second), Err(DictionaryError::AlreadyExists));
            prop_assert_eq!(dictionary.search(&word), Ok(first.as_str()));
        }

        #[test]
        fn prop_update_then_search(word in ".*", first in ".*", second in ".*") {
            let mut dictionary = Dictionary::new();
            prop_assert_eq!(dictionary.update(&word, first.clone()), Err(DictionaryError::DoesNotExist));
            prop_assert!(dictionary.is_empty());

            dictionary.add(word.clone(), first).unwrap();
            prop_assert!(dictionary.update(&word, second.clone()).is_ok());
            prop_assert_eq!(dictionary.search(&word), Ok(second.as_str()));
        }

        #[test]
        fn prop_delete_removes_word(word in ".*", definition in ".*") {
            let mut dictionary = Dictionary::new();
            dictionary.delete(&word);
            prop_assert!(dictionary.is_empty());

            dictionary.add(word.clone(), definition).unwrap();
            dictionary.delete(&word);
            prop_assert_eq!(dictionary.search(&word), Err(DictionaryError::NotFound));
        }
    }
}
