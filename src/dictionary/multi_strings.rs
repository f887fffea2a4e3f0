//! Provides `MultiStringsDictionary`, a mapping from keys to sets of unique members.
//!
//! Enumeration follows insertion order: keys in the order they were first added,
//! members in the order they were added to their key. Removals keep the relative
//! order of whatever remains.

use crate::error::DictionaryError;
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

/// The set of members stored under one key.
pub type MemberSet = IndexSet<String>;

/// A dictionary where each key holds a non-empty set of string members.
///
/// A key is present exactly as long as it has at least one member: removing
/// the last member of a key removes the key too.
///
/// Equality compares contents only, so two dictionaries built in a different
/// order are still equal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiStringsDictionary {
    map: IndexMap<String, MemberSet>,
}

impl MultiStringsDictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `member` to the set under `key`, creating the key if needed.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::MemberAlreadyExists` if the key already holds
    /// this member. The dictionary is left unchanged in that case.
    pub fn add(&mut self, key: &str, member: &str) -> Result<(), DictionaryError> {
        if let Some(members) = self.map.get_mut(key) {
            if !members.insert(member.to_owned()) {
                return Err(DictionaryError::MemberAlreadyExists {
                    key: key.to_owned(),
                    member: member.to_owned(),
                });
            }
        } else {
            let mut members = MemberSet::new();
            members.insert(member.to_owned());
            self.map.insert(key.to_owned(), members);
        }
        trace!(key, member, "member added");
        Ok(())
    }

    /// Returns the members stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::KeyNotFound` if the key is absent.
    pub fn members(&self, key: &str) -> Result<&MemberSet, DictionaryError> {
        self.map.get(key).ok_or_else(|| key_not_found(key))
    }

    /// Removes `member` from `key`. Drops the key once its set is empty.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::KeyNotFound` if the key is absent, and
    /// `DictionaryError::MemberNotFound` if the key does not hold the member.
    pub fn remove_member(&mut self, key: &str, member: &str) -> Result<(), DictionaryError> {
        let members = self.map.get_mut(key).ok_or_else(|| key_not_found(key))?;
        if !members.shift_remove(member) {
            return Err(DictionaryError::MemberNotFound {
                key: key.to_owned(),
                member: member.to_owned(),
            });
        }
        if members.is_empty() {
            self.map.shift_remove(key);
            trace!(key, "last member removed, key dropped");
        }
        Ok(())
    }

    /// Removes `key` together with all of its members and returns them.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::KeyNotFound` if the key is absent.
    pub fn remove_all_members(&mut self, key: &str) -> Result<MemberSet, DictionaryError> {
        self.map.shift_remove(key).ok_or_else(|| key_not_found(key))
    }

    /// Removes every key and member.
    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn key_exists(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Reports whether `key` holds `member`.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::KeyNotFound` if the key is absent.
    pub fn member_exists(&self, key: &str, member: &str) -> Result<bool, DictionaryError> {
        Ok(self.members(key)?.contains(member))
    }

    /// All keys, in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    /// The member set of every key, one per key, in key order.
    pub fn all_members(&self) -> impl ExactSizeIterator<Item = &MemberSet> + '_ {
        self.map.values()
    }

    /// One `"key: member"` string per pair, grouped by key.
    pub fn items(&self) -> Vec<String> {
        self.map
            .iter()
            .flat_map(|(key, members)| members.iter().map(move |m| format!("{key}: {m}")))
            .collect()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Number of (key, member) pairs across the whole dictionary.
    pub fn member_count(&self) -> usize {
        self.map.values().map(IndexSet::len).sum()
    }
}

fn key_not_found(key: &str) -> DictionaryError {
    DictionaryError::KeyNotFound {
        key: key.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dict_with(pairs: &[(&str, &str)]) -> MultiStringsDictionary {
        let mut dict = MultiStringsDictionary::new();
        for (key, member) in pairs {
            dict.add(key, member).unwrap();
        }
        dict
    }

    fn members_of(dict: &MultiStringsDictionary, key: &str) -> Vec<String> {
        dict.members(key).unwrap().iter().cloned().collect()
    }

    #[test]
    fn test_add_new_key_and_member() {
        let mut dict = MultiStringsDictionary::new();
        assert!(dict.add("key1", "value1").is_ok());
        assert!(dict.key_exists("key1"));
        assert_eq!(dict.member_exists("key1", "value1"), Ok(true));
    }

    #[test]
    fn test_add_existing_member_fails_and_keeps_one_copy() {
        let mut dict = dict_with(&[("key2", "value2")]);

        let err = dict.add("key2", "value2").unwrap_err();
        assert_eq!(
            err,
            DictionaryError::MemberAlreadyExists {
                key: "key2".into(),
                member: "value2".into()
            }
        );
        assert_eq!(err.to_string(), "Error, member already exists for key.");
        assert_eq!(dict.len(), 1);
        assert_eq!(members_of(&dict, "key2"), vec!["value2"]);
    }

    #[test]
    fn test_same_member_under_different_keys() {
        let dict = dict_with(&[("a", "v"), ("b", "v")]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.member_count(), 2);
    }

    #[test]
    fn test_empty_strings_are_valid() {
        let mut dict = MultiStringsDictionary::new();
        dict.add("", "").unwrap();
        assert!(dict.key_exists(""));
        assert_eq!(dict.member_exists("", ""), Ok(true));
        assert_eq!(dict.items(), vec![": "]);
    }

    #[test]
    fn test_members_missing_key() {
        let dict = MultiStringsDictionary::new();
        let err = dict.members("nope").unwrap_err();
        assert_eq!(err.to_string(), "Error, key does not exist.");
    }

    #[test]
    fn test_members_in_insertion_order() {
        let dict = dict_with(&[("k", "v2"), ("k", "v1"), ("k", "v3")]);
        assert_eq!(members_of(&dict, "k"), vec!["v2", "v1", "v3"]);
    }

    #[test]
    fn test_remove_member_walkthrough() {
        let mut dict = dict_with(&[("k", "v1"), ("k", "v2")]);
        assert_eq!(members_of(&dict, "k"), vec!["v1", "v2"]);

        dict.remove_member("k", "v1").unwrap();
        assert_eq!(members_of(&dict, "k"), vec!["v2"]);

        dict.remove_member("k", "v2").unwrap();
        assert!(!dict.key_exists("k"));
        assert!(dict.is_empty());
    }

    #[test]
    fn test_remove_member_missing_key() {
        let mut dict = MultiStringsDictionary::new();
        assert_eq!(
            dict.remove_member("k", "v"),
            Err(DictionaryError::KeyNotFound { key: "k".into() })
        );
    }

    #[test]
    fn test_remove_member_missing_member() {
        let mut dict = dict_with(&[("k", "v1")]);
        let err = dict.remove_member("k", "v2").unwrap_err();
        assert_eq!(err.to_string(), "Error, member does not exist.");
        assert_eq!(members_of(&dict, "k"), vec!["v1"]);
    }

    #[test]
    fn test_remove_member_keeps_order_of_the_rest() {
        let mut dict = dict_with(&[("k", "a"), ("k", "b"), ("k", "c"), ("x", "1"), ("y", "1")]);
        dict.remove_member("k", "b").unwrap();
        assert_eq!(members_of(&dict, "k"), vec!["a", "c"]);

        dict.remove_member("x", "1").unwrap();
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["k", "y"]);
    }

    #[test]
    fn test_remove_all_members() {
        let mut dict = dict_with(&[("k", "v1"), ("k", "v2"), ("other", "v")]);
        let removed = dict.remove_all_members("k").unwrap();
        assert_eq!(removed.len(), 2);
        assert!(!dict.key_exists("k"));
        assert!(dict.key_exists("other"));
    }

    #[test]
    fn test_remove_all_members_missing_key() {
        let mut dict = dict_with(&[("k", "v")]);
        assert_eq!(
            dict.remove_all_members("nope"),
            Err(DictionaryError::KeyNotFound { key: "nope".into() })
        );
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut dict = dict_with(&[("a", "1"), ("a", "2"), ("b", "1")]);
        dict.clear();
        assert_eq!(dict.keys().count(), 0);
        assert!(dict.items().is_empty());
        dict.clear();
        assert!(dict.is_empty());
    }

    #[test]
    fn test_member_exists() {
        let dict = dict_with(&[("k", "v")]);
        assert_eq!(dict.member_exists("k", "v"), Ok(true));
        assert_eq!(dict.member_exists("k", "w"), Ok(false));
        assert_eq!(
            dict.member_exists("nope", "v"),
            Err(DictionaryError::KeyNotFound { key: "nope".into() })
        );
    }

    #[test]
    fn test_add_then_member_exists_for_many_pairs() {
        let mut dict = MultiStringsDictionary::new();
        for k in 0..10 {
            for v in 0..5 {
                let (key, member) = (format!("key{k}"), format!("value{v}"));
                dict.add(&key, &member).unwrap();
                assert_eq!(dict.member_exists(&key, &member), Ok(true));
            }
        }
        assert_eq!(dict.len(), 10);
        assert_eq!(dict.member_count(), 50);
    }

    #[test]
    fn test_keys_and_all_members() {
        let dict = dict_with(&[("b", "1"), ("a", "2"), ("b", "3")]);
        assert_eq!(dict.keys().collect::<Vec<_>>(), vec!["b", "a"]);

        let sets: Vec<Vec<&str>> = dict
            .all_members()
            .map(|set| set.iter().map(String::as_str).collect())
            .collect();
        assert_eq!(sets, vec![vec!["1", "3"], vec!["2"]]);
    }

    #[test]
    fn test_items_grouped_by_key() {
        let dict = dict_with(&[("b", "1"), ("a", "2"), ("b", "3")]);
        assert_eq!(dict.items(), vec!["b: 1", "b: 3", "a: 2"]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let left = dict_with(&[("a", "1"), ("a", "2"), ("b", "x")]);
        let right = dict_with(&[("b", "x"), ("a", "2"), ("a", "1")]);
        assert_eq!(left, right);

        let different = dict_with(&[("a", "1")]);
        assert_ne!(left, different);
    }
}
