//! One trie per sibling collection, split into a build phase and a query phase.
//!
//! [`SearchIndexBuilder`] accepts registrations; [`SearchIndexBuilder::seal`]
//! consumes it and hands back a read-only [`SearchIndex`] that can be shared
//! between any number of input machines.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::IndexError;
use crate::trie::UnitTrie;
use crate::unit::SearchableUnit;

/// Handle of a registered sibling collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollectionId(u32);

impl CollectionId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for CollectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

#[derive(Debug)]
pub struct SearchIndexBuilder<K, T> {
    tries: Vec<UnitTrie<T>>,
    keys: HashMap<K, CollectionId>,
}

impl<K, T> Default for SearchIndexBuilder<K, T>
where
    K: Eq + Hash + fmt::Debug,
    T: Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, T> SearchIndexBuilder<K, T>
where
    K: Eq + Hash + fmt::Debug,
    T: Copy,
{
    pub fn new() -> Self {
        SearchIndexBuilder {
            tries: Vec::new(),
            keys: HashMap::new(),
        }
    }

    /// Builds a trie over `units` and files it under `key`.
    ///
    /// Fails if `key` is already taken or if two members fold to the same name.
    pub fn register<'a, U, I>(&mut self, key: K, units: I) -> Result<CollectionId, IndexError>
    where
        U: SearchableUnit + ?Sized + 'a,
        I: IntoIterator<Item = (&'a U, T)>,
    {
        if self.keys.contains_key(&key) {
            return Err(IndexError::AlreadyRegistered {
                collection: format!("{key:?}"),
            });
        }

        let mut trie = UnitTrie::create_root();
        let mut members = 0usize;
        for (unit, handle) in units {
            if trie.populate(unit, handle).is_some() {
                return Err(IndexError::DuplicateName {
                    collection: format!("{key:?}"),
                    name: unit.name().to_string(),
                });
            }
            members += 1;
        }

        let id = CollectionId(self.tries.len() as u32);
        debug!(collection = %id, key = ?key, members, nodes = trie.node_count(), "registered collection");
        self.tries.push(trie);
        self.keys.insert(key, id);
        Ok(id)
    }

    pub fn collection(&self, key: &K) -> Option<CollectionId> {
        self.keys.get(key).copied()
    }

    /// Ends the build phase. No registration is possible afterwards.
    pub fn seal(self) -> SearchIndex<K, T> {
        debug!(collections = self.tries.len(), "search index sealed");
        SearchIndex {
            tries: self.tries,
            keys: self.keys,
        }
    }
}

/// Immutable, query-only index.
#[derive(Debug)]
pub struct SearchIndex<K, T> {
    tries: Vec<UnitTrie<T>>,
    keys: HashMap<K, CollectionId>,
}

impl<K, T> SearchIndex<K, T>
where
    K: Eq + Hash,
    T: Copy,
{
    pub fn collection(&self, key: &K) -> Option<CollectionId> {
        self.keys.get(key).copied()
    }

    /// Number of registered collections.
    pub fn collection_count(&self) -> usize {
        self.tries.len()
    }

    /// Every visible unit of `collection` whose name starts with `wildcard`.
    /// An empty wildcard lists the whole collection.
    pub fn find_by_prefix(&self, collection: CollectionId, wildcard: &str) -> Result<Matches<T>, IndexError> {
        let trie = self
            .tries
            .get(collection.index())
            .ok_or(IndexError::NotRegistered { collection })?;
        let units = match trie.descend(wildcard) {
            Some(node) => trie.collect_terminals(node),
            None => Vec::new(),
        };
        Ok(Matches { units })
    }
}

/// Ordered result of a prefix lookup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Matches<T> {
    units: Vec<T>,
}

impl<T: Copy> Matches<T> {
    /// 0 means no match, 1 a unique match, more an ambiguous one.
    pub fn count(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn first(&self) -> Option<T> {
        self.units.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.units.iter().copied()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.units
    }
}

impl<T> IntoIterator for Matches<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.units.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::UnitId;

    struct Named(&'static str, bool);

    impl SearchableUnit for Named {
        fn name(&self) -> &str {
            self.0
        }
        fn is_hidden(&self) -> bool {
            self.1
        }
        fn is_parameter(&self) -> bool {
            false
        }
        fn sub_units(&self) -> &[UnitId] {
            &[]
        }
    }

    const SAMPLE: [&str; 7] = ["test", "try", "triff", "teck", "super", "slut", "slick"];

    fn sample_units() -> Vec<Named> {
        SAMPLE.iter().map(|&n| Named(n, false)).collect()
    }

    fn sample_index() -> (SearchIndex<&'static str, usize>, CollectionId) {
        let units = sample_units();
        let mut b = SearchIndexBuilder::new();
        let id = b
            .register("spaces", units.iter().enumerate().map(|(i, u)| (u, i)))
            .unwrap();
        (b.seal(), id)
    }

    fn names(m: &Matches<usize>) -> Vec<&'static str> {
        m.iter().map(|i| SAMPLE[i]).collect()
    }

    #[test]
    fn prefix_lookup_sample_collection() {
        let (idx, id) = sample_index();
        let te = idx.find_by_prefix(id, "te").unwrap();
        assert_eq!(te.count(), 2);
        assert_eq!(names(&te), vec!["test", "teck"]);

        let all = idx.find_by_prefix(id, "").unwrap();
        assert_eq!(all.count(), 7);

        let none = idx.find_by_prefix(id, "zz").unwrap();
        assert_eq!(none.count(), 0);
        assert!(none.is_empty());
    }

    #[test]
    fn every_prefix_of_a_name_finds_it() {
        let (idx, id) = sample_index();
        for (i, name) in SAMPLE.iter().enumerate() {
            for k in 0..=name.len() {
                let m = idx.find_by_prefix(id, &name[..k]).unwrap();
                assert!(m.iter().any(|u| u == i), "{name} missing for prefix {:?}", &name[..k]);
            }
        }
    }

    #[test]
    fn hidden_units_never_match() {
        let units = [Named("status", false), Named("stash", true)];
        let mut b = SearchIndexBuilder::new();
        let id = b.register(0u8, units.iter().zip(0usize..)).unwrap();
        let idx = b.seal();
        for prefix in ["", "s", "st", "sta", "stas", "stash"] {
            let m = idx.find_by_prefix(id, prefix).unwrap();
            assert!(m.iter().all(|u| u != 1), "hidden unit matched {prefix:?}");
        }
    }

    #[test]
    fn registering_a_key_twice_fails() {
        let units = sample_units();
        let mut b: SearchIndexBuilder<&str, usize> = SearchIndexBuilder::new();
        b.register("spaces", units.iter().zip(0usize..)).unwrap();
        let err = b.register("spaces", units.iter().zip(0usize..)).unwrap_err();
        assert!(matches!(err, IndexError::AlreadyRegistered { .. }));
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let units = [Named("Run", false), Named("run", false)];
        let mut b: SearchIndexBuilder<&str, usize> = SearchIndexBuilder::new();
        let err = b.register("cmds", units.iter().zip(0usize..)).unwrap_err();
        assert_eq!(
            err,
            IndexError::DuplicateName {
                collection: "\"cmds\"".to_string(),
                name: "run".to_string(),
            }
        );
        assert!(b.collection(&"cmds").is_none());
    }

    #[test]
    fn lookup_of_unknown_collection_fails() {
        let (idx, _) = sample_index();
        let err = idx.find_by_prefix(CollectionId(42), "t").unwrap_err();
        assert_eq!(
            err,
            IndexError::NotRegistered {
                collection: CollectionId(42)
            }
        );
    }

    #[test]
    fn sealed_index_resolves_keys_and_is_shareable() {
        fn assert_sync<S: Send + Sync>(_: &S) {}
        let (idx, id) = sample_index();
        assert_sync(&idx);
        assert_eq!(idx.collection(&"spaces"), Some(id));
        assert_eq!(idx.collection(&"other"), None);
        assert_eq!(idx.collection_count(), 1);
    }
}
