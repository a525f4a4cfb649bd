use std::{
    borrow::Borrow,
    collections::{hash_map::RandomState, HashMap},
    fmt::{self, Debug},
    hash::{BuildHasher, Hash},
    slice,
};

/// Guarantees iteration in insertion order.
/// Replacing the value of an existing key keeps that key at its original position.
pub struct OrderedHashMap<K, V, S = RandomState> {
    inner: HashMap<K, V, S>,
    insertion_order: Vec<K>,
}
impl<K: Eq + Hash + Clone, V, S: BuildHasher> OrderedHashMap<K, V, S> {
    pub fn iter(&self) -> OrderedHashMapIter<K, V, S> {
        OrderedHashMapIter {
            inner: &self.inner,
            key_iter: self.insertion_order.iter(),
        }
    }

    pub fn keys(&self) -> slice::Iter<K> {
        self.insertion_order.iter()
    }

    /// Inserts a value, returning the value it replaced, if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let previous = self.inner.insert(key.clone(), value);
        if previous.is_none() {
            self.insertion_order.push(key);
        }
        previous
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.inner.get(key)
    }

    pub fn len(&self) -> usize {
        self.insertion_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.insertion_order.is_empty()
    }
}
impl<K, V, S: BuildHasher + Default> Default for OrderedHashMap<K, V, S> {
    fn default() -> Self {
        Self {
            inner: Default::default(),
            insertion_order: Default::default(),
        }
    }
}
impl<K: Eq + Hash + Clone + Debug, V: Debug, S: BuildHasher> Debug for OrderedHashMap<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

pub struct OrderedHashMapIter<'k, K, V, S> {
    inner: &'k HashMap<K, V, S>,
    key_iter: slice::Iter<'k, K>,
}

impl<'k, K: Eq + Hash, V, S: BuildHasher> Iterator for OrderedHashMapIter<'k, K, V, S> {
    type Item = (&'k K, &'k V);

    fn next(&mut self) -> Option<Self::Item> {
        self.key_iter
            .next()
            .and_then(|k| self.inner.get_key_value(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iterates_in_insertion_order() {
        let mut map: OrderedHashMap<String, u32> = Default::default();
        map.insert("c".to_string(), 1);
        map.insert("a".to_string(), 2);
        map.insert("b".to_string(), 3);

        let keys: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["c", "a", "b"]);
    }

    #[test]
    fn replacing_keeps_original_position() {
        let mut map: OrderedHashMap<String, u32> = Default::default();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);

        assert_eq!(map.insert("a".to_string(), 3), Some(1));
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&3));

        let entries: Vec<(&String, &u32)> = map.iter().collect();
        assert_eq!(*entries[0].1, 3);
        assert_eq!(entries[1].0, "b");
    }
}
