use std::collections::HashMap;
use std::hash::Hash;

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// An insertion-ordered grouping: keys keep the order in which they were
/// first seen, values keep their push order within each bucket.
#[derive(Debug, Clone)]
pub struct Buckets<K, V> {
    entries: Vec<(K, Vec<V>)>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> Buckets<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Append `value` to the bucket for `key`, creating it on first sight.
    pub fn push(&mut self, key: K, value: V) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1.push(value),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, vec![value]));
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[V]> {
        self.index.get(key).map(|&i| self.entries[i].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Number of buckets.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of values across every bucket.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, v)| v.len()).sum()
    }

    /// Bucket sizes in key order.
    pub fn counts(&self) -> Vec<(K, usize)> {
        self.entries.iter().map(|(k, v)| (k.clone(), v.len())).collect()
    }

    pub fn into_vec(self) -> Vec<(K, Vec<V>)> {
        self.entries
    }
}

impl<K: Eq + Hash + Clone, V> Default for Buckets<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash + Clone, V> FromIterator<(K, V)> for Buckets<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut buckets = Buckets::new();
        for (k, v) in iter {
            buckets.push(k, v);
        }
        buckets
    }
}

/// Structural equality over the ordered entries.
impl<K: PartialEq, V: PartialEq> PartialEq for Buckets<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

/// Serialises as an ordered array of `{ "key": .., "items": [..] }`.
impl<K: Serialize, V: Serialize> Serialize for Buckets<K, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(serde::Serialize)]
        struct Entry<'a, K, V> {
            key: &'a K,
            items: &'a [V],
        }

        let mut seq = serializer.serialize_seq(Some(self.entries.len()))?;
        for (key, items) in &self.entries {
            seq.serialize_element(&Entry { key, items })?;
        }
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_follow_first_occurrence() {
        let b: Buckets<&str, i32> = [("b", 1), ("a", 2), ("b", 3), ("c", 4)].into_iter().collect();
        assert_eq!(b.keys().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(b.get(&"b"), Some(&[1, 3][..]));
        assert_eq!(b.total(), 4);
        assert_eq!(b.counts(), vec![("b", 2), ("a", 1), ("c", 1)]);
    }

    #[test]
    fn serializes_as_ordered_entries() {
        let b: Buckets<&str, i32> = [("z", 1), ("a", 2)].into_iter().collect();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(json, r#"[{"key":"z","items":[1]},{"key":"a","items":[2]}]"#);
    }
}
