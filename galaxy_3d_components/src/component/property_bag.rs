/// Ordered, free-form mapping of field name to value.
///
/// Used both as construction options for a material and as the live
/// `props` input of a material component. Insertion order is preserved;
/// re-inserting an existing key replaces the value in its original position.

use rustc_hash::FxHashMap;
use crate::graphics::PropValue;

/// Ordered field name → value map
#[derive(Debug, Clone, Default)]
pub struct PropertyBag {
    entries: Vec<(String, PropValue)>,
    index: FxHashMap<String, usize>,
}

impl PropertyBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Option<PropValue> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&PropValue> {
        let position = self.index.get(key)?;
        self.entries.get(*position).map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Remove a key, keeping the order of the remaining entries
    pub fn remove(&mut self, key: &str) -> Option<PropValue> {
        let position = self.index.remove(key)?;
        let (_, value) = self.entries.remove(position);
        for (i, (name, _)) in self.entries.iter().enumerate().skip(position) {
            self.index.insert(name.clone(), i);
        }
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// `base` overlaid with `self`: entries of `self` win on name clashes
    pub fn merged_over(&self, base: &PropertyBag) -> PropertyBag {
        let mut merged = base.clone();
        for (key, value) in self.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }

    /// Entries of `self` that are new or differ from `previous`, in order
    pub fn changes_from<'a>(&'a self, previous: &PropertyBag) -> Vec<(&'a str, &'a PropValue)> {
        self.iter()
            .filter(|(key, value)| previous.get(key) != Some(*value))
            .collect()
    }

    /// Keys present in `previous` but absent from `self`
    pub fn removed_from<'a>(&self, previous: &'a PropertyBag) -> Vec<&'a str> {
        previous.keys().filter(|key| !self.contains_key(key)).collect()
    }
}

impl PartialEq for PropertyBag {
    /// Same keys with equal values, in any order
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyBag
where
    K: Into<String>,
    V: Into<PropValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = PropertyBag::new();
        for (key, value) in iter {
            bag.insert(key, value);
        }
        bag
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "property_bag_tests.rs"]
mod tests;
