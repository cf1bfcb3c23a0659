//! The key-ordered compound type.
//!
//! [`Compound`] wraps an [`IndexMap`] so iteration follows insertion order,
//! while serialization sorts keys case-insensitively (when enabled), so the
//! stored order never leaks into the output. Keys are validated on insertion
//! against the game's key grammar, `[A-Za-z0-9_:]+`.
//!
//! ## Why IndexMap?
//!
//! - **Deterministic output**: with key sorting off, entries serialize in the
//!   order they were written
//! - **Stable iteration**: tests and diffs see a predictable order
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{Compound, Value};
//!
//! let mut nbt = Compound::new();
//! nbt.insert("CustomNameVisible", true)?;
//! nbt.insert("Health", 20)?;
//!
//! // Auto-vivification: a missing key grows an empty compound.
//! nbt.get_compound_mut("display")?.insert("Name", "Fred")?;
//!
//! assert_eq!(
//!     nbt.to_string(),
//!     "{CustomNameVisible: true, display: {Name: Fred}, Health: 20}"
//! );
//! # Ok::<(), snbt::Error>(())
//! ```

use crate::{Error, Result, Value};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static KEY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_:]+$").unwrap());

/// Checks a compound key against the game's key grammar.
///
/// # Errors
///
/// Returns [`Error::InvalidKey`] when the key does not match
/// `[A-Za-z0-9_:]+`.
///
/// # Examples
///
/// ```rust
/// use snbt::compound::good_key;
///
/// assert!(good_key("CustomName").is_ok());
/// assert!(good_key("minecraft:dyed_color").is_ok());
/// assert!(good_key("k-ey").is_err());
/// assert!(good_key("").is_err());
/// ```
pub fn good_key(key: &str) -> Result<&str> {
    if KEY_RE.is_match(key) {
        Ok(key)
    } else {
        Err(Error::invalid_key(key))
    }
}

/// An ordered map of NBT keys to [`Value`]s.
///
/// Cloning performs a full deep copy; [`merge`] always materializes fresh
/// nested values, so two independently-held trees never alias.
///
/// [`merge`]: Compound::merge
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Compound(IndexMap<String, Value>);

impl Compound {
    /// Creates an empty `Compound`.
    #[must_use]
    pub fn new() -> Self {
        Compound(IndexMap::new())
    }

    /// Creates an empty `Compound` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Compound(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] when the key fails the `[A-Za-z0-9_:]+` check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Compound;
    ///
    /// let mut nbt = Compound::new();
    /// assert!(nbt.insert("key", 42)?.is_none());
    /// assert!(nbt.insert("key", 43)?.is_some());
    /// # Ok::<(), snbt::Error>(())
    /// ```
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<Option<Value>> {
        let key = key.into();
        good_key(&key)?;
        Ok(self.0.insert(key, value.into()))
    }

    /// Returns a reference to the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Returns a mutable reference to the value for `key`, if present.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Removes `key`, returning its value if it was present.
    ///
    /// Uses `shift_remove` so the relative order of the remaining entries is
    /// preserved.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Returns `true` if the compound contains `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the compound has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Value> {
        self.0.values()
    }

    /// Returns an iterator over the entries, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.0.iter()
    }

    /// Returns the compound under `key`, inserting an empty one first if the
    /// key is missing.
    ///
    /// This is the auto-vivification point: chained nested writes go through
    /// here, and every mutation it performs is visible in the signature.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] for a bad key, [`Error::WrongType`] when the key
    /// already holds a non-compound value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Compound;
    ///
    /// let mut nbt = Compound::new();
    /// nbt.get_compound_mut("a")?.insert("b", 1)?;
    /// assert_eq!(nbt.to_string(), "{a: {b: 1}}");
    /// # Ok::<(), snbt::Error>(())
    /// ```
    pub fn get_compound_mut(&mut self, key: &str) -> Result<&mut Compound> {
        good_key(key)?;
        let slot = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| Value::Compound(Compound::new()));
        match slot {
            Value::Compound(nbt) => Ok(nbt),
            _ => Err(Error::wrong_type(key, "compound")),
        }
    }

    /// Returns the list under `key`, inserting an empty one first if the key
    /// is missing.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] for a bad key, [`Error::WrongType`] when the key
    /// already holds a non-list value.
    pub fn get_list_mut(&mut self, key: &str) -> Result<&mut Vec<Value>> {
        good_key(key)?;
        let slot = self
            .0
            .entry(key.to_string())
            .or_insert_with(|| Value::List(Vec::new()));
        match slot {
            Value::List(list) => Ok(list),
            _ => Err(Error::wrong_type(key, "list")),
        }
    }

    /// Sets or removes the value at a dotted path.
    ///
    /// Navigates nested compounds along `path`, creating intermediates as
    /// needed. A value of [`Value::Null`] or `false` removes the leaf key;
    /// intermediate compounds are left in place even if they end up empty.
    /// Anything else sets the leaf.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] for a bad path segment, [`Error::WrongType`]
    /// when an intermediate segment holds a non-compound value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::{Compound, Value};
    ///
    /// let mut nbt = Compound::new();
    /// nbt.set_or_clear("o1.o2.key", true)?;
    /// assert_eq!(nbt.to_string(), "{o1: {o2: {key: true}}}");
    ///
    /// nbt.set_or_clear("o1.o2.key", false)?;
    /// assert_eq!(nbt.to_string(), "{o1: {o2: {}}}");
    /// # Ok::<(), snbt::Error>(())
    /// ```
    pub fn set_or_clear(&mut self, path: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let value = value.into();
        let mut segments = path.split('.').collect::<Vec<_>>();
        let leaf = match segments.pop() {
            Some(leaf) => leaf,
            None => return Err(Error::invalid_key(path)),
        };
        good_key(leaf)?;

        let mut target = &mut *self;
        for segment in segments {
            target = target.get_compound_mut(segment)?;
        }
        match value {
            Value::Null | Value::Bool(false) => {
                target.remove(leaf);
            }
            value => {
                target.insert(leaf, value)?;
            }
        }
        Ok(self)
    }

    /// Merges another compound into this one, returning a new compound.
    ///
    /// Keys present only in `other` are added; keys present in both where
    /// both values are compounds merge recursively; otherwise the incoming
    /// value replaces the existing one. Lists replace wholesale, never
    /// element-wise. Neither input is mutated, and the result shares no
    /// storage with either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::{nbt_compound, Compound};
    ///
    /// let base = nbt_compound!({"key": 1, "sub": {"a": 1}});
    /// let incoming = nbt_compound!({"key2": 2, "sub": {"b": 2}});
    ///
    /// let merged = base.merge(&incoming);
    /// assert_eq!(merged.to_string(), "{key: 1, key2: 2, sub: {a: 1, b: 2}}");
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Compound) -> Compound {
        let mut result = self.clone();
        for (key, incoming) in other.iter() {
            match (result.0.get_mut(key), incoming) {
                (Some(Value::Compound(existing)), Value::Compound(src)) => {
                    *existing = existing.merge(src);
                }
                (Some(slot), _) => *slot = incoming.clone(),
                (None, _) => {
                    // Key already passed validation when `other` was built.
                    result.0.insert(key.clone(), incoming.clone());
                }
            }
        }
        result
    }

    /// Builds a compound from key-value pairs, validating each key.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidKey`] for the first key that fails validation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::{Compound, Value};
    ///
    /// let nbt = Compound::from_pairs([("a", Value::Int(1)), ("b", Value::Int(2))])?;
    /// assert_eq!(nbt.len(), 2);
    /// # Ok::<(), snbt::Error>(())
    /// ```
    pub fn from_pairs<K, V, I>(pairs: I) -> Result<Self>
    where
        K: Into<String>,
        V: Into<Value>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut nbt = Compound::new();
        for (key, value) in pairs {
            nbt.insert(key, value)?;
        }
        Ok(nbt)
    }
}

impl fmt::Display for Compound {
    /// Writes the compound as SNBT text with default options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let options = crate::SnbtOptions::default();
        write!(
            f,
            "{}",
            crate::ser::to_string_with_options(&Value::Compound(self.clone()), &options)
        )
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Compound {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de;
        match Value::deserialize(deserializer)? {
            Value::Compound(nbt) => Ok(nbt),
            other => Err(de::Error::custom(format!(
                "expected a compound, found {other:?}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_validation() {
        let mut nbt = Compound::new();
        assert!(nbt.insert("good_key", 1).is_ok());
        assert!(nbt.insert("Namespaced:key", 1).is_ok());
        assert!(matches!(
            nbt.insert("k-ey", 13),
            Err(Error::InvalidKey { .. })
        ));
        assert!(matches!(nbt.insert("", 1), Err(Error::InvalidKey { .. })));
        assert!(matches!(
            nbt.insert("spa ce", 1),
            Err(Error::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_auto_vivification() {
        let mut nbt = Compound::new();
        assert!(nbt.get_compound_mut("missing").unwrap().is_empty());
        // Auto-created compounds persist.
        assert!(nbt.contains_key("missing"));
        assert_eq!(
            nbt.get("missing"),
            Some(&Value::Compound(Compound::new()))
        );
    }

    #[test]
    fn test_auto_vivification_wrong_type() {
        let mut nbt = Compound::new();
        nbt.insert("key", 1).unwrap();
        assert!(matches!(
            nbt.get_compound_mut("key"),
            Err(Error::WrongType { .. })
        ));
        assert!(matches!(
            nbt.get_list_mut("key"),
            Err(Error::WrongType { .. })
        ));
    }

    #[test]
    fn test_get_list_mut() {
        let mut nbt = Compound::new();
        assert!(nbt.get_list_mut("key").unwrap().is_empty());
        nbt.get_list_mut("key").unwrap().push(Value::Int(1));
        assert_eq!(
            nbt.get("key"),
            Some(&Value::List(vec![Value::Int(1)]))
        );
    }

    #[test]
    fn test_set_or_clear() {
        let mut nbt = Compound::new();
        nbt.set_or_clear("key", 12).unwrap();
        assert_eq!(nbt.get("key"), Some(&Value::Int(12)));

        nbt.set_or_clear("key", Value::Null).unwrap();
        assert!(!nbt.contains_key("key"));

        nbt.set_or_clear("o1.o2.o3.key", true).unwrap();
        assert_eq!(nbt.to_string(), "{o1: {o2: {o3: {key: true}}}}");

        // Clearing the leaf keeps the intermediate compounds.
        nbt.set_or_clear("o1.o2.o3.key", false).unwrap();
        assert_eq!(nbt.to_string(), "{o1: {o2: {o3: {}}}}");
    }

    #[test]
    fn test_set_or_clear_chains() {
        let mut nbt = Compound::new();
        nbt.set_or_clear("stats.deaths", 3)
            .unwrap()
            .set_or_clear("OnGround", true)
            .unwrap();
        assert_eq!(nbt.to_string(), "{OnGround: true, stats: {deaths: 3}}");
    }

    #[test]
    fn test_set_or_clear_bad_path() {
        let mut nbt = Compound::new();
        assert!(nbt.set_or_clear("bad-seg.key", 1).is_err());
        assert!(nbt.set_or_clear("", 1).is_err());
    }

    #[test]
    fn test_merge_basics() {
        let a = Compound::from_pairs([("key", 1)]).unwrap();
        let b = Compound::from_pairs([("key2", 2)]).unwrap();
        assert_eq!(
            Compound::new().merge(&a),
            Compound::from_pairs([("key", 1)]).unwrap()
        );
        assert_eq!(a.merge(&Compound::new()), a);
        let merged = a.merge(&b);
        assert_eq!(merged.get("key"), Some(&Value::Int(1)));
        assert_eq!(merged.get("key2"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_merge_incoming_wins() {
        let a = Compound::from_pairs([("key", 1)]).unwrap();
        let b = Compound::from_pairs([("key", 2)]).unwrap();
        assert_eq!(a.merge(&b).get("key"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_merge_lists_replace_wholesale() {
        let a = Compound::from_pairs([(
            "key",
            Value::List(vec![Value::Int(1), Value::Int(3), Value::Int(5)]),
        )])
        .unwrap();
        let b = Compound::from_pairs([(
            "key",
            Value::List(vec![Value::Int(2), Value::Int(4), Value::Int(6)]),
        )])
        .unwrap();
        assert_eq!(
            a.merge(&b).get("key"),
            Some(&Value::List(vec![
                Value::Int(2),
                Value::Int(4),
                Value::Int(6)
            ]))
        );
    }

    #[test]
    fn test_merge_is_non_destructive() {
        let a = Compound::from_pairs([("shared", 1), ("only_a", 10)]).unwrap();
        let b = Compound::from_pairs([("shared", 2)]).unwrap();
        let before_a = a.clone();
        let before_b = b.clone();

        let merged = a.merge(&b);
        assert_eq!(a, before_a);
        assert_eq!(b, before_b);
        assert_eq!(merged.get("shared"), Some(&Value::Int(2)));
        assert_eq!(merged.get("only_a"), Some(&Value::Int(10)));
    }

    #[test]
    fn test_merge_materializes_fresh_trees() {
        let mut inner = Compound::new();
        inner.insert("x", 1).unwrap();
        let a = Compound::from_pairs([("sub", Value::Compound(inner))]).unwrap();

        let mut merged = a.merge(&Compound::new());
        merged
            .get_compound_mut("sub")
            .unwrap()
            .insert("x", 99)
            .unwrap();
        // Mutating the result must not touch the input.
        assert_eq!(
            a.get("sub").and_then(|v| v.as_compound()).and_then(|c| c.get("x")),
            Some(&Value::Int(1))
        );
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut nbt =
            Compound::from_pairs([("a", 1), ("b", 2), ("c", 3)]).unwrap();
        nbt.remove("b");
        let keys: Vec<_> = nbt.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }
}
