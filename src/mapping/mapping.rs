use core::fmt;
use core::hash::BuildHasherDefault;
use core::ops::{Index, IndexMut};
use std::collections::HashMap;

use twox_hash::XxHash64;

use crate::mapping::{IntoIter, Iter, IterMut};
use crate::merge::{self, MergeOptions};
use crate::Value;

type Items = HashMap<String, Value, BuildHasherDefault<XxHash64>>;

/// A nested key-value map where keys are strings and values are any
/// [`Value`].
///
/// In Ruby this is a Hash with string keys, in YAML it is a "mapping". Keys
/// are unordered, a mapping is only meant for lookups.
///
/// # Examples
///
/// ```
/// use dig::{mapping, Mapping};
///
/// let h = mapping! {
///     "greeting" => mapping! { "target" => "world" },
/// };
///
/// assert_eq!(h.dig_str(&["greeting", "target"]), "world");
///
/// let mut h = Mapping::new();
/// h.dig_mapping(&["greeting"]).insert("target", "world");
/// assert_eq!(h.dig_str(&["greeting", "target"]), "world");
/// assert_eq!(h.dig(&["greeting", "non-existing"]), None);
/// assert_eq!(h.dig_str(&["greeting", "non-existing"]), "");
/// ```
#[derive(Clone, Default, PartialEq)]
pub struct Mapping {
    items: Items,
}

impl Mapping {
    /// Construct a new empty mapping.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new empty mapping with room for at least `capacity` keys.
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Items::with_capacity_and_hasher(capacity, BuildHasherDefault::default()),
        }
    }

    /// Get the number of keys in the mapping.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Test if the mapping is empty.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a value from the mapping.
    ///
    /// Unlike [`Mapping::dig`] this reports a key holding [`Value::Null`] as
    /// present.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, Value};
    ///
    /// let m = mapping! { "foo" => "bar", "none" => Value::Null };
    ///
    /// assert_eq!(m.get("foo").and_then(Value::as_str), Some("bar"));
    /// assert_eq!(m.get("none"), Some(&Value::Null));
    /// assert_eq!(m.get("missing"), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    /// Get a value mutably from the mapping.
    #[must_use]
    #[inline]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.items.get_mut(key)
    }

    /// Insert a value into the mapping, returning the value it replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Mapping;
    ///
    /// let mut m = Mapping::new();
    /// assert_eq!(m.insert("number", 10), None);
    /// assert_eq!(m.insert("number", 20), Some(10.into()));
    /// assert_eq!(m.dig(&["number"]), Some(&20.into()));
    /// ```
    #[inline]
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.items.insert(key.into(), value.into())
    }

    /// Remove a key from the mapping, returning its value if it was present.
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.items.remove(key)
    }

    /// Iterate over the keys and values of the mapping in unspecified order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.items.iter())
    }

    /// Iterate mutably over the keys and values of the mapping in unspecified
    /// order.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_> {
        IterMut::new(self.items.iter_mut())
    }

    /// Iterate over the keys of the mapping.
    #[inline]
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.items.keys().map(String::as_str)
    }

    /// Iterate over the values of the mapping.
    #[inline]
    pub fn values(&self) -> impl ExactSizeIterator<Item = &Value> + '_ {
        self.items.values()
    }

    /// Test if the key exists in the mapping, regardless of what it holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, Value};
    ///
    /// let m = mapping! { "foo" => "bar", "none" => Value::Null };
    ///
    /// assert!(m.has_key("foo"));
    /// assert!(m.has_key("none"));
    /// assert!(!m.has_key("bar"));
    /// ```
    #[must_use]
    #[inline]
    pub fn has_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Test if the key exists in the mapping and holds a nested [`Mapping`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::mapping;
    ///
    /// let m = mapping! { "foo" => mapping! { "bar" => 1 }, "baz" => 2 };
    ///
    /// assert!(m.has_mapping("foo"));
    /// assert!(!m.has_mapping("baz"));
    /// assert!(!m.has_mapping("missing"));
    /// ```
    #[must_use]
    #[inline]
    pub fn has_mapping(&self, key: &str) -> bool {
        matches!(self.items.get(key), Some(Value::Mapping(..)))
    }

    /// Get a value from a (deeply) nested tree of mappings, like Ruby's
    /// `Hash#dig`.
    ///
    /// Returns `None` if the path is empty, if any key along it is missing,
    /// if traversal hits something which is not a mapping before the path is
    /// exhausted, or if the value found is [`Value::Null`]. A missing key and
    /// a key holding null are indistinguishable here, use [`Mapping::get`] if
    /// that matters.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, Value};
    ///
    /// let m = mapping! {
    ///     "foo" => mapping! { "bar" => "foobar", "none" => Value::Null },
    /// };
    ///
    /// assert_eq!(m.dig(&["foo", "bar"]), Some(&"foobar".into()));
    /// assert!(m.dig(&["foo"]).and_then(Value::as_mapping).is_some());
    /// assert_eq!(m.dig(&["foo", "non-existing", "key"]), None);
    /// assert_eq!(m.dig(&["foo", "bar", "deeper"]), None);
    /// assert_eq!(m.dig(&["foo", "none"]), None);
    /// ```
    #[must_use]
    pub fn dig<K>(&self, keys: &[K]) -> Option<&Value>
    where
        K: AsRef<str>,
    {
        let (first, rest) = keys.split_first()?;
        let value = self.items.get(first.as_ref())?;

        match value {
            Value::Mapping(mapping) if !rest.is_empty() => mapping.dig(rest),
            Value::Null => None,
            value if rest.is_empty() => Some(value),
            _ => None,
        }
    }

    /// Get a mutable reference to a value in a (deeply) nested tree of
    /// mappings.
    ///
    /// This follows the same traversal as [`Mapping::dig`], except that a key
    /// holding [`Value::Null`] at the end of the path is returned so that it
    /// can be overwritten in place. Nothing is created along the way, see
    /// [`Mapping::dig_mapping`] for that.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::mapping;
    ///
    /// let mut m = mapping! { "foo" => mapping! { "bar" => 1 } };
    ///
    /// if let Some(value) = m.dig_mut(&["foo", "bar"]) {
    ///     *value = 2.into();
    /// }
    ///
    /// assert_eq!(m.dig(&["foo", "bar"]), Some(&2.into()));
    /// assert!(m.dig_mut(&["foo", "baz", "qux"]).is_none());
    /// ```
    #[must_use]
    pub fn dig_mut<K>(&mut self, keys: &[K]) -> Option<&mut Value>
    where
        K: AsRef<str>,
    {
        let (first, rest) = keys.split_first()?;
        let value = self.items.get_mut(first.as_ref())?;

        if rest.is_empty() {
            return Some(value);
        }

        match value {
            Value::Mapping(mapping) => mapping.dig_mut(rest),
            _ => None,
        }
    }

    /// Like [`Mapping::dig`] but returns the value as a string.
    ///
    /// If the path does not resolve to a [`Value::String`] an empty string is
    /// returned. Other kinds of values are not converted.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::mapping;
    ///
    /// let m = mapping! { "foo" => mapping! { "bar" => "foobar", "number" => 42 } };
    ///
    /// assert_eq!(m.dig_str(&["foo", "bar"]), "foobar");
    /// assert_eq!(m.dig_str(&["foo", "number"]), "");
    /// assert_eq!(m.dig_str(&["foo", "nonexisting"]), "");
    /// assert_eq!(m.dig_str(&["nonexisting", "nonexisting"]), "");
    /// ```
    #[must_use]
    pub fn dig_str<K>(&self, keys: &[K]) -> &str
    where
        K: AsRef<str>,
    {
        self.dig(keys).and_then(Value::as_str).unwrap_or_default()
    }

    /// Get a mutable nested mapping, creating missing branches along the way.
    ///
    /// Any key along the path which does not hold a mapping is **replaced**
    /// with a new empty mapping. Whatever value it held before is dropped.
    /// Calling this again with the same path returns the same mapping.
    ///
    /// The returned reference points into this mapping, so writes through it
    /// are visible in the tree.
    ///
    /// # Panics
    ///
    /// Panics if `keys` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::mapping;
    ///
    /// let mut m = mapping! { "foo" => mapping! { "bar" => "foobar" } };
    ///
    /// m.dig_mapping(&["foo", "baz"]).insert("dog", 1);
    /// assert_eq!(m.dig(&["foo", "baz", "dog"]), Some(&1.into()));
    /// assert_eq!(m.dig_str(&["foo", "bar"]), "foobar");
    ///
    /// // foo.bar is a string, so it's overwritten with a new mapping.
    /// m.dig_mapping(&["foo", "bar"]).insert("baz", "hello");
    /// assert_eq!(m.dig_str(&["foo", "bar", "baz"]), "hello");
    /// ```
    pub fn dig_mapping<K>(&mut self, keys: &[K]) -> &mut Mapping
    where
        K: AsRef<str>,
    {
        let Some((first, rest)) = keys.split_first() else {
            panic!("Mapping::dig_mapping called with an empty path");
        };

        let key = first.as_ref();
        let value = self.items.entry(key.to_owned()).or_default();

        if !matches!(value, Value::Null | Value::Mapping(..)) {
            tracing::trace!(key, replaced = %value, "replacing value with an empty mapping");
        }

        let mapping = value.make_mapping();

        if rest.is_empty() {
            mapping
        } else {
            mapping.dig_mapping(rest)
        }
    }

    /// Construct a copy of the mapping which shares nothing with the original.
    ///
    /// Nested mappings, sequences of mappings and sequences of scalars are all
    /// rebuilt, so mutating anything reachable from the copy never affects the
    /// original and vice versa.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, Value};
    ///
    /// let mut m = mapping! {
    ///     "foo" => mapping! { "bar" => "foobar" },
    ///     "array" => vec!["hello"],
    /// };
    ///
    /// let dup = m.dup();
    ///
    /// m.dig_mapping(&["foo"]).insert("bar", "barbar");
    ///
    /// if let Some(array) = m.dig_mut(&["array"]).and_then(Value::as_sequence_mut) {
    ///     array.push("world".into());
    /// }
    ///
    /// assert_eq!(m.dig_str(&["foo", "bar"]), "barbar");
    /// assert_eq!(dup.dig_str(&["foo", "bar"]), "foobar");
    /// assert_eq!(dup.dig(&["array"]), Some(&vec!["hello"].into()));
    /// ```
    #[must_use]
    pub fn dup(&self) -> Mapping {
        let mut items = Items::with_capacity_and_hasher(self.items.len(), Default::default());

        for (key, value) in &self.items {
            items.insert(key.clone(), value.dup());
        }

        Mapping { items }
    }

    /// Merge `source` into this mapping.
    ///
    /// See [`merge()`][crate::merge()] for the rules.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, MergeOptions};
    ///
    /// let mut m = mapping! { "foo" => "bar" };
    /// let other = mapping! { "foo" => "baz", "new" => 1 };
    ///
    /// m.merge(&other, MergeOptions::new());
    /// assert_eq!(m.dig_str(&["foo"]), "bar");
    /// assert_eq!(m.dig(&["new"]), Some(&1.into()));
    ///
    /// m.merge(&other, MergeOptions::new().with_overwrite());
    /// assert_eq!(m.dig_str(&["foo"]), "baz");
    /// ```
    #[inline]
    pub fn merge(&mut self, source: &Mapping, options: MergeOptions) {
        merge::merge(self, source, options);
    }

    /// Insert a key produced by normalizing foreign input.
    ///
    /// Collisions are last-write-wins.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn insert_normalized(&mut self, key: String, value: Value) {
        if let Some(previous) = self.items.insert(key, value) {
            tracing::debug!(%previous, "duplicate mapping key after normalization, keeping the last one");
        }
    }
}

impl fmt::Debug for Mapping {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.items.iter()).finish()
    }
}

/// Mappings are displayed in YAML flow style with sorted keys.
impl fmt::Display for Mapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut items = self.items.iter().collect::<Vec<_>>();
        items.sort_by(|a, b| a.0.cmp(b.0));

        f.write_str("{")?;

        for (n, (key, value)) in items.into_iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{key}: {value}")?;
        }

        f.write_str("}")
    }
}

/// Index into a mapping. Missing keys produce [`Value::Null`].
///
/// # Examples
///
/// ```
/// use dig::{mapping, Value};
///
/// let m = mapping! { "foo" => "bar" };
/// assert_eq!(m["foo"], "bar");
/// assert_eq!(m["missing"], Value::Null);
/// ```
impl Index<&str> for Mapping {
    type Output = Value;

    #[inline]
    fn index(&self, key: &str) -> &Self::Output {
        static NULL: Value = Value::Null;
        self.items.get(key).unwrap_or(&NULL)
    }
}

/// Mutably index into a mapping. Missing keys are inserted as
/// [`Value::Null`] so that they can be assigned to.
///
/// # Examples
///
/// ```
/// use dig::Mapping;
///
/// let mut m = Mapping::new();
/// m["foo"] = "bar".into();
/// assert_eq!(m.dig_str(&["foo"]), "bar");
/// ```
impl IndexMut<&str> for Mapping {
    #[inline]
    fn index_mut(&mut self, key: &str) -> &mut Self::Output {
        self.items.entry(key.to_owned()).or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut mapping = Mapping::new();
        mapping.extend(iter);
        mapping
    }
}

impl<K, V> Extend<(K, V)> for Mapping
where
    K: Into<String>,
    V: Into<Value>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in iter {
            self.items.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for Mapping {
    type Item = (String, Value);
    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.items.into_iter())
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a str, &'a Value);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Mapping {
    type Item = (&'a str, &'a mut Value);
    type IntoIter = IterMut<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
