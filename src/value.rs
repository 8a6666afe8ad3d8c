use core::fmt;
use core::ops::Index;

use crate::Mapping;

/// A dynamically typed value held inside of a [`Mapping`].
///
/// This is a closed set of kinds. Anything a JSON or YAML decoder produces is
/// normalized into one of these variants, with every map-like node becoming a
/// [`Mapping`] regardless of how deeply it is nested.
///
/// # Examples
///
/// ```
/// use dig::{mapping, Value};
///
/// let m = mapping! {
///     "name" => "Descartes",
///     "born" => 1596,
///     "works" => vec!["Meditations", "Discourse on the Method"],
/// };
///
/// assert_eq!(m.get("name").and_then(Value::as_str), Some("Descartes"));
/// assert_eq!(m.get("born").and_then(Value::as_i64), Some(1596));
/// assert_eq!(m.get("works").and_then(Value::as_sequence).map(|s| s.len()), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[non_exhaustive]
pub enum Value {
    /// The absent-value marker.
    ///
    /// This is distinct from a key not being present in a [`Mapping`], but
    /// [`Mapping::dig`] reports both the same way.
    #[default]
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    String(String),
    /// A sequence of values, which may be scalars, mappings or sequences.
    Sequence(Vec<Value>),
    /// A nested [`Mapping`].
    Mapping(Mapping),
}

impl Value {
    /// Test if the value is [`Value::Null`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::from(false).is_null());
    /// ```
    #[must_use]
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the value as a [`str`].
    ///
    /// Only [`Value::String`] matches, nothing is stringified.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Value;
    ///
    /// assert_eq!(Value::from("hello").as_str(), Some("hello"));
    /// assert_eq!(Value::from(42).as_str(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string),
            _ => None,
        }
    }

    /// Get the value as a boolean.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Value;
    ///
    /// assert_eq!(Value::from(true).as_bool(), Some(true));
    /// assert_eq!(Value::from("true").as_bool(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(value) => Some(value),
            _ => None,
        }
    }

    /// Get the value as a 64-bit signed integer.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Value;
    ///
    /// assert_eq!(Value::from(-42).as_i64(), Some(-42));
    /// assert_eq!(Value::from(4.2).as_i64(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(value) => Some(value),
            _ => None,
        }
    }

    /// Get the value as a 64-bit float. Integers are widened.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Value;
    ///
    /// assert_eq!(Value::from(4.2).as_f64(), Some(4.2));
    /// assert_eq!(Value::from(4).as_f64(), Some(4.0));
    /// ```
    #[must_use]
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Float(value) => Some(value),
            Value::Integer(value) => Some(value as f64),
            _ => None,
        }
    }

    /// Get the value as a sequence.
    #[must_use]
    #[inline]
    pub fn as_sequence(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Get the value as a mutable sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, Value};
    ///
    /// let mut m = mapping! { "array" => vec!["hello"] };
    ///
    /// let array = m.get_mut("array").and_then(Value::as_sequence_mut).ok_or("missing array")?;
    /// array.push(Value::from("world"));
    ///
    /// assert_eq!(m.get("array"), Some(&Value::from(vec!["hello", "world"])));
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    #[inline]
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Get the value as a [`Mapping`].
    #[must_use]
    #[inline]
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Get the value as a mutable [`Mapping`].
    #[must_use]
    #[inline]
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Make the value into a [`Mapping`] and return it.
    ///
    /// If the value is already a mapping it is returned as-is, anything else
    /// is replaced with a new empty mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::Value;
    ///
    /// let mut value = Value::from("string");
    /// value.make_mapping().insert("first", 1);
    /// value.make_mapping().insert("second", 2);
    ///
    /// let mapping = value.as_mapping().ok_or("not a mapping")?;
    /// assert_eq!(mapping.len(), 2);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    pub fn make_mapping(&mut self) -> &mut Mapping {
        if !matches!(self, Value::Mapping(..)) {
            *self = Value::Mapping(Mapping::new());
        }

        match self {
            Value::Mapping(mapping) => mapping,
            _ => unreachable!("value was just replaced with a mapping"),
        }
    }

    /// Convert the value into a [`Mapping`], if it is one.
    #[must_use]
    #[inline]
    pub fn into_mapping(self) -> Option<Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    /// Construct a structurally independent copy of the value.
    ///
    /// See [`Mapping::dup`].
    ///
    /// # Examples
    ///
    /// ```
    /// use dig::{mapping, Value};
    ///
    /// let original = Value::from(vec![mapping! { "bar" => "foobar" }]);
    /// let mut copy = original.dup();
    ///
    /// if let Some(first) = copy.as_sequence_mut().and_then(|s| s.first_mut()) {
    ///     first.as_mapping_mut().ok_or("not a mapping")?.insert("bar", "barbar");
    /// }
    ///
    /// assert_ne!(original, copy);
    /// # Ok::<_, Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn dup(&self) -> Value {
        match self {
            Value::Null => Value::Null,
            Value::Bool(value) => Value::Bool(*value),
            Value::Integer(value) => Value::Integer(*value),
            Value::Float(value) => Value::Float(*value),
            Value::String(value) => Value::String(value.clone()),
            Value::Sequence(values) => Value::Sequence(values.iter().map(Value::dup).collect()),
            Value::Mapping(mapping) => Value::Mapping(mapping.dup()),
        }
    }

    /// Construct a value from an unsigned integer.
    ///
    /// Integers outside of the `i64` range are stored as floats.
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn unsigned(value: u64) -> Value {
        match i64::try_from(value) {
            Ok(value) => Value::Integer(value),
            Err(..) => Value::Float(value as f64),
        }
    }

    /// The stringified form of the value when it is used as a mapping key.
    ///
    /// Strings are used as-is, everything else goes through [`Display`].
    ///
    /// [`Display`]: fmt::Display
    #[cfg_attr(not(feature = "serde"), allow(dead_code))]
    pub(crate) fn into_key(self) -> String {
        match self {
            Value::String(string) => string,
            other => other.to_string(),
        }
    }
}

/// Values are displayed in YAML flow style.
///
/// # Examples
///
/// ```
/// use dig::{mapping, Value};
///
/// assert_eq!(Value::Null.to_string(), "null");
/// assert_eq!(Value::from(1.5).to_string(), "1.5");
/// assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
/// assert_eq!(Value::from(mapping! { "a" => true }).to_string(), "{a: true}");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(value) => write!(f, "{value}"),
            Value::Integer(value) => f.write_str(itoa::Buffer::new().format(*value)),
            Value::Float(value) => f.write_str(ryu::Buffer::new().format(*value)),
            Value::String(value) => f.write_str(value),
            Value::Sequence(values) => {
                f.write_str("[")?;

                for (n, value) in values.iter().enumerate() {
                    if n > 0 {
                        f.write_str(", ")?;
                    }

                    fmt::Display::fmt(value, f)?;
                }

                f.write_str("]")
            }
            Value::Mapping(mapping) => fmt::Display::fmt(mapping, f),
        }
    }
}

/// Index into a [`Value::Mapping`]. Missing keys, and values which are not
/// mappings, produce [`Value::Null`].
///
/// # Examples
///
/// ```
/// use dig::{mapping, Value};
///
/// let value = Value::from(mapping! { "foo" => mapping! { "bar" => 1 } });
/// assert_eq!(value["foo"]["bar"], 1);
/// assert_eq!(value["foo"]["bar"]["baz"], Value::Null);
/// ```
impl Index<&str> for Value {
    type Output = Value;

    #[inline]
    fn index(&self, key: &str) -> &Self::Output {
        static NULL: Value = Value::Null;

        match self {
            Value::Mapping(mapping) => &mapping[key],
            _ => &NULL,
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }

            impl PartialEq<$ty> for Value {
                #[inline]
                fn eq(&self, other: &$ty) -> bool {
                    self.as_i64() == Some(i64::from(*other))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Mapping> for Value {
    #[inline]
    fn from(value: Mapping) -> Self {
        Value::Mapping(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(values: Vec<T>) -> Self {
        Value::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Value::Null,
        }
    }
}

impl<T> FromIterator<T> for Value
where
    T: Into<Value>,
{
    #[inline]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Value::Sequence(iter.into_iter().map(Into::into).collect())
    }
}

impl PartialEq<str> for Value {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Value {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for Value {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}

impl PartialEq<bool> for Value {
    #[inline]
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}

impl PartialEq<f64> for Value {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        matches!(*self, Value::Float(value) if value == *other)
    }
}
