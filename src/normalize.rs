//! Conversions from the generic trees produced by `serde_json` and
//! `serde_yaml` into [`Value`] and [`Mapping`].
//!
//! Every map in the input becomes a [`Mapping`], at any depth and inside of
//! sequences. YAML keys which are not strings are stringified the same way as
//! when deserializing, see the [`serde` module][crate::serde].

use crate::{Mapping, Value};

/// Convert a decoded JSON value.
///
/// Numbers too large for an `i64` are stored as floats.
///
/// # Examples
///
/// ```
/// use dig::Value;
///
/// let json = serde_json::json!({ "foo": [{ "bar": "baz" }] });
///
/// let m = Value::from(json).into_mapping().ok_or("not a mapping")?;
/// let foo = m.dig(&["foo"]).and_then(Value::as_sequence).ok_or("not a sequence")?;
/// let first = foo[0].as_mapping().ok_or("not a mapping")?;
/// assert_eq!(first.dig_str(&["bar"]), "baz");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(value) => Value::Bool(value),
            serde_json::Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Value::Integer(value)
                } else if let Some(value) = number.as_u64() {
                    Value::unsigned(value)
                } else {
                    number.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_json::Value::String(value) => Value::String(value),
            serde_json::Value::Array(values) => values.into_iter().map(Value::from).collect(),
            serde_json::Value::Object(map) => Value::Mapping(Mapping::from(map)),
        }
    }
}

/// Convert a decoded JSON object.
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl From<serde_json::Map<String, serde_json::Value>> for Mapping {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        let mut mapping = Mapping::with_capacity(map.len());

        for (key, value) in map {
            mapping.insert_normalized(key, Value::from(value));
        }

        mapping
    }
}

/// Convert a decoded YAML value.
///
/// Tags are dropped and the tagged value is kept.
///
/// # Examples
///
/// ```
/// use dig::Value;
///
/// let yaml: serde_yaml::Value = serde_yaml::from_str("1: one\n? [a, b]\n: two\n")?;
///
/// let m = Value::from(yaml).into_mapping().ok_or("not a mapping")?;
/// assert_eq!(m.dig_str(&["1"]), "one");
/// assert_eq!(m.dig_str(&["[a, b]"]), "two");
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
impl From<serde_yaml::Value> for Value {
    fn from(value: serde_yaml::Value) -> Self {
        match value {
            serde_yaml::Value::Null => Value::Null,
            serde_yaml::Value::Bool(value) => Value::Bool(value),
            serde_yaml::Value::Number(number) => {
                if let Some(value) = number.as_i64() {
                    Value::Integer(value)
                } else if let Some(value) = number.as_u64() {
                    Value::unsigned(value)
                } else {
                    number.as_f64().map_or(Value::Null, Value::Float)
                }
            }
            serde_yaml::Value::String(value) => Value::String(value),
            serde_yaml::Value::Sequence(values) => values.into_iter().map(Value::from).collect(),
            serde_yaml::Value::Mapping(map) => Value::Mapping(Mapping::from(map)),
            serde_yaml::Value::Tagged(tagged) => Value::from(tagged.value),
        }
    }
}

/// Convert a decoded YAML mapping, stringifying its keys.
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
impl From<serde_yaml::Mapping> for Mapping {
    fn from(map: serde_yaml::Mapping) -> Self {
        let mut mapping = Mapping::with_capacity(map.len());

        for (key, value) in map {
            mapping.insert_normalized(Value::from(key).into_key(), Value::from(value));
        }

        mapping
    }
}
