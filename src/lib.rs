//! Tolerant digging, duplication and merging over nested mappings.
//!
//! This crate provides a [`Mapping`] type which holds the kind of loosely
//! structured data you get from decoding JSON or YAML documents, with
//! Ruby-like "dig" access into it. It is meant for reading and writing deeply
//! nested configuration-like data where no schema is known ahead of time.
//!
//! Nothing in here fails because a key is missing or holds something
//! unexpected. Absence and type mismatches are reported as data, through
//! [`Option`] or an empty string.
//!
//! <br>
//!
//! ## Digging
//!
//! [`Mapping::dig`] follows a path of keys through nested mappings and
//! returns whatever is at the end, or `None`. [`Mapping::dig_mapping`] does
//! the opposite, it guarantees that there is a mapping at the end of the path
//! by creating (or replacing) whatever is in the way, and hands back a mutable
//! reference into the tree.
//!
//! ```
//! use dig::Mapping;
//!
//! let mut m = Mapping::new();
//! assert_eq!(m.dig(&["a", "b"]), None);
//!
//! m.dig_mapping(&["a", "b"])["c"] = 1.into();
//! assert_eq!(m.dig(&["a", "b", "c"]), Some(&1.into()));
//! ```
//!
//! <br>
//!
//! ## Decoding
//!
//! With the `json` and `yaml` features (enabled by default) documents can be
//! decoded directly. Every map in the document becomes a [`Mapping`], even
//! when it is nested inside of a sequence.
//!
//! ```
//! let m = dig::from_json_str(r#"{"foo": [{"bar": "baz"}]}"#)?;
//!
//! let foo = m.dig(&["foo"]).and_then(|v| v.as_sequence()).ok_or("missing foo")?;
//! let first = foo[0].as_mapping().ok_or("not a mapping")?;
//! assert_eq!(first.dig_str(&["bar"]), "baz");
//!
//! let m = dig::from_yaml_str("foo: null")?;
//! assert!(m.has_key("foo"));
//! assert_eq!(m.dig(&["foo"]), None);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! Since [`Mapping`] implements `Deserialize` it can also be used with any
//! other self-describing serde format, or as a field in a larger structure.
//!
//! <br>
//!
//! ## Duplicating and merging
//!
//! [`Mapping::dup`] produces a copy which shares nothing with the original.
//! [`merge()`] folds one mapping into another, recursing into nested mappings
//! and resolving conflicts according to [`MergeOptions`].
//!
//! ```
//! use dig::{mapping, MergeOptions};
//!
//! let defaults = mapping! {
//!     "server" => mapping! { "port" => 8080, "host" => "localhost" },
//! };
//!
//! let mut config = mapping! {
//!     "server" => mapping! { "port" => 9000 },
//! };
//!
//! config.merge(&defaults, MergeOptions::new());
//!
//! assert_eq!(config.dig(&["server", "port"]), Some(&9000.into()));
//! assert_eq!(config.dig_str(&["server", "host"]), "localhost");
//! ```
//!
//! <br>
//!
//! ## Features
//!
//! * `serde` - `Serialize` and `Deserialize` for [`Value`] and [`Mapping`].
//! * `json` - conversions from `serde_json` values and [`from_json_slice`].
//!   Implies `serde`.
//! * `yaml` - conversions from `serde_yaml` values and [`from_yaml_slice`].
//!   Implies `serde`.
//!
//! A [`Mapping`] is plain owned data. It can be moved between threads, but
//! sharing one for mutation requires external synchronization.

#![deny(missing_docs)]
#![allow(clippy::module_inception)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]


#[macro_use]
mod macros;

mod value;
pub use self::value::Value;

pub mod mapping;
#[doc(inline)]
pub use self::mapping::Mapping;

mod merge;
pub use self::merge::{merge, MergeOptions};

#[cfg(any(feature = "json", feature = "yaml"))]
mod error;
#[cfg(any(feature = "json", feature = "yaml"))]
pub use self::error::Error;
#[cfg(any(feature = "json", feature = "yaml"))]
use self::error::ErrorKind;

#[cfg(any(feature = "json", feature = "yaml"))]
mod normalize;

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
pub mod serde;

/// Decode a [`Mapping`] from JSON.
///
/// A `null` document produces an empty mapping.
///
/// # Errors
///
/// Errors in case the input is not valid JSON, or if the document is neither
/// an object nor `null`.
///
/// # Examples
///
/// ```
/// let m = dig::from_json_slice(br#"{"greeting": {"target": "world"}}"#)?;
/// assert_eq!(m.dig_str(&["greeting", "target"]), "world");
///
/// assert!(dig::from_json_slice(b"null")?.is_empty());
/// assert!(dig::from_json_slice(b"[1, 2]").is_err());
/// assert!(dig::from_json_slice(b"{").is_err());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub fn from_json_slice<D>(input: D) -> Result<Mapping, Error>
where
    D: AsRef<[u8]>,
{
    serde_json::from_slice(input.as_ref()).map_err(|error| Error::new(ErrorKind::Json(error)))
}

/// Decode a [`Mapping`] from a JSON string.
///
/// See [`from_json_slice`].
///
/// # Errors
///
/// Errors in case the input is not valid JSON, or if the document is neither
/// an object nor `null`.
#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
pub fn from_json_str(input: &str) -> Result<Mapping, Error> {
    from_json_slice(input)
}

/// Decode a [`Mapping`] from YAML.
///
/// An empty or `null` document produces an empty mapping. Keys which are not
/// strings are stringified, see the [`serde` module][crate::serde].
///
/// # Errors
///
/// Errors in case the input is not valid YAML, or if the document is neither
/// a mapping nor null.
///
/// # Examples
///
/// ```
/// let m = dig::from_yaml_slice("
/// greeting:
///   target: world
/// 42: answer
/// ")?;
///
/// assert_eq!(m.dig_str(&["greeting", "target"]), "world");
/// assert_eq!(m.dig_str(&["42"]), "answer");
///
/// assert!(dig::from_yaml_slice("")?.is_empty());
/// assert!(dig::from_yaml_slice("- 1\n- 2").is_err());
/// # Ok::<_, Box<dyn std::error::Error>>(())
/// ```
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub fn from_yaml_slice<D>(input: D) -> Result<Mapping, Error>
where
    D: AsRef<[u8]>,
{
    serde_yaml::from_slice(input.as_ref()).map_err(|error| Error::new(ErrorKind::Yaml(error)))
}

/// Decode a [`Mapping`] from a YAML string.
///
/// See [`from_yaml_slice`].
///
/// # Errors
///
/// Errors in case the input is not valid YAML, or if the document is neither
/// a mapping nor null.
#[cfg(feature = "yaml")]
#[cfg_attr(docsrs, doc(cfg(feature = "yaml")))]
pub fn from_yaml_str(input: &str) -> Result<Mapping, Error> {
    from_yaml_slice(input)
}
