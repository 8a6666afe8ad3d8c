//! Serde support for [`Value`] and [`Mapping`].
//!
//! [`Deserialize`] is the hook through which any serde decoder builds a
//! mapping. Whatever shape the decoder produces, every map it yields becomes a
//! [`Mapping`], including maps nested inside of sequences, and keys which are
//! not strings are stringified:
//!
//! * Integers and floats are written out in decimal.
//! * Booleans become `true` or `false`, and null becomes `null`.
//! * Byte strings are decoded lossily as UTF-8.
//! * Sequences and mappings used as keys are written in flow style, like
//!   `[1, 2]`.
//!
//! If two keys stringify to the same string the last one seen by the decoder
//! wins. YAML tags are dropped and the tagged value is kept.
//!
//! [`Serialize`] writes a mapping back out with its keys sorted.
//!
//! [`Deserialize`]: serde::Deserialize
//! [`Serialize`]: serde::Serialize
//! [`Value`]: crate::Value
//! [`Mapping`]: crate::Mapping
//!
//! ```
//! use dig::Mapping;
//!
//! let m: Mapping = serde_yaml::from_str(r#"
//! 1: one
//! true: yes
//! list:
//! - name: first
//! "#)?;
//!
//! assert_eq!(m.dig_str(&["1"]), "one");
//! assert_eq!(m.dig_str(&["true"]), "yes");
//!
//! let list = m.dig(&["list"]).and_then(|v| v.as_sequence()).ok_or("missing list")?;
//! let first = list[0].as_mapping().ok_or("not a mapping")?;
//! assert_eq!(first.dig_str(&["name"]), "first");
//!
//! let json = serde_json::to_string(&m)?;
//! assert_eq!(json, r#"{"1":"one","list":[{"name":"first"}],"true":"yes"}"#);
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```

mod de;
mod ser;
