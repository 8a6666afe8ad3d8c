//! A [`Mapping`] of string keys to dynamically typed values.
//!
//! # Examples
//!
//! ```
//! use dig::{mapping, Mapping};
//!
//! let mut m = mapping! {
//!     "i18n" => mapping! {
//!         "hello" => mapping! { "se" => "Hejsan" },
//!     },
//! };
//!
//! m.dig_mapping(&["i18n", "hello"])["fi"] = "Moi".into();
//!
//! assert_eq!(m.dig_str(&["i18n", "hello", "fi"]), "Moi");
//! assert_eq!(m.dig_str(&["i18n", "hello", "se"]), "Hejsan");
//! ```

mod iter;
pub use self::iter::{IntoIter, Iter, IterMut};

mod mapping;
pub use self::mapping::Mapping;
