//! Recursive merging of one [`Mapping`] into another.

use crate::{Mapping, Value};

/// Options controlling how [`merge()`] resolves conflicts.
///
/// The default has every option disabled: existing values in the target win
/// and nulls in the source are ignored.
///
/// # Examples
///
/// ```
/// use dig::MergeOptions;
///
/// let options = MergeOptions::new().with_overwrite().with_nillify();
/// assert!(options.is_overwrite());
/// assert!(options.is_nillify());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOptions {
    overwrite: bool,
    nillify: bool,
}

impl MergeOptions {
    /// Construct options with everything disabled.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self {
            overwrite: false,
            nillify: false,
        }
    }

    /// Let values in the source replace existing non-mapping values in the
    /// target.
    #[must_use]
    #[inline]
    pub const fn with_overwrite(self) -> Self {
        Self {
            overwrite: true,
            ..self
        }
    }

    /// Let a null in the source force the corresponding key in the target to
    /// null, inserting it if it is missing.
    #[must_use]
    #[inline]
    pub const fn with_nillify(self) -> Self {
        Self {
            nillify: true,
            ..self
        }
    }

    /// Test if overwriting is enabled.
    #[must_use]
    #[inline]
    pub const fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    /// Test if nillify is enabled.
    #[must_use]
    #[inline]
    pub const fn is_nillify(&self) -> bool {
        self.nillify
    }
}

/// Merge `source` into `target` in place.
///
/// `source` is never modified and nothing from it is shared with `target`,
/// every value inserted is a [`Value::dup`] of the source value. Per key, by
/// the kind of the source value:
///
/// * A [`Mapping`] is inserted if the target has nothing at the key, merged
///   recursively with the same options if the target also holds a mapping,
///   and otherwise only replaces the target value with
///   [`MergeOptions::with_overwrite`].
/// * [`Value::Null`] sets the target key to null with
///   [`MergeOptions::with_nillify`], and is otherwise ignored.
/// * Anything else is inserted if the target has nothing at the key, and
///   otherwise only replaces the target value with
///   [`MergeOptions::with_overwrite`]. Sequences are replaced as a whole,
///   they are never concatenated.
///
/// A target key holding null counts as having nothing at the key.
///
/// # Examples
///
/// ```
/// use dig::{mapping, merge, MergeOptions, Value};
///
/// let mut target = mapping! {
///     "name" => "dig",
///     "tags" => vec!["a", "b"],
///     "nested" => mapping! { "keep" => 1 },
/// };
///
/// let source = mapping! {
///     "name" => "other",
///     "tags" => vec!["c"],
///     "nested" => mapping! { "add" => 2 },
///     "name2" => Value::Null,
/// };
///
/// merge(&mut target, &source, MergeOptions::new());
///
/// assert_eq!(target.dig_str(&["name"]), "dig");
/// assert_eq!(target.dig(&["tags"]), Some(&vec!["a", "b"].into()));
/// assert_eq!(target.dig(&["nested", "keep"]), Some(&1.into()));
/// assert_eq!(target.dig(&["nested", "add"]), Some(&2.into()));
/// assert!(!target.has_key("name2"));
///
/// merge(&mut target, &source, MergeOptions::new().with_overwrite().with_nillify());
///
/// assert_eq!(target.dig_str(&["name"]), "other");
/// assert_eq!(target.dig(&["tags"]), Some(&vec!["c"].into()));
/// assert_eq!(target.get("name2"), Some(&Value::Null));
/// ```
pub fn merge(target: &mut Mapping, source: &Mapping, options: MergeOptions) {
    for (key, value) in source {
        match value {
            Value::Null => {
                if options.nillify {
                    target.insert(key, Value::Null);
                }
            }
            Value::Mapping(nested) => match target.get_mut(key) {
                None | Some(Value::Null) => {
                    target.insert(key, nested.dup());
                }
                Some(Value::Mapping(existing)) => {
                    merge(existing, nested, options);
                }
                Some(existing) => {
                    if options.overwrite {
                        tracing::trace!(key, replaced = %existing, "overwriting value with mapping");
                        *existing = Value::Mapping(nested.dup());
                    }
                }
            },
            value => match target.get_mut(key) {
                None | Some(Value::Null) => {
                    target.insert(key, value.dup());
                }
                Some(existing) => {
                    if options.overwrite {
                        tracing::trace!(key, replaced = %existing, "overwriting value");
                        *existing = value.dup();
                    }
                }
            },
        }
    }
}
