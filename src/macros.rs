/// Construct a [`Mapping`][crate::Mapping] from a literal list of keys and
/// values.
///
/// Keys can be anything which converts into a [`String`], values anything
/// which converts into a [`Value`][crate::Value]. Nested mappings are built by
/// nesting the macro.
///
/// # Examples
///
/// ```
/// use dig::{mapping, Mapping, Value};
///
/// let m = mapping! {
///     "foo" => mapping! { "bar" => "foobar" },
///     "array" => vec!["hello"],
///     "mappingarray" => vec![
///         mapping! { "bar" => "foobar" },
///         mapping! { "foo" => "barfoo" },
///     ],
///     "none" => Value::Null,
/// };
///
/// assert_eq!(m.len(), 4);
/// assert_eq!(m.dig_str(&["foo", "bar"]), "foobar");
/// assert_eq!(mapping! {}, Mapping::new());
/// ```
#[macro_export]
macro_rules! mapping {
    () => {
        $crate::Mapping::new()
    };

    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut mapping = $crate::Mapping::new();
        $(mapping.insert($key, $value);)+
        mapping
    }};
}
