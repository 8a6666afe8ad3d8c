use anyhow::{Context, Result};

use crate::{mapping, Mapping, Value};

fn sample() -> Mapping {
    mapping! {
        "foo" => mapping! {
            "bar" => "foobar",
        },
    }
}

#[test]
fn dig() {
    let m = sample();

    assert_eq!(m.dig(&["foo", "bar"]), Some(&Value::from("foobar")));
    assert_eq!(m.dig(&["foo", "non-existing", "key"]), None);
}

#[test]
fn dig_empty_path() {
    let m = sample();
    assert_eq!(m.dig::<&str>(&[]), None);
    assert_eq!(m.dig_str::<&str>(&[]), "");
}

#[test]
fn dig_returns_mapping_at_end_of_path() -> Result<()> {
    let m = sample();

    let foo = m
        .dig(&["foo"])
        .and_then(Value::as_mapping)
        .context("expected mapping")?;

    assert_eq!(foo.dig_str(&["bar"]), "foobar");
    Ok(())
}

#[test]
fn dig_through_non_mapping() {
    let m = mapping! {
        "scalar" => 1,
        "array" => vec![mapping! { "inner" => true }],
    };

    assert_eq!(m.dig(&["scalar"]), Some(&Value::from(1)));
    assert_eq!(m.dig(&["scalar", "deeper"]), None);
    assert_eq!(m.dig(&["array", "inner"]), None);
    assert_eq!(m.dig(&["array", "0"]), None);
}

#[test]
fn dig_null_is_absent() {
    let m = mapping! { "none" => Value::Null, "nested" => mapping! { "none" => Value::Null } };

    assert!(m.has_key("none"));
    assert_eq!(m.dig(&["none"]), None);
    assert_eq!(m.dig(&["nested", "none"]), None);
    assert_eq!(m.dig(&["none", "deeper"]), None);
}

#[test]
fn dig_string() {
    let m = sample();

    assert_eq!(m.dig_str(&["foo", "bar"]), "foobar");
    assert_eq!(m.dig_str(&["foo", "nonexisting"]), "");
    assert_eq!(m.dig_str(&["nonexisting", "nonexisting"]), "");
    // Mappings are not strings.
    assert_eq!(m.dig_str(&["foo"]), "");
}

#[test]
fn dig_string_is_strict() {
    let m = mapping! {
        "int" => 1,
        "float" => 1.5,
        "bool" => true,
        "list" => vec!["a"],
    };

    assert_eq!(m.dig_str(&["int"]), "");
    assert_eq!(m.dig_str(&["float"]), "");
    assert_eq!(m.dig_str(&["bool"]), "");
    assert_eq!(m.dig_str(&["list"]), "");
}

#[test]
fn dig_with_owned_keys() {
    let m = sample();
    let path = vec![String::from("foo"), String::from("bar")];
    assert_eq!(m.dig_str(&path), "foobar");
}

#[test]
fn dig_mapping() -> Result<()> {
    let mut m = sample();

    let foo = m.dig_mapping(&["foo"]);
    assert_eq!(foo["bar"], "foobar");

    m.dig_mapping(&["foo", "baz"]).insert("dog", 1);
    assert_eq!(m.dig(&["foo", "baz", "dog"]), Some(&Value::from(1)));
    // foo.bar is left intact.
    assert_eq!(m.dig_str(&["foo", "bar"]), "foobar");

    // Overwrite foo.bar with a new mapping.
    m.dig_mapping(&["foo", "bar"]).insert("baz", "hello");
    assert_eq!(m.dig_str(&["foo", "bar", "baz"]), "hello");
    assert!(m.dig(&["foo", "bar"]).and_then(Value::as_mapping).is_some());

    let foo = m.get("foo").and_then(Value::as_mapping).context("missing foo")?;
    assert_eq!(foo.len(), 2);
    Ok(())
}

#[test]
fn dig_mapping_creates_path() {
    let mut m = Mapping::new();

    assert_eq!(m.dig(&["a", "b"]), None);
    m.dig_mapping(&["a", "b"])["c"] = 1.into();
    assert_eq!(m.dig(&["a", "b", "c"]), Some(&Value::from(1)));
    assert!(m.has_mapping("a"));
}

#[test]
fn dig_mapping_is_idempotent() {
    let mut m = Mapping::new();

    m.dig_mapping(&["a", "b"]).insert("first", 1);
    m.dig_mapping(&["a", "b"]).insert("second", 2);

    let b = m.dig_mapping(&["a", "b"]);
    assert_eq!(b.len(), 2);
    assert_eq!(b["first"], 1);
    assert_eq!(b["second"], 2);
}

#[test]
fn dig_mapping_replaces_leaves() {
    let mut m = mapping! {
        "null" => Value::Null,
        "list" => vec![1, 2, 3],
        "nested" => mapping! { "scalar" => "value" },
    };

    assert!(m.dig_mapping(&["null"]).is_empty());
    assert!(m.dig_mapping(&["list"]).is_empty());
    assert!(m.dig_mapping(&["nested", "scalar", "deeper"]).is_empty());

    assert!(m.has_mapping("null"));
    assert!(m.has_mapping("list"));
    assert!(m.dig(&["nested", "scalar", "deeper"]).is_some());
}

#[test]
fn dig_mapping_i18n() {
    let mut m = mapping! {
        "i18n" => mapping! {
            "hello" => mapping! { "se" => "Hejsan" },
        },
    };

    m.dig_mapping(&["i18n", "hello"])["fi"] = "Moi".into();

    assert_eq!(m.dig_str(&["i18n", "hello", "fi"]), "Moi");
    assert_eq!(m.dig_str(&["i18n", "hello", "se"]), "Hejsan");
}

#[test]
#[should_panic(expected = "empty path")]
fn dig_mapping_empty_path() {
    let mut m = Mapping::new();
    m.dig_mapping::<&str>(&[]);
}

#[test]
fn dig_mut() {
    let mut m = mapping! { "foo" => mapping! { "none" => Value::Null } };

    if let Some(value) = m.dig_mut(&["foo", "none"]) {
        *value = "set".into();
    }

    assert_eq!(m.dig_str(&["foo", "none"]), "set");
    assert!(m.dig_mut(&["foo", "none", "deeper"]).is_none());
    assert!(m.dig_mut(&["missing"]).is_none());
    assert!(m.dig_mut::<&str>(&[]).is_none());
}

#[test]
fn has_key_and_mapping() {
    let m = mapping! {
        "foo" => mapping! {},
        "bar" => 1,
        "none" => Value::Null,
    };

    assert!(m.has_key("foo"));
    assert!(m.has_key("bar"));
    assert!(m.has_key("none"));
    assert!(!m.has_key("baz"));

    assert!(m.has_mapping("foo"));
    assert!(!m.has_mapping("bar"));
    assert!(!m.has_mapping("none"));
    assert!(!m.has_mapping("baz"));
}

#[test]
fn index() {
    let mut m = sample();

    assert_eq!(m["foo"]["bar"], "foobar");
    assert_eq!(m["missing"], Value::Null);
    assert!(!m.has_key("missing"));

    m["new"] = vec![1, 2].into();
    assert_eq!(m.dig(&["new"]), Some(&Value::from(vec![1, 2])));
}

#[test]
fn display() {
    let m = mapping! {
        "b" => vec![Value::from(1), Value::from("two"), Value::Null],
        "a" => mapping! { "x" => 1.5, "y" => false },
    };

    assert_eq!(m.to_string(), "{a: {x: 1.5, y: false}, b: [1, two, null]}");
}
