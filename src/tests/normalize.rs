use anyhow::{Context, Result};

use crate::{Mapping, Value};

#[cfg(feature = "json")]
#[test]
fn json_sequence_of_mappings() -> Result<()> {
    let m = crate::from_json_str(r#"{"foo": [{"bar": "baz"}]}"#)?;

    let foo = m
        .dig(&["foo"])
        .and_then(Value::as_sequence)
        .context("expected sequence")?;

    let first = foo
        .first()
        .and_then(Value::as_mapping)
        .context("expected mapping")?;

    assert_eq!(first.dig_str(&["bar"]), "baz");
    Ok(())
}

#[cfg(feature = "json")]
#[test]
fn json_value_conversion() -> Result<()> {
    let json = serde_json::json!({
        "int": -1,
        "big": u64::MAX,
        "float": 0.5,
        "bool": true,
        "none": null,
        "deep": [[{"a": {"b": 1}}]],
    });

    let m = Value::from(json).into_mapping().context("expected mapping")?;

    assert_eq!(m["int"], Value::Integer(-1));
    assert_eq!(m["big"], Value::Float(u64::MAX as f64));
    assert_eq!(m["float"], 0.5);
    assert_eq!(m["bool"], true);
    assert_eq!(m.get("none"), Some(&Value::Null));

    let deep = m
        .dig(&["deep"])
        .and_then(Value::as_sequence)
        .and_then(|s| s.first())
        .and_then(Value::as_sequence)
        .and_then(|s| s.first())
        .and_then(Value::as_mapping)
        .context("expected nested mapping")?;

    assert_eq!(deep.dig(&["a", "b"]), Some(&Value::from(1)));
    Ok(())
}

#[cfg(feature = "json")]
#[test]
fn json_root() -> Result<()> {
    assert!(crate::from_json_str("null")?.is_empty());
    assert!(crate::from_json_str("{}")?.is_empty());
    assert!(crate::from_json_str("32").is_err());
    assert!(crate::from_json_str(r#""string""#).is_err());

    let error = crate::from_json_str(r#"{"foo": "#).err().context("expected error")?;
    assert!(error.line().is_some());
    assert!(std::error::Error::source(&error).is_some());
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_with_nil() -> Result<()> {
    let m: Mapping = serde_yaml::from_str("foo: null")?;
    assert_eq!(m.dig(&["foo"]), None);
    assert!(m.has_key("foo"));
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_non_string_keys() -> Result<()> {
    let m = crate::from_yaml_str(
        r#"
        1: int
        1.5: float
        true: bool
        ~: nothing
        nested:
          2: two
        "#,
    )?;

    assert_eq!(m.dig_str(&["1"]), "int");
    assert_eq!(m.dig_str(&["1.5"]), "float");
    assert_eq!(m.dig_str(&["true"]), "bool");
    assert_eq!(m.dig_str(&["null"]), "nothing");
    assert_eq!(m.dig_str(&["nested", "2"]), "two");
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_key_collision_keeps_one() -> Result<()> {
    let m = crate::from_yaml_str(
        r#"
        1: int
        "1": string
        "#,
    )?;

    assert_eq!(m.len(), 1);
    assert!(matches!(m.dig_str(&["1"]), "int" | "string"));
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_tagged_value() -> Result<()> {
    let m = crate::from_yaml_str("value: !custom 42\nlist: !other [1, 2]\n")?;

    assert_eq!(m["value"], 42);
    assert_eq!(m["list"], Value::from(vec![1, 2]));
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_value_conversion() -> Result<()> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(
        r#"
        list:
          - name: first
          - plain
        4: four
        "#,
    )?;

    let m = Value::from(yaml).into_mapping().context("expected mapping")?;

    let list = m.dig(&["list"]).and_then(Value::as_sequence).context("list")?;
    assert_eq!(list[0]["name"], "first");
    assert_eq!(list[1], "plain");
    assert_eq!(m.dig_str(&["4"]), "four");
    Ok(())
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_root() -> Result<()> {
    assert!(crate::from_yaml_str("")?.is_empty());
    assert!(crate::from_yaml_str("~")?.is_empty());
    assert!(crate::from_yaml_str("- 1").is_err());
    assert!(crate::from_yaml_str("foo: [").is_err());
    Ok(())
}

#[cfg(all(feature = "json", feature = "yaml"))]
#[test]
fn serialize_round_trip_through_formats() -> Result<()> {
    let m = crate::from_yaml_str("b: [1, {c: true}]\na: ~\n")?;

    let json = serde_json::to_string(&m)?;
    assert_eq!(json, r#"{"a":null,"b":[1,{"c":true}]}"#);
    Ok(())
}
