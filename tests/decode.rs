use anyhow::{Context, Result};
use dig::{Mapping, MergeOptions, Value};
use serde::Deserialize;

#[test]
fn mapping_inside_struct() -> Result<()> {
    #[derive(Deserialize)]
    struct Manifest {
        name: String,
        #[serde(default)]
        spec: Mapping,
    }

    let manifest: Manifest = serde_yaml::from_str(
        r"
        name: web
        spec:
          hosts:
            - address: 10.0.0.1
              role: controller
            - address: 10.0.0.2
              role: worker
          options:
            retries: 3
        ",
    )?;

    assert_eq!(manifest.name, "web");

    let hosts = manifest
        .spec
        .dig(&["hosts"])
        .and_then(Value::as_sequence)
        .context("missing hosts")?;

    assert_eq!(hosts.len(), 2);

    for host in hosts {
        let host = host.as_mapping().context("host is not a mapping")?;
        assert!(host.dig_str(&["address"]).starts_with("10.0.0."));
    }

    assert_eq!(manifest.spec.dig(&["options", "retries"]), Some(&Value::from(3)));

    let manifest: Manifest = serde_json::from_str(r#"{"name": "empty"}"#)?;
    assert!(manifest.spec.is_empty());
    Ok(())
}

#[test]
fn json_and_yaml_agree() -> Result<()> {
    let json = dig::from_json_str(
        r#"{"foo": {"bar": [1, 2.5, "three", null, {"four": true}]}}"#,
    )?;

    let yaml = dig::from_yaml_str(
        r#"
        foo:
          bar:
            - 1
            - 2.5
            - three
            - null
            - four: true
        "#,
    )?;

    assert_eq!(json, yaml);
    Ok(())
}

#[test]
fn layered_documents() -> Result<()> {
    let mut config = dig::from_yaml_str(
        r"
        server:
          port: 8080
          host: localhost
        features: [a, b]
        ",
    )?;

    let local = dig::from_json_str(
        r#"{"server": {"port": 9000, "host": null}, "features": ["c"], "debug": true}"#,
    )?;

    config.merge(&local, MergeOptions::new());
    assert_eq!(config.dig(&["server", "port"]), Some(&Value::from(8080)));
    assert_eq!(config.dig_str(&["server", "host"]), "localhost");
    assert_eq!(config.dig(&["debug"]), Some(&Value::from(true)));

    config.merge(&local, MergeOptions::new().with_overwrite().with_nillify());
    assert_eq!(config.dig(&["server", "port"]), Some(&Value::from(9000)));
    assert_eq!(config.dig(&["server", "host"]), None);
    assert_eq!(config.dig(&["features"]), Some(&Value::from(vec!["c"])));
    Ok(())
}

#[test]
fn edit_and_write_back() -> Result<()> {
    let mut m = dig::from_yaml_str("i18n:\n  hello:\n    se: Hejsan\n")?;

    m.dig_mapping(&["i18n", "hello"])["fi"] = "Moi".into();

    let output = serde_yaml::to_string(&m)?;
    let reparsed = dig::from_yaml_str(&output)?;

    assert_eq!(reparsed.dig_str(&["i18n", "hello", "fi"]), "Moi");
    assert_eq!(reparsed.dig_str(&["i18n", "hello", "se"]), "Hejsan");
    Ok(())
}

#[test]
fn malformed_input() {
    let error = dig::from_yaml_str("foo: [unterminated").unwrap_err();
    assert_eq!(error.to_string(), "malformed YAML input");

    let error = dig::from_json_str("{\"foo\": }").unwrap_err();
    assert_eq!(error.to_string(), "malformed JSON input");
    assert_eq!(error.line(), Some(1));
}
