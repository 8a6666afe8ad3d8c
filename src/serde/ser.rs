use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{Mapping, Value};

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(value) => serializer.serialize_bool(*value),
            Value::Integer(value) => serializer.serialize_i64(*value),
            Value::Float(value) => serializer.serialize_f64(*value),
            Value::String(value) => serializer.serialize_str(value),
            Value::Sequence(values) => serializer.collect_seq(values),
            Value::Mapping(mapping) => mapping.serialize(serializer),
        }
    }
}

/// Keys are serialized in sorted order.
impl Serialize for Mapping {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut items = self.iter().collect::<Vec<_>>();
        items.sort_by(|a, b| a.0.cmp(b.0));

        let mut map = serializer.serialize_map(Some(items.len()))?;

        for (key, value) in items {
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}
