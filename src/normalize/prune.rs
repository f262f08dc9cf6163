//! Recursive removal of null-only substructures

use serde_json::{Map, Value};

/// Drops every null leaf, then every object or array left empty by that.
///
/// Array slots are positional, so a pruned element stays behind as `null`
/// and only an array with no surviving element is removed. Returns `None`
/// when nothing survives, so callers can remove the field from its parent.
pub fn remove_null(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Object(map) => {
            let pruned: Map<String, Value> = map
                .into_iter()
                .filter_map(|(key, val)| remove_null(val).map(|val| (key, val)))
                .collect();
            if pruned.is_empty() {
                None
            } else {
                Some(Value::Object(pruned))
            }
        }
        Value::Array(entries) => {
            let pruned: Vec<Option<Value>> = entries.into_iter().map(remove_null).collect();
            if pruned.iter().all(Option::is_none) {
                None
            } else {
                Some(Value::Array(
                    pruned
                        .into_iter()
                        .map(|entry| entry.unwrap_or(Value::Null))
                        .collect(),
                ))
            }
        }
        scalar => Some(scalar),
    }
}
