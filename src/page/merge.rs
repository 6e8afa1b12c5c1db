//! Recursive JSON object merge.

use serde_json::Value as JsonValue;

use super::JsonMap;

/// Merge `source` into `target`, last write wins per key.
///
/// When both sides hold an object under the same key the objects are merged
/// recursively; any other value in `source` replaces the one in `target`.
pub fn deep_merge(target: &mut JsonMap, source: &JsonMap) {
    for (key, incoming) in source {
        match (target.get_mut(key), incoming) {
            (Some(JsonValue::Object(existing)), JsonValue::Object(nested)) => {
                deep_merge(existing, nested);
            }
            _ => {
                target.insert(key.clone(), incoming.clone());
            }
        }
    }
}
