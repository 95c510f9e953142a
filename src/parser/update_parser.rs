// Bot API response parsing
use crate::model::CallResult;
use serde_json::Value;

/// Walks `path` ("result.-1.message.text") through a parsed document.
///
/// Object segments are keys; array segments are indices, negative ones
/// counting back from the end. Any mismatch along the way yields `None`.
pub fn json_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return Some(value);
    }
    path.split('.').try_fold(value, |current, segment| match current {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => {
            let index: i64 = segment.parse().ok()?;
            let index = if index < 0 {
                items.len().checked_sub(index.unsigned_abs() as usize)?
            } else {
                index as usize
            };
            items.get(index)
        }
        _ => None,
    })
}

fn as_integer(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f as i64))
}

/// Pulls `update_id` and `message.text` from the most recent update.
pub fn extract_update(doc: &Value) -> CallResult {
    let mut result = CallResult::default();
    let Some(update) = json_path(doc, "result.-1").filter(|u| u.is_object()) else {
        return result;
    };

    if let Some(id) = json_path(update, "update_id").and_then(as_integer) {
        result.update_id = id;
    }
    if let Some(text) = json_path(update, "message.text").and_then(Value::as_str) {
        result.text = text.to_string();
    }
    result
}

/// `description` of an `{"ok": false}` reply, if that is what came back.
pub fn api_error(doc: &Value) -> Option<String> {
    if json_path(doc, "ok").and_then(Value::as_bool) != Some(false) {
        return None;
    }
    let description = json_path(doc, "description")
        .and_then(Value::as_str)
        .unwrap_or("no description");
    Some(description.to_string())
}
