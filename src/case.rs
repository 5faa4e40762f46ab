//! Deep snake_case to camelCase key conversion for JSON values.

use serde_json::Value;

/// Convert every object key in `value` from snake_case to camelCase.
///
/// Applied recursively to nested objects and array elements; scalars
/// pass through unchanged.
pub fn to_camel_case(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camel_case_key(&key), to_camel_case(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(to_camel_case).collect()),
        other => other,
    }
}

fn camel_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper_next = false;
    for ch in key.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_converts_keys_recursively() {
        let value = json!({
            "config": { "viewer_url": "test" },
            "live_config": { "viewer_url": "test" },
            "video_overlay": { "viewer_url": "test" },
            "panel": { "viewer_url": "test", "height": 300 },
        });

        let converted = to_camel_case(value);
        assert_eq!(converted["config"]["viewerUrl"], "test");
        assert_eq!(converted["liveConfig"]["viewerUrl"], "test");
        assert_eq!(converted["videoOverlay"]["viewerUrl"], "test");
        assert_eq!(converted["panel"]["viewerUrl"], "test");
        assert_eq!(converted["panel"]["height"], 300);
    }

    #[test]
    fn test_arrays_and_scalars_pass_through() {
        let value = json!({
            "emote_sets": [{ "set_id": "1" }, { "set_id": "2" }],
            "count": 2,
        });

        let converted = to_camel_case(value);
        assert_eq!(converted["emoteSets"][0]["setId"], "1");
        assert_eq!(converted["emoteSets"][1]["setId"], "2");
        assert_eq!(converted["count"], 2);

        assert_eq!(to_camel_case(json!("plain")), json!("plain"));
        assert_eq!(to_camel_case(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_keys_without_underscores_unchanged() {
        let value = json!({ "alreadyCamel": 1, "single": 2 });
        let converted = to_camel_case(value);
        assert_eq!(converted["alreadyCamel"], 1);
        assert_eq!(converted["single"], 2);
    }
}
