use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look for well-known result fields in order of priority,
/// then fall back to the first field in the result object.
pub fn print_minimal(value: &Value) {
    // Stress output nests the headline figures under result.summary
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .and_then(|r| r.as_object())
        .and_then(|r| r.get("summary"))
        .or_else(|| value.as_object().and_then(|m| m.get("result")))
        .unwrap_or(value);

    // Priority list of key output fields
    let priority_keys = [
        "capitalImpact",
        "assetQualityImpact",
        "liquidityImpact",
        "isValid",
        "car",
        "roa",
    ];

    if let Value::Object(map) = result_obj {
        // Try priority keys first (skip null values)
        for key in &priority_keys {
            if let Some(val) = lookup(map, key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        // Fall back to first field
        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    // Not an object, just print directly
    println!("{}", format_minimal(result_obj));
}

/// Look up a key at the top level or one level down (metrics output keeps
/// its ratios under "performance" and "risk").
fn lookup<'a>(map: &'a serde_json::Map<String, Value>, key: &str) -> Option<&'a Value> {
    if let Some(val) = map.get(key) {
        return Some(val);
    }
    map.values()
        .filter_map(Value::as_object)
        .find_map(|inner| inner.get(key))
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
