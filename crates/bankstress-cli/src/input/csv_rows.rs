use serde_json::{Map, Number, Value};

/// Parse headered CSV text into untyped row mappings with inferred field
/// types: numeric strings become JSON numbers, everything else stays a
/// string. The engine's validator decides what is acceptable.
pub fn parse_rows(text: &str) -> Result<Vec<Value>, Box<dyn std::error::Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in reader.records() {
        let record = result?;
        let mut row = Map::new();
        for (header, field) in headers.iter().zip(record.iter()) {
            row.insert(header.to_string(), infer_value(field));
        }
        rows.push(Value::Object(row));
    }

    Ok(rows)
}

fn infer_value(field: &str) -> Value {
    if let Ok(i) = field.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(f) = field.parse::<f64>() {
        if f.is_finite() {
            if let Some(n) = Number::from_f64(f) {
                return Value::Number(n);
            }
        }
    }
    Value::String(field.to_string())
}
