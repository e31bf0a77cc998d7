use crate::domain::model::{CountryRecord, MISSING};
use serde_json::Value;

/// Flattens raw country entries into canonical records.
///
/// One record per entry, input order preserved. Field resolution never
/// fails: anything missing or ill-typed degrades to its own sentinel, so a
/// single bad entry cannot invalidate the batch. Pure function of its
/// input.
pub fn normalize(entries: &[Value]) -> Vec<CountryRecord> {
    entries.iter().map(normalize_entry).collect()
}

fn normalize_entry(entry: &Value) -> CountryRecord {
    let Some(obj) = entry.as_object() else {
        tracing::warn!("malformed country entry, emitting sentinel record");
        return CountryRecord::sentinel();
    };

    CountryRecord {
        name: obj
            .get("name")
            .and_then(|name| name.get("common"))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .unwrap_or(MISSING)
            .to_string(),
        population: obj.get("population").and_then(Value::as_u64).unwrap_or(0),
        area: obj
            .get("area")
            .and_then(Value::as_f64)
            .filter(|area| area.is_finite() && *area >= 0.0)
            .unwrap_or(0.0),
        region: string_field(obj.get("region")),
        subregion: string_field(obj.get("subregion")),
        capital: first_capital(obj.get("capital")),
        languages: join_languages(obj.get("languages")),
        currencies: join_currencies(obj.get("currencies")),
    }
}

fn string_field(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or(MISSING)
        .to_string()
}

// First element of the capital list, if there is one.
fn first_capital(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_array)
        .and_then(|list| list.first())
        .and_then(Value::as_str)
        .unwrap_or(MISSING)
        .to_string()
}

// Display names joined in source document order.
fn join_languages(value: Option<&Value>) -> String {
    match value.and_then(Value::as_object) {
        Some(map) if !map.is_empty() => map
            .values()
            .map(|name| name.as_str().unwrap_or(MISSING))
            .collect::<Vec<_>>()
            .join(", "),
        _ => MISSING.to_string(),
    }
}

// Each currency descriptor contributes its display name, or the sentinel
// when the descriptor has none.
fn join_currencies(value: Option<&Value>) -> String {
    match value.and_then(Value::as_object) {
        Some(map) if !map.is_empty() => map
            .values()
            .map(|descriptor| {
                descriptor
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or(MISSING)
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => MISSING.to_string(),
    }
}
