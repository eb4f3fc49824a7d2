use serde::Serialize;
use serde_json::Value;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Hashes serializable data into an i64 using CBOR serialization and XxHash64.
///
/// This provides a stable hash across different runs and systems by:
/// - Serializing the data to CBOR format (deterministic binary representation)
/// - Using XxHash64 with a fixed seed (0) for consistent hashing
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize data for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}

/// Deep key-sort of a JSON value: every object, at every nesting level
/// (including objects inside arrays), is rebuilt with its keys in ascending
/// order. Non-container values are left untouched.
///
/// Activity properties pass through here before persistence so diffs
/// serialize identically regardless of the order mutations were applied in.
pub fn ksort_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            for (_, child) in entries.iter_mut() {
                ksort_recursive(child);
            }
            *map = entries.into_iter().collect();
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                ksort_recursive(item);
            }
        }
        _ => {}
    }
}

/// Converts a snake_case type tag into a headline: `department` →
/// `Department`, `job_position` → `Job Position`.
pub fn headline_case(tag: &str) -> String {
    tag.split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
