//! Reading a previously persisted source set back out of a run snapshot

use serde_json::Value;
use tracing::warn;

use crate::SourceSet;

/// Key under which a run's input snapshot stores its source set
pub const SOURCE_SET_KEY: &str = "sourceSet";

/// Extract a cached source set from a run's input snapshot
///
/// Returns `None` when the snapshot has no source set, when `urls`,
/// `discoveredAt` or `rawCounts` is missing, or when the stored value no
/// longer matches the current shape. `None` means the caller must rediscover.
///
/// # Examples
///
/// ```
/// use qualifai_discovery::extract_source_set;
/// use serde_json::json;
///
/// assert!(extract_source_set(&json!(null)).is_none());
/// assert!(extract_source_set(&json!({ "sourceSet": { "urls": [] } })).is_none());
/// ```
pub fn extract_source_set(snapshot: &Value) -> Option<SourceSet> {
    let payload = snapshot.get(SOURCE_SET_KEY)?;
    if !is_truthy(payload) {
        return None;
    }

    let has_urls = payload.get("urls").is_some_and(Value::is_array);
    let has_discovered_at = payload.get("discoveredAt").is_some_and(is_truthy);
    let has_raw_counts = payload.get("rawCounts").is_some_and(is_truthy);
    if !(has_urls && has_discovered_at && has_raw_counts) {
        return None;
    }

    match serde_json::from_value(payload.clone()) {
        Ok(source_set) => Some(source_set),
        Err(e) => {
            warn!("Ignoring cached source set with unexpected shape: {}", e);
            None
        }
    }
}

/// Wrap a source set in the snapshot shape `extract_source_set` reads
pub fn source_set_snapshot(source_set: &SourceSet) -> Result<Value, serde_json::Error> {
    let mut snapshot = serde_json::Map::new();
    snapshot.insert(SOURCE_SET_KEY.to_string(), serde_json::to_value(source_set)?);
    Ok(Value::Object(snapshot))
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
