use serde::Serialize;
use serde_json::Value;

/// Minimal author projection exposed to the UI footer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: Value,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl Author {
    /// Reads an entry of the content service's `data` array. Attributes may be
    /// flat or nested under `attributes` depending on the content API version.
    pub fn from_entry(entry: &Value) -> Self {
        let attributes = entry.get("attributes").unwrap_or(entry);
        let text = |key: &str| {
            attributes
                .get(key)
                .or_else(|| entry.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };
        Self {
            id: entry.get("id").cloned().unwrap_or(Value::Null),
            name: text("name"),
            email: text("email"),
        }
    }
}

/// Extracts the author list from a content payload, or `None` when `data` is
/// not an array.
pub fn authors_from_payload(payload: &Value) -> Option<Vec<Author>> {
    payload
        .get("data")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(Author::from_entry).collect())
}
